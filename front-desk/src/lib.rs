//! front-desk - single-desk restaurant management console
//!
//! A line-oriented console app tracking a dish menu, a product list,
//! employee accounts, guest orders and a simple restaurant balance, with
//! flat-file persistence between runs.
//!
//! # Module structure
//!
//! ```text
//! front-desk/src/
//! ├── store/        # flat-file record codec and store
//! ├── catalog       # menu map + product list
//! ├── accounts      # employee directory + access gate
//! ├── accounting    # balance from delivered orders
//! ├── purchasing    # stock desk supply requests
//! ├── guest         # guest session and order history
//! ├── audit         # JSON-lines audit trail
//! ├── cli/          # interactive prompt loop
//! ├── config        # env-driven configuration
//! └── utils/        # logging
//! ```

pub mod accounting;
pub mod accounts;
pub mod audit;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod guest;
pub mod purchasing;
pub mod state;
pub mod store;
pub mod utils;

// Re-export public types
pub use accounting::{Ledger, compute_balance};
pub use accounts::AccountDirectory;
pub use catalog::Catalog;
pub use config::Config;
pub use state::{AppState, StateError};
pub use store::RecordStore;

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
          __
 \ ______/ V`-,
  }}        /~~
 /_)^ --,r'
|b      |b
   front-desk
    "#
    );
}
