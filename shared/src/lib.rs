//! Shared types for the front-desk console
//!
//! Value types (menu items, products, employee accounts) and the order
//! lifecycle, used by the application crate and its tests.

pub mod models;
pub mod order;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{EmployeeAccount, MenuItem, Product};
pub use order::{Order, OrderError, PrepStage, StatusFlag};
