//! Application configuration
//!
//! All settings come from environment variables with defaults:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | DATA_DIR | . | Directory holding the record files and audit log |
//! | LOG_LEVEL | info | Tracing level filter |
//! | LOG_DIR | (unset) | Optional directory for daily-rolling log files |
//! | GUEST_NAME | Walk-in guest | Name of the session guest |

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory with menu.txt, product_list.txt, employee_records.txt.
    pub data_dir: String,
    pub log_level: String,
    /// When set, logs also go to daily-rolling files in this directory.
    pub log_dir: Option<String>,
    pub guest_name: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| ".".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            guest_name: std::env::var("GUEST_NAME").unwrap_or_else(|_| "Walk-in guest".into()),
        }
    }

    /// Override the data directory, keeping everything else from the
    /// environment. Used by tests.
    pub fn with_overrides(data_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
