//! Flat-file record store
//!
//! One file per record kind inside the configured data directory:
//!
//! | File | Record | Lines |
//! |------|--------|-------|
//! | `menu.txt` | menu item | name / ingredients / price / prep minutes |
//! | `product_list.txt` | product | id / name / cost |
//! | `employee_records.txt` | employee account | username / password |
//!
//! Loads are infallible: a missing or unreadable file yields an empty
//! result with a warning, and malformed records are skipped one block at a
//! time (see [`codec`]). Saves overwrite the destination file completely.

pub mod codec;

pub use codec::{Record, RecordError};

use shared::models::{EmployeeAccount, MenuItem, Product};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MENU_FILE: &str = "menu.txt";
pub const PRODUCT_FILE: &str = "product_list.txt";
pub const EMPLOYEE_FILE: &str = "employee_records.txt";

/// Store errors (save path only; loads degrade to empty results).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Outcome of loading one record file.
#[derive(Debug)]
pub struct LoadReport<T> {
    pub records: Vec<T>,
    /// Blocks discarded because of parse failures or truncation.
    pub skipped: usize,
}

impl<T> Default for LoadReport<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: 0,
        }
    }
}

/// Owns the data directory and the three well-known record files.
#[derive(Debug, Clone)]
pub struct RecordStore {
    data_dir: PathBuf,
}

impl RecordStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn load_menu(&self) -> LoadReport<MenuItem> {
        self.load(MENU_FILE)
    }

    pub fn save_menu(&self, items: &[MenuItem]) -> StoreResult<()> {
        self.save(MENU_FILE, items)
    }

    pub fn load_products(&self) -> LoadReport<Product> {
        self.load(PRODUCT_FILE)
    }

    pub fn save_products(&self, products: &[Product]) -> StoreResult<()> {
        self.save(PRODUCT_FILE, products)
    }

    pub fn load_accounts(&self) -> LoadReport<EmployeeAccount> {
        self.load(EMPLOYEE_FILE)
    }

    /// Overwrites the account file; callers pass accounts already in key
    /// order so the file order is deterministic.
    pub fn save_accounts(&self, accounts: &[EmployeeAccount]) -> StoreResult<()> {
        self.save(EMPLOYEE_FILE, accounts)
    }

    fn load<T: Record>(&self, file: &str) -> LoadReport<T> {
        let path = self.data_dir.join(file);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(kind = T::KIND, path = %path.display(), error = %e,
                    "record file unavailable, starting empty");
                return LoadReport::default();
            }
        };

        let (records, skipped) = codec::decode_blocks::<T>(&text);
        if records.is_empty() {
            tracing::warn!(kind = T::KIND, path = %path.display(), "no records loaded");
        } else {
            tracing::info!(kind = T::KIND, count = records.len(), skipped, "records loaded");
        }
        LoadReport { records, skipped }
    }

    fn save<T: Record>(&self, file: &str, records: &[T]) -> StoreResult<()> {
        fs::create_dir_all(&self.data_dir)?;
        let path = self.data_dir.join(file);
        fs::write(&path, codec::encode_records(records))?;
        tracing::info!(kind = T::KIND, count = records.len(), path = %path.display(),
            "records saved");
        Ok(())
    }
}
