//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stock product entity
///
/// Immutable once constructed; `id` is the identity used by lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub cost: Decimal,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
        }
    }
}
