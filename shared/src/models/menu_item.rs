//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dish on the menu
///
/// `name` is the identity: inserting a second item with the same name
/// replaces the first one in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    /// Free-text ingredient list, one persisted line
    pub ingredients: String,
    pub price: Decimal,
    /// Preparation time in minutes
    pub prep_minutes: u32,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        ingredients: impl Into<String>,
        price: Decimal,
        prep_minutes: u32,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
            price,
            prep_minutes,
        }
    }
}
