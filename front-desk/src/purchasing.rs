//! Stock desk - supply purchase requests
//!
//! A purchase request buys `quantity` units of a catalog product out of the
//! restaurant balance. Unknown ids and insufficient funds are rejected
//! without touching the ledger. Stock quantities themselves are not
//! tracked.

use crate::accounting::Ledger;
use crate::catalog::Catalog;
use rust_decimal::Decimal;
use thiserror::Error;

/// Purchase request errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("unknown product id: {0}")]
    UnknownProduct(String),

    #[error("insufficient funds: need {needed}, balance is {available}")]
    InsufficientFunds { needed: Decimal, available: Decimal },
}

pub type PurchaseResult<T> = Result<T, PurchaseError>;

/// Fulfilled purchase request summary.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRequest {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub total_cost: Decimal,
}

/// Price the request against the catalog and debit the ledger.
pub fn request_products(
    catalog: &Catalog,
    ledger: &mut Ledger,
    product_id: &str,
    quantity: u32,
) -> PurchaseResult<PurchaseRequest> {
    let product = catalog
        .product_by_id(product_id)
        .ok_or_else(|| PurchaseError::UnknownProduct(product_id.to_string()))?;

    let total_cost = product.cost * Decimal::from(quantity);
    if total_cost > ledger.balance() {
        return Err(PurchaseError::InsufficientFunds {
            needed: total_cost,
            available: ledger.balance(),
        });
    }

    ledger.debit(total_cost);
    tracing::info!(product_id, quantity, %total_cost, "purchase request fulfilled");

    Ok(PurchaseRequest {
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        quantity,
        total_cost,
    })
}
