//! Restaurant balance
//!
//! The ledger holds one running balance. The accountant recomputes it from
//! scratch over the full order history (delivered orders only); the stock
//! desk spends from it when ordering supplies.

use rust_decimal::Decimal;
use shared::order::Order;

/// Income from delivered orders: the sum of every item price in every
/// order whose delivered flag is set. Undelivered orders contribute zero.
pub fn compute_balance(orders: &[Order]) -> Decimal {
    orders
        .iter()
        .filter(|order| order.is_delivered())
        .map(|order| order.subtotal())
        .sum()
}

#[derive(Debug, Default)]
pub struct Ledger {
    balance: Decimal,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Replace the balance with the income derived from `orders`.
    /// Not cumulative: calling twice with the same orders yields the same
    /// balance.
    pub fn recompute(&mut self, orders: &[Order]) -> Decimal {
        self.balance = compute_balance(orders);
        self.balance
    }

    /// Spend from the balance. Callers check sufficiency first.
    pub fn debit(&mut self, amount: Decimal) {
        self.balance -= amount;
    }
}
