//! Order lifecycle
//!
//! An order holds an append-only list of menu items plus its progress
//! through the kitchen. Progress is monotonic: payment is an independent
//! flag (an unpaid order may still be in preparation), while the kitchen
//! side is a single ordered stage. No operation ever moves state backwards,
//! and skipping a stage is rejected instead of silently applied.

use crate::models::MenuItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kitchen-side stage of an order, strictly ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrepStage {
    #[default]
    Created,
    InProgress,
    Ready,
    Delivered,
}

/// Non-exclusive status flags, in the fixed reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusFlag {
    Paid,
    InProgress,
    Ready,
    Delivered,
}

impl StatusFlag {
    /// Guest-facing status line for the tracking report.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Paid => "paid and sent to the kitchen",
            Self::InProgress => "being prepared",
            Self::Ready => "ready for pickup",
            Self::Delivered => "delivered",
        }
    }
}

/// Order lifecycle errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("cannot move order from {from:?} to {to:?}")]
    OutOfOrder { from: PrepStage, to: PrepStage },
}

/// A guest order: line items plus lifecycle state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Order {
    items: Vec<MenuItem>,
    paid: bool,
    stage: PrepStage,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line item. Duplicates are allowed; items are never removed.
    pub fn add_item(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Sum of the line item prices.
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Record payment. Payment hands the order straight to the kitchen, so
    /// the stage advances to at least `InProgress` in the same call.
    /// Idempotent.
    pub fn mark_paid(&mut self) {
        self.paid = true;
        self.advance_to(PrepStage::InProgress);
    }

    /// Start preparation. Idempotent, legal even for an unpaid order.
    pub fn mark_in_progress(&mut self) {
        self.advance_to(PrepStage::InProgress);
    }

    /// Preparation finished. Rejected unless the order is already in
    /// progress; idempotent once ready.
    pub fn mark_ready(&mut self) -> Result<(), OrderError> {
        if self.stage < PrepStage::InProgress {
            return Err(OrderError::OutOfOrder {
                from: self.stage,
                to: PrepStage::Ready,
            });
        }
        self.advance_to(PrepStage::Ready);
        Ok(())
    }

    /// Handed to the guest. Rejected unless the order is ready; idempotent
    /// once delivered.
    pub fn mark_delivered(&mut self) -> Result<(), OrderError> {
        if self.stage < PrepStage::Ready {
            return Err(OrderError::OutOfOrder {
                from: self.stage,
                to: PrepStage::Delivered,
            });
        }
        self.advance_to(PrepStage::Delivered);
        Ok(())
    }

    pub fn is_paid(&self) -> bool {
        self.paid
    }

    pub fn is_in_progress(&self) -> bool {
        self.stage >= PrepStage::InProgress
    }

    pub fn is_ready(&self) -> bool {
        self.stage >= PrepStage::Ready
    }

    pub fn is_delivered(&self) -> bool {
        self.stage >= PrepStage::Delivered
    }

    pub fn stage(&self) -> PrepStage {
        self.stage
    }

    /// All true flags, in the fixed order Paid, InProgress, Ready,
    /// Delivered. Not mutually exclusive: a delivered paid order reports
    /// all four lines.
    pub fn status_flags(&self) -> Vec<StatusFlag> {
        let mut flags = Vec::with_capacity(4);
        if self.is_paid() {
            flags.push(StatusFlag::Paid);
        }
        if self.is_in_progress() {
            flags.push(StatusFlag::InProgress);
        }
        if self.is_ready() {
            flags.push(StatusFlag::Ready);
        }
        if self.is_delivered() {
            flags.push(StatusFlag::Delivered);
        }
        flags
    }

    fn advance_to(&mut self, stage: PrepStage) {
        if self.stage < stage {
            self.stage = stage;
        }
    }
}
