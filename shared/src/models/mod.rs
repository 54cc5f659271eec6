//! Data models
//!
//! Shared between the console frontend and the record store.
//! Identity: `Product` by `id`, `MenuItem` by `name`, `EmployeeAccount`
//! by `username`.

pub mod employee;
pub mod menu_item;
pub mod product;

// Re-exports
pub use employee::*;
pub use menu_item::*;
pub use product::*;
