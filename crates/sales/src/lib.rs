//! Sales orders domain module.
//!
//! This crate contains the order model (items, totals, status), implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod order;

pub use order::{Order, OrderItem, OrderStatus};
pub use orderdesk_core::OrderId;
