//! Products domain module.
//!
//! This crate contains the catalog product entity, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod product;

pub use product::Product;
pub use orderdesk_core::ProductId;
