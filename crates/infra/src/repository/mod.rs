//! Storage abstractions for the catalog and for placed orders.
//!
//! Stores report absence with `Option`/`bool`; turning a missing record into a
//! business error is the order workflow's job.

pub mod catalog;
pub mod orders;

pub use catalog::{InMemoryProductRepository, ProductRepository, default_catalog};
pub use orders::{InMemoryOrderRepository, OrderRepository};

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// The guarded tables are updated with single inserts, so a panic elsewhere
// cannot leave them half-written; recovering the guard is sound.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
