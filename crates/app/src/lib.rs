//! Order desk application: the order workflow, its wiring, and the demo run.

pub mod container;
pub mod demo;
pub mod services;

pub use container::{AppOrderService, DependencyContainer};
pub use services::OrderService;
