//! Infrastructure layer: in-memory stores, notification channels, config.

pub mod config;
pub mod notifications;
pub mod repository;

pub use config::{AppConfig, ConfigError, NotificationChannel};
pub use notifications::{EmailNotificationService, NotificationService, SmsNotificationService};
pub use repository::{
    InMemoryOrderRepository, InMemoryProductRepository, OrderRepository, ProductRepository,
};
