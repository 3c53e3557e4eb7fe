//! Dependency wiring.

use orderdesk_infra::{
    AppConfig, EmailNotificationService, InMemoryOrderRepository, InMemoryProductRepository,
    NotificationChannel, NotificationService, SmsNotificationService,
};

use crate::services::OrderService;

/// Order workflow as assembled by [`DependencyContainer`].
pub type AppOrderService = OrderService<
    InMemoryOrderRepository,
    InMemoryProductRepository,
    Box<dyn NotificationService>,
>;

/// Builds concrete stores and the configured notification channel.
///
/// Every accessor returns a fresh instance; `order_service` wires a new set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyContainer {
    config: AppConfig,
}

impl DependencyContainer {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn order_repository(&self) -> InMemoryOrderRepository {
        InMemoryOrderRepository::new()
    }

    /// Catalog seeded with the default products.
    pub fn product_repository(&self) -> InMemoryProductRepository {
        InMemoryProductRepository::seeded()
    }

    pub fn notification_service(&self) -> Box<dyn NotificationService> {
        match self.config.notification_channel {
            NotificationChannel::Email => Box::new(EmailNotificationService::new()),
            NotificationChannel::Sms => Box::new(SmsNotificationService::new()),
        }
    }

    pub fn order_service(&self) -> AppOrderService {
        OrderService::new(
            self.order_repository(),
            self.product_repository(),
            self.notification_service(),
        )
    }
}
