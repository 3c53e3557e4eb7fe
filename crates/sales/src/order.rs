use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderdesk_core::{Money, OrderId, ProductId};
use orderdesk_products::Product;

/// Order status.
///
/// Orders are created `Pending`; nothing moves them out of it yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OrderStatus {
    #[default]
    Pending,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order item: product snapshot and requested quantity.
///
/// Name and unit price are captured when the item is built, so later catalog
/// changes never alter a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    product_id: ProductId,
    product_name: String,
    unit_price: Money,
    quantity: u32,
}

impl OrderItem {
    pub fn new(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id_typed(),
            product_name: product.name().to_string(),
            unit_price: product.unit_price(),
            quantity,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn subtotal(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// Customer order.
///
/// Content is fixed at construction. The identifier starts empty and is set
/// exactly once, by the order store on first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: Option<OrderId>,
    customer_name: String,
    items: Vec<OrderItem>,
    status: OrderStatus,
    created_at: DateTime<Utc>,
}

impl Order {
    /// New unsaved order stamped with the current time.
    pub fn new(customer_name: impl Into<String>, items: Vec<OrderItem>) -> Self {
        Self::new_at(customer_name, items, Utc::now())
    }

    /// New unsaved order with an explicit creation timestamp.
    pub fn new_at(
        customer_name: impl Into<String>,
        items: Vec<OrderItem>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            customer_name: customer_name.into(),
            items,
            status: OrderStatus::default(),
            created_at,
        }
    }

    pub fn id(&self) -> Option<OrderId> {
        self.id
    }

    /// Returns the identifier, assigning one from `next_id` if the order has none.
    ///
    /// `next_id` is only called when an identifier is actually needed.
    pub fn id_or_assign(&mut self, next_id: impl FnOnce() -> OrderId) -> OrderId {
        *self.id.get_or_insert_with(next_id)
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn total(&self) -> Money {
        self.items.iter().map(OrderItem::subtotal).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, name: &str, cents: u64, stock: u32) -> Product {
        Product::new(ProductId::new(id), name, Money::from_cents(cents), stock)
    }

    fn sample_items() -> Vec<OrderItem> {
        vec![
            OrderItem::new(&product(1, "Gaming Laptop", 120_000, 5), 1),
            OrderItem::new(&product(2, "Wireless Mouse", 4_599, 20), 2),
            OrderItem::new(&product(4, "24\" Monitor", 29_999, 8), 1),
        ]
    }

    #[test]
    fn subtotal_is_price_times_quantity() {
        let item = OrderItem::new(&product(2, "Wireless Mouse", 4_599, 20), 2);
        assert_eq!(item.subtotal(), Money::from_cents(9_198));
        assert_eq!(item.product_name(), "Wireless Mouse");
        assert_eq!(item.product_id(), ProductId::new(2));
    }

    #[test]
    fn total_sums_item_subtotals() {
        let order = Order::new("María González", sample_items());
        assert_eq!(order.total(), Money::from_cents(159_197));
    }

    #[test]
    fn empty_order_totals_zero() {
        let order = Order::new("Nobody", Vec::new());
        assert_eq!(order.total(), Money::ZERO);
    }

    #[test]
    fn new_order_is_unsaved_and_pending() {
        let order = Order::new("María González", sample_items());
        assert_eq!(order.id(), None);
        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.items().len(), 3);
    }

    #[test]
    fn items_keep_insertion_order() {
        let order = Order::new("María González", sample_items());
        let ids: Vec<u64> = order.items().iter().map(|i| i.product_id().get()).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn item_snapshot_ignores_later_catalog_changes() {
        let mut laptop = product(1, "Gaming Laptop", 120_000, 5);
        let item = OrderItem::new(&laptop, 1);
        laptop.set_stock(0);
        assert_eq!(item.unit_price(), Money::from_cents(120_000));
        assert_eq!(item.quantity(), 1);
    }

    #[test]
    fn identifier_is_assigned_once() {
        let mut order = Order::new("María González", sample_items());
        assert_eq!(order.id_or_assign(|| OrderId::new(1)), OrderId::new(1));

        let mut called = false;
        let id = order.id_or_assign(|| {
            called = true;
            OrderId::new(2)
        });
        assert_eq!(id, OrderId::new(1));
        assert!(!called);
    }

    #[test]
    fn explicit_timestamp_is_kept() {
        let at = DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let order = Order::new_at("María González", Vec::new(), at);
        assert_eq!(order.created_at(), at);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&OrderStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(OrderStatus::Pending.to_string(), "pending");
    }
}
