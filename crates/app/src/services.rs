//! Order workflow.

use orderdesk_core::{DomainError, DomainResult, Money, OrderId, ProductId};
use orderdesk_infra::{NotificationService, OrderRepository, ProductRepository};
use orderdesk_products::Product;
use orderdesk_sales::{Order, OrderItem};

/// Creates, fetches and lists orders on top of injected stores and a
/// confirmation channel.
///
/// ## Stock handling
///
/// `create_order` checks and decrements stock one item at a time, in request
/// order. A failure on a later item leaves the decrements of earlier items in
/// place; there is no rollback.
///
/// ## Concurrency
///
/// Each store call is individually synchronized, but the stock check and the
/// decrement are two separate calls. Concurrent `create_order` calls on the
/// same catalog can therefore oversell; callers must serialize them.
pub struct OrderService<O, P, N> {
    orders: O,
    products: P,
    notifier: N,
}

impl<O, P, N> OrderService<O, P, N>
where
    O: OrderRepository,
    P: ProductRepository,
    N: NotificationService,
{
    pub fn new(orders: O, products: P, notifier: N) -> Self {
        tracing::debug!("order service initialized");
        Self {
            orders,
            products,
            notifier,
        }
    }

    /// Place an order for `customer_name`.
    ///
    /// `items` is a list of `(product, quantity)` requests, processed in order.
    /// The first unknown product, zero quantity, short stock, or an amount too
    /// large to represent aborts the call.
    pub fn create_order(
        &self,
        customer_name: impl Into<String>,
        items: impl IntoIterator<Item = (ProductId, u32)>,
    ) -> DomainResult<Order> {
        let customer_name = customer_name.into();
        tracing::info!(customer = %customer_name, "creating order");

        let mut order_items = Vec::new();
        let mut total = Money::ZERO;
        for (product_id, quantity) in items {
            let product = self.reserve(product_id, quantity, &mut total).inspect_err(|e| {
                tracing::warn!(customer = %customer_name, error = %e, "order rejected");
            })?;
            let item = OrderItem::new(&product, quantity);
            tracing::debug!(
                product_id = %product_id,
                quantity,
                subtotal = %item.subtotal(),
                "item added"
            );
            order_items.push(item);
        }

        let mut order = Order::new(customer_name, order_items);
        let order_id = self.orders.save(&mut order);

        if !self.notifier.send_order_confirmation(&order) {
            tracing::warn!(order_id = %order_id, "order confirmation was not delivered");
        }

        tracing::info!(order_id = %order_id, total = %order.total(), "order created");
        Ok(order)
    }

    /// Validate one requested item and take its quantity out of stock.
    ///
    /// `total` is the running order total; it is advanced by the item's
    /// subtotal only once every check has passed. Returns the product as it
    /// was before the decrement.
    fn reserve(
        &self,
        product_id: ProductId,
        quantity: u32,
        total: &mut Money,
    ) -> DomainResult<Product> {
        if quantity == 0 {
            return Err(DomainError::validation(format!(
                "quantity for product {product_id} must be positive"
            )));
        }

        let product = self
            .products
            .find_by_id(product_id)
            .ok_or(DomainError::ProductNotFound(product_id))?;

        if !product.has_stock_for(quantity) {
            return Err(DomainError::insufficient_stock(
                product_id,
                product.name(),
                product.stock(),
                quantity,
            ));
        }

        let new_total = product
            .unit_price()
            .checked_times(quantity)
            .and_then(|subtotal| total.checked_add(subtotal))
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "order amount overflows at product {product_id} (quantity {quantity})"
                ))
            })?;

        if !self
            .products
            .update_stock(product_id, product.stock() - quantity)
        {
            tracing::warn!(product_id = %product_id, "stock update had no effect");
        }
        *total = new_total;
        Ok(product)
    }

    pub fn get_order(&self, id: OrderId) -> DomainResult<Order> {
        self.orders
            .find_by_id(id)
            .ok_or(DomainError::OrderNotFound(id))
    }

    pub fn list_orders(&self) -> Vec<Order> {
        self.orders.find_all()
    }

    pub fn get_available_products(&self) -> Vec<Product> {
        self.products.find_all()
    }
}
