use std::io::Write;

use orderdesk_sales::Order;

use super::{ConsoleSink, NotificationService, order_number};

/// Verbose confirmation channel.
pub struct EmailNotificationService {
    sink: ConsoleSink,
}

impl EmailNotificationService {
    /// Channel writing to stdout.
    pub fn new() -> Self {
        Self {
            sink: ConsoleSink::stdout(),
        }
    }

    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: ConsoleSink::new(writer),
        }
    }

    pub fn render(order: &Order) -> String {
        format!(
            "\nEMAIL CONFIRMATION\n   To: {customer}\n   Subject: Order Confirmation {number}\n   Total: {total}\n   Status: {status}\n   Thank you for your purchase!\n",
            customer = order.customer_name(),
            number = order_number(order),
            total = order.total(),
            status = order.status(),
        )
    }
}

impl Default for EmailNotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationService for EmailNotificationService {
    fn send_order_confirmation(&self, order: &Order) -> bool {
        let sent = self.sink.deliver("email", &Self::render(order));
        if sent {
            tracing::info!(order_id = ?order.id(), channel = "email", "order confirmation sent");
        }
        sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::test_support::{BrokenPipe, SharedBuffer};
    use orderdesk_core::{Money, OrderId, ProductId};
    use orderdesk_products::Product;
    use orderdesk_sales::OrderItem;

    fn saved_order() -> Order {
        let laptop = Product::new(ProductId::new(1), "Gaming Laptop", Money::from_cents(120_000), 5);
        let mut order = Order::new("María González", vec![OrderItem::new(&laptop, 1)]);
        order.id_or_assign(|| OrderId::new(1));
        order
    }

    #[test]
    fn render_includes_subject_total_and_status() {
        let text = EmailNotificationService::render(&saved_order());
        assert!(text.contains("To: María González"));
        assert!(text.contains("Subject: Order Confirmation #1"));
        assert!(text.contains("Total: $1200.00"));
        assert!(text.contains("Status: pending"));
    }

    #[test]
    fn send_writes_rendered_message() {
        let buf = SharedBuffer::default();
        let channel = EmailNotificationService::with_writer(buf.clone());
        let order = saved_order();

        assert!(channel.send_order_confirmation(&order));
        assert_eq!(buf.contents(), EmailNotificationService::render(&order));
    }

    #[test]
    fn write_failure_reports_false() {
        let channel = EmailNotificationService::with_writer(BrokenPipe);
        assert!(!channel.send_order_confirmation(&saved_order()));
    }
}
