use std::io::Write;

use orderdesk_sales::Order;

use super::{ConsoleSink, NotificationService, order_number};

/// Terse confirmation channel.
pub struct SmsNotificationService {
    sink: ConsoleSink,
}

impl SmsNotificationService {
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
            "\nSMS CONFIRMATION\n   To: {}\n   Message: Order {} confirmed. Total: {}\n",
            order.customer_name(),
            order_number(order),
            order.total(),
        )
    }
}

impl Default for SmsNotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationService for SmsNotificationService {
    fn send_order_confirmation(&self, order: &Order) -> bool {
        let sent = self.sink.deliver("sms", &Self::render(order));
        if sent {
            tracing::info!(order_id = ?order.id(), channel = "sms", "order confirmation sent");
        }
        sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::test_support::SharedBuffer;
    use orderdesk_core::{Money, OrderId, ProductId};
    use orderdesk_products::Product;
    use orderdesk_sales::OrderItem;

    #[test]
    fn render_is_a_single_message_line() {
        let mouse = Product::new(ProductId::new(2), "Wireless Mouse", Money::from_cents(4_599), 20);
        let mut order = Order::new("Carlos Ruiz", vec![OrderItem::new(&mouse, 2)]);
        order.id_or_assign(|| OrderId::new(3));

        let text = SmsNotificationService::render(&order);
        assert!(text.contains("To: Carlos Ruiz"));
        assert!(text.contains("Message: Order #3 confirmed. Total: $91.98"));
        assert!(!text.contains("Status"));
    }

    #[test]
    fn unsaved_order_is_marked() {
        let order = Order::new("Carlos Ruiz", Vec::new());
        assert!(SmsNotificationService::render(&order).contains("Order (unsaved) confirmed"));
    }

    #[test]
    fn send_writes_to_sink() {
        let buf = SharedBuffer::default();
        let channel = SmsNotificationService::with_writer(buf.clone());
        let order = Order::new("Carlos Ruiz", Vec::new());
        assert!(channel.send_order_confirmation(&order));
        assert!(buf.contents().starts_with("\nSMS CONFIRMATION"));
    }
}
