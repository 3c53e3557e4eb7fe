//! Order confirmation channels.
//!
//! Every channel renders a confirmation from a persisted order and writes it to
//! a console-like sink. Real delivery (SMTP, SMS gateways) is not wired up.

pub mod email;
pub mod sms;

pub use email::EmailNotificationService;
pub use sms::SmsNotificationService;

use std::io::Write;
use std::sync::{Arc, Mutex};

use orderdesk_sales::Order;

/// Sends order confirmations to the customer.
pub trait NotificationService: Send + Sync {
    /// Returns `true` when the confirmation was handed to the channel.
    fn send_order_confirmation(&self, order: &Order) -> bool;
}

impl<N> NotificationService for Box<N>
where
    N: NotificationService + ?Sized,
{
    fn send_order_confirmation(&self, order: &Order) -> bool {
        (**self).send_order_confirmation(order)
    }
}

impl<N> NotificationService for Arc<N>
where
    N: NotificationService + ?Sized,
{
    fn send_order_confirmation(&self, order: &Order) -> bool {
        (**self).send_order_confirmation(order)
    }
}

/// Writable destination shared by the console channels.
struct ConsoleSink {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
        }
    }

    fn deliver(&self, channel: &'static str, message: &str) -> bool {
        let Ok(mut out) = self.out.lock() else {
            tracing::warn!(channel, "notification sink poisoned");
            return false;
        };

        match out.write_all(message.as_bytes()).and_then(|_| out.flush()) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(channel, error = %e, "failed to write notification");
                false
            }
        }
    }
}

fn order_number(order: &Order) -> String {
    match order.id() {
        Some(id) => format!("#{id}"),
        None => "(unsaved)".to_string(),
    }
}
