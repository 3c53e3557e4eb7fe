//! Scripted walkthrough of the order workflow.
//!
//! Lists the catalog, places one order that succeeds and one that fails on
//! stock, then lists the stored orders. Business failures are written to the
//! report and never abort the run; only I/O errors on `out` are returned.

use std::io::{self, Write};

use orderdesk_core::ProductId;
use orderdesk_infra::{NotificationService, OrderRepository, ProductRepository};

use crate::services::OrderService;

const RULE: &str = "==================================================";

pub fn run<O, P, N>(service: &OrderService<O, P, N>, out: &mut impl Write) -> io::Result<()>
where
    O: OrderRepository,
    P: ProductRepository,
    N: NotificationService,
{
    writeln!(out, "ORDER MANAGEMENT SYSTEM")?;
    writeln!(out, "{RULE}")?;

    writeln!(out, "\nAVAILABLE PRODUCTS:")?;
    for product in service.get_available_products() {
        writeln!(out, "   {}. {}", product.id_typed(), product.name())?;
        writeln!(
            out,
            "      Price: {} | Stock: {}",
            product.unit_price(),
            product.stock()
        )?;
    }

    section(out, "DEMO 1: SUCCESSFUL ORDER")?;
    out.flush()?;
    match service.create_order(
        "María González",
        [
            (ProductId::new(1), 1),
            (ProductId::new(2), 2),
            (ProductId::new(4), 1),
        ],
    ) {
        Ok(order) => {
            writeln!(out, "\nORDER COMPLETED SUCCESSFULLY!")?;
            if let Some(id) = order.id() {
                writeln!(out, "   Order number: #{id}")?;
            }
            writeln!(out, "   Customer: {}", order.customer_name())?;
            writeln!(out, "   Products: {}", order.items().len())?;
            writeln!(out, "   Total: {}", order.total())?;
        }
        Err(e) => writeln!(out, "   Order 1 failed: {e}")?,
    }

    section(out, "DEMO 2: ORDER WITH ERROR")?;
    out.flush()?;
    match service.create_order("Carlos Ruiz", [(ProductId::new(1), 10)]) {
        Ok(order) => writeln!(
            out,
            "   Order for {} was unexpectedly accepted",
            order.customer_name()
        )?,
        Err(e) => writeln!(out, "   Order 2 failed: {e}")?,
    }

    section(out, "DEMO 3: ORDER LISTING")?;
    let orders = service.list_orders();
    if orders.is_empty() {
        writeln!(out, "   No orders registered")?;
    }
    for order in &orders {
        let id = order.id().map(|id| id.to_string()).unwrap_or_default();
        writeln!(
            out,
            "   Order #{id}: {} - {} - {}",
            order.customer_name(),
            order.total(),
            order.status()
        )?;
    }

    section(out, "DEMO COMPLETED")?;
    out.flush()
}

fn section(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n{RULE}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{RULE}")
}
