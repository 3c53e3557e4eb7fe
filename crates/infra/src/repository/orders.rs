use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use orderdesk_core::OrderId;
use orderdesk_sales::Order;

use super::{read, write};

/// Order store: id assignment, persistence and lookups.
pub trait OrderRepository: Send + Sync {
    /// Persist `order`, assigning the next id first if it has none.
    ///
    /// The assigned id is written back into `order`. Saving an order that
    /// already has an id replaces the stored record under that id.
    fn save(&self, order: &mut Order) -> OrderId;
    fn find_by_id(&self, id: OrderId) -> Option<Order>;
    /// All stored orders, in id order.
    fn find_all(&self) -> Vec<Order>;
}

impl<S> OrderRepository for Arc<S>
where
    S: OrderRepository + ?Sized,
{
    fn save(&self, order: &mut Order) -> OrderId {
        (**self).save(order)
    }

    fn find_by_id(&self, id: OrderId) -> Option<Order> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> Vec<Order> {
        (**self).find_all()
    }
}

#[derive(Debug)]
struct OrderTable {
    orders: BTreeMap<OrderId, Order>,
    next_id: u64,
}

/// In-memory order store with a monotonic id counter starting at 1.
#[derive(Debug)]
pub struct InMemoryOrderRepository {
    inner: RwLock<OrderTable>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(OrderTable {
                orders: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn save(&self, order: &mut Order) -> OrderId {
        let mut table = write(&self.inner);
        let id = order.id_or_assign(|| {
            let id = OrderId::new(table.next_id);
            table.next_id += 1;
            id
        });
        table.orders.insert(id, order.clone());
        tracing::debug!(order_id = %id, "order saved");
        id
    }

    fn find_by_id(&self, id: OrderId) -> Option<Order> {
        read(&self.inner).orders.get(&id).cloned()
    }

    fn find_all(&self) -> Vec<Order> {
        read(&self.inner).orders.values().cloned().collect()
    }
}
