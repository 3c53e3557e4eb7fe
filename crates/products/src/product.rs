use serde::{Deserialize, Serialize};

use orderdesk_core::{Entity, Money, ProductId};

/// Entity: Product.
///
/// Identity and name are fixed at construction. Stock is the only mutable
/// field and is changed exclusively through the catalog store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    unit_price: Money,
    stock: u32,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, unit_price: Money, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            stock,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Whether `quantity` units can be taken from current stock.
    pub fn has_stock_for(&self, quantity: u32) -> bool {
        self.stock >= quantity
    }

    /// Overwrite stock. Callers are responsible for keeping it consistent.
    pub fn set_stock(&mut self, stock: u32) {
        self.stock = stock;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
