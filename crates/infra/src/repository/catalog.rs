use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use orderdesk_core::{Entity, Money, ProductId};
use orderdesk_products::Product;

use super::{read, write};

/// Catalog store: product lookups and stock updates.
pub trait ProductRepository: Send + Sync {
    fn find_by_id(&self, id: ProductId) -> Option<Product>;
    /// All products, in a stable order for the lifetime of the store.
    fn find_all(&self) -> Vec<Product>;
    /// Overwrite stock for `id`. Returns `false` (and changes nothing) if the
    /// product is unknown. No bounds checking is done here.
    fn update_stock(&self, id: ProductId, new_stock: u32) -> bool;
}

impl<S> ProductRepository for Arc<S>
where
    S: ProductRepository + ?Sized,
{
    fn find_by_id(&self, id: ProductId) -> Option<Product> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> Vec<Product> {
        (**self).find_all()
    }

    fn update_stock(&self, id: ProductId, new_stock: u32) -> bool {
        (**self).update_stock(id, new_stock)
    }
}

/// Products every fresh in-memory catalog starts with.
pub fn default_catalog() -> Vec<Product> {
    vec![
        Product::new(ProductId::new(1), "Gaming Laptop", Money::from_major_minor(1200, 0), 5),
        Product::new(ProductId::new(2), "Wireless Mouse", Money::from_major_minor(45, 99), 20),
        Product::new(ProductId::new(3), "Mechanical Keyboard", Money::from_major_minor(89, 99), 15),
        Product::new(ProductId::new(4), "24\" Monitor", Money::from_major_minor(299, 99), 8),
    ]
}

/// In-memory catalog keyed by product id (iteration is in id order).
#[derive(Debug)]
pub struct InMemoryProductRepository {
    inner: RwLock<BTreeMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// Catalog seeded with [`default_catalog`].
    pub fn seeded() -> Self {
        Self::with_products(default_catalog())
    }

    /// Catalog holding `products`. A later product with a duplicate id replaces
    /// the earlier one.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let map = products.into_iter().map(|p| (p.id(), p)).collect();
        Self {
            inner: RwLock::new(map),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_by_id(&self, id: ProductId) -> Option<Product> {
        let product = read(&self.inner).get(&id).cloned();
        match &product {
            Some(p) => tracing::debug!(product_id = %id, name = p.name(), "product found"),
            None => tracing::debug!(product_id = %id, "product not in catalog"),
        }
        product
    }

    fn find_all(&self) -> Vec<Product> {
        read(&self.inner).values().cloned().collect()
    }

    fn update_stock(&self, id: ProductId, new_stock: u32) -> bool {
        let mut map = write(&self.inner);
        let Some(product) = map.get_mut(&id) else {
            tracing::debug!(product_id = %id, "stock update ignored for unknown product");
            return false;
        };

        let old_stock = product.stock();
        product.set_stock(new_stock);
        tracing::debug!(product_id = %id, old_stock, new_stock, "stock updated");
        true
    }
}
