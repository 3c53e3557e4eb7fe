//! Domain error model.

use thiserror::Error;

use crate::id::{OrderId, ProductId};

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a recoverable, caller-visible business failure. Stores never
/// produce these; they report absence and leave naming the failure to the
/// order workflow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A requested product does not exist in the catalog.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// A product does not have enough stock for the requested quantity.
    #[error("insufficient stock for {product_name}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: ProductId,
        product_name: String,
        available: u32,
        requested: u32,
    },

    /// A requested order does not exist.
    #[error("order {0} not found")]
    OrderNotFound(OrderId),

    /// A value failed validation (e.g. zero quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn insufficient_stock(
        product_id: ProductId,
        product_name: impl Into<String>,
        available: u32,
        requested: u32,
    ) -> Self {
        Self::InsufficientStock {
            product_id,
            product_name: product_name.into(),
            available,
            requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_message_names_product_and_quantities() {
        let err = DomainError::insufficient_stock(ProductId::new(1), "Gaming Laptop", 5, 10);
        assert_eq!(
            err.to_string(),
            "insufficient stock for Gaming Laptop: available 5, requested 10"
        );
    }

    #[test]
    fn not_found_messages_include_identifier() {
        assert_eq!(
            DomainError::ProductNotFound(ProductId::new(99)).to_string(),
            "product 99 not found"
        );
        assert_eq!(
            DomainError::OrderNotFound(OrderId::new(7)).to_string(),
            "order 7 not found"
        );
    }
}
