//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Add-on not found.
    #[error("Add-on not found: {0}")]
    AddOnNotFound(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// The catalog has no combo offer configured.
    #[error("No combo offer is available")]
    ComboUnavailable,

    /// Cart position out of range.
    #[error("No cart line at position {index} (cart has {len} lines)")]
    LineNotFound { index: usize, len: usize },

    /// Requested size has no price for this product.
    #[error("Size {size} is not offered for {product}")]
    SizeUnavailable { product: String, size: String },

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// An order cannot be composed from an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in price calculation")]
    Overflow,

    /// A catalog document could not be loaded or parsed.
    #[error("Failed to load catalog document {document}: {reason}")]
    CatalogLoad { document: String, reason: String },

    /// Durable storage rejected a write.
    #[error("Storage error: {0}")]
    Storage(#[from] bite_cache::CacheError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CommerceError {
    /// Whether the error means a referenced catalog entry does not exist.
    ///
    /// UIs render these as a "not found" state instead of a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CommerceError::ProductNotFound(_)
                | CommerceError::AddOnNotFound(_)
                | CommerceError::CategoryNotFound(_)
                | CommerceError::ComboUnavailable
                | CommerceError::LineNotFound { .. }
        )
    }

    /// Whether retrying the same call later might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CommerceError::CatalogLoad { .. } | CommerceError::Storage(_)
        )
    }
}
