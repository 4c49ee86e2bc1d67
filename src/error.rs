use thiserror::Error;

/// Invariant violations detected while building the catalog. Any of these
/// aborts startup; a catalog that loaded successfully can never produce them
/// at request time.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate product id {0}")]
    DuplicateId(u64),

    #[error("product {id}: {field} must not be empty")]
    EmptyField { id: u64, field: &'static str },

    #[error("product {id}: price {price} must not be negative")]
    NegativePrice { id: u64, price: f64 },

    #[error("product {id}: rating {rating} outside 0.0..=5.0")]
    RatingOutOfRange { id: u64, rating: f64 },
}
