use std::collections::HashMap;

use indexmap::IndexSet;

use crate::error::CatalogError;
use crate::models::Product;

// ── Search result ─────────────────────────────────────────────────────────────

/// Outcome of a catalog search. A missing or empty query is a reported
/// condition carried in-band, not an error; zero hits is plain success.
#[derive(Debug, PartialEq)]
pub enum SearchOutcome<'a> {
    MissingQuery,
    Hits(Vec<&'a Product>),
}

// ── Catalog ───────────────────────────────────────────────────────────────────

/// Immutable product collection, built once at startup and shared read-only
/// across request handlers. Insertion order is preserved and is the output
/// order of every multi-product query.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<u64, usize>,
}

impl Catalog {
    /// Validates every product and builds the id lookup table. Rejecting
    /// invariant violations here means no query path ever has to consider
    /// them: a duplicate id, empty name/category, negative price, or
    /// out-of-range rating refuses to load.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(products.len());

        for (index, product) in products.iter().enumerate() {
            if product.name.is_empty() {
                return Err(CatalogError::EmptyField { id: product.id, field: "name" });
            }
            if product.category.is_empty() {
                return Err(CatalogError::EmptyField { id: product.id, field: "category" });
            }
            if product.price < 0.0 {
                return Err(CatalogError::NegativePrice { id: product.id, price: product.price });
            }
            if !(0.0..=5.0).contains(&product.rating) {
                return Err(CatalogError::RatingOutOfRange {
                    id: product.id,
                    rating: product.rating,
                });
            }
            if by_id.insert(product.id, index).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        Ok(Self { products, by_id })
    }

    /// Case-insensitive substring search over name, description, and
    /// category. The query is lower-cased once; matches come back in
    /// collection order. Not tokenized, not fuzzy, and whitespace is not
    /// trimmed (a single-space query is a real one-space search).
    pub fn search(&self, query: Option<&str>) -> SearchOutcome<'_> {
        let Some(query) = query.filter(|q| !q.is_empty()) else {
            return SearchOutcome::MissingQuery;
        };

        let needle = query.to_lowercase();
        let hits = self
            .products
            .iter()
            .filter(|p| p.matches(&needle))
            .collect();

        SearchOutcome::Hits(hits)
    }

    /// Lookup by id. `None` is the reported not-found condition.
    pub fn get(&self, id: u64) -> Option<&Product> {
        self.by_id.get(&id).map(|&index| &self.products[index])
    }

    /// Distinct category labels in first-seen (collection) order. The order
    /// is deterministic and documented; callers may rely on it.
    pub fn categories(&self) -> Vec<&str> {
        let distinct: IndexSet<&str> =
            self.products.iter().map(|p| p.category.as_str()).collect();
        distinct.into_iter().collect()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
