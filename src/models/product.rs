use serde::{Deserialize, Serialize};

/// Core product entity. Serializes to the exact wire shape clients consume:
/// `price` and `rating` as plain JSON numbers, `image` as an opaque URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    /// Display-only URI reference; never validated or fetched server-side.
    pub image: String,
    pub rating: f64,
    pub reviews: u32,
}

impl Product {
    /// True when `needle` occurs in the lower-cased name, description, or
    /// category. `needle` must already be lower-cased by the caller so a
    /// single search normalizes the query once, not per product.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }
}

// ── Query parameters ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
    pub query: Option<String>,
}
