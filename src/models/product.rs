use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Product — one catalog record as returned by the remote source
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: i64,
    /// Some remote records omit the brand entirely.
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
}

// ---------------------------------------------------------------------------
// ProductPage — one page of results plus the post-filter total
// ---------------------------------------------------------------------------

/// A page of products. `total` counts matches across all pages; whenever
/// local filtering was applied it reflects the *filtered* set, not the
/// remote source's unfiltered total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

impl ProductPage {
    /// An empty page, the fail-soft result for a broken fetch.
    pub fn empty() -> Self {
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// PriceRange
// ---------------------------------------------------------------------------

/// Inclusive price bounds. Invariant: `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

// ---------------------------------------------------------------------------
// Category — the categories endpoint returns either bare slugs or objects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Category {
    Named { slug: String, name: String },
    Slug(String),
}

impl Category {
    pub fn slug(&self) -> &str {
        match self {
            Category::Named { slug, .. } => slug,
            Category::Slug(slug) => slug,
        }
    }

    /// Human-readable label: the remote-provided name when present,
    /// otherwise the slug run through [`format_category_label`].
    pub fn label(&self) -> String {
        match self {
            Category::Named { name, .. } => name.clone(),
            Category::Slug(slug) => format_category_label(slug),
        }
    }
}

/// Format a category slug as a title-cased label, e.g. `"mens-shirts"`
/// becomes `"Mens Shirts"`.
pub fn format_category_label(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
