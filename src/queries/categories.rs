//! Category listing and catalog-wide price bounds.

use tracing::warn;

use crate::config;
use crate::error::Result;
use crate::filters::SortOption;
use crate::models::{Category, PriceRange};
use crate::source::{CatalogSource, PageParams};

/// Query interface for category data and the derived price slider bounds.
pub struct CategoryQuery<'a> {
    source: &'a CatalogSource,
}

impl<'a> CategoryQuery<'a> {
    pub fn new(source: &'a CatalogSource) -> Self {
        Self { source }
    }

    /// All category slugs known to the remote source.
    pub fn list(&self) -> Result<Vec<Category>> {
        self.source.categories()
    }

    /// Catalog-wide `[min, max]` price bounds, derived from a sample of the
    /// unfiltered listing. Used as slider bounds and as the anchor for the
    /// "no price filter" normalization.
    ///
    /// Falls back to the built-in bounds when the sample cannot be fetched
    /// or comes back empty, so startup never fails on a broken network.
    pub fn available_price_range(&self) -> PriceRange {
        let sample = self.source.list(PageParams {
            limit: config::PRICE_SAMPLE_LIMIT,
            skip: 0,
            sort: SortOption::Default,
        });
        match sample {
            Ok(page) if !page.products.is_empty() => {
                let mut min = f64::INFINITY;
                let mut max = f64::NEG_INFINITY;
                for p in &page.products {
                    min = min.min(p.price);
                    max = max.max(p.price);
                }
                // Round outward to whole currency units so the bounds cover
                // every sampled price.
                PriceRange::new(min.floor(), max.ceil())
            }
            Ok(_) => config::FALLBACK_PRICE_RANGE,
            Err(e) => {
                warn!(error = %e, "price bounds sample failed; using fallback range");
                config::FALLBACK_PRICE_RANGE
            }
        }
    }
}
