//! The product query resolver.
//!
//! Produces one page of products matching a [`FilterSelection`], with a
//! total count that reflects the filtered set, regardless of which filter
//! combination is active. Paging and sorting are delegated to the remote
//! source whenever it can apply them natively; price-range and rating
//! filters (and a category filter combined with a free-text search, which
//! the search endpoint cannot express) force a full-corpus fetch followed
//! by a local filter/sort/slice pass.

use tracing::warn;

use crate::config;
use crate::error::{Result, StorefrontError};
use crate::filters::FilterSelection;
use crate::models::{Product, ProductPage};
use crate::source::{CatalogSource, PageParams};

// ---------------------------------------------------------------------------
// PageFetch
// ---------------------------------------------------------------------------

/// A fail-soft fetch result: always a renderable page, plus a separate
/// error signal for the caller to surface as a retry prompt.
#[derive(Debug, Clone)]
pub struct PageFetch {
    pub page: ProductPage,
    pub error: Option<String>,
}

impl PageFetch {
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }
}

// ---------------------------------------------------------------------------
// ProductQuery
// ---------------------------------------------------------------------------

/// Query interface for resolving filtered, sorted, paginated product pages.
pub struct ProductQuery<'a> {
    source: &'a CatalogSource,
    page_size: u32,
}

impl<'a> ProductQuery<'a> {
    pub fn new(source: &'a CatalogSource, page_size: u32) -> Self {
        Self { source, page_size }
    }

    /// Resolve one page for the given selection.
    ///
    /// # Errors
    ///
    /// [`StorefrontError::InvalidArgument`] for a page number of 0, and any
    /// transport/decoding error from the remote source. Callers that want
    /// the fail-soft behavior use [`resolve_soft`](Self::resolve_soft).
    pub fn resolve(&self, selection: &FilterSelection) -> Result<ProductPage> {
        if selection.page == 0 {
            return Err(StorefrontError::InvalidArgument(
                "page numbers are 1-based".into(),
            ));
        }
        if needs_local_pass(selection) {
            self.resolve_local(selection)
        } else {
            // Remote-native paging and sorting; the response is already
            // correctly paginated and totaled.
            self.fetch(
                selection,
                PageParams::page(selection.page, self.page_size, selection.sort),
            )
        }
    }

    /// Fail-soft variant of [`resolve`](Self::resolve): a broken fetch
    /// yields an empty page and the error message instead of an `Err`.
    pub fn resolve_soft(&self, selection: &FilterSelection) -> PageFetch {
        match self.resolve(selection) {
            Ok(page) => PageFetch { page, error: None },
            Err(e) => {
                warn!(error = %e, "catalog query failed; returning empty page");
                PageFetch {
                    page: ProductPage::empty(),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// First page of the unfiltered listing, for the initial load. Falls
    /// back to the small built-in placeholder catalog (with the error still
    /// reported) so the storefront never opens onto a blank grid.
    pub fn initial_page(&self) -> PageFetch {
        let selection = FilterSelection::default();
        match self.resolve(&selection) {
            Ok(page) => PageFetch { page, error: None },
            Err(e) => {
                warn!(error = %e, "initial catalog load failed; using placeholder products");
                let products = config::placeholder_products();
                let total = products.len() as u64;
                PageFetch {
                    page: ProductPage {
                        products,
                        total,
                        skip: 0,
                        limit: u64::from(self.page_size),
                    },
                    error: Some(e.to_string()),
                }
            }
        }
    }

    // -- Internals ----------------------------------------------------------

    /// Pick the endpoint for the selection: search if a query is present,
    /// else the category listing, else the plain listing.
    fn fetch(&self, selection: &FilterSelection, params: PageParams) -> Result<ProductPage> {
        if selection.has_search() {
            self.source.search(selection.search.trim(), params)
        } else if selection.has_category() {
            self.source.by_category(&selection.category, params)
        } else {
            self.source.list(params)
        }
    }

    /// Fetch the entire matching remote set and filter/sort/slice locally.
    fn resolve_local(&self, selection: &FilterSelection) -> Result<ProductPage> {
        let full = self.fetch(selection, PageParams::entire_set())?;
        Ok(filter_sort_paginate(
            full.products,
            selection,
            self.page_size,
        ))
    }
}

/// True when some filter dimension cannot be applied by the remote source:
/// a price range, a rating floor, or a category combined with a free-text
/// search (the search endpoint accepts no category parameter).
fn needs_local_pass(selection: &FilterSelection) -> bool {
    selection.price.is_some()
        || selection.min_rating > 0.0
        || (selection.has_search() && selection.has_category())
}

/// The local pass over a fully-fetched corpus: filter, stable-sort, recount,
/// and slice out the requested page. A page past the end comes back empty
/// while keeping the filtered total, matching offset pagination.
fn filter_sort_paginate(
    mut products: Vec<Product>,
    selection: &FilterSelection,
    page_size: u32,
) -> ProductPage {
    if let Some(range) = selection.price {
        products.retain(|p| range.contains(p.price));
    }
    if selection.min_rating > 0.0 {
        products.retain(|p| p.rating >= selection.min_rating);
    }
    // Category-native filtering already happened remotely unless the search
    // endpoint was used; then the category is intersected here.
    if selection.has_search() && selection.has_category() {
        products.retain(|p| p.category == selection.category);
    }
    selection.sort.apply(&mut products);

    let total = products.len() as u64;
    let skip = u64::from(selection.page - 1) * u64::from(page_size);
    let page_products: Vec<Product> = products
        .into_iter()
        .skip(skip as usize)
        .take(page_size as usize)
        .collect();

    ProductPage {
        products: page_products,
        total,
        skip,
        limit: u64::from(page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::SortOption;
    use crate::models::PriceRange;

    fn product(id: u64, price: f64, rating: f64, category: &str) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            description: String::new(),
            price,
            discount_percentage: 0.0,
            rating,
            stock: 5,
            brand: None,
            category: category.to_string(),
            thumbnail: String::new(),
            images: vec![],
        }
    }

    fn corpus() -> Vec<Product> {
        vec![
            product(1, 50.0, 4.5, "laptops"),
            product(2, 150.0, 3.9, "laptops"),
            product(3, 175.0, 4.1, "smartphones"),
            product(4, 199.0, 4.8, "laptops"),
            product(5, 900.0, 2.5, "smartphones"),
        ]
    }

    #[test]
    fn local_pass_is_skipped_without_local_only_filters() {
        let mut selection = FilterSelection::default();
        selection.search = "phone".into();
        selection.sort = SortOption::PriceDesc;
        assert!(!needs_local_pass(&selection));

        selection.category = "laptops".into();
        assert!(needs_local_pass(&selection));
    }

    #[test]
    fn price_and_rating_filters_intersect_and_recount() {
        let mut selection = FilterSelection::default();
        selection.price = Some(PriceRange::new(100.0, 200.0));
        selection.min_rating = 4.0;

        let page = filter_sort_paginate(corpus(), &selection, 20);
        assert_eq!(page.total, 2);
        for p in &page.products {
            assert!(p.price >= 100.0 && p.price <= 200.0);
            assert!(p.rating >= 4.0);
        }
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let mut selection = FilterSelection::default();
        selection.price = Some(PriceRange::new(50.0, 199.0));

        let page = filter_sort_paginate(corpus(), &selection, 20);
        let ids: Vec<u64> = page.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn page_beyond_end_keeps_filtered_total() {
        let mut selection = FilterSelection::default();
        selection.min_rating = 2.0;
        selection.page = 3;

        let page = filter_sort_paginate(corpus(), &selection, 20);
        assert!(page.products.is_empty());
        assert_eq!(page.total, 5);
        assert_eq!(page.skip, 40);
    }

    #[test]
    fn sort_desc_reverses_sort_asc_for_distinct_prices() {
        let mut selection = FilterSelection::default();
        selection.min_rating = 1.0; // force the local pass shape
        selection.sort = SortOption::PriceAsc;
        let asc = filter_sort_paginate(corpus(), &selection, 20);

        selection.sort = SortOption::PriceDesc;
        let desc = filter_sort_paginate(corpus(), &selection, 20);

        let mut reversed = desc.products.clone();
        reversed.reverse();
        assert_eq!(asc.products, reversed);
    }

    #[test]
    fn category_is_intersected_only_with_search() {
        let mut selection = FilterSelection::default();
        selection.search = "product".into();
        selection.category = "laptops".into();

        let page = filter_sort_paginate(corpus(), &selection, 20);
        assert_eq!(page.total, 3);
        assert!(page.products.iter().all(|p| p.category == "laptops"));
    }
}
