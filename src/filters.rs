//! Filter, sort, and page selection driving the product query resolver.
//!
//! `FilterState` owns the current [`FilterSelection`] together with the
//! catalog-wide price bounds, and normalizes price ranges so that "equal to
//! the catalog bounds" means "no price filter" — the resolver itself only
//! ever sees an explicit `Option<PriceRange>`.

use std::cmp::Ordering;

use crate::models::{PriceRange, Product};

// ---------------------------------------------------------------------------
// SortOption
// ---------------------------------------------------------------------------

/// The fixed set of sort selectors offered by the storefront.
///
/// `Default` performs no reordering at all; the other variants map onto the
/// remote source's `sortBy`/`order` parameters when paging is delegated, and
/// onto a local comparator when filtering happens client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    RatingAsc,
    TitleAsc,
    TitleDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 7] = [
        SortOption::Default,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::RatingDesc,
        SortOption::RatingAsc,
        SortOption::TitleAsc,
        SortOption::TitleDesc,
    ];

    /// Stable machine value, e.g. for persisting a selection.
    pub fn value(self) -> &'static str {
        match self {
            SortOption::Default => "default",
            SortOption::PriceAsc => "price-low",
            SortOption::PriceDesc => "price-high",
            SortOption::RatingDesc => "rating-high",
            SortOption::RatingAsc => "rating-low",
            SortOption::TitleAsc => "title-az",
            SortOption::TitleDesc => "title-za",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.value() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOption::Default => "Default",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::RatingDesc => "Rating: High to Low",
            SortOption::RatingAsc => "Rating: Low to High",
            SortOption::TitleAsc => "Name: A to Z",
            SortOption::TitleDesc => "Name: Z to A",
        }
    }

    /// `(sortBy, order)` query parameters for remote-native sorting, or
    /// `None` for [`SortOption::Default`].
    pub fn remote_params(self) -> Option<(&'static str, &'static str)> {
        match self {
            SortOption::Default => None,
            SortOption::PriceAsc => Some(("price", "asc")),
            SortOption::PriceDesc => Some(("price", "desc")),
            SortOption::RatingDesc => Some(("rating", "desc")),
            SortOption::RatingAsc => Some(("rating", "asc")),
            SortOption::TitleAsc => Some(("title", "asc")),
            SortOption::TitleDesc => Some(("title", "desc")),
        }
    }

    /// Sort `products` in place. The sort is stable, so ties keep their
    /// original fetch order.
    pub fn apply(self, products: &mut [Product]) {
        match self {
            SortOption::Default => {}
            SortOption::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOption::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortOption::RatingDesc => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortOption::RatingAsc => products.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
            SortOption::TitleAsc => products.sort_by(|a, b| title_cmp(a, b)),
            SortOption::TitleDesc => products.sort_by(|a, b| title_cmp(b, a)),
        }
    }
}

fn title_cmp(a: &Product, b: &Product) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}

// ---------------------------------------------------------------------------
// FilterSelection
// ---------------------------------------------------------------------------

/// The complete filter/sort/page selection fed to the query resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    /// Free-text search query; empty means no search.
    pub search: String,
    /// Selected category slug; empty means no category filter.
    pub category: String,
    /// Explicit price filter. `None` means no filtering — there is no
    /// sentinel range.
    pub price: Option<PriceRange>,
    /// Minimum rating floor; 0 means no filter.
    pub min_rating: f64,
    pub sort: SortOption,
    /// 1-based page number.
    pub page: u32,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            price: None,
            min_rating: 0.0,
            sort: SortOption::Default,
            page: 1,
        }
    }
}

impl FilterSelection {
    pub fn has_search(&self) -> bool {
        !self.search.trim().is_empty()
    }

    pub fn has_category(&self) -> bool {
        !self.category.is_empty()
    }
}

// ---------------------------------------------------------------------------
// FilterUpdate
// ---------------------------------------------------------------------------

/// A partial update merged into the current selection. Fields left `None`
/// keep their current value.
///
/// Merging does *not* reset the page number automatically: a caller that
/// changes any other filter is responsible for also setting `page` back
/// to 1 (the convenience setters on [`FilterState`] do this).
#[derive(Debug, Clone, Default)]
pub struct FilterUpdate {
    pub search: Option<String>,
    pub category: Option<String>,
    /// Requested price range; normalized against the catalog bounds on
    /// merge, so passing the full available range clears the filter.
    pub price_range: Option<PriceRange>,
    pub min_rating: Option<f64>,
    pub sort: Option<SortOption>,
    pub page: Option<u32>,
}

// ---------------------------------------------------------------------------
// FilterState
// ---------------------------------------------------------------------------

/// Current selection plus the catalog-wide price bounds it is interpreted
/// against.
#[derive(Debug, Clone)]
pub struct FilterState {
    available: PriceRange,
    selection: FilterSelection,
}

impl FilterState {
    pub fn new(available: PriceRange) -> Self {
        Self {
            available,
            selection: FilterSelection::default(),
        }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn available_price_range(&self) -> PriceRange {
        self.available
    }

    /// Merge a partial update into the selection. Page numbers below 1 are
    /// clamped to 1.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(search) = update.search {
            self.selection.search = search;
        }
        if let Some(category) = update.category {
            self.selection.category = category;
        }
        if let Some(range) = update.price_range {
            self.selection.price = self.normalize_price(range);
        }
        if let Some(rating) = update.min_rating {
            self.selection.min_rating = rating.max(0.0);
        }
        if let Some(sort) = update.sort {
            self.selection.sort = sort;
        }
        if let Some(page) = update.page {
            self.selection.page = page.max(1);
        }
    }

    // -- Convenience setters (reset the page, except set_page) --------------

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.selection.search = search.into();
        self.selection.page = 1;
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.selection.category = category.into();
        self.selection.page = 1;
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.selection.price = self.normalize_price(range);
        self.selection.page = 1;
    }

    pub fn set_min_rating(&mut self, rating: f64) {
        self.selection.min_rating = rating.max(0.0);
        self.selection.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.selection.sort = sort;
        self.selection.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.selection.page = page.max(1);
    }

    /// Reset category, price, rating, and page. Search text and sort are
    /// left alone; clearing those on "clear all" is a presentation-layer
    /// choice, not part of the filter state contract.
    pub fn clear_all(&mut self) {
        self.selection.category.clear();
        self.selection.price = None;
        self.selection.min_rating = 0.0;
        self.selection.page = 1;
    }

    /// True iff a category, price, or rating filter is active. Search text
    /// is deliberately excluded; callers that want it OR in a separate
    /// "search present" check.
    pub fn has_active_filters(&self) -> bool {
        self.selection.has_category()
            || self.selection.price.is_some()
            || self.selection.min_rating > 0.0
    }

    /// A range covering the full catalog bounds (or an inverted one) is no
    /// filter at all.
    fn normalize_price(&self, range: PriceRange) -> Option<PriceRange> {
        if range.min > range.max {
            return None;
        }
        if range.min <= self.available.min && range.max >= self.available.max {
            return None;
        }
        Some(range)
    }
}
