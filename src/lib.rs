//! Storefront SDK for Rust.
//!
//! Provides a high-level client for a DummyJSON-style public product
//! catalog: free-text search, category/price/rating filtering, sorting and
//! pagination resolved against the remote API (locally where the API cannot
//! express a filter), plus a client-side shopping cart persisted to local
//! storage.
//!
//! # Quick start
//!
//! ```no_run
//! use storefront_sdk::StorefrontSdk;
//!
//! let mut sdk = StorefrontSdk::builder().build().unwrap();
//!
//! // Build the filter state against the catalog-wide price bounds.
//! let mut filters = sdk.filter_state();
//! filters.set_search("phone");
//!
//! // Resolve one page (fail-soft: always renderable).
//! let fetch = sdk.products().resolve_soft(filters.selection());
//! for product in &fetch.page.products {
//!     println!("{} — ${}", product.title, product.price);
//! }
//!
//! // Add the first hit to the cart.
//! if let Some(first) = fetch.page.products.first() {
//!     sdk.cart_mut().add_item(first);
//! }
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod cart;
pub mod config;
pub mod error;
pub mod filters;
pub mod models;
pub mod queries;
pub mod session;
pub mod source;

#[cfg(feature = "async")]
pub use async_client::AsyncStorefrontSdk;
pub use cart::{CartStore, HydrationState};
pub use error::{Result, StorefrontError};
pub use filters::{FilterSelection, FilterState, FilterUpdate, SortOption};
pub use models::{CartLineItem, Category, PriceRange, Product, ProductPage};
pub use queries::{CategoryQuery, PageFetch, ProductQuery};
pub use session::{Debouncer, GenerationGuard};
pub use source::{CatalogSource, PageParams};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// StorefrontSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`StorefrontSdk`] instance.
///
/// Use [`StorefrontSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](StorefrontSdkBuilder::build).
pub struct StorefrontSdkBuilder {
    base_url: String,
    timeout: Duration,
    page_size: u32,
    data_dir: Option<PathBuf>,
    in_memory_cart: bool,
}

impl Default for StorefrontSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            page_size: config::DEFAULT_PAGE_SIZE,
            data_dir: None,
            in_memory_cart: false,
        }
    }
}

impl StorefrontSdkBuilder {
    /// Point the SDK at a different catalog base URL (e.g. a mock server
    /// in tests).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of products per page. Defaults to 20.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set a custom directory for the persisted cart file.
    ///
    /// If not set, the platform-appropriate data directory is used
    /// (e.g. `~/.local/share/storefront-sdk` on Linux).
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keep the cart purely in memory, never touching the filesystem.
    pub fn in_memory_cart(mut self, in_memory: bool) -> Self {
        self.in_memory_cart = in_memory;
        self
    }

    /// Build the SDK, constructing the HTTP client and restoring the cart
    /// from durable storage.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Http`] if the HTTP client cannot be
    /// constructed, or [`StorefrontError::InvalidArgument`] for an invalid
    /// base URL. Cart restoration itself never fails; a missing or corrupt
    /// cart file simply yields an empty cart.
    pub fn build(self) -> Result<StorefrontSdk> {
        if self.page_size == 0 {
            return Err(StorefrontError::InvalidArgument(
                "page_size must be at least 1".into(),
            ));
        }
        let source = CatalogSource::new(&self.base_url, self.timeout)?;
        let mut cart = if self.in_memory_cart {
            CartStore::in_memory()
        } else {
            let dir = self.data_dir.unwrap_or_else(config::default_data_dir);
            CartStore::open(dir.join(config::CART_FILE))
        };
        cart.restore();
        Ok(StorefrontSdk {
            source,
            cart,
            page_size: self.page_size,
        })
    }
}

// ---------------------------------------------------------------------------
// StorefrontSdk
// ---------------------------------------------------------------------------

/// The main entry point for the storefront SDK.
///
/// Owns the [`CatalogSource`] and the [`CartStore`], and exposes the query
/// interfaces as lightweight borrowing wrappers. Created via
/// [`StorefrontSdk::builder()`].
pub struct StorefrontSdk {
    source: CatalogSource,
    cart: CartStore,
    page_size: u32,
}

impl StorefrontSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> StorefrontSdkBuilder {
        StorefrontSdkBuilder::default()
    }

    // -- Query accessors ----------------------------------------------------

    /// Access the product query resolver.
    pub fn products(&self) -> ProductQuery<'_> {
        ProductQuery::new(&self.source, self.page_size)
    }

    /// Access the category query interface.
    pub fn categories(&self) -> CategoryQuery<'_> {
        CategoryQuery::new(&self.source)
    }

    // -- Cart ---------------------------------------------------------------

    /// The shopping cart, restored from durable storage at build time.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    // -- State helpers ------------------------------------------------------

    /// Fresh filter state anchored to the catalog-wide price bounds.
    ///
    /// Derives the bounds from a catalog sample (one blocking request);
    /// falls back to the built-in bounds on failure.
    pub fn filter_state(&self) -> FilterState {
        FilterState::new(self.categories().available_price_range())
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Return a reference to the underlying [`CatalogSource`] for advanced
    /// usage.
    pub fn source(&self) -> &CatalogSource {
        &self.source
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for StorefrontSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StorefrontSdk(base_url={}, page_size={}, cart_items={})",
            self.source.base_url(),
            self.page_size,
            self.cart.total_items()
        )
    }
}
