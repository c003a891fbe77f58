//! HTTP access to the remote product catalog.
//!
//! Wraps a blocking `reqwest` client around the DummyJSON-style endpoints:
//! `/products`, `/products/category/{slug}`, `/products/search`, and
//! `/products/categories`, all sharing the `limit`/`skip`/`sortBy`/`order`
//! paging parameters. A `limit=0` request is the remote convention for
//! "return the entire set", used when local filtering needs the full corpus.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, StorefrontError};
use crate::filters::SortOption;
use crate::models::{Category, ProductPage};

// ---------------------------------------------------------------------------
// PageParams
// ---------------------------------------------------------------------------

/// Native paging parameters for a catalog request.
#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    pub limit: u32,
    pub skip: u32,
    pub sort: SortOption,
}

impl PageParams {
    /// Parameters for one page of size `page_size` (page is 1-based).
    pub fn page(page: u32, page_size: u32, sort: SortOption) -> Self {
        Self {
            limit: page_size,
            skip: page.saturating_sub(1) * page_size,
            sort,
        }
    }

    /// The `limit=0` full-corpus request. Carries no sort: a post-fetch
    /// filtering pass invalidates any native ordering anyway.
    pub fn entire_set() -> Self {
        Self {
            limit: 0,
            skip: 0,
            sort: SortOption::Default,
        }
    }
}

// ---------------------------------------------------------------------------
// CatalogSource
// ---------------------------------------------------------------------------

/// Client for the remote product catalog.
///
/// Use [`CatalogSource::new`] with the production base URL, or point it at a
/// mock server in tests.
pub struct CatalogSource {
    client: Client,
    base_url: Url,
}

impl CatalogSource {
    /// Creates a new source for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`StorefrontError::InvalidArgument`] if
    /// `base_url` is not a valid URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("storefront-sdk/", env!("CARGO_PKG_VERSION")))
            .build()?;

        // Normalise: exactly one trailing slash so joined paths land under
        // the base rather than replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| {
            StorefrontError::InvalidArgument(format!("invalid base URL '{base_url}': {e}"))
        })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // -- Product listing endpoints ------------------------------------------

    /// `GET /products` — the unfiltered listing.
    pub fn list(&self, params: PageParams) -> Result<ProductPage> {
        let url = self.endpoint(&["products"], params)?;
        self.get_json(url)
    }

    /// `GET /products/category/{slug}` — products of one category.
    pub fn by_category(&self, slug: &str, params: PageParams) -> Result<ProductPage> {
        let url = self.endpoint(&["products", "category", slug], params)?;
        self.get_json(url)
    }

    /// `GET /products/search?q=` — full-text search over title/description.
    ///
    /// The search endpoint accepts no category parameter; combining a query
    /// with a category filter is the resolver's job.
    pub fn search(&self, query: &str, params: PageParams) -> Result<ProductPage> {
        let mut url = self.endpoint(&["products", "search"], params)?;
        url.query_pairs_mut().append_pair("q", query);
        self.get_json(url)
    }

    /// `GET /products/categories` — all category slugs. Accepts both bare
    /// strings and `{slug, name}` objects on the wire.
    pub fn categories(&self) -> Result<Vec<Category>> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StorefrontError::InvalidArgument("base URL cannot be a base".into()))?
            .pop_if_empty()
            .extend(["products", "categories"]);
        self.get_json(url)
    }

    // -- Internals ----------------------------------------------------------

    fn endpoint(&self, segments: &[&str], params: PageParams) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StorefrontError::InvalidArgument("base URL cannot be a base".into()))?
            .pop_if_empty()
            .extend(segments);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("limit", &params.limit.to_string());
            pairs.append_pair("skip", &params.skip.to_string());
            if let Some((sort_by, order)) = params.sort.remote_params() {
                pairs.append_pair("sortBy", sort_by);
                pairs.append_pair("order", order);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx status, and decodes the body.
    ///
    /// # Errors
    ///
    /// [`StorefrontError::Http`] on network failure or a non-2xx status,
    /// [`StorefrontError::UnexpectedResponse`] if the body does not match
    /// the expected shape.
    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(url = %url, "catalog request");
        let response = self.client.get(url.clone()).send()?;
        let response = response.error_for_status()?;
        let body = response.text()?;
        serde_json::from_str(&body)
            .map_err(|e| StorefrontError::UnexpectedResponse(format!("{url}: {e}")))
    }
}
