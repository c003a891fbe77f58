//! Async wrapper around [`StorefrontSdk`] for use in async runtimes (Tokio).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client waits on the remote catalog.
//!
//! # Example
//!
//! ```no_run
//! use storefront_sdk::AsyncStorefrontSdk;
//! use storefront_sdk::FilterSelection;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncStorefrontSdk::builder().build().await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let page = sdk
//!         .run(|s| s.products().resolve(&FilterSelection::default()))
//!         .await
//!         .unwrap();
//!     println!("{} products", page.total);
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{Result, StorefrontError};
use crate::filters::FilterSelection;
use crate::models::{Category, Product, ProductPage};
use crate::StorefrontSdk;

// ---------------------------------------------------------------------------
// AsyncStorefrontSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncStorefrontSdk`].
#[derive(Default)]
pub struct AsyncStorefrontSdkBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    page_size: Option<u32>,
    data_dir: Option<PathBuf>,
    in_memory_cart: bool,
}

impl AsyncStorefrontSdkBuilder {
    /// Point the SDK at a different catalog base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the number of products per page.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set a custom directory for the persisted cart file.
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keep the cart purely in memory.
    pub fn in_memory_cart(mut self, in_memory: bool) -> Self {
        self.in_memory_cart = in_memory;
        self
    }

    /// Build the async SDK. Construction (including cart restoration) runs
    /// on the blocking thread pool so it won't block the async event loop.
    pub async fn build(self) -> Result<AsyncStorefrontSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = StorefrontSdk::builder();
            if let Some(base_url) = self.base_url {
                builder = builder.base_url(base_url);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(page_size) = self.page_size {
                builder = builder.page_size(page_size);
            }
            if let Some(dir) = self.data_dir {
                builder = builder.data_dir(dir);
            }
            let sdk = builder.in_memory_cart(self.in_memory_cart).build()?;
            Ok(AsyncStorefrontSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| StorefrontError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncStorefrontSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`StorefrontSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]; the underlying SDK is protected by a
/// [`Mutex`], which also makes cart mutations atomic with respect to each
/// other.
pub struct AsyncStorefrontSdk {
    inner: Arc<Mutex<StorefrontSdk>>,
}

impl AsyncStorefrontSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncStorefrontSdkBuilder {
        AsyncStorefrontSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&StorefrontSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| StorefrontError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| StorefrontError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Run a sync SDK operation needing mutable access (cart mutations).
    pub async fn run_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut StorefrontSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = sdk
                .lock()
                .map_err(|_| StorefrontError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| StorefrontError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Resolve one product page asynchronously.
    ///
    /// Convenience wrapper around [`run()`](Self::run).
    pub async fn resolve(&self, selection: FilterSelection) -> Result<ProductPage> {
        self.run(move |s| s.products().resolve(&selection)).await
    }

    /// List all categories asynchronously.
    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.run(|s| s.categories().list()).await
    }

    /// Add one unit of `product` to the cart asynchronously.
    pub async fn add_item(&self, product: Product) -> Result<()> {
        self.run_mut(move |s| {
            s.cart_mut().add_item(&product);
            Ok(())
        })
        .await
    }
}
