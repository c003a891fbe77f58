//! Query interfaces over the remote catalog.
//!
//! Each interface is a lightweight wrapper borrowing the shared
//! [`CatalogSource`](crate::source::CatalogSource); obtain them through the
//! accessors on [`StorefrontSdk`](crate::StorefrontSdk).

pub mod categories;
pub mod products;

pub use categories::CategoryQuery;
pub use products::{PageFetch, ProductQuery};
