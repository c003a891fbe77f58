use std::path::PathBuf;
use std::time::Duration;

use crate::models::{PriceRange, Product};

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Products shown per page unless overridden through the builder.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Catalog-wide price bounds used when the startup sample cannot be fetched.
pub const FALLBACK_PRICE_RANGE: PriceRange = PriceRange {
    min: 0.0,
    max: 5000.0,
};

/// How many products of the unfiltered listing are sampled to derive the
/// catalog-wide price bounds at startup.
pub const PRICE_SAMPLE_LIMIT: u32 = 100;

/// Quiet period a search keystroke must survive before a fetch is issued.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// File name of the serialized cart line-item table.
pub const CART_FILE: &str = "cart.json";

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("storefront-sdk")
    } else {
        PathBuf::from(".storefront-sdk")
    }
}

/// Small built-in catalog shown when the very first listing fetch fails,
/// so the storefront never opens onto a blank grid.
pub fn placeholder_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            title: "Sample Product 1".to_string(),
            description: "This is a sample product description".to_string(),
            price: 19.99,
            discount_percentage: 0.0,
            rating: 4.5,
            stock: 10,
            brand: None,
            category: "electronics".to_string(),
            thumbnail: "https://via.placeholder.com/300x300".to_string(),
            images: vec![],
        },
        Product {
            id: 2,
            title: "Sample Product 2".to_string(),
            description: "Another sample product description".to_string(),
            price: 29.99,
            discount_percentage: 0.0,
            rating: 4.2,
            stock: 10,
            brand: None,
            category: "clothing".to_string(),
            thumbnail: "https://via.placeholder.com/300x300".to_string(),
            images: vec![],
        },
    ]
}
