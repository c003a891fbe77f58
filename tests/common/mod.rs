//! Shared test fixtures for the storefront SDK integration tests.
//!
//! Provides `MockCatalog`, a wiremock-backed stand-in for the remote
//! product API. The SDK's HTTP client is blocking, so the mock server runs
//! on a manually constructed multi-thread tokio runtime and is driven from
//! the plain test thread.

#![allow(dead_code)]

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::{Mock, MockServer};

use storefront_sdk::{Product, StorefrontSdk};

pub struct MockCatalog {
    rt: tokio::runtime::Runtime,
    pub server: MockServer,
}

impl MockCatalog {
    pub fn start() -> Self {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .unwrap();
        let server = rt.block_on(MockServer::start());
        Self { rt, server }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn register(&self, mock: Mock) {
        self.rt.block_on(self.server.register(mock));
    }

    /// An SDK pointed at this mock server, with an in-memory cart.
    pub fn sdk(&self) -> StorefrontSdk {
        StorefrontSdk::builder()
            .base_url(self.uri())
            .timeout(Duration::from_secs(5))
            .in_memory_cart(true)
            .build()
            .unwrap()
    }

    /// Same, with a custom page size.
    pub fn sdk_with_page_size(&self, page_size: u32) -> StorefrontSdk {
        StorefrontSdk::builder()
            .base_url(self.uri())
            .timeout(Duration::from_secs(5))
            .page_size(page_size)
            .in_memory_cart(true)
            .build()
            .unwrap()
    }
}

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

pub fn product_json(id: u64, title: &str, price: f64, rating: f64, category: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{title} description"),
        "price": price,
        "discountPercentage": 5.0,
        "rating": rating,
        "stock": 25,
        "brand": "Acme",
        "category": category,
        "thumbnail": format!("https://cdn.example/{id}/thumb.jpg"),
        "images": [format!("https://cdn.example/{id}/1.jpg")]
    })
}

/// A small mixed corpus: three laptops and three phones.
pub fn sample_corpus() -> Vec<Value> {
    vec![
        product_json(1, "Aero Laptop 13", 120.0, 4.2, "laptops"),
        product_json(2, "Zen Phone Case", 15.0, 3.5, "smartphones"),
        product_json(3, "Phone Dock Laptop Stand", 150.0, 4.6, "laptops"),
        product_json(4, "Budget Phone", 95.0, 3.1, "smartphones"),
        product_json(5, "Gamer Laptop 17", 1800.0, 4.9, "laptops"),
        product_json(6, "Flagship Phone", 999.0, 4.4, "smartphones"),
    ]
}

/// Wrap products in the remote response envelope.
pub fn page_body(products: &[Value], total: u64, skip: u64, limit: u64) -> Value {
    json!({
        "products": products,
        "total": total,
        "skip": skip,
        "limit": limit,
    })
}

/// A typed product for cart tests.
pub fn typed_product(id: u64, title: &str, price: f64) -> Product {
    serde_json::from_value(product_json(id, title, price, 4.0, "laptops")).unwrap()
}
