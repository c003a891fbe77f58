use serde::{Deserialize, Serialize};

use super::product::Product;

/// A cart entry pairing one product with a quantity.
///
/// At most one line item exists per product id, and `quantity >= 1` always;
/// the store removes the line item rather than keeping a non-positive
/// quantity. The embedded product snapshot keeps the price at the time it
/// was added, so later catalog price changes do not affect cart totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLineItem {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// `price * quantity` for this line.
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}
