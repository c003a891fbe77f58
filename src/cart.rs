//! Client-side shopping cart with durable local persistence.
//!
//! The cart is an in-memory table of line items (product snapshot plus
//! quantity) with merge-on-add semantics and derived totals. Every mutation
//! re-serializes the full table to a local file, fire-and-forget: a failed
//! write is logged and dropped, since cart state is not authoritative
//! financial state. On startup the table is restored through a small
//! hydration state machine, so consumers can tell "confirmed empty" apart
//! from "not restored yet".

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::models::{CartLineItem, Product};

// ---------------------------------------------------------------------------
// HydrationState
// ---------------------------------------------------------------------------

/// Restoration lifecycle of a persisted cart.
///
/// Moves `Uninitialized → Restoring → Ready` exactly once. Until `Ready`,
/// the visible cart contents are not authoritative and should be rendered
/// as loading, never as confirmed empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationState {
    Uninitialized,
    Restoring,
    Ready,
}

// ---------------------------------------------------------------------------
// CartStore
// ---------------------------------------------------------------------------

pub struct CartStore {
    items: Vec<CartLineItem>,
    hydration: HydrationState,
    storage_path: Option<PathBuf>,
}

impl CartStore {
    /// A cart that never touches the filesystem. Ready immediately.
    pub fn in_memory() -> Self {
        Self {
            items: Vec::new(),
            hydration: HydrationState::Ready,
            storage_path: None,
        }
    }

    /// A cart persisted at `path`. Starts `Uninitialized`; call
    /// [`restore`](Self::restore) before displaying its contents.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            items: Vec::new(),
            hydration: HydrationState::Uninitialized,
            storage_path: Some(path.as_ref().to_path_buf()),
        }
    }

    pub fn hydration(&self) -> HydrationState {
        self.hydration
    }

    pub fn is_ready(&self) -> bool {
        self.hydration == HydrationState::Ready
    }

    /// Restore the line-item table from durable storage.
    ///
    /// A missing file is an empty cart (first run). A corrupt file is
    /// logged, deleted, and treated as empty; restoration never fails.
    /// Calling this again after the store is `Ready` is a no-op.
    pub fn restore(&mut self) {
        if self.hydration == HydrationState::Ready {
            return;
        }
        self.hydration = HydrationState::Restoring;

        if let Some(path) = self.storage_path.clone() {
            match fs::read_to_string(&path) {
                Ok(contents) => match serde_json::from_str::<Vec<CartLineItem>>(&contents) {
                    Ok(items) => {
                        // Drop any entry that violates the quantity invariant.
                        self.items = items.into_iter().filter(|i| i.quantity >= 1).collect();
                        debug!(items = self.items.len(), "cart restored");
                    }
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "corrupt cart file; starting empty");
                        let _ = fs::remove_file(&path);
                    }
                },
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "cart file unreadable; starting empty");
                }
            }
        }

        self.hydration = HydrationState::Ready;
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    // -- Mutations ----------------------------------------------------------

    /// Add one unit of `product`: increments the existing line item's
    /// quantity, or creates a new line item with quantity 1.
    ///
    /// No stock-limit check happens here; guarding against over-adding is
    /// the presentation layer's job.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartLineItem::new(product.clone()));
        }
        self.persist();
    }

    /// Delete the line item for `product_id`. No-op when absent.
    pub fn remove_item(&mut self, product_id: u64) {
        self.items.retain(|i| i.product.id != product_id);
        self.persist();
    }

    /// Set the quantity of an existing line item. A quantity of 0 removes
    /// the line item instead; an unknown id is a no-op.
    pub fn update_quantity(&mut self, product_id: u64, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
        self.persist();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    // -- Derived aggregates --------------------------------------------------

    /// Sum of `price * quantity` over all line items, using each item's
    /// price at the time it was added.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Sum of all quantities (not the count of distinct line items).
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    // -- Persistence ---------------------------------------------------------

    /// Serialize the full table to storage. Writes go to a temp file first
    /// and are renamed into place, so an interrupted write never leaves a
    /// corrupt table behind. Failures are logged and dropped.
    fn persist(&self) {
        let Some(path) = &self.storage_path else {
            return;
        };
        if let Err(e) = self.write_table(path) {
            warn!(path = %path.display(), error = %e, "cart persistence failed; keeping in-memory state");
        }
    }

    fn write_table(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("json.tmp");
        let payload = serde_json::to_vec_pretty(&self.items)?;
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, path)
    }
}
