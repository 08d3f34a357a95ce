use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;

use crate::{
    audit::AuditLog,
    error::{StoreError, StoreResult},
    models::CartLine,
    store::ProductStore,
};

struct CartState {
    lines: Vec<CartLine>,
    next_line_id: i64,
}

/// The active cart. One line per distinct product; adding an existing
/// product merges into the existing line.
#[derive(Clone)]
pub struct CartStore {
    state: Arc<Mutex<CartState>>,
    products: ProductStore,
    audit: AuditLog,
}

impl CartStore {
    pub fn new(products: ProductStore, audit: AuditLog) -> Self {
        Self {
            state: Arc::new(Mutex::new(CartState {
                lines: Vec::new(),
                next_line_id: 1,
            })),
            products,
            audit,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CartState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub async fn items(&self) -> Vec<CartLine> {
        self.lock().lines.clone()
    }

    /// Adds `quantity` of the product, merging into an existing line when
    /// one exists. Fails before touching the cart when the product does
    /// not resolve.
    pub async fn add(&self, product_id: i64, quantity: i32) -> StoreResult<CartLine> {
        let product = self
            .products
            .get_by_id(product_id)
            .await
            .ok_or(StoreError::NotFound)?;

        let mut state = self.lock();
        let position = state
            .lines
            .iter()
            .position(|line| line.product_id == product_id);
        let line = match position {
            Some(index) => {
                let existing = &mut state.lines[index];
                existing.quantity += quantity;
                existing.clone()
            }
            None => {
                let line = CartLine {
                    id: state.next_line_id,
                    product_id,
                    product,
                    quantity,
                    added_at: Utc::now(),
                };
                state.next_line_id += 1;
                state.lines.push(line.clone());
                line
            }
        };
        drop(state);

        self.audit.record(
            "cart_add",
            Some("cart_lines"),
            Some(serde_json::json!({ "product_id": product_id, "quantity": quantity })),
        );
        Ok(line)
    }

    /// Sets the quantity verbatim. Keeping it positive is the caller's
    /// contract; a zero or negative line stays visible.
    pub async fn set_quantity(&self, line_id: i64, quantity: i32) -> StoreResult<()> {
        let mut state = self.lock();
        let line = state
            .lines
            .iter_mut()
            .find(|line| line.id == line_id)
            .ok_or(StoreError::NotFound)?;
        line.quantity = quantity;
        drop(state);

        self.audit.record(
            "cart_set_quantity",
            Some("cart_lines"),
            Some(serde_json::json!({ "line_id": line_id, "quantity": quantity })),
        );
        Ok(())
    }

    /// Removes the line if present. Absent ids are not an error.
    pub async fn remove(&self, line_id: i64) {
        self.lock().lines.retain(|line| line.id != line_id);
        self.audit.record(
            "cart_remove",
            Some("cart_lines"),
            Some(serde_json::json!({ "line_id": line_id })),
        );
    }

    pub async fn clear(&self) {
        self.lock().lines.clear();
        self.audit.record("cart_clear", Some("cart_lines"), None);
    }

    /// Sum of snapshot price times quantity, in minor units.
    pub async fn total(&self) -> i64 {
        self.lock()
            .lines
            .iter()
            .map(|line| line.product.price * i64::from(line.quantity))
            .sum()
    }
}
