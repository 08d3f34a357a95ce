use crate::{error::StoreResult, models::CartLine, store::CartStore};

/// Cart view for the presentation layer. `item_count` and `total` are
/// derived from the cached lines on demand.
pub struct CartContext {
    store: CartStore,
    items: Vec<CartLine>,
    loading: bool,
}

impl CartContext {
    pub fn new(store: CartStore) -> Self {
        Self {
            store,
            items: Vec::new(),
            loading: false,
        }
    }

    pub async fn refresh(&mut self) {
        self.loading = true;
        let items = self.store.items().await;
        self.loading = false;
        self.items = items;
    }

    pub async fn add_to_cart(&mut self, product_id: i64, quantity: i32) -> StoreResult<()> {
        self.loading = true;
        let result = self.store.add(product_id, quantity).await;
        self.loading = false;
        let line = result?;
        if let Some(cached) = self.items.iter_mut().find(|item| item.id == line.id) {
            *cached = line;
        } else {
            self.items.push(line);
        }
        Ok(())
    }

    pub async fn update_quantity(&mut self, line_id: i64, quantity: i32) -> StoreResult<()> {
        self.loading = true;
        let result = self.store.set_quantity(line_id, quantity).await;
        self.loading = false;
        result?;
        if let Some(cached) = self.items.iter_mut().find(|item| item.id == line_id) {
            cached.quantity = quantity;
        }
        Ok(())
    }

    pub async fn remove_from_cart(&mut self, line_id: i64) {
        self.loading = true;
        self.store.remove(line_id).await;
        self.loading = false;
        self.items.retain(|item| item.id != line_id);
    }

    pub async fn clear_cart(&mut self) {
        self.loading = true;
        self.store.clear().await;
        self.loading = false;
        self.items.clear();
    }

    /// Checkout has no order pipeline behind it; it only empties the cart.
    pub async fn checkout(&mut self) {
        self.clear_cart().await;
    }

    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    pub fn item_count(&self) -> i32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of snapshot price times quantity across the cached lines, in
    /// minor units.
    pub fn total(&self) -> i64 {
        self.items
            .iter()
            .map(|item| item.product.price * i64::from(item.quantity))
            .sum()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }
}
