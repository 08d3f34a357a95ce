use crate::{
    dto::products::{NewProduct, ProductPatch},
    error::StoreResult,
    models::Product,
    store::ProductStore,
};

/// Catalog view for the presentation layer: a cached collection, a loading
/// flag, and the search/category filter. Mutations patch the cache from
/// the store's returned value rather than re-fetching the collection.
pub struct ProductContext {
    store: ProductStore,
    products: Vec<Product>,
    loading: bool,
    search_query: String,
    selected_category: String,
}

impl ProductContext {
    pub fn new(store: ProductStore) -> Self {
        Self {
            store,
            products: Vec::new(),
            loading: false,
            search_query: String::new(),
            selected_category: String::new(),
        }
    }

    /// Full reload of the cached catalog.
    pub async fn refresh(&mut self) {
        self.loading = true;
        let products = self.store.get_all().await;
        self.loading = false;
        self.products = products;
    }

    pub async fn create(&mut self, new: NewProduct) -> Product {
        self.loading = true;
        let product = self.store.create(new).await;
        self.loading = false;
        self.products.push(product.clone());
        product
    }

    pub async fn update(&mut self, id: i64, patch: ProductPatch) -> StoreResult<Product> {
        self.loading = true;
        let result = self.store.update(id, patch).await;
        self.loading = false;
        let product = result?;
        if let Some(cached) = self.products.iter_mut().find(|p| p.id == id) {
            *cached = product.clone();
        }
        Ok(product)
    }

    pub async fn delete(&mut self, id: i64) {
        self.loading = true;
        self.store.delete(id).await;
        self.loading = false;
        self.products.retain(|p| p.id != id);
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_selected_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    /// Products matching the current search query (title or description,
    /// case-insensitive) and selected category. An empty query or category
    /// matches everything.
    pub fn filtered_products(&self) -> Vec<&Product> {
        let query = self.search_query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                let matches_query = query.is_empty()
                    || p.title.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query);
                let matches_category = self.selected_category.is_empty()
                    || p.category == self.selected_category;
                matches_query && matches_category
            })
            .collect()
    }

    pub fn product_by_id(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }
}
