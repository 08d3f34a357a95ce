use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::Utc;
use tokio::time::sleep;

use crate::{
    audit::AuditLog,
    dto::products::{NewProduct, ProductPatch},
    error::{StoreError, StoreResult},
    models::Product,
    seed,
};

/// Authoritative catalog of products. Cheap to clone; clones share the
/// same collection.
#[derive(Clone)]
pub struct ProductStore {
    catalog: Arc<Mutex<Vec<Product>>>,
    latency: Duration,
    audit: AuditLog,
}

impl ProductStore {
    pub fn new(latency: Duration, audit: AuditLog) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(Vec::new())),
            latency,
            audit,
        }
    }

    pub fn seeded(latency: Duration, audit: AuditLog) -> Self {
        let store = Self::new(latency, audit);
        store
            .catalog
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(seed::products());
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Product>> {
        self.catalog.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the whole catalog. The source is local, but resolving
    /// still waits out the configured latency to model a network round trip.
    pub async fn get_all(&self) -> Vec<Product> {
        sleep(self.latency).await;
        self.lock().clone()
    }

    pub async fn get_by_id(&self, id: i64) -> Option<Product> {
        self.lock().iter().find(|p| p.id == id).cloned()
    }

    pub async fn create(&self, new: NewProduct) -> Product {
        let mut catalog = self.lock();
        let id = catalog.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let images = new
            .images
            .filter(|images| !images.is_empty())
            .unwrap_or_else(|| vec![placeholder_image(id)]);
        let product = Product {
            id,
            title: new.title.unwrap_or_else(|| "Untitled product".to_string()),
            description: new.description.unwrap_or_default(),
            price: new.price.unwrap_or(0),
            images,
            rating: new.rating.unwrap_or(0.0),
            review_count: new.review_count.unwrap_or(0),
            category: new.category.unwrap_or_else(|| "Misc".to_string()),
            created_at: Utc::now(),
        };
        catalog.push(product.clone());
        drop(catalog);

        self.audit.record(
            "product_create",
            Some("products"),
            Some(serde_json::json!({ "product_id": product.id })),
        );
        product
    }

    /// Shallow-merges the patch over the existing record.
    pub async fn update(&self, id: i64, patch: ProductPatch) -> StoreResult<Product> {
        let mut catalog = self.lock();
        let product = catalog
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;

        if let Some(title) = patch.title {
            product.title = title;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(images) = patch.images {
            product.images = images;
        }
        if let Some(rating) = patch.rating {
            product.rating = rating;
        }
        if let Some(review_count) = patch.review_count {
            product.review_count = review_count;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        let product = product.clone();
        drop(catalog);

        self.audit.record(
            "product_update",
            Some("products"),
            Some(serde_json::json!({ "product_id": id })),
        );
        Ok(product)
    }

    /// Removes the record if present. Absent ids are not an error.
    pub async fn delete(&self, id: i64) {
        self.lock().retain(|p| p.id != id);
        self.audit.record(
            "product_delete",
            Some("products"),
            Some(serde_json::json!({ "product_id": id })),
        );
    }

    /// Distinct category values, in first-seen order.
    pub async fn categories(&self) -> Vec<String> {
        let catalog = self.lock();
        let mut categories: Vec<String> = Vec::new();
        for product in catalog.iter() {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }
}

fn placeholder_image(id: i64) -> String {
    let index = (id.unsigned_abs() as usize) % seed::DEFAULT_IMAGES.len();
    seed::DEFAULT_IMAGES[index].to_string()
}
