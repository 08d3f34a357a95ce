use serde::Deserialize;

/// Partial product for `ProductStore::create`. Unset fields fall back to
/// the store's defaults.
#[derive(Debug, Default, Deserialize)]
pub struct NewProduct {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub images: Option<Vec<String>>,
    pub rating: Option<f32>,
    pub review_count: Option<i32>,
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub images: Option<Vec<String>>,
    pub rating: Option<f32>,
    pub review_count: Option<i32>,
    pub category: Option<String>,
}
