use crate::{
    audit::AuditLog,
    config::AppConfig,
    store::{AuthStore, CartStore, ProductStore},
};

/// The three seeded store handles plus the shared audit trail, constructed
/// once per process and passed around by clone.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductStore,
    pub cart: CartStore,
    pub auth: AuthStore,
    pub audit: AuditLog,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let audit = AuditLog::new(config.audit_capacity);
        let products = ProductStore::seeded(config.latency(), audit.clone());
        let cart = CartStore::new(products.clone(), audit.clone());
        let auth = AuthStore::seeded(audit.clone());
        Self {
            products,
            cart,
            auth,
            audit,
        }
    }
}
