use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nexusstore_core::{
    config::AppConfig,
    context::{AuthContext, CartContext, ProductContext, ThemeContext},
    state::AppState,
    storage::FileStorage,
};

/// Drives one representative storefront session against the in-memory
/// stores, standing in for the screens of the mobile app.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,nexusstore_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let state = AppState::new(&config);

    let storage = Arc::new(FileStorage::new(&config.theme_storage_path));
    let mut theme = ThemeContext::load(storage).await;
    tracing::info!(theme = theme.theme().as_str(), "theme loaded");

    let mut auth = AuthContext::new(state.auth.clone());
    auth.hydrate().await;
    auth.login("user@example.com", "password123").await?;
    if let Some(user) = auth.user() {
        tracing::info!(user_id = %user.id, email = %user.email, "logged in");
    }

    let mut products = ProductContext::new(state.products.clone());
    products.refresh().await;
    tracing::info!(count = products.products().len(), "catalog loaded");

    products.set_search_query("band");
    for product in products.filtered_products() {
        tracing::info!(id = product.id, title = %product.title, "search hit");
    }
    products.set_search_query("");

    let mut cart = CartContext::new(state.cart.clone());
    cart.refresh().await;
    cart.add_to_cart(1, 2).await?;
    cart.add_to_cart(2, 1).await?;
    cart.add_to_cart(1, 1).await?;
    cart.update_quantity(2, 3).await?;
    tracing::info!(
        items = cart.item_count(),
        total_cents = cart.total(),
        "cart ready"
    );

    cart.checkout().await;
    tracing::info!(items = cart.item_count(), "checked out");

    let toggled = theme.toggle().await;
    tracing::info!(theme = toggled.as_str(), "theme toggled");

    auth.logout().await;
    tracing::info!(
        audit_entries = state.audit.entries().len(),
        "session finished"
    );

    Ok(())
}
