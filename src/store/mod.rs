pub mod auth;
pub mod cart;
pub mod products;

pub use auth::AuthStore;
pub use cart::CartStore;
pub use products::ProductStore;
