pub mod auth;
pub mod cart;
pub mod products;
pub mod theme;

pub use auth::AuthContext;
pub use cart::CartContext;
pub use products::ProductContext;
pub use theme::ThemeContext;
