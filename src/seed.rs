use chrono::Utc;

use crate::models::{AccountType, Product, User};

pub const DEFAULT_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1556656793-08538906a9f8?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1575311373937-040b8e1fd5b6?w=400&h=400&fit=crop",
];

/// The three demo products every process starts with.
pub fn products() -> Vec<Product> {
    let now = Utc::now();
    vec![
        Product {
            id: 1,
            title: "Static Running Shoes".to_string(),
            description: "Lightweight shoes for testing UI.".to_string(),
            price: 12999,
            images: vec![DEFAULT_IMAGES[0].to_string()],
            rating: 4.5,
            review_count: 24,
            category: "Fitness".to_string(),
            created_at: now,
        },
        Product {
            id: 2,
            title: "Static Fitness Band".to_string(),
            description: "A fitness band used as placeholder.".to_string(),
            price: 4990,
            images: vec![DEFAULT_IMAGES[1].to_string()],
            rating: 4.2,
            review_count: 12,
            category: "Accessories".to_string(),
            created_at: now,
        },
        Product {
            id: 3,
            title: "Static Protein Powder".to_string(),
            description: "Tasty protein powder for demos.".to_string(),
            price: 5900,
            images: vec![DEFAULT_IMAGES[2].to_string()],
            rating: 4.8,
            review_count: 40,
            category: "Food & Beverage".to_string(),
            created_at: now,
        },
    ]
}

pub fn users() -> Vec<User> {
    let now = Utc::now();
    vec![
        User {
            id: "u1".to_string(),
            email: "user@example.com".to_string(),
            name: "Test User".to_string(),
            avatar: None,
            account_type: AccountType::Buyer,
            created_at: now,
        },
        User {
            id: "seller1".to_string(),
            email: "seller@example.com".to_string(),
            name: "Test Seller".to_string(),
            avatar: None,
            account_type: AccountType::Seller,
            created_at: now,
        },
    ]
}
