//! Sample catalogue used to seed a fresh store.

use crate::models::Product;

/// The two products every fresh in-memory store starts with
pub fn default_products() -> Vec<Product> {
    vec![
        Product {
            id: 123,
            name: "Apple".to_string(),
            description: "A tasty snack.".to_string(),
            price: 49,
            tax_rate: 700,
        },
        Product {
            id: 234,
            name: "Banana".to_string(),
            description: "A long yellow fruit.".to_string(),
            price: 39,
            tax_rate: 700,
        },
    ]
}
