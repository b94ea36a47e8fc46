//! Shared fixtures for the HTTP integration tests
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use cg_api::AppState;
use cg_core::domain::entities::{Product, User};
use cg_core::gateway::MockCatalogGateway;
use serde_json::{json, Value};

pub const USERNAME: &str = "emilys";
pub const PASSWORD: &str = "emilyspass";
pub const VALID_TOKEN: &str = "token-emilys";
pub const FORBIDDEN_TOKEN: &str = "blocked-token";

/// Gateway preloaded with one account, two products and one user
pub fn catalog() -> MockCatalogGateway {
    MockCatalogGateway::new()
        .with_account(USERNAME, PASSWORD)
        .with_forbidden_token(FORBIDDEN_TOKEN)
        .with_product(Product {
            id: 1,
            title: Some("Essence Mascara Lash Princess".to_string()),
            description: Some("Popular mascara".to_string()),
            price: Some(9.99),
            stock: Some(5),
            brand: Some("Essence".to_string()),
            category: Some("beauty".to_string()),
            ..Product::default()
        })
        .with_product(Product {
            id: 2,
            title: Some("Eyeshadow Palette with Mirror".to_string()),
            price: Some(19.99),
            stock: Some(44),
            ..Product::default()
        })
        .with_user(User {
            id: 1,
            first_name: Some("Emily".to_string()),
            last_name: Some("Johnson".to_string()),
            email: Some("emily.johnson@x.dummyjson.com".to_string()),
            username: Some(USERNAME.to_string()),
            age: Some(28),
            ..User::default()
        })
}

pub fn state(gateway: &Arc<MockCatalogGateway>) -> web::Data<AppState<MockCatalogGateway>> {
    web::Data::new(AppState::new(Arc::clone(gateway)))
}

pub fn valid_product_payload() -> Value {
    json!({
        "title": "Perfume Oil",
        "description": "Mega Discount, Impression of Acqua Di Gio",
        "price": 13,
        "discountPercentage": 8.4,
        "rating": 4.26,
        "stock": 65,
        "brand": "Impression of Acqua Di Gio",
        "category": "fragrances",
        "thumbnail": "https://cdn.dummyjson.com/products/11/thumbnail.jpg"
    })
}
