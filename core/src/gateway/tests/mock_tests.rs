//! Tests for the in-memory catalog gateway

use crate::domain::entities::{Credentials, NewProduct, Product, User};
use crate::errors::GatewayError;
use crate::gateway::{AuthGateway, MockCatalogGateway, ProductGateway, UserGateway};

fn phone() -> Product {
    Product {
        id: 1,
        title: Some("iPhone 9".to_string()),
        price: Some(549.0),
        stock: Some(94),
        ..Product::default()
    }
}

fn new_product() -> NewProduct {
    NewProduct {
        title: "Desk Lamp".to_string(),
        description: "LED lamp".to_string(),
        price: 19.99,
        discount_percentage: 5.0,
        rating: 4.2,
        stock: 12,
        brand: "Lumen".to_string(),
        category: "home".to_string(),
        thumbnail: "https://cdn.example.com/lamp.png".to_string(),
    }
}

#[tokio::test]
async fn test_login_accepts_registered_account() {
    let gateway = MockCatalogGateway::new().with_account("emilys", "emilyspass");

    let session = gateway
        .login(&Credentials::new("emilys", "emilyspass"))
        .await
        .unwrap();

    assert_eq!(session.username, "emilys");
    assert_eq!(session.token, "token-emilys");
}

#[tokio::test]
async fn test_login_rejects_wrong_password_with_400() {
    let gateway = MockCatalogGateway::new().with_account("emilys", "emilyspass");

    let error = gateway
        .login(&Credentials::new("emilys", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(error.status_code(), Some(400));
    assert_eq!(error.message_or(""), "Invalid credentials");
}

#[tokio::test]
async fn test_authorized_listing_by_token_kind() {
    let gateway = MockCatalogGateway::new()
        .with_product(phone())
        .with_account("emilys", "emilyspass")
        .with_forbidden_token("blocked");

    let page = gateway.list_authorized_products("token-emilys").await.unwrap();
    assert_eq!(page.products.len(), 1);

    let forbidden = gateway.list_authorized_products("blocked").await.unwrap_err();
    assert_eq!(forbidden.status_code(), Some(403));

    let unknown = gateway.list_authorized_products("nope").await.unwrap_err();
    assert_eq!(unknown.status_code(), Some(401));

    assert_eq!(gateway.call_count(), 3);
}

#[tokio::test]
async fn test_get_missing_product_is_404() {
    let gateway = MockCatalogGateway::new().with_product(phone());

    assert_eq!(gateway.get_product(1).await.unwrap().id, 1);
    let error = gateway.get_product(999).await.unwrap_err();
    assert_eq!(error.status_code(), Some(404));
}

#[tokio::test]
async fn test_add_product_assigns_next_id() {
    let gateway = MockCatalogGateway::new().with_product(phone());

    let reply = gateway.add_product(&new_product()).await.unwrap();

    assert_eq!(reply.status, 201);
    assert_eq!(reply.body.id, 2);
    assert_eq!(reply.body.title.as_deref(), Some("Desk Lamp"));
    assert_eq!(gateway.list_products().await.unwrap().total, 2);
}

#[tokio::test]
async fn test_failure_applies_to_every_call() {
    let gateway = MockCatalogGateway::new()
        .with_user(User::default())
        .failing_with(GatewayError::Transport("connection refused".to_string()));

    assert!(matches!(
        gateway.list_users().await,
        Err(GatewayError::Transport(_))
    ));
    assert!(gateway.list_products().await.is_err());
    assert_eq!(gateway.call_count(), 2);
}
