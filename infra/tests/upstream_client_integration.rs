//! Integration tests for UpstreamClient against a mock upstream server

use httpmock::prelude::*;
use serde_json::json;

use cg_core::domain::entities::{Credentials, NewProduct};
use cg_core::errors::GatewayError;
use cg_core::gateway::{AuthGateway, ProductGateway, UserGateway};
use cg_infra::UpstreamClient;
use cg_shared::config::UpstreamConfig;

fn client_for(server: &MockServer) -> UpstreamClient {
    UpstreamClient::new(UpstreamConfig::new(server.base_url())).unwrap()
}

fn perfume_oil() -> NewProduct {
    NewProduct {
        title: "Perfume Oil".to_string(),
        description: "Mega Discount, Impression of Acqua Di Gio".to_string(),
        price: 13.0,
        discount_percentage: 8.4,
        rating: 4.26,
        stock: 65,
        brand: "Impression of Acqua Di Gio".to_string(),
        category: "fragrances".to_string(),
        thumbnail: "https://cdn.dummyjson.com/products/11/thumbnail.jpg".to_string(),
    }
}

#[tokio::test]
async fn test_login_posts_credentials() {
    let server = MockServer::start_async().await;
    let login = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/auth/login")
                .header("accept", "application/json")
                .json_body(json!({ "username": "emilys", "password": "emilyspass" }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "id": 1,
                    "username": "emilys",
                    "email": "emily.johnson@x.dummyjson.com",
                    "firstName": "Emily",
                    "accessToken": "access-abc",
                    "refreshToken": "refresh-abc"
                }));
        })
        .await;

    let session = client_for(&server)
        .login(&Credentials::new("emilys", "emilyspass"))
        .await
        .unwrap();

    login.assert_async().await;
    assert_eq!(session.token, "access-abc");
    assert_eq!(session.first_name.as_deref(), Some("Emily"));
}

#[tokio::test]
async fn test_login_rejection_keeps_status_and_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(400)
                .header("Content-Type", "application/json")
                .json_body(json!({ "message": "Invalid credentials" }));
        })
        .await;

    let error = client_for(&server)
        .login(&Credentials::new("emilys", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(error.status_code(), Some(400));
    assert_eq!(error.message_or("fallback"), "Invalid credentials");
}

#[tokio::test]
async fn test_authorized_products_forward_bearer_token() {
    let server = MockServer::start_async().await;
    let listing = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/auth/products")
                .header("authorization", "Bearer token-123");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "products": [{ "id": 1, "title": "Essence Mascara Lash Princess", "price": 9.99 }],
                    "total": 194,
                    "skip": 0,
                    "limit": 30
                }));
        })
        .await;

    let page = client_for(&server)
        .list_authorized_products("token-123")
        .await
        .unwrap();

    listing.assert_async().await;
    assert_eq!(page.total, 194);
    assert_eq!(page.products[0].price, Some(9.99));
}

#[tokio::test]
async fn test_authorized_products_forbidden() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/auth/products");
            then.status(403)
                .header("Content-Type", "application/json")
                .json_body(json!({ "message": "Authentication Problem" }));
        })
        .await;

    let error = client_for(&server)
        .list_authorized_products("blocked")
        .await
        .unwrap_err();

    assert_eq!(error.status_code(), Some(403));
    assert_eq!(error.message_or("fallback"), "Authentication Problem");
}

#[tokio::test]
async fn test_get_product_by_id() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products/11");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({ "id": 11, "title": "Perfume Oil", "stock": 65 }));
        })
        .await;

    let product = client_for(&server).get_product(11).await.unwrap();

    assert_eq!(product.id, 11);
    assert_eq!(product.stock, Some(65));
}

#[tokio::test]
async fn test_get_missing_product_reports_404() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products/999");
            then.status(404)
                .json_body(json!({ "message": "Product with id '999' not found" }));
        })
        .await;

    let error = client_for(&server).get_product(999).await.unwrap_err();

    assert_eq!(error.status_code(), Some(404));
}

#[tokio::test]
async fn test_negative_product_id_is_forwarded() {
    let server = MockServer::start_async().await;
    let lookup = server
        .mock_async(|when, then| {
            when.method(GET).path("/products/-1");
            then.status(404)
                .json_body(json!({ "message": "Product with id '-1' not found" }));
        })
        .await;

    let error = client_for(&server).get_product(-1).await.unwrap_err();

    lookup.assert_async().await;
    assert_eq!(error.status_code(), Some(404));
}

#[tokio::test]
async fn test_add_product_sends_camel_case_body_and_keeps_status() {
    let server = MockServer::start_async().await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/products/add")
                .header("content-type", "application/json")
                .json_body(json!({
                    "title": "Perfume Oil",
                    "description": "Mega Discount, Impression of Acqua Di Gio",
                    "price": 13.0,
                    "discountPercentage": 8.4,
                    "rating": 4.26,
                    "stock": 65,
                    "brand": "Impression of Acqua Di Gio",
                    "category": "fragrances",
                    "thumbnail": "https://cdn.dummyjson.com/products/11/thumbnail.jpg"
                }));
            then.status(201)
                .header("Content-Type", "application/json")
                .json_body(json!({ "id": 195, "title": "Perfume Oil", "price": 13, "stock": 65 }));
        })
        .await;

    let reply = client_for(&server).add_product(&perfume_oil()).await.unwrap();

    create.assert_async().await;
    assert_eq!(reply.status, 201);
    assert_eq!(reply.body.id, 195);
    assert_eq!(reply.body.price, Some(13.0));
}

#[tokio::test]
async fn test_list_users() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "users": [{ "id": 1, "firstName": "Emily", "lastName": "Johnson", "age": 28 }],
                    "total": 208,
                    "skip": 0,
                    "limit": 30
                }));
        })
        .await;

    let page = client_for(&server).list_users().await.unwrap();

    assert_eq!(page.total, 208);
    assert_eq!(page.users[0].age, Some(28));
}

#[tokio::test]
async fn test_unexpected_body_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let error = client_for(&server).list_users().await.unwrap_err();

    assert!(matches!(error, GatewayError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_upstream_is_transport_error() {
    // Nothing listens on port 9 of localhost in test environments.
    let client = UpstreamClient::new(UpstreamConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
    })
    .unwrap();

    let error = client.list_products().await.unwrap_err();

    assert!(matches!(error, GatewayError::Transport(_)));
}
