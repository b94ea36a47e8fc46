//! Unit tests for product entities

use crate::domain::entities::product::{NewProduct, Product, ProductPage};
use serde_json::json;

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

#[test]
fn test_product_decodes_partial_upstream_record() {
    let product: Product = serde_json::from_value(json!({
        "id": 101,
        "title": "Perfume Oil",
        "price": 13,
        "stock": 65
    }))
    .unwrap();

    assert_eq!(product.id, 101);
    assert_eq!(product.title.as_deref(), Some("Perfume Oil"));
    assert_eq!(product.price, Some(13.0));
    assert_eq!(product.stock, Some(65));
    assert!(product.brand.is_none());
    assert!(product.images.is_empty());
}

#[test]
fn test_product_page_tolerates_missing_counters() {
    let page: ProductPage = serde_json::from_value(json!({
        "products": [{ "id": 1, "title": "Essence Mascara Lash Princess" }]
    }))
    .unwrap();

    assert_eq!(page.products.len(), 1);
    assert_eq!(page.total, 0);
}

#[test]
fn test_new_product_serializes_camel_case() {
    let body = serde_json::to_value(perfume_oil()).unwrap();

    assert_eq!(body["discountPercentage"], 8.4);
    assert_eq!(body["stock"], 65);
    assert!(body.get("discount_percentage").is_none());
}

#[test]
fn test_new_product_into_product_keeps_fields() {
    let product = perfume_oil().into_product(195);

    assert_eq!(product.id, 195);
    assert_eq!(product.title.as_deref(), Some("Perfume Oil"));
    assert_eq!(product.rating, Some(4.26));
    assert_eq!(product.category.as_deref(), Some("fragrances"));
}
