//! Product entity as served by the upstream catalog.

use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// Only `id` is guaranteed; the upstream omits fields freely (for example
/// the record echoed back after a create carries no `images`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub discount_percentage: Option<f64>,
    pub rating: Option<f64>,
    pub stock: Option<i64>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    pub images: Vec<String>,
}

/// One page of a product listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

/// Payload for creating a product upstream.
///
/// Built from an already validated request, so every field is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub rating: f64,
    pub stock: i64,
    pub brand: String,
    pub category: String,
    pub thumbnail: String,
}

impl NewProduct {
    /// The record the upstream is expected to echo back, with the given id
    pub fn into_product(self, id: u64) -> Product {
        Product {
            id,
            title: Some(self.title),
            description: Some(self.description),
            price: Some(self.price),
            discount_percentage: Some(self.discount_percentage),
            rating: Some(self.rating),
            stock: Some(self.stock),
            brand: Some(self.brand),
            category: Some(self.category),
            thumbnail: Some(self.thumbnail),
            images: Vec::new(),
        }
    }
}
