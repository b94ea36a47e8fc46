//! Product request and response bodies.
//!
//! Responses use the local naming: `title` is exposed as `name`, `stock` as
//! `stockQuantity`, and prices are decimals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

use cg_core::domain::entities::{NewProduct, Product, ProductPage};

use super::common::not_blank;

/// Body of a product create request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreateRequest {
    #[validate(
        required(message = "Title is required"),
        custom(function = "not_blank", message = "Title is required"),
        length(max = 100, message = "Title must be at most 100 characters")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "Description is required"),
        custom(function = "not_blank", message = "Description is required")
    )]
    pub description: Option<String>,

    #[validate(
        required(message = "Price is required"),
        range(exclusive_min = 0.0, message = "Price must be greater than zero")
    )]
    pub price: Option<f64>,

    #[validate(
        required(message = "Discount percentage is required"),
        range(min = 0.0, max = 100.0, message = "Discount percentage must be between 0 and 100")
    )]
    pub discount_percentage: Option<f64>,

    #[validate(
        required(message = "Rating is required"),
        range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5")
    )]
    pub rating: Option<f64>,

    #[validate(
        required(message = "Stock is required"),
        range(min = 0, message = "Stock must not be negative")
    )]
    pub stock: Option<i64>,

    #[validate(
        required(message = "Brand is required"),
        custom(function = "not_blank", message = "Brand is required")
    )]
    pub brand: Option<String>,

    #[validate(
        required(message = "Category is required"),
        custom(function = "not_blank", message = "Category is required")
    )]
    pub category: Option<String>,

    #[validate(
        required(message = "Thumbnail is required"),
        custom(function = "not_blank", message = "Thumbnail is required")
    )]
    pub thumbnail: Option<String>,
}

impl ProductCreateRequest {
    /// Payload to send upstream; call after validation
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            discount_percentage: self.discount_percentage.unwrap_or_default(),
            rating: self.rating.unwrap_or_default(),
            stock: self.stock.unwrap_or_default(),
            brand: self.brand.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            thumbnail: self.thumbnail.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: u64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub stock_quantity: Option<i64>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.title,
            description: product.description,
            price: product.price.and_then(price_to_decimal),
            brand: product.brand,
            category: product.category,
            stock_quantity: product.stock,
        }
    }
}

/// Convert through the shortest decimal text of the float, so `999.99`
/// stays `999.99` instead of picking up binary noise.
fn price_to_decimal(price: f64) -> Option<Decimal> {
    if !price.is_finite() {
        return None;
    }
    Decimal::from_str(&price.to_string()).ok()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<ProductDto>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

impl From<ProductPage> for ProductsResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            products: page.products.into_iter().map(ProductDto::from).collect(),
            total: page.total,
            skip: page.skip,
            limit: page.limit,
        }
    }
}
