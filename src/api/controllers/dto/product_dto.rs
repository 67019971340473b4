use crate::data::models::product::Product;
use crate::data::repos::implementors::product_repo::{ProductQuery, ProductSort, SortDirection};
use crate::services::product_service::ProductPage;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: BigDecimal,
    pub original_price: Option<BigDecimal>,
    pub stock: i32,
    pub category_id: Option<i32>,
    pub brand: Option<String>,
    pub sku: Option<String>,
    pub status: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: Option<BigDecimal>,
    pub original_price: Option<BigDecimal>,
    pub stock: Option<i32>,
    pub category_id: Option<i32>,
    pub brand: Option<String>,
    pub sku: Option<String>,
    pub status: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ProductQueryParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub keyword: Option<String>,
    pub category_id: Option<i32>,
    pub featured: Option<bool>,
    pub min_price: Option<BigDecimal>,
    pub max_price: Option<BigDecimal>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl From<ProductQueryParams> for ProductQuery {
    fn from(params: ProductQueryParams) -> Self {
        let sort_by = params
            .sort_by
            .as_deref()
            .and_then(|s| ProductSort::from_str(s).ok())
            .unwrap_or_default();
        let direction = match params.order.as_deref() {
            Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            _ => SortDirection::default(),
        };
        ProductQuery {
            category_id: params.category_id,
            search: params.keyword,
            featured: params.featured,
            min_price: params.min_price,
            max_price: params.max_price,
            sort_by,
            direction,
            page: params.page.unwrap_or(1),
            per_page: params.per_page.unwrap_or(12),
        }
    }
}

#[derive(Serialize)]
pub struct ProductResponse {
    pub product_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: BigDecimal,
    pub original_price: Option<BigDecimal>,
    pub stock: i32,
    pub category_id: Option<i32>,
    pub brand: Option<String>,
    pub sku: Option<String>,
    pub status: String,
    pub featured: bool,
    pub views: i32,
    pub sales: i32,
    pub rating: Option<BigDecimal>,
    pub rating_count: i32,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.product_id,
            name: product.name,
            description: product.description,
            image: product.image,
            price: product.price,
            original_price: product.original_price,
            stock: product.stock,
            category_id: product.category_id,
            brand: product.brand,
            sku: product.sku,
            status: product.status,
            featured: product.featured,
            views: product.views,
            sales: product.sales,
            rating: product.rating,
            rating_count: product.rating_count,
            created_at: product.created_at.map(|d| d.to_string()),
            updated_at: product.updated_at.map(|d| d.to_string()),
        }
    }
}

#[derive(Serialize)]
pub struct ProductPageResponse {
    pub items: Vec<ProductResponse>,
    pub current_page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl From<ProductPage> for ProductPageResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            items: page.items.into_iter().map(ProductResponse::from).collect(),
            current_page: page.current_page,
            per_page: page.per_page,
            total: page.total,
            total_pages: page.total_pages,
        }
    }
}
