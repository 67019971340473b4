use crate::api::controllers::dto::address_dto::AddressRequest;
use crate::api::controllers::dto::product_dto::{CreateProductRequest, UpdateProductRequest};
use crate::data::models::product::{NewProduct, UpdateProduct};
use crate::services::address_service::AddressForm;

impl<'a> From<&'a CreateProductRequest> for NewProduct<'a> {
    fn from(dto: &'a CreateProductRequest) -> Self {
        NewProduct {
            name: &dto.name,
            description: dto.description.as_deref(),
            image: dto.image.as_deref(),
            price: dto.price.clone(),
            original_price: dto.original_price.clone(),
            stock: dto.stock,
            category_id: dto.category_id,
            brand: dto.brand.as_deref(),
            sku: dto.sku.as_deref(),
            status: dto.status.as_deref().unwrap_or("active"),
            featured: dto.featured.unwrap_or(false),
        }
    }
}

impl<'a> From<&'a UpdateProductRequest> for UpdateProduct<'a> {
    fn from(dto: &'a UpdateProductRequest) -> Self {
        UpdateProduct {
            name: dto.name.as_deref(),
            description: dto.description.as_deref(),
            image: dto.image.as_deref(),
            price: dto.price.clone(),
            original_price: dto.original_price.clone(),
            stock: dto.stock,
            category_id: dto.category_id,
            brand: dto.brand.as_deref(),
            sku: dto.sku.as_deref(),
            status: dto.status.as_deref(),
            featured: dto.featured,
        }
    }
}

impl<'a> From<&'a AddressRequest> for AddressForm<'a> {
    fn from(dto: &'a AddressRequest) -> Self {
        AddressForm {
            name: &dto.name,
            phone: &dto.phone,
            province: &dto.province,
            city: &dto.city,
            district: &dto.district,
            detail: &dto.detail,
            is_default: dto.is_default,
        }
    }
}
