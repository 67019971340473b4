use crate::data::models::address::Address;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct AddressRequest {
    pub name: String,
    pub phone: String,
    pub province: String,
    pub city: String,
    pub district: String,
    pub detail: String,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Serialize)]
pub struct AddressResponse {
    pub address_id: i32,
    pub name: String,
    pub phone: String,
    pub province: String,
    pub city: String,
    pub district: String,
    pub detail: String,
    pub is_default: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            address_id: address.address_id,
            name: address.name,
            phone: address.phone,
            province: address.province,
            city: address.city,
            district: address.district,
            detail: address.detail,
            is_default: address.is_default,
            created_at: address.created_at.map(|d| d.to_string()),
            updated_at: address.updated_at.map(|d| d.to_string()),
        }
    }
}
