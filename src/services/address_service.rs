use crate::data::models::address::{Address, NewAddress, UpdateAddress};
use crate::data::repos::implementors::address_repo::AddressRepo;
use crate::services::errors::AddressServiceError;

/// Address book fields that must all be present on create/update.
pub struct AddressForm<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub province: &'a str,
    pub city: &'a str,
    pub district: &'a str,
    pub detail: &'a str,
    pub is_default: bool,
}

impl AddressForm<'_> {
    fn is_complete(&self) -> bool {
        ![
            self.name,
            self.phone,
            self.province,
            self.city,
            self.district,
            self.detail,
        ]
        .iter()
        .any(|field| field.trim().is_empty())
    }
}

pub struct AddressService;

impl AddressService {
    pub fn new() -> Self {
        AddressService
    }

    pub async fn list_addresses(
        &self,
        user_id: i32,
    ) -> Result<Vec<Address>, AddressServiceError> {
        let repo = AddressRepo::new();
        repo.list_by_user(user_id).await.map_err(|e| {
            tracing::error!("Failed to list addresses: {}", e);
            AddressServiceError::DatabaseError
        })
    }

    pub async fn get_address(
        &self,
        address_id: i32,
        user_id: i32,
    ) -> Result<Address, AddressServiceError> {
        let repo = AddressRepo::new();
        repo.get_scoped(address_id, user_id)
            .await
            .map_err(|_| AddressServiceError::DatabaseError)?
            .ok_or(AddressServiceError::AddressNotFound)
    }

    pub async fn create_address(
        &self,
        user_id: i32,
        form: &AddressForm<'_>,
    ) -> Result<(), AddressServiceError> {
        if !form.is_complete() {
            return Err(AddressServiceError::IncompleteAddress);
        }

        let repo = AddressRepo::new();
        repo.add(NewAddress {
            user_id,
            name: form.name,
            phone: form.phone,
            province: form.province,
            city: form.city,
            district: form.district,
            detail: form.detail,
            is_default: form.is_default,
        })
        .await
        .map_err(|e| {
            tracing::error!("Address insert failed: {}", e);
            AddressServiceError::DatabaseError
        })
    }

    pub async fn update_address(
        &self,
        address_id: i32,
        user_id: i32,
        form: &AddressForm<'_>,
    ) -> Result<(), AddressServiceError> {
        if !form.is_complete() {
            return Err(AddressServiceError::IncompleteAddress);
        }

        let repo = AddressRepo::new();
        let affected = repo
            .update_scoped(
                address_id,
                user_id,
                UpdateAddress {
                    name: Some(form.name),
                    phone: Some(form.phone),
                    province: Some(form.province),
                    city: Some(form.city),
                    district: Some(form.district),
                    detail: Some(form.detail),
                    is_default: Some(form.is_default),
                },
            )
            .await
            .map_err(|_| AddressServiceError::DatabaseError)?;

        if affected == 0 {
            return Err(AddressServiceError::AddressNotFound);
        }

        Ok(())
    }

    pub async fn delete_address(
        &self,
        address_id: i32,
        user_id: i32,
    ) -> Result<(), AddressServiceError> {
        let repo = AddressRepo::new();
        let affected = repo
            .delete_scoped(address_id, user_id)
            .await
            .map_err(|_| AddressServiceError::DatabaseError)?;

        if affected == 0 {
            return Err(AddressServiceError::AddressNotFound);
        }

        Ok(())
    }

    pub async fn set_default(
        &self,
        address_id: i32,
        user_id: i32,
    ) -> Result<(), AddressServiceError> {
        let repo = AddressRepo::new();

        // Verify ownership before demoting the user's other defaults.
        repo.get_scoped(address_id, user_id)
            .await
            .map_err(|_| AddressServiceError::DatabaseError)?
            .ok_or(AddressServiceError::AddressNotFound)?;

        repo.set_default(address_id, user_id)
            .await
            .map_err(|_| AddressServiceError::DatabaseError)?;

        Ok(())
    }
}

impl Default for AddressService {
    fn default() -> Self {
        Self::new()
    }
}
