use crate::data::models::cart_item::{CartItem, NewCartItem};
use crate::data::models::product::Product;
use crate::data::repos::implementors::cart_repo::CartRepo;
use crate::data::repos::implementors::product_repo::ProductRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::CartServiceError;

pub struct CartService;

impl CartService {
    pub fn new() -> Self {
        CartService
    }

    pub async fn get_cart(
        &self,
        user_id: i32,
    ) -> Result<Vec<(CartItem, Product)>, CartServiceError> {
        let repo = CartRepo::new();
        repo.get_with_products(user_id).await.map_err(|e| {
            tracing::error!("Failed to load cart: {}", e);
            CartServiceError::DatabaseError
        })
    }

    /// Adds a product to the cart, merging into the existing row when the
    /// user already has one for this product. The resulting quantity must
    /// not exceed live stock; checkout re-checks with a guarded decrement
    /// since stock may move between the two.
    pub async fn add_item(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), CartServiceError> {
        if quantity <= 0 {
            return Err(CartServiceError::InvalidQuantity);
        }

        let product_repo = ProductRepo::new();
        let product = product_repo
            .get_by_id(product_id)
            .await
            .map_err(|_| CartServiceError::DatabaseError)?
            .ok_or(CartServiceError::ProductNotFound)?;

        let repo = CartRepo::new();
        let existing = repo
            .get_entry(user_id, product_id)
            .await
            .map_err(|_| CartServiceError::DatabaseError)?;

        match existing {
            Some(entry) => {
                let new_quantity = entry.quantity + quantity;
                if new_quantity > product.stock {
                    return Err(CartServiceError::ExceedsStock);
                }
                repo.set_quantity(user_id, product_id, new_quantity)
                    .await
                    .map_err(|_| CartServiceError::DatabaseError)?;
            }
            None => {
                if quantity > product.stock {
                    return Err(CartServiceError::ExceedsStock);
                }
                repo.add(NewCartItem {
                    user_id,
                    product_id,
                    quantity,
                })
                .await
                .map_err(|_| CartServiceError::DatabaseError)?;
            }
        }

        Ok(())
    }

    /// Replaces the quantity of an owned cart entry.
    pub async fn update_quantity(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), CartServiceError> {
        if quantity <= 0 {
            return Err(CartServiceError::InvalidQuantity);
        }

        let repo = CartRepo::new();
        let entry = repo
            .get_entry(user_id, product_id)
            .await
            .map_err(|_| CartServiceError::DatabaseError)?
            .ok_or(CartServiceError::CartItemNotFound)?;

        let product_repo = ProductRepo::new();
        let product = product_repo
            .get_by_id(entry.product_id)
            .await
            .map_err(|_| CartServiceError::DatabaseError)?
            .ok_or(CartServiceError::ProductNotFound)?;

        if quantity > product.stock {
            return Err(CartServiceError::ExceedsStock);
        }

        repo.set_quantity(user_id, product_id, quantity)
            .await
            .map_err(|_| CartServiceError::DatabaseError)?;

        Ok(())
    }

    pub async fn remove_item(
        &self,
        user_id: i32,
        product_id: i32,
    ) -> Result<(), CartServiceError> {
        let repo = CartRepo::new();
        let affected = repo
            .remove(user_id, product_id)
            .await
            .map_err(|_| CartServiceError::DatabaseError)?;

        if affected == 0 {
            return Err(CartServiceError::CartItemNotFound);
        }

        Ok(())
    }

    pub async fn clear_cart(&self, user_id: i32) -> Result<(), CartServiceError> {
        let repo = CartRepo::new();
        repo.clear(user_id).await.map_err(|e| {
            tracing::error!("Failed to clear cart: {}", e);
            CartServiceError::DatabaseError
        })
    }
}

impl Default for CartService {
    fn default() -> Self {
        Self::new()
    }
}
