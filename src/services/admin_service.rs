use crate::data::models::order::Order;
use crate::data::models::product::Product;
use crate::data::models::user::User;
use crate::data::repos::implementors::order_repo::OrderRepo;
use crate::data::repos::implementors::product_repo::ProductRepo;
use crate::data::repos::implementors::user_repo::UserRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::AdminServiceError;
use crate::services::order_service::OrderStatus;
use bigdecimal::BigDecimal;
use std::str::FromStr;

/// Aggregates shown on the admin dashboard.
#[derive(Debug)]
pub struct DashboardStats {
    pub users: i64,
    pub products: i64,
    pub orders: i64,
    pub revenue: BigDecimal,
    pub recent_orders: Vec<(Order, String)>,
}

#[derive(Debug)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub current_page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
}

fn paginate<T>(items: Vec<T>, page: i64, per_page: i64, total: i64) -> Paginated<T> {
    Paginated {
        items,
        current_page: page,
        per_page,
        total,
        total_pages: (total + per_page - 1) / per_page.max(1),
    }
}

/// Admin-only operations. Role enforcement happens at the API layer; these
/// methods assume the caller is already known to be an administrator.
pub struct AdminService;

impl AdminService {
    pub fn new() -> Self {
        AdminService
    }

    pub async fn dashboard(&self) -> Result<DashboardStats, AdminServiceError> {
        let user_repo = UserRepo::new();
        let product_repo = ProductRepo::new();
        let order_repo = OrderRepo::new();

        let users = user_repo
            .count_by_role("user")
            .await
            .map_err(|_| AdminServiceError::DatabaseError)?;
        let products = product_repo
            .count_all()
            .await
            .map_err(|_| AdminServiceError::DatabaseError)?;
        let orders = order_repo
            .count_all()
            .await
            .map_err(|_| AdminServiceError::DatabaseError)?;
        let revenue = order_repo
            .paid_revenue()
            .await
            .map_err(|_| AdminServiceError::DatabaseError)?
            .unwrap_or_else(|| BigDecimal::from(0));
        let recent_orders = order_repo
            .recent_with_usernames(10)
            .await
            .map_err(|_| AdminServiceError::DatabaseError)?;

        Ok(DashboardStats {
            users,
            products,
            orders,
            revenue,
            recent_orders,
        })
    }

    pub async fn list_users(
        &self,
        search: Option<&str>,
        page: i64,
        per_page: i64,
    ) -> Result<Paginated<User>, AdminServiceError> {
        let repo = UserRepo::new();
        let (items, total) = repo
            .search_paginated(search, page, per_page)
            .await
            .map_err(|e| {
                tracing::error!("Admin user listing failed: {}", e);
                AdminServiceError::DatabaseError
            })?;

        Ok(paginate(items, page, per_page, total))
    }

    /// Deletes a regular account; admin accounts are protected.
    pub async fn delete_user(&self, user_id: i32) -> Result<(), AdminServiceError> {
        let repo = UserRepo::new();

        let user = repo
            .get_by_id(user_id)
            .await
            .map_err(|_| AdminServiceError::DatabaseError)?
            .ok_or(AdminServiceError::UserNotFound)?;

        if user.role == "admin" {
            return Err(AdminServiceError::CannotDeleteAdmin);
        }

        repo.delete(user_id).await.map_err(|e| {
            tracing::error!("User deletion failed: {}", e);
            AdminServiceError::DatabaseError
        })
    }

    pub async fn list_products(
        &self,
        search: Option<&str>,
        category: Option<i32>,
        page: i64,
        per_page: i64,
    ) -> Result<Paginated<Product>, AdminServiceError> {
        let repo = ProductRepo::new();
        let (items, total) = repo
            .admin_list(search, category, page, per_page)
            .await
            .map_err(|e| {
                tracing::error!("Admin product listing failed: {}", e);
                AdminServiceError::DatabaseError
            })?;

        Ok(paginate(items, page, per_page, total))
    }

    pub async fn list_orders(
        &self,
        status: Option<&str>,
        search: Option<&str>,
        page: i64,
        per_page: i64,
    ) -> Result<Paginated<(Order, String)>, AdminServiceError> {
        let repo = OrderRepo::new();
        let (items, total) = repo
            .admin_list(status, search, page, per_page)
            .await
            .map_err(|e| {
                tracing::error!("Admin order listing failed: {}", e);
                AdminServiceError::DatabaseError
            })?;

        Ok(paginate(items, page, per_page, total))
    }

    /// Force-writes an order status through the state machine's escape
    /// hatch. The status string must still name a real status.
    pub async fn set_order_status(
        &self,
        order_id: i32,
        status: &str,
    ) -> Result<(), AdminServiceError> {
        let parsed = OrderStatus::from_str(status).map_err(|_| AdminServiceError::InvalidStatus)?;

        let repo = OrderRepo::new();
        repo.force_set_status(order_id, parsed.as_str())
            .await
            .map_err(|e| match e {
                crate::data::repos::implementors::order_repo::OrderRepoError::NotFound => {
                    AdminServiceError::OrderNotFound
                }
                other => {
                    tracing::error!("Order status override failed: {:?}", other);
                    AdminServiceError::DatabaseError
                }
            })
    }
}

impl Default for AdminService {
    fn default() -> Self {
        Self::new()
    }
}
