use crate::data::models::order::Order;
use crate::services::admin_service::{DashboardStats, Paginated};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

fn default_page() -> i64 {
    1
}

fn default_per_page() -> i64 {
    10
}

#[derive(Deserialize, Debug, Clone)]
pub struct AdminListParams {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_per_page")]
    pub per_page: i64,
    pub search: Option<String>,
    pub status: Option<String>,
    pub category_id: Option<i32>,
}

impl AdminListParams {
    pub fn page(&self) -> i64 {
        self.page.max(1)
    }

    pub fn per_page(&self) -> i64 {
        if self.per_page > 0 { self.per_page } else { 10 }
    }
}

#[derive(Deserialize)]
pub struct SetOrderStatusRequest {
    pub status: String,
}

/// Admin order rows carry the buyer's username alongside the order.
#[derive(Serialize)]
pub struct AdminOrderResponse {
    pub order_id: i32,
    pub order_number: String,
    pub username: String,
    pub status: String,
    pub payment_status: String,
    pub total_amount: BigDecimal,
    pub created_at: Option<String>,
}

impl From<(Order, String)> for AdminOrderResponse {
    fn from((order, username): (Order, String)) -> Self {
        Self {
            order_id: order.order_id,
            order_number: order.order_number,
            username,
            status: order.status,
            payment_status: order.payment_status,
            total_amount: order.total_amount,
            created_at: order.created_at.map(|d| d.to_string()),
        }
    }
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub users: i64,
    pub products: i64,
    pub orders: i64,
    pub revenue: BigDecimal,
    pub recent_orders: Vec<AdminOrderResponse>,
}

impl From<DashboardStats> for DashboardResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            users: stats.users,
            products: stats.products,
            orders: stats.orders,
            revenue: stats.revenue,
            recent_orders: stats
                .recent_orders
                .into_iter()
                .map(AdminOrderResponse::from)
                .collect(),
        }
    }
}

#[derive(Serialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub current_page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl<T, U> From<Paginated<U>> for PaginatedResponse<T>
where
    T: From<U>,
{
    fn from(page: Paginated<U>) -> Self {
        Self {
            items: page.items.into_iter().map(T::from).collect(),
            current_page: page.current_page,
            per_page: page.per_page,
            total: page.total,
            total_pages: page.total_pages,
        }
    }
}
