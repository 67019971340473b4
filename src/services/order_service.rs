use crate::data::models::order::Order;
use crate::data::models::order_item::OrderItem;
use crate::data::repos::implementors::order_repo::{
    CheckoutLine, CreatedOrder, OrderRepo, OrderRepoError,
};
use crate::services::errors::OrderServiceError;
use std::sync::atomic::{AtomicU64, Ordering};

/// Fulfillment lifecycle: `pending -> paid -> shipped -> delivered`, with
/// `pending -> cancelled` as the only escape. `delivered` and `cancelled`
/// are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// The regular edge table. The administrative override in
    /// [`OrderService::force_set_status`] deliberately bypasses this.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Paid)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Paid, OrderStatus::Shipped)
                | (OrderStatus::Shipped, OrderStatus::Delivered)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "paid" => Ok(OrderStatus::Paid),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(PaymentStatus::Pending),
            "paid" => Ok(PaymentStatus::Paid),
            "failed" => Ok(PaymentStatus::Failed),
            "refunded" => Ok(PaymentStatus::Refunded),
            _ => Err(()),
        }
    }
}

static ORDER_SEQ: AtomicU64 = AtomicU64::new(0);

/// Collision-free order number: millisecond timestamp plus a monotonic
/// per-process sequence, instead of a random suffix.
pub fn generate_order_number() -> String {
    let seq = ORDER_SEQ.fetch_add(1, Ordering::Relaxed);
    format!(
        "ORD{}{:04}",
        chrono::Utc::now().timestamp_millis(),
        seq % 10_000
    )
}

pub struct OrderService;

impl OrderService {
    pub fn new() -> Self {
        OrderService
    }

    /// Checkout: turns the requested lines into an immutable order with
    /// snapshotted prices, decrementing stock atomically. Fails as a whole
    /// on the first missing product or short stock. Does NOT clear the
    /// cart; that happens on successful payment.
    pub async fn create_order(
        &self,
        user_id: i32,
        shipping_address: &str,
        payment_method: Option<&str>,
        items: &[(i32, i32)],
    ) -> Result<CreatedOrder, OrderServiceError> {
        if items.is_empty() {
            return Err(OrderServiceError::EmptyOrder);
        }
        if shipping_address.trim().is_empty() {
            return Err(OrderServiceError::MissingShippingAddress);
        }
        if items.iter().any(|&(_, qty)| qty <= 0) {
            return Err(OrderServiceError::InvalidQuantity);
        }

        let lines: Vec<CheckoutLine> = items
            .iter()
            .map(|&(product_id, quantity)| CheckoutLine {
                product_id,
                quantity,
            })
            .collect();

        let order_number = generate_order_number();

        let repo = OrderRepo::new();
        repo.create_checked(
            user_id,
            &order_number,
            shipping_address,
            payment_method,
            &lines,
        )
        .await
        .map_err(map_repo_error)
    }

    /// Cancels a pending order and restores every line's stock.
    pub async fn cancel_order(
        &self,
        order_id: i32,
        user_id: i32,
    ) -> Result<(), OrderServiceError> {
        let repo = OrderRepo::new();
        repo.cancel_restocking(order_id, user_id)
            .await
            .map_err(map_repo_error)
    }

    /// Simulated payment: `pending -> paid` and the user's whole cart is
    /// cleared in the same transaction.
    pub async fn pay_order(&self, order_id: i32, user_id: i32) -> Result<(), OrderServiceError> {
        let repo = OrderRepo::new();
        repo.mark_paid_clearing_cart(order_id, user_id)
            .await
            .map_err(map_repo_error)
    }

    /// Delivery confirmation by the buyer: `shipped -> delivered`.
    pub async fn confirm_delivery(
        &self,
        order_id: i32,
        user_id: i32,
    ) -> Result<(), OrderServiceError> {
        let repo = OrderRepo::new();
        repo.confirm_delivered(order_id, user_id)
            .await
            .map_err(map_repo_error)
    }

    /// Administrative escape hatch: writes any status, bypassing the edge
    /// table. Stock is not adjusted.
    pub async fn force_set_status(
        &self,
        order_id: i32,
        status: OrderStatus,
    ) -> Result<(), OrderServiceError> {
        let repo = OrderRepo::new();
        repo.force_set_status(order_id, status.as_str())
            .await
            .map_err(map_repo_error)
    }

    /// A user's orders, newest first, with line items attached.
    pub async fn get_user_orders(
        &self,
        user_id: i32,
    ) -> Result<Vec<(Order, Vec<OrderItem>)>, OrderServiceError> {
        let repo = OrderRepo::new();

        let orders = repo.list_by_user(user_id).await.map_err(|e| {
            tracing::error!("Failed to list orders: {}", e);
            OrderServiceError::DatabaseError
        })?;

        repo.attach_items(orders).await.map_err(|e| {
            tracing::error!("Failed to attach order items: {}", e);
            OrderServiceError::DatabaseError
        })
    }

    /// Order detail scoped to the owner; absent and not-owned are
    /// indistinguishable by design.
    pub async fn get_order(
        &self,
        order_id: i32,
        user_id: i32,
    ) -> Result<(Order, Vec<OrderItem>), OrderServiceError> {
        let repo = OrderRepo::new();

        let order = repo
            .get_scoped(order_id, user_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch order {}: {}", order_id, e);
                OrderServiceError::DatabaseError
            })?
            .ok_or(OrderServiceError::OrderNotFound)?;

        let items = repo.get_items(order_id).await.map_err(|e| {
            tracing::error!("Failed to fetch items for order {}: {}", order_id, e);
            OrderServiceError::DatabaseError
        })?;

        Ok((order, items))
    }
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new()
    }
}

fn map_repo_error(e: OrderRepoError) -> OrderServiceError {
    match e {
        OrderRepoError::NotFound => OrderServiceError::OrderNotFound,
        OrderRepoError::MissingProduct(id) => OrderServiceError::ProductNotFound(id),
        OrderRepoError::InsufficientStock(id) => OrderServiceError::InsufficientStock(id),
        OrderRepoError::InvalidStatus { .. } => OrderServiceError::InvalidStatusTransition,
        OrderRepoError::Db(e) => {
            tracing::error!("Order transaction failed: {}", e);
            OrderServiceError::DatabaseError
        }
    }
}
