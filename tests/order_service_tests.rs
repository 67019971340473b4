use bigdecimal::BigDecimal;
use diesel::result;
use diesel_async::RunQueryDsl;
use std::str::FromStr;
use storefront_server_lib::data::database::Database;
use storefront_server_lib::data::models::product::NewProduct;
use storefront_server_lib::data::models::user::NewUser;
use storefront_server_lib::data::repos::implementors::product_repo::ProductRepo;
use storefront_server_lib::data::repos::implementors::user_repo::UserRepo;
use storefront_server_lib::data::repos::traits::repository::Repository;
use storefront_server_lib::security::auth::AuthService;
use storefront_server_lib::services::cart_service::CartService;
use storefront_server_lib::services::errors::OrderServiceError;
use storefront_server_lib::services::order_service::{
    generate_order_number, OrderService, OrderStatus,
};

async fn setup() -> Result<(), result::Error> {
    let db = Database::new().await;

    let mut conn = db
        .get_connection()
        .await
        .expect("Failed to get a database connection");

    use storefront_server_lib::data::models::schema::cart_items::dsl::cart_items;
    use storefront_server_lib::data::models::schema::order_items::dsl::order_items;
    use storefront_server_lib::data::models::schema::orders::dsl::orders;
    use storefront_server_lib::data::models::schema::products::dsl::products;
    use storefront_server_lib::data::models::schema::users::dsl::users;

    // Clean up in order due to foreign key constraints
    diesel::delete(order_items).execute(&mut conn).await?;
    diesel::delete(orders).execute(&mut conn).await?;
    diesel::delete(cart_items).execute(&mut conn).await?;
    diesel::delete(products).execute(&mut conn).await?;
    diesel::delete(users).execute(&mut conn).await?;

    Ok(())
}

async fn create_test_user(username: &str) -> i32 {
    let auth = AuthService::new();
    let repo = UserRepo::new();

    let hashed = auth
        .hash_password("testpass")
        .await
        .expect("Hashing failed");

    let email = format!("{}@example.com", username);
    repo.add(NewUser {
        username,
        email: &email,
        password_hash: &hashed,
        phone: None,
        role: "user",
    })
    .await
    .expect("Failed to add user");

    repo.get_by_username(username)
        .await
        .expect("Failed to get user")
        .expect("User not found")
        .user_id
}

async fn create_test_product(name: &str, price: &str, stock: i32) -> i32 {
    let repo = ProductRepo::new();

    repo.add(NewProduct {
        name,
        description: Some("Test product for orders"),
        image: None,
        price: BigDecimal::from_str(price).expect("Bad price literal"),
        original_price: None,
        stock,
        category_id: None,
        brand: None,
        sku: None,
        status: "active",
        featured: false,
    })
    .await
    .expect("Failed to add product");

    repo.get_by_name(name)
        .await
        .expect("Failed to get product")
        .expect("Product not found")
        .product_id
}

async fn product_stock(product_id: i32) -> i32 {
    ProductRepo::new()
        .get_by_id(product_id)
        .await
        .expect("Failed to get product")
        .expect("Product not found")
        .stock
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_order_snapshots_and_totals() {
    setup().await.expect("Setup failed");

    let user_id = create_test_user("order_user").await;
    let product_a = create_test_product("OrderProductA", "10.00", 10).await;
    let product_b = create_test_product("OrderProductB", "5.50", 10).await;

    let service = OrderService::new();
    let created = service
        .create_order(
            user_id,
            "1 Test Street",
            Some("card"),
            &[(product_a, 2), (product_b, 1)],
        )
        .await
        .expect("Failed to create order");

    assert_eq!(
        created.total_amount,
        BigDecimal::from_str("25.50").unwrap()
    );

    let (order, items) = service
        .get_order(created.order_id, user_id)
        .await
        .expect("Failed to fetch order");

    assert_eq!(order.status, "pending");
    assert_eq!(order.payment_status, "pending");
    assert_eq!(items.len(), 2);

    // Total must equal the sum of line subtotals
    let line_sum: BigDecimal = items.iter().map(|i| i.subtotal.clone()).sum();
    assert_eq!(order.total_amount, line_sum);

    // Lines snapshot name and price at purchase time
    let line_a = items
        .iter()
        .find(|i| i.product_id == product_a)
        .expect("Missing line");
    assert_eq!(line_a.product_name, "OrderProductA");
    assert_eq!(line_a.product_price, BigDecimal::from_str("10.00").unwrap());
    assert_eq!(line_a.subtotal, BigDecimal::from_str("20.00").unwrap());

    // Stock was decremented atomically
    assert_eq!(product_stock(product_a).await, 8);
    assert_eq!(product_stock(product_b).await, 9);
}

#[tokio::test]
#[serial_test::serial]
async fn test_empty_order_rejected_without_writes() {
    setup().await.expect("Setup failed");

    let user_id = create_test_user("empty_order_user").await;
    let service = OrderService::new();

    let result = service
        .create_order(user_id, "1 Test Street", None, &[])
        .await;
    assert!(matches!(result, Err(OrderServiceError::EmptyOrder)));

    let orders = service
        .get_user_orders(user_id)
        .await
        .expect("Failed to list orders");
    assert!(orders.is_empty());
}

#[tokio::test]
#[serial_test::serial]
async fn test_blank_shipping_address_rejected() {
    setup().await.expect("Setup failed");

    let user_id = create_test_user("no_address_user").await;
    let product_id = create_test_product("NoAddressProduct", "3.00", 5).await;
    let service = OrderService::new();

    let result = service
        .create_order(user_id, "   ", None, &[(product_id, 1)])
        .await;
    assert!(matches!(
        result,
        Err(OrderServiceError::MissingShippingAddress)
    ));
}

#[tokio::test]
#[serial_test::serial]
async fn test_nonpositive_quantity_rejected() {
    setup().await.expect("Setup failed");

    let user_id = create_test_user("bad_qty_user").await;
    let product_id = create_test_product("BadQtyProduct", "3.00", 5).await;
    let service = OrderService::new();

    let result = service
        .create_order(user_id, "1 Test Street", None, &[(product_id, 0)])
        .await;
    assert!(matches!(result, Err(OrderServiceError::InvalidQuantity)));

    assert_eq!(product_stock(product_id).await, 5);
}

#[tokio::test]
#[serial_test::serial]
async fn test_insufficient_stock_fails_whole_order() {
    setup().await.expect("Setup failed");

    let user_id = create_test_user("stock_user").await;
    let product_a = create_test_product("StockProductA", "10.00", 10).await;
    let product_b = create_test_product("StockProductB", "10.00", 1).await;
    let service = OrderService::new();

    let result = service
        .create_order(
            user_id,
            "1 Test Street",
            None,
            &[(product_a, 2), (product_b, 5)],
        )
        .await;

    match result {
        Err(OrderServiceError::InsufficientStock(id)) => assert_eq!(id, product_b),
        other => panic!("Expected InsufficientStock, got {:?}", other.map(|c| c.order_id)),
    }

    // The transaction rolled back: neither line's stock changed
    assert_eq!(product_stock(product_a).await, 10);
    assert_eq!(product_stock(product_b).await, 1);

    let orders = service
        .get_user_orders(user_id)
        .await
        .expect("Failed to list orders");
    assert!(orders.is_empty());
}

#[tokio::test]
#[serial_test::serial]
async fn test_sequential_orders_cannot_oversell() {
    setup().await.expect("Setup failed");

    let user_id = create_test_user("oversell_user").await;
    let product_id = create_test_product("OversellProduct", "4.00", 5).await;
    let service = OrderService::new();

    service
        .create_order(user_id, "1 Test Street", None, &[(product_id, 3)])
        .await
        .expect("First order should succeed");

    let second = service
        .create_order(user_id, "1 Test Street", None, &[(product_id, 3)])
        .await;
    assert!(matches!(
        second,
        Err(OrderServiceError::InsufficientStock(_))
    ));

    assert_eq!(product_stock(product_id).await, 2);
}

#[tokio::test]
#[serial_test::serial]
async fn test_missing_product_rejected() {
    setup().await.expect("Setup failed");

    let user_id = create_test_user("ghost_product_user").await;
    let service = OrderService::new();

    let result = service
        .create_order(user_id, "1 Test Street", None, &[(999_999, 1)])
        .await;
    assert!(matches!(
        result,
        Err(OrderServiceError::ProductNotFound(999_999))
    ));
}

#[tokio::test]
#[serial_test::serial]
async fn test_cancel_restores_stock() {
    setup().await.expect("Setup failed");

    let user_id = create_test_user("cancel_user").await;
    let product_a = create_test_product("CancelProductA", "10.00", 10).await;
    let product_b = create_test_product("CancelProductB", "2.00", 7).await;
    let service = OrderService::new();

    let created = service
        .create_order(
            user_id,
            "1 Test Street",
            None,
            &[(product_a, 2), (product_b, 1)],
        )
        .await
        .expect("Failed to create order");

    assert_eq!(product_stock(product_a).await, 8);
    assert_eq!(product_stock(product_b).await, 6);

    service
        .cancel_order(created.order_id, user_id)
        .await
        .expect("Failed to cancel order");

    assert_eq!(product_stock(product_a).await, 10);
    assert_eq!(product_stock(product_b).await, 7);

    let (order, _) = service
        .get_order(created.order_id, user_id)
        .await
        .expect("Failed to fetch order");
    assert_eq!(order.status, "cancelled");
}

#[tokio::test]
#[serial_test::serial]
async fn test_double_cancel_rejected_without_double_restock() {
    setup().await.expect("Setup failed");

    let user_id = create_test_user("double_cancel_user").await;
    let product_id = create_test_product("DoubleCancelProduct", "10.00", 10).await;
    let service = OrderService::new();

    let created = service
        .create_order(user_id, "1 Test Street", None, &[(product_id, 2)])
        .await
        .expect("Failed to create order");

    service
        .cancel_order(created.order_id, user_id)
        .await
        .expect("First cancel should succeed");
    assert_eq!(product_stock(product_id).await, 10);

    let second = service.cancel_order(created.order_id, user_id).await;
    assert!(matches!(
        second,
        Err(OrderServiceError::InvalidStatusTransition)
    ));

    // Stock unchanged by the rejected second cancel
    assert_eq!(product_stock(product_id).await, 10);
}

#[tokio::test]
#[serial_test::serial]
async fn test_cancel_scoped_to_owner() {
    setup().await.expect("Setup failed");

    let owner = create_test_user("cancel_owner").await;
    let intruder = create_test_user("cancel_intruder").await;
    let product_id = create_test_product("ScopedProduct", "10.00", 10).await;
    let service = OrderService::new();

    let created = service
        .create_order(owner, "1 Test Street", None, &[(product_id, 1)])
        .await
        .expect("Failed to create order");

    let result = service.cancel_order(created.order_id, intruder).await;
    assert!(matches!(result, Err(OrderServiceError::OrderNotFound)));

    assert_eq!(product_stock(product_id).await, 9);
}

#[tokio::test]
#[serial_test::serial]
async fn test_confirm_delivery_requires_shipped() {
    setup().await.expect("Setup failed");

    let user_id = create_test_user("delivery_user").await;
    let product_id = create_test_product("DeliveryProduct", "10.00", 10).await;
    let service = OrderService::new();

    let created = service
        .create_order(user_id, "1 Test Street", None, &[(product_id, 1)])
        .await
        .expect("Failed to create order");

    // pending orders cannot be confirmed
    let early = service.confirm_delivery(created.order_id, user_id).await;
    assert!(matches!(
        early,
        Err(OrderServiceError::InvalidStatusTransition)
    ));

    service
        .force_set_status(created.order_id, OrderStatus::Shipped)
        .await
        .expect("Failed to mark shipped");

    service
        .confirm_delivery(created.order_id, user_id)
        .await
        .expect("Failed to confirm delivery");

    let (order, _) = service
        .get_order(created.order_id, user_id)
        .await
        .expect("Failed to fetch order");
    assert_eq!(order.status, "delivered");
}

#[tokio::test]
#[serial_test::serial]
async fn test_pay_clears_entire_cart() {
    setup().await.expect("Setup failed");

    let user_id = create_test_user("pay_user").await;
    let ordered = create_test_product("PayOrderedProduct", "10.00", 10).await;
    let unrelated = create_test_product("PayUnrelatedProduct", "5.00", 10).await;

    let cart_service = CartService::new();
    cart_service
        .add_item(user_id, ordered, 2)
        .await
        .expect("Failed to add to cart");
    cart_service
        .add_item(user_id, unrelated, 1)
        .await
        .expect("Failed to add to cart");

    let service = OrderService::new();
    let created = service
        .create_order(user_id, "1 Test Street", Some("card"), &[(ordered, 2)])
        .await
        .expect("Failed to create order");

    // Checkout leaves the cart alone
    let cart = cart_service
        .get_cart(user_id)
        .await
        .expect("Failed to fetch cart");
    assert_eq!(cart.len(), 2);

    service
        .pay_order(created.order_id, user_id)
        .await
        .expect("Failed to pay order");

    let (order, _) = service
        .get_order(created.order_id, user_id)
        .await
        .expect("Failed to fetch order");
    assert_eq!(order.status, "paid");
    assert_eq!(order.payment_status, "paid");

    // Payment clears the whole cart, including lines not in the order
    let cart = cart_service
        .get_cart(user_id)
        .await
        .expect("Failed to fetch cart");
    assert!(cart.is_empty());
}

#[tokio::test]
#[serial_test::serial]
async fn test_pay_requires_pending() {
    setup().await.expect("Setup failed");

    let user_id = create_test_user("double_pay_user").await;
    let product_id = create_test_product("DoublePayProduct", "10.00", 10).await;
    let service = OrderService::new();

    let created = service
        .create_order(user_id, "1 Test Street", None, &[(product_id, 1)])
        .await
        .expect("Failed to create order");

    service
        .pay_order(created.order_id, user_id)
        .await
        .expect("First payment should succeed");

    let second = service.pay_order(created.order_id, user_id).await;
    assert!(matches!(
        second,
        Err(OrderServiceError::InvalidStatusTransition)
    ));
}

#[tokio::test]
#[serial_test::serial]
async fn test_order_numbers_are_unique() {
    setup().await.expect("Setup failed");

    let user_id = create_test_user("order_number_user").await;
    let product_id = create_test_product("OrderNumberProduct", "1.00", 100).await;
    let service = OrderService::new();

    let mut numbers = std::collections::HashSet::new();
    for _ in 0..10 {
        let created = service
            .create_order(user_id, "1 Test Street", None, &[(product_id, 1)])
            .await
            .expect("Failed to create order");
        assert!(
            numbers.insert(created.order_number.clone()),
            "Duplicate order number {}",
            created.order_number
        );
    }
}

#[test]
fn test_order_number_format() {
    let number = generate_order_number();
    assert!(number.starts_with("ORD"));
    assert!(number.len() > 7);
    assert!(number[3..].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_status_transition_table() {
    use OrderStatus::*;

    assert!(Pending.can_transition_to(Paid));
    assert!(Pending.can_transition_to(Cancelled));
    assert!(Paid.can_transition_to(Shipped));
    assert!(Shipped.can_transition_to(Delivered));

    // Cancellation is only reachable from pending
    assert!(!Paid.can_transition_to(Cancelled));
    assert!(!Shipped.can_transition_to(Cancelled));

    // No skipping and no going backwards
    assert!(!Pending.can_transition_to(Shipped));
    assert!(!Pending.can_transition_to(Delivered));
    assert!(!Paid.can_transition_to(Pending));
    assert!(!Delivered.can_transition_to(Shipped));

    // Terminal states allow nothing
    assert!(Delivered.is_terminal());
    assert!(Cancelled.is_terminal());
    assert!(!Delivered.can_transition_to(Pending));
    assert!(!Cancelled.can_transition_to(Pending));
}

#[test]
fn test_status_round_trip() {
    use std::str::FromStr as _;

    for status in [
        OrderStatus::Pending,
        OrderStatus::Paid,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ] {
        assert_eq!(OrderStatus::from_str(status.as_str()), Ok(status));
    }
    assert!(OrderStatus::from_str("refunded").is_err());
}
