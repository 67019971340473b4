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
use storefront_server_lib::services::admin_service::AdminService;
use storefront_server_lib::services::errors::AdminServiceError;
use storefront_server_lib::api::controllers::dto::admin_dto::AdminListParams;
use storefront_server_lib::services::order_service::OrderService;

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

async fn create_test_user(username: &str, role: &str) -> i32 {
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
        role,
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
        description: Some("Admin test product"),
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

#[tokio::test]
#[serial_test::serial]
async fn test_dashboard_counts_and_revenue() {
    setup().await.expect("Setup failed");

    let buyer = create_test_user("dash_buyer", "user").await;
    create_test_user("dash_admin", "admin").await;
    let product_id = create_test_product("DashProduct", "10.00", 20).await;

    let order_service = OrderService::new();
    let paid = order_service
        .create_order(buyer, "1 Test Street", None, &[(product_id, 2)])
        .await
        .expect("Failed to create order");
    order_service
        .pay_order(paid.order_id, buyer)
        .await
        .expect("Failed to pay");

    // A second, unpaid order must not count toward revenue
    order_service
        .create_order(buyer, "1 Test Street", None, &[(product_id, 1)])
        .await
        .expect("Failed to create order");

    let stats = AdminService::new()
        .dashboard()
        .await
        .expect("Dashboard failed");

    // Admin accounts are excluded from the user count
    assert_eq!(stats.users, 1);
    assert_eq!(stats.products, 1);
    assert_eq!(stats.orders, 2);
    assert_eq!(stats.revenue, BigDecimal::from_str("20.00").unwrap());
    assert_eq!(stats.recent_orders.len(), 2);
    assert_eq!(stats.recent_orders[0].1, "dash_buyer");
}

#[tokio::test]
#[serial_test::serial]
async fn test_list_users_with_search() {
    setup().await.expect("Setup failed");

    create_test_user("alice_admin_test", "user").await;
    create_test_user("bob_admin_test", "user").await;

    let service = AdminService::new();

    let all = service
        .list_users(None, 1, 10)
        .await
        .expect("Listing failed");
    assert_eq!(all.total, 2);

    let filtered = service
        .list_users(Some("alice"), 1, 10)
        .await
        .expect("Listing failed");
    assert_eq!(filtered.total, 1);
    assert_eq!(filtered.items[0].username, "alice_admin_test");
}

#[tokio::test]
#[serial_test::serial]
async fn test_delete_user_protects_admins() {
    setup().await.expect("Setup failed");

    let regular = create_test_user("deletable_user", "user").await;
    let admin = create_test_user("protected_admin", "admin").await;

    let service = AdminService::new();

    let result = service.delete_user(admin).await;
    assert!(matches!(result, Err(AdminServiceError::CannotDeleteAdmin)));

    service
        .delete_user(regular)
        .await
        .expect("Failed to delete user");

    let missing = service.delete_user(regular).await;
    assert!(matches!(missing, Err(AdminServiceError::UserNotFound)));
}

#[tokio::test]
#[serial_test::serial]
async fn test_list_orders_filters_by_status() {
    setup().await.expect("Setup failed");

    let buyer = create_test_user("order_list_buyer", "user").await;
    let product_id = create_test_product("OrderListProduct", "10.00", 20).await;
    let order_service = OrderService::new();

    let first = order_service
        .create_order(buyer, "1 Test Street", None, &[(product_id, 1)])
        .await
        .expect("Failed to create order");
    order_service
        .create_order(buyer, "1 Test Street", None, &[(product_id, 1)])
        .await
        .expect("Failed to create order");
    order_service
        .pay_order(first.order_id, buyer)
        .await
        .expect("Failed to pay");

    let service = AdminService::new();

    let paid = service
        .list_orders(Some("paid"), None, 1, 10)
        .await
        .expect("Listing failed");
    assert_eq!(paid.total, 1);
    assert_eq!(paid.items[0].0.order_id, first.order_id);

    let pending = service
        .list_orders(Some("pending"), None, 1, 10)
        .await
        .expect("Listing failed");
    assert_eq!(pending.total, 1);

    let by_number = service
        .list_orders(None, Some(&first.order_number), 1, 10)
        .await
        .expect("Listing failed");
    assert_eq!(by_number.total, 1);
}

#[tokio::test]
#[serial_test::serial]
async fn test_status_override_bypasses_transitions_without_restock() {
    setup().await.expect("Setup failed");

    let buyer = create_test_user("override_buyer", "user").await;
    let product_id = create_test_product("OverrideProduct", "10.00", 10).await;
    let order_service = OrderService::new();

    let created = order_service
        .create_order(buyer, "1 Test Street", None, &[(product_id, 2)])
        .await
        .expect("Failed to create order");

    let service = AdminService::new();

    // pending -> shipped is not a legal buyer transition, but the override allows it
    service
        .set_order_status(created.order_id, "shipped")
        .await
        .expect("Override failed");

    let (order, _) = order_service
        .get_order(created.order_id, buyer)
        .await
        .expect("Failed to fetch order");
    assert_eq!(order.status, "shipped");

    // Overriding to cancelled does not restock
    service
        .set_order_status(created.order_id, "cancelled")
        .await
        .expect("Override failed");

    let stock = ProductRepo::new()
        .get_by_id(product_id)
        .await
        .expect("Failed to get product")
        .expect("Product not found")
        .stock;
    assert_eq!(stock, 8);

    let unknown = service.set_order_status(created.order_id, "refunded").await;
    assert!(matches!(unknown, Err(AdminServiceError::InvalidStatus)));

    let missing = service.set_order_status(999_999, "paid").await;
    assert!(matches!(missing, Err(AdminServiceError::OrderNotFound)));
}

#[test]
fn test_list_params_clamp_bad_pages() {
    let params = AdminListParams {
        page: 0,
        per_page: -1,
        search: None,
        status: None,
        category_id: None,
    };
    assert_eq!(params.page(), 1);
    assert_eq!(params.per_page(), 10);

    let params = AdminListParams {
        page: 3,
        per_page: 25,
        search: None,
        status: None,
        category_id: None,
    };
    assert_eq!(params.page(), 3);
    assert_eq!(params.per_page(), 25);
}
