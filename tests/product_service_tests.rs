use bigdecimal::BigDecimal;
use diesel::result;
use diesel_async::RunQueryDsl;
use std::str::FromStr;
use storefront_server_lib::data::database::Database;
use storefront_server_lib::data::models::product::{NewProduct, UpdateProduct};
use storefront_server_lib::data::repos::implementors::product_repo::{
    ProductQuery, ProductRepo, ProductSort, SortDirection,
};
use storefront_server_lib::data::repos::traits::repository::Repository;
use storefront_server_lib::services::errors::ProductServiceError;
use storefront_server_lib::services::product_service::ProductService;

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

    // Clean up in order due to foreign key constraints
    diesel::delete(order_items).execute(&mut conn).await?;
    diesel::delete(orders).execute(&mut conn).await?;
    diesel::delete(cart_items).execute(&mut conn).await?;
    diesel::delete(products).execute(&mut conn).await?;

    Ok(())
}

async fn add_product(name: &str, price: &str, stock: i32, status: &str) -> i32 {
    let repo = ProductRepo::new();

    repo.add(NewProduct {
        name,
        description: Some("Catalog test product"),
        image: None,
        price: BigDecimal::from_str(price).expect("Bad price literal"),
        original_price: None,
        stock,
        category_id: None,
        brand: None,
        sku: None,
        status,
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
async fn test_search_hides_inactive_products() {
    setup().await.expect("Setup failed");

    add_product("ActiveProduct", "10.00", 5, "active").await;
    add_product("InactiveProduct", "10.00", 5, "inactive").await;

    let service = ProductService::new();
    let page = service
        .search_products(&ProductQuery::default())
        .await
        .expect("Search failed");

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "ActiveProduct");
}

#[tokio::test]
#[serial_test::serial]
async fn test_search_keyword_and_price_filters() {
    setup().await.expect("Setup failed");

    add_product("Red Widget", "5.00", 5, "active").await;
    add_product("Blue Widget", "15.00", 5, "active").await;
    add_product("Gadget", "8.00", 5, "active").await;

    let service = ProductService::new();

    let by_keyword = service
        .search_products(&ProductQuery {
            search: Some("Widget".to_string()),
            ..Default::default()
        })
        .await
        .expect("Search failed");
    assert_eq!(by_keyword.total, 2);

    let by_price = service
        .search_products(&ProductQuery {
            min_price: Some(BigDecimal::from_str("6.00").unwrap()),
            max_price: Some(BigDecimal::from_str("10.00").unwrap()),
            ..Default::default()
        })
        .await
        .expect("Search failed");
    assert_eq!(by_price.total, 1);
    assert_eq!(by_price.items[0].name, "Gadget");
}

#[tokio::test]
#[serial_test::serial]
async fn test_search_sorting_and_pagination() {
    setup().await.expect("Setup failed");

    add_product("Cheap", "1.00", 5, "active").await;
    add_product("Middle", "5.00", 5, "active").await;
    add_product("Expensive", "9.00", 5, "active").await;

    let service = ProductService::new();

    let by_price_asc = service
        .search_products(&ProductQuery {
            sort_by: ProductSort::Price,
            direction: SortDirection::Asc,
            ..Default::default()
        })
        .await
        .expect("Search failed");
    let names: Vec<&str> = by_price_asc.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Cheap", "Middle", "Expensive"]);

    let page_two = service
        .search_products(&ProductQuery {
            sort_by: ProductSort::Price,
            direction: SortDirection::Asc,
            page: 2,
            per_page: 2,
            ..Default::default()
        })
        .await
        .expect("Search failed");
    assert_eq!(page_two.total, 3);
    assert_eq!(page_two.total_pages, 2);
    assert_eq!(page_two.items.len(), 1);
    assert_eq!(page_two.items[0].name, "Expensive");
}

#[tokio::test]
#[serial_test::serial]
async fn test_get_product_bumps_views() {
    setup().await.expect("Setup failed");

    let product_id = add_product("ViewedProduct", "10.00", 5, "active").await;
    let service = ProductService::new();

    let first = service
        .get_product(product_id)
        .await
        .expect("Fetch failed");
    assert_eq!(first.views, 0);

    let second = service
        .get_product(product_id)
        .await
        .expect("Fetch failed");
    assert_eq!(second.views, 1);
}

#[tokio::test]
#[serial_test::serial]
async fn test_get_product_hides_inactive() {
    setup().await.expect("Setup failed");

    let product_id = add_product("HiddenProduct", "10.00", 5, "inactive").await;
    let service = ProductService::new();

    let result = service.get_product(product_id).await;
    assert!(matches!(result, Err(ProductServiceError::ProductNotFound)));

    // Admin path still sees it
    let product = service
        .get_product_any_status(product_id)
        .await
        .expect("Admin fetch failed");
    assert_eq!(product.status, "inactive");
}

#[tokio::test]
#[serial_test::serial]
async fn test_product_image_round_trip() {
    setup().await.expect("Setup failed");

    let service = ProductService::new();
    let repo = ProductRepo::new();

    service
        .create_product(NewProduct {
            name: "PicturedProduct",
            description: None,
            image: Some("/uploads/widget-front.jpg"),
            price: BigDecimal::from_str("10.00").unwrap(),
            original_price: None,
            stock: 5,
            category_id: None,
            brand: None,
            sku: None,
            status: "active",
            featured: false,
        })
        .await
        .expect("Create failed");

    let product = repo
        .get_by_name("PicturedProduct")
        .await
        .expect("Fetch failed")
        .expect("Product not found");
    assert_eq!(product.image.as_deref(), Some("/uploads/widget-front.jpg"));

    service
        .update_product(
            product.product_id,
            UpdateProduct {
                image: Some("/uploads/widget-side.jpg"),
                ..Default::default()
            },
        )
        .await
        .expect("Update failed");

    let updated = service
        .get_product(product.product_id)
        .await
        .expect("Fetch failed");
    assert_eq!(updated.image.as_deref(), Some("/uploads/widget-side.jpg"));
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_update_delete_product() {
    setup().await.expect("Setup failed");

    let service = ProductService::new();

    let blank = service
        .create_product(NewProduct {
            name: "  ",
            description: None,
            image: None,
            price: BigDecimal::from_str("1.00").unwrap(),
            original_price: None,
            stock: 1,
            category_id: None,
            brand: None,
            sku: None,
            status: "active",
            featured: false,
        })
        .await;
    assert!(matches!(
        blank,
        Err(ProductServiceError::MissingRequiredFields)
    ));

    let product_id = add_product("LifecycleProduct", "10.00", 5, "active").await;

    service
        .update_product(
            product_id,
            UpdateProduct {
                price: Some(BigDecimal::from_str("12.00").unwrap()),
                stock: Some(8),
                ..Default::default()
            },
        )
        .await
        .expect("Update failed");

    let updated = service
        .get_product_any_status(product_id)
        .await
        .expect("Fetch failed");
    assert_eq!(updated.price, BigDecimal::from_str("12.00").unwrap());
    assert_eq!(updated.stock, 8);

    service
        .delete_product(product_id)
        .await
        .expect("Delete failed");

    let gone = service.get_product_any_status(product_id).await;
    assert!(matches!(gone, Err(ProductServiceError::ProductNotFound)));

    let missing = service.delete_product(product_id).await;
    assert!(matches!(
        missing,
        Err(ProductServiceError::ProductNotFound)
    ));
}
