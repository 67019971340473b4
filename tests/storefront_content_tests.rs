use diesel::result;
use diesel_async::RunQueryDsl;
use storefront_server_lib::data::database::Database;
use storefront_server_lib::data::models::banner::NewBanner;
use storefront_server_lib::data::models::category::NewCategory;
use storefront_server_lib::data::repos::implementors::banner_repo::BannerRepo;
use storefront_server_lib::data::repos::implementors::category_repo::CategoryRepo;
use storefront_server_lib::data::repos::traits::repository::Repository;
use storefront_server_lib::services::banner_service::BannerService;
use storefront_server_lib::services::category_service::CategoryService;
use storefront_server_lib::services::errors::ProductServiceError;

async fn setup() -> Result<(), result::Error> {
    let db = Database::new().await;

    let mut conn = db
        .get_connection()
        .await
        .expect("Failed to get a database connection");

    use storefront_server_lib::data::models::schema::banners::dsl::banners;
    use storefront_server_lib::data::models::schema::categories::dsl::categories;
    use storefront_server_lib::data::models::schema::products::dsl::products;

    diesel::delete(products).execute(&mut conn).await?;
    diesel::delete(categories).execute(&mut conn).await?;
    diesel::delete(banners).execute(&mut conn).await?;

    Ok(())
}

async fn add_category(name: &str, sort_order: i32) {
    CategoryRepo::new()
        .add(NewCategory {
            name,
            description: None,
            image: None,
            sort_order,
        })
        .await
        .expect("Failed to add category");
}

#[tokio::test]
#[serial_test::serial]
async fn test_categories_ordered_by_sort_then_name() {
    setup().await.expect("Setup failed");

    add_category("Zebra", 1).await;
    add_category("Apple", 2).await;
    add_category("Mango", 1).await;

    let categories = CategoryService::new()
        .get_all_categories()
        .await
        .expect("Listing failed");

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Mango", "Zebra", "Apple"]);
}

#[tokio::test]
#[serial_test::serial]
async fn test_get_category_by_id() {
    setup().await.expect("Setup failed");

    add_category("Electronics", 1).await;

    let service = CategoryService::new();
    let listed = service
        .get_all_categories()
        .await
        .expect("Listing failed");

    let category = service
        .get_category(listed[0].category_id)
        .await
        .expect("Fetch failed");
    assert_eq!(category.name, "Electronics");

    let missing = service.get_category(999_999).await;
    assert!(matches!(
        missing,
        Err(ProductServiceError::CategoryNotFound)
    ));
}

#[tokio::test]
#[serial_test::serial]
async fn test_banners_active_only_in_sort_order() {
    setup().await.expect("Setup failed");

    let repo = BannerRepo::new();
    repo.add(NewBanner {
        title: "Second",
        subtitle: None,
        image_url: "img/second.png",
        link_url: None,
        button_text: None,
        sort_order: 2,
        is_active: true,
    })
    .await
    .expect("Failed to add banner");
    repo.add(NewBanner {
        title: "First",
        subtitle: Some("On sale"),
        image_url: "img/first.png",
        link_url: Some("/sale"),
        button_text: Some("Shop"),
        sort_order: 1,
        is_active: true,
    })
    .await
    .expect("Failed to add banner");
    repo.add(NewBanner {
        title: "Hidden",
        subtitle: None,
        image_url: "img/hidden.png",
        link_url: None,
        button_text: None,
        sort_order: 0,
        is_active: false,
    })
    .await
    .expect("Failed to add banner");

    let banners = BannerService::new()
        .get_active_banners()
        .await
        .expect("Listing failed");

    let titles: Vec<&str> = banners.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second"]);
}
