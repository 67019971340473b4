use diesel::result;
use diesel_async::RunQueryDsl;
use storefront_server_lib::data::database::Database;
use storefront_server_lib::data::models::user::NewUser;
use storefront_server_lib::data::repos::implementors::user_repo::UserRepo;
use storefront_server_lib::data::repos::traits::repository::Repository;
use storefront_server_lib::security::auth::AuthService;
use storefront_server_lib::services::address_service::{AddressForm, AddressService};
use storefront_server_lib::services::errors::AddressServiceError;

async fn setup() -> Result<(), result::Error> {
    let db = Database::new().await;

    let mut conn = db
        .get_connection()
        .await
        .expect("Failed to get a database connection");

    use storefront_server_lib::data::models::schema::addresses::dsl::addresses;
    use storefront_server_lib::data::models::schema::users::dsl::users;

    // Clean up in order due to foreign key constraints
    diesel::delete(addresses).execute(&mut conn).await?;
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

fn form(name: &'static str, is_default: bool) -> AddressForm<'static> {
    AddressForm {
        name,
        phone: "5550100",
        province: "Province",
        city: "City",
        district: "District",
        detail: "42 Test Lane",
        is_default,
    }
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_requires_all_fields() {
    setup().await.expect("Setup failed");

    let user_id = create_test_user("addr_fields_user").await;
    let service = AddressService::new();

    let incomplete = AddressForm {
        detail: "  ",
        ..form("Incomplete", false)
    };
    let result = service.create_address(user_id, &incomplete).await;
    assert!(matches!(
        result,
        Err(AddressServiceError::IncompleteAddress)
    ));

    service
        .create_address(user_id, &form("Complete", false))
        .await
        .expect("Failed to create address");

    let addresses = service
        .list_addresses(user_id)
        .await
        .expect("Failed to list");
    assert_eq!(addresses.len(), 1);
}

#[tokio::test]
#[serial_test::serial]
async fn test_single_default_per_user() {
    setup().await.expect("Setup failed");

    let user_id = create_test_user("addr_default_user").await;
    let service = AddressService::new();

    service
        .create_address(user_id, &form("First", true))
        .await
        .expect("Failed to create");
    service
        .create_address(user_id, &form("Second", true))
        .await
        .expect("Failed to create");

    let addresses = service
        .list_addresses(user_id)
        .await
        .expect("Failed to list");
    let defaults: Vec<_> = addresses.iter().filter(|a| a.is_default).collect();
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0].name, "Second");

    // Promote the other one explicitly
    let first = addresses
        .iter()
        .find(|a| a.name == "First")
        .expect("Missing address");
    service
        .set_default(first.address_id, user_id)
        .await
        .expect("Failed to set default");

    let addresses = service
        .list_addresses(user_id)
        .await
        .expect("Failed to list");
    let defaults: Vec<_> = addresses.iter().filter(|a| a.is_default).collect();
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0].name, "First");
}

#[tokio::test]
#[serial_test::serial]
async fn test_operations_scoped_to_owner() {
    setup().await.expect("Setup failed");

    let owner = create_test_user("addr_owner").await;
    let intruder = create_test_user("addr_intruder").await;
    let service = AddressService::new();

    service
        .create_address(owner, &form("Home", true))
        .await
        .expect("Failed to create");
    let address_id = service
        .list_addresses(owner)
        .await
        .expect("Failed to list")[0]
        .address_id;

    let fetch = service.get_address(address_id, intruder).await;
    assert!(matches!(fetch, Err(AddressServiceError::AddressNotFound)));

    let update = service
        .update_address(address_id, intruder, &form("Hijacked", false))
        .await;
    assert!(matches!(update, Err(AddressServiceError::AddressNotFound)));

    let delete = service.delete_address(address_id, intruder).await;
    assert!(matches!(delete, Err(AddressServiceError::AddressNotFound)));

    let set_default = service.set_default(address_id, intruder).await;
    assert!(matches!(
        set_default,
        Err(AddressServiceError::AddressNotFound)
    ));

    // Another user's defaults are untouched by the failed set_default
    let addresses = service.list_addresses(owner).await.expect("Failed to list");
    assert!(addresses[0].is_default);
}

#[tokio::test]
#[serial_test::serial]
async fn test_update_and_delete() {
    setup().await.expect("Setup failed");

    let user_id = create_test_user("addr_crud_user").await;
    let service = AddressService::new();

    service
        .create_address(user_id, &form("Old Name", false))
        .await
        .expect("Failed to create");
    let address_id = service
        .list_addresses(user_id)
        .await
        .expect("Failed to list")[0]
        .address_id;

    service
        .update_address(address_id, user_id, &form("New Name", false))
        .await
        .expect("Failed to update");

    let address = service
        .get_address(address_id, user_id)
        .await
        .expect("Failed to fetch");
    assert_eq!(address.name, "New Name");

    service
        .delete_address(address_id, user_id)
        .await
        .expect("Failed to delete");

    let gone = service.get_address(address_id, user_id).await;
    assert!(matches!(gone, Err(AddressServiceError::AddressNotFound)));
}
