#[tokio::test]
#[serial_test::serial]
pub async fn test_database_connection() {
    let database = storefront_server_lib::data::database::Database::new().await;

    // Attempt to get a connection from the pool
    let conn = database.get_connection().await;

    assert!(conn.is_ok(), "Failed to get a database connection");
}

#[tokio::test]
#[serial_test::serial]
pub async fn test_pool_hands_out_concurrent_connections() {
    let database = storefront_server_lib::data::database::Database::new().await;

    // The pool's max_size comes from Config, so it must be able to hold
    // more than one checked-out connection at a time.
    let first = database.get_connection().await;
    let second = database.get_connection().await;

    assert!(first.is_ok(), "Failed to get the first connection");
    assert!(second.is_ok(), "Failed to get the second connection");
}
