use crate::data::database::Database;
use crate::data::models::cart_item::{CartItem, NewCartItem};
use crate::data::models::product::Product;
use crate::data::models::schema;
use diesel::prelude::*;
use diesel::result;
use diesel_async::pooled_connection::deadpool::Object;
use diesel_async::{AsyncMysqlConnection, RunQueryDsl};

/// Per-user cart rows. Every method is scoped to the owning user; the
/// (user, product) pair is unique so adds merge into an existing row.
pub struct CartRepo {}

impl CartRepo {
    pub fn new() -> Self {
        CartRepo {}
    }

    async fn connection(&self) -> Result<Object<AsyncMysqlConnection>, result::Error> {
        let db = Database::new().await;
        db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })
    }

    pub async fn get_with_products(
        &self,
        owner_id: i32,
    ) -> Result<Vec<(CartItem, Product)>, result::Error> {
        let mut conn = self.connection().await?;

        schema::cart_items::table
            .inner_join(schema::products::table)
            .filter(schema::cart_items::user_id.eq(owner_id))
            .load::<(CartItem, Product)>(&mut conn)
            .await
    }

    pub async fn get_entry(
        &self,
        owner_id: i32,
        product: i32,
    ) -> Result<Option<CartItem>, result::Error> {
        let mut conn = self.connection().await?;

        schema::cart_items::table
            .filter(
                schema::cart_items::user_id
                    .eq(owner_id)
                    .and(schema::cart_items::product_id.eq(product)),
            )
            .first::<CartItem>(&mut conn)
            .await
            .optional()
    }

    pub async fn add(&self, item: NewCartItem) -> Result<(), result::Error> {
        let mut conn = self.connection().await?;

        diesel::insert_into(schema::cart_items::table)
            .values(&item)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    /// Returns the number of rows touched; zero means the entry is not owned
    /// by this user (or does not exist).
    pub async fn set_quantity(
        &self,
        owner_id: i32,
        product: i32,
        new_quantity: i32,
    ) -> Result<usize, result::Error> {
        let mut conn = self.connection().await?;

        diesel::update(
            schema::cart_items::table.filter(
                schema::cart_items::user_id
                    .eq(owner_id)
                    .and(schema::cart_items::product_id.eq(product)),
            ),
        )
        .set(schema::cart_items::quantity.eq(new_quantity))
        .execute(&mut conn)
        .await
    }

    pub async fn remove(&self, owner_id: i32, product: i32) -> Result<usize, result::Error> {
        let mut conn = self.connection().await?;

        diesel::delete(
            schema::cart_items::table.filter(
                schema::cart_items::user_id
                    .eq(owner_id)
                    .and(schema::cart_items::product_id.eq(product)),
            ),
        )
        .execute(&mut conn)
        .await
    }

    pub async fn clear(&self, owner_id: i32) -> Result<(), result::Error> {
        let mut conn = self.connection().await?;

        diesel::delete(
            schema::cart_items::table.filter(schema::cart_items::user_id.eq(owner_id)),
        )
        .execute(&mut conn)
        .await?;

        Ok(())
    }
}

impl Default for CartRepo {
    fn default() -> Self {
        Self::new()
    }
}
