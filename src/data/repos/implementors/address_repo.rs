use crate::data::database::Database;
use crate::data::models::address::{Address, NewAddress, UpdateAddress};
use crate::data::models::schema;
use diesel::prelude::*;
use diesel::result;
use diesel_async::pooled_connection::deadpool::Object;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncMysqlConnection, RunQueryDsl};

/// Shipping addresses, exclusively owned by one user. At most one address
/// per user carries the default flag.
pub struct AddressRepo {}

impl AddressRepo {
    pub fn new() -> Self {
        AddressRepo {}
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

    pub async fn list_by_user(&self, owner_id: i32) -> Result<Vec<Address>, result::Error> {
        let mut conn = self.connection().await?;

        schema::addresses::table
            .filter(schema::addresses::user_id.eq(owner_id))
            .order((
                schema::addresses::is_default.desc(),
                schema::addresses::created_at.desc(),
            ))
            .load::<Address>(&mut conn)
            .await
    }

    pub async fn get_scoped(
        &self,
        id: i32,
        owner_id: i32,
    ) -> Result<Option<Address>, result::Error> {
        let mut conn = self.connection().await?;

        schema::addresses::table
            .filter(
                schema::addresses::address_id
                    .eq(id)
                    .and(schema::addresses::user_id.eq(owner_id)),
            )
            .first::<Address>(&mut conn)
            .await
            .optional()
    }

    /// Inserts the address; when it is flagged default, the user's other
    /// defaults are cleared in the same transaction.
    pub async fn add(&self, item: NewAddress<'_>) -> Result<(), result::Error> {
        let mut conn = self.connection().await?;

        conn.transaction::<(), result::Error, _>(|connection| {
            async move {
                if item.is_default {
                    diesel::update(
                        schema::addresses::table
                            .filter(schema::addresses::user_id.eq(item.user_id)),
                    )
                    .set(schema::addresses::is_default.eq(false))
                    .execute(connection)
                    .await?;
                }

                diesel::insert_into(schema::addresses::table)
                    .values(&item)
                    .execute(connection)
                    .await?;

                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    /// Scoped update; returns rows touched (zero when not owned). Clears
    /// competing defaults first when the form promotes this address.
    pub async fn update_scoped(
        &self,
        id: i32,
        owner_id: i32,
        item: UpdateAddress<'_>,
    ) -> Result<usize, result::Error> {
        let mut conn = self.connection().await?;

        conn.transaction::<usize, result::Error, _>(|connection| {
            async move {
                if item.is_default == Some(true) {
                    diesel::update(
                        schema::addresses::table.filter(
                            schema::addresses::user_id
                                .eq(owner_id)
                                .and(schema::addresses::address_id.ne(id)),
                        ),
                    )
                    .set(schema::addresses::is_default.eq(false))
                    .execute(connection)
                    .await?;
                }

                let affected = diesel::update(
                    schema::addresses::table.filter(
                        schema::addresses::address_id
                            .eq(id)
                            .and(schema::addresses::user_id.eq(owner_id)),
                    ),
                )
                .set(&item)
                .execute(connection)
                .await?;

                Ok(affected)
            }
            .scope_boxed()
        })
        .await
    }

    pub async fn delete_scoped(&self, id: i32, owner_id: i32) -> Result<usize, result::Error> {
        let mut conn = self.connection().await?;

        diesel::delete(
            schema::addresses::table.filter(
                schema::addresses::address_id
                    .eq(id)
                    .and(schema::addresses::user_id.eq(owner_id)),
            ),
        )
        .execute(&mut conn)
        .await
    }

    /// Promotes one owned address to default, demoting the rest atomically.
    pub async fn set_default(&self, id: i32, owner_id: i32) -> Result<usize, result::Error> {
        let mut conn = self.connection().await?;

        conn.transaction::<usize, result::Error, _>(|connection| {
            async move {
                diesel::update(
                    schema::addresses::table
                        .filter(schema::addresses::user_id.eq(owner_id)),
                )
                .set(schema::addresses::is_default.eq(false))
                .execute(connection)
                .await?;

                let affected = diesel::update(
                    schema::addresses::table.filter(
                        schema::addresses::address_id
                            .eq(id)
                            .and(schema::addresses::user_id.eq(owner_id)),
                    ),
                )
                .set(schema::addresses::is_default.eq(true))
                .execute(connection)
                .await?;

                Ok(affected)
            }
            .scope_boxed()
        })
        .await
    }
}

impl Default for AddressRepo {
    fn default() -> Self {
        Self::new()
    }
}
