use crate::data::database::Database;
use crate::data::models::user::{NewUser, UpdateUser, User};
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::pooled_connection::deadpool::Object;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncMysqlConnection, RunQueryDsl};

pub struct UserRepo {}

impl UserRepo {
    pub fn new() -> Self {
        UserRepo {}
    }

    pub async fn get_by_username(
        &self,
        username_query: &str,
    ) -> Result<Option<User>, result::Error> {
        use crate::data::models::schema::users::dsl::{username, users};

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        match users
            .filter(username.eq(username_query))
            .first::<User>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Login lookup: the identifier may be either a username or an email.
    pub async fn get_by_username_or_email(
        &self,
        identifier: &str,
    ) -> Result<Option<User>, result::Error> {
        use crate::data::models::schema::users::dsl::{email, username, users};

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        match users
            .filter(username.eq(identifier).or(email.eq(identifier)))
            .first::<User>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// True when the username or email is already registered.
    pub async fn identity_taken(
        &self,
        username_query: &str,
        email_query: &str,
    ) -> Result<bool, result::Error> {
        use crate::data::models::schema::users::dsl::{email, username, users};

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        let count: i64 = users
            .filter(username.eq(username_query).or(email.eq(email_query)))
            .count()
            .get_result(&mut conn)
            .await?;

        Ok(count > 0)
    }

    /// True when the email belongs to a different user than `owner_id`.
    pub async fn email_taken_by_other(
        &self,
        email_query: &str,
        owner_id: i32,
    ) -> Result<bool, result::Error> {
        use crate::data::models::schema::users::dsl::{email, user_id, users};

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        let count: i64 = users
            .filter(email.eq(email_query).and(user_id.ne(owner_id)))
            .count()
            .get_result(&mut conn)
            .await?;

        Ok(count > 0)
    }

    pub async fn set_password_hash(
        &self,
        id: i32,
        new_hash: &str,
    ) -> Result<(), result::Error> {
        use crate::data::models::schema::users::dsl::{password_hash, user_id, users};

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        diesel::update(users.filter(user_id.eq(id)))
            .set(password_hash.eq(new_hash))
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    /// Paginated user listing for the admin panel, with an optional
    /// username/email substring filter. Returns the page plus total count.
    pub async fn search_paginated(
        &self,
        search: Option<&str>,
        page: i64,
        per_page: i64,
    ) -> Result<(Vec<User>, i64), result::Error> {
        use crate::data::models::schema::users::dsl::{created_at, email, username, users};

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        let mut query = users.into_boxed();
        let mut count_query = users.into_boxed();

        if let Some(term) = search {
            let pattern = format!("%{}%", term);
            query = query.filter(username.like(pattern.clone()).or(email.like(pattern.clone())));
            count_query =
                count_query.filter(username.like(pattern.clone()).or(email.like(pattern)));
        }

        let total: i64 = count_query.count().get_result(&mut conn).await?;

        let page_rows = query
            .order(created_at.desc())
            .limit(per_page)
            .offset((page - 1) * per_page)
            .load::<User>(&mut conn)
            .await?;

        Ok((page_rows, total))
    }

    pub async fn count_by_role(&self, role_query: &str) -> Result<i64, result::Error> {
        use crate::data::models::schema::users::dsl::{role, users};

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        users
            .filter(role.eq(role_query))
            .count()
            .get_result(&mut conn)
            .await
    }
}

#[async_trait]
impl Repository for UserRepo {
    type Id = i32;
    type Item = User;
    type NewItem<'a> = NewUser<'a>;
    type UpdateForm<'a> = UpdateUser<'a>;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::users::dsl::users;

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        match users.load::<Self::Item>(&mut conn).await {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::users::dsl::{user_id, users};

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        match users
            .filter(user_id.eq(id))
            .first::<Self::Item>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<(), result::Error> {
        use crate::data::models::schema::users::dsl::users;

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(users)
                    .values(&item)
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    async fn update<'a>(
        &self,
        id: Self::Id,
        item: Self::UpdateForm<'a>,
    ) -> Result<(), result::Error> {
        use crate::data::models::schema::users::dsl::{user_id, users};

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        conn.transaction(|connection| {
            async move {
                diesel::update(users.filter(user_id.eq(id)))
                    .set(&item)
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    async fn delete(&self, id: Self::Id) -> Result<(), result::Error> {
        use crate::data::models::schema::users::dsl::{user_id, users};

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        conn.transaction(|connection| {
            async move {
                diesel::delete(users.filter(user_id.eq(id)))
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}

impl Default for UserRepo {
    fn default() -> Self {
        Self::new()
    }
}
