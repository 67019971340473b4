use crate::data::database::Database;
use crate::data::models::product::{NewProduct, Product, UpdateProduct};
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use diesel::result;
use diesel_async::pooled_connection::deadpool::Object;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncMysqlConnection, RunQueryDsl};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    #[default]
    CreatedAt,
    Price,
    Sales,
    Rating,
}

impl std::str::FromStr for ProductSort {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "price" => Ok(ProductSort::Price),
            "sales" => Ok(ProductSort::Sales),
            "rating" => Ok(ProductSort::Rating),
            "created_at" => Ok(ProductSort::CreatedAt),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Parameterized catalog listing. Only `active` products are returned.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub category_id: Option<i32>,
    pub search: Option<String>,
    pub featured: Option<bool>,
    pub min_price: Option<BigDecimal>,
    pub max_price: Option<BigDecimal>,
    pub sort_by: ProductSort,
    pub direction: SortDirection,
    pub page: i64,
    pub per_page: i64,
}

impl ProductQuery {
    pub fn page(&self) -> i64 {
        self.page.max(1)
    }

    pub fn per_page(&self) -> i64 {
        if self.per_page > 0 { self.per_page } else { 12 }
    }
}

pub struct ProductRepo {}

impl ProductRepo {
    pub fn new() -> Self {
        ProductRepo {}
    }

    pub async fn get_by_name(&self, name_query: &str) -> Result<Option<Product>, result::Error> {
        use crate::data::models::schema::products::dsl::{name, products};

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        match products
            .filter(name.eq(name_query))
            .first::<Product>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Storefront catalog listing: filters, sorting, and offset pagination in
    /// one round trip each for rows and total count.
    pub async fn search(&self, q: &ProductQuery) -> Result<(Vec<Product>, i64), result::Error> {
        use crate::data::models::schema::products::dsl::*;

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        let apply_filters = |mut query: crate::data::models::schema::products::BoxedQuery<
            'static,
            diesel::mysql::Mysql,
        >| {
            query = query.filter(status.eq("active"));
            if let Some(cid) = q.category_id {
                query = query.filter(category_id.eq(cid));
            }
            if let Some(term) = &q.search {
                let pattern = format!("%{}%", term);
                query = query.filter(
                    name.like(pattern.clone())
                        .or(description.like(pattern).assume_not_null()),
                );
            }
            if let Some(flag) = q.featured {
                query = query.filter(featured.eq(flag));
            }
            if let Some(min) = &q.min_price {
                query = query.filter(price.ge(min.clone()));
            }
            if let Some(max) = &q.max_price {
                query = query.filter(price.le(max.clone()));
            }
            query
        };

        let total: i64 = apply_filters(products.into_boxed())
            .count()
            .get_result(&mut conn)
            .await?;

        let mut query = apply_filters(products.into_boxed());
        query = match (q.sort_by, q.direction) {
            (ProductSort::Price, SortDirection::Asc) => query.order(price.asc()),
            (ProductSort::Price, SortDirection::Desc) => query.order(price.desc()),
            (ProductSort::Sales, SortDirection::Asc) => query.order(sales.asc()),
            (ProductSort::Sales, SortDirection::Desc) => query.order(sales.desc()),
            (ProductSort::Rating, SortDirection::Asc) => query.order(rating.asc()),
            (ProductSort::Rating, SortDirection::Desc) => query.order(rating.desc()),
            (ProductSort::CreatedAt, SortDirection::Asc) => query.order(created_at.asc()),
            (ProductSort::CreatedAt, SortDirection::Desc) => query.order(created_at.desc()),
        };

        let rows = query
            .limit(q.per_page())
            .offset((q.page() - 1) * q.per_page())
            .load::<Product>(&mut conn)
            .await?;

        Ok((rows, total))
    }

    /// Admin listing: no status filter, optional name search and category.
    pub async fn admin_list(
        &self,
        search: Option<&str>,
        category: Option<i32>,
        page: i64,
        per_page: i64,
    ) -> Result<(Vec<Product>, i64), result::Error> {
        use crate::data::models::schema::products::dsl::*;

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        let apply = |mut query: crate::data::models::schema::products::BoxedQuery<
            'static,
            diesel::mysql::Mysql,
        >| {
            if let Some(term) = search {
                query = query.filter(name.like(format!("%{}%", term)));
            }
            if let Some(cid) = category {
                query = query.filter(category_id.eq(cid));
            }
            query
        };

        let total: i64 = apply(products.into_boxed())
            .count()
            .get_result(&mut conn)
            .await?;

        let rows = apply(products.into_boxed())
            .order(created_at.desc())
            .limit(per_page)
            .offset((page - 1) * per_page)
            .load::<Product>(&mut conn)
            .await?;

        Ok((rows, total))
    }

    /// Detail reads bump the view counter.
    pub async fn increment_views(&self, id: i32) -> Result<(), result::Error> {
        use crate::data::models::schema::products::dsl::{product_id, products, views};

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        diesel::update(products.filter(product_id.eq(id)))
            .set(views.eq(views + 1))
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    pub async fn count_all(&self) -> Result<i64, result::Error> {
        use crate::data::models::schema::products::dsl::products;

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        products.count().get_result(&mut conn).await
    }
}

#[async_trait]
impl Repository for ProductRepo {
    type Id = i32;
    type Item = Product;
    type NewItem<'a> = NewProduct<'a>;
    type UpdateForm<'a> = UpdateProduct<'a>;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::products::dsl::products;

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        match products.load::<Self::Item>(&mut conn).await {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::products::dsl::{product_id, products};

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        match products
            .filter(product_id.eq(id))
            .first::<Self::Item>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<(), result::Error> {
        use crate::data::models::schema::products::dsl::products;

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(products)
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
        use crate::data::models::schema::products::dsl::{product_id, products};

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        conn.transaction(|connection| {
            async move {
                diesel::update(products.filter(product_id.eq(id)))
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
        use crate::data::models::schema::products::dsl::{product_id, products};

        let db = Database::new().await;

        let mut conn: Object<AsyncMysqlConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        conn.transaction(|connection| {
            async move {
                diesel::delete(products.filter(product_id.eq(id)))
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}

impl Default for ProductRepo {
    fn default() -> Self {
        Self::new()
    }
}
