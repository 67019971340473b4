use crate::data::database::Database;
use crate::data::models::order::{NewOrder, Order};
use crate::data::models::order_item::{NewOrderItem, OrderItem};
use crate::data::models::schema;
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use diesel::result;
use diesel_async::pooled_connection::deadpool::Object;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncMysqlConnection, RunQueryDsl};
use std::collections::HashMap;

/// One requested (product, quantity) pair at checkout time.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutLine {
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatedOrder {
    pub order_id: i32,
    pub order_number: String,
    pub total_amount: BigDecimal,
}

#[derive(Debug)]
pub enum OrderRepoError {
    NotFound,
    MissingProduct(i32),
    InsufficientStock(i32),
    InvalidStatus { current: String },
    Db(result::Error),
}

impl From<result::Error> for OrderRepoError {
    fn from(e: result::Error) -> Self {
        OrderRepoError::Db(e)
    }
}

pub struct OrderRepo {}

impl OrderRepo {
    pub fn new() -> Self {
        OrderRepo {}
    }

    async fn connection(
        &self,
    ) -> Result<Object<AsyncMysqlConnection>, result::Error> {
        let db = Database::new().await;
        db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })
    }

    /// Converts a set of checkout lines into a persisted order inside one
    /// transaction: price snapshot per line, conditional stock decrement,
    /// order row, and item rows either all commit or none do.
    ///
    /// The decrement is a single guarded UPDATE (`stock = stock - ? WHERE
    /// stock >= ?`); zero affected rows means another checkout won the race
    /// and the whole order rolls back. Stock can therefore never go negative
    /// even under concurrent requests.
    pub async fn create_checked(
        &self,
        owner_id: i32,
        order_number: &str,
        shipping_address: &str,
        payment_method: Option<&str>,
        lines: &[CheckoutLine],
    ) -> Result<CreatedOrder, OrderRepoError> {
        use crate::data::models::product::Product;

        let mut conn = self.connection().await?;

        conn.transaction::<CreatedOrder, OrderRepoError, _>(|connection| {
            async move {
                let mut total = BigDecimal::from(0);
                let mut item_rows: Vec<NewOrderItem> = Vec::with_capacity(lines.len());

                for line in lines {
                    let product = schema::products::table
                        .filter(schema::products::product_id.eq(line.product_id))
                        .first::<Product>(connection)
                        .await
                        .optional()?
                        .ok_or(OrderRepoError::MissingProduct(line.product_id))?;

                    let affected = diesel::update(
                        schema::products::table.filter(
                            schema::products::product_id
                                .eq(line.product_id)
                                .and(schema::products::stock.ge(line.quantity)),
                        ),
                    )
                    .set(schema::products::stock.eq(schema::products::stock - line.quantity))
                    .execute(connection)
                    .await?;

                    if affected == 0 {
                        return Err(OrderRepoError::InsufficientStock(line.product_id));
                    }

                    let subtotal = product.price.clone() * BigDecimal::from(line.quantity);
                    total += subtotal.clone();

                    item_rows.push(NewOrderItem {
                        order_id: 0, // filled in below, once the order row exists
                        product_id: product.product_id,
                        product_name: product.name,
                        product_price: product.price,
                        quantity: line.quantity,
                        subtotal,
                    });
                }

                let new_order = NewOrder {
                    user_id: owner_id,
                    order_number,
                    status: "pending",
                    payment_status: "pending",
                    total_amount: total.clone(),
                    shipping_address,
                    payment_method,
                    notes: None,
                };

                diesel::insert_into(schema::orders::table)
                    .values(&new_order)
                    .execute(connection)
                    .await?;

                let new_id: i64 = diesel::select(diesel::dsl::sql::<diesel::sql_types::BigInt>(
                    "LAST_INSERT_ID()",
                ))
                .get_result(connection)
                .await?;

                for row in &mut item_rows {
                    row.order_id = new_id as i32;
                }

                diesel::insert_into(schema::order_items::table)
                    .values(&item_rows)
                    .execute(connection)
                    .await?;

                Ok(CreatedOrder {
                    order_id: new_id as i32,
                    order_number: order_number.to_string(),
                    total_amount: total,
                })
            }
            .scope_boxed()
        })
        .await
    }

    /// Cancels a pending order, restoring every line's quantity onto its
    /// product's stock. Atomic with the status flip.
    pub async fn cancel_restocking(
        &self,
        id: i32,
        owner_id: i32,
    ) -> Result<(), OrderRepoError> {
        let mut conn = self.connection().await?;

        conn.transaction::<(), OrderRepoError, _>(|connection| {
            async move {
                let order = schema::orders::table
                    .filter(
                        schema::orders::order_id
                            .eq(id)
                            .and(schema::orders::user_id.eq(owner_id)),
                    )
                    .for_update()
                    .first::<Order>(connection)
                    .await
                    .optional()?
                    .ok_or(OrderRepoError::NotFound)?;

                if order.status != "pending" {
                    return Err(OrderRepoError::InvalidStatus {
                        current: order.status,
                    });
                }

                let items = schema::order_items::table
                    .filter(schema::order_items::order_id.eq(id))
                    .load::<OrderItem>(connection)
                    .await?;

                for item in &items {
                    diesel::update(
                        schema::products::table
                            .filter(schema::products::product_id.eq(item.product_id)),
                    )
                    .set(schema::products::stock.eq(schema::products::stock + item.quantity))
                    .execute(connection)
                    .await?;
                }

                diesel::update(schema::orders::table.filter(schema::orders::order_id.eq(id)))
                    .set(schema::orders::status.eq("cancelled"))
                    .execute(connection)
                    .await?;

                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    /// Marks a pending order paid and clears the owner's entire cart in the
    /// same transaction. The whole cart is intentional: the original flow
    /// assumes a single active checkout per user (flagged for product review).
    pub async fn mark_paid_clearing_cart(
        &self,
        id: i32,
        owner_id: i32,
    ) -> Result<(), OrderRepoError> {
        let mut conn = self.connection().await?;

        conn.transaction::<(), OrderRepoError, _>(|connection| {
            async move {
                let order = schema::orders::table
                    .filter(
                        schema::orders::order_id
                            .eq(id)
                            .and(schema::orders::user_id.eq(owner_id)),
                    )
                    .for_update()
                    .first::<Order>(connection)
                    .await
                    .optional()?
                    .ok_or(OrderRepoError::NotFound)?;

                if order.status != "pending" {
                    return Err(OrderRepoError::InvalidStatus {
                        current: order.status,
                    });
                }

                diesel::update(schema::orders::table.filter(schema::orders::order_id.eq(id)))
                    .set((
                        schema::orders::status.eq("paid"),
                        schema::orders::payment_status.eq("paid"),
                    ))
                    .execute(connection)
                    .await?;

                diesel::delete(
                    schema::cart_items::table.filter(schema::cart_items::user_id.eq(owner_id)),
                )
                .execute(connection)
                .await?;

                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    /// `shipped -> delivered`, confirmed by the owner.
    pub async fn confirm_delivered(
        &self,
        id: i32,
        owner_id: i32,
    ) -> Result<(), OrderRepoError> {
        let mut conn = self.connection().await?;

        conn.transaction::<(), OrderRepoError, _>(|connection| {
            async move {
                let order = schema::orders::table
                    .filter(
                        schema::orders::order_id
                            .eq(id)
                            .and(schema::orders::user_id.eq(owner_id)),
                    )
                    .for_update()
                    .first::<Order>(connection)
                    .await
                    .optional()?
                    .ok_or(OrderRepoError::NotFound)?;

                if order.status != "shipped" {
                    return Err(OrderRepoError::InvalidStatus {
                        current: order.status,
                    });
                }

                diesel::update(schema::orders::table.filter(schema::orders::order_id.eq(id)))
                    .set(schema::orders::status.eq("delivered"))
                    .execute(connection)
                    .await?;

                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    /// Administrative escape hatch: writes any status value without
    /// consulting the transition table. Does not touch stock.
    pub async fn force_set_status(
        &self,
        id: i32,
        status_value: &str,
    ) -> Result<(), OrderRepoError> {
        let mut conn = self.connection().await?;

        let affected =
            diesel::update(schema::orders::table.filter(schema::orders::order_id.eq(id)))
                .set(schema::orders::status.eq(status_value))
                .execute(&mut conn)
                .await?;

        if affected == 0 {
            return Err(OrderRepoError::NotFound);
        }

        Ok(())
    }

    pub async fn get_scoped(
        &self,
        id: i32,
        owner_id: i32,
    ) -> Result<Option<Order>, result::Error> {
        let mut conn = self.connection().await?;

        schema::orders::table
            .filter(
                schema::orders::order_id
                    .eq(id)
                    .and(schema::orders::user_id.eq(owner_id)),
            )
            .first::<Order>(&mut conn)
            .await
            .optional()
    }

    pub async fn list_by_user(&self, owner_id: i32) -> Result<Vec<Order>, result::Error> {
        let mut conn = self.connection().await?;

        schema::orders::table
            .filter(schema::orders::user_id.eq(owner_id))
            .order(schema::orders::created_at.desc())
            .load::<Order>(&mut conn)
            .await
    }

    pub async fn get_items(&self, id: i32) -> Result<Vec<OrderItem>, result::Error> {
        let mut conn = self.connection().await?;

        schema::order_items::table
            .filter(schema::order_items::order_id.eq(id))
            .load::<OrderItem>(&mut conn)
            .await
    }

    /// Groups line items onto their orders without an N+1 fetch.
    pub async fn attach_items(
        &self,
        orders_list: Vec<Order>,
    ) -> Result<Vec<(Order, Vec<OrderItem>)>, result::Error> {
        if orders_list.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.connection().await?;

        let ids: Vec<i32> = orders_list.iter().map(|o| o.order_id).collect();

        let items = schema::order_items::table
            .filter(schema::order_items::order_id.eq_any(ids))
            .load::<OrderItem>(&mut conn)
            .await?;

        let mut map: HashMap<i32, Vec<OrderItem>> = HashMap::new();
        for item in items {
            map.entry(item.order_id).or_default().push(item);
        }

        Ok(orders_list
            .into_iter()
            .map(|o| {
                let items = map.remove(&o.order_id).unwrap_or_default();
                (o, items)
            })
            .collect())
    }

    /// Admin listing joined with the owning username, filtered by status
    /// and/or an order-number/username substring.
    pub async fn admin_list(
        &self,
        status_filter: Option<&str>,
        search: Option<&str>,
        page: i64,
        per_page: i64,
    ) -> Result<(Vec<(Order, String)>, i64), result::Error> {
        let mut conn = self.connection().await?;

        let apply = |mut query: diesel::helper_types::IntoBoxed<
            'static,
            diesel::helper_types::InnerJoin<schema::orders::table, schema::users::table>,
            diesel::mysql::Mysql,
        >| {
            if let Some(s) = status_filter {
                query = query.filter(schema::orders::status.eq(s.to_string()));
            }
            if let Some(term) = search {
                let pattern = format!("%{}%", term);
                query = query.filter(
                    schema::orders::order_number
                        .like(pattern.clone())
                        .or(schema::users::username.like(pattern)),
                );
            }
            query
        };

        let total: i64 = apply(schema::orders::table.inner_join(schema::users::table).into_boxed())
            .count()
            .get_result(&mut conn)
            .await?;

        let rows = apply(schema::orders::table.inner_join(schema::users::table).into_boxed())
            .select((Order::as_select(), schema::users::username))
            .order(schema::orders::created_at.desc())
            .limit(per_page)
            .offset((page - 1) * per_page)
            .load::<(Order, String)>(&mut conn)
            .await?;

        Ok((rows, total))
    }

    pub async fn recent_with_usernames(
        &self,
        limit: i64,
    ) -> Result<Vec<(Order, String)>, result::Error> {
        let mut conn = self.connection().await?;

        schema::orders::table
            .inner_join(schema::users::table)
            .select((Order::as_select(), schema::users::username))
            .order(schema::orders::created_at.desc())
            .limit(limit)
            .load::<(Order, String)>(&mut conn)
            .await
    }

    pub async fn count_all(&self) -> Result<i64, result::Error> {
        let mut conn = self.connection().await?;

        schema::orders::table.count().get_result(&mut conn).await
    }

    /// Revenue over orders whose payment went through.
    pub async fn paid_revenue(&self) -> Result<Option<BigDecimal>, result::Error> {
        use diesel::dsl::sum;

        let mut conn = self.connection().await?;

        schema::orders::table
            .filter(schema::orders::payment_status.eq("paid"))
            .select(sum(schema::orders::total_amount))
            .first::<Option<BigDecimal>>(&mut conn)
            .await
    }
}

impl Default for OrderRepo {
    fn default() -> Self {
        Self::new()
    }
}
