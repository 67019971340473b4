use async_trait::async_trait;
use diesel::result;

/// Common CRUD surface shared by every table-backed repository.
///
/// `get_all`/`get_by_id` return `Ok(None)` for an empty result set rather
/// than surfacing `result::Error::NotFound`.
#[async_trait]
pub trait Repository {
    type Id: Send;
    type Item: Send;
    type NewItem<'a>: Send
    where
        Self: 'a;
    type UpdateForm<'a>: Send
    where
        Self: 'a;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error>;

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error>;

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<(), result::Error>;

    async fn update<'a>(
        &self,
        id: Self::Id,
        item: Self::UpdateForm<'a>,
    ) -> Result<(), result::Error>;

    async fn delete(&self, id: Self::Id) -> Result<(), result::Error>;
}
