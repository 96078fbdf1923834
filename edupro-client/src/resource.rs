//! Generic REST collection
//!
//! Every backend resource follows the same lifecycle: paginated GET on the
//! collection, GET/PATCH/PUT/DELETE on `{collection}{id}/`, POST on the
//! collection to create.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{ListQuery, Page};

use crate::http::{ApiRequest, HttpClient};
use crate::ClientResult;

/// Typed handle on one collection path
pub struct Resource<'a, C, T> {
    client: &'a C,
    path: String,
    _item: PhantomData<fn() -> T>,
}

impl<'a, C, T> Resource<'a, C, T>
where
    C: HttpClient,
    T: DeserializeOwned + Send,
{
    /// `path` is the collection path, e.g. `/academic/students/`
    pub fn new(client: &'a C, path: impl Into<String>) -> Self {
        let mut path = path.into();
        if !path.ends_with('/') {
            path.push('/');
        }
        Self {
            client,
            path,
            _item: PhantomData,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path of a single item
    pub fn item_path(&self, id: i64) -> String {
        format!("{}{}/", self.path, id)
    }

    /// Fetch one page
    pub async fn list(&self, query: &ListQuery) -> ClientResult<Page<T>> {
        let request = ApiRequest::get(self.path.as_str()).query(query.to_pairs());
        self.client.request(request).await
    }

    /// Fetch every page starting at `query.page` (or 1)
    pub async fn all(&self, query: &ListQuery) -> ClientResult<Vec<T>> {
        let mut query = query.clone();
        let mut page_no = query.page.unwrap_or(1);
        let mut items = Vec::new();
        loop {
            query.page = Some(page_no);
            let page = self.list(&query).await?;
            let has_next = page.has_next() && !page.is_empty();
            items.extend(page.results);
            if !has_next {
                break;
            }
            page_no += 1;
        }
        Ok(items)
    }

    pub async fn get(&self, id: i64) -> ClientResult<T> {
        self.client.get(&self.item_path(id)).await
    }

    pub async fn create<B: Serialize + Sync>(&self, body: &B) -> ClientResult<T> {
        self.client.post(&self.path, body).await
    }

    /// Partial update (PATCH)
    pub async fn update<B: Serialize + Sync>(&self, id: i64, body: &B) -> ClientResult<T> {
        self.client.patch(&self.item_path(id), body).await
    }

    /// Full replacement (PUT)
    pub async fn replace<B: Serialize + Sync>(&self, id: i64, body: &B) -> ClientResult<T> {
        self.client.put(&self.item_path(id), body).await
    }

    /// Delete; the backend answers 204 with an empty body
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let _: Value = self.client.delete(&self.item_path(id)).await?;
        Ok(())
    }
}
