//! Data sources consumed by the view-state controllers.
//!
//! Controllers only see these traits, so tests can substitute sources that
//! resolve in a chosen order.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::client::{ApiClient, EndpointConfig};
use super::error::Result;
use super::models::PagedResult;

/// Anything that can produce one page of `T`.
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<PagedResult<T>>;
}

/// Anything that can produce a single `T`.
#[async_trait]
pub trait ResourceSource<T>: Send + Sync {
    async fn fetch(&self) -> Result<T>;
}

/// A server-paged endpoint (`?page=n` with a paged envelope).
pub struct PagedEndpoint<T> {
    client: ApiClient,
    endpoint: EndpointConfig,
    _item: PhantomData<fn() -> T>,
}

impl<T> PagedEndpoint<T> {
    pub fn new(client: ApiClient, endpoint: EndpointConfig) -> Self {
        Self {
            client,
            endpoint,
            _item: PhantomData,
        }
    }
}

#[async_trait]
impl<T> PageSource<T> for PagedEndpoint<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch_page(&self, page: u32) -> Result<PagedResult<T>> {
        self.client.fetch_page(&self.endpoint, page).await
    }
}

/// A bare-array endpoint truncated to a fixed prefix and served as one page.
pub struct FlatEndpoint<T> {
    client: ApiClient,
    endpoint: EndpointConfig,
    limit: usize,
    _item: PhantomData<fn() -> T>,
}

impl<T> FlatEndpoint<T> {
    pub fn new(client: ApiClient, endpoint: EndpointConfig, limit: usize) -> Self {
        Self {
            client,
            endpoint,
            limit,
            _item: PhantomData,
        }
    }
}

#[async_trait]
impl<T> PageSource<T> for FlatEndpoint<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch_page(&self, _page: u32) -> Result<PagedResult<T>> {
        let mut items: Vec<T> = self.client.fetch_all(&self.endpoint).await?;
        items.truncate(self.limit);
        Ok(PagedResult::single(items))
    }
}

/// `GET {base}/{id}` for one fixed id.
pub struct ResourceEndpoint<T> {
    client: ApiClient,
    endpoint: EndpointConfig,
    id: u64,
    _item: PhantomData<fn() -> T>,
}

impl<T> ResourceEndpoint<T> {
    pub fn new(client: ApiClient, endpoint: EndpointConfig, id: u64) -> Self {
        Self {
            client,
            endpoint,
            id,
            _item: PhantomData,
        }
    }
}

#[async_trait]
impl<T> ResourceSource<T> for ResourceEndpoint<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch(&self) -> Result<T> {
        self.client.fetch_one(&self.endpoint, self.id).await
    }
}
