//! Wire and domain types for the demo APIs.
//!
//! `reqres.in` uses snake_case fields wrapped in a `{ data }` envelope,
//! `jsonplaceholder` returns bare camelCase arrays.

use serde::{Deserialize, Serialize};

/// A directory user (reqres.in).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "avatar")]
    pub avatar_url: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A post (jsonplaceholder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub author_id: u64,
}

/// One page of a collection, produced fresh per fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    /// 1-based page number this result belongs to.
    pub page: u32,
    pub total_pages: u32,
    pub total_count: u64,
}

impl<T> PagedResult<T> {
    /// Wrap an unpaged list as a single page.
    pub fn single(items: Vec<T>) -> Self {
        let total_count = items.len() as u64;
        Self {
            items,
            page: 1,
            total_pages: 1,
            total_count,
        }
    }
}

/// `{ page, per_page, total, total_pages, data }` envelope of a paged endpoint.
#[derive(Debug, Deserialize)]
pub struct PageEnvelope<T> {
    pub page: u32,
    #[allow(dead_code)]
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub data: Vec<T>,
}

impl<T> From<PageEnvelope<T>> for PagedResult<T> {
    fn from(envelope: PageEnvelope<T>) -> Self {
        Self {
            items: envelope.data,
            page: envelope.page.max(1),
            total_pages: envelope.total_pages,
            total_count: envelope.total,
        }
    }
}

/// `{ data }` envelope of a single-resource endpoint.
#[derive(Debug, Deserialize)]
pub struct ResourceEnvelope<T> {
    pub data: T,
}
