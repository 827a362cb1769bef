//! Test Fixtures
//!
//! Builders for users and posts, wire-shaped JSON bodies, and page sources
//! whose completions the test controls.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::{mpsc, Notify};

use crate::core::api::{FetchError, PageSource, PagedResult, Post, ResourceSource, Result, User};
use crate::tui::events::AppEvent;
use crate::tui::services::Services;

// =============================================================================
// Domain Builders
// =============================================================================

pub fn user(id: u64, first_name: &str, last_name: &str) -> User {
    User {
        id,
        email: format!(
            "{}.{}@reqres.in",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        avatar_url: format!("https://reqres.in/img/faces/{id}-image.jpg"),
    }
}

pub fn post(id: u64, title: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        body: format!("body of post {id}"),
        author_id: 1,
    }
}

/// Posts whose titles are drawn from `titles`, ids starting at 1.
pub fn posts_titled(titles: &[&str]) -> Vec<Post> {
    titles
        .iter()
        .enumerate()
        .map(|(i, t)| post(i as u64 + 1, t))
        .collect()
}

// =============================================================================
// Wire Bodies
// =============================================================================

/// reqres-style paged envelope around `users`.
pub fn users_page_body(page: u32, total_pages: u32, users: &[User]) -> Value {
    json!({
        "page": page,
        "per_page": 6,
        "total": total_pages * 6,
        "total_pages": total_pages,
        "data": users,
    })
}

/// jsonplaceholder-style bare array with `count` posts.
pub fn posts_array_body(count: u64) -> Value {
    let posts: Vec<Value> = (1..=count)
        .map(|id| {
            json!({
                "userId": (id - 1) / 10 + 1,
                "id": id,
                "title": format!("post title {id}"),
                "body": format!("post body {id}"),
            })
        })
        .collect();
    Value::Array(posts)
}

// =============================================================================
// Fake Page Sources
// =============================================================================

/// Serves a fixed set of pages immediately. Unknown pages fail with 404.
pub struct StaticPages<T> {
    pages: HashMap<u32, PagedResult<T>>,
}

impl<T: Clone> StaticPages<T> {
    pub fn new(pages: impl IntoIterator<Item = PagedResult<T>>) -> Self {
        Self {
            pages: pages.into_iter().map(|p| (p.page, p)).collect(),
        }
    }
}

#[async_trait]
impl<T: Clone + Send + Sync + 'static> PageSource<T> for StaticPages<T> {
    async fn fetch_page(&self, page: u32) -> Result<PagedResult<T>> {
        self.pages
            .get(&page)
            .cloned()
            .ok_or_else(|| FetchError::http(404, format!("http://fake/?page={page}")))
    }
}

/// Holds each page's response until the test calls [`GatedPages::release`].
pub struct GatedPages<T> {
    inner: StaticPages<T>,
    gates: HashMap<u32, Arc<Notify>>,
}

impl<T: Clone> GatedPages<T> {
    pub fn new(pages: impl IntoIterator<Item = PagedResult<T>>) -> Self {
        let inner = StaticPages::new(pages);
        let gates = inner
            .pages
            .keys()
            .map(|&page| (page, Arc::new(Notify::new())))
            .collect();
        Self { inner, gates }
    }

    /// Let the pending (or next) fetch of `page` complete.
    pub fn release(&self, page: u32) {
        if let Some(gate) = self.gates.get(&page) {
            gate.notify_one();
        }
    }
}

#[async_trait]
impl<T: Clone + Send + Sync + 'static> PageSource<T> for GatedPages<T> {
    async fn fetch_page(&self, page: u32) -> Result<PagedResult<T>> {
        if let Some(gate) = self.gates.get(&page) {
            gate.notified().await;
        }
        self.inner.fetch_page(page).await
    }
}

/// One page of `items` out of `total_pages`.
pub fn page_of<T>(page: u32, total_pages: u32, items: Vec<T>) -> PagedResult<T> {
    PagedResult {
        total_count: u64::from(total_pages) * items.len() as u64,
        items,
        page,
        total_pages,
    }
}

/// Profile source that always answers with the same user, or 404 when empty.
pub struct FixedProfile(pub Option<User>);

#[async_trait]
impl ResourceSource<User> for FixedProfile {
    async fn fetch(&self) -> Result<User> {
        self.0
            .clone()
            .ok_or_else(|| FetchError::http(404, "http://fake/users/2"))
    }
}

// =============================================================================
// Services
// =============================================================================

/// Services backed by single-page in-memory sources.
///
/// The receiver is returned so tests can observe notifications.
pub fn test_services(
    users: Vec<User>,
    posts: Vec<Post>,
    profile: Option<User>,
) -> (Services, mpsc::UnboundedReceiver<AppEvent>) {
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let services = Services::new(
        Arc::new(StaticPages::new(vec![page_of(1, 1, users)])),
        Arc::new(StaticPages::new(vec![PagedResult::single(posts)])),
        Arc::new(FixedProfile(profile)),
        event_tx,
    );
    (services, event_rx)
}
