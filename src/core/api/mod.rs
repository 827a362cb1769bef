//! Remote collection fetching for the demo REST APIs.

pub mod client;
pub mod error;
pub mod models;
pub mod source;

pub use client::{ApiClient, EndpointConfig};
pub use error::{FetchError, Result};
pub use models::{PagedResult, Post, User};
pub use source::{FlatEndpoint, PageSource, PagedEndpoint, ResourceEndpoint, ResourceSource};
