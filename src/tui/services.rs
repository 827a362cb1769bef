use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::core::api::{
    ApiClient, FlatEndpoint, PageSource, PagedEndpoint, Post, ResourceEndpoint, ResourceSource, User,
};

use super::events::AppEvent;

/// Centralized handle to the remote data sources.
///
/// Built once at startup; views clone the `Arc`s they need when they
/// (re)create their controllers.
pub struct Services {
    pub users: Arc<dyn PageSource<User>>,
    pub posts: Arc<dyn PageSource<Post>>,
    pub profile: Arc<dyn ResourceSource<User>>,
    pub event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl Services {
    pub fn new(
        users: Arc<dyn PageSource<User>>,
        posts: Arc<dyn PageSource<Post>>,
        profile: Arc<dyn ResourceSource<User>>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            users,
            posts,
            profile,
            event_tx,
        }
    }

    /// Build sources from config. Invalid endpoint URLs are fatal.
    pub fn init(
        config: &AppConfig,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let client = ApiClient::new();
        let users_endpoint = config.api.users_endpoint()?;
        let posts_endpoint = config.api.posts_endpoint()?;
        log::info!(
            "Services initialized: users={} posts={}",
            users_endpoint.base_url(),
            posts_endpoint.base_url()
        );

        Ok(Self::new(
            Arc::new(PagedEndpoint::new(client.clone(), users_endpoint.clone())),
            Arc::new(FlatEndpoint::new(
                client.clone(),
                posts_endpoint,
                config.api.posts_limit,
            )),
            Arc::new(ResourceEndpoint::new(
                client,
                users_endpoint,
                config.api.profile_user_id,
            )),
            event_tx,
        ))
    }
}
