//! Drives a [`ViewState`] from a [`PageSource`] without blocking the UI loop.
//!
//! Fetches run as detached tokio tasks and report back over a channel that
//! the owning view drains with [`ListController::poll`] on every tick.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::filter::Searchable;
use super::request::FetchStatus;
use super::state::{FetchTicket, ViewEvent, ViewState};
use crate::core::api::PageSource;

pub struct ListController<T> {
    state: ViewState<T>,
    source: Arc<dyn PageSource<T>>,
    event_tx: mpsc::UnboundedSender<ViewEvent<T>>,
    event_rx: mpsc::UnboundedReceiver<ViewEvent<T>>,
}

impl<T: Send + 'static> ListController<T> {
    pub fn new(source: Arc<dyn PageSource<T>>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            state: ViewState::new(),
            source,
            event_tx,
            event_rx,
        }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    /// Initial fetch of page 1. Does nothing once data has been requested.
    pub fn mount(&mut self) -> bool {
        if self.state.status() != FetchStatus::Idle {
            return false;
        }
        self.spawn_fetch(1);
        true
    }

    /// Re-fetch the current page.
    pub fn refresh(&mut self) {
        self.spawn_fetch(self.state.page());
    }

    pub fn change_page(&mut self, page: u32) {
        self.spawn_fetch(page);
    }

    /// Go one page back. Returns `false` at the first page.
    pub fn previous(&mut self) -> bool {
        let pagination = self.state.pagination();
        if !pagination.has_previous() {
            return false;
        }
        self.change_page(pagination.previous().page());
        true
    }

    /// Go one page forward. Returns `false` at the last page.
    pub fn next(&mut self) -> bool {
        let pagination = self.state.pagination();
        if !pagination.has_next() {
            return false;
        }
        self.change_page(pagination.next().page());
        true
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.set_query(query);
    }

    /// Apply every completed fetch. Returns how many were current.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            if self.state.apply(event) {
                applied += 1;
            }
        }
        applied
    }

    fn spawn_fetch(&mut self, page: u32) {
        let ticket = self.state.begin_fetch(page);
        let source = Arc::clone(&self.source);
        let tx = self.event_tx.clone();
        tracing::debug!(request = %ticket.request, page = ticket.page, "Spawning page fetch");
        tokio::spawn(async move {
            let event = fetch_event(source.as_ref(), ticket).await;
            let _ = tx.send(event);
        });
    }
}

impl<T: Searchable> ListController<T> {
    pub fn visible_items(&self) -> Vec<&T> {
        self.state.visible_items()
    }
}

async fn fetch_event<T>(source: &dyn PageSource<T>, ticket: FetchTicket) -> ViewEvent<T> {
    match source.fetch_page(ticket.page).await {
        Ok(result) => ViewEvent::FetchSucceeded { ticket, result },
        Err(error) => ViewEvent::FetchFailed { ticket, error },
    }
}
