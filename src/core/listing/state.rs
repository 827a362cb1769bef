//! View state for a fetched, filtered, paginated list.
//!
//! All mutation goes through [`ViewState::begin_fetch`], [`ViewState::apply`]
//! and [`ViewState::set_query`]. Visible items are derived on demand from the
//! raw items and the query, so the two can never drift apart.

use tracing::debug;

use super::filter::{filter_items, Searchable};
use super::pagination::Pagination;
use super::request::{FetchStatus, RequestId, RequestTracker};
use crate::core::api::{FetchError, PagedResult};

/// Handle for one in-flight page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub request: RequestId,
    pub page: u32,
}

/// Completion of a fetch, delivered back to the owning view.
#[derive(Debug)]
pub enum ViewEvent<T> {
    FetchSucceeded {
        ticket: FetchTicket,
        result: PagedResult<T>,
    },
    FetchFailed {
        ticket: FetchTicket,
        error: FetchError,
    },
}

impl<T> ViewEvent<T> {
    pub fn ticket(&self) -> FetchTicket {
        match self {
            ViewEvent::FetchSucceeded { ticket, .. } | ViewEvent::FetchFailed { ticket, .. } => *ticket,
        }
    }
}

pub struct ViewState<T> {
    raw_items: Vec<T>,
    query: String,
    pagination: Pagination,
    total_count: u64,
    status: FetchStatus,
    error_message: Option<String>,
    requests: RequestTracker,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            raw_items: Vec::new(),
            query: String::new(),
            pagination: Pagination::default(),
            total_count: 0,
            status: FetchStatus::Idle,
            error_message: None,
            requests: RequestTracker::new(),
        }
    }
}

impl<T> ViewState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Loading` for `page` and return the ticket the result must carry.
    ///
    /// Any ticket issued earlier becomes stale. The pagination keeps
    /// describing the loaded items until a result for the ticket arrives.
    pub fn begin_fetch(&mut self, page: u32) -> FetchTicket {
        self.status = FetchStatus::Loading;
        self.error_message = None;
        FetchTicket {
            request: self.requests.issue(),
            page: self.pagination.clamp(page),
        }
    }

    /// Apply a fetch completion. Returns `false` when the event was stale
    /// and therefore discarded.
    pub fn apply(&mut self, event: ViewEvent<T>) -> bool {
        let ticket = event.ticket();
        if !self.requests.is_current(ticket.request) {
            debug!(
                request = %ticket.request,
                page = ticket.page,
                "Discarding stale fetch result"
            );
            return false;
        }

        match event {
            ViewEvent::FetchSucceeded { result, .. } => {
                self.pagination = Pagination::new(result.page, result.total_pages);
                self.total_count = result.total_count;
                self.raw_items = result.items;
                self.status = FetchStatus::Loaded;
                self.error_message = None;
            }
            ViewEvent::FetchFailed { error, .. } => {
                debug!(kind = error.kind(), page = ticket.page, "Fetch failed: {error}");
                self.status = FetchStatus::Error;
                self.error_message = Some(error.to_string());
            }
        }
        true
    }

    /// Replace the search query. Never triggers a fetch.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn raw_items(&self) -> &[T] {
        &self.raw_items
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Page and total of the items currently held.
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn page(&self) -> u32 {
        self.pagination.page()
    }

    pub fn total_pages(&self) -> u32 {
        self.pagination.total_pages()
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

impl<T: Searchable> ViewState<T> {
    /// Raw items matching the current query, in their original order.
    pub fn visible_items(&self) -> Vec<&T> {
        filter_items(&self.raw_items, &self.query)
    }
}
