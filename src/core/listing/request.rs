//! Fetch status and last-wins request bookkeeping.

use std::fmt;

/// Lifecycle of a view's remote data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Identifier of one issued fetch, strictly increasing per tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out request ids and remembers which one is authoritative.
///
/// Only the most recently issued id is current; results carrying any older
/// id are stale regardless of when they arrive.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: Option<RequestId>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new id, superseding every earlier one.
    pub fn issue(&mut self) -> RequestId {
        let next = self.latest.map_or(1, |RequestId(n)| n + 1);
        let id = RequestId(next);
        self.latest = Some(id);
        id
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        self.latest == Some(id)
    }
}
