//! List-fetch-filter-paginate core shared by the Users and Posts views.

pub mod controller;
pub mod filter;
pub mod pagination;
pub mod request;
pub mod state;

pub use controller::ListController;
pub use filter::{filter_items, Searchable};
pub use pagination::Pagination;
pub use request::{FetchStatus, RequestId, RequestTracker};
pub use state::{FetchTicket, ViewEvent, ViewState};
