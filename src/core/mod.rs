pub mod api;
pub mod listing;
pub mod logging;
pub mod profile;
pub mod session;
