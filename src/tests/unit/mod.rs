//! Unit Tests
//!
//! - `api_client_tests`: request shape and error mapping against a wiremock
//!   server
//! - `controller_tests`: fetch ordering and paging through fake sources

mod api_client_tests;
mod controller_tests;
