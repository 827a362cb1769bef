//! Crate-level test suites.
//!
//! - `common`: shared fixtures and fake data sources
//! - `unit`: HTTP client and controller tests (wiremock, tokio)
//! - `property`: invariants of the filter and pager (proptest)

mod property;
mod unit;
