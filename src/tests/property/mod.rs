//! Property-based tests
//!
//! Invariants checked with proptest across generated inputs:
//!
//! - `filter_props`: the search filter
//!   - Empty query keeps every item in order
//!   - Output is an order-preserving subset of the input
//!   - An item is kept exactly when a field contains the query, ignoring case
//!   - Query case does not change the result
//!
//! - `pagination_props`: the pager
//!   - Page always stays within `[1, max(total_pages, 1)]`
//!   - `next` then `previous` returns to the start away from the last page
//!   - Boundary flags agree with the page number
//!
//! By default proptest runs 256 cases per property; override with
//! `PROPTEST_CASES`.

mod filter_props;
mod pagination_props;
