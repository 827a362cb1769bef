//! List Controller Unit Tests
//!
//! Drives `ListController` with in-process sources to check:
//! - Mount only fetches from `Idle`
//! - Paging boundaries
//! - Last-requested-wins when completions arrive out of order
//! - Failures keep the previous items

use std::sync::Arc;
use std::time::Duration;

use crate::core::api::{PageSource, Post};
use crate::core::listing::{FetchStatus, ListController};
use crate::tests::common::{page_of, post, posts_titled, GatedPages, StaticPages};

/// Poll until a current completion is applied.
async fn settle<T: Send + 'static>(list: &mut ListController<T>) -> usize {
    for _ in 0..200 {
        let applied = list.poll();
        if applied > 0 {
            return applied;
        }
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    panic!("no fetch completed");
}

/// Give spawned fetches a chance to finish, then drain whatever arrived.
async fn drain<T: Send + 'static>(list: &mut ListController<T>) -> usize {
    let mut applied = 0;
    for _ in 0..20 {
        tokio::time::sleep(Duration::from_millis(2)).await;
        applied += list.poll();
    }
    applied
}

fn three_pages() -> Vec<crate::core::api::PagedResult<Post>> {
    vec![
        page_of(1, 3, vec![post(1, "page one")]),
        page_of(2, 3, vec![post(2, "page two")]),
        page_of(3, 3, vec![post(3, "page three")]),
    ]
}

// =============================================================================
// Mount and Refresh
// =============================================================================

#[tokio::test]
async fn test_mount_fetches_once() {
    let source: Arc<dyn PageSource<Post>> = Arc::new(StaticPages::new(three_pages()));
    let mut list = ListController::new(source);

    assert_eq!(list.state().status(), FetchStatus::Idle);
    assert!(list.mount());
    assert!(!list.mount(), "second mount while loading is a no-op");

    settle(&mut list).await;
    assert!(!list.mount(), "mount after load is a no-op");
    assert_eq!(list.state().raw_items()[0].title, "page one");
}

#[tokio::test]
async fn test_refresh_refetches_current_page() {
    let source: Arc<dyn PageSource<Post>> = Arc::new(StaticPages::new(three_pages()));
    let mut list = ListController::new(source);
    list.mount();
    settle(&mut list).await;

    assert!(list.next());
    settle(&mut list).await;
    assert_eq!(list.state().page(), 2);

    list.refresh();
    assert!(list.state().is_loading());
    settle(&mut list).await;
    assert_eq!(list.state().page(), 2);
    assert_eq!(list.state().raw_items()[0].title, "page two");
}

// =============================================================================
// Paging Boundaries
// =============================================================================

#[tokio::test]
async fn test_previous_and_next_respect_bounds() {
    let source: Arc<dyn PageSource<Post>> = Arc::new(StaticPages::new(three_pages()));
    let mut list = ListController::new(source);
    list.mount();
    settle(&mut list).await;

    assert!(!list.previous(), "no page before the first");

    assert!(list.next());
    settle(&mut list).await;
    assert!(list.next());
    settle(&mut list).await;
    assert_eq!(list.state().page(), 3);

    assert!(!list.next(), "no page after the last");
    assert_eq!(list.state().status(), FetchStatus::Loaded);
}

#[tokio::test]
async fn test_change_page_clamps_to_known_total() {
    let source: Arc<dyn PageSource<Post>> = Arc::new(StaticPages::new(three_pages()));
    let mut list = ListController::new(source);
    list.mount();
    settle(&mut list).await;

    list.change_page(99);
    settle(&mut list).await;
    assert_eq!(list.state().page(), 3);
}

// =============================================================================
// Ordering
// =============================================================================

#[tokio::test]
async fn test_last_requested_page_wins_when_completions_reorder() {
    let source = Arc::new(GatedPages::new(three_pages()));
    let mut list = ListController::new(source.clone() as Arc<dyn PageSource<Post>>);

    list.mount();
    source.release(1);
    settle(&mut list).await;

    // request page 2, then page 3; page 3 answers first
    list.change_page(2);
    list.change_page(3);
    source.release(3);
    assert_eq!(settle(&mut list).await, 1);
    assert_eq!(list.state().raw_items()[0].title, "page three");

    // the late page 2 answer is discarded
    source.release(2);
    assert_eq!(drain(&mut list).await, 0);
    assert_eq!(list.state().page(), 3);
    assert_eq!(list.state().status(), FetchStatus::Loaded);
    assert_eq!(list.state().raw_items()[0].title, "page three");
}

#[tokio::test]
async fn test_superseded_request_cannot_finish_loading() {
    let source = Arc::new(GatedPages::new(three_pages()));
    let mut list = ListController::new(source.clone() as Arc<dyn PageSource<Post>>);

    list.mount();
    source.release(1);
    settle(&mut list).await;

    list.change_page(2);
    list.change_page(3);
    // only the stale request completes
    source.release(2);
    assert_eq!(drain(&mut list).await, 0);
    assert!(list.state().is_loading());
    assert_eq!(list.state().raw_items()[0].title, "page one");

    source.release(3);
    settle(&mut list).await;
    assert_eq!(list.state().page(), 3);
}

// =============================================================================
// Failures and Search
// =============================================================================

#[tokio::test]
async fn test_failure_keeps_previous_items() {
    // only page 1 exists; page 2 answers 404
    let source: Arc<dyn PageSource<Post>> =
        Arc::new(StaticPages::new(vec![page_of(1, 2, vec![post(1, "kept")])]));
    let mut list = ListController::new(source);
    list.mount();
    settle(&mut list).await;

    assert!(list.next());
    settle(&mut list).await;

    let state = list.state();
    assert_eq!(state.status(), FetchStatus::Error);
    assert!(state.error_message().is_some());
    assert_eq!(state.raw_items().len(), 1);
    assert_eq!(state.raw_items()[0].title, "kept");
    assert_eq!(state.page(), 1, "pager stays on the page that is shown");

    // the pager still offers the failed page again
    assert!(!list.previous());
    assert!(list.next());
}

#[tokio::test]
async fn test_query_filters_loaded_items_without_fetching() {
    let titles = ["Foo bar", "baz", "qux"];
    let source: Arc<dyn PageSource<Post>> =
        Arc::new(StaticPages::new(vec![page_of(1, 1, posts_titled(&titles))]));
    let mut list = ListController::new(source);
    list.mount();
    settle(&mut list).await;

    list.set_query("foo");
    assert_eq!(list.state().status(), FetchStatus::Loaded);
    let visible = list.visible_items();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Foo bar");

    list.set_query("");
    assert_eq!(list.visible_items().len(), 3);
}
