//! API Client Unit Tests
//!
//! Exercises the HTTP client and endpoint sources against a local mock
//! server:
//! - Paged envelope decoding and the `page` query parameter
//! - The users-only `x-api-key` header
//! - Status, decode and transport error mapping
//! - Flat list truncation and single-resource fetches

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::core::api::{
    ApiClient, EndpointConfig, FetchError, FlatEndpoint, PageSource, PagedEndpoint, Post,
    ResourceEndpoint, ResourceSource, User,
};
use crate::core::listing::{FetchStatus, ListController};
use crate::tests::common::{posts_array_body, user, users_page_body};

fn endpoint(server: &MockServer, route: &str) -> EndpointConfig {
    EndpointConfig::new(&format!("{}{route}", server.uri())).expect("mock server url")
}

// =============================================================================
// Paged Fetch
// =============================================================================

#[tokio::test]
async fn test_fetch_page_decodes_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "per_page": 6,
            "total": 12,
            "total_pages": 2,
            "data": [{
                "id": 1,
                "email": "george.bluth@reqres.in",
                "first_name": "George",
                "last_name": "Bluth",
                "avatar": "https://reqres.in/img/faces/1-image.jpg"
            }]
        })))
        .mount(&server)
        .await;

    let result = ApiClient::new()
        .fetch_page::<User>(&endpoint(&server, "/api/users"), 1)
        .await
        .expect("page decodes");

    assert_eq!(result.page, 1);
    assert_eq!(result.total_pages, 2);
    assert_eq!(result.total_count, 12);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].full_name(), "George Bluth");
}

#[tokio::test]
async fn test_page_zero_is_requested_as_page_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_page_body(1, 1, &[])))
        .expect(1)
        .mount(&server)
        .await;

    let result = ApiClient::new()
        .fetch_page::<User>(&endpoint(&server, "/api/users"), 0)
        .await
        .expect("page decodes");
    assert_eq!(result.page, 1);
}

#[tokio::test]
async fn test_api_key_header_is_sent_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(header("x-api-key", "reqres-free-v1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(users_page_body(1, 1, &[user(1, "George", "Bluth")])),
        )
        .mount(&server)
        .await;

    let users = endpoint(&server, "/api/users").with_api_key("reqres-free-v1");
    let result = ApiClient::new().fetch_page::<User>(&users, 1).await;
    assert!(result.is_ok(), "header matcher should accept the request: {result:?}");

    // without the key the mock does not match and wiremock answers 404
    let bare = endpoint(&server, "/api/users");
    let err = ApiClient::new()
        .fetch_page::<User>(&bare, 1)
        .await
        .expect_err("unmatched request");
    assert_eq!(err.status(), Some(404));
}

// =============================================================================
// Error Mapping
// =============================================================================

#[tokio::test]
async fn test_non_success_status_maps_to_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = ApiClient::new()
        .fetch_page::<User>(&endpoint(&server, "/api/users"), 3)
        .await
        .expect_err("404 is an error");

    match err {
        FetchError::Http { status, ref url } => {
            assert_eq!(status, 404);
            assert!(url.contains("page=3"), "url should include the query: {url}");
        }
        other => panic!("expected Http, got {other:?}"),
    }
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_malformed_body_maps_to_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = ApiClient::new()
        .fetch_all::<Post>(&endpoint(&server, "/posts"))
        .await
        .expect_err("html is not a post list");
    assert_eq!(err.kind(), "decode");
}

#[tokio::test]
async fn test_unreachable_host_maps_to_network_error() {
    let endpoint = EndpointConfig::new("http://127.0.0.1:1/api/users").expect("valid url");
    let err = ApiClient::new()
        .fetch_page::<User>(&endpoint, 1)
        .await
        .expect_err("nothing listens on port 1");
    assert_eq!(err.kind(), "network");
    assert!(err.status().is_none());
}

// =============================================================================
// Endpoint Sources
// =============================================================================

#[tokio::test]
async fn test_flat_endpoint_truncates_to_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(posts_array_body(100)))
        .mount(&server)
        .await;

    let source = FlatEndpoint::<Post>::new(ApiClient::new(), endpoint(&server, "/posts"), 20);
    let result = source.fetch_page(1).await.expect("posts decode");

    assert_eq!(result.items.len(), 20);
    assert_eq!(result.items[0].id, 1);
    assert_eq!(result.items[19].id, 20);
    assert_eq!(result.total_count, 20);
    assert_eq!(result.total_pages, 1);
}

#[tokio::test]
async fn test_resource_endpoint_unwraps_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 2,
                "email": "janet.weaver@reqres.in",
                "first_name": "Janet",
                "last_name": "Weaver",
                "avatar": "https://reqres.in/img/faces/2-image.jpg"
            }
        })))
        .mount(&server)
        .await;

    // trailing slash on the base is tolerated
    let source =
        ResourceEndpoint::<User>::new(ApiClient::new(), endpoint(&server, "/api/users/"), 2);
    let user = source.fetch().await.expect("profile decodes");
    assert_eq!(user.full_name(), "Janet Weaver");
    assert_eq!(user.email, "janet.weaver@reqres.in");
}

// =============================================================================
// Controller over HTTP
// =============================================================================

async fn settle<T: Send + 'static>(list: &mut ListController<T>) {
    for _ in 0..200 {
        if list.poll() > 0 {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    panic!("fetch did not complete");
}

#[tokio::test]
async fn test_controller_loads_first_page_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(users_page_body(1, 2, &[user(1, "George", "Bluth")])),
        )
        .mount(&server)
        .await;

    let source: Arc<dyn PageSource<User>> = Arc::new(PagedEndpoint::new(
        ApiClient::new(),
        endpoint(&server, "/api/users"),
    ));
    let mut list = ListController::new(source);
    assert!(list.mount());
    assert_eq!(list.state().status(), FetchStatus::Loading);

    settle(&mut list).await;
    let state = list.state();
    assert_eq!(state.status(), FetchStatus::Loaded);
    assert_eq!(state.page(), 1);
    assert_eq!(state.total_pages(), 2);
    assert_eq!(state.raw_items().len(), 1);
    assert_eq!(list.visible_items().len(), 1);
}

#[tokio::test]
async fn test_controller_surfaces_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let source: Arc<dyn PageSource<User>> = Arc::new(PagedEndpoint::new(
        ApiClient::new(),
        endpoint(&server, "/api/users"),
    ));
    let mut list = ListController::new(source);
    list.mount();
    settle(&mut list).await;

    let state = list.state();
    assert_eq!(state.status(), FetchStatus::Error);
    assert!(state.error_message().is_some_and(|m| m.contains("404")));
    assert!(state.raw_items().is_empty());
}
