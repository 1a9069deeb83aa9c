//! Drives the roster page state against a mocked API.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use realworld_roster::roster::view::{DEFAULT_AVATAR, MISSING_DATE};
use realworld_roster::roster::{HttpRosterSource, RosterView, ViewState};

async fn serve_roster(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/roster"))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn view_for(server: &MockServer) -> RosterView<HttpRosterSource> {
    RosterView::new(HttpRosterSource::new(&format!("{}/api", server.uri())))
}

#[tokio::test]
async fn loaded_rows_are_displayed() {
    let server = serve_roster(ResponseTemplate::new(200).set_body_json(json!([
        {
            "id": 1,
            "username": "alice",
            "bio": null,
            "image": null,
            "articleCount": 0,
            "favoriteCount": 0,
            "firstArticleDate": null
        },
        {
            "id": 2,
            "username": "bob",
            "bio": "writes things",
            "image": "https://example.com/bob.png",
            "articleCount": 4,
            "favoriteCount": 9,
            "firstArticleDate": "2023-11-30T18:45:00.000Z"
        }
    ])))
    .await;

    let view = view_for(&server);
    view.activate().await;

    assert!(!view.is_loading());
    assert_eq!(view.error(), None);
    let rows = view.display_rows();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].username, "alice");
    assert_eq!(rows[0].avatar, DEFAULT_AVATAR);
    assert_eq!(rows[0].article_count, 0);
    assert_eq!(rows[0].first_article, MISSING_DATE);

    assert_eq!(rows[1].avatar, "https://example.com/bob.png");
    assert_eq!(rows[1].profile_link, "/profile/bob");
    assert_eq!(rows[1].article_count, 4);
    assert_eq!(rows[1].favorite_count, 9);
    assert_eq!(rows[1].first_article, "Nov 30, 2023");
}

#[tokio::test]
async fn empty_roster_loads_without_rows() {
    let server = serve_roster(ResponseTemplate::new(200).set_body_json(json!([]))).await;

    let view = view_for(&server);
    view.activate().await;

    assert_eq!(view.state(), ViewState::Loaded(Vec::new()));
    assert!(!view.is_loading());
}

#[tokio::test]
async fn server_error_leaves_view_failed_and_not_loading() {
    let server = serve_roster(
        ResponseTemplate::new(500).set_body_json(json!({ "errors": ["internal server error"] })),
    )
    .await;

    let view = view_for(&server);
    view.activate().await;

    assert!(!view.is_loading());
    assert!(view.rows().is_empty());
    assert_eq!(
        view.error().as_deref(),
        Some("roster request failed with status 500")
    );
}

#[tokio::test]
async fn malformed_payload_is_a_failure() {
    let server = serve_roster(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    let view = view_for(&server);
    view.activate().await;

    assert!(!view.is_loading());
    assert!(view.rows().is_empty());
    assert!(view.error().is_some());
}

#[tokio::test]
async fn unreachable_api_is_a_failure() {
    let view = RosterView::new(HttpRosterSource::new("http://127.0.0.1:1/api"));
    view.activate().await;

    assert!(!view.is_loading());
    assert!(view.rows().is_empty());
    assert!(view.error().is_some());
}
