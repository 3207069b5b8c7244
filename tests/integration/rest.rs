//! End-to-end coverage of the typed resource layer.

use linkhaven_rest::{
    CreateBookmark, CreateHighlight, CreateList, RestClient, SearchBookmarksQuery, TagRef,
    UpdateBookmark,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client(server: &MockServer) -> RestClient {
    RestClient::new(server.uri(), "test-key").unwrap()
}

#[tokio::test]
async fn bookmark_lifecycle() {
    let server = MockServer::start().await;
    let bookmark = json!({
        "id": "b1",
        "url": "https://example.com/article",
        "title": "Worth keeping",
        "createdAt": "2026-01-01T00:00:00Z",
        "updatedAt": "2026-01-01T00:00:00Z",
    });

    Mock::given(method("POST"))
        .and(path("/api/v1/bookmarks"))
        .and(body_json(json!({
            "type": "link",
            "url": "https://example.com/article",
            "title": "Worth keeping",
            "tags": ["reading"],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": bookmark})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/bookmarks/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": bookmark})))
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/bookmarks/b1"))
        .and(body_json(json!({"favourited": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": bookmark})))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/bookmarks/b1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client(&server).await;

    let created = client
        .create_bookmark(
            CreateBookmark::link("https://example.com/article")
                .with_title("Worth keeping")
                .with_tags(["reading"]),
        )
        .await
        .unwrap();
    assert_eq!(created.id, "b1");

    let fetched = client.get_bookmark("b1").await.unwrap();
    assert_eq!(fetched.title.as_deref(), Some("Worth keeping"));

    let update = UpdateBookmark {
        favourited: Some(true),
        ..Default::default()
    };
    client.update_bookmark("b1", &update).await.unwrap();

    client.delete_bookmark("b1").await.unwrap();
}

#[tokio::test]
async fn search_and_tag_flow() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/bookmarks/search"))
        .and(query_param("q", "rust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "b1", "createdAt": "2026-01-01T00:00:00Z"}],
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/bookmarks/b1/tags"))
        .and(body_json(json!({"tags": [{"tagName": "rust"}]})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"attached": ["t1"]}})),
        )
        .mount(&server)
        .await;

    let client = client(&server).await;

    let results = client
        .search_bookmarks(&SearchBookmarksQuery::new("rust"))
        .await
        .unwrap();
    assert_eq!(results.items.len(), 1);

    let attached = client
        .add_bookmark_tags("b1", &[TagRef::by_name("rust")])
        .await
        .unwrap();
    assert_eq!(attached["attached"], json!(["t1"]));
}

#[tokio::test]
async fn list_membership_flow() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "l1", "name": "Reading", "icon": "book", "type": "manual", "public": false},
        })))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/lists/l1/bookmarks/b1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client(&server).await;
    let list = client
        .create_list(CreateList::new("Reading", "book"))
        .await
        .unwrap();
    client.add_bookmark_to_list(&list.id, "b1").await.unwrap();
}

#[tokio::test]
async fn highlight_and_user_flow() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/highlights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": "h1",
                "bookmarkId": "b1",
                "text": "the important part",
                "startOffset": 10,
                "endOffset": 28,
            },
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/me/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "totalBookmarks": 1,
                "totalLists": 1,
                "totalTags": 1,
                "totalHighlights": 1,
                "totalAssets": 0,
            },
        })))
        .mount(&server)
        .await;

    let client = client(&server).await;

    let highlight = client
        .create_highlight(CreateHighlight::new("b1", "the important part", 10, 28))
        .await
        .unwrap();
    assert_eq!(highlight.id, "h1");

    let stats = client.user_stats().await.unwrap();
    assert_eq!(stats.total_highlights, 1);
}

#[tokio::test]
async fn validation_failures_never_touch_the_network() {
    let server = MockServer::start().await;
    let client = client(&server).await;

    assert!(client
        .create_bookmark(CreateBookmark::link("not a url"))
        .await
        .unwrap_err()
        .is_validation());
    assert!(client.create_tag("bad/tag!").await.unwrap_err().is_validation());
    assert!(client
        .create_highlight(CreateHighlight::new("b1", "text", 9, 3))
        .await
        .unwrap_err()
        .is_validation());

    assert!(server.received_requests().await.unwrap().is_empty());
}
