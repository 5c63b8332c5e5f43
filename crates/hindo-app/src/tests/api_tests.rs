use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use hindo_core::VocabularyTable;
use serde_json::Value;
use tower::ServiceExt;

use crate::routes::create_router;
use crate::state::AppState;

fn test_router() -> Router {
    let table = VocabularyTable::from_words(vec![
        ("の".to_string(), false),
        ("日本".to_string(), true),
        ("食べる".to_string(), false),
    ]);

    create_router(AppState::new(table))
}

async fn get_json(router: Router, uri: &str) -> Value {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("request failed");

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("parse json")
}

#[tokio::test]
async fn words_defaults_to_full_table_with_highlighting() {
    let data = get_json(test_router(), "/api/words").await;

    assert_eq!(data["count"], 3);
    assert_eq!(data["summary"], "Showing 3 words");

    let rows = data["rows"].as_array().expect("rows array");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows[0]["word"], "の");
    assert_eq!(rows[0]["highlight"], false);
    assert_eq!(rows[1]["word"], "日本");
    assert_eq!(rows[1]["highlight"], true);
}

#[tokio::test]
async fn search_filters_rows_and_count() {
    // search=る
    let data = get_json(test_router(), "/api/words?search=%E3%82%8B").await;

    assert_eq!(data["count"], 1);
    assert_eq!(data["summary"], "Showing 1 words");

    let rows = data["rows"].as_array().expect("rows array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["rank"], 3);
    assert_eq!(rows[0]["word"], "食べる");
    assert_eq!(rows[0]["highlight"], false);
}

#[tokio::test]
async fn highlight_off_forces_every_flag_false() {
    let data = get_json(test_router(), "/api/words?highlight=false").await;

    assert_eq!(data["count"], 3);
    let rows = data["rows"].as_array().expect("rows array");
    assert!(rows.iter().all(|row| row["highlight"] == false));
}

#[tokio::test]
async fn health_reports_table_size() {
    let data = get_json(test_router(), "/api/health").await;

    assert_eq!(data["status"], "ok");
    assert_eq!(data["words"], 3);
}

#[tokio::test]
async fn index_serves_the_grid_page() {
    let response = test_router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .expect("request failed");

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let page = std::str::from_utf8(&body).expect("utf-8 page");
    assert!(page.contains("Japanese Word Frequency"));
}
