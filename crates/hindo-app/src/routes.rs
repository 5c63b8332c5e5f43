use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/words", get(words))
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

#[derive(Deserialize)]
pub struct WordsQuery {
    #[serde(default)]
    search: String,
    /// The page starts with highlighting on
    #[serde(default = "default_highlight")]
    highlight: bool,
}

fn default_highlight() -> bool {
    true
}

#[derive(Serialize)]
pub struct WordRow {
    rank: u32,
    word: String,
    highlight: bool,
}

#[derive(Serialize)]
pub struct WordsResponse {
    rows: Vec<WordRow>,
    count: usize,
    summary: String,
}

/// Invoked on every search-text or toggle change from the page
async fn words(
    State(state): State<AppState>,
    Query(query): Query<WordsQuery>,
) -> Json<WordsResponse> {
    let view = hindo_core::filter(&state.table, &query.search, query.highlight);

    let rows = view
        .rows
        .iter()
        .map(|record| WordRow {
            rank: record.rank,
            word: record.word.clone(),
            highlight: view.highlight(record),
        })
        .collect();

    Json(WordsResponse {
        rows,
        count: view.match_count,
        summary: view.summary(),
    })
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "words": state.table.len(),
    }))
}
