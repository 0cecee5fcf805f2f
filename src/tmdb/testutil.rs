use std::collections::HashMap;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

pub const FAKE_API_KEY: &str = "secret";

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A stand-in for the three TMDB endpoints.
pub fn fake_tmdb() -> Router {
    Router::new()
        .route("/trending/movie/week", get(trending))
        .route("/search/movie", get(search))
        .route("/movie/:id", get(movie))
}

fn authorized(params: &HashMap<String, String>) -> Result<(), Response> {
    if params.get("api_key").map(|k| k.as_str()) == Some(FAKE_API_KEY) {
        return Ok(());
    }
    let body = json!({
        "status_code": 7,
        "status_message": "Invalid API key: You must be granted a valid key.",
        "success": false
    });
    Err((StatusCode::UNAUTHORIZED, Json(body)).into_response())
}

async fn trending(Query(params): Query<HashMap<String, String>>) -> Response {
    if let Err(resp) = authorized(&params) {
        return resp;
    }
    let results: Vec<_> = (1..=14)
        .map(|i| {
            json!({
                "id": i,
                "title": format!("Trending {}", i),
                "vote_average": 6.0 + i as f64 / 10.0,
                "vote_count": i * 100,
                "release_date": "2024-03-01",
                "genre_ids": [28, 12],
                "poster_path": null
            })
        })
        .collect();
    Json(json!({ "page": 1, "results": results, "total_results": 14 })).into_response()
}

async fn search(Query(params): Query<HashMap<String, String>>) -> Response {
    if let Err(resp) = authorized(&params) {
        return resp;
    }
    let query = params.get("query").cloned().unwrap_or_default();
    let result = json!({
        "id": 78,
        "title": query,
        "vote_average": 7.9,
        "vote_count": 14000,
        "genre_ids": [878]
    });
    Json(json!({ "page": 1, "results": [result], "total_results": 1 })).into_response()
}

async fn movie(Path(id): Path<u64>, Query(params): Query<HashMap<String, String>>) -> Response {
    if let Err(resp) = authorized(&params) {
        return resp;
    }
    Json(json!({
        "id": id,
        "title": "The Matrix",
        "vote_average": 8.2,
        "vote_count": 26000,
        "release_date": "1999-03-31",
        "genres": [{ "id": 28, "name": "Action" }, { "id": 878, "name": "Science Fiction" }],
        "runtime": 136,
        "budget": 63000000,
        "revenue": 463517383
    }))
    .into_response()
}
