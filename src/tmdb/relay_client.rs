use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::client::{read_json, FetchError, MovieSource};
use super::request::UpstreamRequest;
use crate::movie::{MovieDetail, MovieList, MovieRecord};

/// Fetches through the relay, so the caller never sees the TMDB credential.
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: reqwest::Client,
    relay_url: String,
}

impl RelayClient {
    pub fn new(relay_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            relay_url: relay_url.to_string(),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, request: &UpstreamRequest) -> Result<T, FetchError> {
        debug!(request = %request, relay = %self.relay_url, "relay request");
        let response = self
            .client
            .get(&self.relay_url)
            .query(&request.relay_params())
            .send()
            .await?;
        read_json(response).await
    }
}

#[async_trait]
impl MovieSource for RelayClient {
    async fn trending(&self) -> Result<Vec<MovieRecord>, FetchError> {
        let list: MovieList = self.fetch(&UpstreamRequest::Trending).await?;
        Ok(list.results)
    }

    async fn search(&self, query: &str) -> Result<Vec<MovieRecord>, FetchError> {
        let list: MovieList = self
            .fetch(&UpstreamRequest::Search(query.to_string()))
            .await?;
        Ok(list.results)
    }

    async fn movie_detail(&self, id: u64) -> Result<MovieDetail, FetchError> {
        self.fetch(&UpstreamRequest::Movie(id.to_string())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::server::{build_router, AppState};
    use crate::dashboard::Dashboard;
    use crate::tmdb::testutil::{fake_tmdb, spawn_upstream, FAKE_API_KEY};
    use axum::{routing::get, Json, Router};
    use serde_json::json;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    async fn spawn_relay(api_key: &str) -> String {
        let upstream = spawn_upstream(fake_tmdb()).await;
        let mut config = Config::default();
        config.tmdb.api_key = api_key.to_string();
        config.tmdb.base_url = upstream;
        let relay = spawn_upstream(build_router(AppState::new(config))).await;
        format!("{}/tmdb-proxy", relay)
    }

    #[tokio::test]
    async fn test_fetch_through_relay() {
        let client = RelayClient::new(&spawn_relay(FAKE_API_KEY).await);

        let trending = client.trending().await.unwrap();
        assert_eq!(trending.len(), 14);

        let found = client.search("heat").await.unwrap();
        assert_eq!(found[0].title, "heat");

        let detail = client.movie_detail(123).await.unwrap();
        assert_eq!(detail.movie.id, 123);
        assert_eq!(detail.budget_label(), Some("$63.0M".to_string()));
    }

    #[tokio::test]
    async fn test_relay_error_status() {
        let client = RelayClient::new(&spawn_relay(FAKE_API_KEY).await);
        match client.search("").await {
            Err(FetchError::Status(400)) => {}
            other => panic!("expected 400, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_upstream_error_body_is_a_failure() {
        // The relay answers 200 with TMDB's error payload, which carries
        // no results.
        let client = RelayClient::new(&spawn_relay("wrong").await);
        assert!(matches!(client.trending().await, Err(FetchError::Decode(_))));
        assert!(matches!(client.search("heat").await, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_dashboard_keeps_list_on_upstream_error() {
        let failing = Arc::new(AtomicBool::new(false));
        let flag = failing.clone();
        let router = Router::new().route(
            "/tmdb-proxy",
            get(move || {
                let flag = flag.clone();
                async move {
                    if flag.load(Ordering::SeqCst) {
                        Json(json!({ "status_code": 7, "status_message": "Invalid API key", "success": false }))
                    } else {
                        Json(json!({
                            "page": 1,
                            "results": [{ "id": 1, "title": "Heat", "vote_average": 8.3, "vote_count": 7000 }]
                        }))
                    }
                }
            }),
        );
        let relay = spawn_upstream(router).await;
        let mut dashboard = Dashboard::new(RelayClient::new(&format!("{}/tmdb-proxy", relay)));

        dashboard.load_trending().await;
        dashboard.search("heat").await;
        assert_eq!(dashboard.trending().len(), 1);

        failing.store(true, Ordering::SeqCst);
        dashboard.load_trending().await;
        dashboard.search("heat").await;

        assert_eq!(dashboard.trending().len(), 1);
        assert_eq!(dashboard.search_results()[0].title, "Heat");
        assert!(!dashboard.is_loading());
    }
}
