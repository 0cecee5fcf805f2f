use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::request::UpstreamRequest;
use crate::movie::{MovieDetail, MovieList, MovieRecord};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Upstream returned status {0}")]
    Status(u16),
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Where the dashboard gets its movies from.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// This week's trending titles, in upstream rank order.
    async fn trending(&self) -> Result<Vec<MovieRecord>, FetchError>;
    async fn search(&self, query: &str) -> Result<Vec<MovieRecord>, FetchError>;
    async fn movie_detail(&self, id: u64) -> Result<MovieDetail, FetchError>;
}

#[async_trait]
impl<T: MovieSource + ?Sized> MovieSource for Box<T> {
    async fn trending(&self) -> Result<Vec<MovieRecord>, FetchError> {
        (**self).trending().await
    }

    async fn search(&self, query: &str) -> Result<Vec<MovieRecord>, FetchError> {
        (**self).search(query).await
    }

    async fn movie_detail(&self, id: u64) -> Result<MovieDetail, FetchError> {
        (**self).movie_detail(id).await
    }
}

/// Talks to TMDB directly, holding the credential itself.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Issue the request and return the upstream body untouched, whatever
    /// its status code. The body must be JSON.
    pub async fn forward(&self, request: &UpstreamRequest) -> Result<Vec<u8>, FetchError> {
        let response = self.send(request).await?;
        let body = response.bytes().await?;
        serde_json::from_slice::<serde::de::IgnoredAny>(&body)?;
        Ok(body.to_vec())
    }

    async fn send(&self, request: &UpstreamRequest) -> Result<reqwest::Response, FetchError> {
        debug!(request = %request, "TMDB request");
        let url = request.upstream_url(&self.base_url, &self.api_key);
        Ok(self.client.get(&url).send().await?)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: &UpstreamRequest) -> Result<T, FetchError> {
        let response = self.send(request).await?;
        read_json(response).await
    }
}

#[async_trait]
impl MovieSource for TmdbClient {
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

/// Decode a JSON body, treating any non-2xx status as a failure.
pub(crate) async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FetchError> {
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
