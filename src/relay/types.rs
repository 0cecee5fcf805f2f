use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::tmdb::FetchError;

/// Query string accepted by the relay.
#[derive(Debug, Clone, Default)]
pub struct RelayQuery {
    pub endpoint: Option<String>,
    pub query: Option<String>,
    pub movie_id: Option<String>,
}

impl RelayQuery {
    /// Collect the relay parameters from raw pairs. When a key repeats,
    /// the first value wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = RelayQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "endpoint" => &mut params.endpoint,
                "query" => &mut params.query,
                "movieId" => &mut params.movie_id,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Invalid endpoint or missing parameters")]
    InvalidRequest,
    #[error("{0}")]
    Upstream(#[from] FetchError),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidRequest => StatusCode::BAD_REQUEST,
            RelayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_first_value_wins() {
        let params = RelayQuery::from_pairs(pairs(&[
            ("endpoint", "movie"),
            ("movieId", "42"),
            ("endpoint", "search"),
            ("movieId", "7"),
            ("other", "x"),
        ]));
        assert_eq!(params.endpoint.as_deref(), Some("movie"));
        assert_eq!(params.movie_id.as_deref(), Some("42"));
        assert_eq!(params.query, None);
    }
}
