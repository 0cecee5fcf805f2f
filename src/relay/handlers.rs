use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use super::types::{RelayError, RelayQuery};
use crate::server::AppState;
use crate::tmdb::UpstreamRequest;

/// Forward one request to TMDB and hand back its JSON body unchanged.
pub async fn relay(
    State(state): State<AppState>,
    query: Option<Query<Vec<(String, String)>>>,
) -> Result<Response, RelayError> {
    let Query(pairs) = query.ok_or(RelayError::InvalidRequest)?;
    let params = RelayQuery::from_pairs(pairs);

    let request = UpstreamRequest::from_params(
        params.endpoint.as_deref(),
        params.query.as_deref(),
        params.movie_id.as_deref(),
    )
    .ok_or(RelayError::InvalidRequest)?;

    info!(request = %request, "Relaying to TMDB");

    let body = state.tmdb.forward(&request).await.map_err(|e| {
        error!("Relay request {} failed: {}", request, e);
        RelayError::from(e)
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
