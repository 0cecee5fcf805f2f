use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::config::Config;
use crate::tmdb::TmdbClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tmdb: Arc<TmdbClient>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let tmdb = TmdbClient::with_base_url(&config.tmdb.api_key, &config.tmdb.base_url);
        Self {
            config: Arc::new(config),
            tmdb: Arc::new(tmdb),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let relay = get(crate::relay::relay).post(crate::relay::relay);

    let mut router = Router::new()
        .route("/tmdb-proxy", relay.clone())
        .route("/functions/v1/tmdb-proxy", relay);

    if let Some(ref appdir) = state.config.appdir {
        router = router.fallback_service(ServeDir::new(appdir));
    }

    router
        .layer(axum::middleware::from_fn(crate::middleware::add_cors_headers))
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
