//! View state of the dashboard: the trending list, search results, the
//! selected title and the loading flag.
//!
//! A failed fetch never clears what is already on screen. The error is
//! logged, the loading flag goes back down, and the previous data stays.

use tracing::{info, warn};

use crate::analytics::{Analytics, ChartOptions};
use crate::config::DashboardConfig;
use crate::movie::{MovieDetail, MovieRecord};
use crate::tmdb::MovieSource;

pub const DEFAULT_TRENDING_LIMIT: usize = 12;

pub struct Dashboard<S> {
    source: S,
    trending_limit: usize,
    chart_options: ChartOptions,
    trending: Vec<MovieRecord>,
    search_results: Vec<MovieRecord>,
    selected: Option<MovieDetail>,
    loading: bool,
}

impl<S: MovieSource> Dashboard<S> {
    pub fn new(source: S) -> Self {
        Self::with_options(source, DEFAULT_TRENDING_LIMIT, ChartOptions::default())
    }

    pub fn from_config(source: S, config: &DashboardConfig) -> Result<Self, crate::config::ConfigError> {
        Ok(Self::with_options(
            source,
            config.trending_limit,
            config.chart_options()?,
        ))
    }

    pub fn with_options(source: S, trending_limit: usize, chart_options: ChartOptions) -> Self {
        Self {
            source,
            trending_limit,
            chart_options,
            trending: Vec::new(),
            search_results: Vec::new(),
            selected: None,
            loading: false,
        }
    }

    /// Replace the trending list with the upstream's current top titles.
    pub async fn load_trending(&mut self) {
        self.loading = true;
        match self.source.trending().await {
            Ok(mut movies) => {
                movies.truncate(self.trending_limit);
                info!(count = movies.len(), "Loaded trending movies");
                self.trending = movies;
            }
            Err(e) => warn!("Error fetching trending movies: {}", e),
        }
        self.loading = false;
    }

    /// Search by title. A blank query does nothing.
    pub async fn search(&mut self, query: &str) {
        if query.trim().is_empty() {
            return;
        }

        self.loading = true;
        match self.source.search(query).await {
            Ok(movies) => {
                info!(query = %query, count = movies.len(), "Search finished");
                self.search_results = movies;
            }
            Err(e) => warn!("Error searching movies: {}", e),
        }
        self.loading = false;
    }

    /// Fetch full detail for one title and select it.
    pub async fn show_detail(&mut self, id: u64) {
        self.loading = true;
        match self.source.movie_detail(id).await {
            Ok(detail) => self.selected = Some(detail),
            Err(e) => warn!("Error fetching movie details for {}: {}", id, e),
        }
        self.loading = false;
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn analytics(&self) -> Analytics {
        Analytics::compute(&self.trending, &self.chart_options)
    }

    pub fn trending(&self) -> &[MovieRecord] {
        &self.trending
    }

    pub fn search_results(&self) -> &[MovieRecord] {
        &self.search_results
    }

    pub fn selected(&self) -> Option<&MovieDetail> {
        self.selected.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
