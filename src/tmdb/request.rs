use std::fmt;

/// One of the three upstream calls the dashboard makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamRequest {
    Trending,
    Search(String),
    Movie(String),
}

impl UpstreamRequest {
    /// Build a request from the relay's `endpoint`/`query`/`movieId` parameters.
    ///
    /// Returns `None` for an unknown endpoint or when the parameter the
    /// endpoint needs is missing or empty.
    pub fn from_params(
        endpoint: Option<&str>,
        query: Option<&str>,
        movie_id: Option<&str>,
    ) -> Option<Self> {
        let query = query.filter(|q| !q.is_empty());
        let movie_id = movie_id.filter(|m| !m.is_empty());

        match endpoint? {
            "trending" => Some(UpstreamRequest::Trending),
            "search" => query.map(|q| UpstreamRequest::Search(q.to_string())),
            "movie" => movie_id.map(|m| UpstreamRequest::Movie(m.to_string())),
            _ => None,
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            UpstreamRequest::Trending => "trending",
            UpstreamRequest::Search(_) => "search",
            UpstreamRequest::Movie(_) => "movie",
        }
    }

    /// The TMDB URL for this request, credential attached.
    pub fn upstream_url(&self, base_url: &str, api_key: &str) -> String {
        let base_url = base_url.trim_end_matches('/');
        let api_key = urlencoding::encode(api_key);

        match self {
            UpstreamRequest::Trending => {
                format!("{}/trending/movie/week?api_key={}", base_url, api_key)
            }
            UpstreamRequest::Search(query) => format!(
                "{}/search/movie?api_key={}&query={}",
                base_url,
                api_key,
                urlencoding::encode(query)
            ),
            UpstreamRequest::Movie(id) => format!(
                "{}/movie/{}?api_key={}",
                base_url,
                urlencoding::encode(id),
                api_key
            ),
        }
    }

    /// Query parameters for the same request sent through the relay.
    pub fn relay_params(&self) -> Vec<(&'static str, &str)> {
        let mut params = vec![("endpoint", self.endpoint())];
        match self {
            UpstreamRequest::Trending => {}
            UpstreamRequest::Search(query) => params.push(("query", query.as_str())),
            UpstreamRequest::Movie(id) => params.push(("movieId", id.as_str())),
        }
        params
    }
}

impl fmt::Display for UpstreamRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamRequest::Trending => write!(f, "trending"),
            UpstreamRequest::Search(query) => write!(f, "search {:?}", query),
            UpstreamRequest::Movie(id) => write!(f, "movie {}", id),
        }
    }
}
