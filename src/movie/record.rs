use serde::{Deserialize, Deserializer, Serialize};

/// One title as it appears in a TMDB list (trending or search results).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: u64,
    pub title: String,
    pub vote_average: f64,
    pub vote_count: u64,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_ids: Option<Vec<u32>>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
}

impl MovieRecord {
    pub fn new(id: u64, title: &str, vote_average: f64, vote_count: u64) -> Self {
        Self {
            id,
            title: title.to_string(),
            vote_average,
            vote_count,
            release_date: None,
            genre_ids: None,
            poster_path: None,
            overview: String::new(),
        }
    }

    pub fn with_genres(mut self, genre_ids: &[u32]) -> Self {
        self.genre_ids = Some(genre_ids.to_vec());
        self
    }

    pub fn with_release_date(mut self, date: &str) -> Self {
        self.release_date = Some(date.to_string());
        self
    }

    /// Genre codes, treating an absent list as empty.
    pub fn genre_codes(&self) -> &[u32] {
        self.genre_ids.as_deref().unwrap_or(&[])
    }

    /// Release year as shown on list cards, "N/A" when unknown.
    pub fn release_year(&self) -> &str {
        self.release_date
            .as_deref()
            .and_then(|d| d.split('-').next())
            .filter(|y| !y.is_empty())
            .unwrap_or("N/A")
    }

    pub fn poster_url(&self, image_base: &str) -> Option<String> {
        self.poster_path
            .as_ref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("{}{}", image_base, p))
    }
}

/// Envelope of the TMDB list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieList {
    #[serde(default)]
    pub page: u32,
    pub results: Vec<MovieRecord>,
    #[serde(default)]
    pub total_results: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// The detail-by-id payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: MovieRecord,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub budget: Option<u64>,
    #[serde(default)]
    pub revenue: Option<u64>,
}

impl MovieDetail {
    pub fn overview_or_default(&self) -> &str {
        if self.movie.overview.is_empty() {
            "No overview available"
        } else {
            &self.movie.overview
        }
    }

    pub fn release_date_label(&self) -> &str {
        self.movie.release_date.as_deref().unwrap_or("N/A")
    }

    pub fn runtime_label(&self) -> Option<String> {
        self.runtime
            .filter(|&r| r > 0)
            .map(|r| format!("{} min", r))
    }

    pub fn budget_label(&self) -> Option<String> {
        millions_label(self.budget)
    }

    pub fn revenue_label(&self) -> Option<String> {
        millions_label(self.revenue)
    }

    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(|g| g.name.as_str()).collect()
    }
}

fn millions_label(amount: Option<u64>) -> Option<String> {
    amount
        .filter(|&a| a > 0)
        .map(|a| format!("${:.1}M", a as f64 / 1_000_000.0))
}

// TMDB sends "" for unknown release dates.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

fn null_as_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
