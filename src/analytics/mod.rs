//! Chart datasets and summary statistics computed from a list of movies.
//!
//! Everything in here is a pure function of its input: no I/O, no hidden
//! state, and no failure modes. Calling any of it twice on the same slice
//! yields the same output.

pub mod charts;
pub mod summary;

pub use charts::*;
pub use summary::*;

use num_format::Locale;
use serde::Serialize;

use crate::movie::MovieRecord;

/// Number of leading records used by the rating and vote charts.
pub const DEFAULT_CHART_LIMIT: usize = 8;

#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub limit: usize,
    pub locale: Locale,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_CHART_LIMIT,
            locale: Locale::en,
        }
    }
}

/// All datasets of the analytics view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analytics {
    pub genres: Vec<GenreSlice>,
    pub ratings: Vec<RatingBar>,
    pub votes: Vec<VotePoint>,
    pub stats: Summary,
}

impl Analytics {
    pub fn compute(movies: &[MovieRecord], options: &ChartOptions) -> Self {
        Self {
            genres: genre_histogram(movies),
            ratings: rating_comparison(movies, options.limit),
            votes: vote_series(movies, options.limit),
            stats: summary(movies, &options.locale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trending() -> Vec<MovieRecord> {
        vec![
            MovieRecord::new(1, "Dune: Part Two", 8.2, 5400).with_genres(&[878, 12]),
            MovieRecord::new(2, "Kung Fu Panda 4", 7.1, 1200).with_genres(&[16, 28, 10751]),
            MovieRecord::new(3, "Godzilla x Kong: The New Empire", 7.2, 900).with_genres(&[878, 28]),
        ]
    }

    #[test]
    fn test_compute_is_idempotent() {
        let movies = trending();
        let options = ChartOptions::default();

        let first = Analytics::compute(&movies, &options);
        let second = Analytics::compute(&movies, &options);
        assert_eq!(first, second);
        assert_eq!(movies, trending());
    }

    #[test]
    fn test_compute_bundle() {
        let analytics = Analytics::compute(&trending(), &ChartOptions::default());
        assert_eq!(analytics.genres.len(), 5);
        assert_eq!(analytics.ratings.len(), 3);
        assert_eq!(analytics.votes[2].rank, "#3");
        assert_eq!(analytics.stats.total_votes, "7,500");
        assert_eq!(analytics.stats.highest_rating, "8.2");
    }

    #[test]
    fn test_serialized_field_names() {
        let analytics = Analytics::compute(&trending()[..1], &ChartOptions::default());
        let json = serde_json::to_value(&analytics).unwrap();

        assert_eq!(json["genres"][0]["name"], "Sci-Fi");
        assert_eq!(json["genres"][0]["value"], 1);
        assert_eq!(json["ratings"][0]["title"], "Dune: Part Two");
        assert_eq!(json["ratings"][0]["rating"], 8.2);
        assert_eq!(json["votes"][0]["rank"], "#1");
        assert_eq!(json["votes"][0]["votes"], 5400);
        assert_eq!(json["stats"]["avgRating"], "8.2");
        assert_eq!(json["stats"]["totalVotes"], "5,400");
        assert_eq!(json["stats"]["highestRating"], "8.2");
    }
}
