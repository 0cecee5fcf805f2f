use num_format::{Locale, ToFormattedString};
use serde::Serialize;

use super::charts::round_one_decimal;
use crate::movie::MovieRecord;

/// The three statistic cards of the analytics view, already formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub avg_rating: String,
    pub total_votes: String,
    pub highest_rating: String,
}

/// Mean rating, total votes and best rating over all movies.
///
/// An empty list yields "0.0" for both ratings and "0" votes.
pub fn summary(movies: &[MovieRecord], locale: &Locale) -> Summary {
    let total_votes: u64 = movies.iter().map(|m| m.vote_count).sum();

    Summary {
        avg_rating: one_decimal(average_rating(movies).unwrap_or(0.0)),
        total_votes: total_votes.to_formatted_string(locale),
        highest_rating: one_decimal(highest_rating(movies).unwrap_or(0.0)),
    }
}

// Same rounding as the rating chart, so a 7.25 reads 7.3 everywhere.
fn one_decimal(value: f64) -> String {
    format!("{:.1}", round_one_decimal(value))
}

pub fn average_rating(movies: &[MovieRecord]) -> Option<f64> {
    if movies.is_empty() {
        return None;
    }
    let sum: f64 = movies.iter().map(|m| m.vote_average).sum();
    Some(sum / movies.len() as f64)
}

pub fn highest_rating(movies: &[MovieRecord]) -> Option<f64> {
    movies.iter().map(|m| m.vote_average).reduce(f64::max)
}
