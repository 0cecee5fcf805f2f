use serde::Serialize;

use crate::movie::{genre_name, MovieRecord};

const TITLE_MAX_CHARS: usize = 15;
const ELLIPSIS: &str = "...";

/// One slice of the genre distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreSlice {
    pub name: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingBar {
    pub title: String,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VotePoint {
    pub rank: String,
    pub votes: u64,
}

/// Count genre occurrences across all movies.
///
/// Slices come out in the order their genre was first seen, not by count.
/// Codes missing from the lookup table are counted under "Other".
pub fn genre_histogram(movies: &[MovieRecord]) -> Vec<GenreSlice> {
    let mut slices: Vec<GenreSlice> = Vec::new();

    for movie in movies {
        for &code in movie.genre_codes() {
            let name = genre_name(code);
            match slices.iter_mut().find(|s| s.name == name) {
                Some(slice) => slice.value += 1,
                None => slices.push(GenreSlice {
                    name: name.to_string(),
                    value: 1,
                }),
            }
        }
    }

    slices
}

/// Ratings of the first `limit` movies, in input order.
pub fn rating_comparison(movies: &[MovieRecord], limit: usize) -> Vec<RatingBar> {
    movies
        .iter()
        .take(limit)
        .map(|movie| RatingBar {
            title: truncate_title(&movie.title),
            rating: round_one_decimal(movie.vote_average),
        })
        .collect()
}

/// Vote counts of the first `limit` movies, labelled by position.
pub fn vote_series(movies: &[MovieRecord], limit: usize) -> Vec<VotePoint> {
    movies
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, movie)| VotePoint {
            rank: format!("#{}", index + 1),
            votes: movie.vote_count,
        })
        .collect()
}

pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_MAX_CHARS {
        let head: String = title.chars().take(TITLE_MAX_CHARS).collect();
        format!("{}{}", head, ELLIPSIS)
    } else {
        title.to_string()
    }
}

/// Round half away from zero to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
