pub mod genres;
pub mod record;

pub use genres::{genre_name, GENRE_FALLBACK};
pub use record::*;
