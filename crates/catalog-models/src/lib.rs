pub mod episode;
pub mod rating;
pub mod video;

pub use episode::Episode;
pub use rating::{Ratings, MAX_RATING, MIN_RATING};
pub use video::{Movie, Series, Video};

/// Lowercase a title for case-insensitive comparison and index keys.
pub fn title_key(title: &str) -> String {
    title.to_lowercase()
}
