use serde::{Deserialize, Serialize};

use crate::episode::Episode;
use crate::rating::Ratings;
use crate::title_key;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub duration_minutes: f64,
    pub genre: String,
    pub ratings: Ratings,
}

impl Movie {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        duration_minutes: f64,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration_minutes,
            genre: genre.into(),
            ratings: Ratings::new(),
        }
    }
}

/// A series with its own series-level rating list and an ordered set of
/// episodes. Episode order is insertion order and is preserved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series {
    pub id: String,
    pub title: String,
    pub duration_minutes: f64,
    pub genre: String,
    pub ratings: Ratings,
    pub episodes: Vec<Episode>,
}

impl Series {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        duration_minutes: f64,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration_minutes,
            genre: genre.into(),
            ratings: Ratings::new(),
            episodes: Vec::new(),
        }
    }

    pub fn add_episode(&mut self, episode: Episode) {
        self.episodes.push(episode);
    }

    /// Case-insensitive exact-title lookup. First match wins.
    pub fn find_episode(&self, title: &str) -> Option<&Episode> {
        let key = title_key(title);
        self.episodes.iter().find(|ep| title_key(&ep.title) == key)
    }

    pub fn find_episode_mut(&mut self, title: &str) -> Option<&mut Episode> {
        let key = title_key(title);
        self.episodes
            .iter_mut()
            .find(|ep| title_key(&ep.title) == key)
    }

    /// Episodes whose average rating meets the threshold (inclusive).
    /// A threshold of 0.0 disables the filter.
    pub fn episodes_rated_at_least(&self, min_rating: f64) -> Vec<&Episode> {
        self.episodes
            .iter()
            .filter(|ep| min_rating == 0.0 || ep.average_rating() >= min_rating)
            .collect()
    }
}

/// A top-level catalog entry: either a standalone movie or a series with
/// episodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Video {
    Movie(Movie),
    Series(Series),
}

impl Video {
    pub fn id(&self) -> &str {
        match self {
            Video::Movie(m) => &m.id,
            Video::Series(s) => &s.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Video::Movie(m) => &m.title,
            Video::Series(s) => &s.title,
        }
    }

    pub fn genre(&self) -> &str {
        match self {
            Video::Movie(m) => &m.genre,
            Video::Series(s) => &s.genre,
        }
    }

    pub fn duration_minutes(&self) -> f64 {
        match self {
            Video::Movie(m) => m.duration_minutes,
            Video::Series(s) => s.duration_minutes,
        }
    }

    pub fn ratings(&self) -> &Ratings {
        match self {
            Video::Movie(m) => &m.ratings,
            Video::Series(s) => &s.ratings,
        }
    }

    /// Rate the entry itself (for a series, the series-level list, not any
    /// episode). Same range contract as [`Ratings::rate`].
    pub fn rate(&mut self, value: i32) -> bool {
        match self {
            Video::Movie(m) => m.ratings.rate(value),
            Video::Series(s) => s.ratings.rate(value),
        }
    }

    pub fn average_rating(&self) -> f64 {
        self.ratings().average()
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Video::Movie(_) => "movie",
            Video::Series(_) => "series",
        }
    }

    pub fn is_movie(&self) -> bool {
        matches!(self, Video::Movie(_))
    }

    pub fn as_movie(&self) -> Option<&Movie> {
        match self {
            Video::Movie(m) => Some(m),
            Video::Series(_) => None,
        }
    }

    pub fn as_series(&self) -> Option<&Series> {
        match self {
            Video::Series(s) => Some(s),
            Video::Movie(_) => None,
        }
    }

    pub fn as_series_mut(&mut self) -> Option<&mut Series> {
        match self {
            Video::Series(s) => Some(s),
            Video::Movie(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_episode_lookup_is_case_insensitive() {
        let mut series = Series::new("S1", "Show", 30.0, "Drama");
        series.add_episode(Episode::new("Pilot", 1));
        series.add_episode(Episode::new("Finale", 2));

        assert!(series.find_episode("PILOT").is_some());
        assert!(series.find_episode("pilot").is_some());
        assert!(series.find_episode("missing").is_none());
    }

    #[test]
    fn test_series_ratings_independent_of_episodes() {
        let mut series = Series::new("S1", "Show", 30.0, "Drama");
        let mut ep = Episode::new("Pilot", 1);
        ep.rate(5);
        series.add_episode(ep);
        series.ratings.rate(2);

        assert_eq!(series.ratings.average(), 2.0);
        assert_eq!(series.episodes[0].average_rating(), 5.0);
    }

    #[test]
    fn test_episodes_rated_at_least_inclusive_threshold() {
        let mut series = Series::new("S1", "Show", 30.0, "Drama");
        let mut good = Episode::new("Good", 1);
        good.rate(4);
        let mut bad = Episode::new("Bad", 1);
        bad.rate(2);
        series.add_episode(good);
        series.add_episode(bad);

        let matched = series.episodes_rated_at_least(4.0);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Good");

        // 0.0 disables the filter, so unrated/low episodes pass too
        assert_eq!(series.episodes_rated_at_least(0.0).len(), 2);
    }

    #[test]
    fn test_video_dispatch() {
        let mut video = Video::Movie(Movie::new("P1", "Inception", 120.0, "SciFi"));
        assert!(video.rate(4));
        assert!(video.rate(5));
        assert!(!video.rate(9));
        assert_eq!(video.average_rating(), 4.5);
        assert_eq!(video.type_name(), "movie");
        assert!(video.as_series().is_none());
    }
}
