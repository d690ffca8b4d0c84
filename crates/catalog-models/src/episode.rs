use serde::{Deserialize, Serialize};

use crate::rating::Ratings;

/// A single episode of a series. Carries its own rating list, independent of
/// the series-level ratings. Season numbers are validated (> 0) during
/// parsing, so a constructed episode always has a positive season.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Episode {
    pub title: String,
    pub season: u32,
    pub ratings: Ratings,
}

impl Episode {
    pub fn new(title: impl Into<String>, season: u32) -> Self {
        Self {
            title: title.into(),
            season,
            ratings: Ratings::new(),
        }
    }

    pub fn rate(&mut self, value: i32) -> bool {
        self.ratings.rate(value)
    }

    pub fn average_rating(&self) -> f64 {
        self.ratings.average()
    }
}
