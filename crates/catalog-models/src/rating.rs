use serde::{Deserialize, Serialize};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Accumulated user ratings for a video or episode.
///
/// Stored values are always in 1..=5; out-of-range input is rejected at the
/// boundary and never reaches the list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ratings {
    values: Vec<u8>,
}

impl Ratings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_range(value: i32) -> bool {
        value >= MIN_RATING as i32 && value <= MAX_RATING as i32
    }

    /// Append a rating. Returns false (leaving the list unchanged) when the
    /// value is outside 1..=5; callers decide whether that is worth a warning.
    pub fn rate(&mut self, value: i32) -> bool {
        if !Self::in_range(value) {
            return false;
        }
        self.values.push(value as u8);
        true
    }

    /// Arithmetic mean of all ratings, or 0.0 when none have been recorded.
    pub fn average(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.values.iter().map(|&v| v as u32).sum();
        sum as f64 / self.values.len() as f64
    }

    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_empty_is_zero() {
        let ratings = Ratings::new();
        assert_eq!(ratings.average(), 0.0);
    }

    #[test]
    fn test_average_is_arithmetic_mean() {
        let mut ratings = Ratings::new();
        assert!(ratings.rate(4));
        assert!(ratings.rate(5));
        assert_eq!(ratings.average(), 4.5);
        assert_eq!(ratings.count(), 2);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut ratings = Ratings::new();
        ratings.rate(3);
        let before = ratings.clone();

        assert!(!ratings.rate(0));
        assert!(!ratings.rate(6));
        assert!(!ratings.rate(-2));
        assert_eq!(ratings, before);
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let mut ratings = Ratings::new();
        assert!(ratings.rate(1));
        assert!(ratings.rate(5));
        assert_eq!(ratings.values(), &[1, 5]);
    }
}
