//! Catalog record parsing.
//!
//! One record per line. The leading layer is comma-separated; the tail of a
//! record uses its own separators:
//!
//! ```text
//! Type,Id,Title,Duration,Genre[,own-ratings[;episodes]]
//! own-ratings := rating('-'rating)*
//! episodes    := segment('|'segment)*
//! segment     := EpTitle':'Season':'own-ratings
//! ```
//!
//! `Type` is `Pelicula`/`Movie` or `Serie`/`Series`, matched
//! case-insensitively. Malformed leading fields or an unknown type reject the
//! whole record; malformed rating tokens and episode segments are dropped
//! individually and the record still produces an entity.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use catalog_models::{Episode, Movie, Ratings, Series, Video};

use crate::error::IngestError;

/// Read every record of a catalog file. Blank lines are ignored; records the
/// parser rejects are logged and skipped. Only an unopenable file or a
/// mid-file read failure is an error.
pub fn load_catalog_records<P: AsRef<Path>>(path: P) -> Result<Vec<Video>, IngestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(file);

    let mut videos = Vec::new();
    let mut record_count = 0u64;
    for result in reader.records() {
        let record = result?;
        record_count += 1;
        if let Some(video) = parse_record(&record) {
            videos.push(video);
        }
    }

    tracing::info!(
        path = %path.display(),
        total = record_count,
        loaded = videos.len(),
        "Parsed catalog file"
    );
    Ok(videos)
}

/// Parse a single raw line. Convenience wrapper over [`parse_record`].
pub fn parse_line(line: &str) -> Option<Video> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(line.as_bytes());
    let record = reader.records().next()?.ok()?;
    parse_record(&record)
}

/// Parse one comma-split record into a [`Video`], or `None` when the record
/// is rejected (incomplete leading fields, bad duration, unknown type).
pub fn parse_record(record: &StringRecord) -> Option<Video> {
    let line = record.position().map_or(0, |p| p.line());

    if record.len() < 5 {
        warn!(line, fields = record.len(), "Skipping record with incomplete base fields");
        return None;
    }

    let kind = record.get(0).unwrap_or("");
    let id = record.get(1).unwrap_or("");
    let title = record.get(2).unwrap_or("");
    let duration_str = record.get(3).unwrap_or("");
    let genre = record.get(4).unwrap_or("");

    let duration_minutes = match duration_str.parse::<f64>() {
        Ok(d) => d,
        Err(_) => {
            warn!(line, title = %title, duration = %duration_str, "Skipping record with invalid duration");
            return None;
        }
    };

    // The original line format is not quoted, so any comma past the fifth
    // belongs to the tail. Re-join to recover it.
    let remainder = if record.len() > 6 {
        record.iter().skip(5).collect::<Vec<_>>().join(",")
    } else {
        record.get(5).unwrap_or("").to_string()
    };

    // Part before the first ';' is the entry's own ratings, part after is
    // episode data (series only).
    let (own_ratings_str, episode_data) = match remainder.split_once(';') {
        Some((ratings, episodes)) => (ratings, episodes),
        None => (remainder.as_str(), ""),
    };

    match kind.to_lowercase().as_str() {
        "pelicula" | "movie" => {
            if !episode_data.is_empty() {
                debug!(line, title = %title, "Ignoring episode data on a movie record");
            }
            let mut movie = Movie::new(id, title, duration_minutes, genre);
            movie.ratings = parse_rating_list(own_ratings_str, title);
            Some(Video::Movie(movie))
        }
        "serie" | "series" => {
            let mut series = Series::new(id, title, duration_minutes, genre);
            series.ratings = parse_rating_list(own_ratings_str, title);
            for episode in parse_episodes(episode_data, title) {
                series.add_episode(episode);
            }
            Some(Video::Series(series))
        }
        other => {
            warn!(line, kind = %other, "Skipping record with unknown video type");
            None
        }
    }
}

/// Parse a hyphen-separated rating list. Empty tokens (consecutive or
/// trailing separators) are dropped silently; non-numeric and out-of-range
/// tokens are dropped with a warning. Never fails.
fn parse_rating_list(list: &str, owner: &str) -> Ratings {
    let mut ratings = Ratings::new();
    for token in list.split('-') {
        if token.is_empty() {
            continue;
        }
        match token.parse::<i32>() {
            Ok(value) => {
                if !ratings.rate(value) {
                    warn!(owner = %owner, value, "Dropping out-of-range rating");
                }
            }
            Err(_) => {
                warn!(owner = %owner, token = %token, "Dropping non-numeric rating token");
            }
        }
    }
    ratings
}

/// Parse the pipe-separated episode segments of a series record. Each segment
/// stands alone: a malformed one is dropped without affecting its neighbors.
fn parse_episodes(data: &str, series_title: &str) -> Vec<Episode> {
    let mut episodes = Vec::new();
    for segment in data.split('|') {
        if segment.is_empty() {
            continue;
        }

        let mut parts = segment.splitn(3, ':');
        let (title, season_str, ratings_str) = match (parts.next(), parts.next(), parts.next()) {
            (Some(t), Some(s), Some(r)) => (t, s, r),
            _ => {
                warn!(series = %series_title, segment = %segment, "Dropping malformed episode segment");
                continue;
            }
        };

        let season = match season_str.parse::<i64>() {
            Ok(s) if s > 0 && s <= u32::MAX as i64 => s as u32,
            Ok(_) => {
                warn!(series = %series_title, episode = %title, season = %season_str, "Dropping episode with out-of-range season");
                continue;
            }
            Err(_) => {
                warn!(series = %series_title, episode = %title, season = %season_str, "Dropping episode with non-numeric season");
                continue;
            }
        };

        let mut episode = Episode::new(title, season);
        episode.ratings = parse_rating_list(ratings_str, title);
        // A well-formed segment with zero valid ratings still counts.
        episodes.push(episode);
    }
    episodes
}
