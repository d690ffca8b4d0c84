use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use catalog_ingest::{load_catalog_records, IngestError};
use catalog_models::{title_key, Episode, Movie, Series, Video};

use crate::index::TitleIndex;

/// Result of rating a title by name. Ratings are looked up against top-level
/// video titles first, then episode titles; the first match wins.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RateOutcome {
    Video { title: String, average: f64 },
    Episode {
        series: String,
        title: String,
        average: f64,
    },
    NotFound,
}

/// Result of an episode listing query.
#[derive(Debug)]
pub enum EpisodeQuery<'a> {
    SeriesNotFound,
    /// The series exists; `episodes` holds the ones meeting the threshold and
    /// may be empty.
    Matches {
        series: &'a Series,
        episodes: Vec<&'a Episode>,
    },
}

/// Owns the in-memory catalog: the loaded videos in file order plus the title
/// index. All operations are total; only file loading can fail, and a failed
/// load leaves the previous catalog in place.
#[derive(Debug, Default)]
pub struct CatalogService {
    videos: Vec<Video>,
    index: TitleIndex,
    loaded_from: Option<PathBuf>,
    loaded_at: Option<DateTime<Utc>>,
}

fn meets_threshold(average: f64, min_rating: f64) -> bool {
    // 0.0 disables the rating filter
    min_rating == 0.0 || average >= min_rating
}

impl CatalogService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog with the contents of a file. The new catalog is
    /// parsed fully before anything is swapped in, so an unreadable file does
    /// not disturb the current state. Returns the number of loaded videos;
    /// zero is not an error.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, IngestError> {
        let path = path.as_ref();
        let videos = load_catalog_records(path)?;
        let count = videos.len();

        self.videos = videos;
        self.index = TitleIndex::build(&self.videos);
        self.loaded_from = Some(path.to_path_buf());
        self.loaded_at = Some(Utc::now());
        Ok(count)
    }

    /// Add a single video outside of file loading.
    pub fn add_video(&mut self, video: Video) {
        self.videos.push(video);
        self.index = TitleIndex::build(&self.videos);
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    pub fn loaded_from(&self) -> Option<&Path> {
        self.loaded_from.as_deref()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Rate a video or episode by title (case-insensitive). Out-of-range
    /// values are dropped by the accumulator with a warning; the reported
    /// average is then simply unchanged.
    pub fn rate(&mut self, title: &str, value: i32) -> RateOutcome {
        if let Some(vi) = self.index.video(title) {
            let video = &mut self.videos[vi];
            if !video.rate(value) {
                warn!(title = %video.title(), value, "Ignoring rating outside 1..=5");
            }
            return RateOutcome::Video {
                title: video.title().to_string(),
                average: video.average_rating(),
            };
        }

        if let Some((vi, ei)) = self.index.episode(title) {
            // The episode index only ever points into series entries.
            if let Some(series) = self.videos[vi].as_series_mut() {
                let series_title = series.title.clone();
                let episode = &mut series.episodes[ei];
                if !episode.rate(value) {
                    warn!(episode = %episode.title, value, "Ignoring rating outside 1..=5");
                }
                return RateOutcome::Episode {
                    series: series_title,
                    title: episode.title.clone(),
                    average: episode.average_rating(),
                };
            }
        }

        RateOutcome::NotFound
    }

    /// Videos whose average meets `min_rating` (0.0 disables) and whose genre
    /// matches `genre` exactly, case-insensitively (empty disables).
    pub fn videos_by_rating_or_genre(&self, min_rating: f64, genre: &str) -> Vec<&Video> {
        let genre_key = title_key(genre);
        self.videos
            .iter()
            .filter(|v| meets_threshold(v.average_rating(), min_rating))
            .filter(|v| genre.is_empty() || title_key(v.genre()) == genre_key)
            .collect()
    }

    /// Episodes of a series meeting the rating threshold. The lookup only
    /// considers series entries, so a movie with the same title does not hide
    /// the series.
    pub fn episodes_of_series(&self, series_title: &str, min_rating: f64) -> EpisodeQuery<'_> {
        let series = self
            .index
            .series(series_title)
            .and_then(|vi| self.videos[vi].as_series());
        match series {
            Some(series) => EpisodeQuery::Matches {
                series,
                episodes: series.episodes_rated_at_least(min_rating),
            },
            None => EpisodeQuery::SeriesNotFound,
        }
    }

    /// Movies only, same threshold rule as the other queries.
    pub fn movies_with_rating(&self, min_rating: f64) -> Vec<&Movie> {
        self.videos
            .iter()
            .filter_map(Video::as_movie)
            .filter(|m| meets_threshold(m.ratings.average(), min_rating))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_catalog_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Pelicula,P1,Inception,120,SciFi,4-5").unwrap();
        writeln!(file, "Serie,S1,Show,30,Drama,3;Ep1:1:5-4|Ep2:2:2").unwrap();
        writeln!(file, "Pelicula,P2,Heat,170,Crime,3-3").unwrap();
        file
    }

    fn loaded_service() -> (CatalogService, NamedTempFile) {
        let file = create_catalog_file();
        let mut service = CatalogService::new();
        service.load_file(file.path()).unwrap();
        (service, file)
    }

    #[test]
    fn test_load_preserves_file_order() {
        let (service, _file) = loaded_service();

        assert_eq!(service.len(), 3);
        assert_eq!(service.videos()[0].title(), "Inception");
        assert_eq!(service.videos()[1].title(), "Show");
        assert_eq!(service.videos()[2].title(), "Heat");
        assert!(service.loaded_from().is_some());
        assert!(service.loaded_at().is_some());
    }

    #[test]
    fn test_reload_is_idempotent() {
        let (mut service, file) = loaded_service();
        let before = service.videos().to_vec();

        service.load_file(file.path()).unwrap();
        assert_eq!(service.videos(), before.as_slice());
    }

    #[test]
    fn test_reload_replaces_previous_catalog() {
        let (mut service, _file) = loaded_service();

        let mut other = NamedTempFile::new().unwrap();
        writeln!(other, "Pelicula,P9,Alien,117,Horror,5").unwrap();
        service.load_file(other.path()).unwrap();

        assert_eq!(service.len(), 1);
        assert_eq!(service.videos()[0].title(), "Alien");
    }

    #[test]
    fn test_failed_load_leaves_catalog_intact() {
        let (mut service, _file) = loaded_service();

        let err = service.load_file("/no/such/catalog.txt");
        assert!(err.is_err());
        assert_eq!(service.len(), 3);
    }

    #[test]
    fn test_rate_is_case_insensitive() {
        let (mut service, _file) = loaded_service();

        let first = service.rate("INCEPTION", 4);
        let second = service.rate("inception", 4);

        // 4, 5 from the file plus two more 4s
        assert_eq!(
            second,
            RateOutcome::Video {
                title: "Inception".to_string(),
                average: 4.25
            }
        );
        assert!(matches!(first, RateOutcome::Video { .. }));
    }

    #[test]
    fn test_rate_falls_back_to_episode_titles() {
        let (mut service, _file) = loaded_service();

        let outcome = service.rate("ep1", 3);
        assert_eq!(
            outcome,
            RateOutcome::Episode {
                series: "Show".to_string(),
                title: "Ep1".to_string(),
                average: 4.0
            }
        );
    }

    #[test]
    fn test_rate_prefers_video_over_episode_on_shared_title() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Pelicula,P1,Twin,100,Drama,4").unwrap();
        writeln!(file, "Serie,S1,Show,30,Drama,3;Twin:1:2").unwrap();
        let mut service = CatalogService::new();
        service.load_file(file.path()).unwrap();

        let outcome = service.rate("Twin", 4);
        assert_eq!(
            outcome,
            RateOutcome::Video {
                title: "Twin".to_string(),
                average: 4.0
            }
        );
    }

    #[test]
    fn test_rate_unknown_title_leaves_catalog_unchanged() {
        let (mut service, _file) = loaded_service();
        let before = service.videos().to_vec();

        assert_eq!(service.rate("NoSuchTitle", 5), RateOutcome::NotFound);
        assert_eq!(service.videos(), before.as_slice());
    }

    #[test]
    fn test_rate_out_of_range_reports_unchanged_average() {
        let (mut service, _file) = loaded_service();

        let outcome = service.rate("Inception", 9);
        assert_eq!(
            outcome,
            RateOutcome::Video {
                title: "Inception".to_string(),
                average: 4.5
            }
        );
    }

    #[test]
    fn test_videos_by_rating_or_genre() {
        let (service, _file) = loaded_service();

        // Inception 4.5, Show 3.0, Heat 3.0
        let highly_rated = service.videos_by_rating_or_genre(4.0, "");
        assert_eq!(highly_rated.len(), 1);
        assert_eq!(highly_rated[0].title(), "Inception");

        let drama = service.videos_by_rating_or_genre(0.0, "drama");
        assert_eq!(drama.len(), 1);
        assert_eq!(drama[0].title(), "Show");

        let both = service.videos_by_rating_or_genre(3.0, "CRIME");
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].title(), "Heat");

        // 0.0 disables the rating filter entirely
        assert_eq!(service.videos_by_rating_or_genre(0.0, "").len(), 3);
    }

    #[test]
    fn test_episodes_of_series() {
        let (service, _file) = loaded_service();

        match service.episodes_of_series("show", 4.0) {
            EpisodeQuery::Matches { series, episodes } => {
                assert_eq!(series.title, "Show");
                assert_eq!(episodes.len(), 1);
                assert_eq!(episodes[0].title, "Ep1");
            }
            EpisodeQuery::SeriesNotFound => panic!("series should be found"),
        }

        match service.episodes_of_series("Show", 5.0) {
            EpisodeQuery::Matches { episodes, .. } => assert!(episodes.is_empty()),
            EpisodeQuery::SeriesNotFound => panic!("series should be found"),
        }

        assert!(matches!(
            service.episodes_of_series("Nope", 0.0),
            EpisodeQuery::SeriesNotFound
        ));

        // A movie title is not a series
        assert!(matches!(
            service.episodes_of_series("Inception", 0.0),
            EpisodeQuery::SeriesNotFound
        ));
    }

    #[test]
    fn test_episode_listing_not_shadowed_by_same_titled_movie() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Pelicula,P1,Twin,100,Drama,4").unwrap();
        writeln!(file, "Serie,S1,Twin,30,Drama,3;Ep1:1:5").unwrap();
        let mut service = CatalogService::new();
        service.load_file(file.path()).unwrap();

        match service.episodes_of_series("Twin", 0.0) {
            EpisodeQuery::Matches { series, episodes } => {
                assert_eq!(series.id, "S1");
                assert_eq!(episodes.len(), 1);
                assert_eq!(episodes[0].title, "Ep1");
            }
            EpisodeQuery::SeriesNotFound => panic!("series should be found"),
        }
    }

    #[test]
    fn test_movies_with_rating() {
        let (service, _file) = loaded_service();

        let movies = service.movies_with_rating(4.0);
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Inception");

        // Threshold disabled: both movies, but never the series
        let all = service.movies_with_rating(0.0);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_add_video_reindexes() {
        let mut service = CatalogService::new();
        service.add_video(Video::Movie(Movie::new("P1", "Alien", 117.0, "Horror")));

        assert_eq!(service.len(), 1);
        assert!(matches!(
            service.rate("ALIEN", 5),
            RateOutcome::Video { .. }
        ));
    }
}
