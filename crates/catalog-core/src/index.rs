use std::collections::HashMap;

use catalog_models::{title_key, Video};

/// Secondary lookup index over the catalog: lowercased video title to
/// position, and lowercased episode title to (video position, episode
/// position). Rebuilt wholesale after each load rather than maintained
/// incrementally.
#[derive(Debug, Default)]
pub struct TitleIndex {
    videos: HashMap<String, usize>,
    // Series-only view of the titles, so a movie sharing a series' title
    // cannot shadow the series in episode queries.
    series: HashMap<String, usize>,
    episodes: HashMap<String, (usize, usize)>,
}

impl TitleIndex {
    /// Index every video and episode title. On duplicate titles the first
    /// occurrence in catalog order wins.
    pub fn build(videos: &[Video]) -> Self {
        let mut index = Self::default();
        for (vi, video) in videos.iter().enumerate() {
            index.videos.entry(title_key(video.title())).or_insert(vi);
            if let Some(series) = video.as_series() {
                index.series.entry(title_key(&series.title)).or_insert(vi);
                for (ei, episode) in series.episodes.iter().enumerate() {
                    index
                        .episodes
                        .entry(title_key(&episode.title))
                        .or_insert((vi, ei));
                }
            }
        }
        index
    }

    pub fn video(&self, title: &str) -> Option<usize> {
        self.videos.get(&title_key(title)).copied()
    }

    pub fn series(&self, title: &str) -> Option<usize> {
        self.series.get(&title_key(title)).copied()
    }

    pub fn episode(&self, title: &str) -> Option<(usize, usize)> {
        self.episodes.get(&title_key(title)).copied()
    }

    pub fn video_count(&self) -> usize {
        self.videos.len()
    }
}
