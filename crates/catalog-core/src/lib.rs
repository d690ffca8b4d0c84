pub mod catalog;
pub mod index;

pub use catalog::{CatalogService, EpisodeQuery, RateOutcome};
pub use index::TitleIndex;
