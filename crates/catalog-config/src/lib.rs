pub mod config;
pub mod paths;

pub use config::{CatalogSection, Config, DisplaySection};
pub use paths::PathManager;
