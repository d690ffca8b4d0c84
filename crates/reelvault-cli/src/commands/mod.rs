use std::path::PathBuf;

use color_eyre::Result;
use comfy_table::{Cell, Table};

use catalog_config::{Config, PathManager};
use catalog_core::CatalogService;
use catalog_models::{Episode, Movie, Video};

use crate::output::Output;

pub mod config;
pub mod episodes;
pub mod list;
pub mod load;
pub mod menu;
pub mod movies;
pub mod prompts;
pub mod rate;

/// Loaded configuration plus the paths it came from, shared by the command
/// handlers.
pub(crate) struct Context {
    pub config: Config,
    pub paths: PathManager,
}

pub(crate) fn load_context() -> Result<Context> {
    let paths = PathManager::new().map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    let config = Config::load_or_default(&paths.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    Ok(Context { config, paths })
}

impl Context {
    /// The catalog file to operate on: the --file flag when given, otherwise
    /// the configured default.
    pub fn catalog_file(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        flag.or_else(|| self.config.catalog.default_file.clone())
            .ok_or_else(|| {
                color_eyre::eyre::eyre!(
                    "No catalog file given. Pass --file or set one with `reelvault config set-file`"
                )
            })
    }

    pub fn min_rating(&self, flag: Option<f64>) -> f64 {
        flag.unwrap_or(self.config.display.default_min_rating)
    }
}

/// Load the catalog file into a fresh service, reporting an unreadable file
/// through the output channel before failing the command.
pub(crate) fn load_service(file: Option<PathBuf>, output: &Output) -> Result<CatalogService> {
    let ctx = load_context()?;
    let path = ctx.catalog_file(file)?;
    tracing::debug!(path = %path.display(), "Loading catalog");
    let mut service = CatalogService::new();
    service.load_file(&path).map_err(|e| {
        output.error(format!("{}", e));
        color_eyre::eyre::eyre!("catalog load failed")
    })?;
    Ok(service)
}

fn styled_table() -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

pub(crate) fn video_table(videos: &[&Video]) -> Table {
    let mut table = styled_table();
    table.set_header(vec![
        Cell::new("Type").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("ID").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Title").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Duration (min)").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Genre").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Ratings").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Average").add_attribute(comfy_table::Attribute::Bold),
    ]);
    for video in videos {
        table.add_row(vec![
            Cell::new(video.type_name()),
            Cell::new(video.id()),
            Cell::new(video.title()),
            Cell::new(format!("{}", video.duration_minutes())),
            Cell::new(video.genre()),
            Cell::new(video.ratings().count().to_string()),
            Cell::new(format!("{:.1}", video.average_rating())),
        ]);
    }
    table
}

pub(crate) fn movie_table(movies: &[&Movie]) -> Table {
    let mut table = styled_table();
    table.set_header(vec![
        Cell::new("ID").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Title").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Duration (min)").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Genre").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Ratings").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Average").add_attribute(comfy_table::Attribute::Bold),
    ]);
    for movie in movies {
        table.add_row(vec![
            Cell::new(&movie.id),
            Cell::new(&movie.title),
            Cell::new(format!("{}", movie.duration_minutes)),
            Cell::new(&movie.genre),
            Cell::new(movie.ratings.count().to_string()),
            Cell::new(format!("{:.1}", movie.ratings.average())),
        ]);
    }
    table
}

pub(crate) fn episode_table(episodes: &[&Episode]) -> Table {
    let mut table = styled_table();
    table.set_header(vec![
        Cell::new("Episode").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Season").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Ratings").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Average").add_attribute(comfy_table::Attribute::Bold),
    ]);
    for episode in episodes {
        table.add_row(vec![
            Cell::new(&episode.title),
            Cell::new(episode.season.to_string()),
            Cell::new(episode.ratings.count().to_string()),
            Cell::new(format!("{:.1}", episode.average_rating())),
        ]);
    }
    table
}
