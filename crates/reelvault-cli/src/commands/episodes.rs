use std::path::PathBuf;

use color_eyre::Result;
use serde_json::json;

use catalog_core::{CatalogService, EpisodeQuery};

use crate::commands::{episode_table, load_context, load_service};
use crate::output::{Output, OutputFormat};

pub fn run_episodes(
    file: Option<PathBuf>,
    series: &str,
    min_rating: Option<f64>,
    output: &Output,
) -> Result<()> {
    let ctx = load_context()?;
    let min_rating = ctx.min_rating(min_rating);
    let service = load_service(file, output)?;

    render_episodes(&service, series, min_rating, output)
}

/// Shared by the one-shot command and the interactive menu.
pub fn render_episodes(
    service: &CatalogService,
    series: &str,
    min_rating: f64,
    output: &Output,
) -> Result<()> {
    match service.episodes_of_series(series, min_rating) {
        EpisodeQuery::SeriesNotFound => match output.format() {
            OutputFormat::Human => {
                output.warn(format!("Series '{}' not found.", series));
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                output.json(&json!({ "result": "series_not_found", "series": series }));
            }
        },
        EpisodeQuery::Matches { series, episodes } => match output.format() {
            OutputFormat::Human => {
                if episodes.is_empty() {
                    output.info(format!(
                        "No episodes of '{}' matched the rating threshold.",
                        series.title
                    ));
                } else {
                    output.println(format!("Episodes of '{}':", series.title));
                    output.println(episode_table(&episodes).to_string());
                }
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                output.json(&json!({
                    "series": series.title,
                    "episodes": serde_json::to_value(&episodes)?,
                }));
            }
        },
    }
    Ok(())
}
