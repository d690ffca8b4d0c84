use std::path::PathBuf;

use color_eyre::Result;

use catalog_core::CatalogService;

use crate::commands::{load_context, load_service, video_table};
use crate::output::{Output, OutputFormat};

pub fn run_list(
    file: Option<PathBuf>,
    min_rating: Option<f64>,
    genre: Option<String>,
    output: &Output,
) -> Result<()> {
    let ctx = load_context()?;
    let min_rating = ctx.min_rating(min_rating);
    let service = load_service(file, output)?;

    render_list(&service, min_rating, genre.as_deref().unwrap_or(""), output)
}

/// Shared by the one-shot command and the interactive menu.
pub fn render_list(
    service: &CatalogService,
    min_rating: f64,
    genre: &str,
    output: &Output,
) -> Result<()> {
    let videos = service.videos_by_rating_or_genre(min_rating, genre);

    match output.format() {
        OutputFormat::Human => {
            if videos.is_empty() {
                output.info("No videos matched the given criteria.");
            } else {
                output.println(video_table(&videos).to_string());
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::to_value(&videos)?);
        }
    }
    Ok(())
}
