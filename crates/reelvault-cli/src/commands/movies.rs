use std::path::PathBuf;

use color_eyre::Result;

use catalog_core::CatalogService;

use crate::commands::{load_context, load_service, movie_table};
use crate::output::{Output, OutputFormat};

pub fn run_movies(file: Option<PathBuf>, min_rating: Option<f64>, output: &Output) -> Result<()> {
    let ctx = load_context()?;
    let min_rating = ctx.min_rating(min_rating);
    let service = load_service(file, output)?;

    render_movies(&service, min_rating, output)
}

/// Shared by the one-shot command and the interactive menu.
pub fn render_movies(service: &CatalogService, min_rating: f64, output: &Output) -> Result<()> {
    let movies = service.movies_with_rating(min_rating);

    match output.format() {
        OutputFormat::Human => {
            if movies.is_empty() {
                output.info(format!(
                    "No movies with average rating >= {:.1}.",
                    min_rating
                ));
            } else {
                output.println(movie_table(&movies).to_string());
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::to_value(&movies)?);
        }
    }
    Ok(())
}
