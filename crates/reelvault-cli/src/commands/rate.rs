use std::path::PathBuf;

use color_eyre::Result;

use catalog_core::{CatalogService, RateOutcome};

use crate::commands::load_service;
use crate::output::{Output, OutputFormat};

pub fn run_rate(file: Option<PathBuf>, title: &str, rating: i32, output: &Output) -> Result<()> {
    let mut service = load_service(file, output)?;
    render_rate(&mut service, title, rating, output)
}

/// Shared by the one-shot command and the interactive menu.
pub fn render_rate(
    service: &mut CatalogService,
    title: &str,
    rating: i32,
    output: &Output,
) -> Result<()> {
    let outcome = service.rate(title, rating);

    match output.format() {
        OutputFormat::Human => match &outcome {
            RateOutcome::Video { title, average } => {
                output.success(format!("Rated '{}'. New average: {:.1}", title, average));
            }
            RateOutcome::Episode {
                series,
                title,
                average,
            } => {
                output.success(format!(
                    "Rated episode '{}' of '{}'. New average: {:.1}",
                    title, series, average
                ));
            }
            RateOutcome::NotFound => {
                output.warn(format!("Video or episode '{}' not found.", title));
            }
        },
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::to_value(&outcome)?);
        }
    }
    Ok(())
}
