use std::path::PathBuf;

use color_eyre::Result;
use serde_json::json;

use crate::commands::load_service;
use crate::output::{Output, OutputFormat};

pub fn run_load(file: Option<PathBuf>, output: &Output) -> Result<()> {
    let service = load_service(file, output)?;

    let path = service
        .loaded_from()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let movies = service.videos().iter().filter(|v| v.is_movie()).count();
    let series = service.len() - movies;

    match output.format() {
        OutputFormat::Human => {
            output.success(format!(
                "Loaded {} videos from {} ({} movies, {} series)",
                service.len(),
                path,
                movies,
                series
            ));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "path": path,
                "loaded": service.len(),
                "movies": movies,
                "series": series,
            }));
        }
    }
    Ok(())
}
