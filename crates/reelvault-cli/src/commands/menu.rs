use std::path::PathBuf;

use color_eyre::Result;
use dialoguer::Select;

use catalog_core::CatalogService;

use crate::commands::{episodes, list, load_context, movies, prompts, rate};
use crate::output::Output;

const MENU_ITEMS: &[&str] = &[
    "Load catalog file",
    "List by rating or genre",
    "Show episodes of a series",
    "Show movies by rating",
    "Rate a title",
    "Exit",
];

/// The interactive console menu. Unlike the one-shot subcommands, this holds
/// a single in-memory catalog across actions, so ratings entered here are
/// visible to later listings in the same session.
pub fn run_menu(file: Option<PathBuf>, output: &Output) -> Result<()> {
    let ctx = load_context()?;
    let default_min = ctx.config.display.default_min_rating;
    let mut service = CatalogService::new();

    // Preload when a file was given or configured; a failed preload is not
    // fatal here, the menu can load another file.
    if let Some(path) = file.or_else(|| ctx.config.catalog.default_file.clone()) {
        match service.load_file(&path) {
            Ok(count) => output.success(format!("Loaded {} videos from {}", count, path.display())),
            Err(e) => output.warn(format!("{}", e)),
        }
    }

    loop {
        let choice = Select::new()
            .with_prompt("reelvault")
            .items(MENU_ITEMS)
            .default(0)
            .interact()
            .map_err(|e| color_eyre::eyre::eyre!("Failed to read selection: {}", e))?;

        match choice {
            0 => {
                let path = prompts::prompt_string("Catalog file path", None)?;
                match service.load_file(&path) {
                    Ok(count) => output.success(format!("Loaded {} videos", count)),
                    Err(e) => output.error(format!("{}", e)),
                }
            }
            1 => {
                let min_rating =
                    prompts::prompt_threshold("Minimum average rating (0 = any)", default_min)?;
                let genre = prompts::prompt_string("Genre (empty = any)", Some(""))?;
                list::render_list(&service, min_rating, &genre, output)?;
            }
            2 => {
                let series = prompts::prompt_string("Series title", None)?;
                let min_rating =
                    prompts::prompt_threshold("Minimum average rating (0 = any)", default_min)?;
                episodes::render_episodes(&service, &series, min_rating, output)?;
            }
            3 => {
                let min_rating =
                    prompts::prompt_threshold("Minimum average rating (0 = any)", default_min)?;
                movies::render_movies(&service, min_rating, output)?;
            }
            4 => {
                let title = prompts::prompt_string("Video or episode title", None)?;
                let rating = prompts::prompt_rating("Rating (1-5)")?;
                rate::render_rate(&mut service, &title, rating, output)?;
            }
            _ => break,
        }
    }

    Ok(())
}
