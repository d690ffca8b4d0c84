use color_eyre::Result;
use comfy_table::{Cell, Table};
use serde_json::json;

use catalog_config::Config;

use crate::commands::load_context;
use crate::output::{Output, OutputFormat};
use crate::ConfigCommands;

pub fn run_config(cmd: ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(output),
        ConfigCommands::SetFile { path } => {
            update_config(output, |config| {
                config.catalog.default_file = Some(path.clone());
                format!("Default catalog file set to {}", path.display())
            })
        }
        ConfigCommands::SetMinRating { min_rating } => {
            update_config(output, |config| {
                config.display.default_min_rating = min_rating;
                format!("Default minimum rating set to {:.1}", min_rating)
            })
        }
    }
}

fn show_config(output: &Output) -> Result<()> {
    let ctx = load_context()?;
    let config_file = ctx.paths.config_file();
    let config = ctx.config;

    let default_file = config
        .catalog
        .default_file
        .as_ref()
        .map(|p| p.display().to_string());

    match output.format() {
        OutputFormat::Human => {
            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("Config File").add_attribute(comfy_table::Attribute::Bold),
                Cell::new(config_file.display().to_string()),
            ]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            table.add_row(vec![
                Cell::new("Default catalog file"),
                Cell::new(default_file.unwrap_or_else(|| "(not set)".to_string())),
            ]);
            table.add_row(vec![
                Cell::new("Default minimum rating"),
                Cell::new(format!("{:.1}", config.display.default_min_rating)),
            ]);
            output.println(table.to_string());
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "config_file": config_file.display().to_string(),
                "catalog": { "default_file": default_file },
                "display": { "default_min_rating": config.display.default_min_rating },
            }));
        }
    }
    Ok(())
}

fn update_config(output: &Output, apply: impl FnOnce(&mut Config) -> String) -> Result<()> {
    let ctx = load_context()?;
    ctx.paths
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    let config_file = ctx.paths.config_file();

    let mut config = ctx.config;
    let message = apply(&mut config);
    config
        .validate()
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    config
        .save_to_file(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    output.success(message);
    Ok(())
}
