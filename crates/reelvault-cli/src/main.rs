use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use commands::{config, episodes, list, load, menu, movies, rate};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "reelvault")]
#[command(about = "Reelvault - manage and rate a local streaming catalog")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Catalog file to load (defaults to the configured catalog file)
    #[arg(short, long, global = true, value_name = "FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a catalog file and report what was ingested
    #[command(long_about = "Parse a catalog file and report how many videos it yields. Malformed records are skipped with warnings on stderr; an unreadable file is an error.")]
    Load,

    /// List videos filtered by minimum average rating and/or genre
    #[command(long_about = "List every catalog entry whose average rating meets the threshold (0 disables the filter) and whose genre matches exactly, case-insensitively (empty matches any genre).")]
    List {
        /// Minimum average rating, inclusive (0 disables the filter)
        #[arg(long, value_name = "RATING")]
        min_rating: Option<f64>,

        /// Genre to match (case-insensitive exact match)
        #[arg(long)]
        genre: Option<String>,
    },

    /// List the episodes of a series filtered by minimum average rating
    Episodes {
        /// Series title (case-insensitive)
        series: String,

        /// Minimum average rating, inclusive (0 disables the filter)
        #[arg(long, value_name = "RATING")]
        min_rating: Option<f64>,
    },

    /// List movies filtered by minimum average rating
    Movies {
        /// Minimum average rating, inclusive (0 disables the filter)
        #[arg(long, value_name = "RATING")]
        min_rating: Option<f64>,
    },

    /// Rate a video or episode by title
    #[command(long_about = "Look the title up case-insensitively against videos first, then episodes, and append the rating (1-5). The catalog is in-memory only, so the new average is informational.")]
    Rate {
        /// Video or episode title (case-insensitive)
        title: String,

        /// Rating value (1-5)
        rating: i32,
    },

    /// Interactive menu over a single in-memory catalog
    #[command(long_about = "Run the interactive console menu: load a catalog file, browse filtered listings, and rate titles, all against one in-memory catalog that persists across menu actions.")]
    Menu,

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the current configuration
    Show,

    /// Set the default catalog file
    SetFile {
        /// Path used when commands are run without --file
        path: PathBuf,
    },

    /// Set the default minimum-rating threshold for listings
    SetMinRating {
        /// Threshold in 0-5 (0 disables the filter)
        min_rating: f64,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Load => load::run_load(cli.file, &output),
        Commands::List { min_rating, genre } => list::run_list(cli.file, min_rating, genre, &output),
        Commands::Episodes { series, min_rating } => {
            episodes::run_episodes(cli.file, &series, min_rating, &output)
        }
        Commands::Movies { min_rating } => movies::run_movies(cli.file, min_rating, &output),
        Commands::Rate { title, rating } => rate::run_rate(cli.file, &title, rating, &output),
        Commands::Menu => menu::run_menu(cli.file, &output),
        Commands::Config { cmd } => {
            config::run_config(cmd.unwrap_or(ConfigCommands::Show), &output)
        }
    }
}
