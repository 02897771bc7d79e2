//! Nav CLI - Campus navigator on the command line
//!
//! Loads a campus map (DOT file of walking times) and answers routing
//! questions: the shortest route between two locations and the location
//! that takes longest to reach.

use clap::{CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::*;
use config::NavConfig;
use output::{OutputConfig, OutputFormat};

/// Shortest walking routes across campus.
#[derive(Parser)]
#[command(name = "nav")]
#[command(author, version)]
#[command(about = "Shortest walking routes across campus")]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  nav locations                               List every location
  nav path \"Union South\" \"Memorial Union\"     Shortest route and travel time
  nav furthest \"Union South\"                  Location that takes longest to reach
  nav --format html path A B                  HTML fragment for the web front end")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Campus map to load (overrides config, defaults to campus.dot)
    #[arg(short, long, global = true, env = "NAV_GRAPH")]
    graph: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every location on the map
    #[command(visible_alias = "ls")]
    Locations,

    /// Shortest route between two locations
    #[command(visible_alias = "p")]
    Path {
        /// Starting location
        from: String,

        /// Destination
        to: String,
    },

    /// Location that takes longest to reach from a start
    #[command(visible_alias = "f")]
    Furthest {
        /// Starting location
        from: String,
    },

    /// Show size and shape of the loaded map
    Stats,

    /// Print the input form for a query
    Prompt {
        /// Query the form submits
        #[arg(value_enum)]
        kind: prompt::PromptKind,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: completions::Shell,

        /// Show installation instructions instead of generating completions
        #[arg(long)]
        instructions: bool,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration from .navrc.toml
    let root = Path::new(".");
    let config = NavConfig::load(root);

    // Resolve output format: CLI flag > config default > Table
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| match f.parse() {
                Ok(format) => Some(format),
                Err(e) => {
                    tracing::warn!("Ignoring output format from config: {}", e);
                    None
                }
            })
            .unwrap_or(OutputFormat::Table)
    });

    let output_config = OutputConfig::auto_detect_with_color_override(format, config.use_color())
        .with_compact(config.compact());
    colored::control::set_override(output_config.use_colors());

    let graph_file = config.graph_file(root, cli.graph.as_deref());

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            let _ = Cli::command().print_help();
            println!();
            return Ok(());
        }
    };

    match command {
        Commands::Locations => locations::run(&graph_file, &output_config),
        Commands::Path { from, to } => path::run(&graph_file, &from, &to, &output_config),
        Commands::Furthest { from } => furthest::run(&graph_file, &from, &output_config),
        Commands::Stats => stats::run(&graph_file, &output_config),
        Commands::Prompt { kind } => prompt::run(kind, &output_config),
        Commands::Completions {
            shell,
            instructions,
        } => {
            if instructions {
                completions::run_instructions(shell, &output_config)
            } else {
                let mut cmd = Cli::command();
                completions::generate_completions_with_cmd(shell, &mut cmd);
                Ok(())
            }
        }
    }
}
