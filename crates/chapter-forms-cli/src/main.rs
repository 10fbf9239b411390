mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use chapter_forms::FormConfig;

#[derive(Parser)]
#[command(name = "chapter-forms")]
#[command(version, about = "Chapter application forms - check, render and scaffold drafts", long_about = None)]
struct Cli {
    /// Config file (defaults to ./chapter-forms.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a draft application saved as JSON
    Check {
        /// Draft file
        draft: PathBuf,
    },

    /// Render the form as HTML
    Render {
        /// Draft file to prefill the form with (optional)
        draft: Option<PathBuf>,

        /// Validate first and show the messages inline
        #[arg(long)]
        validate: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a blank draft with four member blocks
    Template,
}

fn main() -> Result<()> {
    // Logs go to stderr so JSON and HTML output stay clean
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    // Parse CLI arguments
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => FormConfig::load(path)?,
        None => FormConfig::load_default()?,
    };

    // Execute command
    match cli.command {
        Commands::Check { draft } => {
            commands::check::execute(&draft, &config)?;
        }
        Commands::Render {
            draft,
            validate,
            output,
        } => {
            commands::render::execute(draft.as_deref(), validate, output.as_deref(), &config)?;
        }
        Commands::Template => {
            commands::template::execute()?;
        }
    }

    Ok(())
}
