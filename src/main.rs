mod error;
mod parser;
mod platform;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::platform::Platform;

#[derive(Parser)]
#[command(
    name = "statement_scraper",
    about = "Pull competitive-programming problem statements out of saved judge pages"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the canonical statement text from a saved problem page
    Extract {
        /// Saved HTML of the problem page
        file: PathBuf,
        /// URL the page was saved from (selects the extractor)
        #[arg(short, long)]
        url: String,
        /// Dump the structured document as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Show which judge a URL belongs to and whether it looks like a problem page
    Detect {
        url: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract { file, url, json } => {
            let html = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            if json {
                let doc = parser::extract_document(&url, &html)?;
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                let text = parser::extract_statement(&url, &html)?;
                println!("{text}");
            }
            Ok(())
        }
        Commands::Detect { url } => {
            let platform = Platform::detect(&url);
            if platform == Platform::Unsupported {
                println!("{}", platform.name());
            } else if Platform::is_problem_page(&url) {
                println!("{} problem page", platform.name());
            } else {
                println!("{} (not a problem page)", platform.name());
            }
            Ok(())
        }
    }
}
