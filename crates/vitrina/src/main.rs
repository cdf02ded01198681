//! Vitrina CLI - Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod loader;

#[derive(Parser)]
#[command(name = "vitrina")]
#[command(version)]
#[command(about = "Bind content documents into static marketing pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a page template against a content directory
    Render {
        /// Page template file
        #[arg(long)]
        page: PathBuf,

        /// Directory holding the content documents
        #[arg(long)]
        content: PathBuf,

        /// Write output to FILE (stdout when omitted)
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,

        /// Override the page language bound to the root element
        #[arg(long)]
        lang: Option<String>,
    },

    /// Validate the content documents and print findings
    Check {
        /// Directory holding the content documents
        #[arg(long)]
        content: PathBuf,

        /// Exit non-zero when findings exist
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrina=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            page,
            content,
            out,
            lang,
        } => commands::render::execute(&page, &content, out.as_deref(), lang).await,
        Commands::Check { content, strict } => commands::check::execute(&content, strict).await,
    }
}
