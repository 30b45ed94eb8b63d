//! Invierte CLI
//!
//! Command-line browser for public-investment project records: a
//! searchable listing, a per-investment detail card, and a bar-chart
//! aggregation view, each backed by one GET against the remote API.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::Parser;
use invierte_client::ProjectsClient;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

/// Invierte - public-investment project browser
#[derive(Parser, Debug)]
#[command(name = "invierte")]
#[command(about = "Consulta de proyectos de inversión pública", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Base URL of the projects API (overrides the config file)
    #[arg(long, env = "INVIERTE_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// List projects, optionally filtered by a search term
    List {
        /// Search term matched against name, function, executing entity,
        /// department, province and investment state
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show the detail card for one investment code
    Show {
        /// Unique investment code
        code: String,
        /// Expand the responsables, entidades and finanzas sections
        #[arg(short, long)]
        full: bool,
    },
    /// Chart categorical field counts for one investment code
    Chart {
        /// Unique investment code
        code: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = CliConfig::load(args.config.as_deref())?;
    let base_url = args.api_url.unwrap_or(config.api.base_url);
    let client = ProjectsClient::new(base_url)?;

    match args.command {
        Command::List { search } => commands::list(&client, search.as_deref()).await,
        Command::Show { code, full } => commands::show(&client, &code, full).await,
        Command::Chart { code } => commands::chart(&client, &code).await,
    }
}
