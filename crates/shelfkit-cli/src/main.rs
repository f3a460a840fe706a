mod harvest;
mod meta;
mod tag;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shelfkit_core::{AppConfig, ConfigError};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shelfkit")]
#[command(about = "Product data harvesting and price-tag rendering")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search, scrape, and export product data for every item in the input spreadsheet
    Harvest {
        /// Run configuration (YAML)
        #[arg(long, env = "SHELFKIT_RUN_CONFIG", default_value = "config/run.yaml")]
        config: PathBuf,

        /// Reuse cached search results instead of querying the search API
        #[arg(long)]
        skip_search: bool,

        /// Reuse cached product files instead of fetching pages
        #[arg(long)]
        skip_scrape: bool,

        /// Do not write the output spreadsheet
        #[arg(long)]
        skip_export: bool,
    },
    /// Render a price tag SVG from a JSON product record
    Tag {
        /// JSON object of field -> value
        #[arg(long)]
        input: PathBuf,

        /// 1 = standard, 2 = discount
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..=2))]
        style: i64,

        /// Output file; `.svg` is appended when missing
        #[arg(long)]
        output: PathBuf,
    },
    /// Print a page's meta tags as JSON
    Meta {
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // `tag` runs even when the environment settings are invalid.
    let config = shelfkit_core::load_app_config();
    let log_level = config.as_ref().map_or("info", |c| c.log_level.as_str());
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    run(cli.command, config).await
}

async fn run(command: Commands, config: Result<AppConfig, ConfigError>) -> anyhow::Result<()> {
    match command {
        Commands::Harvest {
            config: run_path,
            skip_search,
            skip_scrape,
            skip_export,
        } => {
            let config = config?;
            let mut run = shelfkit_core::load_run_config(&run_path)?;
            run.stages.search &= !skip_search;
            run.stages.scrape &= !skip_scrape;
            run.stages.export &= !skip_export;
            let summary = harvest::run_harvest(&config, &run).await?;
            summary.print();
        }
        Commands::Tag {
            input,
            style,
            output,
        } => tag::run_tag(&input, style, &output)?,
        Commands::Meta { url } => meta::run_meta(&config?, &url).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
