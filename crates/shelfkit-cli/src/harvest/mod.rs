//! `harvest` command: search → scrape → export.
//!
//! Stages communicate only through files on disk, so each can be re-run on
//! its own. Per-page failures during scraping are logged and skipped; every
//! other failure aborts the run.

mod scrape;
mod search;

use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use shelfkit_core::{AppConfig, RunConfig};

/// Counts reported at the end of a harvest run.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct HarvestSummary {
    pub identifiers: usize,
    pub searched: usize,
    pub scraped_items: usize,
    pub scraped_pages: usize,
    pub exported_rows: Option<usize>,
}

impl HarvestSummary {
    pub(crate) fn print(&self) {
        println!("{} GTIN numbers found", self.identifiers);
        println!("searched: {}", self.searched);
        println!(
            "scraped: {} items, {} pages with product data",
            self.scraped_items, self.scraped_pages
        );
        match self.exported_rows {
            Some(rows) => println!("exported: {rows} rows"),
            None => println!("exported: skipped"),
        }
    }
}

/// Runs the enabled harvest stages in order.
///
/// # Errors
///
/// Returns an error if the input spreadsheet cannot be read, a search
/// request fails, a cache file cannot be read or written, or the export
/// fails.
pub(crate) async fn run_harvest(
    config: &AppConfig,
    run: &RunConfig,
) -> anyhow::Result<HarvestSummary> {
    let mut summary = HarvestSummary::default();

    let identifiers = if run.stages.search || run.stages.scrape {
        shelfkit_sheet::read_identifiers(&run.input_path, &run.barcode_column)
            .with_context(|| format!("failed to read items from {}", run.input_path.display()))?
    } else {
        Vec::new()
    };
    summary.identifiers = identifiers.len();
    tracing::info!(count = identifiers.len(), "GTIN numbers found");

    if run.stages.search {
        summary.searched = search::run_search(config, run, &identifiers).await?;
    }

    if run.stages.scrape {
        let totals = scrape::run_scrape(config, run, &identifiers).await?;
        summary.scraped_items = totals.items;
        summary.scraped_pages = totals.pages;
    }

    if run.stages.export {
        let rows = shelfkit_sheet::export(&run.json_dir, &run.output_path).with_context(|| {
            format!(
                "failed to export {} to {}",
                run.json_dir.display(),
                run.output_path.display()
            )
        })?;
        summary.exported_rows = Some(rows);
    }

    Ok(summary)
}

/// Writes `value` as pretty-printed JSON.
pub(super) fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let body = serde_json::to_string_pretty(value)?;
    std::fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
#[path = "harvest_test.rs"]
mod tests;
