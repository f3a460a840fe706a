use anyhow::Context;
use shelfkit_core::{AppConfig, ItemProducts, RunConfig};
use shelfkit_scraper::{extract_result_urls, scrape_product_page, PageClient};

use super::write_json;

#[derive(Debug, Default)]
pub(super) struct ScrapeTotals {
    pub items: usize,
    pub pages: usize,
}

/// Scrapes the cached search results of each identifier (up to
/// `run.scrape_limit`) and writes one product file per identifier.
pub(super) async fn run_scrape(
    config: &AppConfig,
    run: &RunConfig,
    identifiers: &[String],
) -> anyhow::Result<ScrapeTotals> {
    let client = PageClient::new(&config.user_agent)?;
    std::fs::create_dir_all(&run.json_dir)
        .with_context(|| format!("failed to create {}", run.json_dir.display()))?;

    let limit = run.scrape_limit.unwrap_or(identifiers.len());
    let mut totals = ScrapeTotals::default();

    for identifier in identifiers.iter().take(limit) {
        tracing::info!(identifier = %identifier, "scraping");

        let serp_path = run.serp_file(identifier);
        let raw = std::fs::read_to_string(&serp_path)
            .with_context(|| format!("failed to read {}", serp_path.display()))?;
        let response: serde_json::Value = serde_json::from_str(&raw)
            .with_context(|| format!("{} is not valid JSON", serp_path.display()))?;

        let urls = extract_result_urls(&response, run.max_urls);
        let products = scrape_urls(&client, run, &urls).await;

        totals.items += 1;
        totals.pages += products.len();
        write_json(&run.item_file(identifier), &products)?;
    }

    Ok(totals)
}

/// Pages that fail to load or carry no product data are left out.
async fn scrape_urls(client: &PageClient, run: &RunConfig, urls: &[String]) -> ItemProducts {
    let mut products = ItemProducts::new();

    for url in urls {
        match scrape_product_page(client, url, &run.target_type, &run.keywords).await {
            Ok(record) if record.is_empty() => {
                tracing::debug!(url = %url, "no product data");
            }
            Ok(record) => {
                products.insert(url.clone(), record);
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "skipping page");
            }
        }
    }

    products
}
