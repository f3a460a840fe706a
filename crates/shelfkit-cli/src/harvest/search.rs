use anyhow::Context;
use shelfkit_core::{AppConfig, RunConfig};
use shelfkit_scraper::SerpClient;

use super::write_json;

/// Queries the search API for every identifier and caches each raw
/// response. Returns the number of searches performed.
pub(super) async fn run_search(
    config: &AppConfig,
    run: &RunConfig,
    identifiers: &[String],
) -> anyhow::Result<usize> {
    let auth = config.require_serp_auth()?;
    let client =
        SerpClient::with_base_url(auth, config.request_timeout_secs, &config.serp_base_url)?;

    std::fs::create_dir_all(&run.serp_dir)
        .with_context(|| format!("failed to create {}", run.serp_dir.display()))?;

    for identifier in identifiers {
        tracing::info!(identifier = %identifier, "searching");
        let response = client
            .search(identifier)
            .await
            .with_context(|| format!("search failed for {identifier}"))?;
        write_json(&run.serp_file(identifier), &response)?;
    }

    Ok(identifiers.len())
}
