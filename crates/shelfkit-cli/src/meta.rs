//! `meta` command: dump a page's `<meta>` tags.

use shelfkit_scraper::{extract_meta_tags, PageClient};

pub(crate) async fn run_meta(
    config: &shelfkit_core::AppConfig,
    url: &str,
) -> anyhow::Result<()> {
    let client = PageClient::new(&config.user_agent)?;
    let html = client.fetch_html(url).await?;
    let tags = extract_meta_tags(&html);
    tracing::debug!(url, count = tags.len(), "extracted meta tags");
    println!("{}", serde_json::to_string_pretty(&tags)?);
    Ok(())
}
