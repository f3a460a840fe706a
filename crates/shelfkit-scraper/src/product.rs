//! Turns a product page into a keyword-filtered [`ProductRecord`].

use serde_json::Value;
use shelfkit_core::ProductRecord;

use crate::error::ScraperError;
use crate::flatten::{flatten, FlatRecord};
use crate::jsonld::find_typed_node;
use crate::page::PageClient;

/// Keeps the entries of `flat` whose lowercased key contains any of
/// `keywords`, with values rendered as HTML-unescaped text.
#[must_use]
pub fn filter_record(flat: &FlatRecord, keywords: &[String]) -> ProductRecord {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    flat.iter()
        .filter(|(key, _)| {
            let lower = key.to_lowercase();
            keywords.iter().any(|k| lower.contains(k.as_str()))
        })
        .map(|(key, value)| {
            let text = value_text(value);
            (
                key.clone(),
                html_escape::decode_html_entities(&text).into_owned(),
            )
        })
        .collect()
}

/// Renders a flattened scalar as cell text.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Extracts the `tag`-typed JSON-LD node from `html`, flattens it, and keeps
/// the keyword fields. Pages without a matching node yield an empty record.
#[must_use]
pub fn extract_product(html: &str, tag: &str, keywords: &[String]) -> ProductRecord {
    find_typed_node(html, tag)
        .map(|node| filter_record(&flatten(&node), keywords))
        .unwrap_or_default()
}

/// Fetches `url` and extracts its product record.
///
/// # Errors
///
/// Returns [`ScraperError::Http`] when the page cannot be fetched. Callers in
/// the harvest pipeline treat that as "no data for this URL".
pub async fn scrape_product_page(
    client: &PageClient,
    url: &str,
    tag: &str,
    keywords: &[String],
) -> Result<ProductRecord, ScraperError> {
    let html = client.fetch_html(url).await?;
    Ok(extract_product(&html, tag, keywords))
}
