use indexmap::IndexMap;

/// Keyword-filtered product fields scraped from one page, in the order they
/// appeared in the page's structured data. Values are plain text.
pub type ProductRecord = IndexMap<String, String>;

/// Everything scraped for one item identifier: page URL → product record.
///
/// This is the shape of each `<json_dir>/<identifier>.json` file.
pub type ItemProducts = IndexMap<String, ProductRecord>;
