//! Column clean-up for the product spreadsheet.

use indexmap::IndexMap;
use serde_json::Value;

use crate::table::Table;

/// Identifier column, always first.
pub const GTIN_COLUMN: &str = "GTIN";
/// Page URL column, always second.
pub const URL_COLUMN: &str = "URL";

/// Columns that carry no useful product information. Matched exactly.
pub const DENIED_COLUMNS: &[&str] = &[
    "offers_priceValidUntil",
    "image_width",
    "image_height",
    "offers_priceSpecification_priceCurrency",
    "offers_priceSpecification_@type",
    "offers_priceSpecification_valueAddedTaxIncluded",
    "alternateName",
    "image_@type",
    "category_name",
    "breadcrumbs_itemListElement_name",
    "offers_seller_name",
    "offers_priceSpecification_@context",
    "image_name",
    "image_caption",
    "brand_name",
    "additionalProperty_name",
    "manufacturer_name",
    "offers_availabilityStarts",
    "offers_availabilityEnds",
    "offers_priceCurrency",
    "review_author_name",
    "Brand_name",
    "review_name",
    "review_description",
    "aggregateRating_reviewCount",
    "review_@type",
    "review_reviewRating_@type",
    "review_reviewRating_ratingValue",
    "review_author_@type",
    "review_datePublished",
    "review_reviewBody",
    "review",
    "review_author",
    "review_reviewRating_worstRating",
    "review_reviewRating_bestRating",
];

/// Differently named columns holding the same fact.
///
/// `aliases` are lowercase and matched against lowercased column names.
#[derive(Debug, Clone, Copy)]
pub struct AliasGroup {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

/// Applied in order. Within a group, earlier aliases take priority.
pub const ALIAS_GROUPS: &[AliasGroup] = &[
    AliasGroup {
        canonical: "image",
        aliases: &[
            "image_url",
            "image_image",
            "offers_image",
            "image_@id",
            "offers_image_@id",
            "offers_itemoffered_image",
        ],
    },
    AliasGroup {
        canonical: "description",
        aliases: &["offers_description"],
    },
    AliasGroup {
        canonical: "price",
        aliases: &[
            "offers_pricespecification_price",
            "offers_price",
            "offers_lowprice",
            "offers_highprice",
            "offers_pricespecification",
        ],
    },
    AliasGroup {
        canonical: "name",
        aliases: &["offers_name"],
    },
    AliasGroup {
        canonical: "availability",
        aliases: &["offers_availability"],
    },
    AliasGroup {
        canonical: "MPN",
        aliases: &["offers_mpn", "mpn"],
    },
];

/// Builds one row per scraped URL. `items` pairs an identifier with that
/// item's `{url: {field: value}}` data; null values are left missing.
#[must_use]
pub fn build_table(items: &[(String, IndexMap<String, IndexMap<String, Value>>)]) -> Table {
    let mut table = Table::new();
    table.add_column(GTIN_COLUMN);
    table.add_column(URL_COLUMN);

    for (identifier, pages) in items {
        for (url, fields) in pages {
            let mut row = IndexMap::with_capacity(fields.len() + 2);
            row.insert(GTIN_COLUMN.to_owned(), identifier.clone());
            row.insert(URL_COLUMN.to_owned(), url.clone());
            for (key, value) in fields {
                match value {
                    Value::Null => {}
                    Value::String(s) => {
                        row.insert(key.clone(), s.clone());
                    }
                    other => {
                        row.insert(key.clone(), other.to_string());
                    }
                }
            }
            table.push_row(row);
        }
    }

    table
}

/// Drops [`DENIED_COLUMNS`] and folds every [`ALIAS_GROUPS`] entry into its
/// canonical column.
pub fn reconcile(table: &mut Table) {
    for column in DENIED_COLUMNS {
        table.drop_column(column);
    }
    for group in ALIAS_GROUPS {
        merge_aliases(table, group);
    }
}

/// Folds the group's alias columns into `group.canonical`, then drops them.
///
/// Per row, the first non-empty value wins: the canonical column's own value,
/// then each alias in group order. Empty cells count as gaps. A missing canonical column is created
/// (appended) when at least one alias column exists.
pub fn merge_aliases(table: &mut Table, group: &AliasGroup) {
    let mut sources: Vec<String> = Vec::new();
    for alias in group.aliases {
        for column in table.columns() {
            if column != group.canonical
                && column.to_lowercase() == *alias
                && !sources.contains(column)
            {
                sources.push(column.clone());
            }
        }
    }

    if sources.is_empty() {
        return;
    }

    table.add_column(group.canonical);
    for row in table.rows_mut() {
        if row.get(group.canonical).is_some_and(|v| !v.is_empty()) {
            continue;
        }
        if let Some(value) = sources
            .iter()
            .find_map(|s| row.get(s).filter(|v| !v.is_empty()))
            .cloned()
        {
            row.insert(group.canonical.to_owned(), value);
        }
    }

    for source in &sources {
        table.drop_column(source);
    }
}

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod tests;
