//! schema.org JSON-LD lookup in raw page HTML.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<script\b[^>]*\stype\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script>"#)
        .expect("valid json-ld script regex")
});

/// Finds the first JSON-LD node whose `@type` is `tag`.
///
/// Every `<script type="application/ld+json">` block is considered in page
/// order. A block may hold a single object, an array of objects, or an object
/// wrapping its nodes in `@graph`. Blocks that are not valid JSON are skipped.
/// Returns `None` when no node matches.
#[must_use]
pub fn find_typed_node(html: &str, tag: &str) -> Option<Map<String, Value>> {
    for cap in SCRIPT_RE.captures_iter(html) {
        let raw = cap.get(1).map_or("", |m| m.as_str()).trim();
        if raw.is_empty() {
            continue;
        }
        let Ok(value) = serde_json::from_str::<Value>(raw) else {
            tracing::debug!(tag, "skipping malformed json-ld block");
            continue;
        };

        let candidates = match value {
            Value::Array(items) => items,
            other => vec![other],
        };

        for candidate in candidates {
            if let Some(node) = search_node(candidate, tag) {
                return Some(node);
            }
        }
    }

    None
}

/// Checks a top-level node and, when present, its `@graph` members.
fn search_node(node: Value, tag: &str) -> Option<Map<String, Value>> {
    let Value::Object(mut map) = node else {
        return None;
    };

    if let Some(Value::Array(graph)) = map.remove("@graph") {
        return graph.into_iter().find_map(|member| match member {
            Value::Object(m) if type_matches(m.get("@type"), tag) => Some(m),
            _ => None,
        });
    }

    type_matches(map.get("@type"), tag).then_some(map)
}

/// `@type` may be a plain string or an array of strings.
fn type_matches(node_type: Option<&Value>, tag: &str) -> bool {
    match node_type {
        Some(Value::String(s)) => s == tag,
        Some(Value::Array(values)) => values.iter().filter_map(Value::as_str).any(|s| s == tag),
        _ => false,
    }
}
