//! Collapses nested JSON-LD objects into a single-level record.

use serde_json::{Map, Value};

/// Single-level view of a structured-data object. Keys are the `_`-joined
/// path of enclosing keys; values are always scalars.
pub type FlatRecord = Map<String, Value>;

/// Flattens `object` into a [`FlatRecord`].
///
/// A nested object is treated as a one-element list. Each object inside a
/// list is flattened and written under `<key>_<subkey>`, so when several
/// elements produce the same derived key the last one wins (the key keeps the
/// position of its first insertion). List elements that are not objects are
/// skipped, which means a list of plain strings disappears entirely.
///
/// ```
/// use serde_json::json;
/// use shelfkit_scraper::flatten;
///
/// let input = json!({"offers": [{"price": "1.00"}, {"price": "2.00"}]});
/// let flat = flatten(input.as_object().unwrap());
/// assert_eq!(flat["offers_price"], "2.00");
/// ```
#[must_use]
pub fn flatten(object: &Map<String, Value>) -> FlatRecord {
    let mut out = FlatRecord::new();
    for (key, value) in object {
        match value {
            Value::Object(child) => merge_child(&mut out, key, child),
            Value::Array(items) => {
                for item in items {
                    if let Value::Object(child) = item {
                        merge_child(&mut out, key, child);
                    }
                }
            }
            scalar => {
                out.insert(key.clone(), scalar.clone());
            }
        }
    }
    out
}

fn merge_child(out: &mut FlatRecord, parent: &str, child: &Map<String, Value>) {
    for (sub_key, value) in flatten(child) {
        out.insert(format!("{parent}_{sub_key}"), value);
    }
}

#[cfg(test)]
#[path = "flatten_test.rs"]
mod tests;
