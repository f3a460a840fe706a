//! `<meta>` tag extraction.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

static META_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b([^>]*)>").expect("valid meta tag regex"));

static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>/]+))"#)
        .expect("valid attribute regex")
});

/// Collects `<meta property=… content=…>` and `<meta name=… content=…>`
/// pairs from a page.
///
/// `property` entries come first, then `name` entries; a `name` entry
/// replaces a `property` entry with the same key. Tags without a `content`
/// attribute are ignored. Attribute values are HTML-unescaped.
#[must_use]
pub fn extract_meta_tags(html: &str) -> IndexMap<String, String> {
    let mut properties = IndexMap::new();
    let mut names = IndexMap::new();

    for cap in META_RE.captures_iter(html) {
        let attrs = parse_attributes(cap.get(1).map_or("", |m| m.as_str()));
        let Some(content) = attrs.get("content") else {
            continue;
        };
        if let Some(property) = attrs.get("property") {
            properties.insert(property.clone(), content.clone());
        }
        if let Some(name) = attrs.get("name") {
            names.insert(name.clone(), content.clone());
        }
    }

    properties.extend(names);
    properties
}

fn parse_attributes(raw: &str) -> IndexMap<String, String> {
    ATTR_RE
        .captures_iter(raw)
        .filter_map(|cap| {
            let key = cap.get(1)?.as_str().to_ascii_lowercase();
            let value = cap
                .get(2)
                .or_else(|| cap.get(3))
                .or_else(|| cap.get(4))
                .map_or("", |m| m.as_str());
            Some((key, html_escape::decode_html_entities(value).into_owned()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_property_and_name_tags() {
        let html = r#"
            <meta property="og:title" content="Widget &amp; Co">
            <meta name="description" content="A widget">
            <meta charset="utf-8">
        "#;
        let tags = extract_meta_tags(html);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags["og:title"], "Widget & Co");
        assert_eq!(tags["description"], "A widget");
    }

    #[test]
    fn name_overrides_property_with_same_key() {
        let html = r#"<meta property="title" content="from property">
                      <meta name="title" content="from name">"#;
        let tags = extract_meta_tags(html);
        assert_eq!(tags["title"], "from name");
    }

    #[test]
    fn tags_without_content_are_skipped() {
        let html = r#"<meta name="viewport"><meta property="og:type" content='product'/>"#;
        let tags = extract_meta_tags(html);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags["og:type"], "product");
    }

    #[test]
    fn unquoted_attributes_are_read() {
        let tags = extract_meta_tags("<meta name=robots content=noindex>");
        assert_eq!(tags["robots"], "noindex");
    }
}
