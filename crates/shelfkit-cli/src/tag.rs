//! `tag` command: render one price tag from a JSON record.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Context;
use shelfkit_tag::{write_tag, TagRecord, TagStyle};

pub(crate) fn run_tag(input: &Path, style: i64, output: &Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read tag record {}", input.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("tag record {} is not valid JSON", input.display()))?;
    let record = TagRecord::from_json(&value)?;
    let style = TagStyle::from_flag(style)?;

    let template = style.template();
    let unused: Vec<&str> = record
        .iter()
        .map(|(field, _)| field)
        .filter(|field| !template.field_names().any(|name| name == *field))
        .collect();
    if !unused.is_empty() {
        tracing::warn!(%style, fields = ?unused, "fields have no slot in this style");
    }

    let path = svg_path(output);
    let count = write_tag(&path, &record, style)?;
    println!("wrote {} ({count} elements)", path.display());
    Ok(())
}

/// Appends `.svg` unless the name already ends with it.
fn svg_path(output: &Path) -> PathBuf {
    if output
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
    {
        return output.to_path_buf();
    }
    let mut name = OsString::from(output.as_os_str());
    name.push(".svg");
    PathBuf::from(name)
}
