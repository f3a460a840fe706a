//! Price-tag rendering: a product record plus a [`TagStyle`] becomes a list
//! of positioned drawing [`Element`]s, serialized as SVG.

pub mod error;
pub mod layout;
pub mod record;
pub mod svg;
pub mod template;

use std::path::Path;

pub use error::TagError;
pub use layout::{layout, Element, FontFamily, FontWeight};
pub use record::{TagRecord, TagValue};
pub use svg::{render_svg, write_svg};
pub use template::{Point, Slot, TagStyle, Template};

/// Lays out `record` with `style` and writes the SVG to `path`. Returns the
/// number of elements drawn.
///
/// # Errors
///
/// Returns [`TagError`] if serialization or the file write fails.
pub fn write_tag(path: &Path, record: &TagRecord, style: TagStyle) -> Result<usize, TagError> {
    let elements = layout(record, style);
    write_svg(path, &elements)?;
    tracing::info!(
        path = %path.display(),
        style = %style,
        elements = elements.len(),
        "wrote price tag"
    );
    Ok(elements.len())
}
