//! SVG serialization for laid-out tag elements.

use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::TagError;
use crate::layout::Element;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const TEXT_FILL: &str = "rgb(15%,15%,15%)";
const STROKE: &str = "black";

/// Serializes `elements` into a standalone SVG document, drawn in order.
///
/// # Errors
///
/// Returns [`TagError::Svg`] if the XML writer fails.
pub fn render_svg(elements: &[Element]) -> Result<String, TagError> {
    let mut writer = Writer::new(Vec::new());

    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)),
    )?;
    emit(
        &mut writer,
        Event::Start(tag(
            "svg",
            &[
                ("xmlns", SVG_NS.to_owned()),
                ("version", "1.1".to_owned()),
                ("baseProfile", "full".to_owned()),
                ("width", "100%".to_owned()),
                ("height", "100%".to_owned()),
            ],
        )),
    )?;
    emit(&mut writer, Event::Empty(BytesStart::new("defs")))?;

    for element in elements {
        write_element(&mut writer, element)?;
    }

    emit(&mut writer, Event::End(BytesEnd::new("svg")))?;

    String::from_utf8(writer.into_inner()).map_err(|e| TagError::Svg(e.to_string()))
}

/// Renders `elements` and writes the document to `path`.
///
/// # Errors
///
/// Returns [`TagError::Svg`] on serialization failure and [`TagError::Io`]
/// if the file cannot be written.
pub fn write_svg(path: &Path, elements: &[Element]) -> Result<(), TagError> {
    let document = render_svg(elements)?;
    std::fs::write(path, document).map_err(|e| TagError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), TagError> {
    match element {
        Element::Text {
            text,
            at,
            font_size,
            weight,
            family,
        } => {
            emit(
                writer,
                Event::Start(tag(
                    "text",
                    &[
                        ("x", at.x.to_string()),
                        ("y", at.y.to_string()),
                        ("stroke", "none".to_owned()),
                        ("fill", TEXT_FILL.to_owned()),
                        ("font-size", format!("{font_size}px")),
                        ("font-weight", weight.as_str().to_owned()),
                        ("font-family", family.as_str().to_owned()),
                    ],
                )),
            )?;
            emit(writer, Event::Text(BytesText::new(text)))?;
            emit(writer, Event::End(BytesEnd::new("text")))
        }
        Element::Line {
            from,
            to,
            stroke_width,
        } => emit(
            writer,
            Event::Empty(tag(
                "line",
                &[
                    ("x1", from.x.to_string()),
                    ("y1", from.y.to_string()),
                    ("x2", to.x.to_string()),
                    ("y2", to.y.to_string()),
                    ("stroke", STROKE.to_owned()),
                    ("stroke-width", stroke_width.to_string()),
                ],
            )),
        ),
        Element::Rect {
            at,
            width,
            height,
            stroke_width,
        } => emit(
            writer,
            Event::Empty(tag(
                "rect",
                &[
                    ("x", at.x.to_string()),
                    ("y", at.y.to_string()),
                    ("width", width.to_string()),
                    ("height", height.to_string()),
                    ("stroke", STROKE.to_owned()),
                    ("fill", "none".to_owned()),
                    ("stroke-width", stroke_width.to_string()),
                ],
            )),
        ),
    }
}

fn tag(name: &str, attributes: &[(&str, String)]) -> BytesStart<'static> {
    let mut start = BytesStart::new(name.to_owned());
    for (key, value) in attributes {
        start.push_attribute((*key, value.as_str()));
    }
    start
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), TagError> {
    writer
        .write_event(event)
        .map_err(|e| TagError::Svg(e.to_string()))
}
