//! Positions a [`TagRecord`] on a tag according to its style's template.

use crate::record::{TagRecord, TagValue};
use crate::template::{Point, Slot, TagStyle, Template};

/// Horizontal shift per integer digit of the headline price.
const PRICE_DIGIT_WIDTH: i32 = 70;
/// Horizontal shift per integer digit of the discount figures.
const DISCOUNT_DIGIT_WIDTH: i32 = 15;
/// Vertical spacing between description bullets.
const BULLET_STEP: i32 = 9;

const PRICE_PER_LABEL: &str = "PRICE PER";
const SAVINGS_LABEL: &str = "Instant Savings";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

impl FontWeight {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Serif,
    SansSerif,
}

impl FontFamily {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FontFamily::Serif => "serif",
            FontFamily::SansSerif => "sans-serif",
        }
    }
}

/// One drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text {
        text: String,
        at: Point,
        font_size: u32,
        weight: FontWeight,
        family: FontFamily,
    },
    Line {
        from: Point,
        to: Point,
        stroke_width: f32,
    },
    Rect {
        at: Point,
        width: i32,
        height: i32,
        stroke_width: f32,
    },
}

impl Element {
    fn text(text: impl Into<String>, at: Point, font_size: u32) -> Self {
        Element::Text {
            text: text.into(),
            at,
            font_size,
            weight: FontWeight::Normal,
            family: FontFamily::Serif,
        }
    }

    fn styled(mut self, weight: FontWeight, family: FontFamily) -> Self {
        if let Element::Text {
            weight: w,
            family: f,
            ..
        } = &mut self
        {
            *w = weight;
            *f = family;
        }
        self
    }
}

/// Lays out every record field that has a non-empty value and a slot in the
/// style's template, in record order.
///
/// Fields whose value does not fit their slot (a list for a text slot, text
/// for the bullet list, anything for a rule) are skipped.
#[must_use]
pub fn layout(record: &TagRecord, style: TagStyle) -> Vec<Element> {
    let template = style.template();
    let mut out = Vec::new();

    for (field, value) in record.iter() {
        if value.is_empty() {
            continue;
        }
        let Some(slot) = template.slot(field) else {
            continue;
        };

        match (slot, value) {
            (Slot::Text { at, font_size }, TagValue::Text(text)) => {
                layout_text_field(&mut out, template, style, field, text, at, font_size);
            }
            (
                Slot::Columns {
                    left,
                    right,
                    font_size,
                },
                TagValue::List(items),
            ) => layout_bullets(&mut out, items, left, right, font_size),
            _ => tracing::debug!(field, "value does not fit its slot; skipping"),
        }
    }

    out
}

fn layout_text_field(
    out: &mut Vec<Element>,
    template: &Template,
    style: TagStyle,
    field: &str,
    text: &str,
    at: Point,
    font_size: u32,
) {
    let value = match field {
        "price" => {
            let (heading, slot) = style.price_heading();
            push_label(out, template, slot, heading);
            Element::text(text, shift_left(at, text, PRICE_DIGIT_WIDTH), font_size)
                .styled(FontWeight::Bold, FontFamily::Serif)
        }
        "price_per" => {
            if style == TagStyle::Discount {
                out.push(Element::Rect {
                    at: Point { x: 45, y: 305 },
                    width: 100,
                    height: 46,
                    stroke_width: 0.5,
                });
                out.push(Element::Line {
                    from: Point { x: 45, y: 325 },
                    to: Point { x: 145, y: 325 },
                    stroke_width: 0.5,
                });
            }
            push_label(out, template, "price_per_line_1", PRICE_PER_LABEL);
            Element::text(text, at, font_size)
        }
        "discount" => {
            if let Some(Slot::Rule { from, to }) = template.slot("line") {
                out.push(Element::Line {
                    from,
                    to,
                    stroke_width: 1.0,
                });
            }
            if let Some((label_at, label_size)) = template.text_slot("savings") {
                out.push(
                    Element::text(SAVINGS_LABEL, label_at, label_size)
                        .styled(FontWeight::Bold, FontFamily::SansSerif),
                );
            }
            Element::text(text, shift_left(at, text, DISCOUNT_DIGIT_WIDTH), font_size)
                .styled(FontWeight::Normal, FontFamily::SansSerif)
        }
        "original_price" => {
            Element::text(text, shift_left(at, text, DISCOUNT_DIGIT_WIDTH), font_size)
                .styled(FontWeight::Normal, FontFamily::SansSerif)
        }
        _ => Element::text(text, at, font_size),
    };
    out.push(value);
}

fn push_label(out: &mut Vec<Element>, template: &Template, slot: &str, label: &str) {
    if let Some((at, font_size)) = template.text_slot(slot) {
        out.push(Element::text(label, at, font_size));
    }
}

/// Moves `at` left by `digit_width` per character of the integer part of
/// `value`, so longer amounts stay right-aligned against the cents.
fn shift_left(at: Point, value: &str, digit_width: i32) -> Point {
    let integer_part = value.split('.').next().unwrap_or(value);
    let digits = i32::try_from(integer_part.chars().count()).unwrap_or(i32::MAX);
    Point {
        x: at.x.saturating_sub(digits.saturating_mul(digit_width)),
        y: at.y,
    }
}

/// Even-indexed bullets go in the left column, odd-indexed in the right.
fn layout_bullets(
    out: &mut Vec<Element>,
    items: &[String],
    left: Point,
    right: Point,
    font_size: u32,
) {
    for (index, item) in items.iter().enumerate() {
        let step = i32::try_from(index)
            .unwrap_or(i32::MAX)
            .saturating_mul(BULLET_STEP);
        let at = if index % 2 == 1 {
            Point {
                x: right.x,
                y: right.y + step - BULLET_STEP,
            }
        } else {
            Point {
                x: left.x,
                y: left.y + step,
            }
        };
        out.push(Element::text(format!("\u{2022} {item}"), at, font_size));
    }
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
