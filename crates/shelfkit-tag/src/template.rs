//! Fixed coordinate tables for the two tag styles.

use crate::error::TagError;

/// Canvas position in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

const fn pt(x: i32, y: i32) -> Point {
    Point { x, y }
}

/// Layout parameters for one named field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Single text run. `at` is the text baseline start.
    Text { at: Point, font_size: u32 },
    /// Bullet list alternating between two columns.
    Columns {
        left: Point,
        right: Point,
        font_size: u32,
    },
    /// Horizontal rule.
    Rule { from: Point, to: Point },
}

const fn text(x: i32, y: i32, font_size: u32) -> Slot {
    Slot::Text {
        at: pt(x, y),
        font_size,
    }
}

#[derive(Debug)]
pub struct Template {
    slots: &'static [(&'static str, Slot)],
}

impl Template {
    #[must_use]
    pub fn slot(&self, field: &str) -> Option<Slot> {
        self.slots
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, slot)| *slot)
    }

    /// Position and font size of a text slot.
    #[must_use]
    pub fn text_slot(&self, field: &str) -> Option<(Point, u32)> {
        match self.slot(field)? {
            Slot::Text { at, font_size } => Some((at, font_size)),
            _ => None,
        }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots.iter().map(|(name, _)| *name)
    }
}

// "desc_line 3" (with a space) is the field name existing records use.
static STANDARD: Template = Template {
    slots: &[
        ("price", text(470, 360, 142)),
        ("product_number", text(75, 60, 60)),
        ("desc_line_1", text(50, 90, 35)),
        ("desc_line_2", text(50, 125, 35)),
        ("desc_line 3", text(50, 160, 35)),
        ("date", text(635, 365, 8)),
        (
            "description_extra",
            Slot::Columns {
                left: pt(65, 180),
                right: pt(385, 180),
                font_size: 15,
            },
        ),
        ("eco_fee", text(50, 360, 20)),
        ("extra", text(50, 335, 20)),
        ("price_per_line_1", text(50, 260, 16)),
        ("price_per", text(50, 300, 40)),
        ("unit_per", text(131, 260, 16)),
        ("sell_price", text(560, 258, 15)),
    ],
};

static DISCOUNT: Template = Template {
    slots: &[
        ("price", text(470, 360, 142)),
        ("product_number", text(75, 60, 60)),
        ("desc_line_1", text(50, 90, 35)),
        ("desc_line_2", text(50, 125, 35)),
        ("desc_line 3", text(50, 160, 35)),
        ("date", text(635, 365, 8)),
        ("price_per_line_1", text(50, 314, 10)),
        ("price_per", text(50, 348, 30)),
        ("discount", text(570, 242, 45)),
        ("original_price", text(570, 200, 45)),
        ("expiry", text(300, 242, 15)),
        ("eco_fee", text(185, 360, 12)),
        ("savings", text(50, 242, 20)),
        (
            "line",
            Slot::Rule {
                from: pt(50, 244),
                to: pt(665, 244),
            },
        ),
        ("register", text(465, 260, 15)),
        ("unit_per", text(50, 323, 10)),
    ],
};

/// The closed set of tag layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStyle {
    /// Regular shelf price with room for extra description bullets.
    Standard,
    /// Sale tag: original price, instant savings, and a price-at-register
    /// headline.
    Discount,
}

impl TagStyle {
    /// Maps the numeric style flag (1 or 2) to a style.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::InvalidStyle`] for any other value.
    pub fn from_flag(flag: i64) -> Result<Self, TagError> {
        match flag {
            1 => Ok(Self::Standard),
            2 => Ok(Self::Discount),
            other => Err(TagError::InvalidStyle(other)),
        }
    }

    #[must_use]
    pub fn flag(self) -> i64 {
        match self {
            Self::Standard => 1,
            Self::Discount => 2,
        }
    }

    #[must_use]
    pub fn template(self) -> &'static Template {
        match self {
            Self::Standard => &STANDARD,
            Self::Discount => &DISCOUNT,
        }
    }

    /// Heading drawn above the price, and the slot it goes in.
    #[must_use]
    pub fn price_heading(self) -> (&'static str, &'static str) {
        match self {
            Self::Standard => ("SELL PRICE", "sell_price"),
            Self::Discount => ("PRICE AT REGISTER", "register"),
        }
    }
}

impl std::fmt::Display for TagStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagStyle::Standard => write!(f, "standard"),
            TagStyle::Discount => write!(f, "discount"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_round_trip() {
        assert_eq!(TagStyle::from_flag(1).unwrap(), TagStyle::Standard);
        assert_eq!(TagStyle::from_flag(2).unwrap(), TagStyle::Discount);
        assert_eq!(TagStyle::Discount.flag(), 2);
    }

    #[test]
    fn unknown_flag_rejected() {
        let err = TagStyle::from_flag(3).unwrap_err();
        assert!(matches!(err, TagError::InvalidStyle(3)));
    }

    #[test]
    fn discount_only_fields_absent_from_standard() {
        let standard = TagStyle::Standard.template();
        for field in ["discount", "original_price", "register", "savings", "line", "expiry"] {
            assert!(standard.slot(field).is_none(), "{field} leaked into standard");
        }
    }

    #[test]
    fn shared_fields_differ_where_expected() {
        let standard = TagStyle::Standard.template();
        let discount = TagStyle::Discount.template();
        assert_eq!(standard.text_slot("price"), discount.text_slot("price"));
        assert_eq!(standard.text_slot("eco_fee"), Some((pt(50, 360), 20)));
        assert_eq!(discount.text_slot("eco_fee"), Some((pt(185, 360), 12)));
    }

    #[test]
    fn heading_slots_exist_in_their_templates() {
        for style in [TagStyle::Standard, TagStyle::Discount] {
            let (_, slot) = style.price_heading();
            assert!(style.template().text_slot(slot).is_some());
        }
    }

    #[test]
    fn rule_is_not_a_text_slot() {
        assert!(TagStyle::Discount.template().text_slot("line").is_none());
    }
}
