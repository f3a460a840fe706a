use indexmap::IndexMap;
use serde_json::Value;

use crate::error::TagError;

/// A field value on a price tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    Text(String),
    /// Only meaningful for `description_extra`.
    List(Vec<String>),
}

impl TagValue {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            TagValue::Text(s) => s.is_empty(),
            TagValue::List(items) => items.is_empty(),
        }
    }
}

/// Flat product record for a price tag, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRecord {
    fields: IndexMap<String, TagValue>,
}

impl TagRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: TagValue) {
        self.fields.insert(field.into(), value);
    }

    #[must_use]
    pub fn with_text(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, TagValue::Text(value.into()));
        self
    }

    #[must_use]
    pub fn with_list<I, S>(mut self, field: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(field, TagValue::List(items.into_iter().map(Into::into).collect()));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds a record from a JSON object.
    ///
    /// Strings, numbers, and booleans become text; arrays become lists of
    /// their scalar members. Nulls and nested objects are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::InvalidRecord`] if `value` is not an object.
    pub fn from_json(value: &Value) -> Result<Self, TagError> {
        let Value::Object(map) = value else {
            return Err(TagError::InvalidRecord(
                "expected a JSON object of field -> value".to_string(),
            ));
        };

        let mut record = Self::new();
        for (field, value) in map {
            match value {
                Value::Array(items) => {
                    record.insert(
                        field.as_str(),
                        TagValue::List(items.iter().filter_map(scalar_text).collect()),
                    );
                }
                other => {
                    if let Some(text) = scalar_text(other) {
                        record.insert(field.as_str(), TagValue::Text(text));
                    }
                }
            }
        }
        Ok(record)
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
