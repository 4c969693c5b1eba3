//! Value enum for dynamic form field values

use serde::Deserialize;
use serde::Serialize;

/// A dynamic value that can be held by a single form field.
///
/// Covers the three shapes a field can take on a form: free text (text
/// inputs, textareas, selects, radio groups), a checked flag (single
/// checkboxes), and an ordered set of selected values (checkbox groups
/// such as "concerns" or "contactMethod").
///
/// Serializes untagged, so drafts round-trip through JSON as plain
/// `string | bool | string[]` values.
///
/// # Example
///
/// ```
/// use formkit::FieldValue;
///
/// let name = FieldValue::from("Ada Lovelace");
/// let consent = FieldValue::from(true);
/// let methods = FieldValue::many(["Email", "Phone"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free text value.
    Text(String),
    /// Checkbox flag.
    Bool(bool),
    /// Ordered multi-select membership.
    Many(Vec<String>),
}

impl FieldValue {
    /// Construct a multi-select value from an iterator of members.
    pub fn many<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Many(members.into_iter().map(Into::into).collect())
    }

    /// The text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The flag, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The members, if this is a multi-select value.
    pub fn as_many(&self) -> Option<&[String]> {
        match self {
            Self::Many(items) => Some(items),
            _ => None,
        }
    }

    /// Whether the value is empty in the form sense: blank text, an
    /// unchecked flag, or a multi-select with no members.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Bool(b) => !b,
            Self::Many(items) => items.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}
