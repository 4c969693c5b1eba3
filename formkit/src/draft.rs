//! In-progress form data

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::value::FieldValue;

/// The user's in-progress, unsubmitted form data.
///
/// A draft is a flat mapping from field identifier to [`FieldValue`].
/// Keys correspond exactly to the form's declared field names. The map is
/// ordered so serialized drafts are stable across saves.
///
/// Drafts are what autosave persists and what validation reads; they hold
/// no notion of which step the user is on.
///
/// # Example
///
/// ```
/// use formkit::FormDraft;
///
/// let mut draft = FormDraft::new();
/// draft.set_text("fullName", "Ada Lovelace");
/// draft.set_bool("consent", true);
/// draft.toggle_member("contactMethod", "Email", true);
///
/// assert_eq!(draft.text("fullName"), "Ada Lovelace");
/// assert!(draft.contains("contactMethod", "Email"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormDraft {
    fields: BTreeMap<String, FieldValue>,
}

impl FormDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a text field. Empty strings are stored too, mirroring the way
    /// a form input always has a (possibly blank) value.
    pub fn set_text(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), FieldValue::Text(value.into()));
    }

    /// Set a checkbox flag.
    pub fn set_bool(&mut self, field: impl Into<String>, value: bool) {
        self.fields.insert(field.into(), FieldValue::Bool(value));
    }

    /// Replace a multi-select field's membership wholesale.
    pub fn set_many<I, S>(&mut self, field: impl Into<String>, members: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.insert(field.into(), FieldValue::many(members));
    }

    /// Add or remove a single member of a multi-select field.
    ///
    /// The field is created on first addition. Removal of the last member
    /// leaves an empty membership rather than deleting the key.
    pub fn toggle_member(&mut self, field: impl Into<String>, member: &str, on: bool) {
        let entry = self
            .fields
            .entry(field.into())
            .or_insert_with(|| FieldValue::Many(Vec::new()));

        // A scalar previously stored under this id becomes a group.
        if !matches!(entry, FieldValue::Many(_)) {
            *entry = FieldValue::Many(Vec::new());
        }

        if let FieldValue::Many(members) = entry {
            if on {
                if !members.iter().any(|m| m == member) {
                    members.push(member.to_string());
                }
            } else {
                members.retain(|m| m != member);
            }
        }
    }

    /// Raw value of a field, if set.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Text content of a field; empty string when unset or not text.
    pub fn text(&self, field: &str) -> &str {
        self.get(field).and_then(FieldValue::as_text).unwrap_or("")
    }

    /// Checkbox flag of a field; `false` when unset or not a flag.
    pub fn flag(&self, field: &str) -> bool {
        self.get(field).and_then(FieldValue::as_bool).unwrap_or(false)
    }

    /// Members of a multi-select field; empty when unset or not a group.
    pub fn members(&self, field: &str) -> &[String] {
        self.get(field).and_then(FieldValue::as_many).unwrap_or(&[])
    }

    /// Whether a multi-select field currently contains `member`.
    pub fn contains(&self, field: &str, member: &str) -> bool {
        self.members(field).iter().any(|m| m == member)
    }

    /// Remove a field entirely.
    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.fields.remove(field)
    }

    /// Drop every field.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Whether no fields are set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields set.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_member_adds_once() {
        let mut draft = FormDraft::new();
        draft.toggle_member("concerns", "Anxiety", true);
        draft.toggle_member("concerns", "Anxiety", true);
        assert_eq!(draft.members("concerns"), ["Anxiety"]);
    }

    #[test]
    fn test_toggle_member_removes() {
        let mut draft = FormDraft::new();
        draft.toggle_member("concerns", "Anxiety", true);
        draft.toggle_member("concerns", "Stress", true);
        draft.toggle_member("concerns", "Anxiety", false);
        assert_eq!(draft.members("concerns"), ["Stress"]);
        assert!(!draft.contains("concerns", "Anxiety"));
    }

    #[test]
    fn test_accessors_tolerate_missing_fields() {
        let draft = FormDraft::new();
        assert_eq!(draft.text("nope"), "");
        assert!(!draft.flag("nope"));
        assert!(draft.members("nope").is_empty());
    }

    #[test]
    fn test_json_shape_is_flat() {
        let mut draft = FormDraft::new();
        draft.set_text("fullName", "Ada");
        draft.set_bool("consent", true);
        draft.set_many("contactMethod", ["Email", "Phone"]);

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["fullName"], "Ada");
        assert_eq!(json["consent"], true);
        assert_eq!(json["contactMethod"][1], "Phone");
    }
}
