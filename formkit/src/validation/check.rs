//! Fluent rule application over a form draft.

use chrono::Local;

use super::date::{is_future, meets_min_age, parse_date_input};
use super::email::is_valid_email;
use super::phone::is_valid_phone;
use super::result::{FieldError, ValidationResult};
use crate::draft::FormDraft;
use crate::value::FieldValue;

/// Builder for validating several draft fields in one pass.
///
/// Validation is a pure function of the draft and the rule chain; there
/// are no rendering side effects. Per field, the first failing rule wins
/// and later rules for that field are skipped, so each field surfaces at
/// most one message per pass.
///
/// # Example
///
/// ```
/// use formkit::{Check, FormDraft};
///
/// let mut draft = FormDraft::new();
/// draft.set_text("email", "ada@example");
///
/// let result = Check::on(&draft)
///     .field("name")
///         .required("Full name is required")
///         .min_length(2, "Name must be at least 2 characters")
///     .field("email")
///         .required("Email is required")
///         .email("Please enter a valid email address")
///     .finish();
///
/// assert!(result.is_invalid());
/// assert_eq!(result.errors().len(), 2);
/// ```
pub struct Check<'a> {
    draft: &'a FormDraft,
    errors: Vec<FieldError>,
}

impl<'a> Check<'a> {
    /// Start a validation pass over `draft`.
    pub fn on(draft: &'a FormDraft) -> Self {
        Self {
            draft,
            errors: Vec::new(),
        }
    }

    /// Begin rules for a field.
    pub fn field(self, field: impl Into<String>) -> FieldCheck<'a> {
        FieldCheck {
            check: self,
            field: field.into(),
            failed: false,
        }
    }

    /// Finish the pass and collect the result.
    pub fn finish(self) -> ValidationResult {
        ValidationResult::from_errors(self.errors)
    }
}

/// Rule chain for a single field. Created by [`Check::field`].
pub struct FieldCheck<'a> {
    check: Check<'a>,
    field: String,
    failed: bool,
}

impl<'a> FieldCheck<'a> {
    /// Apply a custom predicate to the field's raw value (`None` when the
    /// field has never been set).
    pub fn rule<F>(mut self, pred: F, msg: impl Into<String>) -> Self
    where
        F: FnOnce(Option<&FieldValue>) -> bool,
    {
        if self.failed {
            return self;
        }
        if !pred(self.check.draft.get(&self.field)) {
            self.check.errors.push(FieldError::new(self.field.as_str(), msg));
            self.failed = true;
        }
        self
    }

    /// Require a non-empty value: non-blank text, a set flag, or a
    /// multi-select with at least one member.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| v.is_some_and(|v| !v.is_empty()), msg)
    }

    /// Require at least `min` characters. Blank values pass; pair with
    /// [`required`](Self::required) when the field is mandatory.
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.text_rule(move |s| s.is_empty() || s.chars().count() >= min, msg)
    }

    /// Require at most `max` characters. Blank values pass.
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.text_rule(move |s| s.chars().count() <= max, msg)
    }

    /// Require a plausible email address. Blank values pass.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.text_rule(|s| s.is_empty() || is_valid_email(s), msg)
    }

    /// Require a plausible phone number. Blank values pass.
    pub fn phone(self, msg: impl Into<String>) -> Self {
        self.text_rule(|s| s.is_empty() || is_valid_phone(s), msg)
    }

    /// Require a checkbox to be checked.
    pub fn checked(self, msg: impl Into<String>) -> Self {
        self.rule(|v| v.and_then(FieldValue::as_bool).unwrap_or(false), msg)
    }

    /// Require a multi-select group to have at least one member.
    pub fn any_selected(self, msg: impl Into<String>) -> Self {
        self.rule(
            |v| v.and_then(FieldValue::as_many).is_some_and(|m| !m.is_empty()),
            msg,
        )
    }

    /// Require a date that is today or earlier. Blank values pass;
    /// unparseable dates fail.
    pub fn date_not_future(self, msg: impl Into<String>) -> Self {
        let today = Local::now().date_naive();
        self.text_rule(
            move |s| {
                s.is_empty()
                    || parse_date_input(s).is_some_and(|date| !is_future(date, today))
            },
            msg,
        )
    }

    /// Require a date of birth corresponding to an age of at least
    /// `years` whole years. Blank values pass; unparseable dates fail.
    pub fn min_age_years(self, years: u32, msg: impl Into<String>) -> Self {
        let today = Local::now().date_naive();
        self.text_rule(
            move |s| {
                s.is_empty()
                    || parse_date_input(s).is_some_and(|dob| meets_min_age(dob, years, today))
            },
            msg,
        )
    }

    /// Continue with the next field.
    pub fn field(self, field: impl Into<String>) -> FieldCheck<'a> {
        self.check.field(field)
    }

    /// Finish the pass and collect the result.
    pub fn finish(self) -> ValidationResult {
        self.check.finish()
    }

    fn text_rule<F>(self, pred: F, msg: impl Into<String>) -> Self
    where
        F: FnOnce(&str) -> bool,
    {
        self.rule(
            move |v| {
                let text = v.and_then(FieldValue::as_text).unwrap_or("").trim();
                pred(text)
            },
            msg,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_failure_wins_per_field() {
        let draft = FormDraft::new();
        let result = Check::on(&draft)
            .field("name")
            .required("required")
            .min_length(2, "too short")
            .finish();
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.error_for("name"), Some("required"));
    }

    #[test]
    fn test_length_rules_skip_blank_optional_fields() {
        let mut draft = FormDraft::new();
        draft.set_text("children", "");
        let result = Check::on(&draft)
            .field("children")
            .max_length(50, "too long")
            .min_length(2, "too short")
            .finish();
        assert!(result.is_valid());
    }

    #[test]
    fn test_checked_and_any_selected() {
        let mut draft = FormDraft::new();
        draft.set_bool("consent", false);
        draft.set_many("concerns", Vec::<String>::new());
        let result = Check::on(&draft)
            .field("consent")
            .checked("must consent")
            .field("concerns")
            .any_selected("pick one")
            .finish();
        assert_eq!(result.errors().len(), 2);
    }

    #[test]
    fn test_unparseable_date_fails() {
        let mut draft = FormDraft::new();
        draft.set_text("dob", "later");
        let result = Check::on(&draft)
            .field("dob")
            .date_not_future("bad date")
            .finish();
        assert_eq!(result.error_for("dob"), Some("bad date"));
    }
}
