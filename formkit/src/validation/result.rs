use serde::Serialize;

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field identifier (the draft key).
    pub field: String,
    /// Human-readable message to surface next to the field.
    pub message: String,
}

impl FieldError {
    /// Create a field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Outcome of validating one or more fields.
///
/// Validation results are transient: they are produced by a validation
/// pass, rendered, and discarded. They are never persisted and never
/// surfaced as an `Err` — a failing field is normal control flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// Every field passed.
    #[default]
    Valid,
    /// One or more fields failed.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// Build a result from collected errors; empty means valid.
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }

    /// Whether every field passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Whether any field failed.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// All field errors, in rule-table order.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// The first field error, if any. Useful for surfacing a single
    /// message or scrolling a renderer to the first problem.
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// The message recorded for a specific field, if it failed.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Combine two results, concatenating errors.
    pub fn merge(self, other: ValidationResult) -> ValidationResult {
        match (self, other) {
            (Self::Valid, other) => other,
            (this, Self::Valid) => this,
            (Self::Invalid(mut a), Self::Invalid(b)) => {
                a.extend(b);
                Self::Invalid(a)
            }
        }
    }
}
