//! Contact ("send a message") form: rule table and payload projection.

use formkit::{Check, FormDraft, ValidationResult};
use serde::Serialize;

/// Default form-processing endpoint for contact submissions.
pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/mkgkngzy";

/// Field identifiers, matching the form's declared names.
pub mod fields {
    pub const NAME: &str = "cName";
    pub const EMAIL: &str = "cEmail";
    pub const PHONE: &str = "cPhone";
    pub const TOPIC: &str = "cTopic";
    pub const MESSAGE: &str = "cMessage";
    pub const CONSENT: &str = "cConsent";
}

/// Apply the contact form's rule table to a draft.
pub fn validate(draft: &FormDraft) -> ValidationResult {
    Check::on(draft)
        .field(fields::NAME)
        .required("Full name is required")
        .min_length(2, "Name must be at least 2 characters")
        .max_length(100, "Name must be less than 100 characters")
        .field(fields::EMAIL)
        .required("Email is required")
        .email("Please enter a valid email address")
        .max_length(255, "Email must be less than 255 characters")
        .field(fields::PHONE)
        .required("Phone number is required")
        .phone("Please enter a valid phone number (10-15 digits)")
        .max_length(20, "Phone number is too long")
        .field(fields::TOPIC)
        .required("Please select a topic")
        .field(fields::MESSAGE)
        .required("Message is required")
        .min_length(10, "Message must be at least 10 characters")
        .max_length(2000, "Message must be less than 2000 characters")
        .field(fields::CONSENT)
        .checked("You must consent to be contacted")
        .finish()
}

/// Flat JSON body the contact endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub topic: String,
    pub message: String,
    pub consent: bool,
    #[serde(rename = "_subject")]
    pub subject: &'static str,
    #[serde(rename = "_format")]
    pub format: &'static str,
}

impl ContactPayload {
    /// Project a validated draft into the endpoint's shape.
    pub fn from_draft(draft: &FormDraft) -> Self {
        Self {
            name: draft.text(fields::NAME).trim().to_string(),
            email: draft.text(fields::EMAIL).trim().to_string(),
            phone: draft.text(fields::PHONE).trim().to_string(),
            topic: draft.text(fields::TOPIC).to_string(),
            message: draft.text(fields::MESSAGE).trim().to_string(),
            consent: draft.flag(fields::CONSENT),
            subject: "New Contact Form Submission",
            format: "plain",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> FormDraft {
        let mut draft = FormDraft::new();
        draft.set_text(fields::NAME, "Ada Lovelace");
        draft.set_text(fields::EMAIL, "ada@example.com");
        draft.set_text(fields::PHONE, "(415) 555-2671");
        draft.set_text(fields::TOPIC, "Booking");
        draft.set_text(fields::MESSAGE, "I would like to book an appointment.");
        draft.set_bool(fields::CONSENT, true);
        draft
    }

    #[test]
    fn test_filled_form_passes() {
        assert!(validate(&filled_draft()).is_valid());
    }

    #[test]
    fn test_empty_form_flags_every_required_field() {
        let result = validate(&FormDraft::new());
        for field in [
            fields::NAME,
            fields::EMAIL,
            fields::PHONE,
            fields::TOPIC,
            fields::MESSAGE,
            fields::CONSENT,
        ] {
            assert!(result.error_for(field).is_some(), "missing error for {field}");
        }
    }

    #[test]
    fn test_short_message_is_rejected() {
        let mut draft = filled_draft();
        draft.set_text(fields::MESSAGE, "hi");
        assert_eq!(
            validate(&draft).error_for(fields::MESSAGE),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn test_payload_shape() {
        let payload = ContactPayload::from_draft(&filled_draft());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["name"], "Ada Lovelace");
        assert_eq!(json["consent"], true);
        assert_eq!(json["_subject"], "New Contact Form Submission");
        assert_eq!(json["_format"], "plain");
    }
}
