//! Intake form: step rule tables, cross-field checks, and payload
//! projection.
//!
//! Four steps — About You, Background, Concerns & Goals, Consent — each
//! with its own rule table, plus a contact-method gate that only runs at
//! submit time once every step has passed.

use formkit::{Check, FieldError, FormDraft, ValidationResult};
use serde::Serialize;

/// Default form-processing endpoint for intake submissions.
pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/xgvrwrzk";

/// Number of steps in the intake form.
pub const STEP_COUNT: usize = 4;

/// Step titles, in order.
pub const STEP_TITLES: [&str; STEP_COUNT] =
    ["About You", "Background", "Concerns & Goals", "Consent"];

/// Field identifiers, matching the form's declared names.
pub mod fields {
    // Step 1: About You
    pub const FULL_NAME: &str = "fullName";
    pub const DOB: &str = "dob";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const CONTACT_METHOD: &str = "contactMethod";
    pub const ADDRESS: &str = "address";

    // Step 2: Background
    pub const OCCUPATION: &str = "occupation";
    pub const RELATIONSHIP_STATUS: &str = "relationshipStatus";
    pub const CHILDREN: &str = "children";
    pub const REFERRED_BY: &str = "referredBy";
    pub const EMG_NAME: &str = "emgName";
    pub const EMG_PHONE: &str = "emgPhone";
    pub const EMG_RELATION: &str = "emgRelation";

    // Step 3: Concerns & Goals
    pub const CONCERNS: &str = "concerns";
    pub const CONCERN_OTHER_TEXT: &str = "concernOtherText";
    pub const PRESENTING_DESC: &str = "presentingDesc";
    pub const GOALS: &str = "goals";
    pub const MEDS_NOW: &str = "medsNow";
    pub const MEDICATIONS: &str = "medications";
    pub const THERAPY_BEFORE: &str = "therapyBefore";
    pub const PREV_HELPFUL: &str = "prevHelpful";

    // Step 4: Consent
    pub const CONSENT: &str = "consent";
    pub const SIGNATURE: &str = "signature";
    pub const SIG_DATE: &str = "sigDate";

    /// Honeypot field; a non-empty value marks the submission as spam.
    pub const WEBSITE: &str = "website";
}

/// Choice values referenced by cross-field rules.
pub mod choices {
    pub const YES: &str = "Yes";
    pub const CONTACT_PHONE: &str = "Phone";
    pub const CONTACT_EMAIL: &str = "Email";
    pub const CONCERN_OTHER: &str = "Other";
}

/// Minimum age, in whole years, a client must have reached.
pub const MIN_AGE_YEARS: u32 = 13;

/// Field identifiers a step's validation pass covers, including
/// cross-field extras surfaced on that step. Steps outside 1–4 cover
/// nothing.
pub fn step_fields(step: usize) -> &'static [&'static str] {
    match step {
        1 => &[
            fields::FULL_NAME,
            fields::DOB,
            fields::EMAIL,
            fields::PHONE,
            fields::CONTACT_METHOD,
            fields::ADDRESS,
        ],
        2 => &[
            fields::OCCUPATION,
            fields::RELATIONSHIP_STATUS,
            fields::CHILDREN,
            fields::REFERRED_BY,
            fields::EMG_NAME,
            fields::EMG_PHONE,
            fields::EMG_RELATION,
        ],
        3 => &[
            fields::CONCERNS,
            fields::CONCERN_OTHER_TEXT,
            fields::PRESENTING_DESC,
            fields::GOALS,
            fields::MEDS_NOW,
            fields::MEDICATIONS,
            fields::THERAPY_BEFORE,
            fields::PREV_HELPFUL,
        ],
        4 => &[fields::CONSENT, fields::SIGNATURE, fields::SIG_DATE],
        _ => &[],
    }
}

/// Apply one step's rule table to a draft. Steps outside 1–4 validate
/// as passing.
pub fn validate_step(draft: &FormDraft, step: usize) -> ValidationResult {
    match step {
        1 => validate_about_you(draft),
        2 => validate_background(draft),
        3 => validate_concerns(draft),
        4 => validate_consent(draft),
        _ => ValidationResult::Valid,
    }
}

fn validate_about_you(draft: &FormDraft) -> ValidationResult {
    Check::on(draft)
        .field(fields::FULL_NAME)
        .required("Full Name is required")
        .min_length(2, "Full Name must be at least 2 characters")
        .field(fields::DOB)
        .required("Date of Birth is required")
        .date_not_future("Date of Birth cannot be in the future")
        .min_age_years(MIN_AGE_YEARS, "You must be at least 13 years old")
        .field(fields::EMAIL)
        .required("Email is required")
        .email("Please enter a valid email address")
        .field(fields::PHONE)
        .required("Phone number is required")
        .phone("Please enter a valid phone number (10-15 digits)")
        .field(fields::CONTACT_METHOD)
        .any_selected("Please select at least one preferred contact method")
        .finish()
}

fn validate_background(draft: &FormDraft) -> ValidationResult {
    Check::on(draft)
        .field(fields::OCCUPATION)
        .required("Occupation or student status is required")
        .min_length(2, "Please provide a valid occupation or student status")
        .field(fields::RELATIONSHIP_STATUS)
        .required("Please select your relationship status")
        .field(fields::CHILDREN)
        .max_length(50, "Please provide a brief description about children")
        .field(fields::REFERRED_BY)
        .max_length(100, "Referral source description is too long")
        .field(fields::EMG_NAME)
        .required("Emergency contact name is required")
        .min_length(2, "Please provide a valid emergency contact name")
        .field(fields::EMG_PHONE)
        .required("Emergency contact phone is required")
        .phone("Please enter a valid emergency contact phone number")
        .field(fields::EMG_RELATION)
        .required("Emergency contact relationship is required")
        .min_length(2, "Please provide a valid relationship description")
        .finish()
}

fn validate_concerns(draft: &FormDraft) -> ValidationResult {
    let result = Check::on(draft)
        .field(fields::CONCERNS)
        .any_selected("Please select at least one concern")
        .field(fields::PRESENTING_DESC)
        .required("Please describe what brings you to counselling")
        .min_length(10, "Please provide more details (at least 10 characters)")
        .field(fields::GOALS)
        .required("Please describe what you would like to achieve through therapy")
        .min_length(10, "Please provide more details about your goals (at least 10 characters)")
        .field(fields::MEDS_NOW)
        .required("Please indicate if you are currently taking any medications")
        .field(fields::THERAPY_BEFORE)
        .required("Please indicate if you have attended counselling before")
        .finish();

    // "Other" concern requires its free-text elaboration.
    if other_concern_visible(draft) && draft.text(fields::CONCERN_OTHER_TEXT).trim().is_empty() {
        return result.merge(ValidationResult::Invalid(vec![FieldError::new(
            fields::CONCERN_OTHER_TEXT,
            "Please specify your other concern",
        )]));
    }

    result
}

fn validate_consent(draft: &FormDraft) -> ValidationResult {
    Check::on(draft)
        .field(fields::CONSENT)
        .checked("You must agree to the confidentiality statement")
        .field(fields::SIGNATURE)
        .required("Signature is required")
        .min_length(2, "Please enter your full name")
        .field(fields::SIG_DATE)
        .required("Date is required")
        .date_not_future("Date cannot be in the future")
        .finish()
}

/// Contact-method gate, run at submit time after every step passes.
///
/// A selected contact method must come with its detail: "Phone" needs a
/// phone number, "Email" needs an email address, and at least one
/// selected method must have its detail present. One violation is
/// reported at a time, first match wins.
pub fn validate_contact_methods(draft: &FormDraft) -> ValidationResult {
    let methods = draft.members(fields::CONTACT_METHOD);

    let phone_selected = methods.iter().any(|m| m == choices::CONTACT_PHONE);
    let email_selected = methods.iter().any(|m| m == choices::CONTACT_EMAIL);
    let phone_provided = !draft.text(fields::PHONE).trim().is_empty();
    let email_provided = !draft.text(fields::EMAIL).trim().is_empty();

    let violation = if methods.is_empty() {
        Some(FieldError::new(
            fields::CONTACT_METHOD,
            "Please select at least one preferred contact method.",
        ))
    } else if phone_selected && !phone_provided {
        Some(FieldError::new(
            fields::PHONE,
            "Please provide your phone number since you selected phone as a contact method.",
        ))
    } else if email_selected && !email_provided {
        Some(FieldError::new(
            fields::EMAIL,
            "Please provide your email since you selected email as a contact method.",
        ))
    } else if !(phone_selected && phone_provided) && !(email_selected && email_provided) {
        Some(FieldError::new(
            fields::CONTACT_METHOD,
            "Please provide the contact details for your selected contact methods.",
        ))
    } else {
        None
    };

    match violation {
        Some(error) => ValidationResult::Invalid(vec![error]),
        None => ValidationResult::Valid,
    }
}

/// Whether the honeypot field was filled in.
pub fn is_spam(draft: &FormDraft) -> bool {
    !draft.text(fields::WEBSITE).trim().is_empty()
}

/// Medication list is shown while "currently taking medications" is Yes.
pub fn medication_list_visible(draft: &FormDraft) -> bool {
    draft.text(fields::MEDS_NOW) == choices::YES
}

/// Previous-therapy notes are shown while "attended counselling before"
/// is Yes.
pub fn previous_therapy_notes_visible(draft: &FormDraft) -> bool {
    draft.text(fields::THERAPY_BEFORE) == choices::YES
}

/// "Other concern" elaboration is shown while Other is checked.
pub fn other_concern_visible(draft: &FormDraft) -> bool {
    draft.contains(fields::CONCERNS, choices::CONCERN_OTHER)
}

/// Flat JSON body the intake endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntakePayload {
    // Step 1: About You
    pub full_name: String,
    pub date_of_birth: Option<String>,
    pub phone: String,
    pub email: String,
    pub contact_method: String,
    pub address: String,

    // Step 2: Background
    pub occupation: String,
    pub relationship_status: String,
    pub children: String,
    pub referred_by: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub emergency_contact_relationship: String,

    // Step 3: Concerns & Goals
    pub concerns: String,
    pub concern_other: String,
    pub presenting_description: String,
    pub therapy_goals: String,
    pub current_medications: bool,
    pub medications_list: String,
    pub previous_therapy: bool,
    pub previous_therapy_notes: String,

    // Step 4: Consent
    pub consent_given: bool,
    pub signature: String,
    pub signature_date: String,

    #[serde(rename = "_subject")]
    pub subject: &'static str,
    #[serde(rename = "_format")]
    pub format: &'static str,
}

impl IntakePayload {
    /// Project a validated draft into the endpoint's shape: multi-select
    /// groups join with `", "`, Yes/No choices coerce to booleans.
    pub fn from_draft(draft: &FormDraft) -> Self {
        let dob = draft.text(fields::DOB).trim();
        Self {
            full_name: draft.text(fields::FULL_NAME).trim().to_string(),
            date_of_birth: (!dob.is_empty()).then(|| dob.to_string()),
            phone: draft.text(fields::PHONE).trim().to_string(),
            email: draft.text(fields::EMAIL).trim().to_string(),
            contact_method: draft.members(fields::CONTACT_METHOD).join(", "),
            address: draft.text(fields::ADDRESS).trim().to_string(),
            occupation: draft.text(fields::OCCUPATION).trim().to_string(),
            relationship_status: draft.text(fields::RELATIONSHIP_STATUS).to_string(),
            children: draft.text(fields::CHILDREN).trim().to_string(),
            referred_by: draft.text(fields::REFERRED_BY).trim().to_string(),
            emergency_contact_name: draft.text(fields::EMG_NAME).trim().to_string(),
            emergency_contact_phone: draft.text(fields::EMG_PHONE).trim().to_string(),
            emergency_contact_relationship: draft.text(fields::EMG_RELATION).trim().to_string(),
            concerns: draft.members(fields::CONCERNS).join(", "),
            concern_other: draft.text(fields::CONCERN_OTHER_TEXT).trim().to_string(),
            presenting_description: draft.text(fields::PRESENTING_DESC).trim().to_string(),
            therapy_goals: draft.text(fields::GOALS).trim().to_string(),
            current_medications: draft.text(fields::MEDS_NOW) == choices::YES,
            medications_list: draft.text(fields::MEDICATIONS).trim().to_string(),
            previous_therapy: draft.text(fields::THERAPY_BEFORE) == choices::YES,
            previous_therapy_notes: draft.text(fields::PREV_HELPFUL).trim().to_string(),
            consent_given: draft.flag(fields::CONSENT),
            signature: draft.text(fields::SIGNATURE).trim().to_string(),
            signature_date: draft.text(fields::SIG_DATE).to_string(),
            subject: "New Intake Form Submission",
            format: "plain",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> FormDraft {
        let mut draft = FormDraft::new();
        draft.set_text(fields::FULL_NAME, "Ada Lovelace");
        draft.set_text(fields::DOB, "1990-12-10");
        draft.set_text(fields::EMAIL, "ada@example.com");
        draft.set_text(fields::PHONE, "4155552671");
        draft.set_many(fields::CONTACT_METHOD, [choices::CONTACT_EMAIL]);
        draft.set_text(fields::OCCUPATION, "Analyst");
        draft.set_text(fields::RELATIONSHIP_STATUS, "Single");
        draft.set_text(fields::EMG_NAME, "Annabella King");
        draft.set_text(fields::EMG_PHONE, "14155552672");
        draft.set_text(fields::EMG_RELATION, "Mother");
        draft.set_many(fields::CONCERNS, ["Anxiety"]);
        draft.set_text(fields::PRESENTING_DESC, "Persistent worry affecting sleep.");
        draft.set_text(fields::GOALS, "Build coping strategies for stress.");
        draft.set_text(fields::MEDS_NOW, "No");
        draft.set_text(fields::THERAPY_BEFORE, "No");
        draft.set_bool(fields::CONSENT, true);
        draft.set_text(fields::SIGNATURE, "Ada Lovelace");
        draft.set_text(fields::SIG_DATE, "2024-01-15");
        draft
    }

    #[test]
    fn test_filled_draft_passes_every_step() {
        let draft = filled_draft();
        for step in 1..=STEP_COUNT {
            assert!(validate_step(&draft, step).is_valid(), "step {step} failed");
        }
    }

    #[test]
    fn test_other_concern_requires_elaboration() {
        let mut draft = filled_draft();
        draft.toggle_member(fields::CONCERNS, choices::CONCERN_OTHER, true);
        let result = validate_step(&draft, 3);
        assert_eq!(
            result.error_for(fields::CONCERN_OTHER_TEXT),
            Some("Please specify your other concern")
        );

        draft.set_text(fields::CONCERN_OTHER_TEXT, "Career uncertainty");
        assert!(validate_step(&draft, 3).is_valid());
    }

    #[test]
    fn test_future_signature_date_fails() {
        let mut draft = filled_draft();
        draft.set_text(fields::SIG_DATE, "2999-01-01");
        assert_eq!(
            validate_step(&draft, 4).error_for(fields::SIG_DATE),
            Some("Date cannot be in the future")
        );
    }

    #[test]
    fn test_underage_dob_fails() {
        let mut draft = filled_draft();
        let recent = chrono::Local::now().date_naive() - chrono::Days::new(365);
        draft.set_text(fields::DOB, recent.format("%Y-%m-%d").to_string());
        assert_eq!(
            validate_step(&draft, 1).error_for(fields::DOB),
            Some("You must be at least 13 years old")
        );
    }

    #[test]
    fn test_phone_method_without_number_fails_gate() {
        let mut draft = filled_draft();
        draft.set_many(fields::CONTACT_METHOD, [choices::CONTACT_PHONE]);
        draft.set_text(fields::PHONE, "");
        let result = validate_contact_methods(&draft);
        assert!(result.is_invalid());
        assert_eq!(result.first_error().unwrap().field, fields::PHONE);
    }

    #[test]
    fn test_gate_needs_detail_for_some_selected_method() {
        // "Phone" selected with a phone present: passes even though the
        // email detail is also present but unselected.
        let mut draft = filled_draft();
        draft.set_many(fields::CONTACT_METHOD, [choices::CONTACT_PHONE]);
        assert!(validate_contact_methods(&draft).is_valid());

        // No methods at all.
        draft.set_many(fields::CONTACT_METHOD, Vec::<String>::new());
        assert!(validate_contact_methods(&draft).is_invalid());
    }

    #[test]
    fn test_visibility_follows_values() {
        let mut draft = filled_draft();
        assert!(!medication_list_visible(&draft));
        draft.set_text(fields::MEDS_NOW, choices::YES);
        assert!(medication_list_visible(&draft));

        assert!(!other_concern_visible(&draft));
        draft.toggle_member(fields::CONCERNS, choices::CONCERN_OTHER, true);
        assert!(other_concern_visible(&draft));
    }

    #[test]
    fn test_payload_joins_and_coerces() {
        let mut draft = filled_draft();
        draft.set_many(
            fields::CONTACT_METHOD,
            [choices::CONTACT_EMAIL, choices::CONTACT_PHONE],
        );
        draft.set_text(fields::MEDS_NOW, choices::YES);
        draft.set_text(fields::MEDICATIONS, "Sertraline 50mg");

        let payload = IntakePayload::from_draft(&draft);
        assert_eq!(payload.contact_method, "Email, Phone");
        assert!(payload.current_medications);
        assert!(!payload.previous_therapy);
        assert!(payload.consent_given);
        assert_eq!(payload.date_of_birth.as_deref(), Some("1990-12-10"));

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["_subject"], "New Intake Form Submission");
        assert_eq!(json["medications_list"], "Sertraline 50mg");
    }

    #[test]
    fn test_empty_dob_projects_as_null() {
        let mut draft = filled_draft();
        draft.set_text(fields::DOB, "");
        let json = serde_json::to_value(IntakePayload::from_draft(&draft)).unwrap();
        assert!(json["date_of_birth"].is_null());
    }
}
