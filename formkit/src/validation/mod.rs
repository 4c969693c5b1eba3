//! Form validation.
//!
//! Pure validators ([`is_valid_phone`], [`is_valid_email`], date helpers)
//! plus a fluent [`Check`] builder for applying a rule table to a
//! [`FormDraft`](crate::FormDraft). Rendering is a separate concern:
//! everything here returns a [`ValidationResult`] for a consumer to
//! display however it likes.
//!
//! # Example
//!
//! ```
//! use formkit::{Check, FormDraft};
//!
//! let mut draft = FormDraft::new();
//! draft.set_text("phone", "(415) 555-2671");
//!
//! let result = Check::on(&draft)
//!     .field("phone")
//!         .required("Phone number is required")
//!         .phone("Please enter a valid phone number (10-15 digits)")
//!     .finish();
//!
//! assert!(result.is_valid());
//! ```

mod check;
mod date;
mod email;
mod phone;
mod result;

pub use check::{Check, FieldCheck};
pub use date::{DATE_INPUT_FORMAT, is_future, meets_min_age, parse_date_input};
pub use email::is_valid_email;
pub use phone::{format_phone, format_phone_partial, is_valid_phone};
pub use result::{FieldError, ValidationResult};
