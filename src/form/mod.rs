//! Lead-form validation and submission feedback.
//!
//! - `field`: Field names, raw value snapshots and the `FieldReader` seam
//! - `rules`: One `ValidationRule` per field
//! - `validator`: `FormValidator::validate` / `submit`
//! - `feedback`: The `Idle` → `ShowingSuccess` → `Idle` lifecycle

mod feedback;
mod field;
mod rules;
mod validator;

pub use feedback::{SubmissionFeedback, SubmissionFeedbackState, SUCCESS_DISPLAY};
pub use field::{Field, FieldReader, FormFields};
pub use rules::{rule_for, EmailRule, NameRule, PhoneRule, ValidationRule};
pub use validator::{FormValidator, SubmissionOutcome, ValidationFailure, ValidationResult};
