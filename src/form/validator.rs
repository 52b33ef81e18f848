//! Lead-form validation.
//!
//! Every field is always evaluated, so the caller can show all errors at once.

use crate::form::rules::rule_for;
use crate::form::{Field, FieldReader, FormFields};
use crate::i18n::MessageSource;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", content = "field", rename_all = "snake_case")]
pub enum ValidationFailure {
    #[error("{0} is required")]
    Empty(Field),

    #[error("email address is malformed")]
    MalformedEmail,

    #[error("phone number is malformed")]
    MalformedPhone,
}

impl ValidationFailure {
    /// The field the failure belongs to.
    pub fn field(&self) -> Field {
        match self {
            ValidationFailure::Empty(field) => *field,
            ValidationFailure::MalformedEmail => Field::Email,
            ValidationFailure::MalformedPhone => Field::Phone,
        }
    }
}

/// Verdict for one submission attempt.
///
/// `errors` always holds exactly one entry per [`Field`]; the result is valid
/// iff every entry is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    errors: BTreeMap<Field, Option<ValidationFailure>>,
}

impl ValidationResult {
    /// Whether every field passed.
    pub fn valid(&self) -> bool {
        self.errors.values().all(Option::is_none)
    }

    /// The failure for a field, if it failed.
    pub fn error(&self, field: Field) -> Option<ValidationFailure> {
        self.errors.get(&field).copied().flatten()
    }

    /// All entries, failed or not, in field order.
    pub fn errors(&self) -> &BTreeMap<Field, Option<ValidationFailure>> {
        &self.errors
    }

    /// Only the failures, in field order.
    pub fn failures(&self) -> impl Iterator<Item = ValidationFailure> + '_ {
        self.errors.values().filter_map(|e| *e)
    }

    /// Render the verdict as field → message, with `""` for passing fields.
    pub fn messages(&self, source: &impl MessageSource) -> BTreeMap<Field, String> {
        self.errors
            .iter()
            .map(|(field, failure)| {
                let text = failure
                    .as_ref()
                    .map(|f| source.message(f).to_string())
                    .unwrap_or_default();
                (*field, text)
            })
            .collect()
    }
}

/// Result of submitting a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Every field passed; the caller clears the form and shows success.
    Accepted,

    /// At least one field failed; the caller shows the errors and keeps
    /// the values for correction.
    Rejected { errors: ValidationResult },
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted)
    }
}

/// Validator for lead forms.
pub struct FormValidator;

impl FormValidator {
    /// Validate a set of raw field values.
    ///
    /// Values are trimmed before testing. No field is skipped after an
    /// earlier failure.
    pub fn validate(fields: &impl FieldReader) -> ValidationResult {
        let errors = Field::ALL
            .iter()
            .map(|&field| {
                let value = fields.read(field).trim();
                let verdict = rule_for(field).check(value).err();
                debug!(field = %field, passed = verdict.is_none(), "Evaluated field rule");
                (field, verdict)
            })
            .collect();

        ValidationResult { errors }
    }

    /// Validate and decide whether the submission is accepted.
    ///
    /// There are no retries: a rejected attempt is final, and the user
    /// resubmits after editing.
    pub fn submit(fields: &FormFields) -> SubmissionOutcome {
        let result = Self::validate(fields);
        if result.valid() {
            SubmissionOutcome::Accepted
        } else {
            SubmissionOutcome::Rejected { errors: result }
        }
    }
}
