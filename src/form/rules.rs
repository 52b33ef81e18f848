//! Per-field validation rules.
//!
//! Every rule receives the value already trimmed of leading and trailing
//! whitespace.

use crate::form::{Field, ValidationFailure};
use regex::Regex;
use std::sync::OnceLock;

/// A single field's acceptance test.
pub trait ValidationRule {
    /// The field this rule guards.
    fn field(&self) -> Field;

    /// Check a trimmed value, reporting why it was rejected.
    fn check(&self, value: &str) -> Result<(), ValidationFailure>;

    /// Whether a trimmed value passes.
    fn test(&self, value: &str) -> bool {
        self.check(value).is_ok()
    }
}

/// Name: anything that is non-empty after trimming.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameRule;

/// Email: `local@domain.tld` with no whitespace or `@` in any segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailRule;

/// Phone: 7 to 20 characters of digits, spaces, `+`, `-`, `(` and `)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneRule;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();

impl ValidationRule for NameRule {
    fn field(&self) -> Field {
        Field::Name
    }

    fn check(&self, value: &str) -> Result<(), ValidationFailure> {
        if value.is_empty() {
            return Err(ValidationFailure::Empty(Field::Name));
        }
        Ok(())
    }
}

impl ValidationRule for EmailRule {
    fn field(&self) -> Field {
        Field::Email
    }

    fn check(&self, value: &str) -> Result<(), ValidationFailure> {
        if value.is_empty() {
            return Err(ValidationFailure::Empty(Field::Email));
        }
        let regex = EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
        if regex.is_match(value) {
            Ok(())
        } else {
            Err(ValidationFailure::MalformedEmail)
        }
    }
}

impl ValidationRule for PhoneRule {
    fn field(&self) -> Field {
        Field::Phone
    }

    fn check(&self, value: &str) -> Result<(), ValidationFailure> {
        if value.is_empty() {
            return Err(ValidationFailure::Empty(Field::Phone));
        }
        // ASCII digits only; `\d` would admit every Unicode decimal digit
        let regex = PHONE_REGEX.get_or_init(|| Regex::new(r"^[+()\-0-9\s]{7,20}$").unwrap());
        if regex.is_match(value) {
            Ok(())
        } else {
            Err(ValidationFailure::MalformedPhone)
        }
    }
}

/// The rule guarding a field.
pub fn rule_for(field: Field) -> &'static dyn ValidationRule {
    match field {
        Field::Name => &NameRule,
        Field::Email => &EmailRule,
        Field::Phone => &PhoneRule,
    }
}
