use crate::form::{Field, ValidationFailure};
use crate::i18n::LocaleCode;

/// Supplies the user-facing text for a validation failure.
///
/// The validator only decides which fields fail; implementors decide what
/// the user reads.
pub trait MessageSource {
    /// Inline error text for a failed field.
    fn message(&self, failure: &ValidationFailure) -> &str;

    /// Confirmation text shown while a submission is being acknowledged.
    fn success(&self) -> &str;
}

/// All localized strings of the lead form for a language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStrings {
    // ==================== Field Errors ====================
    /// Shown under the name field when it is blank
    pub err_required: &'static str,

    /// Shown under the email field when the address is not `local@domain.tld`
    pub err_email: &'static str,

    /// Shown under the phone field when the number is malformed
    pub err_phone: &'static str,

    // ==================== Feedback ====================
    /// Shown after an accepted submission
    pub success: &'static str,
}

impl FormStrings {
    /// Strings for a locale, falling back to English for locales without
    /// shipped translations.
    pub fn for_locale(code: &LocaleCode) -> &'static FormStrings {
        match code.as_str() {
            "de" => &GERMAN_STRINGS,
            "fr" => &FRENCH_STRINGS,
            "es" => &SPANISH_STRINGS,
            "it" => &ITALIAN_STRINGS,
            _ => &ENGLISH_STRINGS,
        }
    }
}

impl MessageSource for FormStrings {
    fn message(&self, failure: &ValidationFailure) -> &str {
        // Messages are per field: an empty email reads the same as a malformed one
        match failure.field() {
            Field::Name => self.err_required,
            Field::Email => self.err_email,
            Field::Phone => self.err_phone,
        }
    }

    fn success(&self) -> &str {
        self.success
    }
}

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: FormStrings = FormStrings {
    err_required: "Please enter your name.",
    err_email: "Please enter a valid email address.",
    err_phone: "Please enter a valid phone number.",
    success: "Thank you! We'll be in touch shortly.",
};

// ==================== German Strings ====================

pub const GERMAN_STRINGS: FormStrings = FormStrings {
    err_required: "Bitte geben Sie Ihren Namen ein.",
    err_email: "Bitte geben Sie eine gültige E-Mail-Adresse ein.",
    err_phone: "Bitte geben Sie eine gültige Telefonnummer ein.",
    success: "Vielen Dank! Wir melden uns in Kürze.",
};

// ==================== French Strings ====================

pub const FRENCH_STRINGS: FormStrings = FormStrings {
    err_required: "Veuillez saisir votre nom.",
    err_email: "Veuillez saisir une adresse e-mail valide.",
    err_phone: "Veuillez saisir un numéro de téléphone valide.",
    success: "Merci\u{a0}! Nous revenons vers vous très vite.",
};

// ==================== Spanish Strings ====================

pub const SPANISH_STRINGS: FormStrings = FormStrings {
    err_required: "Introduce tu nombre.",
    err_email: "Introduce un correo electrónico válido.",
    err_phone: "Introduce un número de teléfono válido.",
    success: "¡Gracias! Nos pondremos en contacto contigo pronto.",
};

// ==================== Italian Strings ====================

pub const ITALIAN_STRINGS: FormStrings = FormStrings {
    err_required: "Inserisci il tuo nome.",
    err_email: "Inserisci un indirizzo email valido.",
    err_phone: "Inserisci un numero di telefono valido.",
    success: "Grazie! Ti contatteremo a breve.",
};
