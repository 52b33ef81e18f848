//! Locale code: a lightweight, normalized language tag.
//!
//! A `LocaleCode` is not validated against any registry when it is built.
//! Codes requested by the page (a clicked `data-lang` link, the document's
//! `lang` attribute) may name locales the site does not serve; the registry
//! and the router decide how to fall back.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A language code such as `"en"` or `"de"`.
///
/// Codes are trimmed and lower-cased on construction, so `" DE "` and `"de"`
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LocaleCode(String);

impl LocaleCode {
    /// Create a locale code from any string.
    ///
    /// # Example
    /// ```
    /// use landing_core::i18n::LocaleCode;
    ///
    /// assert_eq!(LocaleCode::new(" FR ").as_str(), "fr");
    /// ```
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_ascii_lowercase())
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the code is empty (e.g., a document with no `lang` attribute).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LocaleCode {
    fn from(code: String) -> Self {
        Self::new(&code)
    }
}

impl From<LocaleCode> for String {
    fn from(code: LocaleCode) -> Self {
        code.0
    }
}

impl PartialEq<str> for LocaleCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LocaleCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
