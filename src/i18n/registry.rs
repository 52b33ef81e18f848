//! Locale registry: the configured table of locales the site is published in.
//!
//! Each entry maps a locale code to the root document of that locale's copy of
//! the site, plus the presentational metadata the language switcher shows.
//! Exactly one entry is the default locale; its root is where unknown or
//! default-locale requests land.
//!
//! The registry is an explicit value handed to the components that need it.
//! Nothing looks it up ambiently.

use crate::i18n::LocaleCode;
use thiserror::Error;

/// Configuration for one published locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    /// Normalized locale code (e.g., "en", "de")
    pub code: LocaleCode,

    /// Root document path for this locale (e.g., "/de/index.html")
    pub base_path: String,

    /// Display label shown by the language switcher (flag + native name)
    pub label: String,

    /// Digit-group separator used when formatting counters
    pub group_separator: char,

    /// Whether this is the default locale (only one should be true)
    pub is_default: bool,
}

/// Errors raised while building a registry from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("locale table is empty")]
    Empty,

    #[error("default locale '{0}' is not in the locale table")]
    NoDefault(String),

    #[error("locale '{0}' is listed more than once")]
    DuplicateCode(String),

    #[error("invalid locale entry '{0}', expected code=/path")]
    InvalidEntry(String),
}

/// The configured set of locales.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

impl LocaleRegistry {
    /// Build a registry from `(code, base_path)` pairs.
    ///
    /// Labels and separators come from the built-in table. Codes the table
    /// does not know get their upper-cased code as the label and `,` as the
    /// separator.
    ///
    /// # Errors
    /// Fails if the list is empty, if a code repeats, or if `default` is not
    /// among the entries.
    pub fn new<I, C, P>(entries: I, default: &LocaleCode) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (C, P)>,
        C: Into<LocaleCode>,
        P: Into<String>,
    {
        let mut locales: Vec<LocaleConfig> = Vec::new();

        for (code, base_path) in entries {
            let code = code.into();
            if locales.iter().any(|l| l.code == code) {
                return Err(RegistryError::DuplicateCode(code.to_string()));
            }
            let (label, group_separator) = match known_locale(code.as_str()) {
                Some((label, sep)) => (label.to_string(), sep),
                None => (code.as_str().to_ascii_uppercase(), ','),
            };
            locales.push(LocaleConfig {
                is_default: &code == default,
                code,
                base_path: base_path.into(),
                label,
                group_separator,
            });
        }

        if locales.is_empty() {
            return Err(RegistryError::Empty);
        }
        if !locales.iter().any(|l| l.is_default) {
            return Err(RegistryError::NoDefault(default.to_string()));
        }

        Ok(Self { locales })
    }

    /// Parse a `code=/path` comma-separated list (the `SITE_LOCALES` format).
    ///
    /// # Example
    /// ```
    /// use landing_core::i18n::{LocaleCode, LocaleRegistry};
    ///
    /// let registry = LocaleRegistry::parse(
    ///     "en=/index.html, nl=/nl/index.html",
    ///     &LocaleCode::new("en"),
    /// ).unwrap();
    /// assert_eq!(registry.base_path(&LocaleCode::new("nl")), Some("/nl/index.html"));
    /// ```
    pub fn parse(table: &str, default: &LocaleCode) -> Result<Self, RegistryError> {
        let mut entries = Vec::new();
        for raw in table.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let (code, path) = raw
                .split_once('=')
                .ok_or_else(|| RegistryError::InvalidEntry(raw.to_string()))?;
            let (code, path) = (code.trim(), path.trim());
            if code.is_empty() || !path.starts_with('/') {
                return Err(RegistryError::InvalidEntry(raw.to_string()));
            }
            entries.push((LocaleCode::new(code), path.to_string()));
        }
        Self::new(entries, default)
    }

    /// The built-in table: English (default), German, French, Spanish, Italian.
    pub fn builtin() -> Self {
        let locales = BUILTIN_LOCALES
            .iter()
            .map(|(code, path)| {
                let (label, group_separator) = known_locale(code).unwrap_or((*code, ','));
                LocaleConfig {
                    code: LocaleCode::new(code),
                    base_path: (*path).to_string(),
                    label: label.to_string(),
                    group_separator,
                    is_default: *code == "en",
                }
            })
            .collect();
        Self { locales }
    }

    /// Get a locale configuration by code.
    pub fn get(&self, code: &LocaleCode) -> Option<&LocaleConfig> {
        self.locales.iter().find(|l| &l.code == code)
    }

    /// The default locale's configuration.
    pub fn default_locale(&self) -> &LocaleConfig {
        // `new` and `builtin` both guarantee a default entry
        self.locales
            .iter()
            .find(|l| l.is_default)
            .unwrap_or(&self.locales[0])
    }

    /// Root document path of a locale, if it is configured.
    pub fn base_path(&self, code: &LocaleCode) -> Option<&str> {
        self.get(code).map(|l| l.base_path.as_str())
    }

    /// Display label of a locale. Unknown codes get the default locale's label.
    pub fn label(&self, code: &LocaleCode) -> &str {
        self.get(code)
            .unwrap_or_else(|| self.default_locale())
            .label
            .as_str()
    }

    /// The non-default locale whose root document is exactly `path`, if any.
    pub fn non_default_root(&self, path: &str) -> Option<&LocaleConfig> {
        self.locales
            .iter()
            .filter(|l| !l.is_default)
            .find(|l| l.base_path == path)
    }

    /// All configured locales, in configuration order.
    pub fn list(&self) -> &[LocaleConfig] {
        &self.locales
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Code and root document of the built-in locales.
const BUILTIN_LOCALES: &[(&str, &str)] = &[
    ("en", "/index.html"),
    ("de", "/de/index.html"),
    ("fr", "/fr/index.html"),
    ("es", "/es/index.html"),
    ("it", "/it/index.html"),
];

/// Label and separator for locales this crate ships strings for.
fn known_locale(code: &str) -> Option<(&'static str, char)> {
    match code {
        "en" => Some(("🇬🇧 English", ',')),
        "de" => Some(("🇩🇪 Deutsch", '.')),
        "fr" => Some(("🇫🇷 Français", '\u{202f}')),
        "es" => Some(("🇪🇸 Español", '.')),
        "it" => Some(("🇮🇹 Italiano", '.')),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> LocaleCode {
        LocaleCode::new(s)
    }

    // ==================== Built-in Table Tests ====================

    #[test]
    fn test_builtin_has_five_locales() {
        let registry = LocaleRegistry::builtin();
        let codes: Vec<_> = registry.list().iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["en", "de", "fr", "es", "it"]);
    }

    #[test]
    fn test_builtin_default_is_english() {
        let registry = LocaleRegistry::builtin();
        let default = registry.default_locale();
        assert_eq!(default.code, "en");
        assert_eq!(default.base_path, "/index.html");
        assert!(default.is_default);
    }

    #[test]
    fn test_builtin_base_paths() {
        let registry = LocaleRegistry::builtin();
        assert_eq!(registry.base_path(&code("de")), Some("/de/index.html"));
        assert_eq!(registry.base_path(&code("it")), Some("/it/index.html"));
        assert_eq!(registry.base_path(&code("xx")), None);
    }

    // ==================== Label Tests ====================

    #[test]
    fn test_label_known() {
        let registry = LocaleRegistry::builtin();
        assert_eq!(registry.label(&code("fr")), "🇫🇷 Français");
    }

    #[test]
    fn test_label_unknown_falls_back_to_default() {
        let registry = LocaleRegistry::builtin();
        assert_eq!(registry.label(&code("xx")), "🇬🇧 English");
        assert_eq!(registry.label(&code("")), "🇬🇧 English");
    }

    // ==================== Root Matching Tests ====================

    #[test]
    fn test_non_default_root_matches_locale_roots_only() {
        let registry = LocaleRegistry::builtin();
        assert_eq!(
            registry.non_default_root("/es/index.html").map(|l| l.code.as_str()),
            Some("es")
        );
        assert!(registry.non_default_root("/index.html").is_none());
        assert!(registry.non_default_root("/es/pricing.html").is_none());
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_new_with_extra_locale() {
        let registry = LocaleRegistry::new(
            [("en", "/index.html"), ("pt", "/pt/index.html")],
            &code("en"),
        )
        .unwrap();
        let pt = registry.get(&code("pt")).unwrap();
        assert_eq!(pt.label, "PT");
        assert!(!pt.is_default);
    }

    #[test]
    fn test_new_rejects_empty() {
        let entries: Vec<(&str, &str)> = Vec::new();
        assert_eq!(
            LocaleRegistry::new(entries, &code("en")).unwrap_err(),
            RegistryError::Empty
        );
    }

    #[test]
    fn test_new_rejects_missing_default() {
        let err = LocaleRegistry::new([("de", "/de/index.html")], &code("en")).unwrap_err();
        assert_eq!(err, RegistryError::NoDefault("en".to_string()));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let err = LocaleRegistry::new(
            [("en", "/index.html"), ("EN", "/en/index.html")],
            &code("en"),
        )
        .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateCode("en".to_string()));
    }

    #[test]
    fn test_default_can_be_non_english() {
        let registry = LocaleRegistry::new(
            [("en", "/en/index.html"), ("de", "/index.html")],
            &code("de"),
        )
        .unwrap();
        assert_eq!(registry.default_locale().code, "de");
        assert!(registry.non_default_root("/en/index.html").is_some());
    }

    // ==================== Parse Tests ====================

    #[test]
    fn test_parse_table() {
        let registry =
            LocaleRegistry::parse("en=/index.html,de=/de/index.html", &code("en")).unwrap();
        assert_eq!(registry.list().len(), 2);
        assert_eq!(registry.get(&code("de")).unwrap().group_separator, '.');
    }

    #[test]
    fn test_parse_rejects_missing_equals() {
        let err = LocaleRegistry::parse("en", &code("en")).unwrap_err();
        assert_eq!(err, RegistryError::InvalidEntry("en".to_string()));
    }

    #[test]
    fn test_parse_rejects_relative_path() {
        let err = LocaleRegistry::parse("en=index.html", &code("en")).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidEntry(_)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RegistryError::NoDefault("en".to_string()).to_string(),
            "default locale 'en' is not in the locale table"
        );
    }
}
