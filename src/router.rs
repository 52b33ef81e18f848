//! Locale-aware navigation for the language switcher.
//!
//! Switching locale lands on the requested locale's root document. The
//! current sub-page is not mirrored, but the in-page `#anchor` is carried
//! over verbatim.

use crate::i18n::{LocaleCode, LocaleRegistry};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Where a locale switch should navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResolution {
    /// Root document of the destination locale, without the anchor
    pub destination_path: String,

    /// Fragment of the current location, without the leading `#` (may be empty)
    pub anchor: String,

    /// Non-default locale whose root the current path pointed at, if any
    pub from_locale: Option<LocaleCode>,

    /// Whether the requested locale was unknown and the default was used
    pub fell_back: bool,
}

impl PathResolution {
    /// Destination with the anchor appended, ready for the navigator.
    pub fn href(&self) -> String {
        if self.anchor.is_empty() {
            self.destination_path.clone()
        } else {
            format!("{}#{}", self.destination_path, self.anchor)
        }
    }
}

impl fmt::Display for PathResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// Resolves locale switches against a locale table.
#[derive(Debug, Clone, Copy)]
pub struct LocaleRouter<'a> {
    registry: &'a LocaleRegistry,
}

impl<'a> LocaleRouter<'a> {
    pub fn new(registry: &'a LocaleRegistry) -> Self {
        Self { registry }
    }

    /// Compute the destination for switching `current_path` to `requested`.
    ///
    /// Never fails: a locale missing from the table resolves to the default
    /// locale's root.
    ///
    /// # Example
    /// ```
    /// use landing_core::i18n::{LocaleCode, LocaleRegistry};
    /// use landing_core::router::LocaleRouter;
    ///
    /// let registry = LocaleRegistry::builtin();
    /// let router = LocaleRouter::new(&registry);
    /// let resolution = router.resolve("/de/index.html#pricing", &LocaleCode::new("fr"));
    ///
    /// assert_eq!(resolution.destination_path, "/fr/index.html");
    /// assert_eq!(resolution.href(), "/fr/index.html#pricing");
    /// ```
    pub fn resolve(&self, current_path: &str, requested: &LocaleCode) -> PathResolution {
        let default = self.registry.default_locale();

        let current_path = current_path.strip_suffix('/').unwrap_or(current_path);
        let (path, anchor) = match current_path.split_once('#') {
            Some((path, anchor)) => (path, anchor),
            None => (current_path, ""),
        };
        let path = if path.is_empty() {
            default.base_path.as_str()
        } else {
            path
        };

        let from_locale = self.registry.non_default_root(path).map(|l| l.code.clone());

        let (destination, fell_back) = if requested == &default.code {
            (default.base_path.as_str(), false)
        } else {
            match self.registry.base_path(requested) {
                Some(base) => (base, false),
                None => {
                    debug!(locale = %requested, "Unknown locale, using default root");
                    (default.base_path.as_str(), true)
                }
            }
        };

        debug!(
            from = %current_path,
            to = %destination,
            current_locale = ?from_locale.as_ref().map(LocaleCode::as_str),
            "Resolved locale switch"
        );

        PathResolution {
            destination_path: destination.to_string(),
            anchor: anchor.to_string(),
            from_locale,
            fell_back,
        }
    }
}
