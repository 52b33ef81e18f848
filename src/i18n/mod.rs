//! Internationalization (i18n) module for the site's published locales.
//!
//! # Architecture
//!
//! - `locale`: Normalized `LocaleCode` value type
//! - `registry`: The configured locale table (root paths, labels, separators)
//! - `strings`: Localized lead-form strings and the `MessageSource` seam
//!
//! # Example
//!
//! ```rust
//! use landing_core::i18n::{FormStrings, LocaleCode, LocaleRegistry};
//!
//! let registry = LocaleRegistry::builtin();
//! let german = LocaleCode::new("de");
//!
//! assert_eq!(registry.base_path(&german), Some("/de/index.html"));
//! assert_eq!(registry.label(&german), "🇩🇪 Deutsch");
//! assert!(FormStrings::for_locale(&german).err_email.contains("E-Mail"));
//! ```

mod locale;
mod registry;
mod strings;

pub use locale::LocaleCode;
pub use registry::{LocaleConfig, LocaleRegistry, RegistryError};
pub use strings::{FormStrings, MessageSource, ENGLISH_STRINGS};
