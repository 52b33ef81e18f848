use crate::i18n::{LocaleCode, LocaleRegistry};
use anyhow::{Context, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SiteConfig {
    // Locales
    pub locales: LocaleRegistry,
    pub html_lang: LocaleCode,

    // Page
    pub current_path: String,

    // Timing
    pub success_display: Duration,
    pub counter_duration: Duration,
    pub frame_interval: Duration,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        let default_locale = std::env::var("SITE_DEFAULT_LOCALE")
            .map(|v| LocaleCode::new(&v))
            .unwrap_or_else(|_| LocaleCode::new("en"));

        let locales = match std::env::var("SITE_LOCALES") {
            Ok(table) => LocaleRegistry::parse(&table, &default_locale)
                .with_context(|| format!("SITE_LOCALES is invalid: '{}'", table))?,
            Err(_) => LocaleRegistry::new(
                LocaleRegistry::builtin()
                    .list()
                    .iter()
                    .map(|l| (l.code.clone(), l.base_path.clone())),
                &default_locale,
            )
            .context("SITE_DEFAULT_LOCALE is not one of the built-in locales")?,
        };

        Ok(Self {
            // Locales
            html_lang: std::env::var("SITE_HTML_LANG")
                .map(|v| LocaleCode::new(&v))
                .unwrap_or(default_locale),
            locales,

            // Page
            current_path: std::env::var("SITE_CURRENT_PATH")
                .unwrap_or_else(|_| "/index.html".to_string()),

            // Timing
            success_display: millis_from_env("SUCCESS_DISPLAY_MS", 3400),
            counter_duration: millis_from_env("COUNTER_DURATION_MS", 1400),
            frame_interval: nonzero_millis_from_env("FRAME_INTERVAL_MS", 16),
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            locales: LocaleRegistry::builtin(),
            html_lang: LocaleCode::new("en"),
            current_path: "/index.html".to_string(),
            success_display: Duration::from_millis(3400),
            counter_duration: Duration::from_millis(1400),
            frame_interval: Duration::from_millis(16),
        }
    }
}

fn millis_from_env(key: &str, default: u64) -> Duration {
    let ms = std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default);
    Duration::from_millis(ms)
}

/// Like `millis_from_env`, but `0` also falls back to `default`.
fn nonzero_millis_from_env(key: &str, default: u64) -> Duration {
    let ms = std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|&ms: &u64| ms > 0)
        .unwrap_or(default);
    Duration::from_millis(ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 7] = [
        "SITE_DEFAULT_LOCALE",
        "SITE_LOCALES",
        "SITE_HTML_LANG",
        "SITE_CURRENT_PATH",
        "SUCCESS_DISPLAY_MS",
        "COUNTER_DURATION_MS",
        "FRAME_INTERVAL_MS",
    ];

    fn clear_env() {
        for key in KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = SiteConfig::from_env().unwrap();
        assert_eq!(config.html_lang, "en");
        assert_eq!(config.current_path, "/index.html");
        assert_eq!(config.success_display, Duration::from_millis(3400));
        assert_eq!(config.counter_duration, Duration::from_millis(1400));
        assert_eq!(config.locales.list().len(), 5);
        assert_eq!(config.locales.default_locale().code, "en");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("SITE_LOCALES", "en=/index.html,nl=/nl/index.html");
        std::env::set_var("SITE_HTML_LANG", "NL");
        std::env::set_var("SITE_CURRENT_PATH", "/nl/index.html#team");
        std::env::set_var("SUCCESS_DISPLAY_MS", "500");

        let config = SiteConfig::from_env().unwrap();
        assert_eq!(config.html_lang, "nl");
        assert_eq!(config.current_path, "/nl/index.html#team");
        assert_eq!(config.success_display, Duration::from_millis(500));
        assert_eq!(config.locales.base_path(&LocaleCode::new("nl")), Some("/nl/index.html"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_number_uses_default() {
        clear_env();
        std::env::set_var("COUNTER_DURATION_MS", "soon");
        let config = SiteConfig::from_env().unwrap();
        assert_eq!(config.counter_duration, Duration::from_millis(1400));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_zero_frame_interval_uses_default() {
        clear_env();
        std::env::set_var("FRAME_INTERVAL_MS", "0");
        let config = SiteConfig::from_env().unwrap();
        assert_eq!(config.frame_interval, Duration::from_millis(16));

        std::env::set_var("FRAME_INTERVAL_MS", "40");
        let config = SiteConfig::from_env().unwrap();
        assert_eq!(config.frame_interval, Duration::from_millis(40));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_malformed_locales_is_error() {
        clear_env();
        std::env::set_var("SITE_LOCALES", "en");
        let err = SiteConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("SITE_LOCALES"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_unknown_default_is_error() {
        clear_env();
        std::env::set_var("SITE_DEFAULT_LOCALE", "pt");
        assert!(SiteConfig::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_non_english_default() {
        clear_env();
        std::env::set_var("SITE_DEFAULT_LOCALE", "de");
        let config = SiteConfig::from_env().unwrap();
        assert_eq!(config.locales.default_locale().code, "de");
        assert_eq!(config.html_lang, "de");
        clear_env();
    }

    #[test]
    fn test_default_matches_builtin_values() {
        let config = SiteConfig::default();
        assert_eq!(config.frame_interval, Duration::from_millis(16));
        assert_eq!(config.locales.default_locale().base_path, "/index.html");
    }
}
