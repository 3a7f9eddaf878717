//! Localized strings for the counter
//!
//! Locale resources are JSON objects (`{"title": "..."}`) named
//! `counter-app.<lang>.json`. The bundled ones are embedded at compile
//! time; hosts can load others with [`Localizer::from_json`].

use serde::Deserialize;
use tracing::debug;

use crate::error::{CounterError, CounterResult};

/// Title shown when no locale provides one
pub const DEFAULT_TITLE: &str = "Title";

/// Bundled locale resources, keyed by primary language subtag
const BUNDLED: &[(&str, &str)] = &[
    ("ar", include_str!("../locales/counter-app.ar.json")),
    ("es", include_str!("../locales/counter-app.es.json")),
    ("fr", include_str!("../locales/counter-app.fr.json")),
    ("ja", include_str!("../locales/counter-app.ja.json")),
];

/// Keys a locale resource may define; missing keys keep the defaults
#[derive(Debug, Default, Deserialize)]
struct LocaleResource {
    title: Option<String>,
}

/// Resolved strings for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localizer {
    locale: String,
    title: String,
}

impl Default for Localizer {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl Localizer {
    /// Resolve a BCP 47 style tag (`ar`, `es-MX`, `fr_CA`) against the
    /// bundled resources, falling back to the primary subtag and then to
    /// the defaults.
    #[must_use]
    pub fn for_locale(tag: &str) -> Self {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
        let primary = normalized.split('-').next().unwrap_or_default();

        let Some((lang, source)) = BUNDLED.iter().find(|(lang, _)| *lang == primary) else {
            debug!(locale = %tag, "no bundled locale, using defaults");
            return Self::default();
        };

        match Self::from_json(lang, source) {
            Ok(localizer) => localizer,
            Err(e) => {
                debug!(locale = %lang, error = %e, "bundled locale unreadable, using defaults");
                Self::default()
            }
        }
    }

    /// Load a locale resource from JSON text
    pub fn from_json(locale: &str, source: &str) -> CounterResult<Self> {
        let resource: LocaleResource = serde_json::from_str(source)
            .map_err(|e| CounterError::Locale(format!("{locale}: {e}")))?;

        Ok(Self {
            locale: locale.to_string(),
            title: resource.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        })
    }

    /// Languages with a bundled resource
    #[must_use]
    pub fn bundled_locales() -> Vec<&'static str> {
        BUNDLED.iter().map(|(lang, _)| *lang).collect()
    }

    /// The locale these strings were resolved for
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Localized title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title to display: the explicit one when set, otherwise the localized one
    #[must_use]
    pub fn display_title<'a>(&'a self, explicit: &'a str) -> &'a str {
        if explicit.trim().is_empty() {
            &self.title
        } else {
            explicit
        }
    }
}
