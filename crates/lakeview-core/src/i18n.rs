//! Built-in message catalog.

use std::collections::HashMap;

/// Locale every lookup falls back to.
pub const DEFAULT_LOCALE: &str = "en-US";

const EN_US: &[(&str, &str)] = &[
    ("NetworkConnectivity.Offline", "You are offline. Reconnect to continue browsing the catalog."),
    ("Dataset.Data", "Data"),
    ("Dataset.Wiki", "Wiki"),
    ("Dataset.Graph", "Graph"),
    ("Dataset.Reflections", "Reflections"),
    ("Dataset.History", "History"),
    ("Resource.Tree.All", "All"),
    ("Resource.Tree.Starred", "Starred"),
    ("Resource.Tree.Empty", "No items"),
    ("Resource.Tree.Loading", "Loading..."),
    ("Resource.Details.None", "Nothing selected"),
];

/// Messages for one locale.
#[derive(Debug, Clone)]
pub struct Messages {
    locale: String,
    table: HashMap<&'static str, &'static str>,
}

impl Default for Messages {
    fn default() -> Self {
        Self::for_locale(DEFAULT_LOCALE)
    }
}

impl Messages {
    /// Messages for `locale`. Only `en-US` ships, so other locales fall back to it.
    pub fn for_locale(locale: &str) -> Self {
        let locale = if locale.eq_ignore_ascii_case(DEFAULT_LOCALE) {
            locale.to_string()
        } else {
            tracing::debug!(requested = locale, "locale not bundled, using {}", DEFAULT_LOCALE);
            DEFAULT_LOCALE.to_string()
        };
        Self {
            locale,
            table: EN_US.iter().copied().collect(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Look up `key`. Missing keys are returned as-is.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.table.get(key).copied().unwrap_or(key)
    }
}
