use crate::logging::DEFAULT_FILTER;

/// Settings bundled with every build (mobile and web have no `.env` file).
pub const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const LOG_KEY: &str = "SOFTSELL_LOG";
pub const CONTACT_ENDPOINT_KEY: &str = "SOFTSELL_CONTACT_ENDPOINT";
pub const CONTACT_API_KEY_KEY: &str = "SOFTSELL_CONTACT_API_KEY";

const KEYS: [&str; 3] = [LOG_KEY, CONTACT_ENDPOINT_KEY, CONTACT_API_KEY_KEY];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub log_filter: String,
    pub contact_endpoint: Option<String>,
    pub contact_api_key: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_FILTER.to_string(),
            contact_endpoint: None,
            contact_api_key: None,
        }
    }
}

impl SiteConfig {
    /// Bundled defaults, overridden by the process environment on native targets.
    pub fn load() -> Self {
        let mut config = Self::from_source(BUNDLED_CONFIG);
        #[cfg(not(target_arch = "wasm32"))]
        config.overlay(|key| std::env::var(key).ok());
        config
    }

    pub fn from_source(source: &str) -> Self {
        let mut config = Self::default();
        for (key, value) in parse_env_lines(source) {
            config.apply(key, value);
        }
        config
    }

    pub fn overlay(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for key in KEYS {
            if let Some(value) = lookup(key) {
                self.apply(key, &value);
            }
        }
    }

    fn apply(&mut self, key: &str, value: &str) {
        let value = value.trim();
        let setting = (!value.is_empty()).then(|| value.to_string());
        match key {
            LOG_KEY => {
                self.log_filter = setting.unwrap_or_else(|| DEFAULT_FILTER.to_string());
            }
            CONTACT_ENDPOINT_KEY => self.contact_endpoint = setting,
            CONTACT_API_KEY_KEY => self.contact_api_key = setting,
            other => tracing::trace!(key = other, "ignoring unknown config key"),
        }
    }
}

/// Parses `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_env_lines(source: &str) -> impl Iterator<Item = (&str, &str)> {
    source.lines().filter_map(|line| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let (key, value) = line.split_once('=')?;
        Some((key.trim(), value.trim()))
    })
}
