use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read selector config: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse selector config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("No selectors configured for site: {0}")]
    UnknownSite(String),
}

/// CSS selectors for one target site.
///
/// Field names match the original JSON config keys, so an existing
/// `selectors.json` loads unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSelectors {
    /// Selector for the page-title element
    pub title: String,

    /// Selector matching the row-like containers of the infobox
    pub infobox_rows: String,

    /// Header substring identifying the location row (case-insensitive)
    pub location_header_text: String,
}

/// Named selector sets, loaded once from static configuration data and
/// treated as read-only. Injected into the live verifier rather than
/// read from a global, so the verifier stays testable without
/// filesystem access.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectorConfig {
    sites: HashMap<String, SiteSelectors>,
}

impl SelectorConfig {
    /// Load selector configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: SelectorConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Get the selectors for a named site
    pub fn site(&self, name: &str) -> Result<&SiteSelectors, ConfigError> {
        self.sites
            .get(name)
            .ok_or_else(|| ConfigError::UnknownSite(name.to_string()))
    }

    pub fn insert(&mut self, name: impl Into<String>, selectors: SiteSelectors) {
        self.sites.insert(name.into(), selectors);
    }
}

/// Default configuration carries the Wikipedia selector set the
/// reference verifier targets.
impl Default for SelectorConfig {
    fn default() -> Self {
        let mut sites = HashMap::new();
        sites.insert("wikipedia".to_string(), SiteSelectors::wikipedia());
        SelectorConfig { sites }
    }
}

impl SiteSelectors {
    /// Selectors for Wikipedia article pages
    pub fn wikipedia() -> Self {
        SiteSelectors {
            title: "#firstHeading".to_string(),
            infobox_rows: ".infobox tr".to_string(),
            location_header_text: "location".to_string(),
        }
    }
}
