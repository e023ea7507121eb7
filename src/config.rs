//! App Configuration
//!
//! Defaults, overridable from `<meta>` tags in the host page.

use log::LevelFilter;

use crate::lifecycle::StaleResponses;

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

const META_API_BASE_URL: &str = "todo-api-base-url";
const META_LOG_LEVEL: &str = "todo-log-level";
const META_STALE_RESPONSES: &str = "todo-stale-responses";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LevelFilter,
    /// Handling of detail responses to superseded requests
    pub stale_responses: StaleResponses,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: LevelFilter::Info,
            stale_responses: StaleResponses::default(),
        }
    }
}

impl AppConfig {
    /// Defaults merged with whatever the host page declares
    pub fn from_document() -> Self {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Self::default();
        };
        Self::default().with_overrides(
            meta_content(&document, META_API_BASE_URL),
            meta_content(&document, META_LOG_LEVEL),
            meta_content(&document, META_STALE_RESPONSES),
        )
    }

    /// Apply raw override values; blank or unparsable ones are ignored
    pub fn with_overrides(
        mut self,
        api_base_url: Option<String>,
        log_level: Option<String>,
        stale_responses: Option<String>,
    ) -> Self {
        if let Some(url) = api_base_url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            self.api_base_url = url;
        }
        if let Some(level) = log_level.and_then(|l| l.trim().parse::<LevelFilter>().ok()) {
            self.log_level = level;
        }
        if let Some(policy) = stale_responses.and_then(|p| p.trim().parse::<StaleResponses>().ok()) {
            self.stale_responses = policy;
        }
        self
    }
}

fn meta_content(document: &web_sys::Document, name: &str) -> Option<String> {
    document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("content"))
}
