use std::env;

use tracing::warn;
use url::Url;

/// Seasonal flavors page scraped by the one-shot intent.
pub const DEFAULT_FLAVORS_URL: &str = "http://www.mollymoon.com/flavors/seasonal";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Page the skill scrapes for the current flavor list.
    pub flavors_url: String,
    /// When set, inbound envelopes must carry this application id.
    pub application_id: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let flavors_url = match env::var("FLAVORS_URL") {
            Ok(raw) => match Url::parse(&raw) {
                Ok(_) => raw,
                Err(e) => {
                    warn!("Ignoring invalid FLAVORS_URL ({e}), using default");
                    DEFAULT_FLAVORS_URL.to_string()
                }
            },
            Err(_) => DEFAULT_FLAVORS_URL.to_string(),
        };

        Self {
            flavors_url,
            application_id: env::var("SKILL_APPLICATION_ID").ok(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            flavors_url: DEFAULT_FLAVORS_URL.to_string(),
            application_id: None,
        }
    }
}
