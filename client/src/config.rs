//! Public (browser-visible) configuration.
//!
//! The host renders these values into `<meta>` tags in the SSR shell; the
//! hydrated app reads them back before mounting.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const RECAPTCHA_SITE_KEY_META: &str = "recaptcha-site-key";

/// reCAPTCHA v2 script, loaded with explicit rendering.
pub const RECAPTCHA_SCRIPT_URL: &str = "https://www.google.com/recaptcha/api.js?render=explicit";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PublicConfig {
    /// Client key for the bot-challenge widget. Empty when not configured.
    pub recaptcha_site_key: String,
}

impl PublicConfig {
    #[must_use]
    pub fn new(recaptcha_site_key: impl Into<String>) -> Self {
        Self { recaptcha_site_key: recaptcha_site_key.into().trim().to_owned() }
    }

    #[must_use]
    pub fn challenge_configured(&self) -> bool {
        !self.recaptcha_site_key.is_empty()
    }

    /// Read the values the SSR shell published.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn from_document() -> Self {
        let selector = format!("meta[name=\"{RECAPTCHA_SITE_KEY_META}\"]");
        let site_key = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(&selector).ok().flatten())
            .and_then(|el| el.get_attribute("content"))
            .unwrap_or_default();
        Self::new(site_key)
    }
}
