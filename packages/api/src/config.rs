//! Webhook endpoint configuration from environment variables.

use reqwest::Url;

/// Environment variable holding the spreadsheet webhook URL.
pub const ENDPOINT_ENV: &str = "PARTY_SHEETS_URL";

/// Where duplicate checks and submissions are sent. `None` disables both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EndpointConfig {
    pub url: Option<Url>,
}

impl EndpointConfig {
    pub fn new(url: Url) -> Self {
        Self { url: Some(url) }
    }

    /// Read [`ENDPOINT_ENV`].
    ///
    /// Native builds look at the process environment (after loading `.env`);
    /// every build falls back to the value captured when the crate was compiled,
    /// which is the only source available in the browser.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            if let Ok(raw) = std::env::var(ENDPOINT_ENV) {
                return Self::parse(&raw);
            }
        }
        Self::parse(option_env!("PARTY_SHEETS_URL").unwrap_or_default())
    }

    /// Parse a raw setting. Blank or invalid values leave the endpoint unset.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            tracing::warn!("{ENDPOINT_ENV} is not set; submissions will be skipped");
            return Self::default();
        }
        match Url::parse(raw) {
            Ok(url) => Self::new(url),
            Err(e) => {
                tracing::warn!("{ENDPOINT_ENV} is not a valid URL ({e}); submissions will be skipped");
                Self::default()
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_url() {
        let config = EndpointConfig::parse("  https://script.example.com/macros/s/abc/exec \n");
        assert!(config.is_configured());
        assert_eq!(
            config.url.unwrap().as_str(),
            "https://script.example.com/macros/s/abc/exec"
        );
    }

    #[test]
    fn test_blank_or_invalid_is_unconfigured() {
        assert!(!EndpointConfig::parse("").is_configured());
        assert!(!EndpointConfig::parse("   ").is_configured());
        assert!(!EndpointConfig::parse("not a url").is_configured());
    }
}
