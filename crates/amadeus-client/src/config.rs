//! Configuration for AmadeusClient.

use std::env;

use travel_core::ProviderError;

/// Amadeus test environment.
pub const DEFAULT_API_URL: &str = "https://test.api.amadeus.com";

/// Currency offers are priced in.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Configuration for AmadeusClient.
#[derive(Debug, Clone)]
pub struct AmadeusConfig {
    /// Base URL, without a trailing slash.
    pub api_url: String,

    /// Bearer token, refreshed out of band.
    pub access_token: String,

    /// Currency requested for flight and hotel offers.
    pub currency: String,
}

impl Default for AmadeusConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            access_token: String::new(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl AmadeusConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `AMADEUS_ACCESS_TOKEN` - Bearer token for the API
    ///
    /// Optional environment variables:
    /// - `AMADEUS_API_URL` - API URL (default: https://test.api.amadeus.com)
    /// - `AMADEUS_CURRENCY` - Offer currency (default: USD)
    pub fn from_env() -> Result<Self, ProviderError> {
        let access_token = env::var("AMADEUS_ACCESS_TOKEN").map_err(|_| {
            ProviderError::Configuration("AMADEUS_ACCESS_TOKEN not set".to_string())
        })?;

        let api_url = env::var("AMADEUS_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let currency =
            env::var("AMADEUS_CURRENCY").unwrap_or_else(|_| DEFAULT_CURRENCY.to_string());

        Ok(Self {
            api_url,
            access_token,
            currency,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> AmadeusConfigBuilder {
        AmadeusConfigBuilder::default()
    }
}

/// Builder for AmadeusConfig.
#[derive(Debug, Default)]
pub struct AmadeusConfigBuilder {
    config: AmadeusConfig,
}

impl AmadeusConfigBuilder {
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config.access_token = token.into();
        self
    }

    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.config.currency = currency.into();
        self
    }

    pub fn build(self) -> AmadeusConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AmadeusConfig::default();
        assert_eq!(config.api_url, "https://test.api.amadeus.com");
        assert!(config.access_token.is_empty());
        assert_eq!(config.currency, "USD");
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let config = AmadeusConfig::builder()
            .access_token("token")
            .api_url("https://api.amadeus.com/")
            .currency("EUR")
            .build();
        assert_eq!(config.api_url, "https://api.amadeus.com");
        assert_eq!(config.access_token, "token");
        assert_eq!(config.currency, "EUR");
    }

    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_amadeus_vars() {
            std::env::remove_var("AMADEUS_ACCESS_TOKEN");
            std::env::remove_var("AMADEUS_API_URL");
            std::env::remove_var("AMADEUS_CURRENCY");
        }

        // Missing token
        clear_all_amadeus_vars();
        match AmadeusConfig::from_env() {
            Err(ProviderError::Configuration(msg)) => {
                assert!(msg.contains("AMADEUS_ACCESS_TOKEN"))
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }

        // Token only, defaults used
        std::env::set_var("AMADEUS_ACCESS_TOKEN", "abc");
        let config = AmadeusConfig::from_env().unwrap();
        assert_eq!(config.access_token, "abc");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.currency, DEFAULT_CURRENCY);

        // Overrides
        std::env::set_var("AMADEUS_API_URL", "https://api.amadeus.com/");
        std::env::set_var("AMADEUS_CURRENCY", "EUR");
        let config = AmadeusConfig::from_env().unwrap();
        assert_eq!(config.api_url, "https://api.amadeus.com");
        assert_eq!(config.currency, "EUR");

        clear_all_amadeus_vars();
    }
}
