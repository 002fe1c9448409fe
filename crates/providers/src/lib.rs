//! Completion provider implementations.
//!
//! Currently a single backend: the Anthropic Messages API. The session layer
//! only sees the `Provider` trait from `craftsman-core`, so additional
//! backends slot in without touching callers.

pub mod anthropic;

pub use anthropic::AnthropicProvider;

use craftsman_config::AppConfig;
use craftsman_core::error::ProviderError;

/// Build the configured provider.
///
/// Fails with [`ProviderError::NotConfigured`] when no API key is available;
/// callers surface that before entering any interactive loop.
pub fn from_config(config: &AppConfig) -> Result<AnthropicProvider, ProviderError> {
    let api_key = config
        .api_key
        .as_deref()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| {
            ProviderError::NotConfigured(
                "no API key — set ANTHROPIC_API_KEY or add api_key to config.toml".into(),
            )
        })?;

    Ok(AnthropicProvider::new(api_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftsman_core::Provider;

    #[test]
    fn from_config_requires_api_key() {
        let config = AppConfig::default();
        let err = from_config(&config).unwrap_err();
        assert!(matches!(err, ProviderError::NotConfigured(_)));
    }

    #[test]
    fn from_config_builds_provider() {
        let config = AppConfig {
            api_key: Some("sk-ant-test".into()),
            ..AppConfig::default()
        };
        let provider = from_config(&config).unwrap();
        assert_eq!(provider.name(), "anthropic");
    }
}
