use super::StorefrontError;
use crate::render::DEFAULT_CURRENCY;

pub const BUFFER_SIZE_VAR: &str = "STOREFRONT_BUFFER_SIZE";
pub const CURRENCY_VAR: &str = "STOREFRONT_CURRENCY";
pub const LOG_VAR: &str = "STOREFRONT_LOG";

/// Runtime settings for a storefront session.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Capacity of the session actor's request queue.
    pub buffer_size: usize,
    /// Symbol prefixed to every rendered price.
    pub currency: String,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            currency: DEFAULT_CURRENCY.to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, StorefrontError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`, falling back to the defaults for
    /// unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StorefrontError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(BUFFER_SIZE_VAR) {
            config.buffer_size = match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(StorefrontError::InvalidConfig(format!(
                        "{} must be a positive integer, got {:?}",
                        BUFFER_SIZE_VAR, raw
                    )))
                }
            };
        }
        if let Some(currency) = lookup(CURRENCY_VAR) {
            config.currency = currency;
        }
        if let Some(filter) = lookup(LOG_VAR) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = StorefrontConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.buffer_size, 32);
        assert_eq!(config.currency, "₹");
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            (BUFFER_SIZE_VAR, " 8 "),
            (CURRENCY_VAR, "$"),
            (LOG_VAR, "debug"),
        ]))
        .unwrap();
        assert_eq!(config.buffer_size, 8);
        assert_eq!(config.currency, "$");
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_rejects_bad_buffer_size() {
        for raw in ["0", "lots", "-1"] {
            let err = StorefrontConfig::from_lookup(lookup_from(&[(BUFFER_SIZE_VAR, raw)])).unwrap_err();
            assert!(matches!(err, StorefrontError::InvalidConfig(_)));
        }
    }
}
