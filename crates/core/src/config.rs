//! Storefront configuration

use serde::Deserialize;
use thiserror::Error;

use crate::cart::DEFAULT_STORAGE_KEY;

/// Payment flow the checkout hands off to.
pub const DEFAULT_CHECKOUT_URL: &str = "https://shradzhiremath-ui.github.io/payment/";

/// Page shown after the contact form is submitted.
pub const DEFAULT_CONTACT_CONFIRMATION_URL: &str = "thankyou.html";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing error
    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// The cart storage key is blank
    #[error("storage_key must not be empty")]
    EmptyStorageKey,
}

/// Storefront configuration.
///
/// Every field is optional in YAML and falls back to the storefront defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorefrontConfig {
    /// Key the cart is stored under.
    pub storage_key: String,

    /// Destination after a successful checkout.
    pub checkout_url: String,

    /// Destination after a successful contact form submission.
    pub contact_confirmation_url: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            checkout_url: DEFAULT_CHECKOUT_URL.to_string(),
            contact_confirmation_url: DEFAULT_CONTACT_CONFIRMATION_URL.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed, has unknown fields, or fails
    /// [`validate`](Self::validate).
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_norway::from_str(yaml)?;

        config.validate()?;

        Ok(config)
    }

    /// Check the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStorageKey`] if the storage key is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }

        Ok(())
    }
}
