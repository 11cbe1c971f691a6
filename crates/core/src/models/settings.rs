use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

pub const DEFAULT_REFERENCE_CURRENCY: &str = "brl";
pub const DEFAULT_API_BASE_URL: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Calculator configuration. Lives only for the session; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Currency all prices and values are expressed in (lower-case, e.g. "brl").
    pub reference_currency: String,

    /// Base URL of the price service.
    pub api_base_url: String,

    /// Per-request timeout. Not applied on wasm32, where the browser owns it.
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reference_currency: DEFAULT_REFERENCE_CURRENCY.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.normalized()
    }

    /// Validate and lower-case the currency code.
    pub fn normalized(mut self) -> Result<Self, CoreError> {
        self.reference_currency = normalize_currency(&self.reference_currency)?;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        normalize_currency(&self.reference_currency)?;
        if self.api_base_url.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "Price service base URL must not be empty".into(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(CoreError::InvalidInput(
                "Request timeout must be at least one second".into(),
            ));
        }
        Ok(())
    }
}

/// Validate a currency code and return it lower-cased, the form the price
/// service expects. Codes must be exactly 3 ASCII letters.
pub fn normalize_currency(currency: &str) -> Result<String, CoreError> {
    let trimmed = currency.trim().to_lowercase();
    if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CoreError::InvalidInput(format!(
            "Invalid currency code '{currency}': must be exactly 3 ASCII letters (e.g., BRL, USD, EUR)"
        )));
    }
    Ok(trimmed)
}
