use std::sync::Arc;

use crate::errors::CoreError;
use crate::models::portfolio::normalize_id;
use crate::providers::traits::PriceProvider;

/// Fetches asset prices through a `PriceProvider`, normalizing ids and
/// rejecting nonsensical quotes before they reach any calculation.
///
/// No caching and no retries: every call is one request, and a failed lookup
/// stands until the caller asks again.
#[derive(Clone)]
pub struct PriceService {
    provider: Arc<dyn PriceProvider>,
}

impl PriceService {
    pub fn new(provider: Arc<dyn PriceProvider>) -> Self {
        Self { provider }
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Current price of `asset_id` in the reference currency.
    pub async fn get_price(&self, asset_id: &str) -> Result<f64, CoreError> {
        let id = Self::require_id(asset_id, "Cryptocurrency ID")?;
        log::debug!("Fetching price for {id} from {}", self.provider.name());

        let price = self.provider.get_price(&id).await?;
        self.validate_quote(&id, price)
    }

    /// Current price of one unit of `asset_id` in `fiat_id`.
    pub async fn get_exchange_rate(&self, asset_id: &str, fiat_id: &str) -> Result<f64, CoreError> {
        let id = Self::require_id(asset_id, "Source cryptocurrency ID")?;
        let fiat = Self::require_id(fiat_id, "Target fiat ID")?;
        log::debug!("Fetching {id}/{fiat} rate from {}", self.provider.name());

        let rate = self.provider.get_exchange_rate(&id, &fiat).await?;
        self.validate_quote(&id, rate)
    }

    fn require_id(raw: &str, what: &str) -> Result<String, CoreError> {
        let id = normalize_id(raw);
        if id.is_empty() {
            return Err(CoreError::InvalidInput(format!("{what} is required")));
        }
        Ok(id)
    }

    /// Quotes must be finite and strictly positive.
    fn validate_quote(&self, id: &str, value: f64) -> Result<f64, CoreError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(CoreError::Api {
                provider: self.provider.name().to_string(),
                message: format!(
                    "Invalid price returned for {id}: {value} (must be finite and positive)"
                ),
            });
        }
        Ok(value)
    }
}
