use crate::errors::CoreError;
use crate::models::analytics::Conversion;
use crate::models::portfolio::normalize_id;
use crate::services::price_service::PriceService;
use crate::services::validation::{require_positive, require_text};

/// Converts an amount of a cryptocurrency into a fiat currency.
///
/// E.g., convert(0.5, "bitcoin", "brl") → 0.5 × the BTC/BRL rate.
/// The rate comes straight from the price service; there is no two-step
/// conversion through the reference currency.
pub struct CurrencyService;

impl CurrencyService {
    pub fn new() -> Self {
        Self
    }

    pub async fn convert(
        &self,
        price_service: &PriceService,
        amount: f64,
        asset_id: &str,
        fiat_id: &str,
    ) -> Result<Conversion, CoreError> {
        let amount = require_positive(amount, "Amount")?;
        let asset_id = normalize_id(require_text(asset_id, "Source cryptocurrency ID")?);
        let fiat_id = normalize_id(require_text(fiat_id, "Target fiat ID")?);

        let rate = price_service.get_exchange_rate(&asset_id, &fiat_id).await?;

        Ok(Conversion {
            asset_id,
            fiat_id,
            amount,
            rate,
            converted: amount * rate,
        })
    }
}

impl Default for CurrencyService {
    fn default() -> Self {
        Self::new()
    }
}
