use async_trait::async_trait;

use crate::errors::CoreError;

/// Trait abstraction for the price lookup service.
///
/// The valuation engine and the calculators only talk to this trait, so the
/// concrete HTTP provider can be swapped (or mocked in tests) without touching
/// them. Implementations classify failures into `CoreError::NotFound`,
/// `Network`, `ServerError` or `RequestError`.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PriceProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Current price of one unit of `asset_id` in the reference currency.
    async fn get_price(&self, asset_id: &str) -> Result<f64, CoreError>;

    /// Current price of one unit of `asset_id` expressed in `fiat_id`.
    async fn get_exchange_rate(&self, asset_id: &str, fiat_id: &str) -> Result<f64, CoreError>;
}
