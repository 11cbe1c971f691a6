use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::settings::Settings;
use super::traits::PriceProvider;

const PROVIDER_NAME: &str = "CoinGecko";

/// CoinGecko API provider for cryptocurrency prices.
///
/// - **Free**: No API key required for the public `simple/price` endpoint.
/// - **Endpoint**: `/simple/price?ids={id}&vs_currencies={currency}`
///
/// Note: CoinGecko uses lowercase ids like "bitcoin", "ethereum" and answers
/// `200 {}` for ids it does not know, so a missing entry is treated the same
/// as a 404.
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
    reference_currency: String,
}

impl CoinGeckoProvider {
    pub fn new(settings: &Settings) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(settings.request_timeout_secs));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            reference_currency: settings.reference_currency.to_lowercase(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn reference_currency(&self) -> &str {
        &self.reference_currency
    }

    /// Fetch the price of `id` in `vs_currency` and classify every failure.
    async fn fetch_simple_price(&self, id: &str, vs_currency: &str) -> Result<f64, CoreError> {
        let url = format!("{}/simple/price", self.base_url);

        let resp = self
            .client
            .get(&url)
            .query(&[("ids", id), ("vs_currencies", vs_currency)])
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CoreError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            return Err(CoreError::ServerError {
                status: status.as_u16(),
                message: format!("Could not fetch price for '{id}'. Please try again later."),
            });
        }

        let body = resp.text().await?;
        extract_price(&body, id, vs_currency)
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

// ── CoinGecko API response types ────────────────────────────────────

/// `{ "bitcoin": { "brl": 350000.0 } }`. Values can be `null` for
/// currencies CoinGecko has no quote in.
#[derive(Deserialize)]
#[serde(transparent)]
struct SimplePriceResponse(HashMap<String, HashMap<String, Option<f64>>>);

/// Pull the price of `id` in `vs_currency` out of a `simple/price` body.
///
/// A body that parses but lacks the entry yields `CoreError::NotFound`.
pub fn extract_price(body: &str, id: &str, vs_currency: &str) -> Result<f64, CoreError> {
    let resp: SimplePriceResponse = serde_json::from_str(body).map_err(|e| CoreError::Api {
        provider: PROVIDER_NAME.into(),
        message: format!("Failed to parse response for {id}: {e}"),
    })?;

    resp.0
        .get(id)
        .and_then(|quotes| quotes.get(vs_currency))
        .copied()
        .flatten()
        .ok_or_else(|| {
            if resp.0.contains_key(id) {
                CoreError::NotFound(format!("{id} in {}", vs_currency.to_uppercase()))
            } else {
                CoreError::NotFound(id.to_string())
            }
        })
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PriceProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn get_price(&self, asset_id: &str) -> Result<f64, CoreError> {
        self.fetch_simple_price(asset_id, &self.reference_currency)
            .await
    }

    async fn get_exchange_rate(&self, asset_id: &str, fiat_id: &str) -> Result<f64, CoreError> {
        self.fetch_simple_price(asset_id, &fiat_id.to_lowercase())
            .await
    }
}
