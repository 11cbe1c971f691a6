pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use std::sync::Arc;

use models::{
    analytics::{Conversion, PortfolioSummary, ProfitLossResult},
    glossary::{GlossaryTerm, Suggestions},
    portfolio::Portfolio,
    settings::{normalize_currency, Settings},
};
use providers::{coingecko::CoinGeckoProvider, traits::PriceProvider};
use services::{
    analytics_service::AnalyticsService, calculator_service::CalculatorService,
    currency_service::CurrencyService, glossary_service::GlossaryService,
    portfolio_service::PortfolioService, price_service::PriceService,
    suggestion_service::SuggestionService,
};

use errors::CoreError;

/// Main entry point for the Criptonautas core library.
///
/// Holds the settings, the current portfolio snapshot and all services the
/// calculators need. The snapshot is replaced wholesale after every
/// operation; readers holding an `Arc<Portfolio>` from [`snapshot`] keep a
/// consistent view.
///
/// [`snapshot`]: CryptoToolkit::snapshot
#[must_use]
pub struct CryptoToolkit {
    settings: Settings,
    portfolio: Arc<Portfolio>,
    /// Set when the provider was injected; settings changes then leave it alone.
    custom_provider: bool,
    price_service: PriceService,
    portfolio_service: PortfolioService,
    analytics_service: AnalyticsService,
    calculator_service: CalculatorService,
    currency_service: CurrencyService,
    glossary_service: GlossaryService,
    suggestion_service: SuggestionService,
}

impl std::fmt::Debug for CryptoToolkit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoToolkit")
            .field("settings", &self.settings)
            .field("holdings", &self.portfolio.len())
            .field("provider", &self.price_service.provider_name())
            .finish()
    }
}

impl CryptoToolkit {
    /// Create a toolkit backed by the CoinGecko price service.
    pub fn new(settings: Settings) -> Result<Self, CoreError> {
        let settings = settings.normalized()?;
        let provider = Arc::new(CoinGeckoProvider::new(&settings));
        Ok(Self::build(settings, provider, false))
    }

    /// Create a toolkit backed by a caller-supplied price provider.
    pub fn with_provider(
        settings: Settings,
        provider: Arc<dyn PriceProvider>,
    ) -> Result<Self, CoreError> {
        let settings = settings.normalized()?;
        Ok(Self::build(settings, provider, true))
    }

    // ── Portfolio ───────────────────────────────────────────────────

    /// Merge a purchase into the portfolio without re-pricing.
    /// On error the current snapshot is left untouched.
    pub fn add_holding(
        &mut self,
        id: &str,
        quantity: f64,
        price: f64,
    ) -> Result<&Portfolio, CoreError> {
        let next = self
            .portfolio_service
            .add_or_merge_holding(&self.portfolio, id, quantity, price)?;
        self.portfolio = Arc::new(next);
        Ok(self.portfolio.as_ref())
    }

    /// Merge a purchase, then re-price the whole portfolio.
    pub async fn add_holding_and_refresh(
        &mut self,
        id: &str,
        quantity: f64,
        price: f64,
    ) -> Result<&Portfolio, CoreError> {
        self.add_holding(id, quantity, price)?;
        Ok(self.refresh_prices().await)
    }

    /// Re-price every holding. Per-asset failures end up in each holding's
    /// `last_error`; the refresh itself never fails.
    pub async fn refresh_prices(&mut self) -> &Portfolio {
        let next = self
            .portfolio_service
            .refresh_prices(&self.portfolio, &self.price_service)
            .await;
        self.portfolio = Arc::new(next);
        self.portfolio.as_ref()
    }

    #[must_use]
    pub fn portfolio(&self) -> &Portfolio {
        self.portfolio.as_ref()
    }

    /// A shared handle to the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Portfolio> {
        Arc::clone(&self.portfolio)
    }

    #[must_use]
    pub fn summary(&self) -> PortfolioSummary {
        self.analytics_service.summarize(&self.portfolio)
    }

    /// Export the current snapshot as JSON (for display/debugging, not storage).
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self.portfolio.as_ref())
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize portfolio: {e}")))
    }

    // ── Calculators ─────────────────────────────────────────────────

    /// Profit/loss of `quantity` units of `asset_id` bought for `purchase_amount`.
    pub async fn profit_loss(
        &self,
        asset_id: &str,
        purchase_amount: f64,
        quantity: f64,
    ) -> Result<ProfitLossResult, CoreError> {
        self.calculator_service
            .calculate(&self.price_service, asset_id, purchase_amount, quantity)
            .await
    }

    /// Convert `amount` of `asset_id` into `fiat_id`.
    pub async fn convert(
        &self,
        amount: f64,
        asset_id: &str,
        fiat_id: &str,
    ) -> Result<Conversion, CoreError> {
        self.currency_service
            .convert(&self.price_service, amount, asset_id, fiat_id)
            .await
    }

    // ── Static content ──────────────────────────────────────────────

    #[must_use]
    pub fn glossary(&self) -> &'static [GlossaryTerm] {
        self.glossary_service.terms()
    }

    #[must_use]
    pub fn search_glossary(&self, query: &str) -> Vec<&'static GlossaryTerm> {
        self.glossary_service.search(query)
    }

    #[must_use]
    pub fn suggestions(&self) -> &'static Suggestions {
        self.suggestion_service.suggestions()
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Change the reference currency (e.g., "BRL", "USD", "EUR").
    ///
    /// Costs and last-known values are stored in the reference currency, so
    /// it can only change while the portfolio is empty. Setting the current
    /// currency again is always accepted.
    pub fn set_reference_currency(&mut self, currency: &str) -> Result<(), CoreError> {
        let currency = normalize_currency(currency)?;
        if currency == self.settings.reference_currency {
            return Ok(());
        }
        if !self.portfolio.is_empty() {
            return Err(CoreError::InvalidInput(format!(
                "Reference currency is fixed at {} while the portfolio holds assets",
                self.settings.reference_currency.to_uppercase()
            )));
        }
        self.settings.reference_currency = currency;
        if self.custom_provider {
            log::warn!(
                "Reference currency changed to {} but the injected provider {} was kept",
                self.settings.reference_currency,
                self.price_service.provider_name()
            );
        } else {
            let provider = Arc::new(CoinGeckoProvider::new(&self.settings));
            self.price_service = PriceService::new(provider);
        }
        Ok(())
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(settings: Settings, provider: Arc<dyn PriceProvider>, custom_provider: bool) -> Self {
        Self {
            settings,
            portfolio: Arc::new(Portfolio::new()),
            custom_provider,
            price_service: PriceService::new(provider),
            portfolio_service: PortfolioService::new(),
            analytics_service: AnalyticsService::new(),
            calculator_service: CalculatorService::new(),
            currency_service: CurrencyService::new(),
            glossary_service: GlossaryService::new(),
            suggestion_service: SuggestionService::new(),
        }
    }
}
