use crate::errors::CoreError;
use crate::models::analytics::ProfitLossResult;
use crate::services::price_service::PriceService;
use crate::services::validation::require_positive;

/// Profit/loss calculator: what a past purchase is worth today.
pub struct CalculatorService;

impl CalculatorService {
    pub fn new() -> Self {
        Self
    }

    /// Fetch the current price of `asset_id` and compare the position's value
    /// with what was paid for it.
    ///
    /// Inputs are validated before any lookup is made.
    pub async fn calculate(
        &self,
        price_service: &PriceService,
        asset_id: &str,
        purchase_amount: f64,
        quantity: f64,
    ) -> Result<ProfitLossResult, CoreError> {
        require_positive(purchase_amount, "Purchase amount")?;
        require_positive(quantity, "Quantity")?;

        let current_price = price_service.get_price(asset_id).await?;
        self.profit_loss(current_price, purchase_amount, quantity)
    }

    /// `purchase_amount` is the total paid for `quantity` units.
    pub fn profit_loss(
        &self,
        current_price: f64,
        purchase_amount: f64,
        quantity: f64,
    ) -> Result<ProfitLossResult, CoreError> {
        let current_price = require_positive(current_price, "Current price")?;
        let purchase_amount = require_positive(purchase_amount, "Purchase amount")?;
        let quantity = require_positive(quantity, "Quantity")?;

        let total_current_value = current_price * quantity;
        let profit_loss = total_current_value - purchase_amount;

        Ok(ProfitLossResult {
            current_price,
            total_current_value,
            profit_loss,
            profit_loss_percent: profit_loss / purchase_amount * 100.0,
        })
    }
}

impl Default for CalculatorService {
    fn default() -> Self {
        Self::new()
    }
}
