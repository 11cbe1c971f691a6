use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Portfolio-wide totals derived from a valuation snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Total portfolio value in the reference currency (stale values included)
    pub total_value: f64,

    /// Total amount paid (sum of quantity × average cost)
    pub total_cost: f64,

    /// Absolute gain/loss over holdings that have a value
    pub unrealized_pnl: f64,

    /// Percentage gain/loss relative to the cost of valued holdings
    pub unrealized_pnl_percent: f64,

    pub holding_count: usize,

    /// Holdings whose most recent lookup failed
    pub degraded_count: usize,

    pub refreshed_at: Option<DateTime<Utc>>,
}

/// Result of the profit/loss calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitLossResult {
    pub current_price: f64,
    pub total_current_value: f64,
    pub profit_loss: f64,
    pub profit_loss_percent: f64,
}

/// Result of converting a crypto amount into a fiat currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub asset_id: String,
    pub fiat_id: String,
    pub amount: f64,
    /// Price of one unit of `asset_id` in `fiat_id`
    pub rate: f64,
    pub converted: f64,
}
