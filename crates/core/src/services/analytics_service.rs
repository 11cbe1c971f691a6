use crate::models::analytics::PortfolioSummary;
use crate::models::portfolio::Portfolio;

/// Computes portfolio-wide totals from a valuation snapshot.
///
/// Pure arithmetic over the snapshot, no lookups. Holdings that have never
/// been priced count toward `total_cost` but not toward gain/loss.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    pub fn summarize(&self, portfolio: &Portfolio) -> PortfolioSummary {
        let valued: Vec<_> = portfolio
            .holdings()
            .iter()
            .filter(|h| h.current_value.is_some())
            .collect();

        let valued_cost: f64 = valued.iter().map(|h| h.cost_basis()).sum();
        let unrealized_pnl: f64 = valued.iter().filter_map(|h| h.unrealized_pnl()).sum();
        let unrealized_pnl_percent = if valued_cost > 0.0 {
            unrealized_pnl / valued_cost * 100.0
        } else {
            0.0
        };

        PortfolioSummary {
            total_value: portfolio.total_value,
            total_cost: portfolio.total_cost(),
            unrealized_pnl,
            unrealized_pnl_percent,
            holding_count: portfolio.len(),
            degraded_count: portfolio.degraded().len(),
            refreshed_at: portfolio.refreshed_at,
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
