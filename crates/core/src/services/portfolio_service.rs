use chrono::{DateTime, Utc};
use futures::future::join_all;

use crate::errors::CoreError;
use crate::models::holding::{Holding, LookupFailure};
use crate::models::portfolio::{normalize_id, Portfolio};
use crate::services::price_service::PriceService;
use crate::services::validation::{require_finite, require_positive, require_text};

/// The portfolio valuation engine.
///
/// Both operations take a snapshot and return a new one; the input is never
/// modified, so a caller can swap snapshots atomically.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Add `quantity` units of `id` bought at `price`.
    ///
    /// A new id is appended. An existing id (case-insensitive) is merged: the
    /// quantities add up and the average cost becomes the quantity-weighted
    /// mean of the old position and the new purchase. Valuation fields are
    /// left alone until the next refresh. A purchase or merged position whose
    /// cost does not fit in an `f64` is rejected.
    pub fn add_or_merge_holding(
        &self,
        portfolio: &Portfolio,
        id: &str,
        quantity: f64,
        price: f64,
    ) -> Result<Portfolio, CoreError> {
        let display_name = require_text(id, "Cryptocurrency ID")?;
        let quantity = require_positive(quantity, "Quantity")?;
        let price = require_positive(price, "Average purchase price")?;
        let added_cost = require_finite(price * quantity, "Purchase total")?;
        let key = normalize_id(display_name);

        let mut next = portfolio.clone();
        match next.holdings.iter_mut().find(|h| h.id == key) {
            Some(existing) => {
                let existing_cost = existing.average_cost * existing.quantity;
                let new_quantity = require_finite(existing.quantity + quantity, "Quantity")?;
                let total_cost = require_finite(existing_cost + added_cost, "Purchase total")?;
                existing.average_cost =
                    require_positive(total_cost / new_quantity, "Average purchase price")?;
                existing.quantity = new_quantity;
                log::debug!(
                    "Merged {quantity} {key} @ {price}: now {} @ avg {}",
                    existing.quantity,
                    existing.average_cost
                );
            }
            None => {
                log::debug!("Added new holding {key}: {quantity} @ {price}");
                next.holdings
                    .push(Holding::new(key, display_name, quantity, price));
            }
        }

        Ok(next)
    }

    /// Re-price every holding and recompute allocations.
    ///
    /// All lookups run concurrently and every outcome is kept: a failed lookup
    /// leaves that holding's last-known price and value in place and records
    /// the failure in `last_error`, without affecting any other holding.
    /// Never fails as a whole.
    pub async fn refresh_prices(
        &self,
        portfolio: &Portfolio,
        price_service: &PriceService,
    ) -> Portfolio {
        let now = Utc::now();
        if portfolio.is_empty() {
            return Portfolio {
                refreshed_at: Some(now),
                ..Portfolio::default()
            };
        }

        let lookups = portfolio
            .holdings
            .iter()
            .map(|h| price_service.get_price(&h.id));
        let outcomes = join_all(lookups).await;

        let mut holdings: Vec<Holding> = portfolio
            .holdings
            .iter()
            .zip(outcomes)
            .map(|(holding, outcome)| {
                Self::apply_outcome(holding, outcome, price_service.provider_name(), now)
            })
            .collect();

        let total_value = Self::allocate(&mut holdings);
        let failed = holdings.iter().filter(|h| h.is_degraded()).count();
        log::info!(
            "Refreshed {} holdings ({failed} failed), total value {total_value}",
            holdings.len()
        );

        Portfolio {
            holdings,
            total_value,
            refreshed_at: Some(now),
        }
    }

    fn apply_outcome(
        holding: &Holding,
        outcome: Result<f64, CoreError>,
        provider: &str,
        now: DateTime<Utc>,
    ) -> Holding {
        let mut next = holding.clone();
        let outcome = outcome.and_then(|price| {
            let value = price * holding.quantity;
            if value.is_finite() {
                Ok((price, value))
            } else {
                Err(CoreError::Api {
                    provider: provider.to_string(),
                    message: format!(
                        "Value of {} {} at {price} is out of range",
                        holding.quantity, holding.id
                    ),
                })
            }
        });
        match outcome {
            Ok((price, value)) => {
                next.current_price = Some(price);
                next.current_value = Some(value);
                next.last_error = None;
                next.last_updated = Some(now);
            }
            Err(e) => {
                log::warn!("Failed to fetch price for {}: {e}", holding.id);
                next.last_error = Some(LookupFailure {
                    kind: e.failure_kind(),
                    message: e.to_string(),
                });
            }
        }
        next
    }

    /// Set every holding's allocation from its share of the total value and
    /// return the total. Holdings without a value get 0.
    ///
    /// Every value is finite, but their sum may still overflow; shares are
    /// then taken relative to the largest value so they keep summing to 100.
    fn allocate(holdings: &mut [Holding]) -> f64 {
        let total: f64 = holdings.iter().filter_map(|h| h.current_value).sum();
        let scale = if total.is_finite() {
            1.0
        } else {
            holdings
                .iter()
                .filter_map(|h| h.current_value)
                .fold(0.0, f64::max)
        };
        let scaled_total: f64 = holdings
            .iter()
            .filter_map(|h| h.current_value)
            .map(|v| v / scale)
            .sum();

        for holding in holdings.iter_mut() {
            holding.allocation_percent = match holding.current_value {
                Some(value) if scaled_total > 0.0 => value / scale / scaled_total * 100.0,
                _ => 0.0,
            };
        }
        total
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
