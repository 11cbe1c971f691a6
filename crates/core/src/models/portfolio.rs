use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::holding::Holding;

/// Normalize a user-entered asset id: trimmed and lower-cased.
pub fn normalize_id(id: &str) -> String {
    id.trim().to_lowercase()
}

/// An immutable snapshot of the user's holdings and their valuation.
///
/// Holdings keep insertion order for display; `id` is unique. The valuation
/// engine never mutates a snapshot in place, it produces a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub(crate) holdings: Vec<Holding>,

    /// Sum of `current_value` over holdings that have one
    pub total_value: f64,

    /// When the last refresh pass completed
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Holdings in insertion order.
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Look up a holding by id (case-insensitive, surrounding whitespace ignored).
    pub fn get(&self, id: &str) -> Option<&Holding> {
        let key = normalize_id(id);
        self.holdings.iter().find(|h| h.id == key)
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Total amount paid across all holdings.
    pub fn total_cost(&self) -> f64 {
        self.holdings.iter().map(Holding::cost_basis).sum()
    }

    /// Holdings whose most recent lookup failed.
    pub fn degraded(&self) -> Vec<&Holding> {
        self.holdings.iter().filter(|h| h.is_degraded()).collect()
    }
}
