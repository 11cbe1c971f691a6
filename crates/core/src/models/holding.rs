use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse classification of a failed price lookup, shown next to the holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    /// The price service does not know this asset id
    NotFound,
    /// No response from the price service
    Network,
    /// The price service answered with a non-2xx status
    Server,
    /// The request could not be built (bad base URL, bad parameters)
    Request,
    /// Anything else (malformed body, invalid or out-of-range price)
    Other,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::NotFound => write!(f, "not found"),
            FailureKind::Network => write!(f, "network"),
            FailureKind::Server => write!(f, "server"),
            FailureKind::Request => write!(f, "request"),
            FailureKind::Other => write!(f, "other"),
        }
    }
}

/// The outcome of the most recent failed lookup for a holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupFailure {
    pub kind: FailureKind,
    /// User-facing message, ready to render in place of the price.
    pub message: String,
}

impl std::fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// A user's position in one asset: quantity, cost basis and live valuation.
///
/// `current_price` and `current_value` are `None` until the first successful
/// lookup. After a failed lookup they keep their last-known values and
/// `last_error` explains why they are stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Normalized asset id (trimmed, lower-cased), e.g. "bitcoin"
    pub id: String,

    /// The id as the user typed it, kept for display only
    pub display_name: String,

    /// Cumulative quantity across all additions of this asset
    pub quantity: f64,

    /// Quantity-weighted average purchase price in the reference currency
    pub average_cost: f64,

    pub current_price: Option<f64>,

    pub current_value: Option<f64>,

    /// Share of the total portfolio value, 0–100
    pub allocation_percent: f64,

    pub last_error: Option<LookupFailure>,

    /// When the price was last fetched successfully
    pub last_updated: Option<DateTime<Utc>>,
}

impl Holding {
    /// Create a fresh holding. `id` must already be normalized.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        quantity: f64,
        average_cost: f64,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            quantity,
            average_cost,
            current_price: None,
            current_value: None,
            allocation_percent: 0.0,
            last_error: None,
            last_updated: None,
        }
    }

    /// Total amount paid for the position.
    pub fn cost_basis(&self) -> f64 {
        self.quantity * self.average_cost
    }

    /// Current value minus cost basis, if a value is known.
    pub fn unrealized_pnl(&self) -> Option<f64> {
        self.current_value.map(|v| v - self.cost_basis())
    }

    pub fn unrealized_pnl_percent(&self) -> Option<f64> {
        let cost = self.cost_basis();
        if cost <= 0.0 {
            return None;
        }
        self.unrealized_pnl().map(|pnl| pnl / cost * 100.0)
    }

    /// True when the last lookup failed and the valuation may be stale.
    pub fn is_degraded(&self) -> bool {
        self.last_error.is_some()
    }
}
