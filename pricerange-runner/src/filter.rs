//! Caller-side owner of the selected price range.
//!
//! The slider emits on every pointer move. The owning page keeps the latest
//! pair (last write wins when two drags race) and only builds a search query
//! once changes have settled for a quiet period.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use pricerange_core::RangeValue;

/// Trailing-edge debounce over externally supplied instants.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    last_poke: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            last_poke: None,
        }
    }

    /// Record activity at `now`, restarting the quiet period.
    pub fn poke(&mut self, now: Instant) {
        self.last_poke = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.last_poke.is_some()
    }

    /// True once `quiet` has elapsed since the last poke.
    pub fn ready(&self, now: Instant) -> bool {
        self.last_poke
            .is_some_and(|t| now.saturating_duration_since(t) >= self.quiet)
    }

    pub fn clear(&mut self) {
        self.last_poke = None;
    }
}

/// Query parameters for the product search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuery {
    pub min_price: i64,
    pub max_price: i64,
}

impl PriceQuery {
    pub fn to_query_string(&self) -> String {
        format!("minPrice={}&maxPrice={}", self.min_price, self.max_price)
    }
}

impl From<RangeValue> for PriceQuery {
    fn from(value: RangeValue) -> Self {
        Self {
            min_price: value.low,
            max_price: value.high,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PriceFilter {
    value: RangeValue,
    debouncer: Debouncer,
    last_sent: Option<PriceQuery>,
    applied: u64,
}

impl PriceFilter {
    pub fn new(initial: RangeValue, quiet: Duration) -> Self {
        Self {
            value: initial,
            debouncer: Debouncer::new(quiet),
            last_sent: None,
            applied: 0,
        }
    }

    pub fn value(&self) -> RangeValue {
        self.value
    }

    /// Number of changes applied so far.
    pub fn applied(&self) -> u64 {
        self.applied
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Take a change from the slider. The latest change always wins.
    pub fn apply(&mut self, change: RangeValue, now: Instant) {
        self.value = change;
        self.applied += 1;
        self.debouncer.poke(now);
    }

    /// A query to send, once the quiet period has passed. Never repeats an
    /// unchanged query.
    pub fn poll(&mut self, now: Instant) -> Option<PriceQuery> {
        if !self.debouncer.ready(now) {
            return None;
        }
        self.take()
    }

    /// Send whatever is pending without waiting.
    pub fn flush(&mut self) -> Option<PriceQuery> {
        if !self.debouncer.is_pending() {
            return None;
        }
        self.take()
    }

    fn take(&mut self) -> Option<PriceQuery> {
        self.debouncer.clear();
        let query = PriceQuery::from(self.value);
        if self.last_sent == Some(query) {
            return None;
        }
        debug!(query = %query.to_query_string(), "price query ready");
        self.last_sent = Some(query);
        Some(query)
    }
}
