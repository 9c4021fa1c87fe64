//! Chart domain — historical price series per `(coin, time range)` pair.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

pub use state::{ChartOutcome, ChartRequest, ChartState};

use serde::{Deserialize, Serialize};

/// A single (timestamp, price) sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Unix timestamp in milliseconds.
    pub time_ms: i64,
    pub price: f64,
}

impl PricePoint {
    pub fn new(time_ms: i64, price: f64) -> Self {
        Self { time_ms, price }
    }
}

/// Ordered price series for one `(coin, time range)` pair.
///
/// Timestamps are strictly increasing; conversion from the wire enforces this
/// even if the source repeats a sample. Series are not kept across time-range
/// changes — a switch always refetches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub points: Vec<PricePoint>,
}

impl ChartSeries {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Net price change over the period, `0.0` for fewer than two samples.
    pub fn net_change(&self) -> f64 {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => last.price - first.price,
            _ => 0.0,
        }
    }

    /// True when the period's net change is non-negative.
    pub fn is_positive(&self) -> bool {
        self.net_change() >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_change_and_direction() {
        let up = ChartSeries::new(vec![PricePoint::new(0, 100.0), PricePoint::new(1, 150.0)]);
        assert_eq!(up.net_change(), 50.0);
        assert!(up.is_positive());

        let down = ChartSeries::new(vec![PricePoint::new(0, 100.0), PricePoint::new(1, 80.0)]);
        assert!(!down.is_positive());
    }

    #[test]
    fn test_degenerate_series_counts_as_positive() {
        assert!(ChartSeries::default().is_positive());
        assert!(ChartSeries::new(vec![PricePoint::new(0, 42.0)]).is_positive());
    }
}
