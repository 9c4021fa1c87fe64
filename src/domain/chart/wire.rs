//! Wire types for market chart responses (REST).

use serde::{Deserialize, Serialize};

/// Raw `[timestamp_ms, price]` pair as the chart endpoint sends it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RawPoint(pub i64, pub f64);

/// Response from `/coins/{id}/market_chart`.
///
/// The endpoint also returns `market_caps` and `total_volumes` arrays; only
/// the prices series is consumed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketChartResponse {
    pub prices: Vec<RawPoint>,
}
