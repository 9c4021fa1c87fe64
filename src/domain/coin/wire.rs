//! Wire types for market snapshot responses (REST).

use crate::shared::CoinId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Embedded 7-day sparkline series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SparklineResponse {
    pub price: Vec<f64>,
}

/// Raw snapshot entry from `/coins/markets`.
///
/// Numeric fields are nullable on the wire for delisted or thinly traded
/// coins; conversion maps null to zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketCoinResponse {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub current_price: Option<Decimal>,
    pub market_cap: Option<Decimal>,
    pub price_change_percentage_24h: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sparkline_in_7d: Option<SparklineResponse>,
}
