//! Coin domain — entries of the ranked market snapshot.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::CoinId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single coin from the ranked market snapshot.
///
/// Snapshot entries are replaced wholesale on each fetch, never partially
/// mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: CoinId,
    pub name: String,
    /// Ticker symbol (e.g. `"btc"`).
    pub symbol: String,
    pub current_price: Decimal,
    /// Signed 24h percentage change.
    pub change_24h: Decimal,
    pub market_cap: Decimal,
    pub image_url: String,
    /// Embedded 7-day sparkline, when the snapshot endpoint includes it.
    pub sparkline_7d: Option<Vec<f64>>,
}

impl Coin {
    /// True when the 24h change is non-negative. Drives gain/loss styling,
    /// including the chart fill tone the renderer is handed.
    pub fn is_positive(&self) -> bool {
        self.change_24h >= Decimal::ZERO
    }

    /// Case-insensitive substring match against name or ticker symbol.
    /// An empty term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.symbol.to_lowercase().contains(&term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(id: &str, name: &str, symbol: &str, change: i64) -> Coin {
        Coin {
            id: CoinId::from(id),
            name: name.to_string(),
            symbol: symbol.to_string(),
            current_price: Decimal::new(50_000, 0),
            change_24h: Decimal::new(change, 1),
            market_cap: Decimal::new(1_000_000, 0),
            image_url: String::new(),
            sparkline_7d: None,
        }
    }

    #[test]
    fn test_matches_name_and_symbol_case_insensitive() {
        let btc = coin("bitcoin", "Bitcoin", "btc", 12);
        assert!(btc.matches("bit"));
        assert!(btc.matches("BTC"));
        assert!(btc.matches("itCoi"));
        assert!(!btc.matches("ethereum"));
    }

    #[test]
    fn test_empty_term_matches_everything() {
        assert!(coin("bitcoin", "Bitcoin", "btc", -5).matches(""));
    }

    #[test]
    fn test_is_positive_at_zero_change() {
        assert!(coin("tether", "Tether", "usdt", 0).is_positive());
        assert!(!coin("bitcoin", "Bitcoin", "btc", -1).is_positive());
    }
}
