//! Conversions from wire types to domain types for coins.

use super::wire::MarketCoinResponse;
use super::Coin;

impl From<MarketCoinResponse> for Coin {
    fn from(c: MarketCoinResponse) -> Self {
        Self {
            id: c.id,
            name: c.name,
            symbol: c.symbol,
            current_price: c.current_price.unwrap_or_default(),
            change_24h: c.price_change_percentage_24h.unwrap_or_default(),
            market_cap: c.market_cap.unwrap_or_default(),
            image_url: c.image,
            sparkline_7d: c.sparkline_in_7d.map(|s| s.price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::CoinId;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn sample_response() -> MarketCoinResponse {
        MarketCoinResponse {
            id: CoinId::from("ethereum"),
            symbol: "eth".to_string(),
            name: "Ethereum".to_string(),
            image: "https://assets.example.com/ethereum.png".to_string(),
            current_price: Some(Decimal::from_str("3021.55").unwrap()),
            market_cap: Some(Decimal::from_str("363000000000").unwrap()),
            price_change_percentage_24h: Some(Decimal::from_str("2.4").unwrap()),
            sparkline_in_7d: Some(super::super::wire::SparklineResponse {
                price: vec![2950.0, 3000.0, 3021.55],
            }),
        }
    }

    #[test]
    fn test_conversion_maps_all_fields() {
        let coin: Coin = sample_response().into();
        assert_eq!(coin.id.as_str(), "ethereum");
        assert_eq!(coin.symbol, "eth");
        assert_eq!(coin.current_price, Decimal::from_str("3021.55").unwrap());
        assert_eq!(coin.sparkline_7d.as_ref().unwrap().len(), 3);
        assert!(coin.is_positive());
    }

    #[test]
    fn test_null_numerics_become_zero() {
        let mut resp = sample_response();
        resp.current_price = None;
        resp.market_cap = None;
        resp.price_change_percentage_24h = None;

        let coin: Coin = resp.into();
        assert_eq!(coin.current_price, Decimal::ZERO);
        assert_eq!(coin.market_cap, Decimal::ZERO);
        // zero change renders as a gain
        assert!(coin.is_positive());
    }
}
