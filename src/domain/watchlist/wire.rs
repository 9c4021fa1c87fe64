//! Wire types for the watchlist service (REST).

use crate::shared::CoinId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw watchlist entry from the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntryResponse {
    pub id: i64,
    pub coin_id: CoinId,
    pub user_id: String,
    #[serde(default)]
    pub target_price: Option<Decimal>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Body for `POST /watchlist`.
///
/// `target_price` is serialized even when unset — the backend expects an
/// explicit null for a fresh entry.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateWatchlistRequest {
    pub coin_id: CoinId,
    pub user_id: String,
    pub target_price: Option<Decimal>,
    pub notes: String,
}

/// Body for `PUT /watchlist/{id}` — only set fields are submitted.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWatchlistRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_entry_with_nulls() {
        let json = r#"{
            "id": 7,
            "coinId": "bitcoin",
            "userId": "user1",
            "targetPrice": null,
            "notes": null
        }"#;

        let entry: WatchlistEntryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.coin_id.as_str(), "bitcoin");
        assert!(entry.target_price.is_none());
        assert!(entry.notes.is_none());
    }

    #[test]
    fn test_create_request_sends_explicit_null_target() {
        let body = CreateWatchlistRequest {
            coin_id: CoinId::from("solana"),
            user_id: "user1".to_string(),
            target_price: None,
            notes: String::new(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["coinId"], "solana");
        assert!(json["targetPrice"].is_null());
        assert_eq!(json["notes"], "");
    }

    #[test]
    fn test_update_request_omits_unset_fields() {
        let body = UpdateWatchlistRequest {
            target_price: Some(Decimal::from_str("75000").unwrap()),
            notes: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("notes").is_none());
        assert_eq!(json["targetPrice"], 75000.0);
    }
}
