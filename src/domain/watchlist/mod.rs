//! Watchlist domain — remotely persisted entries with target price + notes.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

pub use state::WatchlistState;

use crate::shared::CoinId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A user-curated watchlist entry.
///
/// The server assigns `id` on creation. At most one authoritative copy exists
/// per id; the local collection is a cache of remote state, never the source
/// of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub id: i64,
    pub user_id: String,
    /// May reference a coin not present in the current snapshot.
    pub coin_id: CoinId,
    pub target_price: Option<Decimal>,
    pub notes: String,
}

/// Partial-field update for an entry. `None` fields are left out of the
/// request; the remote response is authoritative for the full entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WatchlistPatch {
    pub target_price: Option<Decimal>,
    pub notes: Option<String>,
}

impl WatchlistPatch {
    pub fn target_price(price: Decimal) -> Self {
        Self {
            target_price: Some(price),
            ..Self::default()
        }
    }

    pub fn notes(notes: impl Into<String>) -> Self {
        Self {
            notes: Some(notes.into()),
            ..Self::default()
        }
    }
}
