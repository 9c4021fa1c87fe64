//! Conversions between wire and domain types for the watchlist.

use super::wire::{UpdateWatchlistRequest, WatchlistEntryResponse};
use super::{WatchlistEntry, WatchlistPatch};

impl From<WatchlistEntryResponse> for WatchlistEntry {
    fn from(e: WatchlistEntryResponse) -> Self {
        Self {
            id: e.id,
            user_id: e.user_id,
            coin_id: e.coin_id,
            target_price: e.target_price,
            notes: e.notes.unwrap_or_default(),
        }
    }
}

impl From<WatchlistPatch> for UpdateWatchlistRequest {
    fn from(p: WatchlistPatch) -> Self {
        Self {
            target_price: p.target_price,
            notes: p.notes,
        }
    }
}
