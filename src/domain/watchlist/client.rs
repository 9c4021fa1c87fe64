//! Watchlist sub-client — remote CRUD for the user's watchlist.

use crate::client::TrackerClient;
use crate::domain::watchlist::wire::CreateWatchlistRequest;
use crate::domain::watchlist::{WatchlistEntry, WatchlistPatch};
use crate::error::SdkError;
use crate::shared::CoinId;

/// Sub-client for watchlist operations.
///
/// Every method is a remote round trip. Callers reconcile their
/// [`WatchlistState`](crate::domain::watchlist::WatchlistState) only after
/// success — there is no optimistic mutation.
pub struct Watchlist<'a> {
    pub(crate) client: &'a TrackerClient,
    pub(crate) user_id: &'a str,
}

impl<'a> Watchlist<'a> {
    /// Fetch the user's full watchlist. Replaces the local collection
    /// wholesale on success.
    pub async fn fetch_all(&self) -> Result<Vec<WatchlistEntry>, SdkError> {
        let resp = self.client.http.get_watchlist(self.user_id).await?;
        Ok(resp.into_iter().map(WatchlistEntry::from).collect())
    }

    /// Create an entry for `coin_id` with no target price and empty notes.
    /// The server assigns the entry id.
    pub async fn create(&self, coin_id: CoinId) -> Result<WatchlistEntry, SdkError> {
        let body = CreateWatchlistRequest {
            coin_id,
            user_id: self.user_id.to_string(),
            target_price: None,
            notes: String::new(),
        };
        let resp = self.client.http.create_watchlist_entry(&body).await?;
        Ok(resp.into())
    }

    /// Update target price and/or notes. The response is authoritative and
    /// should replace the local entry wholesale.
    pub async fn update(&self, id: i64, patch: WatchlistPatch) -> Result<WatchlistEntry, SdkError> {
        let resp = self
            .client
            .http
            .update_watchlist_entry(id, &patch.into())
            .await?;
        Ok(resp.into())
    }

    /// Delete an entry. Safe to call for ids the server no longer knows —
    /// deletion is idempotent on the backend.
    pub async fn remove(&self, id: i64) -> Result<(), SdkError> {
        self.client.http.delete_watchlist_entry(id).await?;
        Ok(())
    }
}
