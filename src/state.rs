//! Application state — the single store composing the market snapshot,
//! favorites, watchlist, and chart pipeline.
//!
//! `AppState` is constructed once at process start and passed by handle to
//! every consumer; all mutations go through its methods. Remote calls are
//! async and serialized by the order user actions are dispatched; completions
//! are applied through explicit `apply_*`/`complete_*` methods so the
//! reconciliation logic stays testable without a network.

use crate::client::TrackerClient;
use crate::domain::chart::{ChartOutcome, ChartRequest, ChartSeries, ChartState};
use crate::domain::coin::Coin;
use crate::domain::favorites::FavoritesStore;
use crate::domain::watchlist::{WatchlistEntry, WatchlistPatch, WatchlistState};
use crate::error::SdkError;
use crate::shared::{CoinId, TimeRange};
use crate::storage::FavoritesBackend;

const ERR_SNAPSHOT: &str = "Failed to fetch cryptocurrencies";
const ERR_CHART: &str = "Failed to fetch chart data";
const ERR_WATCHLIST_FETCH: &str = "Failed to fetch watchlist";
const ERR_WATCHLIST_ADD: &str = "Failed to add to watchlist";
const ERR_WATCHLIST_REMOVE: &str = "Failed to remove from watchlist";
const ERR_WATCHLIST_UPDATE: &str = "Failed to update watchlist item";

/// The unified application state store.
///
/// Single-writer discipline: the coin list is written only by snapshot
/// application, favorites and watchlist only through their stores, and all of
/// it only through `&mut self` methods on this type.
pub struct AppState {
    client: TrackerClient,
    coins: Vec<Coin>,
    loading: bool,
    last_error: Option<String>,
    favorites: FavoritesStore,
    watchlist: WatchlistState,
    chart: ChartState,
    search_term: String,
    time_range: Option<TimeRange>,
    selected_coin: Option<CoinId>,
}

impl AppState {
    /// Build the store. `loading` starts true and clears once the first
    /// snapshot fetch settles either way.
    pub fn new(client: TrackerClient, favorites_backend: Box<dyn FavoritesBackend>) -> Self {
        Self {
            client,
            coins: Vec::new(),
            loading: true,
            last_error: None,
            favorites: FavoritesStore::load(favorites_backend),
            watchlist: WatchlistState::new(),
            chart: ChartState::new(),
            search_term: String::new(),
            time_range: None,
            selected_coin: None,
        }
    }

    pub fn client(&self) -> &TrackerClient {
        &self.client
    }

    // ── Snapshot ─────────────────────────────────────────────────────────

    /// Fetch the ranked coin list once. Re-invocation is an explicit user
    /// retry, not a poller.
    pub async fn load_snapshot(&mut self) {
        let result = self.client.markets().snapshot().await;
        self.apply_snapshot(result);
    }

    /// Install a completed snapshot fetch. Failure records a user-facing
    /// error and leaves the prior list intact.
    pub fn apply_snapshot(&mut self, result: Result<Vec<Coin>, SdkError>) {
        match result {
            Ok(coins) => self.coins = coins,
            Err(err) => self.record_error(ERR_SNAPSHOT, &err),
        }
        self.loading = false;
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn coin(&self, id: &CoinId) -> Option<&Coin> {
        self.coins.iter().find(|c| &c.id == id)
    }

    /// Coins matching the current search term, case-insensitively against
    /// name and symbol. An empty term matches everything.
    pub fn filtered_coins(&self) -> Vec<&Coin> {
        self.coins
            .iter()
            .filter(|c| c.matches(&self.search_term))
            .collect()
    }

    /// Coins currently marked favorite, in snapshot order.
    pub fn favorite_coins(&self) -> Vec<&Coin> {
        self.coins
            .iter()
            .filter(|c| self.favorites.is_favorite(&c.id))
            .collect()
    }

    /// Coins referenced by watchlist entries, in snapshot order. Entries for
    /// coins outside the snapshot contribute nothing here.
    pub fn watchlist_coins(&self) -> Vec<&Coin> {
        self.coins
            .iter()
            .filter(|c| self.watchlist.contains_coin(&c.id))
            .collect()
    }

    // ── Favorites ────────────────────────────────────────────────────────

    pub fn is_favorite(&self, id: &CoinId) -> bool {
        self.favorites.is_favorite(id)
    }

    /// Toggle a favorite and persist the set best-effort. Returns the new
    /// membership state.
    pub fn toggle_favorite(&mut self, id: CoinId) -> bool {
        self.favorites.toggle(id)
    }

    // ── Selection ────────────────────────────────────────────────────────

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// The effective time range: the user's selection, or the implicit
    /// weekly default before any selection is made.
    pub fn time_range(&self) -> TimeRange {
        self.time_range.unwrap_or_default()
    }

    /// Select a time range. An actual change invalidates any in-flight chart
    /// fetch so its late response cannot overwrite the new selection's data.
    pub fn set_time_range(&mut self, range: TimeRange) {
        if self.time_range != Some(range) {
            self.time_range = Some(range);
            self.chart.invalidate();
        }
    }

    pub fn selected_coin(&self) -> Option<&CoinId> {
        self.selected_coin.as_ref()
    }

    /// Select a coin for the detail/chart view, invalidating in-flight chart
    /// fetches for the previous selection.
    pub fn select_coin(&mut self, id: CoinId) {
        if self.selected_coin.as_ref() != Some(&id) {
            self.selected_coin = Some(id);
            self.chart.invalidate();
        }
    }

    // ── Chart ────────────────────────────────────────────────────────────

    /// Tag a chart fetch with the selection active right now.
    pub fn begin_chart_load(&mut self, coin: &CoinId) -> ChartRequest {
        self.chart.begin(coin.clone(), self.time_range())
    }

    /// Apply a completed chart fetch; stale completions are discarded and a
    /// failure records a user-facing error.
    pub fn complete_chart_load(
        &mut self,
        request: ChartRequest,
        result: Result<ChartSeries, SdkError>,
    ) -> ChartOutcome {
        let outcome = self.chart.complete(request, result);
        if let ChartOutcome::Failed(reason) = &outcome {
            tracing::debug!(%reason, "chart fetch failed");
            self.last_error = Some(ERR_CHART.to_string());
        }
        outcome
    }

    /// Fetch and install the series for `coin` at the current time range.
    pub async fn load_chart(&mut self, coin: &CoinId) -> ChartOutcome {
        let request = self.begin_chart_load(coin);
        let result = self
            .client
            .charts()
            .series(&request.coin, request.range)
            .await;
        self.complete_chart_load(request, result)
    }

    pub fn chart_series(&self) -> Option<&ChartSeries> {
        self.chart.series()
    }

    // ── Watchlist ────────────────────────────────────────────────────────

    pub fn watchlist(&self) -> &WatchlistState {
        &self.watchlist
    }

    /// Refetch the watchlist, replacing the local collection wholesale.
    pub async fn refresh_watchlist(&mut self) {
        let result = match self.client.watchlist() {
            Ok(watchlist) => watchlist.fetch_all().await,
            Err(err) => Err(err),
        };
        self.apply_watchlist_fetch(result);
    }

    pub fn apply_watchlist_fetch(&mut self, result: Result<Vec<WatchlistEntry>, SdkError>) {
        match result {
            Ok(entries) => self.watchlist.replace(entries),
            Err(err) => self.record_error(ERR_WATCHLIST_FETCH, &err),
        }
    }

    /// Create a watchlist entry for `coin_id`. The local collection changes
    /// only once the server has assigned an id.
    pub async fn add_to_watchlist(&mut self, coin_id: CoinId) {
        let result = match self.client.watchlist() {
            Ok(watchlist) => watchlist.create(coin_id).await,
            Err(err) => Err(err),
        };
        self.apply_watchlist_create(result);
    }

    pub fn apply_watchlist_create(&mut self, result: Result<WatchlistEntry, SdkError>) {
        match result {
            Ok(entry) => self.watchlist.insert(entry),
            Err(err) => self.record_error(ERR_WATCHLIST_ADD, &err),
        }
    }

    /// Delete a watchlist entry. The remote call fires even for ids the
    /// local cache does not know (idempotent delete); the local entry is
    /// removed only after remote success.
    pub async fn remove_from_watchlist(&mut self, id: i64) {
        let result = match self.client.watchlist() {
            Ok(watchlist) => watchlist.remove(id).await,
            Err(err) => Err(err),
        };
        self.apply_watchlist_remove(id, result);
    }

    pub fn apply_watchlist_remove(&mut self, id: i64, result: Result<(), SdkError>) {
        match result {
            Ok(()) => {
                self.watchlist.remove(id);
            }
            Err(err) => self.record_error(ERR_WATCHLIST_REMOVE, &err),
        }
    }

    /// Update an entry's target price / notes. The remote response is
    /// authoritative and overwrites the matching local entry wholesale.
    pub async fn update_watchlist_entry(&mut self, id: i64, patch: WatchlistPatch) {
        let result = match self.client.watchlist() {
            Ok(watchlist) => watchlist.update(id, patch).await,
            Err(err) => Err(err),
        };
        self.apply_watchlist_update(result);
    }

    pub fn apply_watchlist_update(&mut self, result: Result<WatchlistEntry, SdkError>) {
        match result {
            Ok(entry) => {
                if !self.watchlist.apply_update(entry) {
                    tracing::debug!("update response for an entry not in the local cache");
                }
            }
            Err(err) => self.record_error(ERR_WATCHLIST_UPDATE, &err),
        }
    }

    // ── Errors ───────────────────────────────────────────────────────────

    /// The most recent user-facing error message, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    fn record_error(&mut self, message: &str, err: &SdkError) {
        tracing::debug!(%err, "{message}");
        self.last_error = Some(message.to_string());
    }
}
