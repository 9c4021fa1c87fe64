//! High-level client — `TrackerClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder, the watchlist capability, and the accessor
//! methods.

use crate::domain::chart::client::Charts;
use crate::domain::coin::client::Markets;
use crate::domain::watchlist::client::Watchlist;
use crate::error::SdkError;
use crate::http::TrackerHttp;
use crate::network;

/// The primary entry point for the CoinTrack SDK.
///
/// Provides nested sub-client accessors per domain: `client.markets()`,
/// `client.charts()`, `client.watchlist()`.
#[derive(Clone)]
pub struct TrackerClient {
    pub(crate) http: TrackerHttp,
    watchlist: WatchlistCapability,
}

/// Watchlist capability: explicitly enabled with a user identity, or
/// disabled. Never a silently-absent function reference — a disabled
/// capability is an error the caller sees.
#[derive(Debug, Clone, PartialEq, Eq)]
enum WatchlistCapability {
    Enabled { user_id: String },
    Disabled,
}

impl TrackerClient {
    pub fn builder() -> TrackerClientBuilder {
        TrackerClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn charts(&self) -> Charts<'_> {
        Charts { client: self }
    }

    /// Watchlist sub-client, or `WatchlistDisabled` when the capability was
    /// not configured on this client.
    pub fn watchlist(&self) -> Result<Watchlist<'_>, SdkError> {
        match &self.watchlist {
            WatchlistCapability::Enabled { user_id } => Ok(Watchlist {
                client: self,
                user_id,
            }),
            WatchlistCapability::Disabled => Err(SdkError::WatchlistDisabled),
        }
    }

    pub fn watchlist_enabled(&self) -> bool {
        matches!(self.watchlist, WatchlistCapability::Enabled { .. })
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct TrackerClientBuilder {
    market_url: String,
    watchlist_url: String,
    watchlist: WatchlistCapability,
}

impl Default for TrackerClientBuilder {
    fn default() -> Self {
        Self {
            market_url: network::DEFAULT_MARKET_API_URL.to_string(),
            watchlist_url: network::DEFAULT_WATCHLIST_API_URL.to_string(),
            watchlist: WatchlistCapability::Enabled {
                user_id: network::DEFAULT_USER_ID.to_string(),
            },
        }
    }
}

impl TrackerClientBuilder {
    pub fn market_url(mut self, url: &str) -> Self {
        self.market_url = url.to_string();
        self
    }

    pub fn watchlist_url(mut self, url: &str) -> Self {
        self.watchlist_url = url.to_string();
        self
    }

    /// Set the user identity owning the watchlist (also re-enables the
    /// capability if it was disabled).
    pub fn user_id(mut self, user_id: &str) -> Self {
        self.watchlist = WatchlistCapability::Enabled {
            user_id: user_id.to_string(),
        };
        self
    }

    /// Turn the watchlist capability off. Watchlist operations on the built
    /// client return `SdkError::WatchlistDisabled`.
    pub fn without_watchlist(mut self) -> Self {
        self.watchlist = WatchlistCapability::Disabled;
        self
    }

    pub fn build(self) -> Result<TrackerClient, SdkError> {
        Ok(TrackerClient {
            http: TrackerHttp::new(&self.market_url, &self.watchlist_url),
            watchlist: self.watchlist,
        })
    }
}
