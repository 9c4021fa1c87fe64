//! # CoinTrack SDK
//!
//! Client-side state synchronization and chart pipeline for the CoinTrack
//! market tracker.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, errors (always available)
//! 2. **Storage** — Local favorites persistence backends
//! 3. **HTTP API** — `TrackerHttp` with one method per remote endpoint
//! 4. **High-Level Client** — `TrackerClient` with nested sub-clients and an
//!    explicit watchlist capability
//! 5. **App State** — `AppState`, the single store every view reads through
//!
//! The renderer sits beside the layers: a pure transform from a resolved
//! price series into drawable geometry.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cointrack_sdk::prelude::*;
//!
//! let client = TrackerClient::builder().build()?;
//! let mut app = AppState::new(client, Box::new(FileBackend::new("favorites.json")));
//!
//! app.load_snapshot().await;
//! app.set_time_range(TimeRange::Month);
//! app.load_chart(&CoinId::from("bitcoin")).await;
//!
//! if let Some(series) = app.chart_series() {
//!     let positive = series.is_positive();
//!     let geometry = render(series, 300.0, 150.0, positive);
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Storage ─────────────────────────────────────────────────────────

/// Local durable storage backends for the favorites payload.
pub mod storage;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client, one method per remote endpoint.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `TrackerClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 5: App State ───────────────────────────────────────────────────────

/// `AppState` — the unified application store.
#[cfg(feature = "http")]
pub mod state;

// ── Renderer ─────────────────────────────────────────────────────────────────

/// Pure chart-geometry transform.
pub mod render;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{CoinId, TimeRange};

    // Domain types — coin
    pub use crate::domain::coin::Coin;

    // Domain types — chart
    pub use crate::domain::chart::{
        ChartOutcome, ChartRequest, ChartSeries, ChartState, PricePoint,
    };

    // Domain types — watchlist
    pub use crate::domain::watchlist::{WatchlistEntry, WatchlistPatch, WatchlistState};

    // Domain types — favorites
    pub use crate::domain::favorites::{FavoriteSet, FavoritesStore};

    // Errors
    pub use crate::error::SdkError;

    // Network
    pub use crate::network::{DEFAULT_MARKET_API_URL, DEFAULT_WATCHLIST_API_URL};

    // Storage backends
    pub use crate::storage::{FavoritesBackend, FileBackend, MemoryBackend};

    // HTTP client + app state
    #[cfg(feature = "http")]
    pub use crate::client::{TrackerClient, TrackerClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::state::AppState;

    // Renderer
    pub use crate::render::{render, AxisTick, ChartGeometry, Gradient, Margins, PathCommand};
}
