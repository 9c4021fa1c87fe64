//! Network URL constants for the CoinTrack SDK.

/// Default market-data API base URL.
pub const DEFAULT_MARKET_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Default watchlist service base URL.
pub const DEFAULT_WATCHLIST_API_URL: &str = "http://localhost:8080/api";

/// Default user identity owning the watchlist.
pub const DEFAULT_USER_ID: &str = "user1";
