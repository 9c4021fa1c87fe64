//! Low-level HTTP client — `TrackerHttp`.
//!
//! One method per remote endpoint, split across the two collaborators: the
//! market-data service and the watchlist service. Returns wire types
//! (conversion to domain types happens at the sub-client boundary). Internal
//! to the SDK — the high-level client wraps this.
//!
//! No automatic retry: a failed call surfaces immediately and retry is a
//! user-initiated re-trigger of the same operation.

use crate::domain::chart::wire::MarketChartResponse;
use crate::domain::coin::wire::MarketCoinResponse;
use crate::domain::watchlist::wire::{
    CreateWatchlistRequest, UpdateWatchlistRequest, WatchlistEntryResponse,
};
use crate::error::HttpError;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the market-data and watchlist services.
#[derive(Clone)]
pub struct TrackerHttp {
    market_url: String,
    watchlist_url: String,
    client: Client,
}

impl TrackerHttp {
    pub fn new(market_url: &str, watchlist_url: &str) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            market_url: market_url.trim_end_matches('/').to_string(),
            watchlist_url: watchlist_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    // ── Market data ──────────────────────────────────────────────────────

    pub async fn get_markets(&self) -> Result<Vec<MarketCoinResponse>, HttpError> {
        let url = format!(
            "{}/coins/markets?vs_currency=usd&order=market_cap_desc&per_page=100&page=1&sparkline=true&price_change_percentage=24h",
            self.market_url
        );
        self.get(&url).await
    }

    pub async fn get_market_chart(
        &self,
        coin_id: &str,
        days: u32,
    ) -> Result<MarketChartResponse, HttpError> {
        let url = format!(
            "{}/coins/{}/market_chart?vs_currency=usd&days={}",
            self.market_url,
            urlencoding::encode(coin_id),
            days
        );
        self.get(&url).await
    }

    // ── Watchlist ────────────────────────────────────────────────────────

    pub async fn get_watchlist(
        &self,
        user_id: &str,
    ) -> Result<Vec<WatchlistEntryResponse>, HttpError> {
        let url = format!(
            "{}/watchlist/{}",
            self.watchlist_url,
            urlencoding::encode(user_id)
        );
        self.get(&url).await
    }

    pub async fn create_watchlist_entry(
        &self,
        body: &CreateWatchlistRequest,
    ) -> Result<WatchlistEntryResponse, HttpError> {
        let url = format!("{}/watchlist", self.watchlist_url);
        self.post(&url, body).await
    }

    pub async fn update_watchlist_entry(
        &self,
        id: i64,
        body: &UpdateWatchlistRequest,
    ) -> Result<WatchlistEntryResponse, HttpError> {
        let url = format!("{}/watchlist/{}", self.watchlist_url, id);
        self.put(&url, body).await
    }

    pub async fn delete_watchlist_entry(&self, id: i64) -> Result<(), HttpError> {
        let url = format!("{}/watchlist/{}", self.watchlist_url, id);
        tracing::debug!(%url, "DELETE");
        let resp = self.send(self.client.delete(&url)).await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::status_error(status.as_u16(), resp).await)
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!(%url, "GET");
        self.do_request(self.client.get(url)).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        tracing::debug!(%url, "POST");
        self.do_request(self.client.post(url).json(body)).await
    }

    async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        tracing::debug!(%url, "PUT");
        self.do_request(self.client.put(url).json(body)).await
    }

    async fn do_request<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, HttpError> {
        let resp = self.send(req).await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        Err(Self::status_error(status.as_u16(), resp).await)
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, HttpError> {
        req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Transport(e)
            }
        })
    }

    async fn status_error(status: u16, resp: reqwest::Response) -> HttpError {
        let body = resp.text().await.unwrap_or_default();
        match status {
            404 => HttpError::NotFound(body),
            400..=499 => HttpError::BadRequest(body),
            _ => HttpError::ServerError { status, body },
        }
    }
}
