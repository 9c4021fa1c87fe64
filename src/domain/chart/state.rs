//! Chart state container — current series plus the stale-response guard.

use super::ChartSeries;
use crate::error::SdkError;
use crate::shared::{CoinId, TimeRange};

/// Tag identifying one chart fetch: the selection active at dispatch time
/// plus a request generation.
///
/// A selection change does not cancel an in-flight fetch; instead the
/// generation lets `ChartState::complete` discard a late-arriving response
/// that no longer matches the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRequest {
    pub coin: CoinId,
    pub range: TimeRange,
    generation: u64,
}

/// Outcome of applying a completed chart fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome {
    /// The series was installed as the current chart.
    Applied,
    /// A newer selection superseded this request; the result was discarded.
    Stale,
    /// The fetch failed; the prior chart is left intact.
    Failed(String),
}

/// Current chart series plus the generation counter used to discard stale
/// completions.
#[derive(Debug, Clone, Default)]
pub struct ChartState {
    current: Option<(CoinId, TimeRange, ChartSeries)>,
    generation: u64,
}

impl ChartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch for the given selection. Any earlier in-flight request
    /// is superseded.
    pub fn begin(&mut self, coin: CoinId, range: TimeRange) -> ChartRequest {
        self.generation += 1;
        ChartRequest {
            coin,
            range,
            generation: self.generation,
        }
    }

    /// Drop any in-flight request's claim on the current chart. Called when
    /// the selection changes without an immediate refetch.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Apply a completed fetch for `request`.
    ///
    /// The series is installed only when `request` is still the latest
    /// dispatch; otherwise the result is discarded as stale. A failure leaves
    /// the prior series intact either way.
    pub fn complete(
        &mut self,
        request: ChartRequest,
        result: Result<ChartSeries, SdkError>,
    ) -> ChartOutcome {
        if request.generation != self.generation {
            tracing::debug!(
                coin = %request.coin,
                range = %request.range,
                "discarding stale chart response"
            );
            return ChartOutcome::Stale;
        }

        match result {
            Ok(series) => {
                self.current = Some((request.coin, request.range, series));
                ChartOutcome::Applied
            }
            Err(err) => ChartOutcome::Failed(err.to_string()),
        }
    }

    /// The current series, if one has been loaded and not invalidated away.
    pub fn series(&self) -> Option<&ChartSeries> {
        self.current.as_ref().map(|(_, _, series)| series)
    }

    /// The `(coin, range)` pair the current series belongs to.
    pub fn key(&self) -> Option<(&CoinId, TimeRange)> {
        self.current.as_ref().map(|(coin, range, _)| (coin, *range))
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
