//! Charts sub-client — historical series queries.

use crate::client::TrackerClient;
use crate::domain::chart::ChartSeries;
use crate::error::SdkError;
use crate::shared::{CoinId, TimeRange};

/// Sub-client for chart-data operations.
pub struct Charts<'a> {
    pub(crate) client: &'a TrackerClient,
}

impl<'a> Charts<'a> {
    /// Fetch the price series for `(coin, range)`.
    ///
    /// Every call is a fresh fetch; series are not cached across range
    /// switches. Staleness on rapid selection changes is handled by the
    /// caller through [`ChartState`](crate::domain::chart::ChartState).
    pub async fn series(&self, coin_id: &CoinId, range: TimeRange) -> Result<ChartSeries, SdkError> {
        let resp = self
            .client
            .http
            .get_market_chart(coin_id.as_str(), range.days())
            .await?;
        Ok(resp.into())
    }
}
