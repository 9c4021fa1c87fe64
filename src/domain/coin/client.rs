//! Markets sub-client — ranked snapshot fetch.

use crate::client::TrackerClient;
use crate::domain::coin::Coin;
use crate::error::SdkError;

/// Sub-client for market snapshot operations.
pub struct Markets<'a> {
    pub(crate) client: &'a TrackerClient,
}

impl<'a> Markets<'a> {
    /// Fetch the current ranked coin list.
    ///
    /// The result replaces any previous snapshot wholesale; there is no
    /// partial population on failure.
    pub async fn snapshot(&self) -> Result<Vec<Coin>, SdkError> {
        let resp = self.client.http.get_markets().await?;
        Ok(resp.into_iter().map(Coin::from).collect())
    }
}
