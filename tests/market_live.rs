//! Integration tests against the live market-data service.
//!
//! All tests are `#[ignore]` because they require network access (and are
//! subject to the public API's rate limits).
//!
//! Run with:
//! ```bash
//! cargo test --test market_live -- --ignored
//! ```

use cointrack_sdk::prelude::*;

#[tokio::test]
#[ignore]
async fn snapshot_returns_the_ranked_list() {
    let client = TrackerClient::builder().build().expect("client");
    let coins = client.markets().snapshot().await.expect("snapshot");

    assert!(!coins.is_empty());
    assert!(coins.iter().any(|c| c.id.as_str() == "bitcoin"));
    // sparkline=true is part of the snapshot query
    assert!(coins.iter().any(|c| c.sparkline_7d.is_some()));
}

#[tokio::test]
#[ignore]
async fn chart_series_is_ordered_and_non_empty() {
    let client = TrackerClient::builder().build().expect("client");
    let series = client
        .charts()
        .series(&CoinId::from("bitcoin"), TimeRange::Day)
        .await
        .expect("series");

    assert!(!series.is_empty());
    assert!(series
        .points
        .windows(2)
        .all(|w| w[0].time_ms < w[1].time_ms));
}
