//! Conversions from wire types to domain types for chart series.

use super::wire::MarketChartResponse;
use super::{ChartSeries, PricePoint};

impl From<MarketChartResponse> for ChartSeries {
    fn from(resp: MarketChartResponse) -> Self {
        let mut points: Vec<PricePoint> = Vec::with_capacity(resp.prices.len());
        for raw in resp.prices {
            let point = PricePoint::new(raw.0, raw.1);
            if let Some(last) = points.last_mut() {
                // duplicate timestamp: the later sample wins
                if last.time_ms == point.time_ms {
                    last.price = point.price;
                    continue;
                }
                // out-of-order sample: dropped, timestamps stay strictly increasing
                if last.time_ms > point.time_ms {
                    continue;
                }
            }
            points.push(point);
        }
        ChartSeries::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::super::wire::RawPoint;
    use super::*;

    #[test]
    fn test_conversion_preserves_order() {
        let resp = MarketChartResponse {
            prices: vec![RawPoint(100, 1.0), RawPoint(200, 2.0), RawPoint(300, 3.0)],
        };
        let series: ChartSeries = resp.into();
        assert_eq!(series.len(), 3);
        assert_eq!(series.points[2], PricePoint::new(300, 3.0));
    }

    #[test]
    fn test_duplicate_timestamp_overwrites() {
        let resp = MarketChartResponse {
            prices: vec![RawPoint(100, 1.0), RawPoint(100, 1.5), RawPoint(200, 2.0)],
        };
        let series: ChartSeries = resp.into();
        assert_eq!(series.len(), 2);
        assert_eq!(series.points[0], PricePoint::new(100, 1.5));
    }

    #[test]
    fn test_out_of_order_sample_dropped() {
        let resp = MarketChartResponse {
            prices: vec![RawPoint(200, 2.0), RawPoint(100, 1.0), RawPoint(300, 3.0)],
        };
        let series: ChartSeries = resp.into();
        let times: Vec<i64> = series.points.iter().map(|p| p.time_ms).collect();
        assert_eq!(times, [200, 300]);
    }
}
