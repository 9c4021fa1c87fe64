//! Axis tick generation — fixed count, abbreviated month+day labels.

use super::scale::TimeScale;
use chrono::DateTime;

/// Number of x-axis ticks per chart.
pub const TICK_COUNT: usize = 5;

/// A single x-axis tick: pixel position plus formatted label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub x: f32,
    pub time_ms: i64,
    /// Abbreviated month + day, e.g. `"Feb 28"`.
    pub label: String,
}

/// Evenly spaced ticks across the scale's time domain.
pub fn time_ticks(scale: &TimeScale) -> Vec<AxisTick> {
    let (t0, t1) = scale.domain();
    (0..TICK_COUNT)
        .map(|i| {
            let frac = i as f64 / (TICK_COUNT - 1) as f64;
            let t = t0 + (((t1 - t0) as f64) * frac).round() as i64;
            AxisTick {
                x: scale.to_px(t),
                time_ms: t,
                label: format_tick(t),
            }
        })
        .collect()
}

fn format_tick(time_ms: i64) -> String {
    DateTime::from_timestamp_millis(time_ms)
        .map(|dt| dt.format("%b %d").to_string())
        .unwrap_or_default()
}
