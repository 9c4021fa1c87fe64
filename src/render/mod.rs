//! Chart geometry — pure transform from a price series + viewport into
//! scaled, drawable output.
//!
//! No I/O and no async: fetching lives in `domain::chart`, this module only
//! maps an already-resolved series into pixel space. The caller hands the
//! result to whatever actually draws (SVG, canvas, GPU — out of scope here).

pub mod path;
pub mod scale;
pub mod ticks;

pub use path::PathCommand;
pub use scale::{PriceScale, TimeScale};
pub use ticks::{AxisTick, TICK_COUNT};

use crate::domain::chart::ChartSeries;

/// Chart margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 10.0,
            right: 10.0,
            bottom: 20.0,
            left: 10.0,
        }
    }
}

/// Vertical gradient spec for the area fill.
///
/// `positive` selects the gain/loss tone and is supplied by the caller (the
/// period's net direction); it is never derived from the series here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    /// y of the highest price — where the fill is most intense.
    pub y_start: f32,
    /// y of the lowest price — where the fill fades out.
    pub y_end: f32,
    pub start_opacity: f32,
    pub end_opacity: f32,
    pub positive: bool,
}

/// Drawable chart geometry in viewport coordinates.
///
/// All paths and ticks are relative to the inner plot origin
/// `(margins.left, margins.top)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartGeometry {
    pub line: Vec<PathCommand>,
    pub area: Vec<PathCommand>,
    pub ticks: Vec<AxisTick>,
    pub gradient: Option<Gradient>,
    pub time_domain: Option<(i64, i64)>,
    pub price_domain: Option<(f64, f64)>,
    pub inner_width: f32,
    pub inner_height: f32,
    pub margins: Margins,
}

impl ChartGeometry {
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }
}

/// Map a series onto a `width`×`height` viewport with the default margins.
///
/// An empty series yields empty geometry — no paths, no axes, no crash.
pub fn render(series: &ChartSeries, width: f32, height: f32, positive: bool) -> ChartGeometry {
    render_with_margins(series, width, height, positive, Margins::default())
}

pub fn render_with_margins(
    series: &ChartSeries,
    width: f32,
    height: f32,
    positive: bool,
    margins: Margins,
) -> ChartGeometry {
    if series.is_empty() {
        return ChartGeometry::default();
    }

    let inner_width = (width - margins.left - margins.right).max(0.0);
    let inner_height = (height - margins.top - margins.bottom).max(0.0);

    let mut t_min = i64::MAX;
    let mut t_max = i64::MIN;
    let mut v_min = f64::INFINITY;
    let mut v_max = f64::NEG_INFINITY;
    for p in &series.points {
        t_min = t_min.min(p.time_ms);
        t_max = t_max.max(p.time_ms);
        v_min = v_min.min(p.price);
        v_max = v_max.max(p.price);
    }

    let x = TimeScale::new(t_min, t_max, inner_width);
    let y = PriceScale::new(v_min, v_max, inner_height);

    let pixels: Vec<(f32, f32)> = series
        .points
        .iter()
        .map(|p| (x.to_px(p.time_ms), y.to_px(p.price)))
        .collect();

    ChartGeometry {
        line: path::basis_spline(&pixels),
        area: path::area(&pixels, inner_height),
        ticks: ticks::time_ticks(&x),
        gradient: Some(Gradient {
            y_start: y.to_px(v_max),
            y_end: y.to_px(v_min),
            start_opacity: 0.8,
            end_opacity: 0.1,
            positive,
        }),
        time_domain: Some((t_min, t_max)),
        price_domain: Some((v_min, v_max)),
        inner_width,
        inner_height,
        margins,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::PricePoint;

    fn series(points: &[(i64, f64)]) -> ChartSeries {
        ChartSeries::new(points.iter().map(|&(t, p)| PricePoint::new(t, p)).collect())
    }

    #[test]
    fn test_empty_series_renders_empty_geometry() {
        let geometry = render(&ChartSeries::default(), 300.0, 150.0, true);
        assert!(geometry.is_empty());
        assert!(geometry.area.is_empty());
        assert!(geometry.ticks.is_empty());
        assert!(geometry.gradient.is_none());
        assert!(geometry.time_domain.is_none());
    }

    #[test]
    fn test_two_point_series_domains_are_exact() {
        let t0 = 1_740_076_800_000;
        let t1 = 1_740_080_400_000;
        let geometry = render(&series(&[(t0, 100.0), (t1, 200.0)]), 300.0, 150.0, true);

        assert_eq!(geometry.time_domain, Some((t0, t1)));
        assert_eq!(geometry.price_domain, Some((100.0, 200.0)));
    }

    #[test]
    fn test_inner_dimensions_subtract_margins() {
        let geometry = render(&series(&[(0, 1.0), (1, 2.0)]), 300.0, 150.0, true);
        assert_eq!(geometry.inner_width, 280.0);
        assert_eq!(geometry.inner_height, 120.0);
    }

    #[test]
    fn test_line_spans_the_inner_width() {
        let geometry = render(
            &series(&[(0, 100.0), (500, 150.0), (1_000, 120.0)]),
            300.0,
            150.0,
            true,
        );
        assert_eq!(geometry.line[0], PathCommand::MoveTo { x: 0.0, y: 120.0 });
        match *geometry.line.last().unwrap() {
            PathCommand::LineTo { x, .. } => assert_eq!(x, 280.0),
            ref other => panic!("unexpected tail command: {other:?}"),
        }
    }

    #[test]
    fn test_area_floors_at_inner_height() {
        let geometry = render(&series(&[(0, 1.0), (1, 2.0), (2, 3.0)]), 300.0, 150.0, false);
        let floor_commands = geometry
            .area
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo { y, .. } if *y == 120.0))
            .count();
        assert_eq!(floor_commands, 2);
        assert_eq!(*geometry.area.last().unwrap(), PathCommand::Close);
    }

    #[test]
    fn test_gradient_tracks_price_extremes_and_caller_flag() {
        let geometry = render(&series(&[(0, 100.0), (1, 200.0)]), 300.0, 150.0, false);
        let gradient = geometry.gradient.unwrap();
        // max price sits at the top of the inner plot, min at the bottom
        assert_eq!(gradient.y_start, 0.0);
        assert_eq!(gradient.y_end, 120.0);
        assert_eq!(gradient.start_opacity, 0.8);
        assert_eq!(gradient.end_opacity, 0.1);
        assert!(!gradient.positive);
    }

    #[test]
    fn test_tick_count_is_fixed() {
        let geometry = render(&series(&[(0, 1.0), (86_400_000, 2.0)]), 300.0, 150.0, true);
        assert_eq!(geometry.ticks.len(), TICK_COUNT);
    }

    #[test]
    fn test_single_point_series_still_renders() {
        let geometry = render(&series(&[(1_000, 42.0)]), 300.0, 150.0, true);
        assert_eq!(geometry.line, [PathCommand::MoveTo { x: 0.0, y: 120.0 }]);
        assert_eq!(geometry.price_domain, Some((42.0, 42.0)));
    }
}
