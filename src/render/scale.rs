//! Linear time/price scales mapping data domains to pixel ranges.

/// Maps `[t_min, t_max]` (epoch millis) linearly onto `[0, width]`.
///
/// Positions are proportional to elapsed time, not sample index, so unevenly
/// spaced samples land at their true temporal position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    t_min: i64,
    t_max: i64,
    width: f32,
}

impl TimeScale {
    pub fn new(t_min: i64, t_max: i64, width: f32) -> Self {
        Self { t_min, t_max, width }
    }

    pub fn domain(&self) -> (i64, i64) {
        (self.t_min, self.t_max)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn to_px(&self, t: i64) -> f32 {
        let span = ((self.t_max - self.t_min) as f64).max(1e-12);
        (((t - self.t_min) as f64) / span) as f32 * self.width
    }
}

/// Maps `[v_min, v_max]` onto `[height, 0]` — inverted, because the vertical
/// axis increases upward visually but downward in coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceScale {
    v_min: f64,
    v_max: f64,
    height: f32,
}

impl PriceScale {
    pub fn new(v_min: f64, v_max: f64, height: f32) -> Self {
        Self { v_min, v_max, height }
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.v_min, self.v_max)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = (self.v_max - self.v_min).max(1e-12);
        self.height - ((v - self.v_min) / span) as f32 * self.height
    }
}
