//! Path construction — basis-spline line and filled-area geometry.

/// A single drawable path command in chart-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    /// Cubic Bezier segment to `(x, y)` via two control points.
    CubicTo {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x: f32,
        y: f32,
    },
    Close,
}

/// Builds a uniform cubic basis-spline path through `points`.
///
/// Interior samples act as control points rather than on-curve points: the
/// spline trades exact value fidelity for visual smoothness. One point yields
/// a bare `MoveTo`, two points a straight segment.
pub fn basis_spline(points: &[(f32, f32)]) -> Vec<PathCommand> {
    let n = points.len();
    let mut path = Vec::with_capacity(n + 2);

    let Some(&(fx, fy)) = points.first() else {
        return path;
    };
    path.push(PathCommand::MoveTo { x: fx, y: fy });
    if n == 1 {
        return path;
    }
    if n == 2 {
        path.push(PathCommand::LineTo { x: points[1].0, y: points[1].1 });
        return path;
    }

    let (mut x0, mut y0) = points[0];
    let (mut x1, mut y1) = points[1];
    path.push(PathCommand::LineTo {
        x: (5.0 * x0 + x1) / 6.0,
        y: (5.0 * y0 + y1) / 6.0,
    });

    // each sample past the second closes one spline span; the final sample is
    // replayed once so the curve runs all the way to it
    let last = points[n - 1];
    for &(x, y) in points[2..].iter().chain(std::iter::once(&last)) {
        path.push(PathCommand::CubicTo {
            x1: (2.0 * x0 + x1) / 3.0,
            y1: (2.0 * y0 + y1) / 3.0,
            x2: (x0 + 2.0 * x1) / 3.0,
            y2: (y0 + 2.0 * y1) / 3.0,
            x: (x0 + 4.0 * x1 + x) / 6.0,
            y: (y0 + 4.0 * y1 + y) / 6.0,
        });
        (x0, y0) = (x1, y1);
        (x1, y1) = (x, y);
    }

    path.push(PathCommand::LineTo { x: last.0, y: last.1 });
    path
}

/// Filled-area path: the basis spline on top, floored at `baseline` and
/// closed along it.
pub fn area(points: &[(f32, f32)], baseline: f32) -> Vec<PathCommand> {
    let mut path = basis_spline(points);
    if path.is_empty() {
        return path;
    }

    let first = points[0];
    let last = points[points.len() - 1];
    path.push(PathCommand::LineTo { x: last.0, y: baseline });
    path.push(PathCommand::LineTo { x: first.0, y: baseline });
    path.push(PathCommand::Close);
    path
}
