use super::tolerance::{clamp, is_snap_disabled};
use crate::model::{Coord, GraphRange, SnapStep};

/// Round to the nearest integer with ties going toward positive infinity,
/// so `-4.5` becomes `-4` (not `-5` as `f64::round` gives).
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    if x - x.floor() == 0.5 { x.ceil() } else { x.round() }
}

/// Round `value` to the nearest multiple of `step`; a zero step passes through.
#[inline]
pub fn snap(value: f64, step: f64) -> f64 {
    if is_snap_disabled(step) {
        return value;
    }
    let snapped = round_half_up(value / step) * step;
    // avoid handing out -0.0 for values that round to the origin
    if snapped == 0.0 { 0.0 } else { snapped }
}

pub fn snap_coord(c: Coord, step: SnapStep) -> Coord {
    Coord::new(snap(c.x, step.x), snap(c.y, step.y))
}

pub fn clamp_to_range(c: Coord, range: &GraphRange) -> Coord {
    Coord::new(clamp(c.x, range.x.min, range.x.max), clamp(c.y, range.y.min, range.y.max))
}

/// Snap first, then clamp. Clamping last keeps the result inside the range
/// even when the range bounds are off the snap grid.
pub fn bound_and_snap(c: Coord, step: SnapStep, range: &GraphRange) -> Coord {
    clamp_to_range(snap_coord(c, step), range)
}

/// Limit a translation so that every point in `points` stays inside `range`.
///
/// Points already outside the range (after a range change) are not pulled
/// back; the allowed delta on that axis only ever shrinks toward zero.
pub fn bound_delta(points: &[Coord], delta: Coord, range: &GraphRange) -> Coord {
    if points.is_empty() {
        return delta;
    }
    let (mut minx, mut maxx) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut miny, mut maxy) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in points {
        minx = minx.min(p.x); maxx = maxx.max(p.x);
        miny = miny.min(p.y); maxy = maxy.max(p.y);
    }
    let dx = clamp(delta.x, (range.x.min - minx).min(0.0), (range.x.max - maxx).max(0.0));
    let dy = clamp(delta.y, (range.y.min - miny).min(0.0), (range.y.max - maxy).max(0.0));
    Coord::new(dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r010() -> GraphRange { GraphRange::from_bounds(0.0, 10.0, 0.0, 10.0) }

    #[test]
    fn snap_rounds_to_step() {
        assert_eq!(snap(3.4, 1.0), 3.0);
        assert_eq!(snap(7.8, 1.0), 8.0);
        assert_eq!(snap(0.74, 0.5), 0.5);
        assert_eq!(snap(-2.6, 2.0), -2.0);
    }

    #[test]
    fn ties_round_toward_positive_infinity() {
        assert_eq!(snap(-4.5, 1.0), -4.0);
        assert_eq!(snap(4.5, 1.0), 5.0);
        assert_eq!(snap(-0.25, 0.5), 0.0);
    }

    #[test]
    fn zero_step_passes_through() {
        assert_eq!(snap(3.14159, 0.0), 3.14159);
        assert_eq!(snap(-1.25, f64::NAN), -1.25);
    }

    #[test]
    fn snap_never_returns_negative_zero() {
        let s = snap(-0.2, 1.0);
        assert_eq!(s, 0.0);
        assert!(s.is_sign_positive());
    }

    #[test]
    fn clamp_pulls_to_nearest_boundary() {
        assert_eq!(clamp_to_range(Coord::new(15.0, -5.0), &r010()), Coord::new(10.0, 0.0));
        assert_eq!(clamp_to_range(Coord::new(4.0, 6.0), &r010()), Coord::new(4.0, 6.0));
    }

    #[test]
    fn bound_and_snap_clamps_after_snapping() {
        let range = GraphRange::from_bounds(0.0, 9.5, 0.0, 9.5);
        let c = bound_and_snap(Coord::new(9.7, 3.2), SnapStep::new(1.0, 1.0), &range);
        assert_eq!(c, Coord::new(9.5, 3.0));
    }

    #[test]
    fn bound_delta_stops_at_edge() {
        let pts = [Coord::new(8.0, 1.0), Coord::new(9.0, 2.0)];
        let d = bound_delta(&pts, Coord::new(5.0, -5.0), &r010());
        assert_eq!(d, Coord::new(1.0, -1.0));
    }

    #[test]
    fn bound_delta_keeps_outside_points_from_moving_further_out() {
        let pts = [Coord::new(12.0, 5.0)];
        let d = bound_delta(&pts, Coord::new(3.0, 0.0), &r010());
        assert_eq!(d.x, 0.0);
        let back = bound_delta(&pts, Coord::new(-3.0, 0.0), &r010());
        assert_eq!(back.x, -3.0);
    }
}
