use super::tolerance::{approx_eq, EPS_LEN, EPS_POS};
use crate::model::Coord;

/// Euclidean distance from `center` to `p`. Exactly 0 for coincident points.
pub fn compute_radius(center: Coord, p: Coord) -> f64 {
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }
    dx.hypot(dy)
}

pub fn distance(a: Coord, b: Coord) -> f64 { compute_radius(a, b) }

pub fn coords_equal(a: Coord, b: Coord) -> bool {
    approx_eq(a.x, b.x, EPS_POS) && approx_eq(a.y, b.y, EPS_POS)
}

/// Point at `radius` and `angle` (radians, counter-clockwise from +x) around `origin`.
pub fn polar(origin: Coord, radius: f64, angle: f64) -> Coord {
    Coord::new(origin.x + radius * angle.cos(), origin.y + radius * angle.sin())
}

/// Direction of `p` as seen from `origin`, in radians within `(-PI, PI]`.
pub fn angle_of(origin: Coord, p: Coord) -> f64 {
    let d = p.sub(origin);
    if d.x.abs() <= EPS_LEN && d.y.abs() <= EPS_LEN {
        return 0.0;
    }
    d.y.atan2(d.x)
}

#[inline]
pub fn deg_to_rad(deg: f64) -> f64 { deg * std::f64::consts::PI / 180.0 }

/// True when any two of the points share an x coordinate.
pub fn any_x_equal(points: &[Coord]) -> bool {
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            if approx_eq(a.x, b.x, EPS_POS) {
                return true;
            }
        }
    }
    false
}
