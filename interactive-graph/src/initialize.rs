//! Building the initial graph state from props.
//!
//! Authored coordinates are trusted and used as-is. Missing coordinates are
//! generated: layouts are written either in a -10..10 "template" square or
//! directly in normalized 0..1 space, then mapped into the live range with a
//! small inset and snapped to the grid.

use std::f64::consts::PI;

use crate::error::InitError;
use crate::geometry::math::{deg_to_rad, distance, polar};
use crate::geometry::snap::{clamp_to_range, snap, snap_coord};
use crate::log;
use crate::model::{Coord, Count, GraphRange, SnapStep, SnapTo};
use crate::props::{GraphProps, GraphSpec};
use crate::state::{GraphVariant, InteractiveGraphState};

/// Fraction of each axis kept clear on both sides when placing defaults.
const NUDGE_FRACTION: f64 = 1.0 / 20.0;

const TEMPLATE_MIN: f64 = -10.0;
const TEMPLATE_EXTENT: f64 = 20.0;

/// Radius of a default polygon in template units.
const POLYGON_TEMPLATE_RADIUS: f64 = 4.0;

/// Smallest opening of a default angle, in degrees.
const MIN_DEFAULT_ANGLE_DEG: f64 = 20.0;

pub fn initialize_graph_state(props: &GraphProps) -> Result<InteractiveGraphState, InitError> {
    props.validate()?;
    let graph = initial_variant(&props.graph, &props.range, props.snap_step);
    log::debug!(graph_type = graph.graph_type().as_str(), "initialized graph state");
    Ok(InteractiveGraphState::new(graph, props.range, props.snap_step))
}

fn initial_variant(spec: &GraphSpec, range: &GraphRange, step: SnapStep) -> GraphVariant {
    match spec {
        GraphSpec::Point { num_points, coords, coord } => {
            let unlimited = num_points.map_or(false, |n| n.is_unlimited());
            let coords = match (coords, coord) {
                (Some(c), _) => c.clone(),
                (None, Some(c)) if !unlimited => vec![*c],
                _ => default_points(*num_points, range, step),
            };
            GraphVariant::Point { coords, unlimited }
        }
        GraphSpec::Segment { num_segments, coords } => GraphVariant::Segment {
            coords: coords.clone().unwrap_or_else(|| default_segments(num_segments.unwrap_or(1), range, step)),
        },
        GraphSpec::Linear { coords } => GraphVariant::Linear {
            coords: coords.unwrap_or_else(|| default_line(UPPER_LINE, range, step)),
        },
        GraphSpec::Ray { coords } => GraphVariant::Ray {
            coords: coords.unwrap_or_else(|| default_line(UPPER_LINE, range, step)),
        },
        GraphSpec::LinearSystem { coords } => GraphVariant::LinearSystem {
            coords: coords.clone().unwrap_or_else(|| {
                vec![default_line(UPPER_LINE, range, step), default_line(LOWER_LINE, range, step)]
            }),
        },
        GraphSpec::Polygon { num_sides, show_angles, show_sides, snap_to, coords } => {
            let snap_to = snap_to.unwrap_or_default();
            let unlimited = num_sides.map_or(false, |n| n.is_unlimited());
            let coords = match coords {
                Some(c) => c.clone(),
                None => default_polygon(*num_sides, snap_to, range, step),
            };
            GraphVariant::Polygon {
                coords,
                show_angles: show_angles.unwrap_or(false),
                show_sides: show_sides.unwrap_or(false),
                snap_to,
                unlimited,
            }
        }
        GraphSpec::Circle { center, radius } => {
            let (center, radius_point) = match (center, radius) {
                (Some(c), Some(r)) => (*c, Coord::new(c.x + r, c.y)),
                (Some(c), None) => (*c, Coord::new(c.x + default_radius(range, step), c.y)),
                _ => default_circle(range, step),
            };
            GraphVariant::Circle { center, radius_point }
        }
        GraphSpec::Quadratic { coords } => GraphVariant::Quadratic {
            coords: coords.unwrap_or_else(|| {
                let p = normalize_points(range, step, &[[0.25, 0.75], [0.5, 0.25], [0.75, 0.75]], false);
                [p[0], p[1], p[2]]
            }),
        },
        GraphSpec::Sinusoid { coords } => GraphVariant::Sinusoid {
            coords: coords.unwrap_or_else(|| {
                let p = normalize_points(range, step, &[[0.5, 0.5], [0.65, 0.6]], false);
                [p[0], p[1]]
            }),
        },
        GraphSpec::Angle { coords, show_angles, allow_reflex_angles, angle_offset_deg, snap_degrees } => {
            let snap_deg = snap_degrees.filter(|d| d.is_finite() && *d > 0.0).unwrap_or(1.0);
            let offset = deg_to_rad(angle_offset_deg.filter(|d| d.is_finite()).unwrap_or(0.0));
            GraphVariant::Angle {
                coords: coords.unwrap_or_else(|| default_angle(snap_deg, offset, range, step)),
                show_angles: show_angles.unwrap_or(false),
                allow_reflex_angles: allow_reflex_angles.unwrap_or(false),
                angle_offset: offset,
                snap_angle: deg_to_rad(snap_deg),
            }
        }
    }
}

const UPPER_LINE: [[f64; 2]; 2] = [[0.25, 0.75], [0.75, 0.75]];
const LOWER_LINE: [[f64; 2]; 2] = [[0.25, 0.25], [0.75, 0.25]];

/// Map template (-10..10) coordinates into normalized 0..1 space.
fn normalize_template(points: &[[f64; 2]]) -> Vec<[f64; 2]> {
    points
        .iter()
        .map(|p| [(p[0] - TEMPLATE_MIN) / TEMPLATE_EXTENT, (p[1] - TEMPLATE_MIN) / TEMPLATE_EXTENT])
        .collect()
}

/// Map normalized 0..1 coordinates into `range`, inset by the nudge on each
/// side, and snap unless `no_snap`.
fn normalize_points(range: &GraphRange, step: SnapStep, points: &[[f64; 2]], no_snap: bool) -> Vec<Coord> {
    points
        .iter()
        .map(|p| {
            let place = |t: f64, min: f64, extent: f64| {
                let nudge = extent * NUDGE_FRACTION;
                min + nudge + t * (extent - 2.0 * nudge)
            };
            let c = Coord::new(place(p[0], range.x.min, range.x.extent()), place(p[1], range.y.min, range.y.extent()));
            if no_snap { c } else { snap_coord(c, step) }
        })
        .collect()
}

/// `n` values evenly spread from `from` to `to` inclusive.
fn spread(n: usize, from: f64, to: f64) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![(from + to) / 2.0],
        _ => (0..n).map(|i| from + (to - from) * i as f64 / (n - 1) as f64).collect(),
    }
}

fn default_points(num_points: Option<Count>, range: &GraphRange, step: SnapStep) -> Vec<Coord> {
    let n = match num_points {
        Some(Count::Unlimited(_)) => return Vec::new(),
        Some(Count::Fixed(n)) => n,
        None => 1,
    };
    let xs: Vec<f64> = match n {
        1 => vec![0.0],
        2 => vec![-5.0, 5.0],
        3 => vec![-5.0, 0.0, 5.0],
        4 => vec![-6.0, -2.0, 2.0, 6.0],
        5 => vec![-6.0, -3.0, 0.0, 3.0, 6.0],
        6 => vec![-5.0, -3.0, -1.0, 1.0, 3.0, 5.0],
        _ => spread(n, -8.0, 8.0),
    };
    let template: Vec<[f64; 2]> = xs.into_iter().map(|x| [x, 0.0]).collect();
    normalize_points(range, step, &normalize_template(&template), false)
}

fn default_segments(n: usize, range: &GraphRange, step: SnapStep) -> Vec<[Coord; 2]> {
    if n == 1 {
        let p = normalize_points(range, step, &normalize_template(&[[-5.0, -5.0], [5.0, 5.0]]), false);
        return vec![[p[0], p[1]]];
    }
    let ys: Vec<f64> = match n {
        2 => vec![5.0, -5.0],
        3 => vec![5.0, 0.0, -5.0],
        4 => vec![6.0, 2.0, -2.0, -6.0],
        5 => vec![6.0, 3.0, 0.0, -3.0, -6.0],
        6 => vec![5.0, 3.0, 1.0, -1.0, -3.0, -5.0],
        _ => spread(n, 8.0, -8.0),
    };
    ys.into_iter()
        .map(|y| {
            let p = normalize_points(range, step, &normalize_template(&[[-5.0, y], [5.0, y]]), false);
            [p[0], p[1]]
        })
        .collect()
}

fn default_line(line: [[f64; 2]; 2], range: &GraphRange, step: SnapStep) -> [Coord; 2] {
    let p = normalize_points(range, step, &line, false);
    [p[0], p[1]]
}

fn default_polygon(num_sides: Option<Count>, snap_to: SnapTo, range: &GraphRange, step: SnapStep) -> Vec<Coord> {
    let n = match num_sides {
        Some(Count::Unlimited(_)) => return Vec::new(),
        Some(Count::Fixed(n)) => n,
        None => 3,
    };
    if n == 0 {
        return Vec::new();
    }
    let angle = 2.0 * PI / n as f64;
    // rotate so the figure sits upright
    let offset = (1.0 / n as f64 - 0.5) * PI;
    let template: Vec<[f64; 2]> = (0..n)
        .map(|i| {
            let a = i as f64 * angle + offset;
            [POLYGON_TEMPLATE_RADIUS * a.cos(), POLYGON_TEMPLATE_RADIUS * a.sin()]
        })
        .collect();
    normalize_points(range, step, &normalize_template(&template), snap_to != SnapTo::Grid)
}

fn default_radius(range: &GraphRange, step: SnapStep) -> f64 {
    let raw = range.x.extent().min(range.y.extent()) / 10.0;
    let snapped = snap(raw, step.x);
    if snapped > 0.0 { snapped } else if step.x > 0.0 { step.x } else { raw }
}

fn default_circle(range: &GraphRange, step: SnapStep) -> (Coord, Coord) {
    let mid = Coord::new(range.x.midpoint(), range.y.midpoint());
    let center = clamp_to_range(snap_coord(mid, step), range);
    (center, Coord::new(center.x + default_radius(range, step), center.y))
}

fn default_angle(snap_deg: f64, offset: f64, range: &GraphRange, step: SnapStep) -> [Coord; 3] {
    let opening = (MIN_DEFAULT_ANGLE_DEG / snap_deg).ceil().max(1.0) * snap_deg;
    let p = normalize_points(range, step, &[[0.85, 0.5], [0.5, 0.5]], false);
    let vertex = p[1];
    let radius = distance(vertex, p[0]);
    [polar(vertex, radius, offset), vertex, polar(vertex, radius, deg_to_rad(opening) + offset)]
}
