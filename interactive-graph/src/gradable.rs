use serde::{Deserialize, Serialize};

use crate::geometry::math::compute_radius;
use crate::model::{Coord, Count, GraphType, SnapTo};
use crate::state::{GraphVariant, InteractiveGraphState};

/// The user's current answer in the shape the grader compares against.
///
/// Every payload field is optional so that a bare `{"type": ...}` answer can
/// be expressed; a full answer always fills the geometry fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum GradableGraph {
    #[serde(rename_all = "camelCase")]
    Point {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        coords: Option<Vec<Coord>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        num_points: Option<Count>,
    },
    #[serde(rename_all = "camelCase")]
    Segment {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        coords: Option<Vec<[Coord; 2]>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        num_segments: Option<usize>,
    },
    Linear {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        coords: Option<[Coord; 2]>,
    },
    LinearSystem {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        coords: Option<Vec<[Coord; 2]>>,
    },
    Ray {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        coords: Option<[Coord; 2]>,
    },
    #[serde(rename_all = "camelCase")]
    Polygon {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        coords: Option<Vec<Coord>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        num_sides: Option<Count>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        snap_to: Option<SnapTo>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        show_angles: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        show_sides: Option<bool>,
    },
    Circle {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        center: Option<Coord>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        radius: Option<f64>,
    },
    Quadratic {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        coords: Option<[Coord; 3]>,
    },
    Sinusoid {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        coords: Option<[Coord; 2]>,
    },
    #[serde(rename_all = "camelCase")]
    Angle {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        coords: Option<[Coord; 3]>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        show_angles: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        allow_reflex_angles: Option<bool>,
    },
}

impl GradableGraph {
    /// An answer of type `t` carrying no geometry.
    pub fn minimal(t: GraphType) -> GradableGraph {
        match t {
            GraphType::Point => GradableGraph::Point { coords: None, num_points: None },
            GraphType::Segment => GradableGraph::Segment { coords: None, num_segments: None },
            GraphType::Linear => GradableGraph::Linear { coords: None },
            GraphType::LinearSystem => GradableGraph::LinearSystem { coords: None },
            GraphType::Ray => GradableGraph::Ray { coords: None },
            GraphType::Polygon => GradableGraph::Polygon {
                coords: None,
                num_sides: None,
                snap_to: None,
                show_angles: None,
                show_sides: None,
            },
            GraphType::Circle => GradableGraph::Circle { center: None, radius: None },
            GraphType::Quadratic => GradableGraph::Quadratic { coords: None },
            GraphType::Sinusoid => GradableGraph::Sinusoid { coords: None },
            GraphType::Angle => GradableGraph::Angle { coords: None, show_angles: None, allow_reflex_angles: None },
        }
    }

    pub fn graph_type(&self) -> GraphType {
        match self {
            GradableGraph::Point { .. } => GraphType::Point,
            GradableGraph::Segment { .. } => GraphType::Segment,
            GradableGraph::Linear { .. } => GraphType::Linear,
            GradableGraph::LinearSystem { .. } => GraphType::LinearSystem,
            GradableGraph::Ray { .. } => GraphType::Ray,
            GradableGraph::Polygon { .. } => GraphType::Polygon,
            GradableGraph::Circle { .. } => GraphType::Circle,
            GradableGraph::Quadratic { .. } => GraphType::Quadratic,
            GradableGraph::Sinusoid { .. } => GraphType::Sinusoid,
            GradableGraph::Angle { .. } => GraphType::Angle,
        }
    }
}

/// Derive the gradable answer for `target` from the current state.
///
/// When the state is of another type (a type switch still in flight) the
/// result is the minimal answer for `target` rather than an error.
pub fn to_gradable_answer(state: &InteractiveGraphState, target: GraphType) -> GradableGraph {
    if state.graph_type() != target {
        return GradableGraph::minimal(target);
    }
    match state.graph() {
        GraphVariant::Point { coords, unlimited } => GradableGraph::Point {
            coords: Some(coords.clone()),
            num_points: Some(if *unlimited { Count::UNLIMITED } else { Count::Fixed(coords.len()) }),
        },
        GraphVariant::Segment { coords } => GradableGraph::Segment {
            coords: Some(coords.clone()),
            num_segments: Some(coords.len()),
        },
        GraphVariant::Linear { coords } => GradableGraph::Linear { coords: Some(*coords) },
        GraphVariant::LinearSystem { coords } => GradableGraph::LinearSystem { coords: Some(coords.clone()) },
        GraphVariant::Ray { coords } => GradableGraph::Ray { coords: Some(*coords) },
        GraphVariant::Polygon { coords, show_angles, show_sides, snap_to, unlimited } => GradableGraph::Polygon {
            coords: Some(coords.clone()),
            num_sides: Some(if *unlimited { Count::UNLIMITED } else { Count::Fixed(coords.len()) }),
            snap_to: Some(*snap_to),
            show_angles: Some(*show_angles),
            show_sides: Some(*show_sides),
        },
        GraphVariant::Circle { center, radius_point } => GradableGraph::Circle {
            center: Some(*center),
            radius: Some(compute_radius(*center, *radius_point)),
        },
        GraphVariant::Quadratic { coords } => GradableGraph::Quadratic { coords: Some(*coords) },
        GraphVariant::Sinusoid { coords } => GradableGraph::Sinusoid { coords: Some(*coords) },
        GraphVariant::Angle { coords, show_angles, allow_reflex_angles, .. } => GradableGraph::Angle {
            coords: Some(*coords),
            show_angles: Some(*show_angles),
            allow_reflex_angles: Some(*allow_reflex_angles),
        },
    }
}
