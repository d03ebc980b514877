use serde::{Deserialize, Serialize};

use crate::model::{Coord, GraphRange, GraphType, SnapStep, SnapTo};

/// Geometry for one graph type. Only the reducer swaps these out, and it
/// always rebuilds the same variant; changing type needs a reinitialize.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum GraphVariant {
    Point {
        coords: Vec<Coord>,
        /// Points may be added and removed.
        unlimited: bool,
    },
    Segment {
        coords: Vec<[Coord; 2]>,
    },
    Linear {
        coords: [Coord; 2],
    },
    LinearSystem {
        coords: Vec<[Coord; 2]>,
    },
    Ray {
        coords: [Coord; 2],
    },
    #[serde(rename_all = "camelCase")]
    Polygon {
        coords: Vec<Coord>,
        show_angles: bool,
        show_sides: bool,
        snap_to: SnapTo,
        unlimited: bool,
    },
    /// Radius is implied by the draggable point on the rim.
    #[serde(rename_all = "camelCase")]
    Circle {
        center: Coord,
        radius_point: Coord,
    },
    Quadratic {
        coords: [Coord; 3],
    },
    Sinusoid {
        coords: [Coord; 2],
    },
    /// `coords` is `[arm, vertex, arm]`; angles are radians.
    #[serde(rename_all = "camelCase")]
    Angle {
        coords: [Coord; 3],
        show_angles: bool,
        allow_reflex_angles: bool,
        angle_offset: f64,
        snap_angle: f64,
    },
}

impl GraphVariant {
    pub fn graph_type(&self) -> GraphType {
        match self {
            GraphVariant::Point { .. } => GraphType::Point,
            GraphVariant::Segment { .. } => GraphType::Segment,
            GraphVariant::Linear { .. } => GraphType::Linear,
            GraphVariant::LinearSystem { .. } => GraphType::LinearSystem,
            GraphVariant::Ray { .. } => GraphType::Ray,
            GraphVariant::Polygon { .. } => GraphType::Polygon,
            GraphVariant::Circle { .. } => GraphType::Circle,
            GraphVariant::Quadratic { .. } => GraphType::Quadratic,
            GraphVariant::Sinusoid { .. } => GraphType::Sinusoid,
            GraphVariant::Angle { .. } => GraphType::Angle,
        }
    }

    /// Every draggable point, in the order `MOVE_POINT` indexes them.
    pub fn points(&self) -> Vec<Coord> {
        match self {
            GraphVariant::Point { coords, .. } | GraphVariant::Polygon { coords, .. } => coords.clone(),
            GraphVariant::Segment { coords } | GraphVariant::LinearSystem { coords } => {
                coords.iter().flat_map(|pair| pair.iter().copied()).collect()
            }
            GraphVariant::Linear { coords } | GraphVariant::Ray { coords } | GraphVariant::Sinusoid { coords } => {
                coords.to_vec()
            }
            GraphVariant::Circle { center, radius_point } => vec![*center, *radius_point],
            GraphVariant::Quadratic { coords } | GraphVariant::Angle { coords, .. } => coords.to_vec(),
        }
    }
}

/// The complete state of one interactive graph widget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveGraphState {
    pub has_been_interacted_with: bool,
    pub range: GraphRange,
    pub snap_step: SnapStep,
    #[serde(flatten)]
    graph: GraphVariant,
}

impl InteractiveGraphState {
    pub fn new(graph: GraphVariant, range: GraphRange, snap_step: SnapStep) -> Self {
        InteractiveGraphState { has_been_interacted_with: false, range, snap_step, graph }
    }

    pub fn graph_type(&self) -> GraphType { self.graph.graph_type() }

    pub fn graph(&self) -> &GraphVariant { &self.graph }

    /// Replace the geometry with another value of the same variant. A value
    /// of a different variant is refused and `false` is returned.
    pub(crate) fn replace_graph(&mut self, graph: GraphVariant) -> bool {
        if graph.graph_type() != self.graph.graph_type() {
            return false;
        }
        self.graph = graph;
        true
    }

    /// Radius of a circle graph, `None` for every other type.
    pub fn radius(&self) -> Option<f64> {
        match &self.graph {
            GraphVariant::Circle { center, radius_point } => {
                Some(crate::geometry::math::compute_radius(*center, *radius_point))
            }
            _ => None,
        }
    }
}
