use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::InitError;
use crate::model::{Coord, Count, GraphRange, GraphType, SnapStep, SnapTo};

/// The authored description of an interactive graph: its type plus any
/// type-specific configuration and (when editing an existing item) concrete
/// coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum GraphSpec {
    #[serde(rename_all = "camelCase")]
    Point {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        num_points: Option<Count>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        coords: Option<Vec<Coord>>,
        /// Legacy single-point position.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        coord: Option<Coord>,
    },
    #[serde(rename_all = "camelCase")]
    Segment {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        num_segments: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        coords: Option<Vec<[Coord; 2]>>,
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
        num_sides: Option<Count>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        show_angles: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        show_sides: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        snap_to: Option<SnapTo>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        coords: Option<Vec<Coord>>,
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
        #[serde(default, skip_serializing_if = "Option::is_none")]
        angle_offset_deg: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        snap_degrees: Option<f64>,
    },
}

impl GraphSpec {
    pub fn graph_type(&self) -> GraphType {
        match self {
            GraphSpec::Point { .. } => GraphType::Point,
            GraphSpec::Segment { .. } => GraphType::Segment,
            GraphSpec::Linear { .. } => GraphType::Linear,
            GraphSpec::LinearSystem { .. } => GraphType::LinearSystem,
            GraphSpec::Ray { .. } => GraphType::Ray,
            GraphSpec::Polygon { .. } => GraphType::Polygon,
            GraphSpec::Circle { .. } => GraphType::Circle,
            GraphSpec::Quadratic { .. } => GraphType::Quadratic,
            GraphSpec::Sinusoid { .. } => GraphType::Sinusoid,
            GraphSpec::Angle { .. } => GraphType::Angle,
        }
    }

    /// A spec of the given type with every optional field unset.
    pub fn bare(t: GraphType) -> GraphSpec {
        match t {
            GraphType::Point => GraphSpec::Point { num_points: None, coords: None, coord: None },
            GraphType::Segment => GraphSpec::Segment { num_segments: None, coords: None },
            GraphType::Linear => GraphSpec::Linear { coords: None },
            GraphType::LinearSystem => GraphSpec::LinearSystem { coords: None },
            GraphType::Ray => GraphSpec::Ray { coords: None },
            GraphType::Polygon => GraphSpec::Polygon {
                num_sides: None,
                show_angles: None,
                show_sides: None,
                snap_to: None,
                coords: None,
            },
            GraphType::Circle => GraphSpec::Circle { center: None, radius: None },
            GraphType::Quadratic => GraphSpec::Quadratic { coords: None },
            GraphType::Sinusoid => GraphSpec::Sinusoid { coords: None },
            GraphType::Angle => GraphSpec::Angle {
                coords: None,
                show_angles: None,
                allow_reflex_angles: None,
                angle_offset_deg: None,
                snap_degrees: None,
            },
        }
    }
}

/// Everything the host widget hands to the graph core.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphProps {
    pub graph: GraphSpec,
    #[serde(default)]
    pub range: GraphRange,
    /// Axis tick step.
    #[serde(default)]
    pub step: SnapStep,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_step: Option<SnapStep>,
    #[serde(default)]
    pub snap_step: SnapStep,
    #[serde(default = "default_box", rename = "box")]
    pub box_size: [f64; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markings: Option<String>,
    /// Decorative figures drawn by the presentation layer; opaque here.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locked_figures: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default)]
    pub show_protractor: bool,
    #[serde(default)]
    pub show_tooltips: bool,
}

fn default_box() -> [f64; 2] { [400.0, 400.0] }

/// Upper bound on `numPoints`, `numSegments` and `numSides`.
pub const MAX_ITEM_COUNT: usize = 1000;

impl GraphProps {
    /// Props for `graph` over the default -10..10 range with unit steps.
    pub fn new(graph: GraphSpec) -> Self {
        GraphProps {
            graph,
            range: GraphRange::default(),
            step: SnapStep::default(),
            grid_step: None,
            snap_step: SnapStep::default(),
            box_size: default_box(),
            markings: None,
            locked_figures: Vec::new(),
            labels: Vec::new(),
            show_protractor: false,
            show_tooltips: false,
        }
    }

    pub fn with_range(mut self, range: GraphRange) -> Self {
        self.range = range;
        self
    }

    pub fn with_snap_step(mut self, snap_step: SnapStep) -> Self {
        self.snap_step = snap_step;
        self
    }

    /// Check what serde cannot: a usable range and item counts small enough
    /// to lay out.
    pub fn validate(&self) -> Result<(), InitError> {
        if !self.range.is_valid() {
            return Err(InitError::InvalidRange { range: self.range });
        }
        let count = match &self.graph {
            GraphSpec::Point { num_points, .. } => num_points.and_then(|n| n.fixed()).map(|n| ("numPoints", n)),
            GraphSpec::Segment { num_segments, .. } => num_segments.map(|n| ("numSegments", n)),
            GraphSpec::Polygon { num_sides, .. } => num_sides.and_then(|n| n.fixed()).map(|n| ("numSides", n)),
            _ => None,
        };
        match count {
            Some((field, n)) if n > MAX_ITEM_COUNT => Err(InitError::InvalidProps {
                reason: format!("{field} is {n}, at most {MAX_ITEM_COUNT} is supported"),
            }),
            _ => Ok(()),
        }
    }
}
