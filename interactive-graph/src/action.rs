use serde::{Deserialize, Serialize};

use crate::model::{Coord, GraphRange, SnapStep};
use crate::props::GraphProps;

/// Every way the graph state can change. Actions are plain data and never
/// refer back to live state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Drag the point at `index` (flat index over all draggable points).
    MovePoint { index: usize, destination: Coord },
    /// Drag one endpoint of the line/segment at `item_index`.
    #[serde(rename_all = "camelCase")]
    MoveControlPoint { point_index: usize, destination: Coord, item_index: usize },
    /// Translate a whole line/segment.
    #[serde(rename_all = "camelCase")]
    MoveLine { item_index: usize, delta: Coord },
    /// Translate the whole figure (polygon).
    MoveAll { delta: Coord },
    MoveCenter { destination: Coord },
    MoveRadiusPoint { destination: Coord },
    SetRadius { radius: f64 },
    AddPoint { location: Coord },
    RemovePoint { index: usize },
    #[serde(rename_all = "camelCase")]
    ChangeSnapStep { snap_step: SnapStep },
    ChangeRange { range: GraphRange },
    Reinitialize { props: Box<GraphProps> },
}

impl Action {
    /// Wire name of the action, e.g. `"MOVE_POINT"`.
    pub fn name(&self) -> &'static str {
        match self {
            Action::MovePoint { .. } => "MOVE_POINT",
            Action::MoveControlPoint { .. } => "MOVE_CONTROL_POINT",
            Action::MoveLine { .. } => "MOVE_LINE",
            Action::MoveAll { .. } => "MOVE_ALL",
            Action::MoveCenter { .. } => "MOVE_CENTER",
            Action::MoveRadiusPoint { .. } => "MOVE_RADIUS_POINT",
            Action::SetRadius { .. } => "SET_RADIUS",
            Action::AddPoint { .. } => "ADD_POINT",
            Action::RemovePoint { .. } => "REMOVE_POINT",
            Action::ChangeSnapStep { .. } => "CHANGE_SNAP_STEP",
            Action::ChangeRange { .. } => "CHANGE_RANGE",
            Action::Reinitialize { .. } => "REINITIALIZE",
        }
    }
}

pub fn move_point(index: usize, destination: Coord) -> Action {
    Action::MovePoint { index, destination }
}

pub fn move_control_point(point_index: usize, destination: Coord, item_index: usize) -> Action {
    Action::MoveControlPoint { point_index, destination, item_index }
}

pub fn move_line(item_index: usize, delta: Coord) -> Action {
    Action::MoveLine { item_index, delta }
}

pub fn move_all(delta: Coord) -> Action { Action::MoveAll { delta } }

pub fn move_center(destination: Coord) -> Action { Action::MoveCenter { destination } }

pub fn move_radius_point(destination: Coord) -> Action { Action::MoveRadiusPoint { destination } }

pub fn set_radius(radius: f64) -> Action { Action::SetRadius { radius } }

pub fn add_point(location: Coord) -> Action { Action::AddPoint { location } }

pub fn remove_point(index: usize) -> Action { Action::RemovePoint { index } }

pub fn change_snap_step(snap_step: SnapStep) -> Action { Action::ChangeSnapStep { snap_step } }

pub fn change_range(range: GraphRange) -> Action { Action::ChangeRange { range } }

pub fn reinitialize(props: GraphProps) -> Action { Action::Reinitialize { props: Box::new(props) } }
