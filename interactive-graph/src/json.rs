//! The JSON boundary between the host and the typed core.
//!
//! Type tags are checked before serde sees a document so an unrecognized
//! graph type surfaces as [`InitError::UnknownGraphType`] instead of a
//! generic decode error.

use serde_json::Value;

use crate::action::Action;
use crate::error::{ActionError, InitError};
use crate::gradable::GradableGraph;
use crate::model::GraphType;
use crate::props::GraphProps;
use crate::state::InteractiveGraphState;

const ACTION_TAGS: [&str; 12] = [
    "MOVE_POINT",
    "MOVE_CONTROL_POINT",
    "MOVE_LINE",
    "MOVE_ALL",
    "MOVE_CENTER",
    "MOVE_RADIUS_POINT",
    "SET_RADIUS",
    "ADD_POINT",
    "REMOVE_POINT",
    "CHANGE_SNAP_STEP",
    "CHANGE_RANGE",
    "REINITIALIZE",
];

/// Read the `type` tag of a graph description.
pub fn graph_type_of(graph: &Value) -> Result<GraphType, InitError> {
    let tag = graph.get("type").and_then(Value::as_str).ok_or(InitError::MissingGraphType)?;
    GraphType::from_tag(tag).ok_or_else(|| InitError::UnknownGraphType { tag: tag.to_string() })
}

pub fn props_from_value(v: Value) -> Result<GraphProps, InitError> {
    let graph = v.get("graph").ok_or(InitError::MissingGraphType)?;
    graph_type_of(graph)?;
    let props: GraphProps = serde_json::from_value(v)?;
    props.validate()?;
    Ok(props)
}

pub fn props_from_str(s: &str) -> Result<GraphProps, InitError> {
    let v: Value = serde_json::from_str(s)?;
    props_from_value(v)
}

pub fn action_from_value(v: Value) -> Result<Action, ActionError> {
    let tag = v.get("type").and_then(Value::as_str).ok_or(ActionError::MissingActionType)?;
    if !ACTION_TAGS.contains(&tag) {
        return Err(ActionError::UnknownAction { tag: tag.to_string() });
    }
    if tag == "REINITIALIZE" {
        let props = v.get("props").cloned().ok_or_else(|| ActionError::Malformed {
            action: tag.to_string(),
            reason: "missing `props`".to_string(),
        })?;
        return Ok(Action::Reinitialize { props: Box::new(props_from_value(props)?) });
    }
    let tag = tag.to_string();
    serde_json::from_value(v).map_err(|e| ActionError::Malformed { action: tag, reason: e.to_string() })
}

pub fn state_to_value(state: &InteractiveGraphState) -> Result<Value, serde_json::Error> {
    serde_json::to_value(state)
}

pub fn gradable_to_value(answer: &GradableGraph) -> Result<Value, serde_json::Error> {
    serde_json::to_value(answer)
}
