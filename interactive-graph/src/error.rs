use crate::model::GraphRange;

/// Failures building graph state from external props.
///
/// These are programming errors on the host side: the reducer itself never
/// fails, it turns bad input into a no-op.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InitError {
    #[error("unknown graph type: {tag}")]
    UnknownGraphType { tag: String },

    #[error("graph props are missing a `type` tag")]
    MissingGraphType,

    #[error("invalid range {range:?}: each axis needs finite bounds with min < max")]
    InvalidRange { range: GraphRange },

    #[error("invalid props: {reason}")]
    InvalidProps { reason: String },
}

impl From<serde_json::Error> for InitError {
    fn from(e: serde_json::Error) -> Self {
        InitError::InvalidProps { reason: e.to_string() }
    }
}

/// Failures decoding an action handed over by the host.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ActionError {
    #[error("unknown action type: {tag}")]
    UnknownAction { tag: String },

    #[error("action is missing a `type` tag")]
    MissingActionType,

    #[error("malformed {action} action: {reason}")]
    Malformed { action: String, reason: String },

    #[error(transparent)]
    Props(#[from] InitError),
}
