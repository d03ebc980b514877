//! State core for interactive coordinate-plane graphs in math exercises.
//!
//! A graph starts from [`GraphProps`] via [`initialize_graph_state`], changes
//! only through [`interactive_graph_reducer`] applied to [`Action`]s, and is
//! read back for scoring with [`to_gradable_answer`]. [`StatefulGraph`] wraps
//! the three for a host widget.

pub mod action;
pub mod error;
pub mod gradable;
pub mod initialize;
pub mod json;
pub mod model;
pub mod props;
pub mod reducer;
pub mod state;
pub mod widget;
pub mod geometry {
    pub mod math;
    pub mod snap;
    pub mod tolerance;
}
mod log;

pub use action::Action;
pub use error::{ActionError, InitError};
pub use gradable::{to_gradable_answer, GradableGraph};
pub use initialize::initialize_graph_state;
pub use model::{Coord, Count, GraphRange, GraphType, Interval, SnapStep, SnapTo};
pub use props::{GraphProps, GraphSpec};
pub use reducer::{interactive_graph_reducer, reduce};
pub use state::{GraphVariant, InteractiveGraphState};
pub use widget::{ChangeSnapshot, ReinitPolicy, StatefulGraph};
