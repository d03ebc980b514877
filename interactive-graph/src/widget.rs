//! A single mounted graph: owns the props and state, exposes the dispatch
//! and read surfaces, and turns prop updates into actions.

use std::fmt;

use serde::Serialize;

use crate::action::{self, Action};
use crate::error::InitError;
use crate::gradable::{to_gradable_answer, GradableGraph};
use crate::initialize::initialize_graph_state;
use crate::log;
use crate::model::{Count, SnapTo};
use crate::props::{GraphProps, GraphSpec};
use crate::reducer::interactive_graph_reducer;
use crate::state::InteractiveGraphState;

/// Which prop changes throw away the current state and rebuild it.
///
/// Range and snap step are never on this list: they are applied
/// incrementally so in-progress edits survive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReinitPolicy {
    pub graph_type: bool,
    pub num_segments: bool,
    pub num_sides: bool,
    pub snap_to: bool,
    pub show_angles: bool,
    pub show_sides: bool,
    pub num_points: bool,
}

impl Default for ReinitPolicy {
    fn default() -> Self {
        ReinitPolicy {
            graph_type: true,
            num_segments: true,
            num_sides: true,
            snap_to: true,
            show_angles: true,
            show_sides: true,
            num_points: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
struct StructuralKey {
    num_segments: Option<usize>,
    num_sides: Option<Count>,
    snap_to: Option<SnapTo>,
    show_angles: Option<bool>,
    show_sides: Option<bool>,
    num_points: Option<Count>,
}

fn structural_key(spec: &GraphSpec) -> StructuralKey {
    match spec {
        GraphSpec::Segment { num_segments, .. } => StructuralKey { num_segments: *num_segments, ..Default::default() },
        GraphSpec::Polygon { num_sides, show_angles, show_sides, snap_to, .. } => StructuralKey {
            num_sides: *num_sides,
            snap_to: *snap_to,
            show_angles: *show_angles,
            show_sides: *show_sides,
            ..Default::default()
        },
        GraphSpec::Point { num_points, .. } => StructuralKey { num_points: *num_points, ..Default::default() },
        _ => StructuralKey::default(),
    }
}

impl ReinitPolicy {
    pub fn requires_reinitialize(&self, old: &GraphSpec, new: &GraphSpec) -> bool {
        if old.graph_type() != new.graph_type() {
            return self.graph_type;
        }
        let (a, b) = (structural_key(old), structural_key(new));
        (self.num_segments && a.num_segments != b.num_segments)
            || (self.num_sides && a.num_sides != b.num_sides)
            || (self.snap_to && a.snap_to != b.snap_to)
            || (self.show_angles && a.show_angles != b.show_angles)
            || (self.show_sides && a.show_sides != b.show_sides)
            || (self.num_points && a.num_points != b.num_points)
    }
}

/// What `on_change` receives: the whole state, plus the derived radius for
/// circle graphs.
#[derive(Clone, Debug, Serialize)]
pub struct ChangeSnapshot<'a> {
    #[serde(flatten)]
    pub state: &'a InteractiveGraphState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl<'a> ChangeSnapshot<'a> {
    pub fn of(state: &'a InteractiveGraphState) -> Self {
        ChangeSnapshot { state, radius: state.radius() }
    }
}

type OnChange = Box<dyn FnMut(&ChangeSnapshot<'_>)>;

pub struct StatefulGraph {
    props: GraphProps,
    state: InteractiveGraphState,
    policy: ReinitPolicy,
    on_change: Option<OnChange>,
}

impl fmt::Debug for StatefulGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatefulGraph")
            .field("props", &self.props)
            .field("state", &self.state)
            .field("policy", &self.policy)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl StatefulGraph {
    pub fn new(props: GraphProps) -> Result<Self, InitError> {
        let state = initialize_graph_state(&props)?;
        Ok(StatefulGraph { props, state, policy: ReinitPolicy::default(), on_change: None })
    }

    pub fn with_policy(mut self, policy: ReinitPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn set_on_change(&mut self, f: impl FnMut(&ChangeSnapshot<'_>) + 'static) {
        self.on_change = Some(Box::new(f));
    }

    pub fn clear_on_change(&mut self) { self.on_change = None; }

    pub fn state(&self) -> &InteractiveGraphState { &self.state }

    pub fn props(&self) -> &GraphProps { &self.props }

    pub fn policy(&self) -> ReinitPolicy { self.policy }

    pub fn has_been_interacted_with(&self) -> bool { self.state.has_been_interacted_with }

    /// Apply one action. Returns whether the state changed; `on_change`
    /// fires exactly when it did.
    pub fn dispatch(&mut self, action: &Action) -> bool {
        let next = interactive_graph_reducer(self.state.clone(), action);
        if next == self.state {
            return false;
        }
        self.state = next;
        if let Some(cb) = self.on_change.as_mut() {
            cb(&ChangeSnapshot::of(&self.state));
        }
        true
    }

    /// The current answer, shaped for the graph type the props describe.
    pub fn get_user_input(&self) -> GradableGraph {
        to_gradable_answer(&self.state, self.props.graph.graph_type())
    }

    /// Take new props from the host, dispatching (in order) a snap step
    /// change, a range change and a reinitialize as needed. Returns the
    /// actions that were dispatched.
    pub fn update_props(&mut self, props: GraphProps) -> Result<Vec<Action>, InitError> {
        props.validate()?;
        let mut actions = Vec::new();
        if props.snap_step != self.props.snap_step {
            actions.push(action::change_snap_step(props.snap_step));
        }
        if props.range != self.props.range {
            actions.push(action::change_range(props.range));
        }
        if self.policy.requires_reinitialize(&self.props.graph, &props.graph) {
            log::debug!(
                from = self.props.graph.graph_type().as_str(),
                to = props.graph.graph_type().as_str(),
                "props change requires reinitialize"
            );
            actions.push(action::reinitialize(props.clone()));
        }
        self.props = props;
        for a in &actions {
            self.dispatch(a);
        }
        Ok(actions)
    }
}
