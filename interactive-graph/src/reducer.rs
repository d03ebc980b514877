//! The state transition function. `interactive_graph_reducer` is the only
//! code that produces a changed [`InteractiveGraphState`].
//!
//! Every (variant, action) pair is handled: combinations that make no sense
//! for a graph type, stale indices and non-finite input all return the state
//! unchanged. User-supplied coordinates are snapped and then clamped into the
//! current range. Configuration actions replace their field and leave the
//! geometry alone.

use crate::action::Action;
use crate::geometry::math::{any_x_equal, coords_equal};
use crate::geometry::snap::{bound_and_snap, bound_delta, snap_coord};
use crate::initialize::initialize_graph_state;
use crate::log;
use crate::model::{Coord, GraphRange, SnapStep, SnapTo};
use crate::state::{GraphVariant, InteractiveGraphState};

pub fn interactive_graph_reducer(state: InteractiveGraphState, action: &Action) -> InteractiveGraphState {
    match action {
        Action::MovePoint { index, destination } => do_move_point(state, *index, *destination),
        Action::MoveControlPoint { point_index, destination, item_index } => {
            do_move_control_point(state, *point_index, *destination, *item_index)
        }
        Action::MoveLine { item_index, delta } => do_move_line(state, *item_index, *delta),
        Action::MoveAll { delta } => do_move_all(state, *delta),
        Action::MoveCenter { destination } => do_move_center(state, *destination),
        Action::MoveRadiusPoint { destination } => do_move_radius_point(state, *destination),
        Action::SetRadius { radius } => do_set_radius(state, *radius),
        Action::AddPoint { location } => do_add_point(state, *location),
        Action::RemovePoint { index } => do_remove_point(state, *index),
        Action::ChangeSnapStep { snap_step } => do_change_snap_step(state, *snap_step),
        Action::ChangeRange { range } => do_change_range(state, *range),
        Action::Reinitialize { props } => match initialize_graph_state(props) {
            Ok(fresh) => fresh,
            Err(e) => {
                log::warn!(error = %e, "reinitialize ignored");
                state
            }
        },
    }
}

/// Alias kept short for callers that fold over action lists.
pub fn reduce(state: InteractiveGraphState, action: &Action) -> InteractiveGraphState {
    interactive_graph_reducer(state, action)
}

/// Install new geometry and mark the graph as touched.
fn commit(mut state: InteractiveGraphState, graph: GraphVariant) -> InteractiveGraphState {
    if state.replace_graph(graph) {
        state.has_been_interacted_with = true;
    }
    state
}

fn rejected(state: InteractiveGraphState, action: &'static str, why: &'static str) -> InteractiveGraphState {
    log::debug!(action = action, why = why, graph_type = state.graph_type().as_str(), "action ignored");
    state
}

/// Polygons only snap to the grid in `grid` mode.
fn effective_snap(state: &InteractiveGraphState) -> SnapStep {
    match state.graph() {
        GraphVariant::Polygon { snap_to, .. } if *snap_to != SnapTo::Grid => SnapStep::none(),
        _ => state.snap_step,
    }
}

fn do_move_point(state: InteractiveGraphState, index: usize, destination: Coord) -> InteractiveGraphState {
    if !destination.is_finite() {
        return rejected(state, "MOVE_POINT", "non-finite destination");
    }
    let p = bound_and_snap(destination, effective_snap(&state), &state.range);
    let next = match state.graph().clone() {
        GraphVariant::Point { mut coords, unlimited } => {
            match coords.get_mut(index) {
                Some(slot) => *slot = p,
                None => return rejected(state, "MOVE_POINT", "index out of bounds"),
            }
            GraphVariant::Point { coords, unlimited }
        }
        GraphVariant::Polygon { mut coords, show_angles, show_sides, snap_to, unlimited } => {
            match coords.get_mut(index) {
                Some(slot) => *slot = p,
                None => return rejected(state, "MOVE_POINT", "index out of bounds"),
            }
            GraphVariant::Polygon { coords, show_angles, show_sides, snap_to, unlimited }
        }
        // flat indexing: point `index` lives in item `index / 2`
        GraphVariant::Segment { .. }
        | GraphVariant::LinearSystem { .. }
        | GraphVariant::Linear { .. }
        | GraphVariant::Ray { .. } => {
            return do_move_control_point(state, index % 2, destination, index / 2);
        }
        // only the addressed point moves; MOVE_CENTER and MOVE_RADIUS_POINT
        // are the radius-preserving drags
        GraphVariant::Circle { center, radius_point } => match index {
            0 => GraphVariant::Circle { center: p, radius_point },
            1 => GraphVariant::Circle { center, radius_point: p },
            _ => return rejected(state, "MOVE_POINT", "index out of bounds"),
        },
        GraphVariant::Quadratic { mut coords } => {
            if index >= coords.len() {
                return rejected(state, "MOVE_POINT", "index out of bounds");
            }
            coords[index] = p;
            if any_x_equal(&coords) {
                return rejected(state, "MOVE_POINT", "quadratic points need distinct x");
            }
            GraphVariant::Quadratic { coords }
        }
        GraphVariant::Sinusoid { mut coords } => {
            if index >= coords.len() {
                return rejected(state, "MOVE_POINT", "index out of bounds");
            }
            coords[index] = p;
            if any_x_equal(&coords) {
                return rejected(state, "MOVE_POINT", "sinusoid points need distinct x");
            }
            GraphVariant::Sinusoid { coords }
        }
        GraphVariant::Angle { mut coords, show_angles, allow_reflex_angles, angle_offset, snap_angle } => {
            if index >= coords.len() {
                return rejected(state, "MOVE_POINT", "index out of bounds");
            }
            coords[index] = p;
            // an arm lying on the vertex has no direction
            if coords_equal(coords[0], coords[1]) || coords_equal(coords[2], coords[1]) {
                return rejected(state, "MOVE_POINT", "angle arm collapsed onto vertex");
            }
            GraphVariant::Angle { coords, show_angles, allow_reflex_angles, angle_offset, snap_angle }
        }
    };
    commit(state, next)
}

fn do_move_control_point(
    state: InteractiveGraphState,
    point_index: usize,
    destination: Coord,
    item_index: usize,
) -> InteractiveGraphState {
    if !destination.is_finite() {
        return rejected(state, "MOVE_CONTROL_POINT", "non-finite destination");
    }
    if point_index > 1 {
        return rejected(state, "MOVE_CONTROL_POINT", "point index out of bounds");
    }
    let p = bound_and_snap(destination, state.snap_step, &state.range);
    let next = match state.graph().clone() {
        GraphVariant::Segment { mut coords } => {
            // zero-length segments are allowed
            match coords.get_mut(item_index) {
                Some(seg) => seg[point_index] = p,
                None => return rejected(state, "MOVE_CONTROL_POINT", "item index out of bounds"),
            }
            GraphVariant::Segment { coords }
        }
        GraphVariant::LinearSystem { mut coords } => {
            match coords.get_mut(item_index) {
                Some(line) => {
                    if !move_line_end(line, point_index, p) {
                        return rejected(state, "MOVE_CONTROL_POINT", "line would collapse to a point");
                    }
                }
                None => return rejected(state, "MOVE_CONTROL_POINT", "item index out of bounds"),
            }
            GraphVariant::LinearSystem { coords }
        }
        GraphVariant::Linear { mut coords } if item_index == 0 => {
            if !move_line_end(&mut coords, point_index, p) {
                return rejected(state, "MOVE_CONTROL_POINT", "line would collapse to a point");
            }
            GraphVariant::Linear { coords }
        }
        GraphVariant::Ray { mut coords } if item_index == 0 => {
            if !move_line_end(&mut coords, point_index, p) {
                return rejected(state, "MOVE_CONTROL_POINT", "ray would collapse to a point");
            }
            GraphVariant::Ray { coords }
        }
        _ => return rejected(state, "MOVE_CONTROL_POINT", "not a line-based graph"),
    };
    commit(state, next)
}

/// Lines need two distinct points to be defined at all.
fn move_line_end(line: &mut [Coord; 2], point_index: usize, p: Coord) -> bool {
    if coords_equal(line[1 - point_index], p) {
        return false;
    }
    line[point_index] = p;
    true
}

fn translate_line(line: [Coord; 2], delta: Coord, step: SnapStep, range: &GraphRange) -> [Coord; 2] {
    let d = bound_delta(&line, snap_coord(delta, step), range);
    [line[0].add(d), line[1].add(d)]
}

fn do_move_line(state: InteractiveGraphState, item_index: usize, delta: Coord) -> InteractiveGraphState {
    if !delta.is_finite() {
        return rejected(state, "MOVE_LINE", "non-finite delta");
    }
    let (step, range) = (state.snap_step, state.range);
    let next = match state.graph().clone() {
        GraphVariant::Segment { mut coords } => {
            match coords.get_mut(item_index) {
                Some(seg) => *seg = translate_line(*seg, delta, step, &range),
                None => return rejected(state, "MOVE_LINE", "item index out of bounds"),
            }
            GraphVariant::Segment { coords }
        }
        GraphVariant::LinearSystem { mut coords } => {
            match coords.get_mut(item_index) {
                Some(line) => *line = translate_line(*line, delta, step, &range),
                None => return rejected(state, "MOVE_LINE", "item index out of bounds"),
            }
            GraphVariant::LinearSystem { coords }
        }
        GraphVariant::Linear { coords } if item_index == 0 => {
            GraphVariant::Linear { coords: translate_line(coords, delta, step, &range) }
        }
        GraphVariant::Ray { coords } if item_index == 0 => {
            GraphVariant::Ray { coords: translate_line(coords, delta, step, &range) }
        }
        _ => return rejected(state, "MOVE_LINE", "not a line-based graph"),
    };
    commit(state, next)
}

fn do_move_all(state: InteractiveGraphState, delta: Coord) -> InteractiveGraphState {
    if !delta.is_finite() {
        return rejected(state, "MOVE_ALL", "non-finite delta");
    }
    let step = effective_snap(&state);
    let next = match state.graph().clone() {
        GraphVariant::Polygon { coords, show_angles, show_sides, snap_to, unlimited } => {
            let d = bound_delta(&coords, snap_coord(delta, step), &state.range);
            let coords = coords.into_iter().map(|c| c.add(d)).collect();
            GraphVariant::Polygon { coords, show_angles, show_sides, snap_to, unlimited }
        }
        _ => return rejected(state, "MOVE_ALL", "not a polygon"),
    };
    commit(state, next)
}

fn do_move_center(state: InteractiveGraphState, destination: Coord) -> InteractiveGraphState {
    if !destination.is_finite() {
        return rejected(state, "MOVE_CENTER", "non-finite destination");
    }
    let next = match state.graph() {
        GraphVariant::Circle { center, radius_point } => {
            let new_center = bound_and_snap(destination, state.snap_step, &state.range);
            // the rim point rides along so the radius is preserved
            let moved = new_center.sub(*center);
            GraphVariant::Circle { center: new_center, radius_point: radius_point.add(moved) }
        }
        _ => return rejected(state, "MOVE_CENTER", "not a circle"),
    };
    commit(state, next)
}

fn do_move_radius_point(state: InteractiveGraphState, destination: Coord) -> InteractiveGraphState {
    if !destination.is_finite() {
        return rejected(state, "MOVE_RADIUS_POINT", "non-finite destination");
    }
    let next = match state.graph() {
        GraphVariant::Circle { center, .. } => {
            let p = bound_and_snap(destination, state.snap_step, &state.range);
            GraphVariant::Circle { center: *center, radius_point: Coord::new(p.x, center.y) }
        }
        _ => return rejected(state, "MOVE_RADIUS_POINT", "not a circle"),
    };
    commit(state, next)
}

fn do_set_radius(state: InteractiveGraphState, radius: f64) -> InteractiveGraphState {
    if !radius.is_finite() {
        return rejected(state, "SET_RADIUS", "non-finite radius");
    }
    let next = match state.graph() {
        GraphVariant::Circle { center, .. } => {
            let rim = Coord::new(center.x + radius.abs(), center.y);
            let p = bound_and_snap(rim, state.snap_step, &state.range);
            GraphVariant::Circle { center: *center, radius_point: Coord::new(p.x, center.y) }
        }
        _ => return rejected(state, "SET_RADIUS", "not a circle"),
    };
    commit(state, next)
}

fn do_add_point(state: InteractiveGraphState, location: Coord) -> InteractiveGraphState {
    if !location.is_finite() {
        return rejected(state, "ADD_POINT", "non-finite location");
    }
    let p = bound_and_snap(location, effective_snap(&state), &state.range);
    let next = match state.graph().clone() {
        GraphVariant::Point { mut coords, unlimited: true } => {
            if coords.iter().any(|c| coords_equal(*c, p)) {
                return rejected(state, "ADD_POINT", "a point already sits there");
            }
            coords.push(p);
            GraphVariant::Point { coords, unlimited: true }
        }
        GraphVariant::Polygon { mut coords, show_angles, show_sides, snap_to, unlimited: true } => {
            if coords.iter().any(|c| coords_equal(*c, p)) {
                return rejected(state, "ADD_POINT", "a vertex already sits there");
            }
            coords.push(p);
            GraphVariant::Polygon { coords, show_angles, show_sides, snap_to, unlimited: true }
        }
        _ => return rejected(state, "ADD_POINT", "graph has a fixed point count"),
    };
    commit(state, next)
}

fn do_remove_point(state: InteractiveGraphState, index: usize) -> InteractiveGraphState {
    let next = match state.graph().clone() {
        GraphVariant::Point { mut coords, unlimited: true } if index < coords.len() => {
            coords.remove(index);
            GraphVariant::Point { coords, unlimited: true }
        }
        GraphVariant::Polygon { mut coords, show_angles, show_sides, snap_to, unlimited: true }
            if index < coords.len() =>
        {
            coords.remove(index);
            GraphVariant::Polygon { coords, show_angles, show_sides, snap_to, unlimited: true }
        }
        _ => return rejected(state, "REMOVE_POINT", "no removable point at index"),
    };
    commit(state, next)
}

// Configuration changes never re-snap or re-clamp existing points.

fn do_change_snap_step(mut state: InteractiveGraphState, snap_step: SnapStep) -> InteractiveGraphState {
    state.snap_step = snap_step;
    state
}

fn do_change_range(mut state: InteractiveGraphState, range: GraphRange) -> InteractiveGraphState {
    if !range.is_valid() {
        log::warn!(range = ?range, "CHANGE_RANGE ignored: invalid range");
        return state;
    }
    state.range = range;
    state
}
