use interactive_graph::json::{action_from_value, props_from_str, props_from_value, state_to_value};
use interactive_graph::{
    initialize_graph_state, Action, ActionError, Coord, Count, GraphRange, GraphSpec, GraphType, InitError, SnapStep,
    SnapTo,
};
use serde_json::json;

#[test]
fn host_props_decode() {
    let props = props_from_value(json!({
        "graph": {"type": "polygon", "numSides": "unlimited", "snapTo": "angles", "showSides": true},
        "range": [[-5, 5], [0, 12]],
        "step": [1, 2],
        "snapStep": [0.5, 0.5],
        "gridStep": [1, 1],
        "box": [300, 300],
        "markings": "graph",
        "lockedFigures": [{"type": "line", "points": [[0, 0], [1, 1]]}],
        "showProtractor": false
    }))
    .unwrap();
    assert_eq!(props.range, GraphRange::from_bounds(-5.0, 5.0, 0.0, 12.0));
    assert_eq!(props.snap_step, SnapStep::new(0.5, 0.5));
    assert_eq!(props.box_size, [300.0, 300.0]);
    assert_eq!(props.locked_figures.len(), 1);
    match props.graph {
        GraphSpec::Polygon { num_sides, snap_to, show_sides, .. } => {
            assert_eq!(num_sides, Some(Count::UNLIMITED));
            assert_eq!(snap_to, Some(SnapTo::Angles));
            assert_eq!(show_sides, Some(true));
        }
        other => panic!("decoded wrong type {:?}", other.graph_type()),
    }
}

#[test]
fn authored_coordinates_are_used_verbatim() {
    let props = props_from_str(
        r#"{"graph": {"type": "linear-system", "coords": [[[0.3, 0.7], [1.1, 2.9]], [[-1, -1], [4, 4.25]]]}}"#,
    )
    .unwrap();
    let state = initialize_graph_state(&props).unwrap();
    assert_eq!(state.graph_type(), GraphType::LinearSystem);
    assert_eq!(state.graph().points()[0], Coord::new(0.3, 0.7));
    assert_eq!(state.graph().points()[3], Coord::new(4.0, 4.25));
}

#[test]
fn unknown_graph_type_is_a_typed_error() {
    let err = props_from_value(json!({"graph": {"type": "hyperbola"}})).unwrap_err();
    assert_eq!(err, InitError::UnknownGraphType { tag: "hyperbola".to_string() });
    let err = props_from_value(json!({"graph": {"coords": []}})).unwrap_err();
    assert_eq!(err, InitError::MissingGraphType);
}

#[test]
fn inverted_range_is_rejected() {
    let err = props_from_value(json!({"graph": {"type": "point"}, "range": [[10, -10], [-10, 10]]})).unwrap_err();
    assert!(matches!(err, InitError::InvalidRange { .. }));
}

#[test]
fn malformed_fields_are_reported() {
    let err = props_from_value(json!({"graph": {"type": "circle", "center": "middle"}})).unwrap_err();
    assert!(matches!(err, InitError::InvalidProps { .. }), "{err}");
}

#[test]
fn actions_decode_from_wire_names() {
    let a = action_from_value(json!({"type": "MOVE_POINT", "index": 0, "destination": [3.4, 7.8]})).unwrap();
    assert_eq!(a, Action::MovePoint { index: 0, destination: Coord::new(3.4, 7.8) });

    let a = action_from_value(json!({
        "type": "MOVE_CONTROL_POINT", "pointIndex": 1, "itemIndex": 0, "destination": [1, 2]
    }))
    .unwrap();
    assert_eq!(a.name(), "MOVE_CONTROL_POINT");

    let a = action_from_value(json!({"type": "CHANGE_SNAP_STEP", "snapStep": [2, 2]})).unwrap();
    assert_eq!(a, Action::ChangeSnapStep { snap_step: SnapStep::new(2.0, 2.0) });
}

#[test]
fn reinitialize_action_validates_embedded_props() {
    let err = action_from_value(json!({"type": "REINITIALIZE", "props": {"graph": {"type": "spiral"}}})).unwrap_err();
    assert_eq!(err, ActionError::Props(InitError::UnknownGraphType { tag: "spiral".to_string() }));

    let ok = action_from_value(json!({"type": "REINITIALIZE", "props": {"graph": {"type": "ray"}}})).unwrap();
    assert!(matches!(ok, Action::Reinitialize { .. }));
}

#[test]
fn unknown_and_malformed_actions() {
    assert_eq!(
        action_from_value(json!({"type": "EXPLODE"})).unwrap_err(),
        ActionError::UnknownAction { tag: "EXPLODE".to_string() }
    );
    assert_eq!(action_from_value(json!({"index": 1})).unwrap_err(), ActionError::MissingActionType);
    assert!(matches!(
        action_from_value(json!({"type": "MOVE_POINT", "index": -1, "destination": [0, 0]})),
        Err(ActionError::Malformed { .. })
    ));
}

#[test]
fn state_json_uses_host_field_names() {
    let props = props_from_value(json!({"graph": {"type": "angle", "angleOffsetDeg": 90, "snapDegrees": 15}})).unwrap();
    let state = initialize_graph_state(&props).unwrap();
    let v = state_to_value(&state).unwrap();
    assert_eq!(v["type"], "angle");
    assert_eq!(v["hasBeenInteractedWith"], false);
    assert_eq!(v["range"], json!([[-10.0, 10.0], [-10.0, 10.0]]));
    let offset = v["angleOffset"].as_f64().unwrap();
    assert!((offset - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn oversized_counts_are_rejected() {
    let err = props_from_value(json!({"graph": {"type": "point", "numPoints": 1_000_000}})).unwrap_err();
    assert!(matches!(err, InitError::InvalidProps { ref reason } if reason.contains("numPoints")), "{err}");
    assert!(props_from_value(json!({"graph": {"type": "segment", "numSegments": 5000}})).is_err());
    assert!(props_from_value(json!({"graph": {"type": "polygon", "numSides": 1001}})).is_err());
    assert!(props_from_value(json!({"graph": {"type": "polygon", "numSides": "unlimited"}})).is_ok());
}
