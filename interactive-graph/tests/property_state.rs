use interactive_graph::action::*;
use interactive_graph::geometry::snap::{clamp_to_range, snap};
use interactive_graph::{
    initialize_graph_state, reduce, to_gradable_answer, Action, Coord, GraphProps, GraphRange, GraphSpec, GraphType,
    SnapStep,
};
use proptest::prelude::*;

fn graph_type_strategy() -> impl Strategy<Value = GraphType> {
    (0usize..GraphType::ALL.len()).prop_map(|i| GraphType::ALL[i])
}

fn coord_strategy() -> impl Strategy<Value = Coord> {
    (-30.0f64..30.0, -30.0f64..30.0).prop_map(|(x, y)| Coord::new(x, y))
}

fn range_strategy() -> impl Strategy<Value = GraphRange> {
    (-20.0f64..0.0, 1.0f64..20.0, -20.0f64..0.0, 1.0f64..20.0)
        .prop_map(|(xmin, xlen, ymin, ylen)| GraphRange::from_bounds(xmin, xmin + xlen, ymin, ymin + ylen))
}

fn geometry_action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0usize..8, coord_strategy()).prop_map(|(i, c)| move_point(i, c)),
        (0usize..3, coord_strategy(), 0usize..3).prop_map(|(p, c, i)| move_control_point(p, c, i)),
        (0usize..3, coord_strategy()).prop_map(|(i, d)| move_line(i, d)),
        coord_strategy().prop_map(move_all),
        coord_strategy().prop_map(move_center),
        coord_strategy().prop_map(move_radius_point),
        (-15.0f64..15.0).prop_map(set_radius),
        coord_strategy().prop_map(add_point),
        (0usize..8).prop_map(remove_point),
    ]
}

fn config_action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0.0f64..3.0, 0.0f64..3.0).prop_map(|(x, y)| change_snap_step(SnapStep::new(x, y))),
        range_strategy().prop_map(change_range),
        graph_type_strategy().prop_map(|t| reinitialize(GraphProps::new(GraphSpec::bare(t)))),
    ]
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![4 => geometry_action_strategy(), 1 => config_action_strategy()]
}

proptest! {
    #[test]
    fn snap_lands_on_multiples(v in -1000.0f64..1000.0, step in 0.01f64..10.0) {
        let s = snap(v, step);
        let k = s / step;
        prop_assert!((k - k.round()).abs() < 1e-6, "{s} is not a multiple of {step}");
        prop_assert!((s - v).abs() <= step / 2.0 + 1e-9);
        prop_assert_eq!(snap(v, 0.0), v);
    }

    #[test]
    fn clamp_lands_in_range(c in coord_strategy(), range in range_strategy()) {
        let clamped = clamp_to_range(c, &range);
        prop_assert!(range.contains(clamped));
        if range.contains(c) {
            prop_assert_eq!(clamped, c);
        }
    }

    #[test]
    fn random_action_sequences_keep_the_type_tag(
        t in graph_type_strategy(),
        actions in proptest::collection::vec(action_strategy(), 0..40),
    ) {
        let mut state = initialize_graph_state(&GraphProps::new(GraphSpec::bare(t))).unwrap();
        let mut expected_type = t;
        for a in &actions {
            if let Action::Reinitialize { props } = a {
                expected_type = props.graph.graph_type();
            }
            state = reduce(state, a);
            prop_assert_eq!(state.graph_type(), expected_type);
            prop_assert!(state.graph().points().iter().all(|p| p.is_finite()));
        }
        let a = to_gradable_answer(&state, expected_type);
        let b = to_gradable_answer(&state, expected_type);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn move_point_touches_only_its_target(t in graph_type_strategy(), moves in proptest::collection::vec((0usize..6, coord_strategy()), 1..20)) {
        let mut state = initialize_graph_state(&GraphProps::new(GraphSpec::bare(t))).unwrap();
        for (i, c) in moves {
            let before = state.graph().points();
            state = reduce(state, &move_point(i, c));
            let after = state.graph().points();
            prop_assert_eq!(after.len(), before.len());
            for (j, (p, old)) in after.iter().zip(&before).enumerate() {
                if j != i {
                    prop_assert_eq!(p, old, "sibling {} moved while dragging {}", j, i);
                } else if p != old {
                    prop_assert!(state.range.contains(*p), "point {i} escaped to {p:?}");
                }
            }
        }
    }

    #[test]
    fn range_changes_never_move_points(
        t in graph_type_strategy(),
        moves in proptest::collection::vec((0usize..6, coord_strategy()), 0..10),
        ranges in proptest::collection::vec(range_strategy(), 1..5),
    ) {
        let mut state = initialize_graph_state(&GraphProps::new(GraphSpec::bare(t))).unwrap();
        for (i, c) in moves {
            state = reduce(state, &move_point(i, c));
        }
        let before = state.graph().points();
        for r in ranges {
            state = reduce(state, &change_range(r));
            prop_assert_eq!(state.graph().points(), before.clone());
        }
    }
}
