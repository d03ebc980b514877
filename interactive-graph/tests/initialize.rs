use interactive_graph::props::MAX_ITEM_COUNT;
use interactive_graph::{
    initialize_graph_state, Coord, Count, GraphProps, GraphRange, GraphSpec, GraphType, GraphVariant, InitError,
    SnapTo,
};

fn c(x: f64, y: f64) -> Coord { Coord::new(x, y) }

fn points_of(spec: GraphSpec) -> Vec<Coord> {
    initialize_graph_state(&GraphProps::new(spec)).unwrap().graph().points()
}

#[test]
fn default_points_follow_the_legacy_layout() {
    assert_eq!(points_of(GraphSpec::Point { num_points: None, coords: None, coord: None }), vec![c(0.0, 0.0)]);
    // -4.5 rounds up to -4
    assert_eq!(
        points_of(GraphSpec::Point { num_points: Some(Count::Fixed(2)), coords: None, coord: None }),
        vec![c(-4.0, 0.0), c(5.0, 0.0)]
    );
    assert_eq!(points_of(GraphSpec::Point { num_points: Some(Count::Fixed(9)), coords: None, coord: None }).len(), 9);
}

#[test]
fn legacy_single_coord_is_honored() {
    let pts = points_of(GraphSpec::Point { num_points: None, coords: None, coord: Some(c(2.5, -1.5)) });
    assert_eq!(pts, vec![c(2.5, -1.5)]);
}

#[test]
fn unlimited_graphs_start_empty() {
    let state = initialize_graph_state(&GraphProps::new(GraphSpec::Point {
        num_points: Some(Count::UNLIMITED),
        coords: None,
        coord: None,
    }))
    .unwrap();
    assert!(matches!(state.graph(), GraphVariant::Point { coords, unlimited: true } if coords.is_empty()));
}

#[test]
fn authored_coords_are_not_snapped_or_clamped() {
    let props = GraphProps::new(GraphSpec::Point { num_points: None, coords: Some(vec![c(0.3, 42.0)]), coord: None });
    assert_eq!(initialize_graph_state(&props).unwrap().graph().points(), vec![c(0.3, 42.0)]);
}

#[test]
fn multiple_segments_are_staggered() {
    let pts = points_of(GraphSpec::Segment { num_segments: Some(2), coords: None });
    assert_eq!(pts, vec![c(-4.0, 5.0), c(5.0, 5.0), c(-4.0, -4.0), c(5.0, -4.0)]);
}

#[test]
fn default_triangle_is_upright_and_snapped() {
    let pts = points_of(GraphSpec::Polygon { num_sides: None, show_angles: None, show_sides: None, snap_to: None, coords: None });
    assert_eq!(pts, vec![c(3.0, -2.0), c(0.0, 4.0), c(-3.0, -2.0)]);
}

#[test]
fn non_grid_polygon_defaults_are_unsnapped() {
    let pts = points_of(GraphSpec::Polygon {
        num_sides: Some(Count::Fixed(4)),
        show_angles: None,
        show_sides: None,
        snap_to: Some(SnapTo::Sides),
        coords: None,
    });
    assert_eq!(pts.len(), 4);
    let r = 0.9 * 4.0 * std::f64::consts::FRAC_1_SQRT_2;
    for p in pts {
        assert!((p.x.abs() - r).abs() < 1e-9 && (p.y.abs() - r).abs() < 1e-9, "{p:?}");
    }
}

#[test]
fn circle_defaults() {
    let state = initialize_graph_state(&GraphProps::new(GraphSpec::Circle { center: None, radius: None })).unwrap();
    assert_eq!(state.graph().points(), vec![c(0.0, 0.0), c(2.0, 0.0)]);

    let state =
        initialize_graph_state(&GraphProps::new(GraphSpec::Circle { center: Some(c(3.0, 3.0)), radius: None })).unwrap();
    assert_eq!(state.radius(), Some(2.0));

    let odd = GraphProps::new(GraphSpec::Circle { center: None, radius: None })
        .with_range(GraphRange::from_bounds(-3.0, 10.0, 0.0, 4.0));
    let state = initialize_graph_state(&odd).unwrap();
    let pts = state.graph().points();
    assert_eq!(pts[0], c(4.0, 2.0));
    // a tenth of 4 snaps to zero, so one grid step is used
    assert_eq!(state.radius(), Some(1.0));
}

#[test]
fn curve_defaults_have_distinct_x() {
    assert_eq!(points_of(GraphSpec::Quadratic { coords: None }), vec![c(-4.0, 5.0), c(0.0, -4.0), c(5.0, 5.0)]);
    assert_eq!(points_of(GraphSpec::Sinusoid { coords: None }), vec![c(0.0, 0.0), c(3.0, 2.0)]);
}

#[test]
fn angle_stores_radians() {
    let state = initialize_graph_state(&GraphProps::new(GraphSpec::Angle {
        coords: None,
        show_angles: Some(true),
        allow_reflex_angles: None,
        angle_offset_deg: Some(90.0),
        snap_degrees: Some(15.0),
    }))
    .unwrap();
    match state.graph() {
        GraphVariant::Angle { coords, angle_offset, snap_angle, show_angles, allow_reflex_angles } => {
            assert!((angle_offset - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
            assert!((snap_angle - 15f64.to_radians()).abs() < 1e-12);
            assert!(*show_angles && !*allow_reflex_angles);
            let [a, v, b] = *coords;
            assert_eq!(v, c(0.0, 0.0));
            assert!((a.x).abs() < 1e-9 && (a.y - 6.0).abs() < 1e-9);
            let opening = (b.y - v.y).atan2(b.x - v.x) - (a.y - v.y).atan2(a.x - v.x);
            assert!((opening - 30f64.to_radians()).abs() < 1e-9);
        }
        _ => panic!("expected angle"),
    }
}

#[test]
fn every_type_initializes_on_default_props() {
    for t in GraphType::ALL {
        let state = initialize_graph_state(&GraphProps::new(GraphSpec::bare(t))).unwrap();
        assert_eq!(state.graph_type(), t);
        assert!(!state.has_been_interacted_with);
    }
}

#[test]
fn invalid_range_fails() {
    let props = GraphProps::new(GraphSpec::bare(GraphType::Point)).with_range(GraphRange::from_bounds(0.0, 0.0, 0.0, 1.0));
    assert!(matches!(initialize_graph_state(&props), Err(InitError::InvalidRange { .. })));
}

#[test]
fn item_counts_are_capped() {
    let huge = GraphProps::new(GraphSpec::Point { num_points: Some(Count::Fixed(usize::MAX)), coords: None, coord: None });
    assert!(matches!(initialize_graph_state(&huge), Err(InitError::InvalidProps { .. })));

    let at_cap = GraphProps::new(GraphSpec::Segment { num_segments: Some(MAX_ITEM_COUNT), coords: None });
    assert_eq!(initialize_graph_state(&at_cap).unwrap().graph().points().len(), 2 * MAX_ITEM_COUNT);

    let over = GraphProps::new(GraphSpec::Polygon {
        num_sides: Some(Count::Fixed(MAX_ITEM_COUNT + 1)),
        show_angles: None,
        show_sides: None,
        snap_to: None,
        coords: None,
    });
    assert!(initialize_graph_state(&over).is_err());
}

#[test]
fn tiny_snap_degrees_still_opens_twenty_degrees() {
    let state = initialize_graph_state(&GraphProps::new(GraphSpec::Angle {
        coords: None,
        show_angles: None,
        allow_reflex_angles: None,
        angle_offset_deg: None,
        snap_degrees: Some(1e-10),
    }))
    .unwrap();
    let [a, v, b] = match state.graph() {
        GraphVariant::Angle { coords, .. } => *coords,
        _ => panic!("expected angle"),
    };
    let opening = (b.y - v.y).atan2(b.x - v.x) - (a.y - v.y).atan2(a.x - v.x);
    assert!((opening - 20f64.to_radians()).abs() < 1e-6);
}
