use super::*;

fn default_route() -> RoutePreview {
    RoutePreview { start: Coordinate::new(-1.0987, 37.0084), end: Coordinate::new(-1.286389, 36.817223) }
}

#[test]
fn coordinate_display_uses_bracketed_pair() {
    assert_eq!(Coordinate::new(-1.0987, 37.0084).to_string(), "[-1.0987, 37.0084]");
    assert_eq!(Coordinate::new(-1.286389, 36.817223).to_string(), "[-1.286389, 36.817223]");
}

#[test]
fn coordinate_validity_checks_ranges() {
    assert!(Coordinate::new(0.0, 0.0).is_valid());
    assert!(Coordinate::new(-90.0, 180.0).is_valid());
    assert!(!Coordinate::new(90.5, 0.0).is_valid());
    assert!(!Coordinate::new(0.0, -181.0).is_valid());
    assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
}

#[test]
fn haversine_matches_known_distance() {
    let km = default_route().distance_km();
    assert!((29.5..30.1).contains(&km), "unexpected distance {km}");
}

#[test]
fn haversine_is_zero_for_same_point() {
    let p = Coordinate::new(12.5, -45.25);
    assert!(haversine_km(p, p).abs() < 1e-9);
}

#[test]
fn projection_keeps_compass_orientation() {
    let proj = RouteProjection::fit(&default_route(), 320.0, 200.0, 20.0);
    // Start is north-east of the end point.
    assert!(proj.start.x > proj.end.x);
    assert!(proj.start.y < proj.end.y);
}

#[test]
fn projection_stays_inside_padding() {
    let proj = RouteProjection::fit(&default_route(), 320.0, 200.0, 20.0);
    for p in [proj.start, proj.end] {
        assert!(p.x >= 20.0 - 1e-9 && p.x <= 300.0 + 1e-9, "x out of bounds: {}", p.x);
        assert!(p.y >= 20.0 - 1e-9 && p.y <= 180.0 + 1e-9, "y out of bounds: {}", p.y);
    }
    // The limiting (vertical) axis fills the inner height exactly.
    assert!((proj.end.y - proj.start.y - 160.0).abs() < 1e-6);
}

#[test]
fn projection_centres_degenerate_route() {
    let p = Coordinate::new(-1.0, 36.0);
    let proj = RouteProjection::fit(&RoutePreview { start: p, end: p }, 320.0, 200.0, 20.0);
    assert_eq!(proj.start, Point { x: 160.0, y: 100.0 });
    assert_eq!(proj.end, Point { x: 160.0, y: 100.0 });
}

#[test]
fn projection_handles_east_west_route() {
    let route = RoutePreview { start: Coordinate::new(0.0, 10.0), end: Coordinate::new(0.0, 11.0) };
    let proj = RouteProjection::fit(&route, 200.0, 100.0, 10.0);
    assert!((proj.start.x - 10.0).abs() < 1e-9);
    assert!((proj.end.x - 190.0).abs() < 1e-9);
    assert!((proj.start.y - 50.0).abs() < 1e-9);
}

#[test]
fn view_box_lists_viewport_size() {
    let proj = RouteProjection::fit(&default_route(), 320.0, 200.0, 20.0);
    assert_eq!(proj.view_box(), "0 0 320 200");
}
