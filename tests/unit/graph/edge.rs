use super::*;
use crate::scene::node::NodeKind;

fn pair() -> (Vertex, Vertex) {
    (
        Vertex::new("a").with_position(Point::new(0.0, 0.0)),
        Vertex::new("b").with_position(Point::new(400.0, 0.0)),
    )
}

#[test]
fn key_and_label() {
    let (a, b) = pair();
    let e = Edge::new(&a, &b, "calls");
    assert_eq!(e.key(), EdgeKey::new("a", "b"));
    assert_eq!(e.label(), "calls");
    assert!(e.from().unwrap().ptr_eq(&a));
    assert!(e.to().unwrap().ptr_eq(&b));
}

#[test]
fn line_is_styled_as_an_arrow_below_vertices() {
    let (a, b) = pair();
    let e = Edge::new(&a, &b, "");
    let line = e.node().as_line().unwrap();
    assert!(line.end_arrow);
    assert_eq!(line.arrow_size, EDGE_ARROW_SIZE);
    assert_eq!(e.node().line_width(), EDGE_LINE_WIDTH);
    assert_eq!(e.node().z_index(), -1);
    assert!(matches!(e.text().kind(), NodeKind::Text(_)));
}

#[test]
fn route_is_trimmed_to_vertex_boundaries() {
    let (a, b) = pair();
    let e = Edge::new(&a, &b, "");
    assert_eq!(
        e.points().get(),
        Polyline::new(vec![Point::new(0.0, 0.0), Point::new(400.0, 0.0)])
    );
    let route = e.route();
    assert_eq!(route.start(), Some(Point::new(64.0, 0.0)));
    assert_eq!(route.end(), Some(Point::new(336.0, 0.0)));
}

#[test]
fn route_follows_vertices_until_points_are_set() {
    let (a, b) = pair();
    let e = Edge::new(&a, &b, "");
    b.node().position_signal().set(Point::new(0.0, 400.0));
    assert_eq!(e.route().end(), Some(Point::new(0.0, 336.0)));

    e.points()
        .set(Polyline::new(vec![Point::new(0.0, 0.0), Point::new(200.0, 0.0)]));
    b.node().position_signal().set(Point::new(999.0, 999.0));
    assert_eq!(e.route().end(), Some(Point::new(136.0, 0.0)));
}

#[test]
fn label_sits_beside_the_start_of_the_route() {
    let (a, b) = pair();
    let e = Edge::new(&a, &b, "x");
    assert_eq!(e.text().position(), Point::new(64.0, -EDGE_LABEL_OFFSET));

    b.node().position_signal().set(Point::new(0.0, 400.0));
    assert_eq!(e.text().position(), Point::new(EDGE_LABEL_OFFSET, 64.0));
}

#[test]
fn endpoints_are_weak() {
    let (a, b) = pair();
    let e = Edge::new(&a, &b, "");
    drop(b);
    assert!(e.to().is_none());
    assert_eq!(e.route().end(), Some(Point::new(400.0, 0.0)));
    assert!(e.from().is_some());
}
