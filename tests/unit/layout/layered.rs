use super::*;
use crate::layout::adapter::LayoutEdge;

fn input(nodes: &[(&str, f64)], edges: &[(&str, &str)], rank_dir: RankDir) -> LayoutInput {
    LayoutInput {
        nodes: nodes
            .iter()
            .map(|(id, d)| (id.to_string(), Size::new(*d, *d)))
            .collect(),
        edges: edges
            .iter()
            .map(|(from, to)| LayoutEdge {
                from: from.to_string(),
                to: to.to_string(),
                label: String::new(),
            })
            .collect(),
        options: LayoutOptions::with_rank_dir(rank_dir),
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn empty_input_gives_empty_output() {
    let out = LayeredEngine::new()
        .layout(&input(&[], &[], RankDir::TopToBottom))
        .unwrap();
    assert!(out.nodes.is_empty());
    assert!(out.edges.is_empty());
}

#[test]
fn chain_stacks_ranks_top_to_bottom() {
    let out = LayeredEngine::new()
        .layout(&input(
            &[("a", 128.0), ("b", 128.0), ("c", 128.0)],
            &[("a", "b"), ("b", "c")],
            RankDir::TopToBottom,
        ))
        .unwrap();
    let (a, b, c) = (out.nodes["a"], out.nodes["b"], out.nodes["c"]);
    assert!(approx(a.y, 64.0));
    assert!(approx(b.y - a.y, 256.0));
    assert!(approx(c.y - b.y, 256.0));
    assert!(approx(a.x, b.x) && approx(b.x, c.x));

    let route = &out.edges[&EdgeKey::new("a", "b")];
    assert_eq!(route.len(), 2);
    assert!(approx(route[0].y, a.y + 64.0));
    assert!(approx(route[1].y, b.y - 64.0));
}

#[test]
fn bottom_to_top_flips_rank_axis() {
    let out = LayeredEngine::new()
        .layout(&input(
            &[("a", 128.0), ("b", 128.0)],
            &[("a", "b")],
            RankDir::BottomToTop,
        ))
        .unwrap();
    assert!(out.nodes["a"].y > out.nodes["b"].y);
    assert!(approx(out.nodes["b"].y, 64.0));
}

#[test]
fn left_to_right_advances_along_x() {
    let out = LayeredEngine::new()
        .layout(&input(
            &[("a", 128.0), ("b", 128.0), ("c", 128.0)],
            &[("a", "b"), ("b", "c")],
            RankDir::LeftToRight,
        ))
        .unwrap();
    let (a, b, c) = (out.nodes["a"], out.nodes["b"], out.nodes["c"]);
    assert!(a.x < b.x && b.x < c.x);
    assert!(approx(a.y, b.y) && approx(b.y, c.y));
    assert!(approx(a.x, 64.0));
}

#[test]
fn right_to_left_reverses_x() {
    let out = LayeredEngine::new()
        .layout(&input(
            &[("a", 128.0), ("b", 128.0)],
            &[("a", "b")],
            RankDir::RightToLeft,
        ))
        .unwrap();
    assert!(out.nodes["a"].x > out.nodes["b"].x);
}

#[test]
fn siblings_keep_node_separation() {
    let out = LayeredEngine::new()
        .layout(&input(
            &[("a", 128.0), ("b", 128.0), ("c", 128.0)],
            &[("a", "b"), ("a", "c")],
            RankDir::TopToBottom,
        ))
        .unwrap();
    let (a, b, c) = (out.nodes["a"], out.nodes["b"], out.nodes["c"]);
    assert!((b.x - c.x).abs() >= 256.0 - 1e-9);
    assert!(approx(b.y, c.y));
    assert!(approx(a.x, (b.x + c.x) / 2.0));
}

#[test]
fn long_edge_bends_through_intermediate_rank() {
    let out = LayeredEngine::new()
        .layout(&input(
            &[("a", 128.0), ("b", 128.0), ("c", 128.0)],
            &[("a", "b"), ("b", "c"), ("a", "c")],
            RankDir::TopToBottom,
        ))
        .unwrap();
    let route = &out.edges[&EdgeKey::new("a", "c")];
    assert_eq!(route.len(), 3);
    assert!(approx(route[1].y, out.nodes["b"].y));
    assert!(!approx(route[1].x, out.nodes["b"].x));
}

#[test]
fn cycles_are_laid_out_with_routes_in_edge_direction() {
    let out = LayeredEngine::new()
        .layout(&input(
            &[("a", 128.0), ("b", 128.0)],
            &[("a", "b"), ("b", "a")],
            RankDir::TopToBottom,
        ))
        .unwrap();
    assert_eq!(out.nodes.len(), 2);
    let back = &out.edges[&EdgeKey::new("b", "a")];
    let fwd = &out.edges[&EdgeKey::new("a", "b")];
    assert!(fwd.first().unwrap().y < fwd.last().unwrap().y);
    assert!(back.first().unwrap().y > back.last().unwrap().y);
}

#[test]
fn self_loop_is_rejected() {
    let err = LayeredEngine::new()
        .layout(&input(&[("a", 128.0)], &[("a", "a")], RankDir::TopToBottom))
        .unwrap_err();
    assert!(matches!(err, DiagramError::Layout(_)));
}

#[test]
fn unknown_endpoint_is_rejected() {
    let err = LayeredEngine::new()
        .layout(&input(&[("a", 128.0)], &[("a", "z")], RankDir::TopToBottom))
        .unwrap_err();
    assert!(err.to_string().contains("'z'"));
}

#[test]
fn output_starts_at_origin() {
    let out = LayeredEngine::new()
        .layout(&input(
            &[("a", 100.0), ("b", 40.0), ("c", 60.0)],
            &[("a", "b"), ("a", "c")],
            RankDir::TopToBottom,
        ))
        .unwrap();
    let sizes = [("a", 100.0), ("b", 40.0), ("c", 60.0)];
    let min_x = sizes
        .iter()
        .map(|(id, d)| out.nodes[*id].x - d / 2.0)
        .fold(f64::INFINITY, f64::min);
    let min_y = sizes
        .iter()
        .map(|(id, d)| out.nodes[*id].y - d / 2.0)
        .fold(f64::INFINITY, f64::min);
    assert!(approx(min_x, 0.0));
    assert!(approx(min_y, 0.0));
}

#[test]
fn repeated_runs_are_identical() {
    let graph = input(
        &[("a", 128.0), ("b", 90.0), ("c", 128.0), ("d", 70.0)],
        &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d"), ("d", "a")],
        RankDir::TopToBottom,
    );
    let engine = LayeredEngine::new();
    assert_eq!(engine.layout(&graph).unwrap(), engine.layout(&graph).unwrap());
}

#[test]
fn intersect_rect_hits_the_nearest_side() {
    let c = Point::new(0.0, 0.0);
    let s = Size::new(100.0, 50.0);
    assert_eq!(intersect_rect(c, s, Point::new(200.0, 0.0)), Point::new(50.0, 0.0));
    assert_eq!(intersect_rect(c, s, Point::new(0.0, -200.0)), Point::new(0.0, -25.0));
    assert_eq!(intersect_rect(c, Size::ZERO, Point::new(5.0, 5.0)), c);
    assert_eq!(intersect_rect(c, s, c), c);
}
