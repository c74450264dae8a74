use super::*;
use crate::animation::tween::Transition;

#[test]
fn short_labels_get_the_minimum_size() {
    let v = Vertex::new("a");
    assert_eq!(v.id(), "a");
    assert_eq!(v.label(), "a");
    assert_eq!(v.size(), Size::new(VERTEX_MIN_SIZE, VERTEX_MIN_SIZE));
}

#[test]
fn long_labels_grow_the_circle() {
    let v = Vertex::with_label("a", "a rather long label");
    let text = v.text().size();
    let d = text.width.hypot(text.height);
    assert!(d > VERTEX_MIN_SIZE);
    assert_eq!(v.size(), Size::new(d, d));
}

#[test]
fn size_follows_label_changes() {
    let v = Vertex::new("a");
    v.set_label("now much longer than before");
    assert!(v.width() > VERTEX_MIN_SIZE);
    v.set_label("b");
    assert_eq!(v.width(), VERTEX_MIN_SIZE);
}

#[test]
fn ring_and_label_are_children_of_the_circle() {
    let v = Vertex::new("a");
    let children = v.node().children();
    assert_eq!(children.len(), 2);
    assert!(children[0].ptr_eq(v.ring()));
    assert!(children[1].ptr_eq(v.text()));
}

#[test]
fn outline_insets_the_ring_immediately() {
    let v = Vertex::new("a");
    assert!(!v.is_outlined());
    assert_eq!(v.ring().size(), v.size());

    v.outline(true);
    assert!(v.is_outlined());
    assert_eq!(v.ring().size(), Size::new(112.0, 112.0));

    v.set_label("a label long enough to grow");
    assert_eq!(v.ring().width(), v.width() - RING_INSET);

    v.outline(false);
    assert_eq!(v.ring().size(), v.size());
}

#[test]
fn outline_transition_animates_the_ring() {
    let v = Vertex::new("a");
    let mut tween = v.outline_transition(true, 1.0);
    assert!(v.is_outlined());
    assert_eq!(v.ring().size(), v.size());

    tween.step(0.0);
    tween.step(0.5);
    let mid = v.ring().width();
    assert!(mid < VERTEX_MIN_SIZE && mid > VERTEX_MIN_SIZE - RING_INSET);

    tween.finish();
    assert_eq!(v.ring().size(), Size::new(112.0, 112.0));
}

#[test]
fn builders_set_state() {
    let v = Vertex::with_font("a", "A", 24.0)
        .with_outline(true)
        .with_position(Point::new(5.0, 6.0));
    assert!(v.is_outlined());
    assert_eq!(v.position(), Point::new(5.0, 6.0));
    assert_eq!(v.text().as_text().unwrap().font_size, 24.0);
}

#[test]
fn weak_handles_do_not_keep_vertices_alive() {
    let v = Vertex::new("a");
    let weak = v.downgrade();
    assert!(weak.upgrade().unwrap().ptr_eq(&v));
    drop(v);
    assert!(weak.upgrade().is_none());
}
