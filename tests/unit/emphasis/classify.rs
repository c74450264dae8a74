use super::*;
use crate::foundation::core::Size;

fn sample() -> (NodeRef, NodeRef, NodeRef, NodeRef, NodeRef) {
    let root = NodeRef::container();
    let circle = root.add(NodeRef::circle(10.0));
    let label = circle.add(NodeRef::text("a", 10.0));
    let group = root.add(NodeRef::container());
    let rect = group.add(NodeRef::rect(Size::new(1.0, 1.0)));
    label.add(NodeRef::circle(1.0));
    (root, circle, label, group, rect)
}

#[test]
fn walk_is_preorder_and_skips_containers() {
    let (root, circle, label, _, rect) = sample();
    let seen: Vec<Classified> = classify(&root).collect();
    assert_eq!(seen.len(), 3);
    assert!(seen[0].node().ptr_eq(&circle) && !seen[0].is_text());
    assert!(seen[1].node().ptr_eq(&label) && seen[1].is_text());
    assert!(seen[2].node().ptr_eq(&rect) && !seen[2].is_text());
}

#[test]
fn text_children_are_not_classified() {
    let (_, _, label, _, _) = sample();
    let part = classify(&label).partition();
    assert_eq!(part.texts.len(), 1);
    assert!(part.shapes.is_empty());
}

#[test]
fn views_split_by_class() {
    let (root, circle, label, _, rect) = sample();
    let texts: Vec<NodeRef> = classify(&root).texts().collect();
    let shapes: Vec<NodeRef> = classify(&root).shapes().collect();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].ptr_eq(&label));
    assert_eq!(shapes.len(), 2);
    assert!(shapes[0].ptr_eq(&circle));
    assert!(shapes[1].ptr_eq(&rect));
}

#[test]
fn empty_container_classifies_to_nothing() {
    let part = classify(&NodeRef::container()).partition();
    assert!(part.is_empty());
    assert_eq!(part.len(), 0);
}
