use super::*;
use crate::animation::tween::{Step, Transition};

fn labelled_circle() -> (NodeRef, NodeRef) {
    let circle = NodeRef::circle(10.0);
    let label = circle.add(NodeRef::text("a", 10.0));
    (circle, label)
}

#[test]
fn mapping_table() {
    let t = Theme::dark();
    let lit = Emphasis::Lit.mapping(&t);
    assert_eq!((lit.shape_stroke, lit.shape_fill), (t.primary, Color::TRANSPARENT));
    assert_eq!((lit.text_stroke, lit.text_fill), (Color::TRANSPARENT, t.primary));

    let acc = Emphasis::Accented.mapping(&t);
    assert_eq!((acc.shape_stroke, acc.shape_fill), (t.accent, t.accent));
    assert_eq!((acc.text_stroke, acc.text_fill), (Color::TRANSPARENT, t.primary));

    let dim = Emphasis::Dimmed.mapping(&t);
    assert_eq!((dim.shape_stroke, dim.shape_fill), (t.dimmed, Color::TRANSPARENT));
    assert_eq!((dim.text_stroke, dim.text_fill), (Color::TRANSPARENT, t.dimmed));

    let hid = Emphasis::Hidden.mapping(&t);
    assert!(
        [hid.shape_stroke, hid.shape_fill, hid.text_stroke, hid.text_fill]
            .iter()
            .all(|c| c.is_transparent())
    );
}

#[test]
fn apply_sets_channels_immediately() {
    let (circle, label) = labelled_circle();
    let e = Emphasizer::new(Theme::dark());
    e.apply(&circle, Emphasis::Accented);
    assert_eq!(circle.stroke().get(), e.theme().accent);
    assert_eq!(circle.fill().get(), e.theme().accent);
    assert_eq!(label.stroke().get(), Color::TRANSPARENT);
    assert_eq!(label.fill().get(), e.theme().primary);
}

#[test]
fn transition_moves_every_channel_together() {
    let (circle, label) = labelled_circle();
    let e = Emphasizer::new(Theme::dark()).with_ease(Ease::Linear);
    let mut all = e.transition(&circle, Emphasis::Dimmed, 1.0);
    assert_eq!(all.len(), 4);
    assert_eq!(circle.stroke().get(), Color::WHITE);

    assert_eq!(all.step(0.0), Step::Running);
    assert_eq!(all.step(0.5), Step::Running);
    let mid = circle.stroke().get();
    assert!(mid.r < 1.0 && mid.r > e.theme().dimmed.r);

    assert_eq!(all.step(0.5), Step::Done);
    assert_eq!(circle.stroke().get(), e.theme().dimmed);
    assert_eq!(label.fill().get(), e.theme().dimmed);
}

#[test]
fn highlight_uses_identity_not_value() {
    let a = NodeRef::circle(10.0);
    let b = NodeRef::circle(10.0);
    let e = Emphasizer::default();
    e.highlight(std::slice::from_ref(&b), &[a.clone(), b.clone()]);
    assert_eq!(a.stroke().get(), e.theme().dimmed);
    assert_eq!(b.stroke().get(), e.theme().primary);
}

#[test]
fn highlight_transition_joins_per_sibling() {
    let a = NodeRef::circle(10.0);
    let b = NodeRef::text("b", 10.0);
    let e = Emphasizer::default();
    let mut all = e.highlight_transition(&[a.clone()], &[a.clone(), b.clone()], 0.25);
    assert_eq!(all.len(), 2);
    all.finish();
    assert_eq!(a.stroke().get(), e.theme().primary);
    assert_eq!(b.fill().get(), e.theme().dimmed);
}
