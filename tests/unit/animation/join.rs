use super::*;
use crate::animation::ease::Ease;
use crate::animation::tween::Tween;
use crate::scene::signal::Signal;

#[test]
fn empty_join_is_immediately_done() {
    let mut all = join_all(Vec::new());
    assert!(all.is_empty());
    assert_eq!(all.duration(), 0.0);
    assert_eq!(all.step(0.0), Step::Done);
}

#[test]
fn join_completes_with_the_slowest_branch() {
    let fast = Signal::new(0.0);
    let slow = Signal::new(0.0);
    let mut all = join_all([
        Tween::new(&fast, 1.0, 0.5).with_ease(Ease::Linear).boxed(),
        Tween::new(&slow, 1.0, 1.0).with_ease(Ease::Linear).boxed(),
    ]);
    assert_eq!(all.len(), 2);
    assert_eq!(all.duration(), 1.0);

    assert_eq!(all.step(0.0), Step::Running);
    assert_eq!(all.step(0.5), Step::Running);
    assert_eq!(fast.get(), 1.0);
    assert!((slow.get() - 0.5).abs() < 1e-12);

    assert_eq!(all.step(0.5), Step::Done);
    assert_eq!(slow.get(), 1.0);
}

#[test]
fn finished_branches_are_not_stepped_again() {
    let fast = Signal::new(0.0);
    let slow = Signal::new(0.0);
    let mut all = All::default();
    all.push(Tween::new(&fast, 1.0, 0.0));
    all.push(Tween::new(&slow, 1.0, 1.0));

    all.step(0.0);
    fast.set(42.0);
    all.step(0.5);
    assert_eq!(fast.get(), 42.0);
}

#[test]
fn joins_nest() {
    let a = Signal::new(0.0);
    let b = Signal::new(0.0);
    let inner = join_all([Tween::new(&a, 1.0, 2.0).boxed()]);
    let mut outer = join_all([inner.boxed(), Tween::new(&b, 3.0, 1.0).boxed()]);
    assert_eq!(outer.duration(), 2.0);
    outer.finish();
    assert_eq!((a.get(), b.get()), (1.0, 3.0));
}

#[test]
fn debug_reports_branch_progress() {
    let a = Signal::new(0.0);
    let b = Signal::new(0.0);
    let mut all = All::default();
    all.push(Tween::new(&a, 1.0, 0.0));
    all.push(Tween::new(&b, 1.0, 1.0));
    assert_eq!(format!("{all:?}"), "All { branches: 2, finished: 0 }");

    all.step(0.0);
    assert_eq!(format!("{all:?}"), "All { branches: 2, finished: 1 }");
}
