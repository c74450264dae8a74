use super::*;
use crate::animation::ease::Ease;
use crate::animation::tween::Tween;
use crate::scene::signal::Signal;

#[test]
fn sequence_switches_at_boundary() {
    let a = Signal::new(0.0);
    let b = Signal::new(0.0);
    let mut s = sequence([
        Tween::new(&a, 1.0, 1.0).with_ease(Ease::Linear).boxed(),
        Tween::new(&b, 1.0, 1.0).with_ease(Ease::Linear).boxed(),
    ]);
    assert_eq!(s.duration(), 2.0);

    s.step(0.0);
    assert_eq!(s.step(1.0), Step::Running);
    assert_eq!(a.get(), 1.0);
    assert_eq!(b.get(), 0.0);

    assert_eq!(s.step(0.5), Step::Running);
    assert!((b.get() - 0.5).abs() < 1e-12);
    assert_eq!(s.step(0.5), Step::Done);
    assert_eq!(b.get(), 1.0);
}

#[test]
fn delay_holds_inner_until_wait_elapses() {
    let v = Signal::new(0.0);
    let mut d = delay(0.5, Tween::new(&v, 2.0, 0.0).boxed());
    assert_eq!(d.duration(), 0.5);
    assert_eq!(d.step(0.25), Step::Running);
    assert_eq!(v.get(), 0.0);
    assert_eq!(d.step(0.25), Step::Done);
    assert_eq!(v.get(), 2.0);
}

#[test]
fn empty_sequence_is_done() {
    let mut s = sequence(Vec::new());
    assert_eq!(s.step(0.0), Step::Done);
}
