use super::*;
use crate::animation::join::join_all;
use crate::animation::tween::Tween;
use crate::scene::signal::Signal;

fn timeline() -> Timeline {
    Timeline::new(Fps::new(30, 1).unwrap())
}

#[test]
fn instant_transition_consumes_no_frames() {
    let mut tl = timeline();
    let s = Signal::new(0.0);
    let range = tl.play(Tween::new(&s, 1.0, 0.0));
    assert!(range.is_empty());
    assert_eq!(s.get(), 1.0);
}

#[test]
fn frames_consumed_match_duration() {
    let mut tl = timeline();
    let s = Signal::new(0.0);
    let range = tl.play(Tween::new(&s, 1.0, 0.5));
    assert_eq!(range.len_frames(), 15);
    assert_eq!(tl.frame(), FrameIndex(15));
    assert_eq!(s.get(), 1.0);
}

#[test]
fn join_resumes_only_after_slowest_branch() {
    let mut tl = timeline();
    let a = Signal::new(0.0);
    let b = Signal::new(0.0);
    let mut seen = Vec::new();
    let range = tl.play_with(
        join_all([
            Tween::new(&a, 1.0, 0.1).boxed(),
            Tween::new(&b, 1.0, 1.0).boxed(),
        ]),
        |f| seen.push(f.0),
    );
    assert_eq!(
        range,
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(30),
        }
    );
    assert_eq!(range.secs(tl.fps()), 1.0);
    assert_eq!(seen.len(), 30);
    assert_eq!(seen.last(), Some(&30));
}

#[test]
fn wait_advances_clock() {
    let mut tl = timeline();
    tl.wait(1.0);
    tl.wait(0.0);
    assert_eq!(tl.frame(), FrameIndex(30));
}
