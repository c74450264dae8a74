use crate::{
    animation::ops::Wait,
    animation::tween::{Step, Transition},
    foundation::core::{Fps, FrameIndex, FrameRange},
};

/// Frame clock that drives transitions to completion.
///
/// Playing a transition is the suspension point of a scene script: the call returns once every
/// value the transition touches has reached its final state.
#[derive(Clone, Copy, Debug)]
pub struct Timeline {
    fps: Fps,
    frame: FrameIndex,
}

impl Timeline {
    /// Start a timeline at frame 0.
    pub fn new(fps: Fps) -> Self {
        Self {
            fps,
            frame: FrameIndex(0),
        }
    }

    /// Frame rate used to size each step.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Current frame (number of frames consumed so far).
    pub fn frame(&self) -> FrameIndex {
        self.frame
    }

    /// Run `transition` until it completes and return the frames it consumed.
    pub fn play<T: Transition>(&mut self, transition: T) -> FrameRange {
        self.play_with(transition, |_| {})
    }

    /// Like [`Timeline::play`], calling `on_frame` after every rendered frame's values are written.
    pub fn play_with<T, F>(&mut self, mut transition: T, mut on_frame: F) -> FrameRange
    where
        T: Transition,
        F: FnMut(FrameIndex),
    {
        let start = self.frame;
        let dt = self.fps.frame_secs();

        let mut step = transition.step(0.0);
        while step == Step::Running {
            step = transition.step(dt);
            self.frame = self.frame.next();
            on_frame(self.frame);
        }

        let range = FrameRange {
            start,
            end: self.frame,
        };
        tracing::trace!(
            start = start.0,
            end = self.frame.0,
            secs = range.secs(self.fps),
            "timeline transition complete"
        );
        range
    }

    /// Let `secs` seconds pass.
    pub fn wait(&mut self, secs: f64) -> FrameRange {
        self.play(Wait::new(secs))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
