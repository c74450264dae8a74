use crate::animation::tween::{BoxedTransition, Step, Transition};

/// Transition that only lets time pass.
#[derive(Clone, Copy, Debug)]
pub struct Wait {
    duration: f64,
    elapsed: f64,
}

impl Wait {
    /// Wait for `secs` seconds.
    pub fn new(secs: f64) -> Self {
        Self {
            duration: secs.max(0.0),
            elapsed: 0.0,
        }
    }
}

impl Transition for Wait {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn step(&mut self, dt: f64) -> Step {
        self.elapsed += dt.max(0.0);
        if self.elapsed >= self.duration - 1e-9 {
            Step::Done
        } else {
            Step::Running
        }
    }
}

/// Transitions run back to back.
pub struct Sequence {
    steps: Vec<BoxedTransition>,
    current: usize,
}

impl Transition for Sequence {
    fn duration(&self) -> f64 {
        self.steps.iter().map(|s| s.duration()).sum()
    }

    fn step(&mut self, dt: f64) -> Step {
        let mut dt = dt;
        while let Some(active) = self.steps.get_mut(self.current) {
            if active.step(dt) == Step::Running {
                return Step::Running;
            }
            // The next entry starts in the same tick without consuming extra time.
            self.current += 1;
            dt = 0.0;
        }
        Step::Done
    }
}

/// Run `steps` one after another.
pub fn sequence<I>(steps: I) -> Sequence
where
    I: IntoIterator<Item = BoxedTransition>,
{
    Sequence {
        steps: steps.into_iter().collect(),
        current: 0,
    }
}

/// Start `inner` after `secs` seconds.
pub fn delay(secs: f64, inner: BoxedTransition) -> Sequence {
    sequence([Wait::new(secs).boxed(), inner])
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;
