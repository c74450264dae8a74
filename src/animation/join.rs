use std::fmt;

use crate::animation::tween::{BoxedTransition, Step, Transition};

/// Transitions started together and completed as one unit.
///
/// Every branch advances on every step; the join reports [`Step::Done`] only after the slowest
/// branch has finished. Branches must write disjoint signals, the result is unspecified otherwise.
#[derive(Default)]
pub struct All {
    branches: Vec<BoxedTransition>,
    finished: Vec<bool>,
}

impl All {
    /// Join the given branches.
    pub fn new(branches: Vec<BoxedTransition>) -> Self {
        let finished = vec![false; branches.len()];
        Self { branches, finished }
    }

    /// Add one more branch before the join starts.
    pub fn push(&mut self, branch: impl Transition + 'static) {
        self.branches.push(Box::new(branch));
        self.finished.push(false);
    }

    /// Number of joined branches.
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    /// Return `true` when nothing was joined; such a join completes immediately.
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

impl Transition for All {
    fn duration(&self) -> f64 {
        self.branches
            .iter()
            .map(|b| b.duration())
            .fold(0.0, f64::max)
    }

    fn step(&mut self, dt: f64) -> Step {
        let mut all_done = true;
        for (branch, finished) in self.branches.iter_mut().zip(self.finished.iter_mut()) {
            if *finished {
                continue;
            }
            if branch.step(dt) == Step::Done {
                *finished = true;
            } else {
                all_done = false;
            }
        }
        if all_done { Step::Done } else { Step::Running }
    }
}

impl fmt::Debug for All {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("All")
            .field("branches", &self.branches.len())
            .field("finished", &self.finished.iter().filter(|done| **done).count())
            .finish()
    }
}

impl FromIterator<BoxedTransition> for All {
    fn from_iter<I: IntoIterator<Item = BoxedTransition>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Join `transitions` into a single [`All`].
pub fn join_all<I>(transitions: I) -> All
where
    I: IntoIterator<Item = BoxedTransition>,
{
    transitions.into_iter().collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/join.rs"]
mod tests;
