use crate::{
    animation::ease::Ease,
    foundation::color::Color,
    foundation::core::{Point, Size, Vec2},
    scene::signal::Signal,
};

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

impl Lerp for Size {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Size::new(
            a.width + (b.width - a.width) * t,
            a.height + (b.height - a.height) * t,
        )
    }
}

impl Lerp for Color {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Color::rgba(
            a.r + (b.r - a.r) * t,
            a.g + (b.g - a.g) * t,
            a.b + (b.b - a.b) * t,
            a.a + (b.a - a.a) * t,
        )
    }
}

/// Completion state reported by [`Transition::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// More time is needed.
    Running,
    /// The transition reached its final state.
    Done,
}

/// A change of one or more values over time, advanced cooperatively by its owner.
///
/// The first `step` call starts the transition; `step(0.0)` is a valid way to start without
/// consuming time. Once a transition reports [`Step::Done`] further steps are no-ops.
pub trait Transition {
    /// Nominal length in seconds.
    fn duration(&self) -> f64;

    /// Advance by `dt` seconds and write the resulting values.
    fn step(&mut self, dt: f64) -> Step;

    /// Jump straight to the final state.
    fn finish(&mut self) {
        while self.step(f64::INFINITY) == Step::Running {}
    }

    /// Erase the concrete type so heterogeneous transitions can be joined.
    fn boxed(self) -> BoxedTransition
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// Type-erased transition.
pub type BoxedTransition = Box<dyn Transition>;

impl<T: Transition + ?Sized> Transition for Box<T> {
    fn duration(&self) -> f64 {
        (**self).duration()
    }

    fn step(&mut self, dt: f64) -> Step {
        (**self).step(dt)
    }
}

// Progress this close to 1 counts as settled; frame-sized steps accumulate float noise.
const SETTLE_EPS: f64 = 1e-9;

/// Tween of a single [`Signal`] toward a target value.
///
/// The start value is read from the signal when the tween first steps, so a tween built early
/// still starts from whatever the value is when it actually begins.
pub struct Tween<T> {
    target: Signal<T>,
    from: Option<T>,
    to: T,
    duration: f64,
    ease: Ease,
    elapsed: f64,
    done: bool,
}

impl<T> Tween<T>
where
    T: Lerp + Clone + 'static,
{
    /// Tween `target` to `to` over `duration` seconds with [`Ease::InOutCubic`].
    ///
    /// Non-positive durations complete on the first step.
    pub fn new(target: &Signal<T>, to: T, duration: f64) -> Self {
        Self {
            target: target.clone(),
            from: None,
            to,
            duration: duration.max(0.0),
            ease: Ease::default(),
            elapsed: 0.0,
            done: false,
        }
    }

    /// Replace the easing function.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Pin the start value instead of sampling the signal on the first step.
    pub fn with_from(mut self, from: T) -> Self {
        self.from = Some(from);
        self
    }
}

impl<T> Transition for Tween<T>
where
    T: Lerp + Clone + 'static,
{
    fn duration(&self) -> f64 {
        self.duration
    }

    fn step(&mut self, dt: f64) -> Step {
        if self.done {
            return Step::Done;
        }
        let target = &self.target;
        let from = self.from.get_or_insert_with(|| target.get()).clone();

        self.elapsed += dt.max(0.0);
        let progress = if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        };

        if progress >= 1.0 - SETTLE_EPS {
            self.target.set(self.to.clone());
            self.done = true;
            return Step::Done;
        }
        self.target
            .set(T::lerp(&from, &self.to, self.ease.apply(progress)));
        Step::Running
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
