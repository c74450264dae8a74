/// Easing curve applied to normalized tween progress.
///
/// Every curve maps `0` to `0` and `1` to `1`; input outside `[0, 1]` is clamped first. The
/// in/out forms are symmetric around `(0.5, 0.5)`, so a half-elapsed tween is exactly halfway.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// Accelerate with `t^2`.
    InQuad,
    /// Decelerate, mirror of [`Ease::InQuad`].
    OutQuad,
    /// Accelerate then decelerate, quadratic.
    InOutQuad,
    /// Accelerate with `t^3`.
    InCubic,
    /// Decelerate, mirror of [`Ease::InCubic`].
    OutCubic,
    /// Accelerate then decelerate, cubic. Used by layout and emphasis transitions.
    #[default]
    InOutCubic,
}

impl Ease {
    /// Eased value of progress `t`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self.degree() {
            None => t,
            Some((n, Shape::In)) => t.powi(n),
            Some((n, Shape::Out)) => 1.0 - (1.0 - t).powi(n),
            Some((n, Shape::InOut)) if t < 0.5 => 0.5 * (2.0 * t).powi(n),
            Some((n, Shape::InOut)) => 1.0 - 0.5 * (2.0 - 2.0 * t).powi(n),
        }
    }

    fn degree(self) -> Option<(i32, Shape)> {
        match self {
            Self::Linear => None,
            Self::InQuad => Some((2, Shape::In)),
            Self::OutQuad => Some((2, Shape::Out)),
            Self::InOutQuad => Some((2, Shape::InOut)),
            Self::InCubic => Some((3, Shape::In)),
            Self::OutCubic => Some((3, Shape::Out)),
            Self::InOutCubic => Some((3, Shape::InOut)),
        }
    }
}

#[derive(Clone, Copy)]
enum Shape {
    In,
    Out,
    InOut,
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
