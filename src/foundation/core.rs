use crate::foundation::error::{DiagramError, DiagramResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Number of frames a [`crate::Timeline`] has rendered, counting from 0.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// The frame after this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Frames consumed by one played transition, `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// Frame count before the transition started.
    pub start: FrameIndex,
    /// Frame count after it completed.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Number of frames rendered.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Return `true` when the transition completed without rendering a frame.
    pub fn is_empty(self) -> bool {
        self.len_frames() == 0
    }

    /// Playback time covered at `fps`.
    pub fn secs(self, fps: Fps) -> f64 {
        self.len_frames() as f64 * fps.frame_secs()
    }
}

/// Timeline frame rate as the rational `num/den` frames per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Frames.
    pub num: u32,
    /// Seconds; never zero.
    pub den: u32,
}

impl Fps {
    /// Frame rate of `num` frames every `den` seconds; both must be positive.
    pub fn new(num: u32, den: u32) -> DiagramResult<Self> {
        if num == 0 || den == 0 {
            return Err(DiagramError::validation(format!(
                "frame rate {num}/{den} must have a positive numerator and denominator"
            )));
        }
        Ok(Self { num, den })
    }

    /// Time step between two rendered frames, in seconds.
    pub fn frame_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
