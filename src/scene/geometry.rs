use crate::foundation::core::{Point, Rect, Size};

/// Monospace glyph advance as a fraction of the font size.
pub const TEXT_ADVANCE_EM: f64 = 0.6;
/// Line height as a fraction of the font size.
pub const TEXT_LINE_HEIGHT_EM: f64 = 1.2;

/// Read-through geometry query.
///
/// Every call reflects the entity's current content; nothing is cached, so a layout pass
/// that reads through this trait sees sizes as they are at that moment.
pub trait Geometry {
    /// Current size.
    fn size(&self) -> Size;

    /// Current center position in parent space.
    fn position(&self) -> Point;

    /// Current width.
    fn width(&self) -> f64 {
        self.size().width
    }

    /// Current height.
    fn height(&self) -> f64 {
        self.size().height
    }

    /// Axis-aligned extent centered on [`Geometry::position`].
    fn bounds(&self) -> Rect {
        Rect::from_center_size(self.position(), self.size())
    }
}

/// Measure a monospace text run; every `\n` starts a new line.
pub fn measure_text(content: &str, font_size: f64) -> Size {
    let mut lines = 0usize;
    let mut widest = 0usize;
    for line in content.split('\n') {
        lines += 1;
        widest = widest.max(line.chars().count());
    }
    Size::new(
        widest as f64 * TEXT_ADVANCE_EM * font_size,
        lines as f64 * TEXT_LINE_HEIGHT_EM * font_size,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/scene/geometry.rs"]
mod tests;
