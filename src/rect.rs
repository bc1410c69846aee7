use crate::units::*;

/// A box to fit text into, specified by two opposite corners. Only the extent of the
/// rectangle matters when laying out text; its position is carried along for callers
/// that want to render into it afterwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (typically, top-left) corner.
    pub x1: Pt,
    /// The y-coordinate of the first (typically, top-left) corner.
    pub y1: Pt,
    /// The x-coordinate of the second (typically, bottom-right) corner.
    pub x2: Pt,
    /// The y-coordinate of the second (typically, bottom-right) corner.
    pub y2: Pt,
}

impl Rect {
    /// Create a box of the given size with its first corner at the origin
    pub fn sized<W: Into<Pt>, H: Into<Pt>>(width: W, height: H) -> Rect {
        Rect {
            x1: Pt(0.0),
            y1: Pt(0.0),
            x2: width.into(),
            y2: height.into(),
        }
    }

    /// A box of the given width that never runs out of vertical space
    pub fn column<W: Into<Pt>>(width: W) -> Rect {
        Rect::sized(width, Pt::INFINITY)
    }

    /// Horizontal extent of the box, regardless of corner order
    pub fn width(&self) -> Pt {
        Pt((self.x2.0 - self.x1.0).abs())
    }

    /// Vertical extent of the box, regardless of corner order
    pub fn height(&self) -> Pt {
        Pt((self.y2.0 - self.y1.0).abs())
    }
}

impl From<(Pt, Pt)> for Rect {
    fn from((width, height): (Pt, Pt)) -> Self {
        Rect::sized(width, height)
    }
}
