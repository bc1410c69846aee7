use derive_more::{Add, AddAssign, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// A length in device units (points, pixels, or whatever the measurer reports in).
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Sum,
    From,
    Into,
)]
pub struct Pt(pub f32);

impl Pt {
    /// A length no box edge can exceed, used for boxes without a height limit
    pub const INFINITY: Pt = Pt(f32::INFINITY);

    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<Pt> for Pt {
    type Output = Pt;

    fn div(self, rhs: Pt) -> Pt {
        Pt(self.0 / rhs.0)
    }
}

impl From<u32> for Pt {
    fn from(v: u32) -> Self {
        Pt(v as f32)
    }
}
