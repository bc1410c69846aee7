use crate::units::Pt;

/// The rendered size of a string
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Extent {
    pub width: Pt,
    pub height: Pt,
}

impl Extent {
    pub fn new<W: Into<Pt>, H: Into<Pt>>(width: W, height: H) -> Extent {
        Extent {
            width: width.into(),
            height: height.into(),
        }
    }
}

/// Measures strings as they would be rendered in one font at one size.
///
/// Implementations must be pure: the same text always measures the same. When used
/// for fitting, extents must also never shrink as the font size grows, otherwise the
/// search for the largest fitting size can settle on the wrong answer.
///
/// Any `Fn(&str) -> Extent` closure is a measurer, which is handy when the metrics come
/// from somewhere else entirely:
///
/// ```
/// use text_fit::{Extent, Measure, Pt};
///
/// let size = 12.0;
/// let mono = move |text: &str| Extent::new(Pt(text.chars().count() as f32 * size * 0.6), Pt(size));
/// assert_eq!(mono.measure("ab").height, Pt(12.0));
/// ```
pub trait Measure {
    fn measure(&self, text: &str) -> Extent;
}

impl<F> Measure for F
where
    F: Fn(&str) -> Extent,
{
    fn measure(&self, text: &str) -> Extent {
        self(text)
    }
}
