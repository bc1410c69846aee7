use crate::{
    error::FitError,
    layout::{self, FitOptions},
    measure::Measure,
    rect::Rect,
    units::Pt,
};

/// Text fitted into a set of boxes
#[derive(Debug, Clone, PartialEq)]
pub struct FittedText {
    /// The largest font size at which the text fits
    pub font_size: u32,
    /// The wrapped lines for each box at `font_size`, in the same order as the boxes
    pub boxes: Vec<Vec<String>>,
}

/// Wraps and fits text for one font.
///
/// A `TextFit` is built from a font-size binding: a function taking a font size and
/// returning something that can [Measure] text in the font at that size. Every
/// operation resolves its font sizes through that binding.
///
/// ```
/// use text_fit::{Extent, Pt, Rect, TextFit};
///
/// let fitter = TextFit::new(|size: u32| {
///     move |text: &str| Extent::new(Pt((text.chars().count() as u32 * size) as f32), size)
/// });
///
/// assert_eq!(fitter.wrap("a b c d e f", 1, 10u32).unwrap(), vec!["a b c d e", "f"]);
/// assert_eq!(fitter.fit("ab", Rect::sized(300u32, 300u32)).unwrap(), 100);
/// ```
pub struct TextFit<B> {
    font_at: B,
    options: FitOptions,
}

impl<B, M> TextFit<B>
where
    B: Fn(u32) -> M,
    M: Measure,
{
    pub fn new(font_at: B) -> TextFit<B> {
        TextFit::with_options(font_at, FitOptions::default())
    }

    pub fn with_options(font_at: B, options: FitOptions) -> TextFit<B> {
        TextFit { font_at, options }
    }

    pub fn options(&self) -> &FitOptions {
        &self.options
    }

    /// Word-wrap text at `font_size` into lines no wider than `width`.
    /// See [layout::wrap_lines].
    pub fn wrap<W: Into<Pt>>(
        &self,
        text: &str,
        font_size: u32,
        width: W,
    ) -> Result<Vec<String>, FitError> {
        layout::wrap_lines(text, &(self.font_at)(font_size), width)
    }

    /// Word-wrap text at `font_size` across `boxes`, filling them in order.
    /// See [layout::wrap_boxes].
    pub fn wrap_boxes(
        &self,
        text: &str,
        font_size: u32,
        boxes: &[Rect],
    ) -> Result<Vec<Vec<String>>, FitError> {
        layout::wrap_boxes(text, &(self.font_at)(font_size), boxes)
    }

    /// Find the largest font size at which the text fits in `bounding_box`.
    /// See [layout::fit_boxes].
    pub fn fit(&self, text: &str, bounding_box: Rect) -> Result<u32, FitError> {
        layout::fit_box(text, &self.font_at, bounding_box, &self.options)
    }

    /// Find the largest font size at which the text fits across `boxes`.
    /// See [layout::fit_boxes].
    pub fn fit_boxes(&self, text: &str, boxes: &[Rect]) -> Result<u32, FitError> {
        layout::fit_boxes(text, &self.font_at, boxes, &self.options)
    }

    /// Fit the text into `boxes` and wrap it at the fitted size
    pub fn layout(&self, text: &str, boxes: &[Rect]) -> Result<FittedText, FitError> {
        let font_size = self.fit_boxes(text, boxes)?;
        let boxes = self.wrap_boxes(text, font_size, boxes)?;
        Ok(FittedText { font_size, boxes })
    }
}
