use crate::error::FitError;
use crate::layout::wrap::wrap_boxes;
use crate::measure::{Extent, Measure};
use crate::rect::Rect;
use crate::units::Pt;
use tracing::{debug, trace};

/// Bounds on the font sizes considered when fitting text into boxes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FitOptions {
    /// Exclusive upper bound of the search. Text that would fit at this size or larger
    /// is reported as fitting at `max_font_size - 1`.
    pub max_font_size: u32,
    /// The smallest size still considered legible. Anything smaller is reported as
    /// [FitError::TextTooLongToFit]. Sizes below 1 are treated as 1.
    pub min_font_size: u32,
}

impl FitOptions {
    pub const DEFAULT_MAX_FONT_SIZE: u32 = 10_000;
    pub const DEFAULT_MIN_FONT_SIZE: u32 = 3;

    pub fn new() -> FitOptions {
        FitOptions {
            max_font_size: Self::DEFAULT_MAX_FONT_SIZE,
            min_font_size: Self::DEFAULT_MIN_FONT_SIZE,
        }
    }

    /// Set the exclusive upper bound of the font size search
    pub fn max_font_size(mut self, size: u32) -> FitOptions {
        self.max_font_size = size;
        self
    }

    /// Set the smallest font size that counts as fitting
    pub fn min_font_size(mut self, size: u32) -> FitOptions {
        self.min_font_size = size;
        self
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        FitOptions::new()
    }
}

/// Find the largest font size at which `text` word-wraps into a single box.
///
/// See [fit_boxes].
pub fn fit_box<B, M>(
    text: &str,
    font_at: B,
    bounding_box: Rect,
    options: &FitOptions,
) -> Result<u32, FitError>
where
    B: Fn(u32) -> M,
    M: Measure,
{
    fit_boxes(text, font_at, &[bounding_box], options)
}

/// Find the largest font size at which `text` word-wraps across `boxes`, filled in
/// order, with every line inside its box's width and every box's lines inside its
/// height.
///
/// `font_at` binds a font size to a measurer for the font at that size. Measured
/// extents must never shrink as the size grows: the search is a binary search over
/// sizes and relies on every size below a fitting size also fitting.
///
/// # Errors
///
/// [FitError::TextTooLongToFit] if the largest fitting size is below
/// [FitOptions::min_font_size].
pub fn fit_boxes<B, M>(
    text: &str,
    font_at: B,
    boxes: &[Rect],
    options: &FitOptions,
) -> Result<u32, FitError>
where
    B: Fn(u32) -> M,
    M: Measure,
{
    // lo always fits (0 fits vacuously), hi never does
    let mut lo: u32 = 0;
    let mut hi: u32 = options.max_font_size;

    while hi.saturating_sub(lo) > 1 {
        let mid = lo + (hi - lo) / 2;
        let fits = fits(text, &font_at(mid), boxes);
        debug!(font_size = mid, fits, "probed font size");
        if fits {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    // size 0 is never probed, so it can't count as fitting
    if lo < options.min_font_size.max(1) {
        debug!(font_size = lo, "text too long to fit");
        return Err(FitError::TextTooLongToFit);
    }

    debug!(font_size = lo, boxes = boxes.len(), "fitted text");
    Ok(lo)
}

/// Whether `text` wraps into `boxes` in the given font, with the wrapped lines measured
/// again as rendered (without their trailing separator).
fn fits<M: Measure>(text: &str, font: &M, boxes: &[Rect]) -> bool {
    let filled = match wrap_boxes(text, font, boxes) {
        Ok(filled) => filled,
        Err(err) => {
            trace!(%err, "text does not wrap");
            return false;
        }
    };

    boxes.iter().zip(filled.iter()).all(|(bounding_box, lines)| {
        let extents: Vec<Extent> = lines.iter().map(|line| font.measure(line.trim())).collect();
        let height: Pt = extents.iter().map(|extent| extent.height).sum();
        height <= bounding_box.height()
            && extents
                .iter()
                .all(|extent| extent.width <= bounding_box.width())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    /// every character is `size` wide and lines are `size` tall
    fn mono(size: u32) -> impl Fn(&str) -> Extent {
        let size = size as f32;
        move |text: &str| Extent::new(Pt(text.chars().count() as f32 * size), Pt(size))
    }

    fn fit(text: &str, boxes: &[Rect]) -> Result<u32, FitError> {
        fit_boxes(text, mono, boxes, &FitOptions::default())
    }

    #[test]
    fn single_word_fills_the_box_width() {
        // "ab " is three characters wide
        assert_eq!(fit("ab", &[Rect::sized(300u32, 300u32)]), Ok(100));
    }

    #[test]
    fn two_words_wrap_onto_two_lines() {
        assert_eq!(fit("ab cd", &[Rect::sized(300u32, 300u32)]), Ok(100));
        assert_eq!(fit("ab cd", &[Rect::sized(30u32, 10u32)]), Ok(5));
    }

    #[test]
    fn second_box_takes_the_overflow() {
        let one = [Rect::sized(30u32, 10u32)];
        let two = [Rect::sized(30u32, 10u32), Rect::sized(30u32, 10u32)];
        assert_eq!(fit("ab cd", &one), Ok(5));
        assert_eq!(fit("ab cd", &two), Ok(10));
    }

    #[test]
    fn single_box_matches_a_list_of_one() {
        let text = lipsum::lipsum(40);
        let bounding_box = Rect::sized(300u32, 300u32);
        let options = FitOptions::default();
        assert_eq!(
            fit_box(&text, mono, bounding_box, &options),
            fit_boxes(&text, mono, &[bounding_box], &options)
        );
    }

    #[test]
    fn text_that_only_fits_tiny_is_rejected() {
        let text = "a b c d e f g h i j k";
        assert_eq!(
            fit(text, &[Rect::sized(10u32, 3u32)]),
            Err(FitError::TextTooLongToFit)
        );
    }

    #[test]
    fn minimum_size_is_configurable() {
        let text = "a b c d e f g h i j k";
        let options = FitOptions::default().min_font_size(1);
        assert_eq!(
            fit_boxes(text, mono, &[Rect::sized(10u32, 3u32)], &options),
            Ok(1)
        );
    }

    #[test]
    fn zero_minimum_still_rejects_text_that_never_fits() {
        let options = FitOptions::default().min_font_size(0);
        assert_eq!(
            fit_boxes("ab", mono, &[], &options),
            Err(FitError::TextTooLongToFit)
        );
        assert_eq!(
            fit_boxes("twelvechars!", mono, &[Rect::sized(Pt(0.5), Pt(0.5))], &options),
            Err(FitError::TextTooLongToFit)
        );
        assert_eq!(
            fit_boxes("a b c d e f g h i j k", mono, &[Rect::sized(10u32, 3u32)], &options),
            Ok(1)
        );
    }

    #[test]
    #[traced_test]
    fn every_probe_is_logged() {
        let options = FitOptions::default().max_font_size(4);
        assert_eq!(
            fit_boxes("ab", mono, &[Rect::sized(9u32, 9u32)], &options),
            Ok(3)
        );
        // 4 is the exclusive bound, so only 2 and 3 are tried
        assert!(logs_contain("font_size=2 fits=true"));
        assert!(logs_contain("font_size=3 fits=true"));
        assert!(!logs_contain("font_size=1 fits"));
    }

    #[test]
    fn maximum_size_caps_the_search() {
        let options = FitOptions::default().max_font_size(50);
        assert_eq!(
            fit_boxes("ab", mono, &[Rect::sized(300u32, 300u32)], &options),
            Ok(49)
        );
    }

    #[test]
    fn empty_text_fits_at_any_size() {
        assert_eq!(
            fit("", &[Rect::sized(10u32, 10u32)]),
            Ok(FitOptions::DEFAULT_MAX_FONT_SIZE - 1)
        );
    }

    #[test]
    fn no_boxes_cannot_hold_any_text() {
        assert_eq!(fit("ab", &[]), Err(FitError::TextTooLongToFit));
    }

    #[test]
    fn bigger_box_never_fits_smaller() {
        let text = lipsum::lipsum(50);
        let small = fit(&text, &[Rect::sized(600u32, 600u32)]).unwrap();
        let large = fit(&text, &[Rect::sized(1200u32, 900u32)]).unwrap();
        assert!(small <= large, "{small} > {large}");
    }

    #[test]
    fn more_boxes_never_fit_smaller() {
        let text = lipsum::lipsum(60);
        let page = Rect::sized(800u32, 800u32);
        let one = fit(&text, &[page]).unwrap();
        let two = fit(&text, &[page, page]).unwrap();
        assert!(one <= two, "{one} > {two}");
    }

    #[test]
    fn fitted_size_wraps_within_the_boxes() {
        let text = lipsum::lipsum(30);
        let boxes = [Rect::sized(500u32, 200u32), Rect::sized(300u32, 400u32)];
        let size = fit(&text, &boxes).unwrap();
        assert!(fits(&text, &mono(size), &boxes));
        assert!(!fits(&text, &mono(size + 1), &boxes));
    }
}
