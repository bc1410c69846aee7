//! Word wrapping and font size fitting.
//!
//! Text is laid out into boxes in two steps:
//!
//! - [`wrap_boxes`](crate::layout::wrap_boxes) - splits text into words and greedily packs
//!   them into lines no wider than a box, moving whole lines on to the next box once a
//!   box is full ([`wrap_lines`](crate::layout::wrap_lines) does the same for a single,
//!   bottomless column)
//! - [`fit_boxes`](crate::layout::fit_boxes) - binary searches the font size, wrapping at
//!   each candidate, to find the largest size at which the text fits
//!
//! Neither step knows anything about fonts beyond what a [`Measure`](crate::Measure)
//! reports about the rendered size of a string.
//!
//! # Example
//!
//! ```
//! use text_fit::{Extent, Pt, Rect};
//! use text_fit::layout::{fit_boxes, wrap_boxes, FitOptions};
//!
//! // a monospace font where every character is as wide as the font size
//! let font_at = |size: u32| {
//!     move |text: &str| Extent::new(Pt((text.chars().count() as u32 * size) as f32), size)
//! };
//!
//! let boxes = [Rect::sized(30u32, 10u32), Rect::sized(30u32, 10u32)];
//! let size = fit_boxes("ab cd", font_at, &boxes, &FitOptions::default()).expect("text fits");
//! assert_eq!(size, 10);
//!
//! let lines = wrap_boxes("ab cd", &font_at(size), &boxes).expect("text wraps");
//! assert_eq!(lines, vec![vec!["ab"], vec!["cd"]]);
//! ```

mod fit;
mod wrap;

pub use fit::*;
pub use wrap::*;
