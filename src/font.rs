use crate::{measure::*, units::Pt};
use owned_ttf_parser::{AsFaceRef, GlyphId};

/// Glyph 0, which every face draws for characters it has no glyph for
const NOTDEF: GlyphId = GlyphId(0);

/// A parsed font face scaled to a point size, measuring text by its glyph advances.
///
/// The face is borrowed, so parsing (and keeping the font bytes alive) is left to the
/// caller. Anything implementing [AsFaceRef] works, which includes both
/// [owned_ttf_parser::OwnedFace] and a borrowed [owned_ttf_parser::Face].
///
/// Combine it with a closure to get a font-size binding for fitting:
///
/// ```no_run
/// use text_fit::owned_ttf_parser::OwnedFace;
/// use text_fit::{Rect, ScaledFace, TextFit};
///
/// let bytes = std::fs::read("Alice-Regular.ttf").expect("can read font");
/// let face = OwnedFace::from_vec(bytes, 0).expect("can parse font");
/// let fitter = TextFit::new(|size: u32| ScaledFace::new(&face, size));
/// let size = fitter.fit("Hello, world!", Rect::sized(300u32, 300u32)).expect("text fits");
/// ```
pub struct ScaledFace<'f, F: AsFaceRef> {
    face: &'f F,
    size: Pt,
}

impl<'f, F: AsFaceRef> ScaledFace<'f, F> {
    pub fn new<S: Into<Pt>>(face: &'f F, size: S) -> ScaledFace<'f, F> {
        ScaledFace {
            face,
            size: size.into(),
        }
    }

    /// The point size this face is scaled to
    pub fn size(&self) -> Pt {
        self.size
    }

    fn scaling(&self) -> Pt {
        self.size / Pt(self.face.as_face_ref().units_per_em() as f32)
    }

    /// Calculate the ascent (distance from the baseline to the top of the font)
    pub fn ascent(&self) -> Pt {
        self.scaling() * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font).
    /// Note: this is usually negative
    pub fn descent(&self) -> Pt {
        self.scaling() * self.face.as_face_ref().descender() as f32
    }

    /// Calculate the leading (extra space between lines)
    pub fn leading(&self) -> Pt {
        self.scaling() * self.face.as_face_ref().line_gap() as f32
    }

    /// How much to vertically offset a second row of text below a first row of text
    pub fn line_height(&self) -> Pt {
        self.leading() + self.ascent() - self.descent()
    }

    /// Calculate the width of a given string of text. Characters missing from the face
    /// are measured as the replacement character, a question mark, or failing both, the
    /// `.notdef` glyph.
    pub fn width_of_text(&self, text: &str) -> Pt {
        let face = self.face.as_face_ref();
        let scaling = self.scaling();
        text.chars()
            .map(|ch| {
                face.glyph_index(ch)
                    .or_else(|| face.glyph_index('\u{FFFD}'))
                    .or_else(|| face.glyph_index('?'))
                    .unwrap_or(NOTDEF)
            })
            .map(|gid| scaling * face.glyph_hor_advance(gid).unwrap_or_default() as f32)
            .sum()
    }
}

impl<F: AsFaceRef> Measure for ScaledFace<'_, F> {
    fn measure(&self, text: &str) -> Extent {
        Extent {
            width: self.width_of_text(text),
            height: self.line_height(),
        }
    }
}
