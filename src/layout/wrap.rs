use crate::error::FitError;
use crate::measure::Measure;
use crate::rect::Rect;
use crate::units::Pt;
use tracing::trace;

/// A whitespace-delimited token of the input, along with the measured extent of the
/// token followed by a single space.
#[derive(Debug, Clone, PartialEq)]
pub struct Word<'t> {
    pub text: &'t str,
    pub width: Pt,
    pub height: Pt,
}

/// Split text into words and measure each one (with its trailing separator) in the
/// given font. Newlines and runs of whitespace all count as a single separator.
pub fn measure_words<'t, M: Measure>(text: &'t str, font: &M) -> Vec<Word<'t>> {
    text.split_whitespace()
        .map(|word| {
            let extent = font.measure(&format!("{word} "));
            Word {
                text: word,
                width: extent.width,
                height: extent.height,
            }
        })
        .collect()
}

/// A run of consecutive words, `words[start..end]`, being packed into a line
struct Line {
    start: usize,
    end: usize,
    width: Pt,
    height: Pt,
}

impl Line {
    fn starting_at(index: usize) -> Line {
        Line {
            start: index,
            end: index,
            width: Pt(0.0),
            height: Pt(0.0),
        }
    }

    fn is_empty(&self) -> bool {
        self.start == self.end
    }

    fn push(&mut self, word: &Word) {
        self.end += 1;
        self.width += word.width;
        self.height = self.height.max(word.height);
    }

    fn join(&self, words: &[Word]) -> String {
        words[self.start..self.end]
            .iter()
            .map(|word| word.text)
            .collect::<Vec<&str>>()
            .join(" ")
    }
}

/// Word-wraps text into lines no wider than `width`.
///
/// This is [wrap_boxes] with a single box of unlimited height, so it never runs out
/// of space, but a word that is wider than `width` on its own is still an error.
/// Empty (or whitespace-only) text gives no lines.
pub fn wrap_lines<M: Measure, W: Into<Pt>>(
    text: &str,
    font: &M,
    width: W,
) -> Result<Vec<String>, FitError> {
    let filled = wrap_boxes(text, font, &[Rect::column(width)])?;
    Ok(filled.into_iter().next().unwrap_or_default())
}

/// Word-wraps text across a sequence of boxes, filling them in order.
///
/// Words are packed greedily into lines as wide as each box allows. Once the next line
/// would take a box past its height, that whole line (not just the word that broke it)
/// moves on to the next box, so a line is never split across two boxes.
///
/// Returns one list of lines per box, in the same order as `boxes`; boxes that
/// received no text get an empty list.
///
/// # Errors
///
/// * [FitError::WordTooLong] if a word is wider than the box it lands in
/// * [FitError::NotEnoughSpace] if words are left over once every box is full
pub fn wrap_boxes<M: Measure>(
    text: &str,
    font: &M,
    boxes: &[Rect],
) -> Result<Vec<Vec<String>>, FitError> {
    let words = measure_words(text, font);

    let mut cursor = 0usize;
    let mut filled: Vec<Vec<String>> = Vec::with_capacity(boxes.len());
    for (index, bounding_box) in boxes.iter().enumerate() {
        let (lines, next) = fill_box(&words, cursor, bounding_box)?;
        if next < words.len() {
            trace!(
                box_index = index,
                placed = next - cursor,
                remaining = words.len() - next,
                "box is full"
            );
        }
        cursor = next;
        filled.push(lines);
    }

    if cursor < words.len() {
        return Err(FitError::NotEnoughSpace {
            remaining: words.len() - cursor,
        });
    }

    Ok(filled)
}

/// Packs words, starting at `start`, into lines within a single box. Returns the closed
/// lines and the index of the first word that did not make it into the box.
fn fill_box(
    words: &[Word],
    start: usize,
    bounding_box: &Rect,
) -> Result<(Vec<String>, usize), FitError> {
    let max_width = bounding_box.width();
    let max_height = bounding_box.height();

    let mut lines: Vec<String> = Vec::new();
    let mut used_height = Pt(0.0);
    let mut line = Line::starting_at(start);
    let mut cursor = start;

    while cursor < words.len() {
        let word = &words[cursor];

        if line.is_empty() && word.width > max_width {
            return Err(FitError::WordTooLong {
                word: word.text.to_string(),
            });
        }

        if line.width + word.width > max_width {
            // the line is full; close it out if the box still has room for it
            if used_height + line.height > max_height {
                return Ok((lines, line.start));
            }
            used_height += line.height;
            lines.push(line.join(words));
            line = Line::starting_at(cursor);
            continue;
        }

        line.push(word);
        cursor += 1;
    }

    if !line.is_empty() {
        if used_height + line.height > max_height {
            return Ok((lines, line.start));
        }
        lines.push(line.join(words));
    }

    Ok((lines, cursor))
}
