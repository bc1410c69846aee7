use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    #[error("the word {word:?} is wider than the box it must fit in")]
    /// A single word is wider than its box at the current font size
    WordTooLong { word: String },

    #[error("the boxes ran out of space with {remaining} words left to place")]
    /// The boxes, filled in order, cannot hold every word at the current font size
    NotEnoughSpace { remaining: usize },

    #[error("the text is too long to fit")]
    /// The largest fitting font size is below the smallest legible size
    TextTooLongToFit,
}
