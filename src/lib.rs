mod error;
pub use error::*;

#[cfg(feature = "ttf")]
mod font;
#[cfg(feature = "ttf")]
pub use font::*;

/// Word wrapping text into boxes and searching for the font size that fits it
pub mod layout;

mod measure;
pub use measure::*;

mod rect;
pub use rect::*;

mod text_fit;
pub use text_fit::*;

mod units;
pub use units::*;

/// Re-export the font parser, for building [ScaledFace]s
#[cfg(feature = "ttf")]
pub use owned_ttf_parser;
