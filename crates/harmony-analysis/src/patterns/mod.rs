//! Pattern extraction: aggregates baseline style attributes into a
//! [`PatternSummary`].

pub mod color;
pub mod extractor;
pub mod types;

pub use color::rgb_to_hex;
pub use extractor::PatternExtractor;
pub use types::{NumericRange, PatternSummary, TypographySignature};
