//! Type-safe wrappers for years and encodings.

pub mod encoding;
pub mod year;

pub use encoding::{decode_with_fallback, Encoding};
pub use year::{Year, YearRange};
