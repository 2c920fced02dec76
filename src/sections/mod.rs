//! Password scoring sections
//!
//! Each section checks one property of a password and is worth one point.

mod length;
mod variety;

pub use length::length_section;
pub use variety::{digit_section, symbol_section, uppercase_section};

/// Result type for section functions.
/// - `Some(reason)` - Section failed with reason, no point
/// - `None` - Section passed, one point
pub type SectionResult = Option<String>;
