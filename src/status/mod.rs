//! Status indicator module
//!
//! Label formatting and the glyph the indicator is drawn with.

pub mod formatter;
pub mod glyph;

pub use formatter::{format_remaining, status_label, StatusLabel, BREAK_DUE_LABEL, NOT_RUNNING_LABEL};
pub use glyph::{DiscBounds, GlyphSpec, Rgb};
