//! Unicode utilities for column widths and grapheme-safe splitting.

mod width;

pub use width::{display_width, first_grapheme_len, prefix_within_width};
