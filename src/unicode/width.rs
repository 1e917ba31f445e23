//! Display width calculation for wrapped output.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Get the display width of a string in terminal columns.
///
/// ASCII printable text takes a fast path since it is always one column
/// per byte, which covers the default source phrase.
#[must_use]
pub fn display_width(s: &str) -> usize {
    if s.bytes().all(|b| (b' '..=b'~').contains(&b)) {
        return s.len();
    }
    UnicodeWidthStr::width(s)
}

/// Byte length of the longest prefix of whole grapheme clusters whose
/// display width fits in `columns`.
#[must_use]
pub fn prefix_within_width(s: &str, columns: usize) -> usize {
    let mut used = 0;
    let mut end = 0;
    for (idx, g) in s.grapheme_indices(true) {
        let w = UnicodeWidthStr::width(g);
        if used + w > columns {
            break;
        }
        used += w;
        end = idx + g.len();
    }
    end
}

/// Byte length of the first grapheme cluster, or 0 for an empty string.
#[must_use]
pub fn first_grapheme_len(s: &str) -> usize {
    s.graphemes(true).next().map_or(0, str::len)
}
