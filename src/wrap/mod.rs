//! Greedy paragraph wrapper.
//!
//! [`TextWrapper`] turns a string into lines no wider than
//! [`WrapOptions::width`] columns. It is the collaborator the length
//! generator drives: [`TextWrapper::wrap`] yields the lines and
//! [`TextWrapper::fill`] joins them with `\n`.
//!
//! # Examples
//!
//! ```
//! use lorem::{TextWrapper, WrapOptions};
//!
//! let options = WrapOptions::new(12);
//! let wrapper = TextWrapper::new(&options);
//! let lines = wrapper.wrap("The quick brown fox jumps").unwrap();
//! assert_eq!(lines, vec!["The quick", "brown fox", "jumps"]);
//! ```

mod chunks;

use crate::error::{Error, Result};
use crate::unicode::{display_width, first_grapheme_len, prefix_within_width};
use tracing::trace;

/// Width used when no terminal width is available.
pub const DEFAULT_WIDTH: usize = 70;

/// Default marker appended when `max_lines` truncates the output.
pub const DEFAULT_PLACEHOLDER: &str = " [...]";

/// Default tab stop distance.
pub const DEFAULT_TAB_SIZE: usize = 8;

/// Formatting configuration for [`TextWrapper`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrapOptions {
    /// Maximum line width in columns, indent included.
    pub width: usize,
    /// Prefix for the first line.
    pub initial_indent: String,
    /// Prefix for every line after the first.
    pub subsequent_indent: String,
    /// Expand tabs to spaces before wrapping.
    pub expand_tabs: bool,
    /// Tab stop distance used by `expand_tabs`.
    pub tab_size: usize,
    /// Turn every whitespace character into a plain space.
    pub replace_whitespace: bool,
    /// Put two spaces after sentence-ending punctuation.
    pub fix_sentence_endings: bool,
    /// Cut words longer than the line width.
    pub break_long_words: bool,
    /// Allow breaks after hyphens in compound words.
    pub break_on_hyphens: bool,
    /// Drop whitespace at the start and end of wrapped lines.
    pub drop_whitespace: bool,
    /// Stop after this many lines, ending with `placeholder`.
    pub max_lines: Option<usize>,
    /// Marker for text cut off by `max_lines`.
    pub placeholder: String,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl WrapOptions {
    /// Options with default behavior at the given width.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            initial_indent: String::new(),
            subsequent_indent: String::new(),
            expand_tabs: true,
            tab_size: DEFAULT_TAB_SIZE,
            replace_whitespace: true,
            fix_sentence_endings: false,
            break_long_words: true,
            break_on_hyphens: true,
            drop_whitespace: true,
            max_lines: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    /// Set both indents.
    #[must_use]
    pub fn indents(mut self, initial: impl Into<String>, subsequent: impl Into<String>) -> Self {
        self.initial_indent = initial.into();
        self.subsequent_indent = subsequent.into();
        self
    }

    /// Limit output to `max_lines` lines.
    #[must_use]
    pub fn max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    /// Set the truncation placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Check that the options can produce output at all.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::InvalidWidth(self.width));
        }
        if let Some(max_lines) = self.max_lines {
            let indent = if max_lines > 1 {
                &self.subsequent_indent
            } else {
                &self.initial_indent
            };
            if display_width(indent) + display_width(self.placeholder.trim_start()) > self.width {
                return Err(Error::PlaceholderTooLarge {
                    placeholder: self.placeholder.clone(),
                    width: self.width,
                });
            }
        }
        Ok(())
    }
}

/// Paragraph wrapper bound to a set of [`WrapOptions`].
#[derive(Clone, Copy, Debug)]
pub struct TextWrapper<'a> {
    options: &'a WrapOptions,
}

#[inline]
fn width_of(s: &str) -> isize {
    display_width(s) as isize
}

#[inline]
fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl<'a> TextWrapper<'a> {
    #[must_use]
    pub fn new(options: &'a WrapOptions) -> Self {
        Self { options }
    }

    /// Wrap `text` into lines. Empty or all-whitespace input yields no lines.
    pub fn wrap(&self, text: &str) -> Result<Vec<String>> {
        self.options.validate()?;
        let munged = chunks::munge_whitespace(text, self.options);
        let mut pieces = chunks::split_chunks(&munged, self.options.break_on_hyphens);
        if self.options.fix_sentence_endings {
            chunks::fix_sentence_endings(&mut pieces);
        }
        trace!(chunks = pieces.len(), "split text for wrapping");
        Ok(self.wrap_chunks(pieces))
    }

    /// Wrap `text` and join the lines with `\n`.
    pub fn fill(&self, text: &str) -> Result<String> {
        Ok(self.wrap(text)?.join("\n"))
    }

    fn wrap_chunks(&self, mut chunks: Vec<String>) -> Vec<String> {
        let opts = self.options;
        let placeholder_width = width_of(&opts.placeholder);
        let mut lines: Vec<String> = Vec::new();

        // Consumed from the back.
        chunks.reverse();

        while !chunks.is_empty() {
            let indent = if lines.is_empty() {
                &opts.initial_indent
            } else {
                &opts.subsequent_indent
            };
            let width = opts.width as isize - width_of(indent);

            if opts.drop_whitespace
                && !lines.is_empty()
                && chunks.last().is_some_and(|c| is_blank(c))
            {
                chunks.pop();
            }

            let mut cur_line: Vec<String> = Vec::new();
            let mut cur_len: isize = 0;
            while let Some(chunk) = chunks.pop() {
                let len = width_of(&chunk);
                if cur_len + len > width {
                    chunks.push(chunk);
                    break;
                }
                cur_len += len;
                cur_line.push(chunk);
            }

            if chunks.last().is_some_and(|c| width_of(c) > width) {
                self.handle_long_word(&mut chunks, &mut cur_line, cur_len, width);
                cur_len = cur_line.iter().map(|c| width_of(c)).sum();
            }

            if opts.drop_whitespace && cur_line.last().is_some_and(|c| is_blank(c)) {
                if let Some(dropped) = cur_line.pop() {
                    cur_len -= width_of(&dropped);
                }
            }

            if cur_line.is_empty() {
                continue;
            }

            let fits = match opts.max_lines {
                None => true,
                Some(max_lines) => {
                    let rest_is_empty = chunks.is_empty()
                        || (opts.drop_whitespace && chunks.len() == 1 && is_blank(&chunks[0]));
                    lines.len() + 1 < max_lines || (rest_is_empty && cur_len <= width)
                }
            };
            if fits {
                lines.push(format!("{indent}{}", cur_line.concat()));
                continue;
            }

            // Last permitted line: end it with the placeholder.
            while let Some(last) = cur_line.last() {
                if !is_blank(last) && cur_len + placeholder_width <= width {
                    cur_line.push(opts.placeholder.clone());
                    lines.push(format!("{indent}{}", cur_line.concat()));
                    return lines;
                }
                cur_len -= width_of(last);
                cur_line.pop();
            }
            if let Some(prev) = lines.last_mut() {
                let trimmed = prev.trim_end();
                if width_of(trimmed) + placeholder_width <= opts.width as isize {
                    *prev = format!("{trimmed}{}", opts.placeholder);
                    return lines;
                }
            }
            lines.push(format!("{indent}{}", opts.placeholder.trim_start()));
            return lines;
        }

        lines
    }

    /// Place (part of) the chunk at the top of `chunks` on the current line
    /// when it is too wide to fit on any line.
    fn handle_long_word(
        &self,
        chunks: &mut Vec<String>,
        cur_line: &mut Vec<String>,
        cur_len: isize,
        width: isize,
    ) {
        let space_left = if width < 1 {
            1
        } else {
            (width - cur_len).max(0) as usize
        };

        if !self.options.break_long_words {
            if cur_line.is_empty() {
                if let Some(chunk) = chunks.pop() {
                    cur_line.push(chunk);
                }
            }
            return;
        }

        let Some(mut chunk) = chunks.pop() else {
            return;
        };

        let mut end = prefix_within_width(&chunk, space_left);
        if end == 0 && cur_line.is_empty() {
            // A lone wide cluster must still make progress.
            end = first_grapheme_len(&chunk);
        }
        if self.options.break_on_hyphens && display_width(&chunk) > space_left {
            let head = &chunk[..end];
            if let Some(hyphen) = head.rfind('-') {
                if hyphen > 0 && head[..hyphen].chars().any(|c| c != '-') {
                    end = hyphen + 1;
                }
            }
        }

        let rest = chunk.split_off(end);
        cur_line.push(chunk);
        if !rest.is_empty() {
            chunks.push(rest);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(text: &str, options: &WrapOptions) -> Vec<String> {
        TextWrapper::new(options).wrap(text).unwrap()
    }

    #[test]
    fn test_wrap_basic() {
        let options = WrapOptions::new(12);
        assert_eq!(
            wrap("The quick brown fox jumps", &options),
            vec!["The quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn test_wrap_empty_and_blank_input() {
        let options = WrapOptions::new(10);
        assert!(wrap("", &options).is_empty());
        assert!(wrap("     ", &options).is_empty());
    }

    #[test]
    fn test_fill_joins_with_newlines() {
        let options = WrapOptions::new(10);
        let filled = TextWrapper::new(&options).fill("aaaa bbbb cccc").unwrap();
        assert_eq!(filled, "aaaa bbbb\ncccc");
    }

    #[test]
    fn test_lines_never_exceed_width() {
        let options = WrapOptions::new(17);
        for line in wrap(crate::source::LOREM_IPSUM, &options) {
            assert!(display_width(&line) <= 17, "line too wide: {line:?}");
        }
    }

    #[test]
    fn test_indents() {
        let options = WrapOptions::new(10).indents("* ", "  ");
        assert_eq!(
            wrap("one two three four", &options),
            vec!["* one two", "  three", "  four"]
        );
    }

    #[test]
    fn test_break_long_words() {
        let options = WrapOptions::new(4);
        assert_eq!(wrap("abcdefghij", &options), vec!["abcd", "efgh", "ij"]);

        let keep = WrapOptions {
            break_long_words: false,
            ..WrapOptions::new(4)
        };
        assert_eq!(wrap("ab abcdefghij cd", &keep), vec!["ab", "abcdefghij", "cd"]);
    }

    #[test]
    fn test_long_word_breaks_after_hyphen() {
        let options = WrapOptions::new(5);
        // One letter before the hyphen, so the splitter keeps the word whole.
        assert_eq!(
            wrap("a-bcdefghijkl", &options),
            vec!["a-", "bcdef", "ghijk", "l"]
        );
    }

    #[test]
    fn test_hyphen_breaking_can_be_disabled() {
        let on = WrapOptions::new(10);
        assert_eq!(wrap("xxxx goof-ball", &on), vec!["xxxx goof-", "ball"]);

        let off = WrapOptions {
            break_on_hyphens: false,
            ..WrapOptions::new(10)
        };
        assert_eq!(wrap("xxxx goof-ball", &off), vec!["xxxx", "goof-ball"]);
    }

    #[test]
    fn test_keep_whitespace() {
        let options = WrapOptions {
            drop_whitespace: false,
            ..WrapOptions::new(6)
        };
        assert_eq!(wrap("ab cd ef", &options), vec!["ab cd ", "ef"]);
    }

    #[test]
    fn test_leading_whitespace_kept_on_first_line() {
        let options = WrapOptions::new(10);
        assert_eq!(wrap("  ab cd", &options), vec!["  ab cd"]);
    }

    #[test]
    fn test_fix_sentence_endings() {
        let options = WrapOptions {
            fix_sentence_endings: true,
            ..WrapOptions::new(40)
        };
        assert_eq!(wrap("It ended. Then more.", &options), vec!["It ended.  Then more."]);
    }

    #[test]
    fn test_expand_tabs_before_wrap() {
        let options = WrapOptions {
            tab_size: 4,
            ..WrapOptions::new(20)
        };
        // Tab expands to spaces, which replace_whitespace leaves as spaces.
        assert_eq!(wrap("a\tb", &options), vec!["a   b"]);
    }

    #[test]
    fn test_max_lines_with_placeholder() {
        let options = WrapOptions::new(12).max_lines(2);
        assert_eq!(
            wrap("one two three four five six", &options),
            vec!["one two", "three [...]"]
        );
    }

    #[test]
    fn test_max_lines_fits_without_placeholder() {
        let options = WrapOptions::new(12).max_lines(2);
        assert_eq!(
            wrap("one two three", &options),
            vec!["one two", "three"]
        );
    }

    #[test]
    fn test_max_lines_output_is_stable_as_text_grows() {
        let options = WrapOptions::new(20).max_lines(1);
        let short = wrap(&crate::source::repeat_phrase("alpha beta", 3), &options);
        let long = wrap(&crate::source::repeat_phrase("alpha beta", 30), &options);
        assert_eq!(short, long);
        assert_eq!(short.len(), 1);
    }

    #[test]
    fn test_placeholder_moves_to_previous_line() {
        let options = WrapOptions {
            break_long_words: false,
            ..WrapOptions::new(10).max_lines(2).placeholder("...")
        };
        // Second line is a single over-wide word that cannot take the marker.
        assert_eq!(
            wrap("ab abcdefghijklmnop cd", &options),
            vec!["ab...".to_string()]
        );
    }

    #[test]
    fn test_zero_width_rejected() {
        let options = WrapOptions::new(0);
        let err = TextWrapper::new(&options).wrap("x").unwrap_err();
        assert!(matches!(err, Error::InvalidWidth(0)));
    }

    #[test]
    fn test_placeholder_too_large_rejected() {
        let options = WrapOptions::new(3).max_lines(1);
        let err = TextWrapper::new(&options).wrap("x").unwrap_err();
        assert!(matches!(err, Error::PlaceholderTooLarge { width: 3, .. }));
    }

    #[test]
    fn test_wide_characters_measured_in_columns() {
        let options = WrapOptions::new(4);
        assert_eq!(wrap("漢字 漢字", &options), vec!["漢字", "漢字"]);
        assert_eq!(wrap("漢字漢字漢", &options), vec!["漢字", "漢字", "漢"]);
    }
}
