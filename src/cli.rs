//! Command-line surface.
//!
//! Every boolean formatting flag comes as a `--name` / `--no-name` pair;
//! the last one given wins and the default applies when neither is.

use clap::{ArgGroup, Parser};

use crate::config::{Config, Target};
use crate::error::Result;
use crate::output::STDOUT_PATH;
use crate::source::LOREM_IPSUM;
use crate::terminal::terminal_width;
use crate::wrap::{DEFAULT_PLACEHOLDER, DEFAULT_TAB_SIZE, WrapOptions};

/// Parsed command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "lorem",
    version,
    about = "Generate lorem ipsum text sized in bytes, characters, lines, or repetitions",
    long_about = None
)]
#[command(group(ArgGroup::new("size").args(["repetitions", "bytes", "chars", "lines"])))]
#[allow(clippy::struct_excessive_bools)] // Flag pairs map one field per switch
pub struct Args {
    /// Phrase to repeat (default: the classic lorem ipsum paragraph)
    #[arg(short, long, value_name = "STRING", default_value = LOREM_IPSUM, hide_default_value = true, allow_hyphen_values = true, help_heading = "Output")]
    pub text: String,

    /// File to write to, or "-" for stdout
    #[arg(short, long, value_name = "PATH", default_value = STDOUT_PATH, help_heading = "Output")]
    pub output: String,

    /// Repeat the phrase exactly N times [default: 1]
    #[arg(short, long, value_name = "N", allow_negative_numbers = true, help_heading = "Output")]
    pub repetitions: Option<i64>,

    /// Produce exactly N bytes
    #[arg(short, long, value_name = "N", allow_negative_numbers = true, help_heading = "Output")]
    pub bytes: Option<i64>,

    /// Produce exactly N characters
    #[arg(short, long, value_name = "N", allow_negative_numbers = true, help_heading = "Output")]
    pub chars: Option<i64>,

    /// Produce exactly N lines
    #[arg(short, long, value_name = "N", allow_negative_numbers = true, help_heading = "Output")]
    pub lines: Option<i64>,

    /// End output with a newline, counted in the size [default]
    #[arg(long, visible_alias = "nl", overrides_with = "no_trailing_newline", help_heading = "Output")]
    pub trailing_newline: bool,

    #[arg(long, visible_alias = "no-nl", overrides_with = "trailing_newline", help_heading = "Output")]
    pub no_trailing_newline: bool,

    /// Maximum line width [default: terminal width]
    #[arg(short, long, value_name = "COLUMNS", help_heading = "Formatting")]
    pub width: Option<usize>,

    /// Prefix for the first line
    #[arg(long, value_name = "STRING", default_value = "", allow_hyphen_values = true, help_heading = "Formatting")]
    pub initial_indent: String,

    /// Prefix for the remaining lines
    #[arg(long, value_name = "STRING", default_value = "", allow_hyphen_values = true, help_heading = "Formatting")]
    pub subsequent_indent: String,

    /// Expand tabs to spaces [default]
    #[arg(long, overrides_with = "no_expand_tabs", help_heading = "Formatting")]
    pub expand_tabs: bool,

    #[arg(long, overrides_with = "expand_tabs", help_heading = "Formatting")]
    pub no_expand_tabs: bool,

    /// Tab stop distance for --expand-tabs
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TAB_SIZE, help_heading = "Formatting")]
    pub tabsize: usize,

    /// Turn every whitespace character into a space [default]
    #[arg(long, overrides_with = "no_replace_whitespace", help_heading = "Formatting")]
    pub replace_whitespace: bool,

    #[arg(long, overrides_with = "replace_whitespace", help_heading = "Formatting")]
    pub no_replace_whitespace: bool,

    /// Put two spaces after sentence endings
    #[arg(long, overrides_with = "no_fix_sentence_endings", help_heading = "Formatting")]
    pub fix_sentence_endings: bool,

    #[arg(long, overrides_with = "fix_sentence_endings", help_heading = "Formatting")]
    pub no_fix_sentence_endings: bool,

    /// Cut words wider than the line [default]
    #[arg(long, overrides_with = "no_break_long_words", help_heading = "Formatting")]
    pub break_long_words: bool,

    #[arg(long, overrides_with = "break_long_words", help_heading = "Formatting")]
    pub no_break_long_words: bool,

    /// Allow line breaks after hyphens [default]
    #[arg(long, overrides_with = "no_break_on_hyphens", help_heading = "Formatting")]
    pub break_on_hyphens: bool,

    #[arg(long, overrides_with = "break_on_hyphens", help_heading = "Formatting")]
    pub no_break_on_hyphens: bool,

    /// Drop whitespace at line starts and ends [default]
    #[arg(long, overrides_with = "no_drop_whitespace", help_heading = "Formatting")]
    pub drop_whitespace: bool,

    #[arg(long, overrides_with = "drop_whitespace", help_heading = "Formatting")]
    pub no_drop_whitespace: bool,

    /// Stop after N lines of each wrapped block, ending with the placeholder
    #[arg(long, value_name = "N", help_heading = "Formatting")]
    pub max_lines: Option<usize>,

    /// Marker for text cut off by --max-lines
    #[arg(long, value_name = "STRING", default_value = DEFAULT_PLACEHOLDER, allow_hyphen_values = true, help_heading = "Formatting")]
    pub placeholder: String,
}

/// Resolve a `--name` / `--no-name` pair.
fn flag(on: bool, off: bool, default: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        default
    }
}

impl Args {
    /// The selected size unit; rejects negative values.
    pub fn target(&self) -> Result<Target> {
        Target::select(self.repetitions, self.bytes, self.chars, self.lines)
    }

    /// Wrapper options, detecting the width when none was given.
    #[must_use]
    pub fn wrap_options(&self) -> WrapOptions {
        let defaults = WrapOptions::new(self.width.unwrap_or_else(terminal_width));
        WrapOptions {
            initial_indent: self.initial_indent.clone(),
            subsequent_indent: self.subsequent_indent.clone(),
            expand_tabs: flag(self.expand_tabs, self.no_expand_tabs, defaults.expand_tabs),
            tab_size: self.tabsize,
            replace_whitespace: flag(
                self.replace_whitespace,
                self.no_replace_whitespace,
                defaults.replace_whitespace,
            ),
            fix_sentence_endings: flag(
                self.fix_sentence_endings,
                self.no_fix_sentence_endings,
                defaults.fix_sentence_endings,
            ),
            break_long_words: flag(
                self.break_long_words,
                self.no_break_long_words,
                defaults.break_long_words,
            ),
            break_on_hyphens: flag(
                self.break_on_hyphens,
                self.no_break_on_hyphens,
                defaults.break_on_hyphens,
            ),
            drop_whitespace: flag(
                self.drop_whitespace,
                self.no_drop_whitespace,
                defaults.drop_whitespace,
            ),
            max_lines: self.max_lines,
            placeholder: self.placeholder.clone(),
            ..defaults
        }
    }

    /// Build and validate the full configuration.
    pub fn to_config(&self) -> Result<Config> {
        let config = Config {
            text: self.text.clone(),
            wrap: self.wrap_options(),
            trailing_newline: flag(self.trailing_newline, self.no_trailing_newline, true),
            target: self.target()?,
        };
        config.validate()?;
        Ok(config)
    }
}
