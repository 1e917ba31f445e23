//! Resolved generator configuration.

use crate::error::{Error, Result};
use crate::source::LOREM_IPSUM;
use crate::wrap::WrapOptions;

/// The single unit the output is sized in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Exact output length in bytes.
    Bytes(u64),
    /// Exact output length in characters.
    Chars(u64),
    /// Exact number of output lines.
    Lines(u64),
    /// Fixed number of phrase repetitions, no length targeting.
    Repetitions(u64),
}

impl Default for Target {
    fn default() -> Self {
        Self::Repetitions(1)
    }
}

impl Target {
    /// Resolve raw (possibly negative) option values into one target.
    ///
    /// At most one of the values may be set; none set means one repetition.
    pub fn select(
        repetitions: Option<i64>,
        bytes: Option<i64>,
        chars: Option<i64>,
        lines: Option<i64>,
    ) -> Result<Self> {
        let candidates: [(&'static str, Option<i64>, fn(u64) -> Self); 4] = [
            ("-r/--repetitions", repetitions, Self::Repetitions),
            ("-b/--bytes", bytes, Self::Bytes),
            ("-c/--chars", chars, Self::Chars),
            ("-l/--lines", lines, Self::Lines),
        ];

        let mut selected: Option<(&'static str, Self)> = None;
        for (option, value, make) in candidates {
            let Some(value) = value else {
                continue;
            };
            let size = u64::try_from(value).map_err(|_| Error::NegativeSize { option, value })?;
            if let Some((first, _)) = selected {
                return Err(Error::ConflictingTargets {
                    first,
                    second: option,
                });
            }
            selected = Some((option, make(size)));
        }

        Ok(selected.map_or_else(Self::default, |(_, target)| target))
    }
}

/// Everything one invocation needs to produce its output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Phrase repeated to build the text.
    pub text: String,
    /// Wrapper formatting.
    pub wrap: WrapOptions,
    /// End the output with a newline that counts toward the target size.
    pub trailing_newline: bool,
    pub target: Target,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Target::default())
    }
}

impl Config {
    /// Default phrase and formatting sized by `target`.
    #[must_use]
    pub fn new(target: Target) -> Self {
        Self {
            text: LOREM_IPSUM.to_string(),
            wrap: WrapOptions::default(),
            trailing_newline: true,
            target,
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_wrap(mut self, wrap: WrapOptions) -> Self {
        self.wrap = wrap;
        self
    }

    #[must_use]
    pub fn with_trailing_newline(mut self, enabled: bool) -> Self {
        self.trailing_newline = enabled;
        self
    }

    /// The newline appended to output, empty when disabled.
    #[must_use]
    pub fn newline(&self) -> &'static str {
        if self.trailing_newline { "\n" } else { "" }
    }

    /// Reject configurations the wrapper cannot honor.
    pub fn validate(&self) -> Result<()> {
        self.wrap.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_defaults_to_one_repetition() {
        let target = Target::select(None, None, None, None).unwrap();
        assert_eq!(target, Target::Repetitions(1));
    }

    #[test]
    fn test_select_single_unit() {
        assert_eq!(
            Target::select(None, Some(10), None, None).unwrap(),
            Target::Bytes(10)
        );
        assert_eq!(
            Target::select(None, None, Some(0), None).unwrap(),
            Target::Chars(0)
        );
        assert_eq!(
            Target::select(None, None, None, Some(3)).unwrap(),
            Target::Lines(3)
        );
        assert_eq!(
            Target::select(Some(4), None, None, None).unwrap(),
            Target::Repetitions(4)
        );
    }

    #[test]
    fn test_select_rejects_negative() {
        let err = Target::select(None, Some(-1), None, None).unwrap_err();
        assert!(matches!(
            err,
            Error::NegativeSize {
                option: "-b/--bytes",
                value: -1
            }
        ));

        let err = Target::select(Some(-5), None, None, None).unwrap_err();
        assert!(matches!(err, Error::NegativeSize { value: -5, .. }));
    }

    #[test]
    fn test_select_rejects_multiple_units() {
        let err = Target::select(None, Some(1), Some(2), None).unwrap_err();
        assert!(matches!(
            err,
            Error::ConflictingTargets {
                first: "-b/--bytes",
                second: "-c/--chars"
            }
        ));
    }

    #[test]
    fn test_newline_follows_flag() {
        let config = Config::default();
        assert_eq!(config.newline(), "\n");
        assert_eq!(config.with_trailing_newline(false).newline(), "");
    }

    #[test]
    fn test_validate_delegates_to_wrap_options() {
        let config = Config::default().with_wrap(WrapOptions::new(0));
        assert!(matches!(config.validate(), Err(Error::InvalidWidth(0))));
    }
}
