//! Error types for lorem.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for lorem operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for lorem operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while writing the generated text.
    Io(io::Error),
    /// The output file could not be opened.
    Open { path: PathBuf, source: io::Error },
    /// A size option was given a negative value.
    NegativeSize { option: &'static str, value: i64 },
    /// More than one size unit was selected.
    ConflictingTargets {
        first: &'static str,
        second: &'static str,
    },
    /// Wrap width must be at least one column.
    InvalidWidth(usize),
    /// The truncation placeholder plus indent does not fit in the width.
    PlaceholderTooLarge { placeholder: String, width: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Open { path, source } => {
                write!(f, "can't open '{}': {source}", path.display())
            }
            Self::NegativeSize { option, value } => {
                write!(f, "argument {option}: invalid negative size: {value}")
            }
            Self::ConflictingTargets { first, second } => {
                write!(f, "argument {second}: not allowed with argument {first}")
            }
            Self::InvalidWidth(width) => write!(f, "invalid width {width} (must be > 0)"),
            Self::PlaceholderTooLarge { placeholder, width } => {
                write!(
                    f,
                    "placeholder {placeholder:?} too large for max width {width}"
                )
            }
        }
    }
}

impl Error {
    /// Whether the error comes from invalid options rather than I/O.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Open { .. })
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::Open { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
