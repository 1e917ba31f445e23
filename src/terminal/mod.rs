//! Default wrap width detection.
//!
//! Lookup order: a positive integer in `COLUMNS`, then the size of the
//! terminal on stdout, then [`FALLBACK_COLUMNS`].

mod size;

pub use size::terminal_size;

use tracing::debug;

/// Width used when neither `COLUMNS` nor the terminal gives one.
pub const FALLBACK_COLUMNS: usize = 80;

/// Environment variable that overrides the detected width.
pub const COLUMNS_ENV: &str = "COLUMNS";

/// Column count to wrap at when no width was given.
#[must_use]
pub fn terminal_width() -> usize {
    let env = std::env::var(COLUMNS_ENV).ok();
    resolve_width(env.as_deref(), terminal_size().ok().map(|(cols, _)| cols))
}

/// Pick the width from an optional `COLUMNS` value and an optional
/// terminal column count.
#[must_use]
pub fn resolve_width(columns_env: Option<&str>, terminal_cols: Option<u16>) -> usize {
    if let Some(cols) = columns_env
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&cols| cols > 0)
    {
        debug!(cols, "width from {COLUMNS_ENV}");
        return cols;
    }
    if let Some(cols) = terminal_cols.filter(|&cols| cols > 0) {
        debug!(cols, "width from terminal");
        return usize::from(cols);
    }
    FALLBACK_COLUMNS
}
