//! The source phrase that generated text is built from.

/// Default source phrase.
pub const LOREM_IPSUM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, \
quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute \
irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. \
Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit \
anim id est laborum.";

/// Join `count` copies of `phrase` with single spaces.
#[must_use]
pub fn repeat_phrase(phrase: &str, count: usize) -> String {
    if count == 0 {
        return String::new();
    }
    let mut out = String::with_capacity(joined_len(phrase.len(), count).unwrap_or(0));
    for i in 0..count {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(phrase);
    }
    out
}

/// Length of `count` space-joined copies of a `phrase_len`-byte phrase, or
/// `None` if it overflows.
fn joined_len(phrase_len: usize, count: usize) -> Option<usize> {
    phrase_len.checked_add(1)?.checked_mul(count)?.checked_sub(1)
}
