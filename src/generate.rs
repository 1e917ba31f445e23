//! Length-targeted text generation.
//!
//! The wrapper is not incremental: adding repetitions can reflow earlier
//! lines, and options like `max_lines` cap the output entirely. So each
//! size mode regenerates a candidate from a growing repetition count until
//! it is long enough, then cuts it to the exact size. A candidate that is
//! no longer than the one before it means the output has stopped growing,
//! and the previous candidate is emitted as is.
//!
//! The trailing newline counts toward byte and char targets: with the
//! newline enabled, `--bytes 10` yields nine bytes of text and `\n`.

use std::io::Write;

use tracing::debug;

use crate::config::{Config, Target};
use crate::error::Result;
use crate::source::repeat_phrase;
use crate::wrap::TextWrapper;

/// Repetitions added between growth iterations.
pub const GROWTH_STEP: usize = 5;

/// Whether a candidate of length `current` failed to grow past the
/// previous one.
#[inline]
#[must_use]
pub fn is_stalled(previous: Option<usize>, current: usize) -> bool {
    previous.is_some_and(|previous| current <= previous)
}

/// Produce the complete output for `config`.
pub fn generate(config: &Config) -> Result<Vec<u8>> {
    config.validate()?;
    let wrapper = TextWrapper::new(&config.wrap);

    match config.target {
        Target::Bytes(n) => generate_bytes(config, &wrapper, clamp(n)),
        Target::Chars(n) => generate_chars(config, &wrapper, clamp(n)).map(String::into_bytes),
        Target::Lines(n) => generate_lines(config, &wrapper, clamp(n)).map(String::into_bytes),
        Target::Repetitions(n) => {
            generate_repetitions(config, &wrapper, clamp(n)).map(String::into_bytes)
        }
    }
}

/// Generate, then write the result once and flush.
pub fn write_to<W: Write>(config: &Config, writer: &mut W) -> Result<()> {
    let output = generate(config)?;
    writer.write_all(&output)?;
    writer.flush()?;
    Ok(())
}

fn clamp(n: u64) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

/// Output of exactly `target` bytes, or shorter if the text stops growing.
///
/// Truncation works on the encoded bytes and may split a multi-byte
/// character.
pub fn generate_bytes(config: &Config, wrapper: &TextWrapper<'_>, target: usize) -> Result<Vec<u8>> {
    if target == 0 {
        return Ok(Vec::new());
    }
    let newline = &config.newline().as_bytes()[..config.newline().len().min(target)];
    let budget = target - newline.len();

    grow(
        &config.text,
        target,
        |text| {
            let mut bytes = wrapper.fill(text)?.into_bytes();
            bytes.truncate(budget);
            bytes.extend_from_slice(newline);
            Ok(bytes)
        },
        Vec::len,
    )
}

/// Output of exactly `target` characters, or shorter if the text stops
/// growing.
pub fn generate_chars(config: &Config, wrapper: &TextWrapper<'_>, target: usize) -> Result<String> {
    if target == 0 {
        return Ok(String::new());
    }
    let newline = config.newline();
    let budget = target - newline.chars().count().min(target);

    grow(
        &config.text,
        target,
        |text| {
            let mut filled = wrapper.fill(text)?;
            if let Some((cut, _)) = filled.char_indices().nth(budget) {
                filled.truncate(cut);
            }
            filled.push_str(newline);
            Ok(filled)
        },
        |candidate| candidate.chars().count(),
    )
}

/// The first `target` wrapped lines, or every line once the count stops
/// growing.
///
/// The trailing newline is not counted in `target`, so zero lines still
/// end with it.
pub fn generate_lines(config: &Config, wrapper: &TextWrapper<'_>, target: usize) -> Result<String> {
    let mut lines = if target == 0 {
        Vec::new()
    } else {
        grow(&config.text, target, |text| wrapper.wrap(text), Vec::len)?
    };
    lines.truncate(target);

    let mut out = lines.join("\n");
    out.push_str(config.newline());
    Ok(out)
}

/// Fill exactly `count` repetitions of the phrase.
pub fn generate_repetitions(
    config: &Config,
    wrapper: &TextWrapper<'_>,
    count: usize,
) -> Result<String> {
    let mut out = wrapper.fill(&repeat_phrase(&config.text, count))?;
    out.push_str(config.newline());
    Ok(out)
}

/// Build candidates from 1, 1 + GROWTH_STEP, ... repetitions of `phrase`
/// until one measures at least `target`, or until growth stalls.
fn grow<C>(
    phrase: &str,
    target: usize,
    mut build: impl FnMut(&str) -> Result<C>,
    measure: impl Fn(&C) -> usize,
) -> Result<C> {
    let mut repetitions = 1;
    let mut previous: Option<(C, usize)> = None;

    loop {
        let candidate = build(&repeat_phrase(phrase, repetitions))?;
        let len = measure(&candidate);
        debug!(repetitions, len, goal = target, "growth iteration");

        if len >= target {
            return Ok(candidate);
        }
        if let Some((last, last_len)) = previous.take() {
            if is_stalled(Some(last_len), len) {
                debug!(repetitions, len, "output stopped growing");
                return Ok(last);
            }
        }

        previous = Some((candidate, len));
        repetitions += GROWTH_STEP;
    }
}
