//! Fuzz target for the paragraph wrapper.
//!
//! Arbitrary text and options must never panic or hang. For printable ASCII
//! with long-word breaking on, no line may exceed the width.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lorem::{TextWrapper, WrapOptions};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    width: u8,
    initial_indent: &'a str,
    subsequent_indent: &'a str,
    tab_size: u8,
    flags: u8,
    max_lines: Option<u8>,
    placeholder: &'a str,
}

fn printable(s: &str) -> bool {
    s.bytes().all(|b| (b' '..=b'~').contains(&b))
}

fuzz_target!(|input: Input<'_>| {
    let options = WrapOptions {
        width: usize::from(input.width),
        initial_indent: input.initial_indent.to_string(),
        subsequent_indent: input.subsequent_indent.to_string(),
        expand_tabs: input.flags & 1 != 0,
        tab_size: usize::from(input.tab_size),
        replace_whitespace: input.flags & 2 != 0,
        fix_sentence_endings: input.flags & 4 != 0,
        break_long_words: input.flags & 8 != 0,
        break_on_hyphens: input.flags & 16 != 0,
        drop_whitespace: input.flags & 32 != 0,
        max_lines: input.max_lines.map(usize::from),
        placeholder: input.placeholder.to_string(),
    };

    let Ok(lines) = TextWrapper::new(&options).wrap(input.text) else {
        return;
    };

    let ascii = printable(input.text)
        && printable(&options.initial_indent)
        && printable(&options.subsequent_indent)
        && printable(&options.placeholder);
    let indents_fit = options.initial_indent.len() < options.width
        && options.subsequent_indent.len() < options.width;
    if ascii && indents_fit && options.break_long_words {
        for line in &lines {
            assert!(
                line.len() <= options.width,
                "line {line:?} wider than {}",
                options.width
            );
        }
    }
});
