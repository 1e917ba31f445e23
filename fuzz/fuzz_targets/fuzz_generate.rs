//! Fuzz target for the length-targeting generator.
//!
//! Any phrase, width and size must terminate, and sized output may never
//! overshoot its target.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lorem::{Config, Target, WrapOptions, generate};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    phrase: &'a str,
    width: u8,
    size: u16,
    unit: u8,
    trailing_newline: bool,
}

fuzz_target!(|input: Input<'_>| {
    let size = u64::from(input.size);
    let target = match input.unit % 4 {
        0 => Target::Bytes(size),
        1 => Target::Chars(size),
        2 => Target::Lines(size % 64),
        _ => Target::Repetitions(size % 16),
    };
    let config = Config::new(target)
        .with_text(input.phrase)
        .with_wrap(WrapOptions::new(usize::from(input.width)))
        .with_trailing_newline(input.trailing_newline);

    let Ok(out) = generate(&config) else {
        return;
    };

    match target {
        Target::Bytes(n) => assert!(out.len() as u64 <= n),
        Target::Chars(n) => {
            let chars = String::from_utf8_lossy(&out).chars().count() as u64;
            assert!(chars <= n);
        }
        _ => {}
    }
});
