//! Property-based tests for the length-targeting generator.
//!
//! Uses proptest to verify size invariants across widths and targets.

use lorem::{Config, Target, TextWrapper, WrapOptions, generate};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn width() -> impl Strategy<Value = usize> {
    10usize..=120
}

fn sized(target: Target, width: usize, newline: bool) -> Config {
    Config::new(target)
        .with_wrap(WrapOptions::new(width))
        .with_trailing_newline(newline)
}

// ============================================================================
// Size Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Byte mode always hits the requested length exactly.
    #[test]
    fn bytes_are_exact(n in 0u64..3000, width in width(), newline in any::<bool>()) {
        let out = generate(&sized(Target::Bytes(n), width, newline)).unwrap();
        prop_assert_eq!(out.len() as u64, n);
        if n > 0 {
            prop_assert_eq!(out.last() == Some(&b'\n'), newline);
        }
    }

    /// Char mode counts characters, also for multi-byte phrases.
    #[test]
    fn chars_are_exact(n in 0u64..1500, width in width(), newline in any::<bool>()) {
        let config = sized(Target::Chars(n), width, newline).with_text("ça va très bien");
        let out = String::from_utf8(generate(&config).unwrap()).unwrap();
        prop_assert_eq!(out.chars().count() as u64, n);
    }

    /// Line mode yields N lines, each within the width.
    #[test]
    fn lines_are_exact_and_fit(n in 0u64..80, width in width()) {
        let out = String::from_utf8(generate(&sized(Target::Lines(n), width, true)).unwrap()).unwrap();
        prop_assert!(out.ends_with('\n'));
        if n == 0 {
            prop_assert_eq!(out.as_str(), "\n");
        } else {
            prop_assert_eq!(out.lines().count() as u64, n);
        }
        for line in out.lines() {
            prop_assert!(line.chars().count() <= width, "line too wide: {:?}", line);
        }
    }

    /// All but the last output line match the wrapped repetition stream; the
    /// last one may end where its candidate's text ended.
    #[test]
    fn lines_are_a_wrapped_prefix(n in 1u64..40, width in width()) {
        let config = sized(Target::Lines(n), width, false);
        let out = String::from_utf8(generate(&config).unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        let stream = TextWrapper::new(&config.wrap)
            .wrap(&lorem::repeat_phrase(&config.text, 200))
            .unwrap();

        let full = n as usize - 1;
        prop_assert_eq!(&lines[..full], &stream[..full]);
        prop_assert!(stream[full].starts_with(lines[full]));
    }

    /// Toggling the trailing newline adds exactly one newline in repetition mode.
    #[test]
    fn newline_toggle_adds_one_byte(count in 0u64..6, width in width()) {
        let with = generate(&sized(Target::Repetitions(count), width, true)).unwrap();
        let without = generate(&sized(Target::Repetitions(count), width, false)).unwrap();
        prop_assert_eq!(with.len(), without.len() + 1);
        prop_assert!(with.starts_with(&without));
    }
}
