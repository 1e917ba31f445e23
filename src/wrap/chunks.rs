//! Whitespace munging and chunk splitting ahead of line filling.
//!
//! Text is cut into an alternating sequence of whitespace runs and words.
//! With hyphen breaking enabled, hyphenated words ("goof-ball") split after
//! the hyphen and em-dashes ("there--you") become chunks of their own.

use super::WrapOptions;

/// Characters treated as whitespace when splitting and replacing.
const WHITESPACE: [char; 6] = ['\t', '\n', '\x0b', '\x0c', '\r', ' '];

#[inline]
fn is_space(c: char) -> bool {
    WHITESPACE.contains(&c)
}

#[inline]
fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Word character that is not a digit.
#[inline]
fn is_letter(c: char) -> bool {
    is_word(c) && !c.is_numeric()
}

/// Characters allowed right before an em-dash.
#[inline]
fn is_word_punct(c: char) -> bool {
    is_word(c) || matches!(c, '!' | '"' | '\'' | '&' | '.' | ',' | '?')
}

/// Expand tabs and flatten whitespace per the options.
pub(crate) fn munge_whitespace(text: &str, options: &WrapOptions) -> String {
    let expanded = if options.expand_tabs && text.contains('\t') {
        expand_tabs(text, options.tab_size)
    } else {
        text.to_string()
    };

    if options.replace_whitespace {
        expanded
            .chars()
            .map(|c| if is_space(c) { ' ' } else { c })
            .collect()
    } else {
        expanded
    }
}

/// Replace each tab with spaces up to the next multiple of `tab_size`.
///
/// Columns count characters and restart after `\n` or `\r`. A tab size of
/// zero removes tabs.
pub(crate) fn expand_tabs(text: &str, tab_size: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0usize;
    for c in text.chars() {
        match c {
            '\t' => {
                if tab_size > 0 {
                    let pad = tab_size - column % tab_size;
                    out.extend(std::iter::repeat_n(' ', pad));
                    column += pad;
                }
            }
            '\n' | '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

/// Split munged text into whitespace and word chunks.
pub(crate) fn split_chunks(text: &str, break_on_hyphens: bool) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let space = is_space(chars[pos]);
        let run_end = chars[pos..]
            .iter()
            .position(|&c| is_space(c) != space)
            .map_or(chars.len(), |offset| pos + offset);

        if space || !break_on_hyphens {
            chunks.push(chars[pos..run_end].iter().collect());
        } else {
            split_word(&chars, pos, run_end, &mut chunks);
        }
        pos = run_end;
    }

    chunks
}

/// Split one whitespace-free run `chars[start..end]` at hyphens and em-dashes.
fn split_word(chars: &[char], start: usize, end: usize, chunks: &mut Vec<String>) {
    let mut pos = start;
    while pos < end {
        let chunk_end = match em_dash_len(chars, pos) {
            Some(len) if pos > 0 && is_word_punct(chars[pos - 1]) => pos + len,
            _ => word_end(chars, pos, end),
        };
        chunks.push(chars[pos..chunk_end].iter().collect());
        pos = chunk_end;
    }
}

/// Shortest non-empty word starting at `pos` that ends at a breakable
/// hyphen, at the end of the run, or right before an em-dash.
fn word_end(chars: &[char], pos: usize, end: usize) -> usize {
    let mut k = pos + 1;
    while k < end {
        if chars[k] == '-' && hyphen_breaks(chars, k) {
            return k + 1;
        }
        if is_word_punct(chars[k - 1]) && em_dash_len(chars, k).is_some() {
            return k;
        }
        k += 1;
    }
    end
}

/// Whether the hyphen at `at` sits inside a hyphenated word: two letters
/// (or letter-hyphen-letter) before it and a letter, optionally hyphen, and
/// letter after it.
fn hyphen_breaks(chars: &[char], at: usize) -> bool {
    let letter = |i: usize| chars.get(i).is_some_and(|&c| is_letter(c));

    let behind = (at >= 2 && letter(at - 1) && letter(at - 2))
        || (at >= 3 && letter(at - 1) && chars[at - 2] == '-' && letter(at - 3));
    if !behind {
        return false;
    }

    letter(at + 1)
        && (letter(at + 2) || (chars.get(at + 2) == Some(&'-') && letter(at + 3)))
}

/// Length of an em-dash (two or more hyphens followed by a word character)
/// starting at `at`.
fn em_dash_len(chars: &[char], at: usize) -> Option<usize> {
    let len = chars[at..].iter().take_while(|&&c| c == '-').count();
    let followed_by_word = chars.get(at + len).is_some_and(|&c| is_word(c));
    (len >= 2 && followed_by_word).then_some(len)
}

/// Widen single spaces after sentence ends to two spaces.
pub(crate) fn fix_sentence_endings(chunks: &mut [String]) {
    let mut i = 0;
    while i + 1 < chunks.len() {
        if chunks[i + 1] == " " && ends_sentence(&chunks[i]) {
            chunks[i + 1] = "  ".to_string();
            i += 2;
        } else {
            i += 1;
        }
    }
}

/// Lowercase letter, then `.`, `!` or `?`, then an optional closing quote.
fn ends_sentence(chunk: &str) -> bool {
    let mut rev = chunk.chars().rev();
    let mut last = rev.next();
    if matches!(last, Some('"' | '\'')) {
        last = rev.next();
    }
    matches!(last, Some('.' | '!' | '?')) && rev.next().is_some_and(|c| c.is_ascii_lowercase())
}
