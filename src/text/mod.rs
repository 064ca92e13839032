//! Character-sequence specializations of the list combinators.

pub mod show;

pub use show::{show_nested, show_opt, show_seq, Show};

use crate::list::{intercalate, map, split_when};

/// Split on `'\n'`.
///
/// A final newline terminates the last line rather than starting an empty
/// one, so `"a\nb\n"` and `"a\nb"` both give `["a", "b"]`. Empty lines in
/// the middle are kept and `'\r'` is left alone.
pub fn lines(s: &str) -> Vec<String> {
    split_terminated(s, '\n')
}

/// Every line followed by `'\n'`.
pub fn unlines<L: AsRef<str>>(lines: &[L]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.as_ref().len() + 1).sum());
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}

/// Split on single `' '` characters, with the same trailing rule as [`lines`].
///
/// Consecutive spaces give empty words.
pub fn words(s: &str) -> Vec<String> {
    split_terminated(s, ' ')
}

/// Join with a single `' '`.
pub fn unwords<W: AsRef<str>>(words: &[W]) -> String {
    let fragments: Vec<Vec<char>> = words.iter().map(|w| w.as_ref().chars().collect()).collect();
    intercalate(&vec![' '], &fragments).into_iter().collect()
}

/// Shift ASCII letters to upper case. Everything else passes through.
pub fn to_upper(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// Shift ASCII letters to lower case. Everything else passes through.
pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

fn split_terminated(s: &str, separator: char) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut fragments = split_when(|&c| c == separator, &chars);
    // split_when always leaves one fragment after the last separator
    if fragments.last().is_some_and(Vec::is_empty) {
        fragments.pop();
    }
    map(|fragment| fragment.iter().collect::<String>(), &fragments)
}
