use super::{RoundMatcher, TIME_REGEX};
use unicode_normalization::UnicodeNormalization;

const NAME_SEPARATORS: [char; 5] = [':', '-', '|', ',', '·'];

/// Composes accents (NFC) and collapses every whitespace run to a single
/// space, trimming both ends.
pub fn normalize_text(text: &str) -> String {
    text.nfc()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// First participant: the row may open with the start time, which is
/// dropped. Everything else is kept as written.
pub fn clean_leading_name(raw: &str) -> String {
    trim_separators(&normalize_text(&TIME_REGEX.replace_all(raw, " ")))
}

/// Second participant: the name runs up to the first time token, and whole
/// round words closing it ("... Bob Jones Final") are dropped.
pub fn clean_trailing_name(raw: &str, rounds: &RoundMatcher) -> String {
    let head = TIME_REGEX
        .split(raw)
        .find(|part| !part.trim().is_empty())
        .unwrap_or("");

    trim_separators(&normalize_text(rounds.strip_trailing(head)))
}

fn trim_separators(name: &str) -> String {
    name.trim_matches(NAME_SEPARATORS).trim().to_string()
}
