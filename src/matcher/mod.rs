//! Text-level heuristics for match rows: splitting a row into two
//! participants and picking the time and round tokens out of it.
//!
//! Everything here works on plain strings, so each piece is usable on
//! element text and on free document lines alike.

pub mod normalize;

use crate::error::{HarvestError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

pub use normalize::{clean_leading_name, clean_trailing_name, normalize_text};

pub(crate) static TIME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([01]?[0-9]|2[0-3]):([0-5][0-9])\b").unwrap());

static VERSUS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(.+?)\s+vs?\.?\s+(.+)").unwrap());

static VERSUS_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\svs?\.?\s").unwrap());

static COLUMN_GAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Most words a column may have to pass as a participant name.
const MAX_COLUMN_WORDS: usize = 4;

/// Text of one row in the two shapes the splitters need.
#[derive(Debug, Clone, Copy)]
pub struct RowText<'a> {
    /// Visible text nodes joined by the caller; whitespace runs mark column
    /// boundaries.
    pub raw: &'a str,
    /// `raw` after [`normalize_text`].
    pub normalized: &'a str,
}

/// A strategy that tries to read two participant names out of a row.
pub type PairSplitter = fn(&RowText) -> Option<(String, String)>;

/// Tried in order; the first `Some` wins.
pub const PAIR_SPLITTERS: &[PairSplitter] = &[split_versus, split_columns];

pub fn split_pair(row: &RowText) -> Option<(String, String)> {
    PAIR_SPLITTERS.iter().find_map(|split| split(row))
}

/// `"<a> v <b>"`, `"<a> vs. <b>"` and friends. The first separator wins.
pub fn split_versus(row: &RowText) -> Option<(String, String)> {
    split_on_versus(row.normalized)
}

pub fn split_on_versus(text: &str) -> Option<(String, String)> {
    let caps = VERSUS_REGEX.captures(text)?;
    let (a, b) = (caps.get(1)?, caps.get(2)?);
    Some((a.as_str().to_string(), b.as_str().to_string()))
}

/// Participants laid out as separate columns: the raw text is cut on runs of
/// two or more whitespace characters and the first two short segments are
/// taken as names. Segments that are just a time are skipped.
pub fn split_columns(row: &RowText) -> Option<(String, String)> {
    let segments: Vec<String> = COLUMN_GAP
        .split(row.raw)
        .map(normalize_text)
        .filter(|segment| !segment.is_empty() && !is_time_token(segment))
        .collect();

    match segments.as_slice() {
        [a, b, ..] if word_count(a) <= MAX_COLUMN_WORDS && word_count(b) <= MAX_COLUMN_WORDS => {
            Some((a.clone(), b.clone()))
        }
        _ => None,
    }
}

pub fn has_versus_separator(line: &str) -> bool {
    VERSUS_SEPARATOR.is_match(line)
}

/// First `H:MM`/`HH:MM` time of day in `text`, zero-padded to `HH:MM`.
pub fn find_time(text: &str) -> Option<String> {
    let caps = TIME_REGEX.captures(text)?;
    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute = caps.get(2)?.as_str();
    Some(format!("{:02}:{}", hour, minute))
}

fn is_time_token(text: &str) -> bool {
    TIME_REGEX
        .find(text)
        .is_some_and(|m| m.start() == 0 && m.end() == text.len())
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Finds round / stage words ("Final", "Cuartos", ...) in row text.
#[derive(Debug, Clone)]
pub struct RoundMatcher {
    /// Keyword at the start of a word, anywhere in the row.
    keyword: Option<Regex>,
    /// Whole keyword words closing a name.
    trailing: Option<Regex>,
}

impl RoundMatcher {
    pub fn new(keywords: &[String]) -> Result<Self> {
        let alternatives: Vec<String> = keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(regex::escape)
            .collect();

        if alternatives.is_empty() {
            return Ok(Self {
                keyword: None,
                trailing: None,
            });
        }

        let alternatives = alternatives.join("|");
        let compile = |pattern: String| {
            Regex::new(&pattern)
                .map_err(|e| HarvestError::Config(format!("invalid round keywords: {}", e)))
        };

        Ok(Self {
            keyword: Some(compile(format!(r"(?i)\b(?:{})", alternatives))?),
            trailing: Some(compile(format!(
                r"(?i)(?:[\s:,|·-]*\b(?:{})\b)+[\s:,|·-]*$",
                alternatives
            ))?),
        })
    }

    /// The first keyword hit, as written on the page.
    pub fn find(&self, text: &str) -> Option<String> {
        let regex = self.keyword.as_ref()?;
        regex.find(text).map(|m| m.as_str().to_string())
    }

    /// Drops whole round words at the end of `text`: `"Bob Final"` becomes
    /// `"Bob"`, `"Eva Finalova"` is left alone.
    pub fn strip_trailing<'t>(&self, text: &'t str) -> &'t str {
        match self.trailing.as_ref().and_then(|regex| regex.find(text)) {
            Some(m) => &text[..m.start()],
            None => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_ROUND_KEYWORDS;

    fn row<'a>(raw: &'a str, normalized: &'a str) -> RowText<'a> {
        RowText { raw, normalized }
    }

    #[test]
    fn test_find_time_bounds() {
        assert_eq!(find_time("starts 23:59 tonight").as_deref(), Some("23:59"));
        assert_eq!(find_time("00:00").as_deref(), Some("00:00"));
        assert_eq!(find_time("at 9:05").as_deref(), Some("09:05"));
        assert_eq!(find_time("24:00"), None);
        assert_eq!(find_time("12:60"), None);
        assert_eq!(find_time("no time here"), None);
    }

    #[test]
    fn test_find_time_first_occurrence_wins() {
        assert_eq!(find_time("10:15 then 18:45").as_deref(), Some("10:15"));
    }

    #[test]
    fn test_split_versus_variants() {
        for text in [
            "Alice Smith vs Bob Jones",
            "Alice Smith VS. Bob Jones",
            "Alice Smith v Bob Jones",
            "Alice Smith v. Bob Jones",
        ] {
            let (a, b) = split_versus(&row(text, text)).unwrap();
            assert_eq!(a, "Alice Smith", "{}", text);
            assert_eq!(b, "Bob Jones", "{}", text);
        }
    }

    #[test]
    fn test_split_versus_needs_separate_token() {
        let text = "Alice vanDyke Bob";
        assert!(split_versus(&row(text, text)).is_none());
        assert!(!has_versus_separator(text));
        assert!(has_versus_separator("Player One v Player Two"));
    }

    #[test]
    fn test_split_columns() {
        let raw = "\n   Alice Smith\n   Bob Jones\n   14:30\n";
        let normalized = normalize_text(raw);
        let (a, b) = split_columns(&row(raw, &normalized)).unwrap();
        assert_eq!((a.as_str(), b.as_str()), ("Alice Smith", "Bob Jones"));
    }

    #[test]
    fn test_split_columns_skips_leading_time() {
        let raw = "14:30    Alice Smith    Bob Jones";
        let (a, b) = split_columns(&row(raw, raw)).unwrap();
        assert_eq!((a.as_str(), b.as_str()), ("Alice Smith", "Bob Jones"));
    }

    #[test]
    fn test_split_columns_rejects_long_segments() {
        let raw = "one two three four five    Bob Jones";
        assert!(split_columns(&row(raw, raw)).is_none());
        assert!(split_columns(&row("Alice Smith", "Alice Smith")).is_none());
    }

    #[test]
    fn test_split_pair_prefers_versus() {
        let raw = "Alice v Bob    Carol    Dan";
        let normalized = normalize_text(raw);
        let (a, b) = split_pair(&row(raw, &normalized)).unwrap();
        assert_eq!(a, "Alice");
        assert_eq!(b, "Bob Carol Dan");
    }

    #[test]
    fn test_round_matcher() {
        let keywords: Vec<String> = DEFAULT_ROUND_KEYWORDS.iter().map(|s| s.to_string()).collect();
        let rounds = RoundMatcher::new(&keywords).unwrap();

        assert_eq!(rounds.find("A vs B Final").as_deref(), Some("Final"));
        assert_eq!(rounds.find("A vs B semifinales").as_deref(), Some("semifinal"));
        assert_eq!(rounds.find("Quarterfinals").as_deref(), Some("Quarterfinal"));
        assert_eq!(rounds.find("Cuartos de final").as_deref(), Some("Cuartos"));
        assert_eq!(rounds.find("Background check"), None);
    }

    #[test]
    fn test_strip_trailing_whole_words_only() {
        let keywords: Vec<String> = DEFAULT_ROUND_KEYWORDS.iter().map(|s| s.to_string()).collect();
        let rounds = RoundMatcher::new(&keywords).unwrap();

        assert_eq!(rounds.strip_trailing("Bob Jones Final"), "Bob Jones");
        assert_eq!(rounds.strip_trailing("Bob Jones - Ronda Final"), "Bob Jones");
        assert_eq!(rounds.strip_trailing("Eva Finalova"), "Eva Finalova");
        assert_eq!(rounds.strip_trailing("Ronda Smith"), "Ronda Smith");
    }

    #[test]
    fn test_empty_round_matcher_matches_nothing() {
        let rounds = RoundMatcher::new(&[]).unwrap();
        assert_eq!(rounds.find("Final"), None);
        assert_eq!(rounds.strip_trailing("Eva Final"), "Eva Final");
    }
}
