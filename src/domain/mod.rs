mod match_candidate;
mod rules;

pub use match_candidate::{is_plausible_name, MatchCandidate, MatchKey, MatchSet, NAME_LENGTH};
pub use rules::{ExtractionRules, DEFAULT_CLASS_TOKENS, DEFAULT_ROUND_KEYWORDS, ROW_SELECTOR};
