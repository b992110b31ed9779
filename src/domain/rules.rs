use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Class names sportsbook front-ends put on event rows, markets and
/// participants.
pub const DEFAULT_CLASS_TOKENS: &[&str] = &[
    "event",
    "event-card",
    "market",
    "coupon",
    "selection",
    "match",
    "KambiBC-event",
    "EventGroup",
    "EventItem",
    "participant",
    "src-EventMarket",
];

/// Generic row-like elements scanned after the class tokens.
pub const ROW_SELECTOR: &str = "[role=row], [role=listitem], article, li";

/// Round / stage words, English and Spanish. Matched case-insensitively at
/// the start of a word.
pub const DEFAULT_ROUND_KEYWORDS: &[&str] = &[
    "Semifinal",
    "Quarterfinal",
    "Quarter",
    "Final",
    "Round",
    "Ronda",
    "Cuartos",
    "Octavos",
    "Dieciseisavos",
    "Qualifying",
    "Clasificación",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRules {
    #[serde(default = "default_class_tokens")]
    pub class_tokens: Vec<String>,
    #[serde(default = "default_round_keywords")]
    pub round_keywords: Vec<String>,
}

fn default_class_tokens() -> Vec<String> {
    DEFAULT_CLASS_TOKENS.iter().map(|s| s.to_string()).collect()
}

fn default_round_keywords() -> Vec<String> {
    DEFAULT_ROUND_KEYWORDS.iter().map(|s| s.to_string()).collect()
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self {
            class_tokens: default_class_tokens(),
            round_keywords: default_round_keywords(),
        }
    }
}

impl ExtractionRules {
    /// Reads a JSON rules file. Missing keys keep the built-in lists.
    pub fn load(path: &Path) -> Result<Self> {
        let rules: Self = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        info!(
            "Loaded extraction rules from {:?}: {} class tokens, {} round keywords",
            path,
            rules.class_tokens.len(),
            rules.round_keywords.len()
        );
        Ok(rules)
    }
}
