use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Accepted participant name length, in characters.
pub const NAME_LENGTH: RangeInclusive<usize> = 2..=60;

/// One tennis match as read off a listing page.
///
/// Serialized with all four fields; an absent time or label is written as
/// `""` and read back as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    #[serde(default, with = "blank_as_none")]
    pub approx_time: Option<String>,
    pub player_a: String,
    pub player_b: String,
    #[serde(default, with = "blank_as_none")]
    pub extra_label: Option<String>,
}

mod blank_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.filter(|v| !v.is_empty()))
    }
}

/// `(approx_time or "", player_a, player_b)`
pub type MatchKey = (String, String, String);

impl MatchCandidate {
    /// Builds a candidate, or `None` when either name falls outside
    /// [`NAME_LENGTH`].
    pub fn new(
        approx_time: Option<String>,
        player_a: String,
        player_b: String,
        extra_label: Option<String>,
    ) -> Option<Self> {
        if !is_plausible_name(&player_a) || !is_plausible_name(&player_b) {
            return None;
        }

        Some(Self {
            approx_time,
            player_a,
            player_b,
            extra_label,
        })
    }

    pub fn key(&self) -> MatchKey {
        (
            self.approx_time.clone().unwrap_or_default(),
            self.player_a.clone(),
            self.player_b.clone(),
        )
    }

    pub fn approx_time_str(&self) -> &str {
        self.approx_time.as_deref().unwrap_or("")
    }

    pub fn extra_label_str(&self) -> &str {
        self.extra_label.as_deref().unwrap_or("")
    }
}

pub fn is_plausible_name(name: &str) -> bool {
    NAME_LENGTH.contains(&name.chars().count())
}

/// Insertion-ordered collection that keeps the first candidate per
/// [`MatchKey`].
#[derive(Debug, Default)]
pub struct MatchSet {
    seen: FxHashSet<MatchKey>,
    rows: Vec<MatchCandidate>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if a candidate with the same key was already kept.
    pub fn push(&mut self, candidate: MatchCandidate) -> bool {
        if !self.seen.insert(candidate.key()) {
            return false;
        }
        self.rows.push(candidate);
        true
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_vec(self) -> Vec<MatchCandidate> {
        self.rows
    }
}

impl Extend<MatchCandidate> for MatchSet {
    fn extend<I: IntoIterator<Item = MatchCandidate>>(&mut self, iter: I) {
        for candidate in iter {
            self.push(candidate);
        }
    }
}

impl FromIterator<MatchCandidate> for MatchSet {
    fn from_iter<I: IntoIterator<Item = MatchCandidate>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
