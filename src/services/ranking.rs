use crate::domain::MatchCandidate;
use chrono::NaiveTime;
use tracing::debug;

/// Orders matches by time of day, then `player_a`, then `player_b`. Stable.
///
/// Records without a usable time sort as midnight, ahead of everything else.
pub fn rank(mut candidates: Vec<MatchCandidate>) -> Vec<MatchCandidate> {
    let unparsed = candidates
        .iter()
        .filter(|c| c.approx_time.is_some() && time_of_day(c).is_none())
        .count();
    if unparsed > 0 {
        debug!("{} matches have an unreadable time, ranking them first", unparsed);
    }

    candidates.sort_by(|a, b| rank_key(a).cmp(&rank_key(b)));
    candidates
}

fn rank_key(candidate: &MatchCandidate) -> (NaiveTime, &str, &str) {
    (
        time_of_day(candidate).unwrap_or(NaiveTime::MIN),
        candidate.player_a.as_str(),
        candidate.player_b.as_str(),
    )
}

fn time_of_day(candidate: &MatchCandidate) -> Option<NaiveTime> {
    let time = candidate.approx_time.as_deref()?;
    NaiveTime::parse_from_str(time, "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(time: &str, a: &str, b: &str) -> MatchCandidate {
        MatchCandidate {
            approx_time: (!time.is_empty()).then(|| time.to_string()),
            player_a: a.to_string(),
            player_b: b.to_string(),
            extra_label: None,
        }
    }

    fn order(rows: &[MatchCandidate]) -> Vec<(&str, &str)> {
        rows.iter()
            .map(|r| (r.approx_time_str(), r.player_a.as_str()))
            .collect()
    }

    #[test]
    fn test_missing_time_sorts_first() {
        let ranked = rank(vec![
            row("09:00", "Ana", "Eva"),
            row("", "Zoe", "Kim"),
            row("08:15", "Lia", "Mia"),
        ]);

        assert_eq!(
            order(&ranked),
            vec![("", "Zoe"), ("08:15", "Lia"), ("09:00", "Ana")]
        );
    }

    #[test]
    fn test_names_break_ties() {
        let ranked = rank(vec![
            row("10:00", "Marta", "Zoe"),
            row("10:00", "Marta", "Ana"),
            row("10:00", "Beatriz", "Eva"),
            row("", "Carla", "Nora"),
            row("", "Alba", "Nora"),
        ]);

        let pairs: Vec<(&str, &str)> = ranked
            .iter()
            .map(|r| (r.player_a.as_str(), r.player_b.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Alba", "Nora"),
                ("Carla", "Nora"),
                ("Beatriz", "Eva"),
                ("Marta", "Ana"),
                ("Marta", "Zoe"),
            ]
        );
    }

    #[test]
    fn test_unreadable_time_falls_back_to_midnight() {
        let ranked = rank(vec![
            row("07:30", "Ana", "Eva"),
            row("7h30", "Bea", "Eva"),
            row("00:00", "Cai", "Eva"),
        ]);

        assert_eq!(
            order(&ranked),
            vec![("7h30", "Bea"), ("00:00", "Cai"), ("07:30", "Ana")]
        );
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let mut first = row("12:00", "Ana", "Eva");
        first.extra_label = Some("Final".to_string());
        let second = row("12:00", "Ana", "Eva");

        let ranked = rank(vec![first.clone(), second.clone()]);
        assert_eq!(ranked, vec![first, second]);
    }
}
