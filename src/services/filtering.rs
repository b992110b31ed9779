use crate::domain::MatchCandidate;
use chrono::NaiveDate;
use tracing::debug;

/// Keeps the matches played on `target`.
///
/// Listing rows carry a time of day but no date, so every row is kept.
// TODO: filter once rows carry the date header they are listed under.
pub fn filter_by_target_date(
    rows: Vec<MatchCandidate>,
    target: Option<NaiveDate>,
) -> Vec<MatchCandidate> {
    if let Some(date) = target {
        debug!("Target date {} requested, keeping all {} rows", date, rows.len());
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_pass_through() {
        let rows = vec![MatchCandidate {
            approx_time: Some("10:00".to_string()),
            player_a: "Ana Lopez".to_string(),
            player_b: "Eva Ruiz".to_string(),
            extra_label: None,
        }];

        let date = NaiveDate::from_ymd_opt(2025, 11, 1);
        assert_eq!(filter_by_target_date(rows.clone(), date), rows);
        assert_eq!(filter_by_target_date(rows.clone(), None), rows);
    }
}
