use crate::config::OutputFormat;
use crate::domain::MatchCandidate;
use crate::error::Result;
use rust_xlsxwriter::{Format, Workbook};
use std::path::{Path, PathBuf};
use tracing::info;

pub const SHEET_NAME: &str = "Matches";

pub const HEADERS: [&str; 4] = ["approx_time", "player_a", "player_b", "extra_label"];

const COLUMN_WIDTHS: [f64; 4] = [12.0, 32.0, 32.0, 16.0];

/// Single-sheet workbook: a bold header row, then one row per match in the
/// given order. Absent times and labels are left blank.
pub fn to_xlsx_bytes(rows: &[MatchCandidate]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        worksheet.set_column_width(col as u16, COLUMN_WIDTHS[col])?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    for (i, row) in rows.iter().enumerate() {
        let values = [
            row.approx_time_str(),
            row.player_a.as_str(),
            row.player_b.as_str(),
            row.extra_label_str(),
        ];
        for (col, value) in values.into_iter().enumerate() {
            if !value.is_empty() {
                worksheet.write_string(i as u32 + 1, col as u16, value)?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

pub fn to_json(rows: &[MatchCandidate]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

pub fn write_output(rows: &[MatchCandidate], format: OutputFormat, path: &Path) -> Result<PathBuf> {
    match format {
        OutputFormat::Xlsx => std::fs::write(path, to_xlsx_bytes(rows)?)?,
        OutputFormat::Json => std::fs::write(path, to_json(rows)?)?,
    }

    info!("Wrote {} matches to {:?}", rows.len(), path);
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<MatchCandidate> {
        vec![
            MatchCandidate {
                approx_time: None,
                player_a: "Ana Lopez".to_string(),
                player_b: "Eva Ruiz".to_string(),
                extra_label: None,
            },
            MatchCandidate {
                approx_time: Some("14:30".to_string()),
                player_a: "Alice Smith".to_string(),
                player_b: "Bob Jones".to_string(),
                extra_label: Some("Final".to_string()),
            },
        ]
    }

    #[test]
    fn test_xlsx_is_a_zip_container() {
        let bytes = to_xlsx_bytes(&rows()).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_xlsx_with_no_rows() {
        let bytes = to_xlsx_bytes(&[]).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_json_writes_every_field() {
        let json = to_json(&rows()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        for header in HEADERS {
            assert!(value[0].get(header).is_some(), "{}", header);
        }
        assert_eq!(value[0]["approx_time"], "");
        assert_eq!(value[0]["extra_label"], "");
        assert_eq!(value[1]["approx_time"], "14:30");
        assert_eq!(value[1]["extra_label"], "Final");
    }
}
