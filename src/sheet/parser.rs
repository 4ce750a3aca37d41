use csv::ReaderBuilder;
use tracing::debug;

use crate::config::HeaderRule;
use crate::constants::HEADER_MARKER;
use crate::error::{PortalError, Result};

/// Parse raw CSV text into rows of cells.
///
/// The export carries a variable number of leading descriptive rows
/// before the real header, so the reader treats nothing as a header and
/// accepts rows of unequal width.
pub fn parse_rows(csv_text: &str) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }
    Ok(rows)
}

/// Locate the header row according to the configured rule.
pub fn find_header_row(rows: &[Vec<String>], rule: HeaderRule) -> Result<usize> {
    match rule {
        HeaderRule::Offset { row } => {
            if row < rows.len() {
                Ok(row)
            } else {
                Err(PortalError::Schema(format!(
                    "configured header row {} is past the end of the sheet ({} rows)",
                    row,
                    rows.len()
                )))
            }
        }
        HeaderRule::Scan => {
            let index = rows
                .iter()
                .position(|row| {
                    row.iter()
                        .any(|cell| cell.trim().eq_ignore_ascii_case(HEADER_MARKER))
                })
                .ok_or_else(|| {
                    PortalError::Schema(format!(
                        "no header row containing '{}' found",
                        HEADER_MARKER.to_uppercase()
                    ))
                })?;
            debug!("Header row located at index {}", index);
            Ok(index)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uneven_rows() {
        let csv_text = "このシートについて\n,,\nID,店名,状況\n1,酒屋,営業中\n";
        let rows = parse_rows(csv_text).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], vec!["このシートについて"]);
        assert_eq!(rows[2], vec!["ID", "店名", "状況"]);
    }

    #[test]
    fn test_scan_skips_leading_rows() {
        let rows = parse_rows("お知らせ,\n更新日,2020-05-01\nID,店名\n1,酒屋\n").unwrap();
        assert_eq!(find_header_row(&rows, HeaderRule::Scan).unwrap(), 2);
    }

    #[test]
    fn test_scan_matches_marker_case_insensitively() {
        let rows = parse_rows("id,name\n1,Bakery\n").unwrap();
        assert_eq!(find_header_row(&rows, HeaderRule::Scan).unwrap(), 0);
    }

    #[test]
    fn test_scan_without_marker_is_schema_error() {
        let rows = parse_rows("番号,店名\n1,酒屋\n").unwrap();
        let result = find_header_row(&rows, HeaderRule::Scan);
        assert!(matches!(result, Err(PortalError::Schema(_))));
    }

    #[test]
    fn test_offset_rule() {
        let rows = parse_rows("説明,\nID,店名\n1,酒屋\n").unwrap();
        assert_eq!(find_header_row(&rows, HeaderRule::Offset { row: 1 }).unwrap(), 1);
        assert!(matches!(
            find_header_row(&rows, HeaderRule::Offset { row: 9 }),
            Err(PortalError::Schema(_))
        ));
    }
}
