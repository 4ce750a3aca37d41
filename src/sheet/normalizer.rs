use std::collections::HashSet;

use tracing::{debug, warn};

use crate::constants::UNSET_SENTINEL;
use crate::sheet::schema::{ColumnMap, Field};
use crate::types::ShopRecord;

/// Canonicalize a sheet id cell: trim surrounding whitespace and drop
/// the trailing ".0" a numeric column picks up from spreadsheet
/// formatting.
pub fn canonical_id(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.strip_suffix(".0") {
        Some(head) if !head.is_empty() && head.chars().all(|c| c.is_ascii_digit()) => {
            head.to_string()
        }
        _ => trimmed.to_string(),
    }
}

fn cell<'a>(row: &'a [String], map: &ColumnMap, field: Field) -> &'a str {
    map.index_of(field)
        .and_then(|index| row.get(index))
        .map(|value| value.trim())
        .unwrap_or("")
}

fn cell_or_sentinel(row: &[String], map: &ColumnMap, field: Field) -> String {
    let value = cell(row, map, field);
    if value.is_empty() {
        UNSET_SENTINEL.to_string()
    } else {
        value.to_string()
    }
}

/// Build shop records from the data rows below the header, in row order.
///
/// Drops blank rows, rows without a name, and a stray copy of the
/// header row appearing as data. Duplicate ids are kept (lookups take
/// the first) but flagged as a data-quality warning.
pub fn build_records(rows: &[Vec<String>], header_index: usize, map: &ColumnMap) -> Vec<ShopRecord> {
    let mut records = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for row in rows.iter().skip(header_index + 1) {
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }

        let name = cell(row, map, Field::Name);
        if name.is_empty() {
            debug!("Dropping row with empty name");
            continue;
        }
        if name == map.name_label() {
            debug!("Dropping header row repeated as data");
            continue;
        }

        let id = canonical_id(cell(row, map, Field::Id));
        if !id.is_empty() && !seen_ids.insert(id.clone()) {
            warn!(%id, "Duplicate shop id in sheet; lookups return the first row");
        }

        records.push(ShopRecord {
            id,
            name: name.to_string(),
            image_url: cell_or_sentinel(row, map, Field::ImageUrl),
            status: cell_or_sentinel(row, map, Field::Status),
            message: cell_or_sentinel(row, map, Field::Message),
            recommendation: cell_or_sentinel(row, map, Field::Recommendation),
            ec_url: cell_or_sentinel(row, map, Field::EcUrl),
            map_url: cell_or_sentinel(row, map, Field::MapUrl),
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColumnStrategy;
    use crate::sheet::parser::parse_rows;

    fn records_from(csv_text: &str, strategy: ColumnStrategy) -> Vec<ShopRecord> {
        let rows = parse_rows(csv_text).unwrap();
        let map = ColumnMap::resolve(&rows[0], strategy).unwrap();
        build_records(&rows, 0, &map)
    }

    #[test]
    fn test_canonical_id() {
        assert_eq!(canonical_id("101.0"), "101");
        assert_eq!(canonical_id(" 101.0 "), "101");
        assert_eq!(canonical_id("101"), "101");
        assert_eq!(canonical_id(" 7 "), "7");
        // Only numeric-looking values lose the suffix
        assert_eq!(canonical_id("v2.0"), "v2.0");
        assert_eq!(canonical_id(".0"), ".0");
        assert_eq!(canonical_id(""), "");
    }

    #[test]
    fn test_full_row_normalization() {
        let csv_text = "ID,店名,画像URL,状況,メッセージ,おすすめ,通販URL,地図URL\n\
                        101.0,Test Shop,http://x/img.png,営業中,Hello,Special Item,http://x/ec,http://x/map\n";
        let records = records_from(csv_text, ColumnStrategy::ByHeaderName);
        assert_eq!(records.len(), 1);
        let shop = &records[0];
        assert_eq!(shop.id, "101");
        assert_eq!(shop.name, "Test Shop");
        assert_eq!(shop.status, "営業中");
        assert_eq!(shop.recommendation, "Special Item");
        assert_eq!(shop.map_url, "http://x/map");
    }

    #[test]
    fn test_missing_fields_become_sentinel() {
        let csv_text = "ID,店名,画像URL\n1,酒屋,\n";
        let records = records_from(csv_text, ColumnStrategy::ByHeaderName);
        assert_eq!(records[0].image_url, UNSET_SENTINEL);
        assert_eq!(records[0].status, UNSET_SENTINEL);
        assert_eq!(records[0].ec_url, UNSET_SENTINEL);
    }

    #[test]
    fn test_blank_and_nameless_rows_dropped() {
        let csv_text = "ID,店名,状況\n,,\n1,,閉店\n2,パン屋,営業中\n";
        let records = records_from(csv_text, ColumnStrategy::ByHeaderName);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "パン屋");
    }

    #[test]
    fn test_repeated_header_row_dropped() {
        let csv_text = "ID,店名,状況\nID,店名,状況\n1,酒屋,営業中\n";
        let records = records_from(csv_text, ColumnStrategy::ByHeaderName);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "酒屋");
    }

    #[test]
    fn test_duplicate_ids_kept_in_row_order() {
        let csv_text = "ID,店名\n1,酒屋\n1,パン屋\n";
        let records = records_from(csv_text, ColumnStrategy::ByHeaderName);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "酒屋");
        assert_eq!(records[1].name, "パン屋");
    }

    #[test]
    fn test_by_position_short_row_sentinel_fills() {
        let csv_text = "番号,名前,写真,いま,ひとこと,イチオシ,通販,地図\n5.0,酒屋,,営業中\n";
        let records = records_from(csv_text, ColumnStrategy::ByPosition);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "5");
        assert_eq!(records[0].name, "酒屋");
        assert_eq!(records[0].status, "営業中");
        assert_eq!(records[0].image_url, UNSET_SENTINEL);
        assert_eq!(records[0].map_url, UNSET_SENTINEL);
    }

    #[test]
    fn test_cells_are_trimmed() {
        let csv_text = "ID,店名,状況\n 8 , 酒屋 , 営業中 \n";
        let records = records_from(csv_text, ColumnStrategy::ByHeaderName);
        assert_eq!(records[0].id, "8");
        assert_eq!(records[0].name, "酒屋");
        assert_eq!(records[0].status, "営業中");
    }
}
