use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::config::ColumnStrategy;
use crate::error::{PortalError, Result};

/// Canonical shop attributes, independent of the sheet's column naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    ImageUrl,
    Status,
    Message,
    Recommendation,
    EcUrl,
    MapUrl,
}

/// Column order assumed by the positional strategy.
pub const POSITIONAL_ORDER: [Field; 8] = [
    Field::Id,
    Field::Name,
    Field::ImageUrl,
    Field::Status,
    Field::Message,
    Field::Recommendation,
    Field::EcUrl,
    Field::MapUrl,
];

/// Source header text (trimmed, lowercased) to canonical field. Covers
/// the sheet template's Japanese labels plus ASCII fallbacks for sheets
/// edited outside the template.
static HEADER_ALIASES: Lazy<HashMap<&'static str, Field>> = Lazy::new(|| {
    HashMap::from([
        ("id", Field::Id),
        ("店名", Field::Name),
        ("画像url", Field::ImageUrl),
        ("状況", Field::Status),
        ("メッセージ", Field::Message),
        ("おすすめ", Field::Recommendation),
        ("通販url", Field::EcUrl),
        ("地図url", Field::MapUrl),
        ("name", Field::Name),
        ("image_url", Field::ImageUrl),
        ("status", Field::Status),
        ("message", Field::Message),
        ("recommendation", Field::Recommendation),
        ("ec_url", Field::EcUrl),
        ("map_url", Field::MapUrl),
    ])
});

/// Resolved mapping from canonical fields to source column indices.
///
/// Also remembers the source label of the name column, so the
/// normalizer can drop a stray header row repeated as data.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    columns: HashMap<Field, usize>,
    name_label: String,
}

impl ColumnMap {
    pub fn resolve(header: &[String], strategy: ColumnStrategy) -> Result<Self> {
        match strategy {
            ColumnStrategy::ByHeaderName => Self::by_header_name(header),
            ColumnStrategy::ByPosition => Self::by_position(header),
        }
    }

    fn by_header_name(header: &[String]) -> Result<Self> {
        let mut columns = HashMap::new();
        let mut name_label = String::new();

        for (index, cell) in header.iter().enumerate() {
            let trimmed = cell.trim();
            if let Some(&field) = HEADER_ALIASES.get(trimmed.to_lowercase().as_str()) {
                // First occurrence wins when a label repeats
                if columns.contains_key(&field) {
                    continue;
                }
                columns.insert(field, index);
                if field == Field::Name {
                    name_label = trimmed.to_string();
                }
            }
        }

        if !columns.contains_key(&Field::Name) {
            return Err(PortalError::Schema(
                "required column 'name' not found in header".to_string(),
            ));
        }

        Ok(Self { columns, name_label })
    }

    fn by_position(header: &[String]) -> Result<Self> {
        // The name column is positional too; a sheet narrower than two
        // columns cannot carry one.
        if header.len() < 2 {
            return Err(PortalError::Schema(
                "required column 'name' not found in header".to_string(),
            ));
        }

        let columns = POSITIONAL_ORDER
            .iter()
            .take(header.len())
            .enumerate()
            .map(|(index, &field)| (field, index))
            .collect();
        let name_label = header[1].trim().to_string();

        Ok(Self { columns, name_label })
    }

    pub fn index_of(&self, field: Field) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    /// Source label the name column carried in the header row.
    pub fn name_label(&self) -> &str {
        &self.name_label
    }
}
