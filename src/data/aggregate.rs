use super::model::{CompanyRow, TagTable};

/// Split one cell on commas, trimming pieces and dropping empty ones.
pub fn split_tags(cell: Option<&str>) -> impl Iterator<Item = &str> {
    cell.into_iter()
        .flat_map(|s| s.split(','))
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
}

/// All tag mentions of a row: industries first, then buzzwords.
///
/// Repeated mentions are kept.
pub fn row_tags(row: &CompanyRow) -> Vec<&str> {
    split_tags(row.industries.as_deref())
        .chain(split_tags(row.buzzwords.as_deref()))
        .collect()
}

/// Count mentions and sum amounts per tag over all rows.
pub fn aggregate(rows: &[CompanyRow]) -> TagTable {
    let mut table = TagTable::new();
    for row in rows {
        let amount = row.amount.unwrap_or(0.0);
        for tag in row_tags(row) {
            table.record(tag, amount);
        }
    }
    table
}
