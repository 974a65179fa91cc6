/// Data layer: loading, column resolution, aggregation and ranking.
///
/// Architecture:
/// ```text
///   companies .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RawTable (headers + records)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ columns   │  pick industries / buzzwords / amount → ColumnSet
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  split + trim tags per row → TagTable
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   rank    │  exclude, sort by metric, take top N → Vec<RankedTag>
///   └──────────┘
/// ```

pub mod aggregate;
pub mod columns;
pub mod loader;
pub mod model;
pub mod rank;

use log::info;

use self::columns::{ColumnSet, MissingColumnsError};
use self::loader::RawTable;
use self::model::{CompanyRow, TagTable};

// ---------------------------------------------------------------------------
// TagDataset – everything derived from one loaded file
// ---------------------------------------------------------------------------

/// A loaded file after column resolution and aggregation.
#[derive(Debug, Clone)]
pub struct TagDataset {
    pub columns: ColumnSet,
    pub rows: Vec<CompanyRow>,
    pub tags: TagTable,
}

impl TagDataset {
    /// Resolve columns, extract rows and aggregate tags.
    ///
    /// The column-presence check runs first; nothing is aggregated when it
    /// fails.
    pub fn from_table(table: &RawTable) -> Result<Self, MissingColumnsError> {
        let columns = columns::resolve(&table.headers)?;
        let rows = model::extract_rows(table, &columns);
        let tags = aggregate::aggregate(&rows);

        info!(
            "Aggregated {} distinct tags from {} rows (amount column: {})",
            tags.len(),
            rows.len(),
            columns.amount.is_some()
        );

        Ok(TagDataset {
            columns,
            rows,
            tags,
        })
    }

    /// Whether "total amount raised" ranking makes sense for this file.
    pub fn has_amounts(&self) -> bool {
        self.columns.amount.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_stop_before_aggregation() {
        let table = loader::read_csv("Name,Industries\nAcme,AI\n".as_bytes()).unwrap();
        assert!(TagDataset::from_table(&table).is_err());
    }

    #[test]
    fn test_from_table_aggregates() {
        let csv = "Industries,Buzzwords\n\"AI, Fintech\",Growth\n";
        let table = loader::read_csv(csv.as_bytes()).unwrap();
        let ds = TagDataset::from_table(&table).unwrap();
        assert_eq!(ds.rows.len(), 1);
        assert_eq!(ds.tags.len(), 3);
        assert!(!ds.has_amounts());
    }
}
