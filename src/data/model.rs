use std::collections::HashMap;
use std::fmt;

use log::warn;

use super::columns::ColumnSet;
use super::loader::RawTable;

// ---------------------------------------------------------------------------
// CompanyRow – one row of the source table
// ---------------------------------------------------------------------------

/// The fields of one company the aggregator cares about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyRow {
    /// Comma-separated industries, if the cell had a value.
    pub industries: Option<String>,
    /// Comma-separated buzzwords, if the cell had a value.
    pub buzzwords: Option<String>,
    /// Amount raised. `None` when the cell is empty or not a usable number.
    pub amount: Option<f64>,
}

impl CompanyRow {
    #[cfg(test)]
    pub fn new(industries: Option<&str>, buzzwords: Option<&str>, amount: Option<f64>) -> Self {
        CompanyRow {
            industries: industries.map(str::to_string),
            buzzwords: buzzwords.map(str::to_string),
            amount,
        }
    }
}

/// Parse an amount cell. Negative, NaN and infinite values are unusable.
fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Pull [`CompanyRow`]s out of a raw table using the resolved columns.
pub fn extract_rows(table: &RawTable, columns: &ColumnSet) -> Vec<CompanyRow> {
    let mut unusable_amounts = 0usize;

    let rows: Vec<CompanyRow> = (0..table.len())
        .map(|row| {
            let amount = columns
                .amount
                .as_ref()
                .and_then(|col| table.cell(row, col.index))
                .and_then(|raw| {
                    let parsed = parse_amount(raw);
                    if parsed.is_none() {
                        unusable_amounts += 1;
                    }
                    parsed
                });

            CompanyRow {
                industries: table.cell(row, columns.industries.index).map(str::to_string),
                buzzwords: table.cell(row, columns.buzzwords.index).map(str::to_string),
                amount,
            }
        })
        .collect();

    if unusable_amounts > 0 {
        warn!("{unusable_amounts} amount cells were not non-negative numbers; counted as 0");
    }
    rows
}

// ---------------------------------------------------------------------------
// Metric – what the chart ranks by
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    #[default]
    Count,
    TotalAmount,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Count, Metric::TotalAmount];

    /// Label used in the UI and in generated chart titles.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Count => "Count",
            Metric::TotalAmount => "Total Amount Raised",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// TagStats / TagTable
// ---------------------------------------------------------------------------

/// Aggregate figures for one tag.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TagStats {
    /// Number of mentions across all rows.
    pub count: u64,
    /// Sum of the mentioning rows' amounts, once per mention.
    pub total_amount: f64,
}

impl TagStats {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Count => self.count as f64,
            Metric::TotalAmount => self.total_amount,
        }
    }
}

/// Tag → stats, iterated in the order tags were first seen.
#[derive(Debug, Clone, Default)]
pub struct TagTable {
    entries: Vec<(String, TagStats)>,
    index: HashMap<String, usize>,
}

impl TagTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one mention of `tag` carrying `amount`.
    pub fn record(&mut self, tag: &str, amount: f64) {
        let slot = match self.index.get(tag) {
            Some(&i) => i,
            None => {
                self.entries.push((tag.to_string(), TagStats::default()));
                self.index.insert(tag.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        let stats = &mut self.entries[slot].1;
        stats.count += 1;
        stats.total_amount += amount;
    }

    pub fn get(&self, tag: &str) -> Option<&TagStats> {
        self.index.get(tag).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.index.contains_key(tag)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagStats)> {
        self.entries.iter().map(|(tag, stats)| (tag.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{columns, loader};

    fn rows_from(csv: &str) -> Vec<CompanyRow> {
        let table = loader::read_csv(csv.as_bytes()).unwrap();
        let cols = columns::resolve(&table.headers).unwrap();
        extract_rows(&table, &cols)
    }

    #[test]
    fn test_extract_with_amount() {
        let rows = rows_from(
            "Industries,Buzzwords,Amount raised (converted to GBP)\nAI,Growth,1000000\n,,\n",
        );
        assert_eq!(rows[0], CompanyRow::new(Some("AI"), Some("Growth"), Some(1_000_000.0)));
        assert_eq!(rows[1], CompanyRow::default());
    }

    #[test]
    fn test_unusable_amounts_are_missing() {
        let rows = rows_from(
            "Industries,Buzzwords,Amount raised (converted to GBP)\n\
             a,b,lots\na,b,-5\na,b,inf\na,b, 2.5e3 \n",
        );
        let amounts: Vec<Option<f64>> = rows.iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec![None, None, None, Some(2500.0)]);
    }

    #[test]
    fn test_no_amount_column() {
        let rows = rows_from("Industries,Buzzwords,Funding\nAI,,500\n");
        assert_eq!(rows[0].amount, None);
    }

    #[test]
    fn test_table_keeps_first_seen_order() {
        let mut table = TagTable::new();
        table.record("b", 1.0);
        table.record("a", 2.0);
        table.record("b", 3.0);
        let order: Vec<&str> = table.iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec!["b", "a"]);
        assert_eq!(table.get("b").unwrap().count, 2);
        assert_eq!(table.get("b").unwrap().total_amount, 4.0);
        assert!(!table.contains("c"));
    }

    #[test]
    fn test_metric_labels() {
        assert_eq!(Metric::Count.to_string(), "Count");
        assert_eq!(Metric::TotalAmount.label(), "Total Amount Raised");
    }
}
