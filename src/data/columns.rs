use thiserror::Error;

pub const INDUSTRIES: &str = "Industries";
pub const BUZZWORDS: &str = "Buzzwords";
pub const COMPANY_INDUSTRIES: &str = "(Company) Industries";
pub const COMPANY_BUZZWORDS: &str = "(Company) Buzzwords";
pub const AMOUNT_RAISED: &str = "Amount raised (converted to GBP)";

/// Neither naming scheme is fully present in the header row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "CSV must contain columns: 'Industries' and 'Buzzwords' OR \
     '(Company) Industries' and '(Company) Buzzwords'."
)]
pub struct MissingColumnsError {
    /// Header names that were actually found.
    pub found: Vec<String>,
}

/// A column picked from the header: its name and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub index: usize,
}

/// The columns the aggregator reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    pub industries: Column,
    pub buzzwords: Column,
    pub amount: Option<Column>,
}

fn find(headers: &[String], candidates: &[&str]) -> Option<Column> {
    candidates.iter().find_map(|name| {
        headers.iter().position(|h| h == name).map(|index| Column {
            name: (*name).to_string(),
            index,
        })
    })
}

/// Select the industries, buzzwords and amount columns.
///
/// Each tag column prefers the unprefixed name and falls back to the
/// `(Company)` one.
pub fn resolve(headers: &[String]) -> Result<ColumnSet, MissingColumnsError> {
    let industries = find(headers, &[INDUSTRIES, COMPANY_INDUSTRIES]);
    let buzzwords = find(headers, &[BUZZWORDS, COMPANY_BUZZWORDS]);

    match (industries, buzzwords) {
        (Some(industries), Some(buzzwords)) => Ok(ColumnSet {
            industries,
            buzzwords,
            amount: find(headers, &[AMOUNT_RAISED]),
        }),
        _ => Err(MissingColumnsError {
            found: headers.to_vec(),
        }),
    }
}
