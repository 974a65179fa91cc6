use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

// ---------------------------------------------------------------------------
// RawTable – the CSV as read, before any column is interpreted
// ---------------------------------------------------------------------------

/// Header names plus the string records of a CSV file.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub records: Vec<csv::StringRecord>,
}

impl RawTable {
    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Cell at (`row`, `col`), or `None` when the cell is missing or holds one
    /// of the usual NA markers.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        let value = self.records.get(row)?.get(col)?;
        if is_na(value) { None } else { Some(value) }
    }
}

/// Markers that spreadsheet and dataframe exports write for "no value".
const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_na(value: &str) -> bool {
    NA_TOKENS.contains(&value)
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a company table from a `.csv` file.
pub fn load_file(path: &Path) -> Result<RawTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" | "txt" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            read_csv(file).with_context(|| format!("reading {}", path.display()))
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Parse comma-separated text with a header row.
///
/// Rows may be shorter or longer than the header; absent cells read as
/// missing. A completely empty input yields no headers and no rows.
pub fn read_csv<R: Read>(input: R) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    log::debug!("Read {} CSV rows, headers {:?}", records.len(), headers);

    Ok(RawTable { headers, records })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_headers_and_rows() {
        let table = read_csv("Industries,Buzzwords\nAI,Growth\nFintech,\n".as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["Industries", "Buzzwords"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, 0), Some("AI"));
        assert_eq!(table.cell(1, 1), None);
    }

    #[test]
    fn test_ragged_rows_are_missing_cells() {
        let table = read_csv("a,b,c\n1\n1,2,3,4\n".as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, 2), None);
        assert_eq!(table.cell(1, 2), Some("3"));
    }

    #[test]
    fn test_na_tokens() {
        let table = read_csv("a,b,c\nNaN,N/A,nan value\n".as_bytes()).unwrap();
        assert_eq!(table.cell(0, 0), None);
        assert_eq!(table.cell(0, 1), None);
        assert_eq!(table.cell(0, 2), Some("nan value"));
    }

    #[test]
    fn test_empty_input() {
        let table = read_csv("".as_bytes()).unwrap();
        assert!(table.headers.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_bom_is_stripped_from_first_header() {
        let table = read_csv("\u{feff}Industries,Buzzwords\n".as_bytes()).unwrap();
        assert_eq!(table.headers[0], "Industries");
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_file(Path::new("companies.parquet")).unwrap_err();
        assert!(err.to_string().contains(".parquet"));
    }
}
