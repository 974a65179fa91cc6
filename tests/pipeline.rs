use std::collections::BTreeSet;
use std::io::Write;

use tagchart::chart::{ChartData, ChartStyle, default_title, svg};
use tagchart::data::model::Metric;
use tagchart::data::{TagDataset, loader, rank};

const COMPANIES: &str = "\
(Company) Name,(Company) Industries,(Company) Buzzwords,Amount raised (converted to GBP)
Acme,\"Fintech, AI\",Growth,1000000
Beta,AI,,500000
Gamma,,,250000
Delta,\"Health , AI\",\"AI, Robotics\",not disclosed
";

fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn dataset(contents: &str) -> TagDataset {
    let file = write_fixture(contents);
    let table = loader::load_file(file.path()).unwrap();
    TagDataset::from_table(&table).unwrap()
}

#[test]
fn test_counts_and_amounts_from_file() {
    let ds = dataset(COMPANIES);
    assert_eq!(ds.rows.len(), 4);

    let ai = ds.tags.get("AI").unwrap();
    // Delta mentions AI twice; its amount is unusable and counts as 0.
    assert_eq!(ai.count, 4);
    assert_eq!(ai.total_amount, 1_500_000.0);

    let health = ds.tags.get("Health").unwrap();
    assert_eq!((health.count, health.total_amount), (1, 0.0));
    assert!(ds.tags.iter().all(|(_, s)| s.count >= 1 && s.total_amount >= 0.0));
}

#[test]
fn test_ranked_svg_end_to_end() {
    let ds = dataset(COMPANIES);
    let style = ChartStyle::default();
    let excluded: BTreeSet<String> = ["Growth".to_string()].into();

    let available = rank::available(&ds.tags, &excluded);
    assert_eq!(available, 4);
    let n = rank::default_top_n(available);
    let ranked = rank::rank(&ds.tags, Metric::TotalAmount, &excluded, n);
    let names: Vec<&str> = ranked.iter().map(|r| r.tag.as_str()).collect();
    assert_eq!(names, vec!["AI", "Fintech", "Health", "Robotics"]);

    let title = default_title(n, Metric::TotalAmount);
    let chart = ChartData::build(&ranked, Metric::TotalAmount, &title, &style).unwrap();
    let texts: Vec<&str> = chart.bars.iter().map(|b| b.text.as_str()).collect();
    assert_eq!(texts, vec!["£1.50m", "£1.00m", "£0", "£0"]);

    let doc = svg::render(&chart, &style);
    assert!(doc.starts_with("<?xml"));
    assert!(doc.contains("Top 4 Industries/Buzzwords by Total Amount Raised"));
    assert!(!doc.contains(">Growth</text>"));
}

#[test]
fn test_missing_columns_from_file() {
    let file = write_fixture("Name,Sector\nAcme,AI\n");
    let table = loader::load_file(file.path()).unwrap();
    let err = TagDataset::from_table(&table).unwrap_err();
    assert!(err.to_string().contains("'Industries' and 'Buzzwords'"));
}

#[test]
fn test_empty_file_is_missing_columns() {
    let file = write_fixture("");
    let table = loader::load_file(file.path()).unwrap();
    assert!(TagDataset::from_table(&table).is_err());
}

#[test]
fn test_header_only_file_has_no_tags() {
    let ds = dataset("Industries,Buzzwords\n");
    assert!(ds.tags.is_empty());
    let n = rank::default_top_n(ds.tags.len());
    let ranked = rank::rank(&ds.tags, Metric::Count, &BTreeSet::new(), n);
    assert!(ChartData::build(&ranked, Metric::Count, "t", &ChartStyle::default()).is_none());
}
