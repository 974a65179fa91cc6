use std::collections::BTreeSet;

use super::model::{Metric, TagTable};

/// Default number of tags shown when a file is first loaded.
pub const DEFAULT_TOP_N: usize = 10;

/// One row of the ranked output.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTag {
    pub tag: String,
    pub value: f64,
}

/// Tags ordered by `metric`, highest first.
///
/// Equal values keep the order in which the tags were first seen.
pub fn ordered_tags<'a>(table: &'a TagTable, metric: Metric) -> Vec<&'a str> {
    let mut entries: Vec<(&str, f64)> = table
        .iter()
        .map(|(tag, stats)| (tag, stats.value(metric)))
        .collect();
    // `sort_by` is stable.
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    entries.into_iter().map(|(tag, _)| tag).collect()
}

/// Number of tags left after removing `excluded`.
pub fn available(table: &TagTable, excluded: &BTreeSet<String>) -> usize {
    table.iter().filter(|(tag, _)| !excluded.contains(*tag)).count()
}

/// Initial top-N for a table with `available` surviving tags.
pub fn default_top_n(available: usize) -> usize {
    DEFAULT_TOP_N.min(available)
}

/// Bring `n` into `1..=available` (0 when nothing survives).
pub fn clamp_top_n(n: usize, available: usize) -> usize {
    if available == 0 { 0 } else { n.clamp(1, available) }
}

/// Drop excluded tags, sort by `metric` descending and keep the first `n`.
pub fn rank(
    table: &TagTable,
    metric: Metric,
    excluded: &BTreeSet<String>,
    n: usize,
) -> Vec<RankedTag> {
    let mut survivors: Vec<RankedTag> = table
        .iter()
        .filter(|(tag, _)| !excluded.contains(*tag))
        .map(|(tag, stats)| RankedTag {
            tag: tag.to_string(),
            value: stats.value(metric),
        })
        .collect();

    survivors.sort_by(|a, b| b.value.total_cmp(&a.value));
    survivors.truncate(n);
    survivors
}
