//! Compact text for chart values.

use crate::data::model::Metric;

/// How a value should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Whole number with thousands separators.
    Count,
    /// Currency amount abbreviated to k/m/b.
    Currency,
}

impl From<Metric> for ValueKind {
    fn from(metric: Metric) -> Self {
        match metric {
            Metric::Count => ValueKind::Count,
            Metric::TotalAmount => ValueKind::Currency,
        }
    }
}

const SCALES: [(f64, &str); 3] = [(1e9, "b"), (1e6, "m"), (1e3, "k")];

/// Render a non-negative `value`.
///
/// ```
/// use tagchart::format::{format_value, ValueKind};
/// assert_eq!(format_value(1500.0, ValueKind::Currency, "£"), "£1.50k");
/// assert_eq!(format_value(1234.0, ValueKind::Count, "£"), "1,234");
/// ```
pub fn format_value(value: f64, kind: ValueKind, symbol: &str) -> String {
    match kind {
        ValueKind::Count => group_thousands(value.trunc() as u64),
        ValueKind::Currency => format_currency(value, symbol),
    }
}

fn format_currency(value: f64, symbol: &str) -> String {
    if value == 0.0 {
        return format!("{symbol}0");
    }

    let (scaled, suffix) = SCALES
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|&(threshold, suffix)| (value / threshold, suffix))
        .unwrap_or((value, ""));

    let decimals: usize = if scaled >= 100.0 {
        0
    } else if scaled >= 10.0 {
        1
    } else {
        2
    };

    format!("{symbol}{scaled:.decimals$}{suffix}")
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(v: f64) -> String {
        format_value(v, ValueKind::Currency, "£")
    }

    #[test]
    fn test_currency_zero() {
        assert_eq!(money(0.0), "£0");
    }

    #[test]
    fn test_currency_units() {
        assert_eq!(money(999.0), "£999");
        assert_eq!(money(42.0), "£42.0");
        assert_eq!(money(7.0), "£7.00");
        assert_eq!(money(0.5), "£0.50");
    }

    #[test]
    fn test_currency_thousands() {
        assert_eq!(money(1500.0), "£1.50k");
        assert_eq!(money(12000.0), "£12.0k");
        assert_eq!(money(450_000.0), "£450k");
    }

    #[test]
    fn test_currency_millions_and_billions() {
        assert_eq!(money(250_000_000.0), "£250m");
        assert_eq!(money(1_500_000.0), "£1.50m");
        assert_eq!(money(34_200_000.0), "£34.2m");
        assert_eq!(money(2_340_000_000.0), "£2.34b");
        assert_eq!(money(1_200_000_000_000.0), "£1200b");
    }

    #[test]
    fn test_scale_boundaries() {
        assert_eq!(money(1000.0), "£1.00k");
        assert_eq!(money(1_000_000.0), "£1.00m");
        assert_eq!(money(1_000_000_000.0), "£1.00b");
    }

    #[test]
    fn test_custom_symbol() {
        assert_eq!(format_value(12000.0, ValueKind::Currency, "$"), "$12.0k");
        assert_eq!(format_value(0.0, ValueKind::Currency, "€"), "€0");
    }

    #[test]
    fn test_count() {
        assert_eq!(format_value(1234.0, ValueKind::Count, "£"), "1,234");
        assert_eq!(format_value(7.0, ValueKind::Count, "£"), "7");
        assert_eq!(format_value(1_000_000.0, ValueKind::Count, "£"), "1,000,000");
        assert_eq!(format_value(999.9, ValueKind::Count, "£"), "999");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(100), "100");
        assert_eq!(group_thousands(12345), "12,345");
        assert_eq!(group_thousands(123456), "123,456");
    }

    #[test]
    fn test_kind_from_metric() {
        assert_eq!(ValueKind::from(Metric::Count), ValueKind::Count);
        assert_eq!(ValueKind::from(Metric::TotalAmount), ValueKind::Currency);
    }
}
