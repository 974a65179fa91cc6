//! Chart model shared by the on-screen plot and the SVG export.

pub mod export;
pub mod svg;

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::color::Swatch;
use crate::data::model::Metric;
use crate::data::rank::RankedTag;
use crate::format::{ValueKind, format_value};

// ---------------------------------------------------------------------------
// ChartStyle – presentation settings, passed explicitly to renderers
// ---------------------------------------------------------------------------

/// Fonts, sizes and colours of the chart. All lengths are in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Font families in order of preference.
    pub font_family: Vec<String>,
    pub title_size: f64,
    pub label_size: f64,
    /// Gap between the title and the first bar.
    pub title_pad: f64,
    /// Distance of the label and value text from the track edges.
    pub label_offset: f64,
    /// Bar thickness as a fraction of the row pitch.
    pub bar_height: f64,
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub background_color: Swatch,
    pub track_color: Swatch,
    pub highlight_color: Swatch,
    pub bar_color: Swatch,
    pub highlight_text_color: Swatch,
    pub text_color: Swatch,
    pub currency_symbol: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        ChartStyle {
            font_family: vec![
                "Public Sans".to_string(),
                "Arial".to_string(),
                "DejaVu Sans".to_string(),
            ],
            title_size: 15.0,
            label_size: 13.0,
            title_pad: 20.0,
            label_offset: 5.67,
            bar_height: 0.8,
            width: 720.0,
            height: 432.0,
            margin: 10.0,
            background_color: Swatch::WHITE,
            track_color: Swatch::rgb(0xE0, 0xE0, 0xE0),
            highlight_color: Swatch::rgb(0x4B, 0x48, 0x97),
            bar_color: Swatch::rgb(0xA4, 0xA2, 0xF2),
            highlight_text_color: Swatch::WHITE,
            text_color: Swatch::BLACK,
            currency_symbol: "£".to_string(),
        }
    }
}

impl ChartStyle {
    /// Read a style from a JSON file. Omitted fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading style file {}", path.display()))?;
        let style: ChartStyle = serde_json::from_str(&text)
            .with_context(|| format!("parsing style file {}", path.display()))?;
        style.validate()?;
        Ok(style)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.bar_height > 0.0 && self.bar_height <= 1.0) {
            bail!("bar_height must be in (0, 1], got {}", self.bar_height);
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            bail!("chart size must be positive, got {}x{}", self.width, self.height);
        }
        if self.label_size <= 0.0 || self.title_size <= 0.0 {
            bail!("font sizes must be positive");
        }
        Ok(())
    }

    /// CSS font-family list, e.g. `'Public Sans', Arial, sans-serif`.
    pub fn font_family_css(&self) -> String {
        self.font_family
            .iter()
            .map(|f| {
                if f.contains(' ') {
                    format!("'{f}'")
                } else {
                    f.clone()
                }
            })
            .chain(std::iter::once("sans-serif".to_string()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ---------------------------------------------------------------------------
// ChartData – what gets drawn
// ---------------------------------------------------------------------------

/// One bar of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    pub label: String,
    pub value: f64,
    /// Formatted value shown at the right end of the track.
    pub text: String,
    /// Rank 1 gets the highlight colour.
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: String,
    /// Rank order, best first.
    pub bars: Vec<BarSpec>,
    /// Length of every background track.
    pub max_value: f64,
}

/// Title used until the user types their own.
pub fn default_title(top_n: usize, metric: Metric) -> String {
    format!("Top {top_n} Industries/Buzzwords by {}", metric.label())
}

impl ChartData {
    /// Build the bars for `ranked`. `None` when there is nothing to draw.
    pub fn build(
        ranked: &[RankedTag],
        metric: Metric,
        title: &str,
        style: &ChartStyle,
    ) -> Option<Self> {
        if ranked.is_empty() {
            return None;
        }
        let kind = ValueKind::from(metric);
        let bars: Vec<BarSpec> = ranked
            .iter()
            .enumerate()
            .map(|(i, r)| BarSpec {
                label: r.tag.clone(),
                value: r.value,
                text: format_value(r.value, kind, &style.currency_symbol),
                highlight: i == 0,
            })
            .collect();
        let max_value = bars.iter().map(|b| b.value).fold(0.0, f64::max);

        Some(ChartData {
            title: title.to_string(),
            bars,
            max_value,
        })
    }

    /// Foreground length of `bar` as a fraction of the track.
    pub fn fraction(&self, bar: &BarSpec) -> f64 {
        if self.max_value > 0.0 {
            bar.value / self.max_value
        } else {
            0.0
        }
    }
}

// ---------------------------------------------------------------------------
// Layout – deterministic geometry in points
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct RowGeometry {
    /// Top edge of the bar.
    pub top: f64,
    pub center_y: f64,
    pub bar_height: f64,
    pub track_x: f64,
    pub track_width: f64,
    pub bar_width: f64,
    pub label_x: f64,
    pub value_x: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub title_x: f64,
    pub title_y: f64,
    pub rows: Vec<RowGeometry>,
}

impl ChartLayout {
    pub fn compute(chart: &ChartData, style: &ChartStyle) -> Self {
        let left = style.margin;
        let right = style.width - style.margin;
        let plot_top = style.margin + style.title_size + style.title_pad;
        let plot_bottom = style.height - style.margin;
        let track_width = (right - left).max(0.0);

        let n = chart.bars.len().max(1) as f64;
        let pitch = ((plot_bottom - plot_top) / n).max(0.0);
        let bar_height = pitch * style.bar_height;

        let rows = chart
            .bars
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                let center_y = plot_top + pitch * (i as f64 + 0.5);
                RowGeometry {
                    top: center_y - bar_height / 2.0,
                    center_y,
                    bar_height,
                    track_x: left,
                    track_width,
                    bar_width: track_width * chart.fraction(bar),
                    label_x: left + style.label_offset,
                    value_x: right - style.label_offset,
                }
            })
            .collect();

        ChartLayout {
            width: style.width,
            height: style.height,
            title_x: style.width / 2.0,
            title_y: style.margin + style.title_size,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(values: &[(&str, f64)]) -> Vec<RankedTag> {
        values
            .iter()
            .map(|(tag, value)| RankedTag {
                tag: tag.to_string(),
                value: *value,
            })
            .collect()
    }

    #[test]
    fn test_build_highlights_first_only() {
        let style = ChartStyle::default();
        let chart = ChartData::build(
            &ranked(&[("AI", 1_500_000.0), ("Fintech", 1_000_000.0)]),
            Metric::TotalAmount,
            "Funding",
            &style,
        )
        .unwrap();
        assert_eq!(chart.max_value, 1_500_000.0);
        assert!(chart.bars[0].highlight);
        assert!(!chart.bars[1].highlight);
        assert_eq!(chart.bars[0].text, "£1.50m");
        assert_eq!(chart.bars[1].text, "£1.00m");
    }

    #[test]
    fn test_build_empty() {
        let style = ChartStyle::default();
        assert!(ChartData::build(&[], Metric::Count, "t", &style).is_none());
    }

    #[test]
    fn test_default_title() {
        assert_eq!(
            default_title(10, Metric::Count),
            "Top 10 Industries/Buzzwords by Count"
        );
        assert_eq!(
            default_title(3, Metric::TotalAmount),
            "Top 3 Industries/Buzzwords by Total Amount Raised"
        );
    }

    #[test]
    fn test_layout_tracks_identical_and_ordered() {
        let style = ChartStyle::default();
        let chart = ChartData::build(
            &ranked(&[("a", 4.0), ("b", 2.0), ("c", 1.0)]),
            Metric::Count,
            "t",
            &style,
        )
        .unwrap();
        let layout = ChartLayout::compute(&chart, &style);

        assert_eq!(layout.rows.len(), 3);
        assert!(layout.rows.windows(2).all(|w| w[0].center_y < w[1].center_y));
        assert!(layout.rows.iter().all(|r| r.track_width == layout.rows[0].track_width));
        assert_eq!(layout.rows[0].bar_width, layout.rows[0].track_width);
        assert_eq!(layout.rows[1].bar_width, layout.rows[0].track_width / 2.0);
        assert_eq!(layout.rows[0].label_x, style.margin + style.label_offset);
    }

    #[test]
    fn test_layout_zero_max() {
        let style = ChartStyle::default();
        let chart = ChartData::build(
            &ranked(&[("a", 0.0), ("b", 0.0)]),
            Metric::TotalAmount,
            "t",
            &style,
        )
        .unwrap();
        let layout = ChartLayout::compute(&chart, &style);
        assert!(layout.rows.iter().all(|r| r.bar_width == 0.0));
        assert_eq!(chart.bars[0].text, "£0");
    }

    #[test]
    fn test_font_family_css() {
        assert_eq!(
            ChartStyle::default().font_family_css(),
            "'Public Sans', Arial, 'DejaVu Sans', sans-serif"
        );
    }

    #[test]
    fn test_style_partial_json() {
        let style: ChartStyle =
            serde_json::from_str(r##"{"currency_symbol": "$", "bar_color": "#123456"}"##).unwrap();
        assert_eq!(style.currency_symbol, "$");
        assert_eq!(style.bar_color, Swatch::rgb(0x12, 0x34, 0x56));
        assert_eq!(style.label_size, 13.0);
    }

    #[test]
    fn test_style_validate() {
        let style = ChartStyle {
            bar_height: 1.5,
            ..ChartStyle::default()
        };
        assert!(style.validate().is_err());
        assert!(ChartStyle::default().validate().is_ok());
    }
}
