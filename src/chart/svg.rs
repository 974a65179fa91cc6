//! SVG rendering of the ranked bar chart.
//!
//! Text is emitted as `<text>` elements with a font-family list, never as
//! outlined paths, so the file stays editable in vector tools.

use super::{ChartData, ChartLayout, ChartStyle};

/// Escape text for XML content and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Render `chart` as a standalone SVG document.
pub fn render(chart: &ChartData, style: &ChartStyle) -> String {
    let layout = ChartLayout::compute(chart, style);
    let font = escape_xml(&style.font_family_css());

    let mut tracks = String::new();
    let mut bars = String::new();
    let mut labels = String::new();

    for (bar, row) in chart.bars.iter().zip(&layout.rows) {
        tracks.push_str(&format!(
            r#"    <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>
"#,
            row.track_x,
            row.top,
            row.track_width,
            row.bar_height,
            style.track_color.to_hex()
        ));

        let (fill, text_color) = if bar.highlight {
            (style.highlight_color, style.highlight_text_color)
        } else {
            (style.bar_color, style.text_color)
        };

        bars.push_str(&format!(
            r#"    <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>
"#,
            row.track_x,
            row.top,
            row.bar_width,
            row.bar_height,
            fill.to_hex()
        ));

        labels.push_str(&format!(
            r#"    <text x="{:.2}" y="{:.2}" text-anchor="start" dominant-baseline="central" font-weight="normal" fill="{}">{}</text>
    <text x="{:.2}" y="{:.2}" text-anchor="end" dominant-baseline="central" font-weight="600" fill="{}">{}</text>
"#,
            row.label_x,
            row.center_y,
            text_color.to_hex(),
            escape_xml(&bar.label),
            row.value_x,
            row.center_y,
            text_color.to_hex(),
            escape_xml(&bar.text)
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="utf-8" standalone="no"?>
<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}pt" height="{h}pt" viewBox="0 0 {w} {h}">
  <title>{title}</title>
  <rect width="{w}" height="{h}" fill="{bg}"/>
  <text x="{tx:.2}" y="{ty:.2}" text-anchor="middle" font-family="{font}" font-size="{ts}" font-weight="normal" fill="{fg}">{title}</text>
  <g id="tracks">
{tracks}  </g>
  <g id="bars">
{bars}  </g>
  <g id="labels" font-family="{font}" font-size="{ls}">
{labels}  </g>
</svg>
"#,
        w = layout.width,
        h = layout.height,
        bg = style.background_color.to_hex(),
        fg = style.text_color.to_hex(),
        tx = layout.title_x,
        ty = layout.title_y,
        ts = style.title_size,
        ls = style.label_size,
        title = escape_xml(&chart.title),
    )
}
