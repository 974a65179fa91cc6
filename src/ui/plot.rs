use eframe::egui::{Align2, RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart, Plot, PlotPoint, Text};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Ranked bar chart (central panel)
// ---------------------------------------------------------------------------

/// Render the current chart in the central panel.
pub fn tag_chart(ui: &mut Ui, state: &AppState) {
    let chart = match &state.chart {
        Some(chart) => chart,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a CSV file to chart its tags  (File → Open…)");
            });
            return;
        }
    };
    let style = &state.style;

    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(&chart.title).size(style.title_size as f32));
    });
    ui.add_space(style.title_pad as f32);

    // Tracks span [0, max]; a zero max still needs a visible extent.
    let extent = if chart.max_value > 0.0 { chart.max_value } else { 1.0 };
    let offset = style.label_offset * extent / f64::from(ui.available_width().max(1.0));

    let tracks: Vec<Bar> = (0..chart.bars.len())
        .map(|i| {
            Bar::new(-(i as f64), extent)
                .width(style.bar_height)
                .fill(style.track_color.to_color32())
                .stroke(Stroke::NONE)
        })
        .collect();

    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let fill = if bar.highlight {
                style.highlight_color
            } else {
                style.bar_color
            };
            Bar::new(-(i as f64), chart.fraction(bar) * extent)
                .width(style.bar_height)
                .fill(fill.to_color32())
                .stroke(Stroke::NONE)
        })
        .collect();

    let n = chart.bars.len() as f64;

    Plot::new("tag_chart")
        .show_axes(false)
        .show_grid(false)
        .show_background(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .include_x(0.0)
        .include_x(extent)
        .include_y(0.5)
        .include_y(0.5 - n)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(tracks).horizontal());
            plot_ui.bar_chart(BarChart::new(bars).horizontal());

            for (i, bar) in chart.bars.iter().enumerate() {
                let y = -(i as f64);
                let color = if bar.highlight {
                    style.highlight_text_color
                } else {
                    style.text_color
                }
                .to_color32();
                let size = style.label_size as f32;

                plot_ui.text(
                    Text::new(
                        PlotPoint::new(offset, y),
                        RichText::new(&bar.label).size(size).color(color),
                    )
                    .anchor(Align2::LEFT_CENTER),
                );
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(extent - offset, y),
                        RichText::new(&bar.text).size(size).color(color).strong(),
                    )
                    .anchor(Align2::RIGHT_CENTER),
                );
            }
        });
}
