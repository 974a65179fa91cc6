use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::Metric;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – chart controls
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Chart");
    ui.separator();

    let has_amounts = match &state.dataset {
        Some(ds) => ds.has_amounts(),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // ---- Rank by ----
    ui.strong("Rank by:");
    for metric in Metric::ALL {
        let enabled = metric == Metric::Count || has_amounts;
        let radio = egui::RadioButton::new(state.metric == metric, metric.label());
        let response = ui
            .add_enabled(enabled, radio)
            .on_disabled_hover_text("No 'Amount raised (converted to GBP)' column in this file");
        if response.clicked() {
            state.set_metric(metric);
        }
    }
    ui.separator();

    // ---- Top N ----
    let available = state.available();
    ui.strong("Number of top industries/buzzwords to display:");
    if available > 0 {
        let mut n = state.top_n;
        let drag = egui::DragValue::new(&mut n).range(1..=available);
        if ui.add(drag).changed() {
            state.set_top_n(n);
        }
        ui.label(format!("of {available} available"));
    } else {
        ui.label("Nothing left to display.");
    }
    ui.separator();

    // ---- Title ----
    ui.strong("Chart title:");
    let mut title = state.title.clone();
    if ui.text_edit_singleline(&mut title).changed() {
        state.set_title(title);
    }
    if state.title_edited && ui.small_button("Reset title").clicked() {
        state.reset_title();
    }
    ui.separator();

    if ui
        .add_enabled(state.chart.is_some(), egui::Button::new("Export SVG…"))
        .clicked()
    {
        save_file_dialog(state);
    }
    ui.separator();

    // ---- Exclusions ----
    let options = state.exclusion_options();
    let header_text = format!(
        "Exclude industries/buzzwords  ({}/{})",
        state.excluded.len(),
        options.len()
    );
    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt("exclusions")
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut state.exclusion_query)
                        .hint_text("Search…")
                        .desired_width(140.0),
                );
                if ui.small_button("Clear").clicked() {
                    state.clear_excluded();
                }
            });

            let query = state.exclusion_query.to_lowercase();
            let mut toggled: Option<String> = None;

            ScrollArea::vertical()
                .id_salt("exclusion_list")
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    for tag in options
                        .iter()
                        .filter(|t| query.is_empty() || t.to_lowercase().contains(&query))
                    {
                        let mut checked = state.excluded.contains(tag);
                        if ui.checkbox(&mut checked, tag.as_str()).changed() {
                            toggled = Some(tag.clone());
                        }
                    }
                });

            if let Some(tag) = toggled {
                state.toggle_excluded(&tag);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.chart.is_some(), egui::Button::new("Export SVG…"))
                .clicked()
            {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(name), Some(ds)) = (&state.source_name, &state.dataset) {
            ui.label(format!(
                "{name}: {} companies, {} tags",
                ds.rows.len(),
                ds.tags.len()
            ));
            ui.separator();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open company data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open_path(&path);
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export chart as SVG")
        .add_filter("SVG image", &["svg"])
        .set_file_name(state.export_name())
        .save_file();

    let Some(path) = file else {
        return;
    };

    match state.export_svg(&path) {
        Ok(Some(written)) => {
            state.status_message = None;
            log::info!("Saved {}", written.display());
        }
        Ok(None) => {}
        Err(e) => {
            log::error!("Failed to export chart: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
