use std::path::Path;

use eframe::egui;

use crate::chart::ChartStyle;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct TagChartApp {
    pub state: AppState,
}

impl TagChartApp {
    /// Start with a custom style and optionally a file already loaded.
    pub fn new(style: ChartStyle, initial_file: Option<&Path>) -> Self {
        let mut state = AppState {
            style,
            ..AppState::default()
        };
        if let Some(path) = initial_file {
            state.open_path(path);
        }
        Self { state }
    }
}

impl eframe::App for TagChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: controls ----
        egui::SidePanel::left("control_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: chart ----
        let background = self.state.style.background_color.to_color32();
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(background))
            .show(ctx, |ui| {
                plot::tag_chart(ui, &self.state);
            });
    }
}
