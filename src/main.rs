use std::path::PathBuf;

use eframe::egui;
use tagchart::app::TagChartApp;
use tagchart::chart::ChartStyle;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional: a CSV to open straight away.
    let initial_file = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tag Chart – Top Industries/Buzzwords",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(TagChartApp::new(
                ChartStyle::default(),
                initial_file.as_deref(),
            )))
        }),
    )
}
