use eframe::egui;
use tracing::{
    info,
    Level,
};
use tracing_subscriber::fmt;
use wordhist::{
    gui::{
        settings::{
            data::SETTINGS_FILE,
            SettingsData,
        },
        WordHistApp,
    },
    persistence::load_json_or_default,
};

fn main() -> eframe::Result {
    #[cfg(not(debug_assertions))]
    fmt().with_max_level(Level::INFO).init();

    #[cfg(debug_assertions)]
    fmt()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_max_level(Level::TRACE)
        .init();

    let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);
    info!("Using document source {}", settings.source_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Word Histogram")
            .with_inner_size([1000.0, 640.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Word Histogram",
        options,
        Box::new(move |cc| Ok(Box::new(WordHistApp::new(cc, settings)?))),
    )
}
