pub mod app;
pub mod chart;
pub mod controller;
pub mod error_modal;
pub mod results_table;
pub mod settings;

pub use app::WordHistApp;
pub use controller::{
    HistogramController,
    LoadPhase,
};
