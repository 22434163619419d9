mod app;
mod effects;
mod form;
mod logging;
mod terminal;
mod ui;

pub use app::run_app;
