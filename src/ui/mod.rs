mod styles;
mod ui_config;
mod ui_plot_view;
mod ui_render;
mod ui_text;

pub(crate) use styles::setup_custom_visuals;
pub(crate) use ui_plot_view::HistoryPlot;

pub use ui_config::{UI_CONFIG, UI_TEXT, UiColors, UiConfig};
