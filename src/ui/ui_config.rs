use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// Color tokens for one theme. Dark mode only swaps these, nothing else.
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subdued: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
    pub card_border: Color32,
    pub accent: Color32,
    pub result: Color32,
    pub positive: Color32,
    pub negative: Color32,
    pub error_fill: Color32,
    pub error_text: Color32,
    pub chart_line: Color32,
}

#[derive(Clone, Copy)]
pub struct UiConfig {
    pub dark: UiColors,
    pub light: UiColors,
    pub card_width: f32,
    pub chart_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    dark: UiColors {
        label: Color32::from_gray(200),
        heading: Color32::from_rgb(250, 250, 250),
        subdued: Color32::GRAY,
        central_panel: Color32::from_rgb(17, 24, 39),
        side_panel: Color32::from_rgb(31, 41, 55),
        card: Color32::from_rgb(31, 41, 55),
        card_border: Color32::from_rgb(55, 65, 81),
        accent: Color32::from_rgb(96, 165, 250),
        result: Color32::from_rgb(147, 197, 253),
        positive: Color32::from_rgb(74, 222, 128),
        negative: Color32::from_rgb(248, 113, 113),
        error_fill: Color32::from_rgb(127, 29, 29),
        error_text: Color32::from_rgb(254, 202, 202),
        chart_line: Color32::from_rgb(96, 165, 250),
    },
    light: UiColors {
        label: Color32::from_gray(55),
        heading: Color32::from_rgb(17, 24, 39),
        subdued: Color32::from_gray(120),
        central_panel: Color32::from_rgb(243, 244, 246),
        side_panel: Color32::WHITE,
        card: Color32::WHITE,
        card_border: Color32::from_rgb(229, 231, 235),
        accent: Color32::from_rgb(37, 99, 235),
        result: Color32::from_rgb(29, 78, 216),
        positive: Color32::from_rgb(22, 163, 74),
        negative: Color32::from_rgb(220, 38, 38),
        error_fill: Color32::from_rgb(254, 226, 226),
        error_text: Color32::from_rgb(185, 28, 28),
        chart_line: Color32::from_rgb(37, 99, 235),
    },
    card_width: 460.0,
    chart_height: 220.0,
};

impl UiConfig {
    pub fn colors(&self, dark_mode: bool) -> &UiColors {
        if dark_mode { &self.dark } else { &self.light }
    }

    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self, dark_mode: bool) -> Frame {
        Frame {
            fill: self.colors(dark_mode).side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for Bottom Status bar (Tighter vertical padding)
    pub fn bottom_panel_frame(&self, dark_mode: bool) -> Frame {
        Frame {
            fill: self.colors(dark_mode).side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self, dark_mode: bool) -> Frame {
        Frame {
            fill: self.colors(dark_mode).central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// Rounded card holding the converter and the chart
    pub fn card_frame(&self, dark_mode: bool) -> Frame {
        let colors = self.colors(dark_mode);
        Frame {
            fill: colors.card,
            stroke: Stroke::new(1.0, colors.card_border),
            corner_radius: CornerRadius::same(8),
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    pub fn error_frame(&self, dark_mode: bool) -> Frame {
        Frame {
            fill: self.colors(dark_mode).error_fill,
            corner_radius: CornerRadius::same(4),
            inner_margin: Margin::symmetric(8, 6),
            ..Default::default()
        }
    }
}
