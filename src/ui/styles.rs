use {
    crate::ui::{UI_CONFIG, UiColors},
    eframe::egui::{Color32, Context, CornerRadius, Frame, Margin, RichText, Ui, Visuals},
};

pub(crate) fn colored_heading(text: impl Into<String>, colors: &UiColors) -> RichText {
    RichText::new(text.into()).strong().color(colors.heading)
}

pub fn get_change_color(value: f64, colors: &UiColors) -> Color32 {
    if value > 0.0 {
        colors.positive
    } else if value < 0.0 {
        colors.negative
    } else {
        colors.subdued
    }
}

/// Adaptive precision so small crypto ratios (1 / 45000) stay readable.
pub fn format_rate(rate: f64) -> String {
    let abs = rate.abs();
    if abs == 0.0 || abs >= 1.0 {
        format!("{:.4}", rate)
    } else {
        let digits = (-abs.log10()).ceil() as usize + 3;
        format!("{:.*}", digits.min(12), rate)
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>, colors: &UiColors);
    fn metric(&mut self, label: &str, value: &str, color: Color32, colors: &UiColors);
    fn badge(&mut self, text: &str, color: Color32);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>, colors: &UiColors) {
        self.label(RichText::new(text).small().color(colors.subdued));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32, colors: &UiColors) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label), colors);
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn badge(&mut self, text: &str, color: Color32) {
        Frame::new()
            .fill(color.gamma_multiply(0.15))
            .corner_radius(CornerRadius::same(4))
            .inner_margin(Margin::symmetric(6, 2))
            .show(self, |ui| {
                ui.label(RichText::new(text).small().strong().color(color));
            });
    }
}

pub(crate) fn setup_custom_visuals(ctx: &Context, dark_mode: bool) {
    let colors = UI_CONFIG.colors(dark_mode);
    let mut visuals = if dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    };
    visuals.window_fill = colors.central_panel;
    visuals.panel_fill = colors.central_panel;
    visuals.widgets.noninteractive.fg_stroke.color = colors.label;
    visuals.widgets.inactive.fg_stroke.color = colors.label;
    visuals.widgets.hovered.fg_stroke.color = colors.heading;
    visuals.widgets.active.fg_stroke.color = colors.heading;
    visuals.selection.bg_fill = colors.accent;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
