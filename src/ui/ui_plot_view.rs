use {
    eframe::egui::{RichText, Ui},
    egui_plot::{AxisHints, GridMark, Line, Plot, PlotPoints, VPlacement},
    std::ops::RangeInclusive,
};

use crate::{
    domain::CurrencyPair,
    models::{HistoricalPoint, HistorySummary},
    ui::{
        UI_CONFIG, UI_TEXT, UiColors,
        styles::{UiStyleExt, format_rate, get_change_color},
    },
    utils::short_date_label,
};

/// Line chart of the simulated history. X is the day index, labelled with the date.
pub(crate) struct HistoryPlot<'a> {
    points: &'a [HistoricalPoint],
    pair: CurrencyPair,
    colors: &'a UiColors,
}

// Helper to build the Date Axis: one label per whole day index, blank elsewhere
fn create_date_axis(points: &[HistoricalPoint]) -> AxisHints<'static> {
    let labels: Vec<String> = points.iter().map(|p| short_date_label(p.date)).collect();

    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis.as_str())
        .formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            let x = mark.value;
            if x < 0.0 || x.fract().abs() > f64::EPSILON {
                return String::new();
            }
            labels.get(x as usize).cloned().unwrap_or_default()
        })
        .placement(VPlacement::Bottom)
}

fn create_rate_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis.as_str())
        .formatter(|mark: GridMark, _range: &RangeInclusive<f64>| format_rate(mark.value))
}

impl<'a> HistoryPlot<'a> {
    pub fn new(points: &'a [HistoricalPoint], pair: CurrencyPair, colors: &'a UiColors) -> Self {
        Self {
            points,
            pair,
            colors,
        }
    }

    pub fn show(self, ui: &mut Ui) {
        if self.points.is_empty() {
            ui.label_subdued(&UI_TEXT.chart_empty, self.colors);
            return;
        }

        let series: PlotPoints = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| [i as f64, p.rate])
            .collect();

        let line = Line::new(self.pair.to_string(), series)
            .color(self.colors.chart_line)
            .width(2.0);

        Plot::new("rate_history_plot")
            .height(UI_CONFIG.chart_height)
            .custom_x_axes(vec![create_date_axis(self.points)])
            .custom_y_axes(vec![create_rate_axis()])
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.line(line);
            });
    }
}

/// Low / High / Avg / Change row under the chart.
pub(crate) fn render_history_summary(ui: &mut Ui, summary: &HistorySummary, colors: &UiColors) {
    ui.horizontal_wrapped(|ui| {
        ui.metric(&UI_TEXT.label_min, &format_rate(summary.min), colors.label, colors);
        ui.metric(&UI_TEXT.label_max, &format_rate(summary.max), colors.label, colors);
        ui.metric(&UI_TEXT.label_avg, &format_rate(summary.mean), colors.label, colors);
        ui.metric(
            &UI_TEXT.label_change,
            &format!("{:+.2}%", summary.change_pct * 100.0),
            get_change_color(summary.change_pct, colors),
            colors,
        );
    });
    ui.label(
        RichText::new(&UI_TEXT.chart_simulated_note)
            .italics()
            .small()
            .color(colors.subdued),
    );
}
