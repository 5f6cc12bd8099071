use {
    eframe::egui::{
        Align, CentralPanel, ComboBox, Context, Layout, RichText, ScrollArea, TextEdit,
        TopBottomPanel, Ui,
    },
    strum::IntoEnumIterator,
};

use crate::{
    app::{App, ConverterAction, ResolvePhase},
    domain::{Currency, TimeRange},
    models::{EffectiveRate, QuoteSource},
    ui::{
        HistoryPlot, UI_CONFIG, UI_TEXT, UiColors,
        styles::{UiStyleExt, colored_heading},
        ui_plot_view::render_history_summary,
    },
    utils::format_clock,
};

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) -> Vec<ConverterAction> {
        let dark = self.converter.settings.dark_mode;
        let colors = UI_CONFIG.colors(dark);
        let mut actions = Vec::new();

        TopBottomPanel::top("top_toolbar")
            .frame(UI_CONFIG.top_panel_frame(dark))
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(colored_heading(&UI_TEXT.app_title, colors).size(18.0));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let theme_label = if dark {
                            &UI_TEXT.btn_light
                        } else {
                            &UI_TEXT.btn_dark
                        };
                        if ui.button(theme_label.as_str()).clicked() {
                            actions.push(ConverterAction::ToggleDarkMode);
                        }
                        let refresh = ui.button(UI_TEXT.btn_refresh.as_str());
                        if refresh.on_hover_text(&UI_TEXT.tip_refresh).clicked() {
                            actions.push(ConverterAction::Refresh);
                        }
                    });
                });
            });

        actions
    }

    pub(crate) fn render_status_panel(&self, ctx: &Context) {
        let dark = self.converter.settings.dark_mode;
        let colors = UI_CONFIG.colors(dark);

        TopBottomPanel::bottom("status_panel")
            .frame(UI_CONFIG.bottom_panel_frame(dark))
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let (text, color) = match self.converter.phase() {
                        ResolvePhase::Idle => (UI_TEXT.sb_idle.as_str(), colors.subdued),
                        ResolvePhase::Resolving { .. } => {
                            (UI_TEXT.sb_fetching.as_str(), colors.accent)
                        }
                        ResolvePhase::Ready(_) => (UI_TEXT.sb_ready.as_str(), colors.positive),
                        ResolvePhase::Failed(_) => (UI_TEXT.sb_failed.as_str(), colors.negative),
                    };
                    ui.label(RichText::new(text).small().color(color));
                    ui.separator();
                    ui.label_subdued(self.converter.pair().to_string(), colors);
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label_subdued(&UI_TEXT.sb_shortcuts, colors);
                    });
                });
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) -> Vec<ConverterAction> {
        let dark = self.converter.settings.dark_mode;
        let colors = UI_CONFIG.colors(dark);
        let mut actions = Vec::new();

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame(dark))
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(UI_CONFIG.card_width);
                        UI_CONFIG.card_frame(dark).show(ui, |ui| {
                            self.render_inputs(ui, colors, &mut actions);
                            ui.add_space(12.0);
                            self.render_result(ui, colors);
                        });
                        ui.add_space(12.0);
                        UI_CONFIG.card_frame(dark).show(ui, |ui| {
                            self.render_history(ui, colors, &mut actions);
                        });
                    });
                });
            });

        actions
    }

    fn render_inputs(&mut self, ui: &mut Ui, colors: &UiColors, actions: &mut Vec<ConverterAction>) {
        ui.with_layout(Layout::top_down(Align::Min), |ui| {
            ui.label(RichText::new(&UI_TEXT.label_amount).color(colors.label));
            ui.add(
                TextEdit::singleline(&mut self.converter.request.amount)
                    .hint_text(UI_TEXT.hint_amount.as_str())
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            let pair = self.converter.pair();
            ui.horizontal(|ui| {
                if let Some(c) = currency_selector(ui, "from_currency", &UI_TEXT.label_from, pair.from)
                {
                    actions.push(ConverterAction::SetFrom(c));
                }
                let swap = ui
                    .button(RichText::new(&UI_TEXT.btn_swap).size(16.0))
                    .on_hover_text(&UI_TEXT.tip_swap);
                if swap.clicked() {
                    actions.push(ConverterAction::Swap);
                }
                if let Some(c) = currency_selector(ui, "to_currency", &UI_TEXT.label_to, pair.to) {
                    actions.push(ConverterAction::SetTo(c));
                }
            });
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.checkbox(
                    &mut self.converter.custom_rate.enabled,
                    UI_TEXT.label_use_custom_rate.as_str(),
                );
                ui.add_enabled(
                    self.converter.custom_rate.enabled,
                    TextEdit::singleline(&mut self.converter.custom_rate.value)
                        .hint_text(UI_TEXT.hint_custom_rate.as_str())
                        .desired_width(140.0),
                );
            });
        });
    }

    fn render_result(&self, ui: &mut Ui, colors: &UiColors) {
        let converter = &self.converter;

        if let Some(msg) = converter.error_message() {
            UI_CONFIG
                .error_frame(converter.settings.dark_mode)
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(format!("{} {}", UI_TEXT.label_warning, msg))
                            .color(colors.error_text),
                    );
                });
            ui.add_space(6.0);
        }

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(converter.conversion_line())
                    .size(22.0)
                    .strong()
                    .color(colors.result),
            );
            if converter.is_loading() {
                ui.spinner();
            }
        });

        if let Some(unit) = converter.unit_rate_line() {
            ui.label(RichText::new(unit).color(colors.label));
        }

        ui.horizontal(|ui| match converter.effective_rate() {
            EffectiveRate::Custom(_) | EffectiveRate::InvalidCustom => {
                ui.badge(&UI_TEXT.label_custom_badge, colors.accent);
            }
            EffectiveRate::Quoted(_) => {
                if let Some(quote) = converter.quote() {
                    let (text, color) = match quote.source {
                        QuoteSource::Remote => (&UI_TEXT.label_source_live, colors.positive),
                        QuoteSource::Simulated => {
                            (&UI_TEXT.label_source_simulated, colors.accent)
                        }
                    };
                    ui.badge(text, color);
                    ui.label_subdued(
                        format!("{} {}", UI_TEXT.label_updated, format_clock(&quote.resolved_at)),
                        colors,
                    );
                }
            }
            EffectiveRate::Pending => {}
        });
    }

    fn render_history(&self, ui: &mut Ui, colors: &UiColors, actions: &mut Vec<ConverterAction>) {
        let converter = &self.converter;

        ui.horizontal(|ui| {
            ui.label(colored_heading(&UI_TEXT.chart_heading, colors));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                // right_to_left: iterate backwards so 1W ends up leftmost
                for range in TimeRange::iter().rev() {
                    if ui
                        .selectable_label(converter.range == range, range.to_string())
                        .clicked()
                        && converter.range != range
                    {
                        actions.push(ConverterAction::SetRange(range));
                    }
                }
            });
        });
        ui.add_space(6.0);

        HistoryPlot::new(converter.history(), converter.pair(), colors).show(ui);

        if let Some(summary) = converter.history_summary() {
            ui.add_space(4.0);
            render_history_summary(ui, &summary, colors);
        }
    }
}

/// Labelled combo box over all 17 symbols, fiat first. Returns the new pick, if any.
fn currency_selector(ui: &mut Ui, id_salt: &str, label: &str, current: Currency) -> Option<Currency> {
    let mut selected = current;
    ui.vertical(|ui| {
        ui.label(label);
        ComboBox::from_id_salt(id_salt)
            .selected_text(selected.code())
            .width(150.0)
            .show_ui(ui, |ui| {
                ui.label(RichText::new(&UI_TEXT.label_fiat_group).small().weak());
                for c in Currency::iter().filter(|c| !c.is_crypto()) {
                    ui.selectable_value(&mut selected, c, format!("{} · {}", c, c.name()));
                }
                ui.separator();
                ui.label(RichText::new(&UI_TEXT.label_crypto_group).small().weak());
                for c in Currency::iter().filter(|c| c.is_crypto()) {
                    ui.selectable_value(&mut selected, c, format!("{} · {}", c, c.name()));
                }
            });
    });
    (selected != current).then_some(selected)
}
