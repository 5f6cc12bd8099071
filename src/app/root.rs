use {
    eframe::{
        Frame,
        egui::{Context, Key, Theme},
    },
    std::sync::Arc,
};

use crate::{
    Cli,
    analysis::HistorySimulator,
    app::{ConverterAction, UiSettings, converter::Converter},
    data::{
        ExchangeRateApi, RateError, RateResolver, ResolveDispatcher, ResolveOutcome,
        ResolveTicket, SimulatedCryptoTable,
    },
    ui::setup_custom_visuals,
    utils::local_today,
};

#[cfg(debug_assertions)]
use crate::config::DF;

pub struct App {
    pub(crate) converter: Converter,
    dispatcher: Option<ResolveDispatcher>,
    /// Platform theme is sampled once, on the first frame, then left alone.
    theme_seeded: bool,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let dispatcher = ExchangeRateApi::new(args.api_base_url.as_str())
            .and_then(|api| {
                ResolveDispatcher::new(RateResolver::new(
                    Arc::new(SimulatedCryptoTable),
                    Arc::new(api),
                ))
            })
            .inspect_err(|e| log::error!("Rate resolver unavailable: {:#}", e))
            .ok();

        let mut app = Self {
            converter: Converter::new(UiSettings::default(), HistorySimulator::default()),
            dispatcher,
            theme_seeded: false,
        };

        // Initial render resolves the default pair straight away.
        let ticket = app.converter.begin_resolve();
        app.dispatch(ticket, &cc.egui_ctx);
        app
    }

    pub(crate) fn apply_action(&mut self, action: ConverterAction, ctx: &Context) {
        if let Some(ticket) = self.converter.handle(action) {
            self.dispatch(ticket, ctx);
        }
    }

    fn dispatch(&mut self, ticket: ResolveTicket, ctx: &Context) {
        match &self.dispatcher {
            Some(d) => d.dispatch(ticket, ctx),
            None => {
                // No executor: fail the ticket right away so the banner shows and loading clears.
                let outcome = ResolveOutcome {
                    seq: ticket.seq,
                    pair: ticket.pair,
                    result: Err(RateError::Network("resolver not initialised".to_string())),
                };
                self.converter
                    .apply_outcome(outcome, local_today(), &mut rand::thread_rng());
            }
        }
    }

    fn poll_outcomes(&mut self) {
        let Some(d) = &self.dispatcher else {
            return;
        };
        let mut rng = rand::thread_rng();
        for outcome in d.drain() {
            self.converter.apply_outcome(outcome, local_today(), &mut rng);
        }
    }

    fn seed_theme_once(&mut self, ctx: &Context) {
        if self.theme_seeded {
            return;
        }
        self.theme_seeded = true;
        self.converter.settings.dark_mode = matches!(ctx.system_theme(), Some(Theme::Dark));

        #[cfg(debug_assertions)]
        if DF.log_ui_actions {
            log::info!(
                "Platform theme {:?}, dark mode {}",
                ctx.system_theme(),
                self.converter.settings.dark_mode
            );
        }
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) -> Vec<ConverterAction> {
        if ctx.wants_keyboard_input() {
            // If the user typing in text box, don't trigger global hotkeys.
            return Vec::new();
        }

        let mut actions = Vec::new();
        ctx.input(|i| {
            if i.key_pressed(Key::R) {
                actions.push(ConverterAction::Refresh);
            }
            if i.key_pressed(Key::S) {
                actions.push(ConverterAction::Swap);
            }
            if i.key_pressed(Key::D) {
                actions.push(ConverterAction::ToggleDarkMode);
            }
        });
        actions
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.seed_theme_once(ctx);
        self.poll_outcomes();
        setup_custom_visuals(ctx, self.converter.settings.dark_mode);

        let mut actions = self.handle_global_shortcuts(ctx);
        actions.extend(self.render_top_panel(ctx));
        self.render_status_panel(ctx);
        actions.extend(self.render_central_panel(ctx));

        for action in actions {
            self.apply_action(action, ctx);
        }

        if self.converter.is_loading() {
            ctx.request_repaint();
        }
    }
}
