use {chrono::NaiveDate, rand::Rng, std::mem};

use crate::{
    analysis::{HistorySimulator, summarize},
    app::{ConverterAction, ResolvePhase, UiSettings},
    config::SIMULATION,
    data::{ResolveOutcome, ResolveTicket},
    domain::{Currency, CurrencyPair, TimeRange},
    models::{
        ConversionRequest, CustomRateOverride, EffectiveRate, HistoricalPoint, HistorySummary,
        RateQuote, format_conversion, format_unit_rate,
    },
    ui::UI_TEXT,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// All mutable widget state and the resolve-then-simulate cycle. No egui in here.
pub struct Converter {
    pub request: ConversionRequest,
    pub custom_rate: CustomRateOverride,
    pub range: TimeRange,
    pub settings: UiSettings,
    /// Last good quote. Survives failed cycles.
    quote: Option<RateQuote>,
    history: Vec<HistoricalPoint>,
    phase: ResolvePhase,
    last_seq: u64,
    simulator: HistorySimulator,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(UiSettings::default(), HistorySimulator::default())
    }
}

impl Converter {
    pub fn new(settings: UiSettings, simulator: HistorySimulator) -> Self {
        Self {
            request: ConversionRequest::default(),
            custom_rate: CustomRateOverride::default(),
            range: SIMULATION.default_range,
            settings,
            quote: None,
            history: Vec::new(),
            phase: ResolvePhase::Idle,
            last_seq: 0,
            simulator,
        }
    }

    pub fn pair(&self) -> CurrencyPair {
        self.request.pair
    }

    pub fn quote(&self) -> Option<&RateQuote> {
        self.quote.as_ref()
    }

    pub fn history(&self) -> &[HistoricalPoint] {
        &self.history
    }

    pub fn history_summary(&self) -> Option<HistorySummary> {
        summarize(&self.history)
    }

    pub fn phase(&self) -> &ResolvePhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ResolvePhase::Resolving { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            ResolvePhase::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Single entry point for UI events. `Some` means a resolve ticket must be dispatched.
    pub fn handle(&mut self, action: ConverterAction) -> Option<ResolveTicket> {
        #[cfg(debug_assertions)]
        if DF.log_ui_actions {
            log::info!("UI action {:?}", action);
        }

        match action {
            ConverterAction::SetFrom(c) => self.set_from(c),
            ConverterAction::SetTo(c) => self.set_to(c),
            ConverterAction::Swap => self.swap(),
            ConverterAction::SetRange(r) => self.set_range(r),
            ConverterAction::Refresh => self.refresh(),
            ConverterAction::ToggleDarkMode => {
                self.toggle_dark_mode();
                None
            }
        }
    }

    pub fn set_from(&mut self, currency: Currency) -> Option<ResolveTicket> {
        self.request.pair.from = currency;
        Some(self.begin_resolve())
    }

    pub fn set_to(&mut self, currency: Currency) -> Option<ResolveTicket> {
        self.request.pair.to = currency;
        Some(self.begin_resolve())
    }

    /// Both legs computed from one snapshot, then written together.
    pub fn swap(&mut self) -> Option<ResolveTicket> {
        self.request.pair = self.request.pair.swapped();
        Some(self.begin_resolve())
    }

    pub fn set_range(&mut self, range: TimeRange) -> Option<ResolveTicket> {
        self.range = range;
        Some(self.begin_resolve())
    }

    pub fn refresh(&mut self) -> Option<ResolveTicket> {
        Some(self.begin_resolve())
    }

    pub fn toggle_dark_mode(&mut self) {
        self.settings.dark_mode = !self.settings.dark_mode;
    }

    /// Supersedes any ticket still in flight.
    pub fn begin_resolve(&mut self) -> ResolveTicket {
        self.last_seq += 1;
        self.phase = ResolvePhase::Resolving { seq: self.last_seq };
        let ticket = ResolveTicket {
            seq: self.last_seq,
            pair: self.request.pair,
        };

        #[cfg(debug_assertions)]
        if DF.log_resolve_cycle {
            log::info!("Ticket #{} issued for {}", ticket.seq, ticket.pair);
        }

        ticket
    }

    /// Apply a finished ticket. Returns `false` when the outcome was stale and dropped.
    pub fn apply_outcome<R: Rng + ?Sized>(
        &mut self,
        outcome: ResolveOutcome,
        today: NaiveDate,
        rng: &mut R,
    ) -> bool {
        if outcome.seq != self.last_seq {
            #[cfg(debug_assertions)]
            if DF.log_stale_outcomes {
                log::warn!(
                    "Dropping stale outcome #{} for {} (latest is #{})",
                    outcome.seq,
                    outcome.pair,
                    self.last_seq
                );
            }
            return false;
        }

        let previous = mem::take(&mut self.phase);
        self.phase = match (previous, outcome.result) {
            (ResolvePhase::Resolving { .. }, Ok(quote)) => {
                self.history = self.simulator.simulate(
                    quote.rate,
                    quote.pair,
                    self.range,
                    today,
                    rng,
                );
                self.quote = Some(quote.clone());
                ResolvePhase::Ready(quote)
            }
            (ResolvePhase::Resolving { .. }, Err(err)) => {
                log::error!("Error fetching exchange rate for {}: {}", outcome.pair, err);
                ResolvePhase::Failed(UI_TEXT.error_fetch_failed.clone())
            }
            // Same seq delivered twice: keep whatever the first delivery produced.
            (settled, _) => settled,
        };
        true
    }

    pub fn effective_rate(&self) -> EffectiveRate {
        EffectiveRate::select(&self.custom_rate, self.quote.as_ref().map(|q| q.rate))
    }

    /// `"100 USD = 90.00 EUR"`, or the reason it can't be shown.
    pub fn conversion_line(&self) -> String {
        let Some(amount) = self.request.parsed_amount() else {
            return UI_TEXT.enter_valid_amount.clone();
        };
        match self.effective_rate() {
            EffectiveRate::Quoted(rate) | EffectiveRate::Custom(rate) => {
                format_conversion(&self.request.amount, amount, self.pair(), rate)
            }
            EffectiveRate::InvalidCustom => UI_TEXT.invalid_custom_rate.clone(),
            EffectiveRate::Pending if self.is_loading() => UI_TEXT.loading_rate.clone(),
            EffectiveRate::Pending => UI_TEXT.rate_unavailable.clone(),
        }
    }

    /// `"1 USD = 0.9000 EUR"`, `None` until a rate is available.
    pub fn unit_rate_line(&self) -> Option<String> {
        self.effective_rate()
            .value()
            .map(|rate| format_unit_rate(self.pair(), rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::RateError,
        models::{QuoteSource, RateQuote},
    };
    use rand::{SeedableRng, rngs::StdRng};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    }

    fn ok(ticket: ResolveTicket, rate: f64) -> ResolveOutcome {
        ResolveOutcome {
            seq: ticket.seq,
            pair: ticket.pair,
            result: Ok(RateQuote::new(ticket.pair, rate, QuoteSource::Remote)),
        }
    }

    fn failed(ticket: ResolveTicket) -> ResolveOutcome {
        ResolveOutcome {
            seq: ticket.seq,
            pair: ticket.pair,
            result: Err(RateError::Network("connection refused".into())),
        }
    }

    #[test]
    fn usd_eur_at_point_nine() {
        let mut c = Converter::default();
        c.request.amount = "100".into();
        let t = c.set_to(Currency::Eur).unwrap();
        assert!(c.is_loading());
        assert!(c.apply_outcome(ok(t, 0.9), today(), &mut StdRng::seed_from_u64(1)));
        assert!(!c.is_loading());
        assert_eq!(c.conversion_line(), "100 USD = 90.00 EUR");
        assert_eq!(c.unit_rate_line().as_deref(), Some("1 USD = 0.9000 EUR"));
        assert_eq!(c.history().len(), 8);
    }

    #[test]
    fn invalid_amount_shows_prompt() {
        let mut c = Converter::default();
        let t = c.refresh().unwrap();
        c.apply_outcome(ok(t, 0.9), today(), &mut StdRng::seed_from_u64(1));
        c.request.amount = "abc".into();
        assert_eq!(c.conversion_line(), "Please enter a valid amount");
        c.request.amount = "".into();
        assert_eq!(c.conversion_line(), "Please enter a valid amount");
    }

    #[test]
    fn custom_rate_overrides_until_disabled() {
        let mut c = Converter::default();
        c.request.amount = "10".into();
        let t = c.refresh().unwrap();
        c.apply_outcome(ok(t, 0.9), today(), &mut StdRng::seed_from_u64(1));

        c.custom_rate = CustomRateOverride {
            value: "1.5".into(),
            enabled: true,
        };
        assert_eq!(c.conversion_line(), "10 USD = 15.00 EUR");
        assert_eq!(c.unit_rate_line().as_deref(), Some("1 USD = 1.5000 EUR"));

        c.custom_rate.value = "nope".into();
        assert_eq!(c.effective_rate(), EffectiveRate::InvalidCustom);
        assert_eq!(c.conversion_line(), UI_TEXT.invalid_custom_rate);
        assert_eq!(c.unit_rate_line(), None);

        c.custom_rate.enabled = false;
        assert_eq!(c.conversion_line(), "10 USD = 9.00 EUR");
    }

    #[test]
    fn failure_shows_banner_and_keeps_last_quote() {
        let mut c = Converter::default();
        let mut rng = StdRng::seed_from_u64(5);
        let t = c.refresh().unwrap();
        c.apply_outcome(ok(t, 0.9), today(), &mut rng);
        let history_before = c.history().to_vec();

        let t = c.refresh().unwrap();
        assert!(c.is_loading());
        assert!(c.apply_outcome(failed(t), today(), &mut rng));
        assert!(!c.is_loading());
        assert_eq!(
            c.error_message(),
            Some("Failed to fetch exchange rate. Please try again later.")
        );
        assert_eq!(c.quote().map(|q| q.rate), Some(0.9));
        assert_eq!(c.history(), history_before.as_slice());
    }

    #[test]
    fn stale_outcome_cannot_overwrite_newer_cycle() {
        let mut c = Converter::default();
        let mut rng = StdRng::seed_from_u64(2);
        let first = c.set_to(Currency::Gbp).unwrap();
        let second = c.set_to(Currency::Jpy).unwrap();

        // Older request lands first: ignored, still loading.
        assert!(!c.apply_outcome(ok(first, 0.8), today(), &mut rng));
        assert!(c.is_loading());
        assert!(c.quote().is_none());

        assert!(c.apply_outcome(ok(second, 150.0), today(), &mut rng));
        assert!(!c.is_loading());

        // Older request lands last: still ignored.
        assert!(!c.apply_outcome(ok(first, 0.8), today(), &mut rng));
        assert_eq!(c.quote().map(|q| q.rate), Some(150.0));
        assert_eq!(c.pair().to, Currency::Jpy);
    }

    #[test]
    fn swap_is_a_true_exchange() {
        let mut c = Converter::default();
        c.request.pair = CurrencyPair::new(Currency::Btc, Currency::Inr);
        let t = c.swap().unwrap();
        assert_eq!(c.pair(), CurrencyPair::new(Currency::Inr, Currency::Btc));
        assert_eq!(t.pair, c.pair());
    }

    #[test]
    fn range_change_resimulates_with_new_length() {
        let mut c = Converter::default();
        let mut rng = StdRng::seed_from_u64(11);
        let t = c.set_range(TimeRange::OneMonth).unwrap();
        c.apply_outcome(ok(t, 2.0), today(), &mut rng);
        assert_eq!(c.history().len(), 31);
        assert!(c.history_summary().is_some());
    }

    #[test]
    fn dark_mode_toggle_issues_no_ticket() {
        let mut c = Converter::default();
        assert_eq!(c.handle(ConverterAction::ToggleDarkMode), None);
        assert!(c.settings.dark_mode);
        assert!(matches!(c.phase(), ResolvePhase::Idle));
        assert!(c.handle(ConverterAction::Refresh).is_some());
    }

    #[test]
    fn nothing_to_show_before_first_quote() {
        let mut c = Converter::default();
        let _ = c.begin_resolve();
        assert_eq!(c.conversion_line(), UI_TEXT.loading_rate);
        assert_eq!(c.unit_rate_line(), None);
    }

    #[test]
    fn first_fetch_failing_stops_claiming_to_load() {
        let mut c = Converter::default();
        let t = c.refresh().unwrap();
        let outcome = ResolveOutcome {
            seq: t.seq,
            pair: t.pair,
            result: Err(RateError::Fetch { status: 500 }),
        };
        assert!(c.apply_outcome(outcome, today(), &mut StdRng::seed_from_u64(3)));
        assert!(!c.is_loading());
        assert!(c.error_message().is_some());
        assert!(c.quote().is_none());
        assert_eq!(c.conversion_line(), "Rate unavailable");
        assert_ne!(c.conversion_line(), UI_TEXT.loading_rate);
    }

    #[test]
    fn refresh_while_loading_supersedes_the_stalled_ticket() {
        let mut c = Converter::default();
        let mut rng = StdRng::seed_from_u64(6);
        let stalled = c.refresh().unwrap();
        let retry = c.handle(ConverterAction::Refresh).unwrap();
        assert!(retry.seq > stalled.seq);

        assert!(c.apply_outcome(ok(retry, 0.9), today(), &mut rng));
        assert!(!c.is_loading());
        // The stalled request finally answers: ignored.
        assert!(!c.apply_outcome(ok(stalled, 0.5), today(), &mut rng));
        assert_eq!(c.quote().map(|q| q.rate), Some(0.9));
    }
}
