use {
    async_trait::async_trait,
    chrono::NaiveDate,
    rand::{SeedableRng, rngs::StdRng},
    rate_scope::{
        Converter, Currency, CurrencyPair, RateError, RateResolver,
        app::ResolvePhase,
        data::{FiatRateProvider, ResolveOutcome, ResolveTicket, SimulatedCryptoTable},
        models::QuoteSource,
    },
    std::{collections::HashMap, sync::Arc},
};

/// Canned `rates` table keyed by (from, to). Unknown pairs fail like a 404.
struct TableFiat(HashMap<(Currency, Currency), f64>);

#[async_trait]
impl FiatRateProvider for TableFiat {
    async fn latest_rate(&self, from: Currency, to: Currency) -> Result<f64, RateError> {
        self.0
            .get(&(from, to))
            .copied()
            .ok_or(RateError::Fetch { status: 404 })
    }
}

fn resolver() -> RateResolver {
    let rates = HashMap::from([
        ((Currency::Usd, Currency::Eur), 0.9),
        ((Currency::Eur, Currency::Usd), 1.1),
    ]);
    RateResolver::new(Arc::new(SimulatedCryptoTable), Arc::new(TableFiat(rates)))
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
}

async fn run(resolver: &RateResolver, ticket: ResolveTicket) -> ResolveOutcome {
    ResolveOutcome {
        seq: ticket.seq,
        pair: ticket.pair,
        result: resolver.resolve(ticket.pair).await,
    }
}

#[tokio::test]
async fn default_pair_converts_one_hundred_dollars() {
    let resolver = resolver();
    let mut rng = StdRng::seed_from_u64(17);
    let mut converter = Converter::default();
    converter.request.amount = "100".to_string();

    let ticket = converter.begin_resolve();
    assert_eq!(ticket.pair, CurrencyPair::new(Currency::Usd, Currency::Eur));
    let outcome = run(&resolver, ticket).await;
    assert!(converter.apply_outcome(outcome, today(), &mut rng));

    assert_eq!(converter.conversion_line(), "100 USD = 90.00 EUR");
    assert_eq!(converter.unit_rate_line().as_deref(), Some("1 USD = 0.9000 EUR"));
    assert_eq!(converter.quote().map(|q| q.source), Some(QuoteSource::Remote));
    assert_eq!(converter.history().len(), 8);
}

#[tokio::test]
async fn crypto_pair_then_swap() {
    let resolver = resolver();
    let mut rng = StdRng::seed_from_u64(4);
    let mut converter = Converter::default();

    let _ = converter.set_from(Currency::Btc);
    let ticket = converter.set_to(Currency::Eth).unwrap();
    let outcome = run(&resolver, ticket).await;
    converter.apply_outcome(outcome, today(), &mut rng);
    assert_eq!(converter.quote().map(|q| q.rate), Some(15.0));
    assert_eq!(converter.quote().map(|q| q.source), Some(QuoteSource::Simulated));

    let ticket = converter.swap().unwrap();
    assert_eq!(ticket.pair, CurrencyPair::new(Currency::Eth, Currency::Btc));
    let outcome = run(&resolver, ticket).await;
    converter.apply_outcome(outcome, today(), &mut rng);
    assert_eq!(converter.quote().map(|q| q.rate), Some(3_000.0 / 45_000.0));
    for point in converter.history() {
        let base = 3_000.0 / 45_000.0;
        assert!(point.rate >= base * 0.85 - 1e-12 && point.rate <= base * 1.15 + 1e-12);
    }
}

#[tokio::test]
async fn failed_fetch_clears_loading_and_keeps_last_rate() {
    let resolver = resolver();
    let mut rng = StdRng::seed_from_u64(8);
    let mut converter = Converter::default();

    let outcome = run(&resolver, converter.refresh().unwrap()).await;
    converter.apply_outcome(outcome, today(), &mut rng);

    let ticket = converter.set_to(Currency::Chf).unwrap();
    assert!(converter.is_loading());
    let outcome = run(&resolver, ticket).await;
    assert!(outcome.result.is_err());
    converter.apply_outcome(outcome, today(), &mut rng);

    assert!(!converter.is_loading());
    assert!(matches!(converter.phase(), ResolvePhase::Failed(_)));
    assert_eq!(
        converter.error_message(),
        Some("Failed to fetch exchange rate. Please try again later.")
    );
    assert_eq!(converter.quote().map(|q| q.rate), Some(0.9));
}

#[tokio::test]
async fn slow_response_for_old_pair_is_ignored() {
    let resolver = resolver();
    let mut rng = StdRng::seed_from_u64(21);
    let mut converter = Converter::default();

    let slow = converter.refresh().unwrap();
    let fast = converter.set_from(Currency::Sol).unwrap();

    let fast_outcome = run(&resolver, fast).await;
    assert!(converter.apply_outcome(fast_outcome, today(), &mut rng));
    let slow_outcome = run(&resolver, slow).await;
    assert!(!converter.apply_outcome(slow_outcome, today(), &mut rng));

    assert_eq!(converter.pair(), CurrencyPair::new(Currency::Sol, Currency::Eur));
    assert_eq!(converter.quote().map(|q| q.rate), Some(100.0));
    assert!(matches!(converter.phase(), ResolvePhase::Ready(_)));
}
