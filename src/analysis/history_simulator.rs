use {chrono::NaiveDate, rand::Rng};

use crate::{
    analysis::{FixedVolatility, VolatilityModel},
    domain::{CurrencyPair, TimeRange},
    models::HistoricalPoint,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Fake daily history: each day is the base rate nudged by a uniform draw in `[-v, +v]`.
/// Not a data fetch. Stands in for a real historical feed.
pub struct HistorySimulator {
    volatility: Box<dyn VolatilityModel>,
}

impl Default for HistorySimulator {
    fn default() -> Self {
        Self::new(Box::new(FixedVolatility::default()))
    }
}

impl HistorySimulator {
    pub fn new(volatility: Box<dyn VolatilityModel>) -> Self {
        Self { volatility }
    }

    pub fn volatility_for(&self, pair: CurrencyPair) -> f64 {
        self.volatility.volatility(pair).abs()
    }

    /// One point per calendar day from the range start to `today`, inclusive.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        base_rate: f64,
        pair: CurrencyPair,
        range: TimeRange,
        today: NaiveDate,
        rng: &mut R,
    ) -> Vec<HistoricalPoint> {
        let v = self.volatility_for(pair);
        let start = range.start_date(today);

        let mut points = Vec::with_capacity(range.day_count(today));
        points.extend(
            start
                .iter_days()
                .take_while(|d| *d <= today)
                .map(|date| HistoricalPoint {
                    date,
                    rate: base_rate * (1.0 + rng.gen_range(-v..=v)),
                }),
        );

        #[cfg(debug_assertions)]
        if DF.log_history {
            log::info!(
                "Simulated {} points for {} ({}, {} to {}) around {:.6}, volatility {:.2}",
                points.len(),
                pair,
                range,
                points.first().map(|p| p.date_label()).unwrap_or_default(),
                points.last().map(|p| p.date_label()).unwrap_or_default(),
                base_rate,
                v
            );
        }

        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Currency;
    use rand::{SeedableRng, rngs::StdRng};
    use strum::IntoEnumIterator;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    }

    #[test]
    fn length_matches_calendar_days_for_every_range() {
        let sim = HistorySimulator::default();
        let pair = CurrencyPair::new(Currency::Usd, Currency::Eur);
        let mut rng = StdRng::seed_from_u64(7);
        let expected = [
            (TimeRange::OneWeek, 8),
            (TimeRange::OneMonth, 31),
            (TimeRange::ThreeMonths, 91),
            (TimeRange::OneYear, 367),
        ];
        for (range, len) in expected {
            let points = sim.simulate(1.0, pair, range, today(), &mut rng);
            assert_eq!(points.len(), len, "{range}");
            assert_eq!(points.len(), range.day_count(today()));
            assert_eq!(points.first().map(|p| p.date), Some(range.start_date(today())));
            assert_eq!(points.last().map(|p| p.date), Some(today()));
        }
    }

    #[test]
    fn dates_are_consecutive() {
        let mut rng = StdRng::seed_from_u64(1);
        let points = HistorySimulator::default().simulate(
            2.0,
            CurrencyPair::default(),
            TimeRange::OneMonth,
            today(),
            &mut rng,
        );
        for w in points.windows(2) {
            assert_eq!(w[1].date - w[0].date, chrono::Duration::days(1));
        }
    }

    #[test]
    fn fiat_points_stay_within_five_percent() {
        let sim = HistorySimulator::default();
        let pair = CurrencyPair::new(Currency::Gbp, Currency::Jpy);
        let base = 190.0;
        let mut rng = StdRng::seed_from_u64(42);
        for p in sim.simulate(base, pair, TimeRange::OneYear, today(), &mut rng) {
            assert!(p.rate >= base * 0.95 - 1e-9 && p.rate <= base * 1.05 + 1e-9);
        }
    }

    #[test]
    fn crypto_legs_get_fifteen_percent() {
        let sim = HistorySimulator::default();
        let base = 15.0;
        let mut rng = StdRng::seed_from_u64(3);
        for pair in [
            CurrencyPair::new(Currency::Btc, Currency::Eth),
            CurrencyPair::new(Currency::Usd, Currency::Sol),
        ] {
            assert_eq!(sim.volatility_for(pair), 0.15);
            for p in sim.simulate(base, pair, TimeRange::OneYear, today(), &mut rng) {
                assert!(p.rate >= base * 0.85 - 1e-9 && p.rate <= base * 1.15 + 1e-9);
            }
        }
    }

    #[test]
    fn volatility_is_pluggable() {
        struct Flat;
        impl VolatilityModel for Flat {
            fn volatility(&self, _pair: CurrencyPair) -> f64 {
                0.0
            }
        }
        let sim = HistorySimulator::new(Box::new(Flat));
        let mut rng = StdRng::seed_from_u64(9);
        for range in TimeRange::iter() {
            let points = sim.simulate(3.5, CurrencyPair::default(), range, today(), &mut rng);
            assert!(points.iter().all(|p| p.rate == 3.5));
        }
    }
}
