use crate::{
    models::{HistoricalPoint, HistorySummary},
    utils::{min_max_mean, pct_change},
};

pub fn summarize(points: &[HistoricalPoint]) -> Option<HistorySummary> {
    let rates: Vec<f64> = points.iter().map(|p| p.rate).collect();
    let (min, max, mean) = min_max_mean(&rates)?;
    let first = rates.first().copied()?;
    let last = rates.last().copied()?;
    Some(HistorySummary {
        min,
        max,
        mean,
        change_pct: pct_change(first, last),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn summary_of_three_days() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let points: Vec<HistoricalPoint> = [1.0, 1.5, 1.1]
            .iter()
            .enumerate()
            .map(|(i, &rate)| HistoricalPoint {
                date: d + chrono::Days::new(i as u64),
                rate,
            })
            .collect();
        let s = summarize(&points).unwrap();
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 1.5);
        assert!((s.mean - 1.2).abs() < 1e-12);
        assert!((s.change_pct - 0.1).abs() < 1e-12);
        assert!(summarize(&[]).is_none());
    }
}
