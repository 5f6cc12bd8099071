/// Min, max and arithmetic mean in one pass. `None` for an empty slice.
pub(crate) fn min_max_mean(data: &[f64]) -> Option<(f64, f64, f64)> {
    if data.is_empty() {
        return None;
    }
    let (min, max, sum) = data.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, 0.0),
        |(min, max, sum), &v| (min.min(v), max.max(v), sum + v),
    );
    Some((min, max, sum / data.len() as f64))
}

/// Relative change from `from` to `to`. Zero when `from` is zero.
pub(crate) fn pct_change(from: f64, to: f64) -> f64 {
    if from == 0.0 { 0.0 } else { (to - from) / from }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_mean_of_small_series() {
        assert_eq!(min_max_mean(&[2.0, 4.0, 6.0]), Some((2.0, 6.0, 4.0)));
        assert_eq!(min_max_mean(&[]), None);
    }

    #[test]
    fn pct_change_guards_zero_base() {
        assert!((pct_change(100.0, 110.0) - 0.10).abs() < 1e-12);
        assert_eq!(pct_change(0.0, 5.0), 0.0);
    }
}
