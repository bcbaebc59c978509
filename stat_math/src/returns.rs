//! Period-over-period returns

/// Percentage change from `prev` to `current`.
///
/// `None` when either value is missing or when `prev` is zero: a zero
/// denominator must surface as "undefined" rather than as an infinite
/// value leaking into downstream aggregates.
pub fn percent_change(prev: Option<f64>, current: Option<f64>) -> Option<f64> {
    match (prev, current) {
        (Some(p), Some(c)) if p != 0.0 => Some((c - p) / p * 100.0),
        _ => None,
    }
}

/// Percentage change across a whole series of slots.
///
/// The first element is always `None`; every other element compares a
/// slot against its immediate predecessor.
pub fn percent_change_series(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut changes = Vec::with_capacity(values.len());

    for (i, &current) in values.iter().enumerate() {
        if i == 0 {
            changes.push(None);
        } else {
            changes.push(percent_change(values[i - 1], current));
        }
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_percent_change() {
        assert_relative_eq!(
            percent_change(Some(100.0), Some(110.0)).unwrap(),
            10.0
        );
        assert_relative_eq!(
            percent_change(Some(110.0), Some(99.0)).unwrap(),
            -10.0
        );
    }

    #[test]
    fn test_undefined_inputs() {
        assert!(percent_change(None, Some(100.0)).is_none());
        assert!(percent_change(Some(100.0), None).is_none());
        assert!(percent_change(None, None).is_none());

        // Division by zero surfaces as undefined, not infinity
        assert!(percent_change(Some(0.0), Some(100.0)).is_none());
    }

    #[test]
    fn test_series() {
        let closes = vec![Some(100.0), Some(110.0), Some(99.0)];
        let changes = percent_change_series(&closes);

        assert_eq!(changes.len(), 3);
        assert!(changes[0].is_none());
        assert_relative_eq!(changes[1].unwrap(), 10.0);
        assert_relative_eq!(changes[2].unwrap(), -10.0);
    }

    #[test]
    fn test_series_with_gap() {
        let closes = vec![Some(100.0), None, Some(99.0)];
        let changes = percent_change_series(&closes);

        // No defined neighbor on either side of the gap
        assert!(changes[0].is_none());
        assert!(changes[1].is_none());
        assert!(changes[2].is_none());
    }
}
