//! Moving average calculations over trailing windows
//!
//! The dashboards draw simple moving averages with a shrinking startup
//! window: the average is defined from the first usable record onward
//! and only reaches its nominal length once enough records have been
//! seen (pandas' `min_periods=1` behavior).

use crate::{Result, StatsError};
use std::collections::VecDeque;

/// Simple moving average over the last `period` record slots.
///
/// Slots are pushed as `Option<f64>`. An empty slot occupies window
/// space without contributing to the mean, so a record with no usable
/// value keeps its place in the series and later records keep their
/// window membership unchanged.
#[derive(Debug, Clone)]
pub struct TrailingMean {
    period: usize,
    slots: VecDeque<Option<f64>>,
    sum: f64,
    usable: usize,
}

impl TrailingMean {
    /// Create a new trailing mean with the specified window length
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(StatsError::InvalidInput(
                "Period must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            period,
            slots: VecDeque::with_capacity(period),
            sum: 0.0,
            usable: 0,
        })
    }

    /// Advance the window by one slot. `None` marks a record whose value
    /// is unusable.
    pub fn push(&mut self, value: Option<f64>) {
        self.slots.push_back(value);
        if let Some(v) = value {
            self.sum += v;
            self.usable += 1;
        }

        // Drop the slot that fell out of the window
        if self.slots.len() > self.period {
            if let Some(old) = self.slots.pop_front().flatten() {
                self.sum -= old;
                self.usable -= 1;
            }
        }
    }

    /// Mean of the usable values currently in the window.
    ///
    /// `None` only when the window holds no usable value at all; with a
    /// shrinking startup window a single sample is enough.
    pub fn value(&self) -> Option<f64> {
        if self.usable == 0 {
            None
        } else {
            Some(self.sum / self.usable as f64)
        }
    }

    /// Get the nominal window length
    pub fn period(&self) -> usize {
        self.period
    }

    /// Reset the window, clearing all slots
    pub fn reset(&mut self) {
        self.slots.clear();
        self.sum = 0.0;
        self.usable = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_shrinking_startup_window() {
        let mut mean = TrailingMean::new(3).unwrap();

        // Defined from the very first sample
        mean.push(Some(2.0));
        assert_relative_eq!(mean.value().unwrap(), 2.0);

        mean.push(Some(4.0));
        assert_relative_eq!(mean.value().unwrap(), 3.0);

        mean.push(Some(6.0));
        assert_relative_eq!(mean.value().unwrap(), 4.0);

        // Full window now slides, dropping the oldest value
        mean.push(Some(8.0));
        assert_relative_eq!(mean.value().unwrap(), 6.0); // (4 + 6 + 8) / 3
    }

    #[test]
    fn test_empty_slots_preserve_alignment() {
        let mut mean = TrailingMean::new(3).unwrap();

        mean.push(Some(2.0));
        mean.push(None);
        mean.push(Some(4.0));

        // Mean over the two usable values
        assert_relative_eq!(mean.value().unwrap(), 3.0);

        // The empty slot still counts toward the window length: pushing
        // one more value evicts the slot holding 2.0
        mean.push(Some(6.0));
        assert_relative_eq!(mean.value().unwrap(), 5.0); // (4 + 6) / 2
    }

    #[test]
    fn test_no_usable_values() {
        let mut mean = TrailingMean::new(3).unwrap();
        assert!(mean.value().is_none());

        mean.push(None);
        mean.push(None);
        assert!(mean.value().is_none());
    }

    #[test]
    fn test_zero_period_rejected() {
        assert!(TrailingMean::new(0).is_err());
    }

    #[test]
    fn test_reset() {
        let mut mean = TrailingMean::new(2).unwrap();
        mean.push(Some(10.0));
        mean.reset();

        assert!(mean.value().is_none());
        mean.push(Some(4.0));
        assert_relative_eq!(mean.value().unwrap(), 4.0);
    }
}
