//! Rolling dispersion measures
//!
//! The dashboards report volatility as the trailing sample standard
//! deviation of daily percentage changes.

use crate::{Result, StatsError};
use std::collections::VecDeque;

/// Sample standard deviation over the last `period` record slots.
///
/// Uses the unbiased n-1 estimator over the usable samples in the
/// window. As with [`crate::moving_averages::TrailingMean`], an empty
/// slot advances the window without contributing a sample.
#[derive(Debug, Clone)]
pub struct TrailingStdDev {
    period: usize,
    slots: VecDeque<Option<f64>>,
}

impl TrailingStdDev {
    /// Create a new trailing standard deviation with the specified
    /// window length
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(StatsError::InvalidInput(
                "Period must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            period,
            slots: VecDeque::with_capacity(period),
        })
    }

    /// Advance the window by one slot. `None` marks a record with no
    /// usable sample.
    pub fn push(&mut self, value: Option<f64>) {
        self.slots.push_back(value);

        if self.slots.len() > self.period {
            self.slots.pop_front();
        }
    }

    /// Sample standard deviation of the usable values in the window.
    ///
    /// `None` with fewer than two usable samples: a single observation
    /// has no dispersion under the n-1 estimator.
    pub fn value(&self) -> Option<f64> {
        let samples: Vec<f64> = self.slots.iter().copied().flatten().collect();
        if samples.len() < 2 {
            return None;
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance: f64 = samples
            .iter()
            .map(|&value| {
                let diff = value - mean;
                diff * diff
            })
            .sum::<f64>()
            / (n - 1.0);

        Some(variance.sqrt())
    }

    /// Get the nominal window length
    pub fn period(&self) -> usize {
        self.period
    }

    /// Reset the window, clearing all slots
    pub fn reset(&mut self) {
        self.slots.clear();
    }
}
