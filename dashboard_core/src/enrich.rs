//! The rolling statistics engine
//!
//! Groups price records by stock, sorts each group by date and computes
//! the derived fields row by row. Derived values for a stock depend only
//! on that stock's own chronologically preceding records; interleaving
//! rows from different stocks in the input changes nothing.

use crate::error::Result;
use crate::records::{EnrichedRecord, PriceRecord};
use stat_math::moving_averages::TrailingMean;
use stat_math::returns::percent_change;
use stat_math::volatility::TrailingStdDev;
use std::collections::HashMap;

/// Window lengths used by the dashboards.
pub const SMA_SHORT_WINDOW: usize = 50;
pub const SMA_LONG_WINDOW: usize = 100;
pub const VOLATILITY_WINDOW: usize = 20;

/// Window lengths for the derived columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Windows {
    pub sma_short: usize,
    pub sma_long: usize,
    pub volatility: usize,
}

impl Default for Windows {
    fn default() -> Self {
        Self {
            sma_short: SMA_SHORT_WINDOW,
            sma_long: SMA_LONG_WINDOW,
            volatility: VOLATILITY_WINDOW,
        }
    }
}

/// Enrich price records with the dashboards' standard windows.
///
/// Input order is free: records are grouped by stock and stably sorted
/// by date before any window is computed, so date ties keep their input
/// order across runs. The output holds one record per input record, each
/// group in sorted order, groups following the first appearance of each
/// stock in the input.
///
/// This is a pure function: no I/O, no shared state, deterministic for a
/// given input sequence.
pub fn enrich(records: Vec<PriceRecord>) -> Vec<EnrichedRecord> {
    // The default windows are non-zero constants, construction cannot fail
    enrich_with_windows(records, Windows::default()).expect("default windows are valid")
}

/// Enrich price records with caller-chosen window lengths.
///
/// Fails only on a zero window length.
pub fn enrich_with_windows(
    records: Vec<PriceRecord>,
    windows: Windows,
) -> Result<Vec<EnrichedRecord>> {
    let mut group_order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<PriceRecord>> = HashMap::new();

    for record in records {
        if !groups.contains_key(&record.stock) {
            group_order.push(record.stock.clone());
        }
        groups.entry(record.stock.clone()).or_default().push(record);
    }

    let mut enriched = Vec::new();
    for stock in group_order {
        if let Some(mut group) = groups.remove(&stock) {
            // Stable: records sharing a date keep input order
            group.sort_by(|a, b| a.date.cmp(&b.date));
            enrich_group(group, windows, &mut enriched)?;
        }
    }

    Ok(enriched)
}

fn enrich_group(
    group: Vec<PriceRecord>,
    windows: Windows,
    out: &mut Vec<EnrichedRecord>,
) -> Result<()> {
    let mut sma_short = TrailingMean::new(windows.sma_short)?;
    let mut sma_long = TrailingMean::new(windows.sma_long)?;
    let mut volatility = TrailingStdDev::new(windows.volatility)?;
    let mut prev_close: Option<f64> = None;

    for record in group {
        let close = record.usable_close();

        sma_short.push(close);
        sma_long.push(close);

        let pct_change = percent_change(prev_close, close);
        volatility.push(pct_change);
        prev_close = close;

        // A record with an unusable close occupies its window slots but
        // gets no derived values of its own
        let (sma_50, sma_100, volatility_20) = if close.is_some() {
            (sma_short.value(), sma_long.value(), volatility.value())
        } else {
            (None, None, None)
        };

        out.push(EnrichedRecord {
            date: record.date,
            stock: record.stock,
            category: record.category,
            close: record.close,
            sma_50,
            sma_100,
            pct_change,
            volatility_20,
        });
    }

    Ok(())
}
