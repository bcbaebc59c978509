//! Typed rows of the dashboard's tabular data
//!
//! Column names in the serde attributes match the source CSV, so the
//! exported file keeps identical column semantics to the input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of market history as loaded from the source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Trading date
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Stock identifier, the grouping key
    #[serde(rename = "Stock")]
    pub stock: String,
    /// Classification label, used only for filtering
    #[serde(rename = "Category")]
    pub category: String,
    /// Closing price. `None` when the source field was missing or
    /// non-numeric.
    #[serde(rename = "Close")]
    pub close: Option<f64>,
}

impl PriceRecord {
    /// The close as usable for statistics: parsed, finite and strictly
    /// positive. Zero and negative prices are carried in `close` but
    /// never enter a mean or standard deviation.
    pub fn usable_close(&self) -> Option<f64> {
        self.close.filter(|c| c.is_finite() && *c > 0.0)
    }
}

/// A [`PriceRecord`] annotated with derived rolling statistics.
///
/// Derived fields are `None` where the statistic is undefined: before
/// enough samples exist, or when the record's own close is unusable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Stock")]
    pub stock: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Close")]
    pub close: Option<f64>,
    /// Trailing 50-record mean of the close (shrinking startup window)
    #[serde(rename = "SMA_50")]
    pub sma_50: Option<f64>,
    /// Trailing 100-record mean of the close (shrinking startup window)
    #[serde(rename = "SMA_100")]
    pub sma_100: Option<f64>,
    /// Close-over-previous-close change, in percent
    #[serde(rename = "Pct_Change")]
    pub pct_change: Option<f64>,
    /// Trailing sample standard deviation of `pct_change` over 20 records
    #[serde(rename = "Volatility_20")]
    pub volatility_20: Option<f64>,
}

impl EnrichedRecord {
    /// Strip the derived columns back off, e.g. to re-run enrichment on
    /// a previously exported file's rows.
    pub fn to_price_record(&self) -> PriceRecord {
        PriceRecord {
            date: self.date,
            stock: self.stock.clone(),
            category: self.category.clone(),
            close: self.close,
        }
    }
}
