//! Immutable view configuration for the dashboards
//!
//! Earlier revisions of the dashboards rebuilt global sidebar state on
//! every interaction. Here the whole selection is one plain value: a user
//! interaction maps to a single enrichment pass (already done at load)
//! followed by one stateless call into this module.

use crate::records::EnrichedRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rendering theme for the charting collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Line style of a chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    Solid,
    Dotted,
    Dashed,
}

/// One drawable line, ready for a charting collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Legend label, e.g. `"TCS Close"`
    pub name: String,
    /// Hex color
    pub color: String,
    pub style: LineStyle,
    /// `(date, value)` points, undefined values already skipped
    pub points: Vec<(NaiveDate, f64)>,
}

/// Everything the sidebar selects, as plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Restrict to one category; `None` means all categories
    pub category: Option<String>,
    /// Stocks to draw; empty means every stock passing the category filter
    pub stocks: Vec<String>,
    /// Inclusive date bounds
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub show_close: bool,
    pub show_sma_50: bool,
    pub show_sma_100: bool,
    pub close_color: String,
    pub sma_50_color: String,
    pub sma_100_color: String,
    pub theme: Theme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            category: None,
            stocks: Vec::new(),
            date_range: None,
            show_close: true,
            show_sma_50: true,
            show_sma_100: true,
            close_color: "#00cc96".to_string(),
            sma_50_color: "#636EFA".to_string(),
            sma_100_color: "#EF553B".to_string(),
            theme: Theme::Light,
        }
    }
}

impl ChartConfig {
    /// Records passing the category, stock and date-range predicates.
    pub fn filter<'a>(&self, records: &'a [EnrichedRecord]) -> Vec<&'a EnrichedRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    fn matches(&self, record: &EnrichedRecord) -> bool {
        if let Some(category) = &self.category {
            if record.category != *category {
                return false;
            }
        }
        if !self.stocks.is_empty() && !self.stocks.contains(&record.stock) {
            return false;
        }
        if let Some((start, end)) = self.date_range {
            if record.date < start || record.date > end {
                return false;
            }
        }
        true
    }

    /// Assemble the chart series the presentation layer draws.
    ///
    /// One series per selected stock and visible toggle. Close draws
    /// solid, SMA 50 dotted, SMA 100 dashed, in the configured colors.
    /// Rows with an undefined value are skipped rather than emitted as
    /// gaps; stocks with no matching rows produce no series at all.
    pub fn chart_series(&self, records: &[EnrichedRecord]) -> Vec<ChartSeries> {
        let filtered = self.filter(records);

        let stocks = if self.stocks.is_empty() {
            let mut all: Vec<String> = filtered.iter().map(|r| r.stock.clone()).collect();
            all.sort();
            all.dedup();
            all
        } else {
            self.stocks.clone()
        };

        let mut series = Vec::new();
        for stock in &stocks {
            let rows: Vec<&EnrichedRecord> = filtered
                .iter()
                .copied()
                .filter(|r| r.stock == *stock)
                .collect();
            if rows.is_empty() {
                continue;
            }

            if self.show_close {
                series.push(build_series(
                    format!("{} Close", stock),
                    &self.close_color,
                    LineStyle::Solid,
                    &rows,
                    |r| r.close,
                ));
            }
            if self.show_sma_50 {
                series.push(build_series(
                    format!("{} SMA 50", stock),
                    &self.sma_50_color,
                    LineStyle::Dotted,
                    &rows,
                    |r| r.sma_50,
                ));
            }
            if self.show_sma_100 {
                series.push(build_series(
                    format!("{} SMA 100", stock),
                    &self.sma_100_color,
                    LineStyle::Dashed,
                    &rows,
                    |r| r.sma_100,
                ));
            }
        }

        series
    }

    /// Last `n` rows passing the filter (the data preview table).
    pub fn preview_tail<'a>(
        &self,
        records: &'a [EnrichedRecord],
        n: usize,
    ) -> Vec<&'a EnrichedRecord> {
        let filtered = self.filter(records);
        let start = filtered.len().saturating_sub(n);
        filtered[start..].to_vec()
    }
}

fn build_series<F>(
    name: String,
    color: &str,
    style: LineStyle,
    rows: &[&EnrichedRecord],
    value: F,
) -> ChartSeries
where
    F: Fn(&EnrichedRecord) -> Option<f64>,
{
    let points = rows
        .iter()
        .filter_map(|r| value(r).map(|v| (r.date, v)))
        .collect();

    ChartSeries {
        name,
        color: color.to_string(),
        style,
        points,
    }
}

/// Sorted, deduplicated category labels for the sidebar.
pub fn categories(records: &[EnrichedRecord]) -> Vec<String> {
    let mut out: Vec<String> = records
        .iter()
        .filter(|r| !r.category.is_empty())
        .map(|r| r.category.clone())
        .collect();
    out.sort();
    out.dedup();
    out
}

/// Sorted, deduplicated stock symbols within one category.
pub fn stocks_in_category(records: &[EnrichedRecord], category: &str) -> Vec<String> {
    let mut out: Vec<String> = records
        .iter()
        .filter(|r| r.category == category)
        .map(|r| r.stock.clone())
        .collect();
    out.sort();
    out.dedup();
    out
}

/// Earliest and latest dates in the data, for the date picker bounds.
pub fn date_bounds(records: &[EnrichedRecord]) -> Option<(NaiveDate, NaiveDate)> {
    let min = records.iter().map(|r| r.date).min()?;
    let max = records.iter().map(|r| r.date).max()?;
    Some((min, max))
}
