//! CSV ingestion for the dashboards
//!
//! The source file is a flat table with one row per stock per trading
//! day. Required columns are `Date`, `Stock`, `Category` and `Close`;
//! anything else, including the unnamed index column pandas likes to
//! prepend, is ignored.
//!
//! Failure handling follows the taxonomy the dashboards rely on: an
//! unreadable source or a missing required column fails the whole load,
//! while a malformed row is dropped (bad date, empty symbol) or carried
//! with an unusable close (bad price) without aborting anything.

use crate::error::{DashboardError, Result};
use crate::records::PriceRecord;
use chrono::NaiveDate;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Per-row warnings are capped so a corrupt file cannot flood the log.
const MAX_ROW_WARNINGS: usize = 10;

/// Header indices of the required columns.
struct ColumnIndices {
    date: usize,
    stock: usize,
    category: usize,
    close: usize,
}

/// Load price records from a CSV file on disk.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<PriceRecord>> {
    let file = File::open(path.as_ref())?;
    load_from_reader(file)
}

/// Load price records from any CSV source.
///
/// Rows whose date does not parse, or whose stock id is empty after
/// whitespace cleanup, are excluded from the output entirely: they
/// cannot participate in any rolling window and must not shift window
/// alignment for the rest of the series.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<PriceRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = resolve_columns(&headers)?;

    let mut records = Vec::new();
    let mut dropped_dates = 0usize;
    let mut dropped_stocks = 0usize;
    let mut warnings = 0usize;

    for (row_index, row) in csv_reader.records().enumerate() {
        let row = row?;
        let line = row_index + 2; // header occupies line 1

        let date = match parse_date(&row, columns.date) {
            Some(date) => date,
            None => {
                dropped_dates += 1;
                if warnings < MAX_ROW_WARNINGS {
                    warn!(line, "dropping row with missing or unparseable date");
                    warnings += 1;
                }
                continue;
            }
        };

        let stock = clean_symbol(row.get(columns.stock).unwrap_or(""));
        if stock.is_empty() {
            dropped_stocks += 1;
            if warnings < MAX_ROW_WARNINGS {
                warn!(line, "dropping row with empty stock symbol");
                warnings += 1;
            }
            continue;
        }

        let category = row
            .get(columns.category)
            .unwrap_or("")
            .trim()
            .to_string();

        // Lenient: a bad close keeps its row as a placeholder so window
        // alignment survives, it just never enters a statistic.
        let close = row
            .get(columns.close)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|c| c.is_finite());

        records.push(PriceRecord {
            date,
            stock,
            category,
            close,
        });
    }

    let dropped = dropped_dates + dropped_stocks;
    if dropped > warnings {
        warn!(suppressed = dropped - warnings, "further dropped rows not logged individually");
    }
    info!(
        rows = records.len(),
        dropped_dates, dropped_stocks, "price history loaded"
    );

    Ok(records)
}

/// Locate the required columns in the header row, naming every missing
/// one in the error.
fn resolve_columns(headers: &csv::StringRecord) -> Result<ColumnIndices> {
    let find = |name: &str| headers.iter().position(|h| h.trim() == name);

    let date = find("Date");
    let stock = find("Stock");
    let category = find("Category");
    let close = find("Close");

    match (date, stock, category, close) {
        (Some(date), Some(stock), Some(category), Some(close)) => Ok(ColumnIndices {
            date,
            stock,
            category,
            close,
        }),
        _ => {
            let mut missing = Vec::new();
            for (name, found) in [
                ("Date", date),
                ("Stock", stock),
                ("Category", category),
                ("Close", close),
            ] {
                if found.is_none() {
                    missing.push(name.to_string());
                }
            }
            Err(DashboardError::MissingColumns(missing))
        }
    }
}

fn parse_date(row: &csv::StringRecord, index: usize) -> Option<NaiveDate> {
    row.get(index)
        .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok())
}

/// The source data carries stray spaces inside stock symbols; strip all
/// whitespace rather than just trimming the ends.
fn clean_symbol(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}
