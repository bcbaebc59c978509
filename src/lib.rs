//! # Stockboard
//!
//! Workspace facade for the stock dashboard data layer.
//!
//! The actual functionality lives in the member crates:
//!
//! - `stat_math` - rolling statistics primitives (trailing means,
//!   trailing sample standard deviation, percentage change)
//! - `dashboard_core` - CSV ingestion, the enrichment engine, the view
//!   configuration and CSV export
//!
//! ## Example
//!
//! ```no_run
//! use dashboard_core::{enrich, load_csv, ChartConfig};
//!
//! fn main() -> dashboard_core::Result<()> {
//!     let records = load_csv("Stocks_2025.csv")?;
//!     let enriched = enrich(records);
//!
//!     let series = ChartConfig::default().chart_series(&enriched);
//!     println!("{} series ready to draw", series.len());
//!     Ok(())
//! }
//! ```

pub use dashboard_core;
pub use stat_math;
