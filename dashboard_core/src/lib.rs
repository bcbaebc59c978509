//! # Dashboard Core
//!
//! Data layer for the stock price dashboards.
//!
//! ## Features
//!
//! - CSV ingestion with schema validation and row-level cleanup
//! - Per-stock rolling enrichment: SMA 50, SMA 100, daily percentage
//!   change and trailing 20-day volatility
//! - An immutable view configuration covering the sidebar's filters,
//!   toggles, colors and theme
//! - Chart series assembly and CSV export for the presentation layer
//!
//! ## Quick Start
//!
//! ```no_run
//! use dashboard_core::{enrich, load_csv, ChartConfig};
//!
//! fn main() -> dashboard_core::Result<()> {
//!     // Load and enrich once
//!     let records = load_csv("Stocks_2025.csv")?;
//!     let enriched = enrich(records);
//!
//!     // Each interaction is a new config and a stateless assembly pass
//!     let config = ChartConfig {
//!         category: Some("IT".to_string()),
//!         ..ChartConfig::default()
//!     };
//!     let series = config.chart_series(&enriched);
//!
//!     for s in &series {
//!         println!("{}: {} points", s.name, s.points.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod enrich;
pub mod error;
pub mod export;
pub mod loader;
pub mod records;
pub mod view;

// Re-export commonly used items
pub use crate::enrich::{enrich, enrich_with_windows, Windows};
pub use crate::error::{DashboardError, Result};
pub use crate::export::{export_to_path, write_csv};
pub use crate::loader::{load_csv, load_from_reader};
pub use crate::records::{EnrichedRecord, PriceRecord};
pub use crate::view::{categories, date_bounds, stocks_in_category};
pub use crate::view::{ChartConfig, ChartSeries, LineStyle, Theme};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
