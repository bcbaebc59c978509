//! Load a stock history CSV, enrich it and optionally export the result.
//!
//! Usage:
//!   cargo run --example enrich_csv -- <input.csv> [output.csv]

use dashboard_core::{enrich, export_to_path, load_csv};

fn main() -> dashboard_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "Stocks_2025.csv".to_string());
    let output = args.next();

    let records = load_csv(&input)?;
    let enriched = enrich(records);
    println!("Enriched {} rows from {}", enriched.len(), input);

    let tail = enriched.len().saturating_sub(5);
    for record in &enriched[tail..] {
        println!(
            "{} {:>8} close={:>10} sma50={:>10} pct={:>8} vol20={:>8}",
            record.date,
            record.stock,
            fmt(record.close),
            fmt(record.sma_50),
            fmt(record.pct_change),
            fmt(record.volatility_20),
        );
    }

    if let Some(output) = output {
        export_to_path(&enriched, &output)?;
        println!("Exported enriched data to {}", output);
    }

    Ok(())
}

fn fmt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}
