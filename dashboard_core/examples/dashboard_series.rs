//! Build chart series from synthetic data, the way a dashboard session
//! would: enrich once, then one immutable config per interaction.

use chrono::{Days, NaiveDate};
use dashboard_core::{categories, enrich, ChartConfig, PriceRecord, Theme};

fn main() {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");

    let mut records = Vec::new();
    for (stock, base) in [("TCS", 3500.0), ("INFY", 1500.0), ("HDFC", 1650.0)] {
        let category = if stock == "HDFC" { "Banking" } else { "IT" };
        for i in 0..120u64 {
            let wobble = (i as f64 * 0.37).sin() * base * 0.02;
            records.push(PriceRecord {
                date: start + Days::new(i),
                stock: stock.to_string(),
                category: category.to_string(),
                close: Some(base + i as f64 + wobble),
            });
        }
    }

    let enriched = enrich(records);
    println!("Categories: {:?}", categories(&enriched));

    // A user picked the IT category, one stock and a dark theme
    let config = ChartConfig {
        category: Some("IT".to_string()),
        stocks: vec!["TCS".to_string()],
        theme: Theme::Dark,
        ..ChartConfig::default()
    };

    for series in config.chart_series(&enriched) {
        println!(
            "{:24} {:8} {:?} with {} points",
            series.name,
            series.color,
            series.style,
            series.points.len()
        );
    }

    let preview = config.preview_tail(&enriched, 3);
    println!("Preview of the last {} rows:", preview.len());
    for record in preview {
        println!(
            "  {} {} close={:.2} sma50={:.2}",
            record.date,
            record.stock,
            record.close.unwrap_or(f64::NAN),
            record.sma_50.unwrap_or(f64::NAN)
        );
    }
}
