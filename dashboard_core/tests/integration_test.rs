use chrono::NaiveDate;
use dashboard_core::{enrich, export_to_path, load_csv, ChartConfig};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

/// Full pipeline: load a messy file, enrich, assemble series, export,
/// reload the export and verify the derived values survive untouched.
#[test]
fn test_load_enrich_render_export_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Date,Stock,Category,Close").unwrap();
    // Interleaved stocks, unordered dates, one bad date, one bad close
    writeln!(file, "2025-01-03,TCS,IT,3520.0").unwrap();
    writeln!(file, "2025-01-01,HDFC,Banking,1650.0").unwrap();
    writeln!(file, "2025-01-01,TCS,IT,3500.0").unwrap();
    writeln!(file, "garbage,TCS,IT,9999.0").unwrap();
    writeln!(file, "2025-01-02,HDFC,Banking,n/a").unwrap();
    writeln!(file, "2025-01-02,TCS,IT,3510.0").unwrap();
    writeln!(file, "2025-01-03,HDFC,Banking,1670.0").unwrap();

    let records = load_csv(file.path()).unwrap();

    // The bad-date row is gone entirely, the bad-close row survives
    assert_eq!(records.len(), 6);

    let enriched = enrich(records);
    assert_eq!(enriched.len(), 6);

    // TCS appeared first in the input, sorted by date within the group
    let dates: Vec<NaiveDate> = enriched
        .iter()
        .filter(|r| r.stock == "TCS")
        .map(|r| r.date)
        .collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
        ]
    );

    // The ghost 9999.0 close never entered a window
    let tcs_last = enriched
        .iter()
        .filter(|r| r.stock == "TCS")
        .last()
        .unwrap();
    let expected_sma = (3500.0 + 3510.0 + 3520.0) / 3.0;
    assert!((tcs_last.sma_50.unwrap() - expected_sma).abs() < 1e-9);

    // Sidebar-style interaction: one config, one stateless assembly
    let config = ChartConfig {
        category: Some("IT".to_string()),
        ..ChartConfig::default()
    };
    let series = config.chart_series(&enriched);
    assert_eq!(series.len(), 3);
    assert!(series.iter().all(|s| s.name.starts_with("TCS")));

    // Export and reload: identical derived values
    let export = NamedTempFile::new().unwrap();
    export_to_path(&enriched, export.path()).unwrap();

    let re_enriched = enrich(load_csv(export.path()).unwrap());
    assert_eq!(enriched, re_enriched);
}
