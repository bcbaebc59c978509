//! CSV export of enriched rows
//!
//! A pass-through of the enriched structure: the source columns plus the
//! derived ones, suitable for download. Undefined derived values become
//! empty fields, and loading an exported file again yields the same raw
//! columns the loader produces.

use crate::error::Result;
use crate::records::EnrichedRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write enriched records as CSV to any writer.
pub fn write_csv<W: Write>(records: &[EnrichedRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Write enriched records as CSV to a file path.
pub fn export_to_path<P: AsRef<Path>>(records: &[EnrichedRecord], path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv(records, file)
}
