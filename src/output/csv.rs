//! CSV export
//!
//! Writes the accumulated records with an `index,name,address,phone` header.
//! Addresses contain commas, so fields are quoted by the `csv` writer as
//! needed. Exports read a [`Snapshot`] and never touch the engine.

use crate::model::{Record, Snapshot};
use crate::Result;
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name for an export taken at `page`
pub fn export_file_name(page: u64) -> String {
    format!("data-page-{}.csv", page)
}

/// Write records (with header) to any writer
pub fn write_records<W: Write>(writer: W, records: &[Record]) -> Result<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    csv_writer.write_record(["index", "name", "address", "phone"])?;

    for record in records {
        csv_writer.write_record([
            record.index.to_string().as_str(),
            record.name.as_str(),
            record.address.as_str(),
            record.phone.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export a snapshot to `dir/data-page-<page>.csv`, returning the path
pub fn export_snapshot(snapshot: &Snapshot, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let path = dir.join(export_file_name(snapshot.page));
    let file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    write_records(std::io::BufWriter::new(file), &snapshot.records)
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;

    tracing::info!(path = %path.display(), records = snapshot.records.len(), "exported csv");
    Ok(path)
}
