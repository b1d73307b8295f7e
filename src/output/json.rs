//! JSON output
//!
//! Serializes a [`Snapshot`]: the configuration that produced it, the
//! resolved base seed, the current page and all accumulated records.

use crate::model::Snapshot;
use crate::Result;
use anyhow::Context;
use std::io::Write;

/// Serialize a snapshot as pretty-printed JSON
pub fn snapshot_to_json(snapshot: &Snapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")
}

/// Write a snapshot as JSON followed by a newline
pub fn write_snapshot<W: Write>(mut writer: W, snapshot: &Snapshot) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, snapshot).context("Failed to serialize snapshot")?;
    writeln!(writer)?;
    Ok(())
}
