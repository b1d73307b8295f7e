//! Human-readable text output

use crate::model::{Record, Snapshot};
use std::fmt::Write;

const HEADERS: [&str; 4] = ["#", "Name", "Address", "Phone"];

/// Render records as an aligned text table
///
/// Column widths are measured in characters so non-ASCII names and
/// addresses stay aligned.
pub fn render_table(records: &[Record]) -> String {
    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|r| [r.index.to_string(), r.name.clone(), r.address.clone(), r.phone.clone()])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", separator.join("-+-"));
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width - cell.chars().count();
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

/// Print a snapshot to stdout
pub fn print_snapshot(snapshot: &Snapshot) {
    println!("═══════════════════════════════════════════════════════════");
    println!("                 FAKE USER DATA");
    println!("═══════════════════════════════════════════════════════════");
    println!(
        "Region: {}  Error rate: {}  Seed: {}  Page: {}",
        snapshot.region, snapshot.error_rate, snapshot.base_seed, snapshot.page
    );
    println!();
    print!("{}", render_table(&snapshot.records));
    println!();
    println!("{} record(s)", snapshot.records.len());
}
