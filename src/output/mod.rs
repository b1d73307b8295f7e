//! Output collaborators
//!
//! Render or export engine snapshots. None of them mutate engine state, so
//! they can run after any number of pages.

pub mod csv;
pub mod json;
pub mod text;
