//! fakeuser - Reproducible fake personal record generator
//!
//! Generates paginated streams of fake personal records (name, address,
//! phone) for a chosen region, with an optional rate of injected
//! data-quality errors. Output is fully determined by region, error rate,
//! base seed and page number.
//!
//! # Architecture
//!
//! - **Region catalog**: static phone and address templates per region
//! - **Seed derivation**: one deterministic seed per page (`base + page`)
//! - **Field synthesis**: name, address and phone from one shared seeded stream
//! - **Error injection**: deletions, insertions and transpositions per record
//! - **Pagination engine**: append-only record sequence with monotonic indices
//! - **Output**: text table, JSON snapshot and CSV export

pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod model;
pub mod output;
pub mod region;

// Re-export commonly used types
pub use config::GenerationConfig;
pub use engine::PaginationEngine;
pub use error::GenError;
pub use model::{Record, Snapshot, PAGE_SIZE};
pub use region::Region;

/// Result type used throughout fakeuser
pub type Result<T> = anyhow::Result<T>;
