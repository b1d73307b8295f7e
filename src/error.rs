//! Error types for the generation engine

use thiserror::Error;

/// Errors raised by the generation engine and its configuration boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    /// Region name outside the catalog (recovered by the synthesizer's fallback)
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    /// Error rate outside `[0, max]`
    #[error("error rate must be between 0 and {max}, got {value}")]
    InvalidErrorRate { value: i64, max: u32 },

    /// Seed text that is not an unsigned integer
    #[error("invalid seed: {0:?}")]
    InvalidSeed(String),

    /// `advance_page` called before any `configure`
    #[error("engine has not been configured")]
    NotConfigured,

    /// Generation cycle produced a page that cannot be appended
    #[error("page {page} is incomplete: {reason}")]
    IncompletePage { page: u64, reason: String },
}
