//! Mock page source for testing
//!
//! Wraps the seeded generator and can be told to fail a number of cycles or
//! to return truncated pages, so retry and validation paths of the engine
//! can be exercised deterministically.
//!
//! # Example
//!
//! ```
//! use fakeuser::config::GenerationConfig;
//! use fakeuser::engine::PaginationEngine;
//! use fakeuser::engine::mock::MockPageSource;
//! use fakeuser::region::Region;
//!
//! let mut engine = PaginationEngine::with_source(MockPageSource::failing_first(1));
//! engine.configure(GenerationConfig::new(Region::Georgia, 0, Some(1))).unwrap();
//! assert_eq!(engine.current_records().len(), 10);
//! ```

use super::{PageSource, SeededPageSource};
use crate::config::GenerationConfig;
use crate::error::GenError;
use crate::generator::seed::SeedDeriver;
use crate::model::RecordPage;

/// Page source with injectable failures
#[derive(Debug, Clone, Default)]
pub struct MockPageSource {
    /// Cycles that still have to fail before generation succeeds
    failures_left: u32,
    /// Truncate every page to this many records
    truncate_to: Option<usize>,
    /// Total calls to `generate`
    calls: u32,
}

impl MockPageSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next `count` cycles
    pub fn failing_first(count: u32) -> Self {
        Self {
            failures_left: count,
            ..Self::default()
        }
    }

    /// Always return pages of `len` records
    pub fn short_pages(len: usize) -> Self {
        Self {
            truncate_to: Some(len),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls
    }
}

impl PageSource for MockPageSource {
    fn generate(
        &mut self,
        config: &GenerationConfig,
        deriver: &SeedDeriver,
        page: u64,
        first_index: u64,
    ) -> Result<RecordPage, GenError> {
        self.calls += 1;

        if self.failures_left > 0 {
            self.failures_left -= 1;
            return Err(GenError::IncompletePage {
                page,
                reason: "injected failure".to_string(),
            });
        }

        let mut generated = SeededPageSource.generate(config, deriver, page, first_index)?;
        if let Some(len) = self.truncate_to {
            generated.records.truncate(len);
        }
        Ok(generated)
    }
}
