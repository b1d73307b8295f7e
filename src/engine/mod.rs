//! Pagination engine
//!
//! Owns the accumulated record sequence and the page counter, and is the only
//! place that mutates them. Two events drive it:
//!
//! - **configure**: drop everything, restart at page 1 and generate it
//! - **advance_page**: generate the next page with the same configuration
//!   and append it, indices continuing from `len + 1`
//!
//! # States
//!
//! ```text
//!            configure / advance_page
//!   ┌──────┐ ──────────────────────────► ┌────────────┐
//!   │ Idle │                             │ Generating │
//!   └──────┘ ◄────────────────────────── └────────────┘
//!              complete page appended
//! ```
//!
//! A cycle appends a page only once all [`PAGE_SIZE`] records are built.
//! A failed cycle is retried as a whole; if every attempt fails the engine
//! stays in `Generating`, ignores `advance_page`, and can be driven again
//! with [`PaginationEngine::resume`] or [`PaginationEngine::configure`].
//!
//! The engine is synchronous and single-writer. Callers serialize their
//! calls; no locking happens inside.
//!
//! # Example
//!
//! ```
//! use fakeuser::config::GenerationConfig;
//! use fakeuser::engine::PaginationEngine;
//! use fakeuser::region::Region;
//!
//! let mut engine = PaginationEngine::new();
//! engine.configure(GenerationConfig::new(Region::Usa, 0, Some(42))).unwrap();
//! engine.advance_page().unwrap();
//!
//! assert_eq!(engine.current_page(), 2);
//! assert_eq!(engine.current_records().len(), 20);
//! assert_eq!(engine.current_records()[10].index, 11);
//! ```

pub mod mock;

use crate::config::GenerationConfig;
use crate::error::GenError;
use crate::generator::generate_page;
use crate::generator::seed::SeedDeriver;
use crate::model::{Record, RecordPage, Snapshot, PAGE_SIZE};

/// Attempts per generation cycle before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Produces the records of one page
///
/// The engine validates the returned page before appending it.
pub trait PageSource {
    fn generate(
        &mut self,
        config: &GenerationConfig,
        deriver: &SeedDeriver,
        page: u64,
        first_index: u64,
    ) -> Result<RecordPage, GenError>;
}

/// Deterministic seeded generation
#[derive(Debug, Clone, Copy, Default)]
pub struct SeededPageSource;

impl PageSource for SeededPageSource {
    fn generate(
        &mut self,
        config: &GenerationConfig,
        deriver: &SeedDeriver,
        page: u64,
        first_index: u64,
    ) -> Result<RecordPage, GenError> {
        Ok(generate_page(config, deriver, page, first_index))
    }
}

/// Engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    /// A cycle for `page` is running or has failed and awaits `resume`
    Generating { page: u64 },
}

/// Outcome of a page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Appended { page: u64, first_index: u64, last_index: u64 },
    /// Request arrived while a cycle was pending
    Ignored,
}

struct Session {
    config: GenerationConfig,
    deriver: SeedDeriver,
}

/// Accumulates pages of generated records for one configuration
pub struct PaginationEngine<S: PageSource = SeededPageSource> {
    source: S,
    session: Option<Session>,
    state: EngineState,
    page: u64,
    records: Vec<Record>,
    max_attempts: u32,
}

impl PaginationEngine<SeededPageSource> {
    pub fn new() -> Self {
        Self::with_source(SeededPageSource)
    }
}

impl Default for PaginationEngine<SeededPageSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PageSource> PaginationEngine<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            session: None,
            state: EngineState::Idle,
            page: 1,
            records: Vec::new(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Start over with `config` and generate page 1
    ///
    /// A missing base seed is resolved here, once for the whole session.
    pub fn configure(&mut self, config: GenerationConfig) -> Result<Advance, GenError> {
        let deriver = SeedDeriver::new(config.seed);
        tracing::info!(%config, base_seed = deriver.base(), "configuration changed");

        self.session = Some(Session { config, deriver });
        self.records.clear();
        self.page = 1;
        self.run_cycle(1)
    }

    /// Generate and append the next page
    pub fn advance_page(&mut self) -> Result<Advance, GenError> {
        if self.session.is_none() {
            return Err(GenError::NotConfigured);
        }
        if let EngineState::Generating { page } = self.state {
            tracing::debug!(page, "advance ignored, generation pending");
            return Ok(Advance::Ignored);
        }

        self.page += 1;
        self.run_cycle(self.page)
    }

    /// Retry a cycle left pending by a failure
    pub fn resume(&mut self) -> Result<Advance, GenError> {
        match self.state {
            EngineState::Generating { page } => self.run_cycle(page),
            EngineState::Idle => Ok(Advance::Ignored),
        }
    }

    fn run_cycle(&mut self, page: u64) -> Result<Advance, GenError> {
        let session = self.session.as_ref().ok_or(GenError::NotConfigured)?;
        let first_index = self.records.len() as u64 + 1;
        self.state = EngineState::Generating { page };

        let mut last_error = GenError::NotConfigured;
        for attempt in 1..=self.max_attempts {
            let result = self
                .source
                .generate(&session.config, &session.deriver, page, first_index)
                .and_then(|generated| check_page(generated, page, first_index));

            match result {
                Ok(generated) => {
                    let last_index = first_index + generated.records.len() as u64 - 1;
                    self.records.extend(generated.records);
                    self.state = EngineState::Idle;
                    tracing::info!(page, first_index, last_index, "page appended");
                    return Ok(Advance::Appended { page, first_index, last_index });
                }
                Err(err) => {
                    tracing::warn!(page, attempt, %err, "generation cycle failed");
                    last_error = err;
                }
            }
        }

        Err(last_error)
    }

    pub fn current_records(&self) -> &[Record] {
        &self.records
    }

    pub fn current_page(&self) -> u64 {
        self.page
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn config(&self) -> Option<&GenerationConfig> {
        self.session.as_ref().map(|s| &s.config)
    }

    /// Resolved base seed of the current session
    pub fn base_seed(&self) -> Option<u64> {
        self.session.as_ref().map(|s| s.deriver.base())
    }

    /// Owned copy of the accumulated state; `None` before the first `configure`
    pub fn snapshot(&self) -> Option<Snapshot> {
        let session = self.session.as_ref()?;
        Some(Snapshot {
            region: session.config.region.to_string(),
            error_rate: session.config.error_rate,
            base_seed: session.deriver.base(),
            page: self.page,
            records: self.records.clone(),
        })
    }
}

/// Reject pages that would break the index sequence
fn check_page(generated: RecordPage, page: u64, first_index: u64) -> Result<RecordPage, GenError> {
    if generated.records.len() != PAGE_SIZE {
        return Err(GenError::IncompletePage {
            page,
            reason: format!("expected {} records, got {}", PAGE_SIZE, generated.records.len()),
        });
    }

    for (expected, record) in (first_index..).zip(&generated.records) {
        if record.index != expected {
            return Err(GenError::IncompletePage {
                page,
                reason: format!("expected index {}, got {}", expected, record.index),
            });
        }
    }

    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::mock::MockPageSource;
    use super::*;
    use crate::region::Region;

    fn usa_config() -> GenerationConfig {
        GenerationConfig::new(Region::Usa, 2, Some(42))
    }

    #[test]
    fn test_initial_state() {
        let engine = PaginationEngine::new();
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.current_page(), 1);
        assert!(engine.current_records().is_empty());
        assert!(engine.snapshot().is_none());
    }

    #[test]
    fn test_advance_before_configure() {
        let mut engine = PaginationEngine::new();
        assert_eq!(engine.advance_page(), Err(GenError::NotConfigured));
    }

    #[test]
    fn test_configure_generates_first_page() {
        let mut engine = PaginationEngine::new();
        let outcome = engine.configure(usa_config()).unwrap();

        assert_eq!(outcome, Advance::Appended { page: 1, first_index: 1, last_index: 10 });
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.current_page(), 1);
        assert_eq!(engine.current_records().len(), PAGE_SIZE);
    }

    #[test]
    fn test_index_continuity() {
        let mut engine = PaginationEngine::new();
        engine.configure(usa_config()).unwrap();
        for _ in 0..7 {
            engine.advance_page().unwrap();
        }

        assert_eq!(engine.current_page(), 8);
        assert_eq!(engine.current_records().len(), 8 * PAGE_SIZE);
        for (i, record) in engine.current_records().iter().enumerate() {
            assert_eq!(record.index, i as u64 + 1);
        }
    }

    #[test]
    fn test_reconfigure_resets() {
        let mut engine = PaginationEngine::new();
        engine.configure(usa_config()).unwrap();
        engine.advance_page().unwrap();
        engine.advance_page().unwrap();

        engine.configure(GenerationConfig::new(Region::Usa, 5, Some(42))).unwrap();
        assert_eq!(engine.current_page(), 1);
        assert_eq!(engine.current_records().len(), PAGE_SIZE);
        assert_eq!(engine.current_records()[0].index, 1);
        assert_eq!(engine.config().unwrap().error_rate, 5);
    }

    #[test]
    fn test_pages_match_direct_generation() {
        let mut engine = PaginationEngine::new();
        engine.configure(usa_config()).unwrap();
        engine.advance_page().unwrap();

        let deriver = SeedDeriver::new(Some(42));
        let page2 = generate_page(&usa_config(), &deriver, 2, 11);
        assert_eq!(&engine.current_records()[10..], page2.records.as_slice());
    }

    #[test]
    fn test_random_seed_resolved_once() {
        let mut engine = PaginationEngine::new();
        engine.configure(GenerationConfig::new(Region::Poland, 0, None)).unwrap();
        engine.advance_page().unwrap();

        let base = engine.base_seed().unwrap();
        let replay = generate_page(
            &GenerationConfig::new(Region::Poland, 0, Some(base)),
            &SeedDeriver::new(Some(base)),
            2,
            11,
        );
        assert_eq!(&engine.current_records()[10..], replay.records.as_slice());
    }

    #[test]
    fn test_snapshot() {
        let mut engine = PaginationEngine::new();
        engine.configure(usa_config()).unwrap();
        engine.advance_page().unwrap();

        let snapshot = engine.snapshot().unwrap();
        assert_eq!(snapshot.region, "USA");
        assert_eq!(snapshot.error_rate, 2);
        assert_eq!(snapshot.base_seed, 42);
        assert_eq!(snapshot.page, 2);
        assert_eq!(snapshot.records, engine.current_records());
    }

    #[test]
    fn test_transient_failure_is_retried() {
        let mut engine = PaginationEngine::with_source(MockPageSource::failing_first(2));
        let outcome = engine.configure(usa_config()).unwrap();

        assert!(matches!(outcome, Advance::Appended { page: 1, .. }));
        assert_eq!(engine.current_records().len(), PAGE_SIZE);
    }

    #[test]
    fn test_exhausted_retries_stay_generating() {
        let mut engine = PaginationEngine::with_source(MockPageSource::failing_first(5))
            .with_max_attempts(3);

        assert!(engine.configure(usa_config()).is_err());
        assert_eq!(engine.state(), EngineState::Generating { page: 1 });
        assert!(engine.current_records().is_empty());

        // Advance requests are ignored while the cycle is pending
        assert_eq!(engine.advance_page(), Ok(Advance::Ignored));
        assert_eq!(engine.current_page(), 1);

        // Two failures left, then success
        assert!(engine.resume().is_ok());
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.current_records().len(), PAGE_SIZE);
        assert_eq!(engine.resume(), Ok(Advance::Ignored));
    }

    #[test]
    fn test_short_page_rejected() {
        let mut engine = PaginationEngine::with_source(MockPageSource::short_pages(4));
        let err = engine.configure(usa_config()).unwrap_err();

        assert!(matches!(err, GenError::IncompletePage { page: 1, .. }));
        assert!(engine.current_records().is_empty());
    }
}
