//! Deterministic page generation
//!
//! One generation cycle turns `(config, base seed, page)` into exactly
//! [`PAGE_SIZE`] records:
//!
//! ```text
//! SeedDeriver::derive(page) ──► Xoshiro256PlusPlus
//!                                      │
//!            ┌─────────────────────────┘
//!            ▼   (x PAGE_SIZE, one shared stream)
//!   FieldSynthesizer::synthesize ──► ErrorInjector::inject ──► Record
//! ```
//!
//! The output is a pure function of its inputs: the same region, error rate,
//! base seed and page always produce identical records.
//!
//! # Example
//!
//! ```
//! use fakeuser::config::GenerationConfig;
//! use fakeuser::generator::{generate_page, seed::SeedDeriver};
//! use fakeuser::region::Region;
//!
//! let config = GenerationConfig::new(Region::Usa, 0, Some(42));
//! let deriver = SeedDeriver::new(config.seed);
//! let page = generate_page(&config, &deriver, 1, 1);
//! assert_eq!(page.records.len(), 10);
//! assert_eq!(page.records[0].index, 1);
//! ```

pub mod corrupt;
pub mod seed;
pub mod synth;

use crate::config::GenerationConfig;
use crate::model::{Record, RecordPage, PAGE_SIZE};
use corrupt::ErrorInjector;
use seed::SeedDeriver;
use synth::FieldSynthesizer;

/// Run one generation cycle
///
/// `first_index` is the index assigned to the first record of the page;
/// the rest follow consecutively.
pub fn generate_page(
    config: &GenerationConfig,
    deriver: &SeedDeriver,
    page: u64,
    first_index: u64,
) -> RecordPage {
    let seed = deriver.derive(page);
    let mut rng = deriver.rng_for_page(page);
    let synthesizer = FieldSynthesizer::for_selector(&config.region);
    let injector = ErrorInjector::new(config.error_rate);

    tracing::debug!(page, seed, first_index, region = %config.region, "generating page");

    let records = (0..PAGE_SIZE as u64)
        .map(|offset| {
            let fields = synthesizer.synthesize(&mut rng);
            let record = Record {
                index: first_index + offset,
                name: fields.name,
                address: fields.address,
                phone: fields.phone,
            };
            injector.inject(record, &mut rng)
        })
        .collect();

    RecordPage { page, records }
}
