//! Field synthesis
//!
//! Produces the uncorrupted name, address and phone of one record. All three
//! fields are drawn from one shared pseudo-random stream, in this order:
//!
//! 1. first name, last name
//! 2. city, street, building number (`1..=999`)
//! 3. one digit per `#` of the phone template, left to right
//!
//! The stream is not re-seeded between fields, so a field cannot be
//! reproduced in isolation from the fields drawn before it.

use crate::region::corpus::{FIRST_NAMES, LAST_NAMES};
use crate::region::{RegionCatalog, RegionSelector, RegionTemplate};
use rand::Rng;

/// Placeholder replaced by one random digit in phone templates
pub const DIGIT_PLACEHOLDER: char = '#';

/// Highest building number drawn for addresses
const MAX_BUILDING_NUMBER: u32 = 999;

/// Uncorrupted field values of one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// Synthesizes record fields for one region
pub struct FieldSynthesizer {
    template: &'static RegionTemplate,
}

impl FieldSynthesizer {
    pub fn new(template: &'static RegionTemplate) -> Self {
        Self { template }
    }

    /// Synthesizer for a selector; unknown regions use the default rules
    pub fn for_selector(selector: &RegionSelector) -> Self {
        Self::new(RegionCatalog::template_or_fallback(selector))
    }

    pub fn synthesize<R: Rng>(&self, rng: &mut R) -> Fields {
        let name = synthesize_name(rng);
        let address = synthesize_address(self.template, rng);
        let phone = synthesize_phone(self.template.phone_format, rng);
        Fields { name, address, phone }
    }
}

/// Full personal name; the corpus is shared by every region
pub fn synthesize_name<R: Rng>(rng: &mut R) -> String {
    let first = pick(FIRST_NAMES, rng);
    let last = pick(LAST_NAMES, rng);
    format!("{} {}", first, last)
}

/// `<city>, <street-with-number>`
pub fn synthesize_address<R: Rng>(template: &RegionTemplate, rng: &mut R) -> String {
    let city = pick(template.cities, rng);
    let street = pick(template.streets, rng);
    let number = rng.gen_range(1..=MAX_BUILDING_NUMBER);
    format!("{}, {}", city, template.address_style.format(street, number))
}

/// Fill every `#` in `format` with a random digit, left to right
pub fn synthesize_phone<R: Rng>(format: &str, rng: &mut R) -> String {
    format
        .chars()
        .map(|c| {
            if c == DIGIT_PLACEHOLDER {
                char::from(b'0' + rng.gen_range(0..10u8))
            } else {
                c
            }
        })
        .collect()
}

fn pick<'a, R: Rng>(pool: &[&'a str], rng: &mut R) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}
