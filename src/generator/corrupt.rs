//! Field-level error injection
//!
//! Simulates data-entry mistakes. For each record the injector draws
//! `floor(uniform * error_rate)` corruption passes; each pass picks a field
//! and one of three operations:
//!
//! - **Deletion**: remove the character at a random index
//! - **Insertion**: insert a random lowercase letter at a random index
//! - **Transposition**: swap the characters at `i` and `i + 1`
//!
//! Every pass works on the current, possibly already corrupted, value, so
//! passes on the same field compound. Operations are bounds-checked against
//! the current length: an empty field stays empty and a transposition at the
//! last index leaves the field unchanged.
//!
//! Fields are handled as sequences of `char`, never bytes.

use crate::model::{Field, Record};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Corruption operation applied by one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorruptionOp {
    Deletion,
    Insertion,
    Transposition,
}

/// One applied corruption pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corruption {
    pub field: Field,
    pub op: CorruptionOp,
    /// Character index the operation targeted, `None` for a no-op on an empty field
    pub index: Option<usize>,
    /// Letter added by an insertion
    pub letter: Option<char>,
}

/// Applies random corruption passes at a fixed rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorInjector {
    error_rate: u32,
}

impl ErrorInjector {
    pub fn new(error_rate: u32) -> Self {
        Self { error_rate }
    }

    /// Number of passes for one record, in `[0, error_rate)`
    pub fn draw_pass_count<R: Rng>(&self, rng: &mut R) -> u32 {
        // Always consumes one draw, including at rate 0
        let uniform: f64 = rng.gen();
        (uniform * f64::from(self.error_rate)).floor() as u32
    }

    pub fn inject<R: Rng>(&self, record: Record, rng: &mut R) -> Record {
        self.inject_traced(record, rng).0
    }

    /// Inject errors and return the passes that were applied
    pub fn inject_traced<R: Rng>(&self, mut record: Record, rng: &mut R) -> (Record, Vec<Corruption>) {
        let passes = self.draw_pass_count(rng);
        let mut applied = Vec::with_capacity(passes as usize);

        for _ in 0..passes {
            let field = Field::ALL[rng.gen_range(0..Field::ALL.len())];
            let value = record.field_mut(field);
            let corruption = corrupt_field(value, field, rng);
            tracing::debug!(index = record.index, ?corruption, "corruption pass");
            applied.push(corruption);
        }

        (record, applied)
    }
}

/// Apply one randomly chosen operation to `value` in place
fn corrupt_field<R: Rng>(value: &mut String, field: Field, rng: &mut R) -> Corruption {
    let op_choice = rng.gen_range(0..3u8);
    let mut chars: Vec<char> = value.chars().collect();
    let len = chars.len();

    let op = match op_choice {
        0 => CorruptionOp::Deletion,
        1 => CorruptionOp::Insertion,
        _ => CorruptionOp::Transposition,
    };

    if len == 0 {
        return Corruption { field, op, index: None, letter: None };
    }

    let index = rng.gen_range(0..len);
    let mut letter = None;
    match op {
        CorruptionOp::Deletion => {
            chars.remove(index);
        }
        CorruptionOp::Insertion => {
            let c = char::from(b'a' + rng.gen_range(0..26u8));
            chars.insert(index, c);
            letter = Some(c);
        }
        CorruptionOp::Transposition => {
            if index + 1 < len {
                chars.swap(index, index + 1);
            }
        }
    }

    *value = chars.into_iter().collect();
    Corruption { field, op, index: Some(index), letter }
}
