//! Seed derivation for the day-stable shuffle.
//!
//! The seed combines four inputs with a fixed multiply-add combiner so the
//! same inputs produce the same seed on every platform:
//!
//! | Input          | Contribution |
//! |----------------|--------------|
//! | slots          | `fold(1, 31 * h + slot_hash)` over the sorted slots |
//! | excluded grids | wrapping sum of grid numbers (order independent) |
//! | heat number    | the 1-based heat number |
//! | day            | days since 1970-01-01 (UTC) |
//!
//! A participant's slot hash is `fold(0, 31 * h + char)` over its characters;
//! a blank hashes to zero. The four contributions are folded in the order
//! above starting from one. All arithmetic wraps on `u64`.

use chrono::{Datelike, NaiveDate};

use gridgen_core::{ExcludedGrids, Slot};

const MULTIPLIER: u64 = 31;

/// Days from 0001-01-01 to 1970-01-01 in the proleptic Gregorian calendar.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

fn combine(acc: u64, value: u64) -> u64 {
    acc.wrapping_mul(MULTIPLIER).wrapping_add(value)
}

fn slot_hash(slot: &Slot) -> u64 {
    match slot {
        Slot::Blank => 0,
        Slot::Participant(id) => id.chars().fold(0, |h, c| combine(h, u64::from(c))),
    }
}

fn slots_hash(slots: &[Slot]) -> u64 {
    slots.iter().fold(1, |h, slot| combine(h, slot_hash(slot)))
}

fn excluded_hash(excluded: &ExcludedGrids) -> u64 {
    excluded
        .iter()
        .fold(0u64, |h, grid| h.wrapping_add(u64::from(grid)))
}

/// Returns the number of days between the Unix epoch and `day`.
///
/// Days before the epoch are negative.
pub fn day_ordinal(day: NaiveDate) -> i64 {
    i64::from(day.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE
}

/// Derives the shuffle seed for a list of slots.
///
/// `slots` must already be in canonical (sorted) order; the seed is sensitive
/// to the order of the list but not to the iteration order of `excluded`.
pub fn derive_seed(
    slots: &[Slot],
    heat_number: u32,
    excluded: &ExcludedGrids,
    day: NaiveDate,
) -> u64 {
    [
        slots_hash(slots),
        excluded_hash(excluded),
        u64::from(heat_number),
        day_ordinal(day) as u64,
    ]
    .into_iter()
    .fold(1, combine)
}
