//! Day-stable deterministic shuffle.

use chrono::NaiveDate;
use log::trace;
use rand::{SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

use gridgen_core::{ExcludedGrids, Slot};

use super::seed::derive_seed;

/// Returns a seeded permutation of `slots`.
///
/// The input is first sorted into canonical order so the result depends only
/// on the slot values, never on the order they were supplied in. The sorted
/// list is then shuffled with a Fisher-Yates pass driven by ChaCha8 seeded
/// from [`derive_seed`].
pub fn randomize(
    slots: &[Slot],
    heat_number: u32,
    excluded: &ExcludedGrids,
    day: NaiveDate,
) -> Vec<Slot> {
    let mut shuffled = slots.to_vec();
    shuffled.sort();

    let seed = derive_seed(&shuffled, heat_number, excluded, day);
    trace!(seed, heat_number, len = shuffled.len(); "Shuffling slots");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    shuffled.shuffle(&mut rng);
    shuffled
}
