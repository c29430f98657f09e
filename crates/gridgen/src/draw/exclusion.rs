//! Padding and excluded-grid insertion.

use gridgen_core::{ExcludedGrids, Slot};

/// Appends blanks until `slots` fills `available_grids`.
///
/// Races already at or above the available grid count are left untouched.
pub fn pad_to_available(mut slots: Vec<Slot>, available_grids: usize) -> Vec<Slot> {
    if slots.len() < available_grids {
        slots.resize(available_grids, Slot::Blank);
    }
    slots
}

/// Inserts a blank at each excluded grid position.
///
/// Grids are visited in ascending order and each blank is inserted at index
/// `grid - 1` of the vector as it stands after the previous insertions, so a
/// race padded to the available grid count ends up exactly as long as the
/// full grid with every excluded grid blank.
///
/// # Panics
///
/// Panics if `slots` is shorter than the available grid count of the layout
/// `excluded` belongs to. [`pad_to_available`] establishes that length.
pub fn insert_excluded(mut slots: Vec<Slot>, excluded: &ExcludedGrids) -> Vec<Slot> {
    slots.reserve(excluded.len());
    for grid in excluded {
        slots.insert(grid as usize - 1, Slot::Blank);
    }
    slots
}
