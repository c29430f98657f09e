//! Grid layouts and excluded grid sets.
//!
//! A [`GridLayout`] describes the physical starting grid for one draw: how many
//! grids exist and which of them are unavailable. Excluded grids are validated
//! when the layout is built so the draw itself cannot produce races of the
//! wrong length.
//!
//! # Example
//!
//! ```
//! use gridgen_core::{ExcludedGrids, GridLayout};
//!
//! let excluded = ExcludedGrids::new([2, 4, 6, 8], 10).unwrap();
//! let layout = GridLayout::new(10, excluded).unwrap();
//!
//! assert_eq!(layout.available_grids(), 6);
//! ```

use std::collections::BTreeSet;

use log::debug;

use crate::error::GridError;

/// A validated set of excluded grid numbers.
///
/// Grid numbers are 1-based and iterate in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludedGrids {
    grids: BTreeSet<u32>,
}

impl ExcludedGrids {
    /// Builds an excluded grid set for a layout with `total_grids` grids.
    ///
    /// # Arguments
    ///
    /// * `grids` - Grid numbers to exclude, in any order.
    /// * `total_grids` - The number of grids in the layout.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] for a grid number of zero or greater
    /// than `total_grids`, and [`GridError::Duplicate`] if a grid number
    /// appears more than once.
    pub fn new(grids: impl IntoIterator<Item = u32>, total_grids: u32) -> Result<Self, GridError> {
        let mut set = BTreeSet::new();

        for grid in grids {
            if grid == 0 || grid > total_grids {
                debug!(grid, total_grids; "Rejecting out of range excluded grid");
                return Err(GridError::OutOfRange { grid, total_grids });
            }
            if !set.insert(grid) {
                return Err(GridError::Duplicate(grid));
            }
        }

        Ok(Self { grids: set })
    }

    /// Returns an empty set.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns the number of excluded grids.
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    /// Returns `true` if no grids are excluded.
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// Returns `true` if `grid` is excluded.
    pub fn contains(&self, grid: u32) -> bool {
        self.grids.contains(&grid)
    }

    /// Iterates over excluded grid numbers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.grids.iter().copied()
    }
}

impl<'a> IntoIterator for &'a ExcludedGrids {
    type Item = u32;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, u32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.grids.iter().copied()
    }
}

/// The grid count and excluded grids for one draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLayout {
    total_grids: u32,
    excluded: ExcludedGrids,
}

impl GridLayout {
    /// Creates a layout from a grid count and an excluded set.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] if `excluded` names a grid past
    /// `total_grids`, which happens when the set was validated against a
    /// larger layout.
    pub fn new(total_grids: u32, excluded: ExcludedGrids) -> Result<Self, GridError> {
        if let Some(grid) = excluded.iter().find(|grid| *grid > total_grids) {
            debug!(grid, total_grids; "Excluded grids do not fit the layout");
            return Err(GridError::OutOfRange { grid, total_grids });
        }

        Ok(Self {
            total_grids,
            excluded,
        })
    }

    /// Validates `excluded` against `total_grids` and builds the layout.
    ///
    /// # Errors
    ///
    /// See [`ExcludedGrids::new`].
    pub fn with_excluded(
        total_grids: u32,
        excluded: impl IntoIterator<Item = u32>,
    ) -> Result<Self, GridError> {
        Self::new(total_grids, ExcludedGrids::new(excluded, total_grids)?)
    }

    /// Returns the total number of grids, excluded ones included.
    pub fn total_grids(&self) -> u32 {
        self.total_grids
    }

    /// Returns the excluded grids.
    pub fn excluded(&self) -> &ExcludedGrids {
        &self.excluded
    }

    /// Returns the number of grids participants can start from.
    pub fn available_grids(&self) -> usize {
        (self.total_grids as usize).saturating_sub(self.excluded.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_grids_sorted() {
        let excluded = ExcludedGrids::new([8, 2, 6, 4], 10).unwrap();
        assert_eq!(excluded.iter().collect::<Vec<_>>(), vec![2, 4, 6, 8]);
        assert_eq!(excluded.len(), 4);
        assert!(excluded.contains(6));
        assert!(!excluded.contains(7));
    }

    #[test]
    fn test_excluded_grid_zero_rejected() {
        let err = ExcludedGrids::new([0], 10).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfRange {
                grid: 0,
                total_grids: 10
            }
        );
    }

    #[test]
    fn test_excluded_grid_past_end_rejected() {
        let err = ExcludedGrids::new([1, 11], 10).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfRange {
                grid: 11,
                total_grids: 10
            }
        );
    }

    #[test]
    fn test_excluded_grid_duplicate_rejected() {
        let err = ExcludedGrids::new([3, 5, 3], 10).unwrap_err();
        assert_eq!(err, GridError::Duplicate(3));
    }

    #[test]
    fn test_any_exclusion_rejected_without_grids() {
        assert!(ExcludedGrids::new([1], 0).is_err());
        assert!(ExcludedGrids::new(std::iter::empty(), 0).unwrap().is_empty());
    }

    #[test]
    fn test_available_grids() {
        let layout = GridLayout::with_excluded(10, [1, 3, 5]).unwrap();
        assert_eq!(layout.available_grids(), 7);

        let layout = GridLayout::with_excluded(10, 1..=10).unwrap();
        assert_eq!(layout.available_grids(), 0);

        let layout = GridLayout::new(0, ExcludedGrids::none()).unwrap();
        assert_eq!(layout.available_grids(), 0);
    }

    #[test]
    fn test_layout_rejects_exclusions_from_larger_grid() {
        let excluded = ExcludedGrids::new([2, 7], 10).unwrap();
        let err = GridLayout::new(5, excluded).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfRange {
                grid: 7,
                total_grids: 5
            }
        );
    }

    #[test]
    fn test_layout_accepts_exclusions_from_larger_grid_when_in_range() {
        let excluded = ExcludedGrids::new([2, 4], 10).unwrap();
        let layout = GridLayout::new(5, excluded).unwrap();
        assert_eq!(layout.available_grids(), 3);
    }
}
