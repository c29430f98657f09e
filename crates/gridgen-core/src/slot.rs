//! Grid slot definitions.
//!
//! A [`Slot`] is one starting position in a race. It either holds a
//! participant identifier or is blank, either because the grid was excluded
//! or because the race has fewer participants than available grids.

use std::fmt;

/// A single grid position within a race.
///
/// Slots order blank-first, then by participant identifier. This is the
/// canonical order used before seeding a shuffle, so a padded race sorts the
/// same way a list of identifiers with empty strings for blanks would.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Slot {
    /// No participant starts from this grid.
    #[default]
    Blank,

    /// The identifier of the participant starting from this grid.
    Participant(String),
}

impl Slot {
    /// Creates a slot holding the given participant.
    pub fn participant(id: impl Into<String>) -> Self {
        Self::Participant(id.into())
    }

    /// Returns `true` if no participant occupies this slot.
    pub fn is_blank(&self) -> bool {
        matches!(self, Slot::Blank)
    }

    /// Returns the participant identifier, or `None` for a blank slot.
    pub fn participant_id(&self) -> Option<&str> {
        match self {
            Slot::Blank => None,
            Slot::Participant(id) => Some(id),
        }
    }
}

impl From<String> for Slot {
    fn from(id: String) -> Self {
        Self::Participant(id)
    }
}

impl From<&str> for Slot {
    fn from(id: &str) -> Self {
        Self::Participant(id.to_string())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Blank => Ok(()),
            Slot::Participant(id) => f.write_str(id),
        }
    }
}
