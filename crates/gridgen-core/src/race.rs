//! Races, heats and draw results.
//!
//! A [`Race`] is a fixed-length row of [`Slot`]s where index `i` is grid
//! number `i + 1`. A [`Heat`] is one full repetition of the draw for a class
//! and a [`DrawResult`] collects every heat drawn for that class.

use crate::slot::Slot;

/// One race's grid assignments.
///
/// Races are built by the draw engine and are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Race {
    slots: Vec<Slot>,
}

impl Race {
    /// Creates a race from its slots in grid order.
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// Returns all slots in grid order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the slot for a 1-based grid number.
    pub fn grid(&self, grid_number: u32) -> Option<&Slot> {
        let index = (grid_number as usize).checked_sub(1)?;
        self.slots.get(index)
    }

    /// Returns the number of grids in the race.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the race has no grids.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over the participants in grid order, skipping blanks.
    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().filter_map(Slot::participant_id)
    }

    /// Returns the number of occupied grids.
    pub fn participant_count(&self) -> usize {
        self.participants().count()
    }
}

/// The races drawn for one heat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heat {
    number: u32,
    races: Vec<Race>,
}

impl Heat {
    /// Creates a heat with a 1-based heat number.
    pub fn new(number: u32, races: Vec<Race>) -> Self {
        Self { number, races }
    }

    /// Returns the 1-based heat number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Returns the races in draw order.
    pub fn races(&self) -> &[Race] {
        &self.races
    }

    /// Iterates over every participant in the heat, race by race.
    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.races.iter().flat_map(Race::participants)
    }
}

/// Every heat drawn for one class, in heat order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawResult {
    class_name: String,
    heats: Vec<Heat>,
}

impl DrawResult {
    /// Creates a draw result for a class.
    pub fn new(class_name: impl Into<String>, heats: Vec<Heat>) -> Self {
        Self {
            class_name: class_name.into(),
            heats,
        }
    }

    /// Returns the class the heats were drawn for.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the heats in heat order.
    pub fn heats(&self) -> &[Heat] {
        &self.heats
    }

    /// Returns the number of heats drawn.
    pub fn heat_count(&self) -> usize {
        self.heats.len()
    }

    /// Returns `true` if no heat has any race.
    ///
    /// This holds both when no heats were drawn and when every heat came out
    /// empty, e.g. for an empty roster.
    pub fn has_no_races(&self) -> bool {
        self.heats.iter().all(|heat| heat.races.is_empty())
    }
}
