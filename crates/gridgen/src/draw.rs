//! The grid draw algorithm.
//!
//! One heat is drawn in four stages:
//!
//! 1. [`grouping`] divides the roster into the sets drawn independently.
//! 2. Each set is [`shuffle::randomize`]d and [`split::split_into_races`].
//! 3. Every race is padded to the available grid count and randomized again,
//!    so blanks from padding are spread across the grid.
//! 4. [`exclusion`] inserts a blank on every excluded grid.
//!
//! Every shuffle is seeded from its own slots, the heat number, the excluded
//! grids and the day, so repeating a draw on the same day gives the same
//! grids while each heat and each day differs.

pub mod exclusion;
pub mod grouping;
pub mod seed;
pub mod shuffle;
pub mod split;

use chrono::NaiveDate;
use log::{debug, trace};

use gridgen_core::{GridLayout, Heat, Race, Slot};

use grouping::GroupingFilter;

/// Draws the races of a single heat.
///
/// # Arguments
///
/// * `participants` - The class roster.
/// * `layout` - Grid count and excluded grids.
/// * `grouping` - Grouping pattern and threshold.
/// * `heat_number` - The 1-based heat number.
/// * `day` - The calendar day the draw is stable for.
///
/// Returns a heat with no races when the roster is empty or no grid is
/// available.
pub fn draw_heat(
    participants: &[String],
    layout: &GridLayout,
    grouping: &GroupingFilter,
    heat_number: u32,
    day: NaiveDate,
) -> Heat {
    let available_grids = layout.available_grids();
    let excluded = layout.excluded();

    if available_grids == 0 || participants.is_empty() {
        debug!(
            heat_number,
            available_grids,
            participants = participants.len();
            "Nothing to draw for heat"
        );
        return Heat::new(heat_number, Vec::new());
    }

    let races: Vec<Race> = grouping
        .partition(participants)
        .into_iter()
        .flat_map(|set| {
            let slots: Vec<Slot> = set.into_iter().map(Slot::from).collect();
            let randomized = shuffle::randomize(&slots, heat_number, excluded, day);
            split::split_into_races(&randomized, available_grids)
        })
        .map(|race| {
            let padded = exclusion::pad_to_available(race, available_grids);
            let randomized = shuffle::randomize(&padded, heat_number, excluded, day);
            Race::new(exclusion::insert_excluded(randomized, excluded))
        })
        .collect();

    trace!(heat_number, races = races.len(); "Heat drawn");
    Heat::new(heat_number, races)
}

/// Draws heats `1..=heat_count`.
///
/// Returns no heats when `heat_count` is zero.
pub fn draw_heats(
    participants: &[String],
    layout: &GridLayout,
    grouping: &GroupingFilter,
    heat_count: u32,
    day: NaiveDate,
) -> Vec<Heat> {
    (1..=heat_count)
        .map(|heat_number| draw_heat(participants, layout, grouping, heat_number, day))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use gridgen_core::ExcludedGrids;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn roster(count: usize) -> Vec<String> {
        (1..=count).map(|n| format!("participant{n}")).collect()
    }

    fn no_grouping() -> GroupingFilter {
        GroupingFilter::new("", usize::MAX).unwrap()
    }

    #[test]
    fn test_fewer_participants_than_grids() {
        let layout = GridLayout::with_excluded(10, [2, 4, 6, 8]).unwrap();
        let heat = draw_heat(&roster(5), &layout, &no_grouping(), 1, date(1970, 1, 2));

        assert_eq!(heat.number(), 1);
        assert_eq!(heat.races().len(), 1);

        let race = &heat.races()[0];
        assert_eq!(race.len(), 10);
        for grid in [2, 4, 6, 8] {
            assert!(race.grid(grid).unwrap().is_blank(), "grid {grid} not blank");
        }
        assert_eq!(race.participant_count(), 5);

        let blanks = race.slots().iter().filter(|slot| slot.is_blank()).count();
        assert_eq!(blanks, 5);
    }

    #[test]
    fn test_more_participants_than_grids() {
        let layout = GridLayout::with_excluded(10, [1, 3, 5]).unwrap();
        let heat = draw_heat(&roster(8), &layout, &no_grouping(), 1, date(1970, 1, 2));

        assert_eq!(heat.races().len(), 2);
        for race in heat.races() {
            assert_eq!(race.len(), 10);
            assert_eq!(race.participant_count(), 4);
            for grid in [1, 3, 5] {
                assert!(race.grid(grid).unwrap().is_blank());
            }
        }
    }

    #[test]
    fn test_every_participant_drawn_once() {
        let participants = roster(23);
        let layout = GridLayout::with_excluded(8, [8]).unwrap();
        let heat = draw_heat(&participants, &layout, &no_grouping(), 2, date(2024, 6, 1));

        let drawn: Vec<&str> = heat.participants().collect();
        let unique: HashSet<&str> = drawn.iter().copied().collect();
        assert_eq!(drawn.len(), participants.len());
        assert_eq!(unique.len(), participants.len());
    }

    #[test]
    fn test_empty_roster_no_races() {
        let layout = GridLayout::new(10, ExcludedGrids::none()).unwrap();
        let heat = draw_heat(&[], &layout, &no_grouping(), 1, date(2024, 6, 1));
        assert!(heat.races().is_empty());
    }

    #[test]
    fn test_all_grids_excluded_no_races() {
        let layout = GridLayout::with_excluded(10, 1..=10).unwrap();
        let heat = draw_heat(&roster(5), &layout, &no_grouping(), 1, date(2024, 6, 1));
        assert!(heat.races().is_empty());
    }

    #[test]
    fn test_zero_grids_no_races() {
        let layout = GridLayout::new(0, ExcludedGrids::none()).unwrap();
        let heat = draw_heat(&roster(5), &layout, &no_grouping(), 1, date(2024, 6, 1));
        assert!(heat.races().is_empty());
    }

    #[test]
    fn test_zero_heats() {
        let layout = GridLayout::new(10, ExcludedGrids::none()).unwrap();
        let heats = draw_heats(&roster(5), &layout, &no_grouping(), 0, date(2024, 6, 1));
        assert!(heats.is_empty());
    }

    #[test]
    fn test_heats_numbered_in_order() {
        let layout = GridLayout::new(6, ExcludedGrids::none()).unwrap();
        let heats = draw_heats(&roster(9), &layout, &no_grouping(), 3, date(2024, 6, 1));

        let numbers: Vec<u32> = heats.iter().map(Heat::number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_heats_differ() {
        let layout = GridLayout::new(20, ExcludedGrids::none()).unwrap();
        let heats = draw_heats(&roster(20), &layout, &no_grouping(), 2, date(2024, 6, 1));

        assert_ne!(heats[0].races(), heats[1].races());
    }

    #[test]
    fn test_grouped_races_come_first_and_never_mix() {
        let grouping = GroupingFilter::new(r"\d+F", 3).unwrap();
        let participants: Vec<String> = ["1F", "2F", "3F", "4F", "5F", "A1", "B2", "C3"]
            .into_iter()
            .map(String::from)
            .collect();
        let layout = GridLayout::new(4, ExcludedGrids::none()).unwrap();

        let heat = draw_heat(&participants, &layout, &grouping, 1, date(2024, 6, 1));

        // 5 grouped -> 2 races, 3 ungrouped -> 1 race
        assert_eq!(heat.races().len(), 3);
        for race in &heat.races()[..2] {
            assert!(race.participants().all(|p| grouping.is_grouped(p)));
        }
        assert!(heat.races()[2].participants().all(|p| !grouping.is_grouped(p)));
        assert_eq!(heat.participants().count(), participants.len());
    }

    #[test]
    fn test_grouping_below_threshold_mixes() {
        let grouping = GroupingFilter::new(r"\d+F", 4).unwrap();
        let participants: Vec<String> = ["1F", "2F", "3F", "4F", "5F", "A1", "B2", "C3"]
            .into_iter()
            .map(String::from)
            .collect();
        let layout = GridLayout::new(4, ExcludedGrids::none()).unwrap();

        let heat = draw_heat(&participants, &layout, &grouping, 1, date(2024, 6, 1));

        // undivided: ceil(8 / 4) = 2 races of 4
        assert_eq!(heat.races().len(), 2);
        for race in heat.races() {
            assert_eq!(race.participant_count(), 4);
        }
    }
}
