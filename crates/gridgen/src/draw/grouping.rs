//! Grouped/ungrouped roster partitioning.
//!
//! Some classes keep a sub-population (for example one club's entries, picked
//! out by a pattern on the participant identifier) in races of its own, but
//! only when enough of the remaining participants exist to fill separate
//! races.

use log::debug;
use regex::Regex;

use crate::error::GridGenError;

/// The pattern and threshold controlling the grouping split.
///
/// Participants whose identifier fully matches the pattern are *grouped*;
/// all others are *ungrouped*.
#[derive(Debug, Clone)]
pub struct GroupingFilter {
    pattern: Regex,
    threshold: usize,
}

impl GroupingFilter {
    /// Compiles a grouping filter.
    ///
    /// The pattern must match a whole identifier, so `\d+F` matches `12F`
    /// but not `A12F`.
    ///
    /// # Errors
    ///
    /// Returns [`GridGenError::Pattern`] if `pattern` is not a valid regular
    /// expression.
    pub fn new(pattern: &str, threshold: usize) -> Result<Self, GridGenError> {
        let anchored = format!("^(?:{pattern})$");
        let pattern = Regex::new(&anchored)
            .map_err(|err| GridGenError::new_pattern_error("grouping filter", pattern, err))?;

        Ok(Self { pattern, threshold })
    }

    /// Returns the minimum number of ungrouped participants needed to split.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Returns `true` if `participant` belongs to the grouped population.
    pub fn is_grouped(&self, participant: &str) -> bool {
        self.pattern.is_match(participant)
    }

    /// Divides `participants` into the sets to be drawn independently.
    ///
    /// When the ungrouped population is non-empty and at least the threshold,
    /// returns the grouped set followed by the ungrouped set. Otherwise the
    /// whole roster is returned as a single set.
    pub fn partition<'a>(&self, participants: &'a [String]) -> Vec<Vec<&'a str>> {
        let (grouped, ungrouped): (Vec<&str>, Vec<&str>) = participants
            .iter()
            .map(String::as_str)
            .partition(|participant| self.is_grouped(participant));

        if !ungrouped.is_empty() && ungrouped.len() >= self.threshold {
            debug!(
                grouped = grouped.len(),
                ungrouped = ungrouped.len(),
                threshold = self.threshold;
                "Drawing grouped and ungrouped participants separately"
            );
            vec![grouped, ungrouped]
        } else {
            vec![participants.iter().map(String::as_str).collect()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_pattern_matches_whole_identifier() {
        let filter = GroupingFilter::new(r"\d+F", 1).unwrap();
        assert!(filter.is_grouped("12F"));
        assert!(!filter.is_grouped("A12F"));
        assert!(!filter.is_grouped("12FX"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = GroupingFilter::new("(unclosed", 1).unwrap_err();
        assert!(matches!(err, GridGenError::Pattern { .. }));
    }

    #[test]
    fn test_below_threshold_keeps_roster_whole() {
        let filter = GroupingFilter::new(r"\d+F", 3).unwrap();
        let participants = roster(&["1F", "2F", "A1", "B2"]);

        let sets = filter.partition(&participants);
        assert_eq!(sets, vec![vec!["1F", "2F", "A1", "B2"]]);
    }

    #[test]
    fn test_at_threshold_splits_grouped_first() {
        let filter = GroupingFilter::new(r"\d+F", 2).unwrap();
        let participants = roster(&["A1", "1F", "B2", "2F"]);

        let sets = filter.partition(&participants);
        assert_eq!(sets, vec![vec!["1F", "2F"], vec!["A1", "B2"]]);
    }

    #[test]
    fn test_no_ungrouped_keeps_roster_whole() {
        let filter = GroupingFilter::new(r"\d+F", 0).unwrap();
        let participants = roster(&["1F", "2F"]);

        let sets = filter.partition(&participants);
        assert_eq!(sets, vec![vec!["1F", "2F"]]);
    }

    #[test]
    fn test_empty_pattern_groups_nothing() {
        let filter = GroupingFilter::new("", 0).unwrap();
        let participants = roster(&["A1", "B2"]);

        let sets = filter.partition(&participants);
        assert_eq!(sets, vec![Vec::<&str>::new(), vec!["A1", "B2"]]);
    }
}
