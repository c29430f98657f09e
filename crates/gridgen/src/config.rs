//! Configuration types for grid draws.
//!
//! This module provides the configuration that the draw engine reads and the
//! roster editor writes. All types implement [`serde::Deserialize`] and
//! [`serde::Serialize`] so the configuration can be loaded from and saved to
//! an external file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration: meeting name, grid settings,
//!   participant settings and class rosters.
//! - [`GridConfig`] - Number of grids and heats.
//! - [`ParticipantConfig`] - Identifier validator and grouping settings.
//!
//! # Example
//!
//! ```
//! # use gridgen::config::AppConfig;
//! let mut config = AppConfig::default();
//! config.add_class("Junior").unwrap();
//! config.set_number_of_grids(10);
//!
//! assert_eq!(config.class_names().collect::<Vec<_>>(), vec!["Junior"]);
//! assert!(config.validate().is_ok());
//! ```

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    draw::grouping::GroupingFilter,
    error::GridGenError,
    roster::{ParticipantValidator, Roster, RosterError},
};

/// The identifier format accepted when no validator is configured: one or
/// more capital letters followed by digits and optional capital letters, or
/// digits followed by `F`.
pub const DEFAULT_PARTICIPANT_VALIDATOR: &str = r"[A-Z]+\d+[A-Z]*|\d+F";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Name of the meeting, printed above drawn heats.
    #[serde(default)]
    meeting_name: String,

    /// Grid configuration section.
    #[serde(default)]
    grids: GridConfig,

    /// Participant configuration section.
    #[serde(default)]
    participants: ParticipantConfig,

    /// Class rosters in display order.
    #[serde(default)]
    classes: IndexMap<String, Vec<String>>,
}

impl AppConfig {
    /// Returns the meeting name.
    pub fn meeting_name(&self) -> &str {
        &self.meeting_name
    }

    /// Sets the meeting name.
    pub fn set_meeting_name(&mut self, meeting_name: impl Into<String>) {
        self.meeting_name = meeting_name.into();
    }

    /// Returns the grid configuration.
    pub fn grids(&self) -> &GridConfig {
        &self.grids
    }

    /// Returns the participant configuration.
    pub fn participants(&self) -> &ParticipantConfig {
        &self.participants
    }

    /// Sets the total number of grids.
    pub fn set_number_of_grids(&mut self, count: u32) {
        self.grids.count = count;
    }

    /// Sets the number of heats drawn per class.
    pub fn set_number_of_heats(&mut self, heats: u32) {
        self.grids.heats = heats;
    }

    /// Sets the grouping filter pattern.
    pub fn set_grouping_filter(&mut self, pattern: impl Into<String>) {
        self.participants.grouping_filter = pattern.into();
    }

    /// Sets the grouping threshold.
    pub fn set_grouping_threshold(&mut self, threshold: u32) {
        self.participants.grouping_threshold = threshold;
    }

    /// Sets the participant validator pattern.
    pub fn set_participant_validator(&mut self, pattern: impl Into<String>) {
        self.participants.validator = pattern.into();
    }

    /// Iterates over class names in configuration order.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Returns the roster for a class, or an empty slice for an unknown class.
    pub fn class_participants(&self, class_name: &str) -> &[String] {
        self.classes
            .get(class_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Replaces the roster of an existing class.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::UnknownClass`] if the class does not exist.
    pub fn set_class_participants(
        &mut self,
        class_name: &str,
        participants: Vec<String>,
    ) -> Result<(), RosterError> {
        let roster = self
            .classes
            .get_mut(class_name)
            .ok_or_else(|| RosterError::UnknownClass(class_name.to_string()))?;
        *roster = participants;
        Ok(())
    }

    /// Adds an empty class at the end of the class list.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::ClassExists`] for a duplicate name and
    /// [`RosterError::Empty`] for a blank one.
    pub fn add_class(&mut self, class_name: &str) -> Result<(), RosterError> {
        let class_name = class_name.trim();
        if class_name.is_empty() {
            return Err(RosterError::Empty);
        }
        if self.classes.contains_key(class_name) {
            return Err(RosterError::ClassExists(class_name.to_string()));
        }
        self.classes.insert(class_name.to_string(), Vec::new());
        Ok(())
    }

    /// Removes a class and its roster, keeping the order of the others.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::UnknownClass`] if the class does not exist.
    pub fn remove_class(&mut self, class_name: &str) -> Result<Vec<String>, RosterError> {
        self.classes
            .shift_remove(class_name)
            .ok_or_else(|| RosterError::UnknownClass(class_name.to_string()))
    }

    /// Returns an editable copy of a class roster.
    ///
    /// Write the edited roster back with [`AppConfig::set_class_participants`].
    ///
    /// # Errors
    ///
    /// Fails if the class does not exist or the validator pattern is invalid.
    pub fn roster(&self, class_name: &str) -> Result<Roster, GridGenError> {
        let participants = self
            .classes
            .get(class_name)
            .ok_or_else(|| RosterError::UnknownClass(class_name.to_string()))?;
        Ok(Roster::new(
            participants.clone(),
            self.participants.participant_validator()?,
        ))
    }

    /// Checks that every pattern compiles and every stored roster holds
    /// unique identifiers matching the participant validator.
    ///
    /// # Errors
    ///
    /// Returns [`GridGenError::Pattern`] for the first invalid pattern and
    /// [`GridGenError::Roster`] for the first invalid or repeated identifier.
    pub fn validate(&self) -> Result<(), GridGenError> {
        let validator = self.participants.participant_validator()?;
        self.participants.grouping()?;

        for (class_name, participants) in &self.classes {
            validator.validate_roster(participants).inspect_err(|err| {
                debug!(class_name, err:% = err; "Rejecting stored roster");
            })?;
        }
        Ok(())
    }
}

/// Grid count and heat count.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GridConfig {
    /// Total number of grids, excluded grids included.
    #[serde(default)]
    count: u32,

    /// Number of heats drawn per class.
    #[serde(default)]
    heats: u32,
}

impl GridConfig {
    /// Returns the total number of grids.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Returns the number of heats.
    pub fn heats(&self) -> u32 {
        self.heats
    }
}

/// Participant identifier and grouping settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ParticipantConfig {
    /// Pattern new participant identifiers must fully match.
    validator: String,

    /// Pattern selecting the grouped participants.
    grouping_filter: String,

    /// Minimum number of ungrouped participants for a separate draw.
    grouping_threshold: u32,
}

impl Default for ParticipantConfig {
    fn default() -> Self {
        Self {
            validator: DEFAULT_PARTICIPANT_VALIDATOR.to_string(),
            grouping_filter: String::new(),
            grouping_threshold: 0,
        }
    }
}

impl ParticipantConfig {
    /// Returns the validator pattern.
    pub fn validator(&self) -> &str {
        &self.validator
    }

    /// Returns the grouping filter pattern.
    pub fn grouping_filter(&self) -> &str {
        &self.grouping_filter
    }

    /// Returns the grouping threshold.
    pub fn grouping_threshold(&self) -> u32 {
        self.grouping_threshold
    }

    /// Compiles the participant validator.
    ///
    /// # Errors
    ///
    /// Returns [`GridGenError::Pattern`] if the pattern is invalid.
    pub fn participant_validator(&self) -> Result<ParticipantValidator, GridGenError> {
        ParticipantValidator::new(&self.validator)
    }

    /// Compiles the grouping filter.
    ///
    /// # Errors
    ///
    /// Returns [`GridGenError::Pattern`] if the pattern is invalid.
    pub fn grouping(&self) -> Result<GroupingFilter, GridGenError> {
        GroupingFilter::new(&self.grouping_filter, self.grouping_threshold as usize)
    }
}
