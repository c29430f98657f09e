//! Class roster editing.
//!
//! A [`Roster`] is the ordered list of participant identifiers entered for a
//! class. New identifiers are checked against a [`ParticipantValidator`] and
//! must be unique within the roster.
//!
//! # Example
//!
//! ```
//! use gridgen::roster::{ParticipantValidator, Roster};
//!
//! let validator = ParticipantValidator::new(r"[A-Z]+\d+[A-Z]*|\d+F").unwrap();
//! let mut roster = Roster::new(Vec::new(), validator);
//!
//! roster.add("AB12").unwrap();
//! roster.add("7F").unwrap();
//! assert!(roster.add("AB12").is_err());
//! assert!(roster.add("ab12").is_err());
//! assert_eq!(roster.participants(), ["AB12", "7F"]);
//! ```

use std::collections::HashSet;

use log::debug;
use regex::Regex;
use thiserror::Error;

use crate::error::GridGenError;

/// Errors raised while editing rosters and class lists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Participant identifier is empty")]
    Empty,

    #[error("Participant `{participant}` does not match the format `{pattern}`")]
    Invalid { participant: String, pattern: String },

    #[error("Participant `{0}` is already in the roster")]
    AlreadyExists(String),

    #[error("Participant `{0}` is not in the roster")]
    NotFound(String),

    #[error("Class `{0}` does not exist")]
    UnknownClass(String),

    #[error("Class `{0}` already exists")]
    ClassExists(String),
}

/// Checks that a participant identifier has the expected format.
#[derive(Debug, Clone)]
pub struct ParticipantValidator {
    source: String,
    pattern: Regex,
}

impl ParticipantValidator {
    /// Compiles a validator that must match the whole identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GridGenError::Pattern`] if `pattern` is not a valid regular
    /// expression.
    pub fn new(pattern: &str) -> Result<Self, GridGenError> {
        let anchored = format!("^(?:{pattern})$");
        let compiled = Regex::new(&anchored)
            .map_err(|err| GridGenError::new_pattern_error("participant validator", pattern, err))?;

        Ok(Self {
            source: pattern.to_string(),
            pattern: compiled,
        })
    }

    /// Returns the pattern as configured.
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// Validates a single identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Empty`] for an empty identifier and
    /// [`RosterError::Invalid`] if it does not match the pattern.
    pub fn validate(&self, participant: &str) -> Result<(), RosterError> {
        if participant.is_empty() {
            return Err(RosterError::Empty);
        }
        if !self.pattern.is_match(participant) {
            return Err(RosterError::Invalid {
                participant: participant.to_string(),
                pattern: self.source.clone(),
            });
        }
        Ok(())
    }

    /// Validates every identifier of a stored roster and checks uniqueness.
    ///
    /// # Errors
    ///
    /// Returns the first failure from [`ParticipantValidator::validate`], or
    /// [`RosterError::AlreadyExists`] for a repeated identifier.
    pub fn validate_roster(&self, participants: &[String]) -> Result<(), RosterError> {
        for participant in participants {
            self.validate(participant)?;
        }
        check_identifiers(participants)
    }
}

/// Checks that identifiers are non-empty and unique within a roster.
///
/// # Errors
///
/// Returns [`RosterError::Empty`] for an empty identifier and
/// [`RosterError::AlreadyExists`] for the first repeated one.
pub fn check_identifiers(participants: &[String]) -> Result<(), RosterError> {
    let mut seen = HashSet::with_capacity(participants.len());
    for participant in participants {
        if participant.is_empty() {
            return Err(RosterError::Empty);
        }
        if !seen.insert(participant.as_str()) {
            return Err(RosterError::AlreadyExists(participant.clone()));
        }
    }
    Ok(())
}

/// An editable class roster.
#[derive(Debug, Clone)]
pub struct Roster {
    participants: Vec<String>,
    validator: ParticipantValidator,
}

impl Roster {
    /// Wraps an existing list of participants.
    ///
    /// Existing entries are trusted as stored; only new entries are validated.
    pub fn new(participants: Vec<String>, validator: ParticipantValidator) -> Self {
        Self {
            participants,
            validator,
        }
    }

    /// Returns the participants in entry order.
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Consumes the roster, returning the participant list.
    pub fn into_participants(self) -> Vec<String> {
        self.participants
    }

    /// Appends a participant.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Fails if the identifier is empty, does not match the validator, or is
    /// already in the roster.
    pub fn add(&mut self, participant: &str) -> Result<(), RosterError> {
        let participant = participant.trim();
        self.validator.validate(participant)?;

        if self.participants.iter().any(|p| p == participant) {
            return Err(RosterError::AlreadyExists(participant.to_string()));
        }

        debug!(participant; "Adding participant");
        self.participants.push(participant.to_string());
        Ok(())
    }

    /// Removes a participant.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] if the participant is not in the roster.
    pub fn remove(&mut self, participant: &str) -> Result<(), RosterError> {
        let participant = participant.trim();
        let index = self
            .participants
            .iter()
            .position(|p| p == participant)
            .ok_or_else(|| RosterError::NotFound(participant.to_string()))?;

        debug!(participant; "Removing participant");
        self.participants.remove(index);
        Ok(())
    }

    /// Removes every participant.
    pub fn clear(&mut self) {
        self.participants.clear();
    }
}
