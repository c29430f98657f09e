//! Error types for grid draw operations.
//!
//! This module provides the main error type [`GridGenError`] which wraps the
//! error conditions that can occur while validating configuration, editing
//! rosters and drawing grids.

use std::io;

use thiserror::Error;

use gridgen_core::GridError;

use crate::roster::RosterError;

/// The main error type for gridgen operations.
#[derive(Debug, Error)]
pub enum GridGenError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid grid layout: {0}")]
    Grid(#[from] GridError),

    #[error("Invalid {name} pattern `{pattern}`: {source}")]
    Pattern {
        name: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GridGenError {
    /// Create a new `Pattern` error for a named pattern setting.
    pub fn new_pattern_error(
        name: &'static str,
        pattern: impl Into<String>,
        source: regex::Error,
    ) -> Self {
        Self::Pattern {
            name,
            pattern: pattern.into(),
            source,
        }
    }
}
