//! Error adapter for converting GridGenError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use gridgen::{GridError, GridGenError, roster::RosterError};

/// Adapter for [`GridGenError`] values.
///
/// Adds a stable error code and, where one helps, a hint on how to fix the
/// input.
pub struct ErrorAdapter<'a>(pub &'a GridGenError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            GridGenError::Io(_) => "gridgen::io",
            GridGenError::Grid(_) => "gridgen::grid",
            GridGenError::Pattern { .. } => "gridgen::pattern",
            GridGenError::Roster(_) => "gridgen::roster",
            GridGenError::Config(_) => "gridgen::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help: String = match &self.0 {
            GridGenError::Grid(GridError::OutOfRange { total_grids, .. }) => {
                format!("excluded grids must be between 1 and {total_grids}")
            }
            GridGenError::Grid(GridError::Duplicate(_)) => {
                "list each excluded grid once".to_string()
            }
            GridGenError::Pattern { .. } => {
                "check the regular expression in the configuration file".to_string()
            }
            GridGenError::Roster(RosterError::UnknownClass(_)) => {
                "run `gridgen class list` to see the configured classes".to_string()
            }
            GridGenError::Roster(RosterError::Invalid { .. }) => {
                "change the identifier or the `participants.validator` setting".to_string()
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`GridGenError`] into a reportable diagnostic.
pub fn to_reportable(err: &GridGenError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
