//! Export of drawn heats.
//!
//! This module provides the [`Exporter`] trait for writing a [`DrawResult`]
//! to an output format. It is the last stage after the draw:
//!
//! ```text
//! Config (rosters, grids, heats)
//!     ↓ draw
//! DrawResult (heats → races → slots)
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`text`]: plain-text heat tables via [`text::TextExporter`]

pub mod text;

use std::io;

use gridgen_core::DrawResult;

/// Abstraction for draw export backends.
pub trait Exporter {
    /// Writes every heat of a class draw.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing the output fails.
    fn export_draw(&mut self, draw: &DrawResult) -> io::Result<()>;
}
