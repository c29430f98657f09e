//! Gridgen Core Types and Definitions
//!
//! This crate provides the foundational types shared by the grid draw engine
//! and its front ends. It includes:
//!
//! - **Slots**: A single grid position, either blank or holding a participant ([`slot::Slot`])
//! - **Races**: Fixed-length rows of slots, grouped into heats ([`race`] module)
//! - **Grids**: Grid layouts and validated excluded grid sets ([`grid`] module)
//! - **Errors**: Input contract violations ([`error::GridError`])

pub mod error;
pub mod grid;
pub mod race;
pub mod slot;

pub use error::GridError;
pub use grid::{ExcludedGrids, GridLayout};
pub use race::{DrawResult, Heat, Race};
pub use slot::Slot;
