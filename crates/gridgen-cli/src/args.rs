//! Command-line argument definitions for the gridgen CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Global arguments select the configuration file and logging
//! verbosity; subcommands draw grids and edit rosters, classes and settings.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Command-line arguments for the gridgen tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Draw starting grids for one class or every class
    Draw(DrawArgs),

    /// Show or edit a class roster
    Roster {
        #[command(subcommand)]
        action: RosterAction,
    },

    /// Show or edit the list of classes
    Class {
        #[command(subcommand)]
        action: ClassAction,
    },

    /// Show or change draw settings
    Settings(SettingsArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct DrawArgs {
    /// Class to draw; every class is drawn when omitted
    #[arg(long)]
    pub class: Option<String>,

    /// Excluded grid numbers, comma separated
    #[arg(short = 'x', long, value_delimiter = ',')]
    pub exclude: Vec<u32>,

    /// Draw as of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Write the heat tables to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum RosterAction {
    /// List the participants of a class
    List {
        #[arg(long)]
        class: String,
    },

    /// Add participants to a class
    Add {
        #[arg(long)]
        class: String,

        #[arg(required = true)]
        participants: Vec<String>,
    },

    /// Remove a participant from a class
    Remove {
        #[arg(long)]
        class: String,

        participant: String,
    },

    /// Remove every participant from a class
    Clear {
        #[arg(long)]
        class: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ClassAction {
    /// List classes
    List,

    /// Add an empty class
    Add { name: String },

    /// Remove a class and its roster
    Remove { name: String },
}

#[derive(clap::Args, Debug, Default)]
pub struct SettingsArgs {
    /// Total number of grids
    #[arg(long)]
    pub grids: Option<u32>,

    /// Number of heats per class
    #[arg(long)]
    pub heats: Option<u32>,

    /// Meeting name printed above the heats
    #[arg(long)]
    pub meeting: Option<String>,

    /// Pattern selecting grouped participants
    #[arg(long)]
    pub grouping_filter: Option<String>,

    /// Minimum ungrouped participants for a separate draw
    #[arg(long)]
    pub grouping_threshold: Option<u32>,

    /// Pattern new participant identifiers must match
    #[arg(long)]
    pub validator: Option<String>,
}

impl SettingsArgs {
    /// Returns `true` if any setting is being changed.
    pub fn has_changes(&self) -> bool {
        self.grids.is_some()
            || self.heats.is_some()
            || self.meeting.is_some()
            || self.grouping_filter.is_some()
            || self.grouping_threshold.is_some()
            || self.validator.is_some()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_draw() {
        let args = Args::parse_from([
            "gridgen", "draw", "--class", "Senior", "-x", "2,4", "--date", "2024-05-04",
        ]);

        let Command::Draw(draw) = args.command else {
            panic!("Expected draw command");
        };
        assert_eq!(draw.class.as_deref(), Some("Senior"));
        assert_eq!(draw.exclude, vec![2, 4]);
        assert_eq!(draw.date, NaiveDate::from_ymd_opt(2024, 5, 4));
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_parse_roster_add_with_global_config() {
        let args = Args::parse_from([
            "gridgen", "roster", "add", "--class", "Junior", "A1", "B2", "--config", "c.toml",
        ]);

        assert_eq!(args.config.as_deref(), Some("c.toml"));
        match args.command {
            Command::Roster {
                action: RosterAction::Add { class, participants },
            } => {
                assert_eq!(class, "Junior");
                assert_eq!(participants, vec!["A1", "B2"]);
            }
            other => panic!("Unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_settings_changes() {
        assert!(!SettingsArgs::default().has_changes());
        let settings = SettingsArgs {
            heats: Some(2),
            ..SettingsArgs::default()
        };
        assert!(settings.has_changes());
    }
}
