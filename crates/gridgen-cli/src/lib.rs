//! CLI logic for the gridgen tool.
//!
//! This module contains the command handlers behind the `gridgen` binary:
//! drawing grids, editing class rosters and class lists, and changing
//! draw settings in the configuration file.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, ClassAction, Command, DrawArgs, RosterAction, SettingsArgs};

use std::{fs, io::Write};

use log::info;

use gridgen::{
    GridDrawEngine, GridGenError,
    config::AppConfig,
    export::{Exporter, text::TextExporter},
    provider::{DaySource, FixedDay, SystemDay},
};

use config::LoadedConfig;

/// Run the gridgen CLI application
///
/// Loads the configuration, executes the selected subcommand and writes any
/// listing or drawn heats to `out`. Edits are saved back to the
/// configuration file they were loaded from.
///
/// # Arguments
///
/// * `args` - Command-line arguments
/// * `out` - Destination for command output
///
/// # Errors
///
/// Returns `GridGenError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid excluded grids
/// - Roster and class editing errors
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), GridGenError> {
    let LoadedConfig { mut config, path } = config::load_config(args.config.as_ref())?;

    match &args.command {
        Command::Draw(draw_args) => draw(&config, draw_args, out),
        Command::Roster { action } => {
            if edit_roster(&mut config, action, out)? {
                config::save_config(&config, &path)?;
            }
            Ok(())
        }
        Command::Class { action } => {
            if edit_classes(&mut config, action, out)? {
                config::save_config(&config, &path)?;
            }
            Ok(())
        }
        Command::Settings(settings) => {
            if settings.has_changes() {
                apply_settings(&mut config, settings)?;
                config::save_config(&config, &path)?;
            }
            show_settings(&config, out)
        }
    }
}

fn draw(config: &AppConfig, args: &DrawArgs, out: &mut impl Write) -> Result<(), GridGenError> {
    let day = args.date.unwrap_or_else(|| SystemDay.today());
    let engine = GridDrawEngine::with_day_source(config, FixedDay(day));

    let draws = match &args.class {
        Some(class_name) => vec![engine.draw_grids_for_class(class_name, &args.exclude)?],
        None => engine.draw_all_classes(&args.exclude)?,
    };

    let mut rendered: Vec<u8> = Vec::new();
    for (index, draw) in draws.iter().enumerate() {
        if index > 0 {
            writeln!(rendered)?;
        }
        TextExporter::new(&mut rendered, config.meeting_name(), day).export_draw(draw)?;
    }

    match &args.output {
        Some(output) => {
            fs::write(output, &rendered)?;
            info!(output_file = output, classes = draws.len(); "Heats exported successfully");
        }
        None => out.write_all(&rendered)?,
    }

    Ok(())
}

fn edit_roster(
    config: &mut AppConfig,
    action: &RosterAction,
    out: &mut impl Write,
) -> Result<bool, GridGenError> {
    match action {
        RosterAction::List { class } => {
            let roster = config.roster(class)?;
            for participant in roster.participants() {
                writeln!(out, "{participant}")?;
            }
            Ok(false)
        }
        RosterAction::Add {
            class,
            participants,
        } => {
            let mut roster = config.roster(class)?;
            for participant in participants {
                roster.add(participant)?;
            }
            info!(class, added = participants.len(); "Participants added");
            config.set_class_participants(class, roster.into_participants())?;
            Ok(true)
        }
        RosterAction::Remove { class, participant } => {
            let mut roster = config.roster(class)?;
            roster.remove(participant)?;
            config.set_class_participants(class, roster.into_participants())?;
            Ok(true)
        }
        RosterAction::Clear { class } => {
            let mut roster = config.roster(class)?;
            roster.clear();
            config.set_class_participants(class, roster.into_participants())?;
            Ok(true)
        }
    }
}

fn edit_classes(
    config: &mut AppConfig,
    action: &ClassAction,
    out: &mut impl Write,
) -> Result<bool, GridGenError> {
    match action {
        ClassAction::List => {
            for class_name in config.class_names() {
                let count = config.class_participants(class_name).len();
                writeln!(out, "{class_name} ({count})")?;
            }
            Ok(false)
        }
        ClassAction::Add { name } => {
            config.add_class(name)?;
            Ok(true)
        }
        ClassAction::Remove { name } => {
            config.remove_class(name)?;
            Ok(true)
        }
    }
}

fn apply_settings(config: &mut AppConfig, settings: &SettingsArgs) -> Result<(), GridGenError> {
    if let Some(grids) = settings.grids {
        config.set_number_of_grids(grids);
    }
    if let Some(heats) = settings.heats {
        config.set_number_of_heats(heats);
    }
    if let Some(meeting) = &settings.meeting {
        config.set_meeting_name(meeting.as_str());
    }
    if let Some(filter) = &settings.grouping_filter {
        config.set_grouping_filter(filter.as_str());
    }
    if let Some(threshold) = settings.grouping_threshold {
        config.set_grouping_threshold(threshold);
    }
    if let Some(validator) = &settings.validator {
        config.set_participant_validator(validator.as_str());
    }
    config.validate()
}

fn show_settings(config: &AppConfig, out: &mut impl Write) -> Result<(), GridGenError> {
    let participants = config.participants();
    writeln!(out, "meeting_name = {}", config.meeting_name())?;
    writeln!(out, "grids = {}", config.grids().count())?;
    writeln!(out, "heats = {}", config.grids().heats())?;
    writeln!(out, "validator = {}", participants.validator())?;
    writeln!(out, "grouping_filter = {}", participants.grouping_filter())?;
    writeln!(out, "grouping_threshold = {}", participants.grouping_threshold())?;
    Ok(())
}
