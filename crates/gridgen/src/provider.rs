//! Capabilities the draw engine reads its inputs through.
//!
//! The engine never reaches for global state: rosters and settings come from
//! a [`ConfigProvider`] and the calendar day from a [`DaySource`], both
//! supplied when the engine is built.

use chrono::{NaiveDate, Utc};

use crate::config::AppConfig;

/// Read access to class rosters and draw settings.
pub trait ConfigProvider {
    /// Returns every class name in display order.
    fn class_names(&self) -> Vec<String>;

    /// Returns the roster for a class, empty if the class is unknown.
    fn class_participants(&self, class_name: &str) -> Vec<String>;

    /// Returns the total number of grids.
    fn number_of_grids(&self) -> u32;

    /// Returns the number of heats drawn per class.
    fn number_of_heats(&self) -> u32;

    /// Returns the pattern selecting grouped participants.
    fn participant_grouping_filter(&self) -> String;

    /// Returns the minimum ungrouped count for a separate draw.
    fn participant_grouping_threshold(&self) -> u32;

    /// Returns the meeting name.
    fn meeting_name(&self) -> String {
        String::new()
    }
}

impl ConfigProvider for AppConfig {
    fn class_names(&self) -> Vec<String> {
        AppConfig::class_names(self).map(str::to_string).collect()
    }

    fn class_participants(&self, class_name: &str) -> Vec<String> {
        AppConfig::class_participants(self, class_name).to_vec()
    }

    fn number_of_grids(&self) -> u32 {
        self.grids().count()
    }

    fn number_of_heats(&self) -> u32 {
        self.grids().heats()
    }

    fn participant_grouping_filter(&self) -> String {
        self.participants().grouping_filter().to_string()
    }

    fn participant_grouping_threshold(&self) -> u32 {
        self.participants().grouping_threshold()
    }

    fn meeting_name(&self) -> String {
        AppConfig::meeting_name(self).to_string()
    }
}

impl<P: ConfigProvider + ?Sized> ConfigProvider for &P {
    fn class_names(&self) -> Vec<String> {
        (**self).class_names()
    }

    fn class_participants(&self, class_name: &str) -> Vec<String> {
        (**self).class_participants(class_name)
    }

    fn number_of_grids(&self) -> u32 {
        (**self).number_of_grids()
    }

    fn number_of_heats(&self) -> u32 {
        (**self).number_of_heats()
    }

    fn participant_grouping_filter(&self) -> String {
        (**self).participant_grouping_filter()
    }

    fn participant_grouping_threshold(&self) -> u32 {
        (**self).participant_grouping_threshold()
    }

    fn meeting_name(&self) -> String {
        (**self).meeting_name()
    }
}

/// Supplies the calendar day a draw is stable for.
pub trait DaySource {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// The current UTC date from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDay;

impl DaySource for SystemDay {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A fixed date, for tests and for reproducing an earlier day's draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDay(pub NaiveDate);

impl DaySource for FixedDay {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
