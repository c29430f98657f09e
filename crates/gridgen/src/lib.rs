//! Gridgen - deterministic starting grid draws for competition classes.
//!
//! Given a class roster, a grid count, a set of excluded grids and a heat
//! count, the engine splits the roster into near-equal races for every heat
//! and places each race's participants on grid positions. Draws are
//! reproducible for a given day yet vary between heats and between days.

pub mod config;
pub mod draw;
pub mod export;
pub mod provider;
pub mod roster;

mod error;

pub use gridgen_core::{DrawResult, ExcludedGrids, GridError, GridLayout, Heat, Race, Slot};

pub use error::GridGenError;

use chrono::NaiveDate;
use log::{debug, info};

use draw::grouping::GroupingFilter;
use provider::{ConfigProvider, DaySource, SystemDay};

/// Draws grids for classes using a configuration provider and a day source.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use gridgen::{GridDrawEngine, config::AppConfig, provider::FixedDay};
///
/// let mut config = AppConfig::default();
/// config.add_class("Senior").unwrap();
/// config
///     .set_class_participants("Senior", vec!["A1".into(), "B2".into(), "C3".into()])
///     .unwrap();
/// config.set_number_of_grids(4);
/// config.set_number_of_heats(2);
///
/// let day = FixedDay(NaiveDate::from_ymd_opt(2024, 5, 4).unwrap());
/// let engine = GridDrawEngine::with_day_source(&config, day);
///
/// let draw = engine.draw_grids_for_class("Senior", &[2]).unwrap();
/// assert_eq!(draw.heat_count(), 2);
/// assert_eq!(draw.heats()[0].races()[0].len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct GridDrawEngine<P, D = SystemDay> {
    provider: P,
    day_source: D,
}

impl<P: ConfigProvider> GridDrawEngine<P> {
    /// Create an engine that seeds draws from the system's current UTC date.
    pub fn new(provider: P) -> Self {
        Self::with_day_source(provider, SystemDay)
    }
}

impl<P: ConfigProvider, D: DaySource> GridDrawEngine<P, D> {
    /// Create an engine with an explicit day source.
    pub fn with_day_source(provider: P, day_source: D) -> Self {
        Self {
            provider,
            day_source,
        }
    }

    /// Returns the configuration provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the day draws are currently seeded with.
    pub fn today(&self) -> NaiveDate {
        self.day_source.today()
    }

    /// Validate excluded grid numbers against the configured grid count.
    ///
    /// # Errors
    ///
    /// Returns [`GridGenError::Grid`] if a grid number is zero, greater than
    /// the number of grids, or repeated.
    pub fn layout(&self, excluded_grids: &[u32]) -> Result<GridLayout, GridGenError> {
        let layout = GridLayout::with_excluded(
            self.provider.number_of_grids(),
            excluded_grids.iter().copied(),
        )?;
        Ok(layout)
    }

    fn grouping(&self) -> Result<GroupingFilter, GridGenError> {
        GroupingFilter::new(
            &self.provider.participant_grouping_filter(),
            self.provider.participant_grouping_threshold() as usize,
        )
    }

    /// Draw every heat for one class.
    ///
    /// Heats `1..=number_of_heats` are drawn in order. An unknown class draws
    /// from an empty roster, so each heat has no races.
    ///
    /// # Arguments
    ///
    /// * `class_name` - The class to draw.
    /// * `excluded_grids` - Grid numbers no participant may start from.
    ///
    /// # Errors
    ///
    /// Fails before drawing if an excluded grid is invalid, the grouping
    /// filter does not compile, or the roster holds an empty or repeated
    /// identifier.
    pub fn draw_grids_for_class(
        &self,
        class_name: &str,
        excluded_grids: &[u32],
    ) -> Result<DrawResult, GridGenError> {
        let layout = self.layout(excluded_grids)?;
        let grouping = self.grouping()?;
        self.draw_with(class_name, &layout, &grouping)
    }

    /// Draw every configured class, in configuration order.
    ///
    /// # Errors
    ///
    /// See [`GridDrawEngine::draw_grids_for_class`].
    pub fn draw_all_classes(
        &self,
        excluded_grids: &[u32],
    ) -> Result<Vec<DrawResult>, GridGenError> {
        let layout = self.layout(excluded_grids)?;
        let grouping = self.grouping()?;

        self.provider
            .class_names()
            .iter()
            .map(|class_name| self.draw_with(class_name, &layout, &grouping))
            .collect()
    }

    fn draw_with(
        &self,
        class_name: &str,
        layout: &GridLayout,
        grouping: &GroupingFilter,
    ) -> Result<DrawResult, GridGenError> {
        let participants = self.provider.class_participants(class_name);
        roster::check_identifiers(&participants)?;

        let heat_count = self.provider.number_of_heats();
        let day = self.day_source.today();

        info!(
            class_name,
            participants = participants.len(),
            heat_count,
            available_grids = layout.available_grids();
            "Drawing grids"
        );

        let heats = draw::draw_heats(&participants, layout, grouping, heat_count, day);
        debug!(class_name, heats = heats.len(); "Grids drawn");

        Ok(DrawResult::new(class_name, heats))
    }
}
