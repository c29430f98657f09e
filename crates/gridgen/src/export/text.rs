//! Plain-text heat tables.
//!
//! The layout follows the printed draw sheet: a meeting heading, the class
//! name, then one table per heat with a row per race and a column per grid.
//!
//! ```text
//! Spring Meeting - 04/05/2024
//! Senior
//!
//! Heat 1
//! Grid   | 1  | 2 | 3
//! Race 1 | B2 |   | A1
//! ```

use std::io::{self, Write};

use chrono::NaiveDate;

use gridgen_core::{DrawResult, Heat};

use super::Exporter;

const GRID_HEADER: &str = "Grid";
const SEPARATOR: &str = " | ";

/// Writes heat tables as aligned plain text.
#[derive(Debug)]
pub struct TextExporter<W> {
    writer: W,
    meeting_name: String,
    day: NaiveDate,
}

impl<W: Write> TextExporter<W> {
    /// Creates an exporter writing to `writer`, headed with the meeting name
    /// and the draw day.
    pub fn new(writer: W, meeting_name: impl Into<String>, day: NaiveDate) -> Self {
        Self {
            writer,
            meeting_name: meeting_name.into(),
            day,
        }
    }

    /// Consumes the exporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_heat(&mut self, heat: &Heat) -> io::Result<()> {
        writeln!(self.writer, "Heat {}", heat.number())?;

        let Some(grid_count) = heat.races().first().map(|race| race.len()) else {
            return writeln!(self.writer, "No races");
        };

        let mut rows: Vec<Vec<String>> = Vec::with_capacity(heat.races().len() + 1);
        rows.push(
            std::iter::once(GRID_HEADER.to_string())
                .chain((1..=grid_count).map(|grid| grid.to_string()))
                .collect(),
        );
        for (index, race) in heat.races().iter().enumerate() {
            rows.push(
                std::iter::once(format!("Race {}", index + 1))
                    .chain(race.slots().iter().map(ToString::to_string))
                    .collect(),
            );
        }

        let widths: Vec<usize> = (0..=grid_count)
            .map(|column| {
                rows.iter()
                    .filter_map(|row| row.get(column))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for row in &rows {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join(SEPARATOR);
            writeln!(self.writer, "{}", line.trim_end())?;
        }

        Ok(())
    }
}

impl<W: Write> Exporter for TextExporter<W> {
    fn export_draw(&mut self, draw: &DrawResult) -> io::Result<()> {
        let date = self.day.format("%d/%m/%Y");
        if self.meeting_name.is_empty() {
            writeln!(self.writer, "{date}")?;
        } else {
            writeln!(self.writer, "{} - {date}", self.meeting_name)?;
        }
        writeln!(self.writer, "{}", draw.class_name())?;

        if draw.heats().is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "No heats drawn")?;
        }

        for heat in draw.heats() {
            writeln!(self.writer)?;
            self.write_heat(heat)?;
        }

        self.writer.flush()
    }
}

/// Renders a draw to a string.
pub fn render(draw: &DrawResult, meeting_name: &str, day: NaiveDate) -> String {
    let mut exporter = TextExporter::new(Vec::new(), meeting_name, day);
    exporter
        .export_draw(draw)
        .expect("Writing to a Vec is infallible");
    String::from_utf8_lossy(&exporter.into_inner()).into_owned()
}

#[cfg(test)]
mod tests {
    use gridgen_core::{Race, Slot};

    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 4).unwrap()
    }

    #[test]
    fn test_render_heat_table() {
        let race = Race::new(vec![
            Slot::participant("B2"),
            Slot::Blank,
            Slot::participant("A1"),
        ]);
        let draw = DrawResult::new("Senior", vec![Heat::new(1, vec![race])]);

        let text = render(&draw, "Spring Meeting", day());

        let expected = "\
Spring Meeting - 04/05/2024
Senior

Heat 1
Grid   | 1  | 2 | 3
Race 1 | B2 |   | A1
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_one_row_per_race() {
        let races = vec![
            Race::new(vec![Slot::participant("A1"), Slot::Blank]),
            Race::new(vec![Slot::Blank, Slot::participant("C3")]),
        ];
        let draw = DrawResult::new(
            "Junior",
            vec![Heat::new(1, races.clone()), Heat::new(2, races)],
        );

        let text = render(&draw, "", day());

        assert!(text.starts_with("04/05/2024\nJunior\n"));
        assert_eq!(text.matches("Heat ").count(), 2);
        assert_eq!(text.matches("Race 1").count(), 2);
        assert_eq!(text.matches("Race 2").count(), 2);
    }

    #[test]
    fn test_render_empty_heat_and_no_heats() {
        let draw = DrawResult::new("Junior", vec![Heat::new(1, Vec::new())]);
        assert!(render(&draw, "M", day()).ends_with("Heat 1\nNo races\n"));

        let draw = DrawResult::new("Junior", Vec::new());
        assert!(render(&draw, "M", day()).ends_with("No heats drawn\n"));
    }
}
