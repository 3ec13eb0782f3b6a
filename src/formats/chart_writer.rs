//! Streaming chart writer
//!
//! Renders a [`Grid`] as a bordered text block with polar labels on the left
//! and a glyph legend underneath. North is drawn at the top, so the grid's
//! highest row is written first.

use std::io::Write;

use crate::core::error::Result;
use crate::core::models::Theme;
use crate::core::raster::{Glyph, Grid};

/// Writes charts to any `std::io::Write`.
pub struct ChartWriter<W: Write> {
    writer: W,
    theme: Theme,
}

impl<W: Write> ChartWriter<W> {
    pub fn new(writer: W, theme: Theme) -> Self {
        Self { writer, theme }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn symbol(&self, glyph: Glyph) -> char {
        match self.theme {
            Theme::Full => glyph.symbol(),
            Theme::Plain => glyph.ascii(),
        }
    }

    fn border_chars(&self) -> (char, char) {
        match self.theme {
            Theme::Full => ('─', '│'),
            Theme::Plain => ('-', '|'),
        }
    }

    fn degree_unit(&self) -> &'static str {
        match self.theme {
            Theme::Full => "°",
            Theme::Plain => " deg",
        }
    }

    /// Bordered grid plus axis captions.
    pub fn write_chart(&mut self, grid: &Grid) -> Result<()> {
        let (horizontal, vertical) = self.border_chars();
        let rule = horizontal.to_string().repeat(grid.width());

        writeln!(self.writer)?;
        writeln!(self.writer, "      Right ascension (RA) 0h -> 24h")?;
        writeln!(self.writer, "      {}", rule)?;

        for row in (0..grid.height()).rev() {
            let cells: String = grid
                .row(row)
                .map(|cell| cell.map(|g| self.symbol(g)).unwrap_or(' '))
                .collect();
            writeln!(
                self.writer,
                "{} {}{}{}",
                row_label(row, grid.height(), self.theme),
                vertical,
                cells,
                vertical
            )?;
        }

        writeln!(self.writer, "      {}", rule)?;
        let unit = self.degree_unit();
        writeln!(
            self.writer,
            "      Declination (Dec) +90{unit} (top) -> -90{unit} (bottom)"
        )?;
        Ok(())
    }

    /// Glyph legend, brightest band first.
    pub fn write_legend(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Legend:")?;
        for glyph in Glyph::ALL {
            writeln!(
                self.writer,
                "{} - {}",
                self.symbol(glyph),
                glyph.description()
            )?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Polar value at the centre of `row`, as a fixed-width label. Rows above
/// the last addressable one get a blank label. Plain labels are ASCII.
fn row_label(row: usize, height: usize, theme: Theme) -> String {
    let max_row = height.saturating_sub(2);
    if row > max_row {
        return " ".repeat(5);
    }
    let polar = if max_row == 0 {
        0.0
    } else {
        row as f64 / max_row as f64 * 180.0 - 90.0
    };
    let degrees = polar.round() as i64;
    match theme {
        Theme::Full => format!("{:+4}°", degrees),
        Theme::Plain => format!("{:+4} ", degrees),
    }
}

/// Render chart and legend into a string.
pub fn render_chart(grid: &Grid, theme: Theme) -> Result<String> {
    let mut writer = ChartWriter::new(Vec::new(), theme);
    writer.write_chart(grid)?;
    writer.write_legend()?;
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}
