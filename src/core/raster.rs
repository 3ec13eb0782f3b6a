//! Grid Rasterizer
//!
//! Drops a batch of stars onto a fixed `width × height` grid of glyph cells.
//!
//! ```text
//! column = clamp(round(azimuth / 24 · (width − 2)),        0, width − 2)
//! row    = clamp(round((polar + 90) / 180 · (height − 2)), 0, height − 2)
//! ```
//!
//! Row 0 holds the south pole (−90°). When two stars share a cell the later
//! one in input order wins. Rasterizing never fails: only occupied cells are
//! stored, so any `width × height` is accepted.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use super::coordinates::{Coordinate, AZIMUTH_SPAN_HOURS, POLAR_MIN_DEGREES};
use super::models::StarRecord;

// =============================================================================
// Glyph
// =============================================================================

/// Display band of a star, chosen by brightness thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    /// brightness < 0
    VeryBright,
    /// 0 ≤ brightness < 2
    Bright,
    /// 2 ≤ brightness < 4
    Medium,
    /// brightness ≥ 4
    Faint,
}

impl Glyph {
    /// All bands, brightest first.
    pub const ALL: [Glyph; 4] = [Glyph::VeryBright, Glyph::Bright, Glyph::Medium, Glyph::Faint];

    /// Band for a brightness value. NaN falls into the faint band.
    pub fn for_brightness(brightness: f64) -> Self {
        if brightness < 0.0 {
            Glyph::VeryBright
        } else if brightness < 2.0 {
            Glyph::Bright
        } else if brightness < 4.0 {
            Glyph::Medium
        } else {
            Glyph::Faint
        }
    }

    /// Unicode chart symbol.
    pub fn symbol(&self) -> char {
        match self {
            Glyph::VeryBright => '★',
            Glyph::Bright => '☆',
            Glyph::Medium => '⭑',
            Glyph::Faint => '∙',
        }
    }

    /// Plain ASCII chart symbol.
    pub fn ascii(&self) -> char {
        match self {
            Glyph::VeryBright => '@',
            Glyph::Bright => '*',
            Glyph::Medium => '+',
            Glyph::Faint => '.',
        }
    }

    /// Legend text for the band.
    pub fn description(&self) -> &'static str {
        match self {
            Glyph::VeryBright => "very bright (magnitude < 0)",
            Glyph::Bright => "bright (0-2)",
            Glyph::Medium => "medium (2-4)",
            Glyph::Faint => "faint (>= 4)",
        }
    }
}

// =============================================================================
// Grid
// =============================================================================

/// Fixed-size grid of optional glyphs with row 0 at the south.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Occupied cells keyed by `(row, column)`
    cells: BTreeMap<(usize, usize), Glyph>,
    overwrites: usize,
}

impl Grid {
    /// An empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: BTreeMap::new(),
            overwrites: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Glyph at `(column, row)`, `None` when empty or out of bounds.
    pub fn get(&self, column: usize, row: usize) -> Option<Glyph> {
        if column >= self.width || row >= self.height {
            return None;
        }
        self.cells.get(&(row, column)).copied()
    }

    /// Cells of one row, west to east. Empty past the last row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Option<Glyph>> + '_ {
        let width = if row < self.height { self.width } else { 0 };
        (0..width).map(move |column| self.cells.get(&(row, column)).copied())
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.len()
    }

    /// How many placements replaced an earlier star.
    pub fn overwrites(&self) -> usize {
        self.overwrites
    }

    /// Cell a coordinate maps to, or `None` for a grid without cells.
    pub fn cell_for(&self, point: &Coordinate) -> Option<(usize, usize)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let max_column = self.width.saturating_sub(2);
        let max_row = self.height.saturating_sub(2);

        let column = scale_to_cell(point.azimuth() / AZIMUTH_SPAN_HOURS, max_column);
        let row = scale_to_cell((point.polar() - POLAR_MIN_DEGREES) / 180.0, max_row);
        Some((column, row))
    }

    /// Place a glyph for `point`; later placements overwrite earlier ones.
    pub fn plot(&mut self, point: &Coordinate, glyph: Glyph) -> Option<(usize, usize)> {
        let Some((column, row)) = self.cell_for(point) else {
            warn!(
                width = self.width,
                height = self.height,
                "grid has no cells, star skipped"
            );
            return None;
        };

        if let Some(previous) = self.cells.insert((row, column), glyph) {
            self.overwrites += 1;
            debug!(column, row, ?previous, ?glyph, "cell overwritten");
        }
        Some((column, row))
    }
}

/// `clamp(round(fraction · max), 0, max)` with non-finite input mapped to 0.
fn scale_to_cell(fraction: f64, max: usize) -> usize {
    let scaled = (fraction * max as f64).round();
    if !scaled.is_finite() || scaled <= 0.0 {
        0
    } else if scaled >= max as f64 {
        max
    } else {
        scaled as usize
    }
}

/// Rasterize stars in input order onto a new `width × height` grid.
pub fn rasterize(records: &[StarRecord], width: usize, height: usize) -> Grid {
    let mut grid = Grid::new(width, height);
    for record in records {
        grid.plot(&record.coordinate, Glyph::for_brightness(record.brightness));
    }
    debug!(
        stars = records.len(),
        occupied = grid.occupied(),
        overwrites = grid.overwrites(),
        "rasterized star chart"
    );
    grid
}
