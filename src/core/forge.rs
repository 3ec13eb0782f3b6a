//! Star Forge
//!
//! Orchestrates the per-word pipeline and the batch chart:
//!
//! ```text
//! word → encode → derive ─┬→ classify            ─┐
//!                         └→ nearest / region     ─┴→ StarRecord → rasterize
//! ```
//!
//! A forge owns its configuration and borrows the immutable catalog, so any
//! number of forges (or threads sharing one) can run side by side.

use tracing::debug;

use super::catalog::Catalog;
use super::classifier::classify;
use super::coordinates::derive;
use super::encoder::encode;
use super::error::{Result, ResultExt};
use super::models::{StarRecord, StarmapConfig};
use super::raster::{rasterize, Grid};
use super::resolver::{constellation_of, nearest_catalog_entry};

/// Turns words into star records and star records into charts.
#[derive(Debug, Clone)]
pub struct StarForge<'c> {
    config: StarmapConfig,
    catalog: &'c Catalog,
}

impl Default for StarForge<'static> {
    fn default() -> Self {
        Self::new(StarmapConfig::default())
    }
}

impl StarForge<'static> {
    /// Forge against the built-in catalog.
    pub fn new(config: StarmapConfig) -> Self {
        Self::with_catalog(config, Catalog::builtin())
    }
}

impl<'c> StarForge<'c> {
    /// Forge against a caller-supplied catalog.
    pub fn with_catalog(config: StarmapConfig, catalog: &'c Catalog) -> Self {
        Self { config, catalog }
    }

    pub fn config(&self) -> &StarmapConfig {
        &self.config
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Build the star for one word. `id` is its 1-based batch position.
    pub fn forge(&self, word: &str, id: usize) -> Result<StarRecord> {
        let bits = encode(word, self.config.charset)?;
        let coordinate = derive(&bits);
        let classification = classify(word);
        let nearest = nearest_catalog_entry(self.catalog, &coordinate);
        let constellation = constellation_of(self.catalog, &coordinate);

        debug!(
            id,
            word,
            azimuth = coordinate.azimuth(),
            polar = coordinate.polar(),
            brightness = classification.brightness,
            nearest = %nearest.entry.name,
            constellation,
            "forged star"
        );

        Ok(StarRecord {
            id,
            word: word.to_string(),
            bits,
            coordinate,
            nearest: nearest.entry.clone(),
            nearest_distance: nearest.distance,
            brightness: classification.brightness,
            color: classification.color,
            constellation: constellation.to_string(),
        })
    }

    /// Build stars for a batch, in order. The first encoding failure aborts
    /// the batch and names the offending word.
    pub fn forge_all<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<StarRecord>> {
        words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let word = word.as_ref();
                self.forge(word, i + 1)
                    .context(format!("word #{} '{}'", i + 1, word))
            })
            .collect()
    }

    /// Rasterize records at the configured chart size.
    pub fn chart(&self, records: &[StarRecord]) -> Grid {
        rasterize(records, self.config.grid_width, self.config.grid_height)
    }
}

/// Split free-form input into words: commas and newlines separate, blanks
/// are dropped.
pub fn parse_word_list(input: &str) -> Vec<String> {
    input
        .split(|c| c == ',' || c == '\n' || c == '\r')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
