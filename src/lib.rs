//! starmap - Deterministic word stars (Rust Engine)
//!
//! Turns arbitrary words into reproducible points of a synthetic sky, each
//! annotated with a brightness, a color class, the nearest reference star and
//! a constellation label, and rasterizes batches of them onto text charts.
//!
//! # Architecture
//!
//! This crate follows the "Library-First" pattern:
//! - **core**: the pure pipeline (encode, derive, classify, resolve, rasterize)
//! - **formats**: interchange records, saved reports and chart rendering
//! - **bin/starmap.rs**: thin CLI wrapper over the library
//!
//! ```text
//! word → BitSequence → Coordinate → StarRecord ─┐
//!                                               ├→ Grid → chart text
//! word → BitSequence → Coordinate → StarRecord ─┘
//! ```
//!
//! # Example
//!
//! ```
//! use starmap::{StarForge, StarmapConfig};
//!
//! let forge = StarForge::new(StarmapConfig::default());
//! let stars = forge.forge_all(&["hello", "world"]).unwrap();
//! let grid = forge.chart(&stars);
//!
//! assert_eq!(stars[0].bit_length(), 40);
//! assert_eq!((grid.width(), grid.height()), (60, 20));
//! ```

pub mod core;
pub mod formats;

pub use crate::core::{
    classify, constellation_of, derive, encode, format_degrees, format_hours,
    nearest_catalog_entry, parse_word_list, rasterize, BitSequence, Catalog, CatalogEntry,
    Charset, Classification, ColorClass, ConstellationRegion, Coordinate, Glyph, Grid,
    NearestStar, Result, StarForge, StarRecord, StarmapConfig, StarmapError, Theme,
    UNASSIGNED_REGION,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the version of the starmap library
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
        assert_eq!(version(), VERSION);
    }

    #[test]
    fn test_reexported_pipeline() {
        let bits = encode("hello", Charset::Utf8).unwrap();
        let coord = derive(&bits);
        let nearest = nearest_catalog_entry(Catalog::builtin(), &coord);
        assert_eq!(nearest.entry.name, "Regulus");
        assert_eq!(constellation_of(Catalog::builtin(), &coord), UNASSIGNED_REGION);
        assert_eq!(classify("").brightness, 6.0);
    }
}
