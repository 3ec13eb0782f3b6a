//! Core module for the star forge
//!
//! This module provides the pure, synchronous pipeline. Nothing in here
//! touches the network or the filesystem except configuration loading.
//!
//! # Architecture
//!
//! - `encoder`: text → byte-aligned bit sequence, per charset
//! - `coordinates`: bit sequence → sky coordinate (SHA-256)
//! - `classifier`: word → brightness and color class
//! - `catalog`: fixed reference stars and constellation regions
//! - `resolver`: nearest reference star and region membership
//! - `raster`: batch of stars → glyph grid
//! - `forge`: per-word and batch orchestration
//! - `angle`: sexagesimal formatting
//! - `models`: star record and configuration
//! - `error`: error types using thiserror

pub mod angle;
pub mod catalog;
pub mod classifier;
pub mod coordinates;
pub mod encoder;
pub mod error;
pub mod forge;
pub mod models;
pub mod raster;
pub mod resolver;

// Re-export commonly used types
pub use angle::{format_degrees, format_hours};
pub use catalog::{BoundingBox, Catalog, CatalogEntry, ConstellationRegion, UNASSIGNED_REGION};
pub use classifier::{classify, Classification, ColorClass};
pub use coordinates::{derive, Coordinate};
pub use encoder::{encode, BitSequence, Charset};
pub use error::{Result, ResultExt, StarmapError};
pub use forge::{parse_word_list, StarForge};
pub use models::{
    StarRecord, StarmapConfig, Theme, DEFAULT_CONFIG_FILE, MAX_GRID_DIMENSION,
};
pub use raster::{rasterize, Glyph, Grid};
pub use resolver::{constellation_of, nearest_catalog_entry, NearestStar};
