//! Coordinate Deriver
//!
//! Hashes a bit sequence into a point of the synthetic sky. The hash is
//! SHA-256 over the textual `'0'`/`'1'` serialization of the bits, so the same
//! word always lands on the same point on every platform and every run.
//!
//! ```text
//! digest[0..4] → H1 → azimuth = H1 / 2^32 · 24        (hours)
//! digest[4..8] → H2 → polar   = H2 / 2^32 · 180 − 90  (degrees)
//! ```

use serde::Serialize;
use sha2::{Digest, Sha256};

use super::encoder::BitSequence;

/// Full turn of the azimuthal axis, in hours.
pub const AZIMUTH_SPAN_HOURS: f64 = 24.0;

/// Polar axis bounds, in degrees.
pub const POLAR_MIN_DEGREES: f64 = -90.0;
pub const POLAR_MAX_DEGREES: f64 = 90.0;

const WINDOW_SCALE: f64 = 4_294_967_296.0; // 2^32

// =============================================================================
// Coordinate
// =============================================================================

/// A point of the synthetic sky.
///
/// Azimuth wraps into `[0, 24)` hours; polar is clamped into `[-90, 90]`
/// degrees and never wraps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    azimuth: f64,
    polar: f64,
}

impl Coordinate {
    /// Build a normalized coordinate. Non-finite components become 0.
    pub fn new(azimuth: f64, polar: f64) -> Self {
        Self {
            azimuth: wrap_azimuth(azimuth),
            polar: clamp_polar(polar),
        }
    }

    /// Azimuth in hours, `[0, 24)`.
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Polar angle in degrees, `[-90, 90]`.
    pub fn polar(&self) -> f64 {
        self.polar
    }

    /// Planar Euclidean distance in raw (hours, degrees) space.
    ///
    /// Not a great-circle separation: one hour and one degree weigh the same.
    pub fn planar_distance(&self, other: &Coordinate) -> f64 {
        (self.azimuth - other.azimuth).hypot(self.polar - other.polar)
    }
}

fn wrap_azimuth(hours: f64) -> f64 {
    if !hours.is_finite() {
        return 0.0;
    }
    let wrapped = hours.rem_euclid(AZIMUTH_SPAN_HOURS);
    // rem_euclid can round a tiny negative up to exactly 24.0
    if wrapped >= AZIMUTH_SPAN_HOURS {
        0.0
    } else {
        wrapped
    }
}

fn clamp_polar(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    degrees.clamp(POLAR_MIN_DEGREES, POLAR_MAX_DEGREES)
}

// =============================================================================
// Derivation
// =============================================================================

/// SHA-256 digest of the bit sequence's textual serialization.
pub fn bit_digest(bits: &BitSequence) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(bits.to_bit_string().as_bytes());
    hasher.finalize().into()
}

/// Derive the sky coordinate of a bit sequence.
///
/// Total: the empty sequence hashes like any other input.
pub fn derive(bits: &BitSequence) -> Coordinate {
    let digest = bit_digest(bits);
    let h1 = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    let h2 = u32::from_be_bytes([digest[4], digest[5], digest[6], digest[7]]);

    let azimuth = (h1 as f64 / WINDOW_SCALE) * AZIMUTH_SPAN_HOURS;
    let polar = (h2 as f64 / WINDOW_SCALE) * 180.0 - 90.0;

    Coordinate::new(azimuth, polar)
}
