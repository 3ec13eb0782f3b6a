//! Classifier
//!
//! Assigns a brightness (magnitude-like, lower is brighter) and a color class
//! to a word. Independent of the coordinate it hashes to.
//!
//! ```text
//! brightness = clamp(6 − (len/10 · 3 + (len − vowels)/len · 4), −1, 6)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Brightness of an empty word (and the dim end of the scale).
pub const BRIGHTNESS_BASE: f64 = 6.0;
const LENGTH_WEIGHT: f64 = 3.0;
const RARITY_WEIGHT: f64 = 4.0;

/// Brightest allowed value.
pub const BRIGHTNESS_MIN: f64 = -1.0;
/// Dimmest allowed value.
pub const BRIGHTNESS_MAX: f64 = 6.0;

const VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', //
    'а', 'е', 'ё', 'и', 'о', 'у', 'ы', 'э', 'ю', 'я',
];

// =============================================================================
// Color Class
// =============================================================================

/// Discrete star color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorClass {
    White,
    Cyan,
    Blue,
    Yellow,
    Orange,
    Red,
}

impl ColorClass {
    /// All classes in hash-index order.
    pub const ALL: [ColorClass; 6] = [
        ColorClass::White,
        ColorClass::Cyan,
        ColorClass::Blue,
        ColorClass::Yellow,
        ColorClass::Orange,
        ColorClass::Red,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColorClass::White => "white",
            ColorClass::Cyan => "cyan",
            ColorClass::Blue => "blue",
            ColorClass::Yellow => "yellow",
            ColorClass::Orange => "orange",
            ColorClass::Red => "red",
        }
    }

    /// Rough surface temperature band, for the guide text.
    pub fn temperature_hint(&self) -> &'static str {
        match self {
            ColorClass::Blue => "> 30,000 K (hottest)",
            ColorClass::Cyan => "20,000-30,000 K",
            ColorClass::White => "10,000-20,000 K",
            ColorClass::Yellow => "6,000-10,000 K (like the Sun)",
            ColorClass::Orange => "4,000-6,000 K",
            ColorClass::Red => "< 4,000 K (coolest)",
        }
    }
}

impl fmt::Display for ColorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Classification
// =============================================================================

/// Brightness and color of a word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Clamped into `[-1, 6]` and rounded to hundredths
    pub brightness: f64,
    pub color: ColorClass,
}

/// Classify a word.
pub fn classify(text: &str) -> Classification {
    Classification {
        brightness: brightness(text),
        color: color_class(text),
    }
}

/// Count vowels, case-insensitively.
pub fn vowel_count(text: &str) -> usize {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| VOWELS.contains(c))
        .count()
}

/// Magnitude-like brightness of a word.
pub fn brightness(text: &str) -> f64 {
    let length = text.chars().count();
    let length_factor = length as f64 / 10.0;
    let rarity_factor = if length == 0 {
        0.0
    } else {
        (length - vowel_count(text).min(length)) as f64 / length as f64
    };

    let raw = BRIGHTNESS_BASE - (length_factor * LENGTH_WEIGHT + rarity_factor * RARITY_WEIGHT);
    round_hundredths(raw.clamp(BRIGHTNESS_MIN, BRIGHTNESS_MAX))
}

/// Color class picked by SHA-256 of the word's UTF-8 bytes.
pub fn color_class(text: &str) -> ColorClass {
    let digest = Sha256::digest(text.as_bytes());
    let index = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]) as usize
        % ColorClass::ALL.len();
    ColorClass::ALL[index]
}

pub(crate) fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
