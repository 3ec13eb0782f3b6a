//! Byte Encoder
//!
//! Turns a word into an explicit, byte-aligned bit sequence. Every byte of the
//! chosen character encoding contributes exactly eight bits, most significant
//! bit first, in byte order.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{Result, StarmapError};

// =============================================================================
// Charset
// =============================================================================

/// Character encoding used to turn text into bytes.
///
/// Config files and the CLI both go through [`Charset::parse`], so they accept
/// the same names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Charset {
    /// UTF-8 (default, never fails)
    #[default]
    Utf8,
    /// 7-bit US-ASCII
    Ascii,
    /// ISO-8859-1, one byte per code point up to U+00FF
    Latin1,
}

/// Accepted names, matched case-insensitively. The first name per charset is
/// canonical.
const CHARSET_NAMES: [(&str, Charset); 6] = [
    ("utf-8", Charset::Utf8),
    ("utf8", Charset::Utf8),
    ("ascii", Charset::Ascii),
    ("us-ascii", Charset::Ascii),
    ("latin1", Charset::Latin1),
    ("iso-8859-1", Charset::Latin1),
];

impl Charset {
    /// Parse a charset name.
    pub fn parse(s: &str) -> Result<Self> {
        CHARSET_NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s.trim()))
            .map(|(_, charset)| *charset)
            .ok_or_else(|| {
                StarmapError::invalid_config(format!(
                    "unknown charset '{}' (expected one of: {})",
                    s,
                    Self::accepted_names().join(", ")
                ))
            })
    }

    /// Every name [`Charset::parse`] accepts.
    pub fn accepted_names() -> Vec<&'static str> {
        CHARSET_NAMES.iter().map(|(name, _)| *name).collect()
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Charset::Utf8 => "utf-8",
            Charset::Ascii => "ascii",
            Charset::Latin1 => "latin1",
        }
    }

    /// Highest code point a single-byte charset can hold.
    fn single_byte_limit(&self) -> Option<u32> {
        match self {
            Charset::Utf8 => None,
            Charset::Ascii => Some(0x7F),
            Charset::Latin1 => Some(0xFF),
        }
    }

    /// Encode text into bytes, rejecting unrepresentable characters.
    pub fn encode_bytes(&self, text: &str) -> Result<Vec<u8>> {
        let Some(limit) = self.single_byte_limit() else {
            return Ok(text.as_bytes().to_vec());
        };

        let mut bytes = Vec::with_capacity(text.len());
        for (position, character) in text.chars().enumerate() {
            let code = character as u32;
            if code > limit {
                return Err(StarmapError::Encoding {
                    charset: *self,
                    character,
                    position,
                });
            }
            bytes.push(code as u8);
        }
        Ok(bytes)
    }
}

impl TryFrom<String> for Charset {
    type Error = StarmapError;

    fn try_from(name: String) -> Result<Self> {
        Self::parse(&name)
    }
}

impl From<Charset> for &'static str {
    fn from(charset: Charset) -> Self {
        charset.name()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// BitSequence
// =============================================================================

/// Byte-aligned bit sequence; its length is always a multiple of eight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitSequence {
    bytes: Vec<u8>,
}

impl BitSequence {
    /// Wrap raw bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bytes.len() * 8
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Underlying bytes in order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Iterate bits, MSB first within each byte.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.bytes
            .iter()
            .flat_map(|byte| (0..8).rev().map(move |shift| (byte >> shift) & 1 == 1))
    }

    /// Textual form: one ASCII `'0'`/`'1'` per bit. This is also the
    /// serialization the coordinate hash is computed over.
    pub fn to_bit_string(&self) -> String {
        self.bits().map(|b| if b { '1' } else { '0' }).collect()
    }

    /// First `max_bits` bits as text, with `...` appended when truncated.
    pub fn preview(&self, max_bits: usize) -> String {
        let text = self.to_bit_string();
        if text.len() > max_bits {
            format!("{}...", &text[..max_bits])
        } else {
            text
        }
    }
}

impl fmt::Display for BitSequence {
    /// Space-separated octets, e.g. `01101000 01101001`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:08b}", byte)?;
        }
        Ok(())
    }
}

/// Encode `text` in `charset` as a bit sequence.
///
/// Empty input yields an empty sequence. Fails with
/// [`StarmapError::Encoding`] on the first unrepresentable character.
pub fn encode(text: &str, charset: Charset) -> Result<BitSequence> {
    charset.encode_bytes(text).map(BitSequence::from_bytes)
}
