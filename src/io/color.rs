//! Hex color parsing and formatting

use crate::io::error::{PatternError, Result};
use image::Rgba;

/// The two colors of a bounce-fill pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    /// Color of every odd tile in walk order
    pub inside: Rgba<u8>,
    /// Color of the first tile, every even tile and the margins
    pub outside: Rgba<u8>,
}

impl ColorPair {
    /// Pair two colors
    pub const fn new(inside: Rgba<u8>, outside: Rgba<u8>) -> Self {
        Self { inside, outside }
    }

    /// Parse both colors from hex strings
    ///
    /// # Errors
    ///
    /// Returns an error if either string is not a valid hex color
    pub fn parse(inside: &str, outside: &str) -> Result<Self> {
        Ok(Self::new(parse_hex_color(inside)?, parse_hex_color(outside)?))
    }
}

/// Parse `#rgb`, `#rrggbb` or `#aarrggbb` (alpha first) into RGBA
///
/// # Errors
///
/// Returns `InvalidColor` if the leading `#` is missing, the length is not
/// 3, 6 or 8 digits, or a digit is not hexadecimal
pub fn parse_hex_color(value: &str) -> Result<Rgba<u8>> {
    let invalid = |reason: &str| PatternError::InvalidColor {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let digits = value
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| invalid("hex colors must start with '#'"))?;

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid("contains non-hexadecimal digits"));
    }

    let channel = |range: std::ops::Range<usize>| -> Result<u8> {
        let part = digits
            .get(range)
            .ok_or_else(|| invalid("truncated channel"))?;
        u8::from_str_radix(part, 16).map_err(|e| invalid(&e.to_string()))
    };

    match digits.len() {
        3 => {
            let mut rgb = [0_u8; 3];
            for (slot, index) in rgb.iter_mut().zip(0..3) {
                let nibble = channel(index..index + 1)?;
                *slot = nibble * 0x11;
            }
            Ok(Rgba([rgb[0], rgb[1], rgb[2], u8::MAX]))
        }
        6 => Ok(Rgba([channel(0..2)?, channel(2..4)?, channel(4..6)?, u8::MAX])),
        8 => Ok(Rgba([
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
            channel(0..2)?,
        ])),
        _ => Err(invalid("expected 3, 6 or 8 hex digits")),
    }
}

/// Format as lowercase `#rrggbb`, or `#aarrggbb` when not fully opaque
pub fn to_hex(color: Rgba<u8>) -> String {
    let Rgba([r, g, b, a]) = color;
    if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{a:02x}{r:02x}{g:02x}{b:02x}")
    }
}
