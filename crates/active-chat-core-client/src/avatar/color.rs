// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt;

/// A color in HSL space, formatted the way CSS and SVG expect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HslColor {
    pub hue: u32,
    pub saturation: u8,
    pub lightness: u8,
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Maps a seed string to a hue via a 32-bit rolling hash over the seed's
/// UTF-16 code units (`hash = hash * 31 + unit`, wrapped to signed 32-bit).
/// The wrap keeps the output identical to what the web clients compute, so
/// every participant sees the same colors for the same identifier. The empty
/// seed hashes to 0 and lands on hue 0.
pub(crate) fn string_to_hsl(seed: &str, saturation: u8, lightness: u8) -> HslColor {
    let mut hash: i32 = 0;
    for unit in seed.encode_utf16() {
        hash = (unit as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }

    HslColor {
        hue: hash.unsigned_abs() % 360,
        saturation,
        lightness,
    }
}

/// Derives the two gradient stops for an identifier. Distinct identifiers
/// may collide on a hue; the goal is visual variety, not uniqueness.
pub fn gradient_colors(identifier: &str) -> (HslColor, HslColor) {
    let primary = string_to_hsl(&format!("{identifier}primary"), 75, 55);
    let secondary = string_to_hsl(&format!("{identifier}secondary"), 70, 45);
    (primary, secondary)
}
