// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Reference RGB values for the xterm 256-color palette.
//!
//! - Indices 0-15: the 16 system colors (first 8 are the [`super::BasicColor`] names)
//! - Indices 16-231: 6×6×6 RGB color cube
//! - Indices 232-255: grayscale ramp (24 shades)
//!
//! More info: <https://www.ditig.com/256-colors-cheat-sheet>

use super::RgbValue;

/// The 16 system colors, as `0xRRGGBB`.
pub const ANSI_SYSTEM_PALETTE: [u32; 16] = [
    0x00_00_00, 0x80_00_00, 0x00_80_00, 0x80_80_00, 0x00_00_80, 0x80_00_80, 0x00_80_80,
    0xc0_c0_c0, 0x80_80_80, 0xff_00_00, 0x00_ff_00, 0xff_ff_00, 0x00_00_ff, 0xff_00_ff,
    0x00_ff_ff, 0xff_ff_ff,
];

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
const CUBE_START: u8 = 16;
const GRAYSCALE_START: u8 = 232;

#[must_use]
pub fn ansi256_to_rgb(index: u8) -> RgbValue {
    match index {
        0..CUBE_START => RgbValue::from(ANSI_SYSTEM_PALETTE[usize::from(index)]),
        CUBE_START..GRAYSCALE_START => {
            let offset = index - CUBE_START;
            RgbValue::from_u8(
                CUBE_LEVELS[usize::from(offset / 36)],
                CUBE_LEVELS[usize::from((offset % 36) / 6)],
                CUBE_LEVELS[usize::from(offset % 6)],
            )
        }
        GRAYSCALE_START..=u8::MAX => {
            let level = 8 + (index - GRAYSCALE_START) * 10;
            RgbValue::from_u8(level, level, level)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    /// <https://www.ditig.com/256-colors-cheat-sheet>
    #[test_case(0, (0, 0, 0) ; "black")]
    #[test_case(1, (128, 0, 0) ; "maroon")]
    #[test_case(15, (255, 255, 255) ; "white")]
    #[test_case(16, (0, 0, 0) ; "grey0")]
    #[test_case(42, (0, 215, 135) ; "spring green 2")]
    #[test_case(57, (95, 0, 255) ; "blue violet")]
    #[test_case(150, (175, 215, 135) ; "dark sea green 2")]
    #[test_case(231, (255, 255, 255) ; "grey100")]
    #[test_case(232, (8, 8, 8) ; "grey3")]
    #[test_case(255, (238, 238, 238) ; "grey93")]
    fn test_ansi256_to_rgb(index: u8, expected: (u8, u8, u8)) {
        assert_eq!(ansi256_to_rgb(index), RgbValue::from(expected));
    }
}
