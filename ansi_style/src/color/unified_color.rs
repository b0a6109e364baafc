// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          str::FromStr};

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{AnsiValue, BasicColor, RgbValue, TransformColor};
use crate::{ColorError, ColorKind, ColorResult, SgrCode};

/// This is the "top-level" color type used in this crate. For example this is what
/// [`crate::Style::foreground()`] and [`crate::Style::background()`] accept.
///
/// Each variant is backed by one of the "lower-level" color types, which can only hold
/// valid data. The `try_from_*` factories validate raw input before any variant is
/// built, so an invalid `Color` is never observable.
///
/// ```rust
/// use ansi_style::{Color, ColorKind};
///
/// let color = Color::try_from_hex("#ff5733").unwrap();
/// assert_eq!(color.render(ColorKind::Foreground), "\x1b[38;2;255;87;51m");
/// assert_eq!(color.render(ColorKind::Background), "\x1b[48;2;255;87;51m");
///
/// assert!(Color::try_from_rgb(256, 0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// 24-bit truecolor, rendered as `8;2;<r>;<g>;<b>`.
    Rgb(RgbValue),
    /// 4-bit named palette color, rendered as a single digit `0`-`7`.
    Basic(BasicColor),
    /// 256-color palette index, rendered as `8;5;<index>`.
    Ansi256(AnsiValue),
}

impl Default for Color {
    fn default() -> Self { Color::Rgb(RgbValue::from_u8(0, 0, 0)) }
}

impl From<RgbValue> for Color {
    fn from(rgb_value: RgbValue) -> Self { Color::Rgb(rgb_value) }
}

impl From<(u8, u8, u8)> for Color {
    fn from(rgb: (u8, u8, u8)) -> Self { Color::Rgb(rgb.into()) }
}

impl From<BasicColor> for Color {
    fn from(basic: BasicColor) -> Self { Color::Basic(basic) }
}

impl From<AnsiValue> for Color {
    fn from(ansi: AnsiValue) -> Self { Color::Ansi256(ansi) }
}

impl From<Color> for RgbValue {
    fn from(color: Color) -> Self { color.as_rgb() }
}

impl Color {
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color::Rgb(RgbValue::from_u8(red, green, blue))
    }

    /// # Errors
    ///
    /// Returns [`ColorError::ChannelOutOfRange`] if any channel is not in `0..=255`.
    pub fn try_from_rgb(red: i64, green: i64, blue: i64) -> ColorResult<Self> {
        RgbValue::try_from_channels(red, green, blue).map(Color::Rgb)
    }

    /// `hue` in degrees `0..=360`, `saturation` and `lightness` in percent `0..=100`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::HueOutOfRange`] or [`ColorError::PercentOutOfRange`].
    pub fn try_from_hsl(hue: f64, saturation: f64, lightness: f64) -> ColorResult<Self> {
        RgbValue::try_from_hsl(hue, saturation, lightness).map(Color::Rgb)
    }

    /// `hue` in degrees `0..=360`, `saturation` and `value` in percent `0..=100`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::HueOutOfRange`] or [`ColorError::PercentOutOfRange`].
    pub fn try_from_hsv(hue: f64, saturation: f64, value: f64) -> ColorResult<Self> {
        RgbValue::try_from_hsv(hue, saturation, value).map(Color::Rgb)
    }

    /// Strict counterpart of [`crate::convert::hex_to_rgb()`], which falls back to
    /// white instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHexColor`] if `hex` is not an ASCII punctuation sigil
    /// followed by exactly six hex digits.
    pub fn try_from_hex(hex: &str) -> ColorResult<Self> {
        RgbValue::try_from_hex_color(hex).map(Color::Rgb)
    }

    /// # Errors
    ///
    /// Returns [`ColorError::UnknownPaletteName`] if `name` isn't one of black, red,
    /// green, yellow, blue, magenta, cyan, white.
    pub fn try_from_palette_name(name: &str) -> ColorResult<Self> {
        BasicColor::try_from_name(name).map(Color::Basic)
    }

    /// # Errors
    ///
    /// Returns [`ColorError::PaletteIndexOutOfRange`] if `index` is not in `0..=7`.
    pub fn try_from_basic_index(index: i64) -> ColorResult<Self> {
        BasicColor::try_from_index(index).map(Color::Basic)
    }

    /// # Errors
    ///
    /// Returns [`ColorError::PaletteIndexOutOfRange`] if `index` is not in `0..=255`.
    pub fn try_from_ansi256(index: i64) -> ColorResult<Self> {
        AnsiValue::try_new(index).map(Color::Ansi256)
    }

    /// Random truecolor, using a fresh seed from the thread local generator.
    #[must_use]
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self::random_with_seed(rng.random())
    }

    /// Deterministic counterpart of [`Color::random()`]: the same `seed` always gives
    /// the same color. One [`StdRng`] is seeded with `seed` and the red, green and blue
    /// channels are its first three draws, in that order.
    #[must_use]
    pub fn random_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let (red, green, blue) = (rng.random(), rng.random(), rng.random());
        Color::rgb(red, green, blue)
    }

    /// The SGR fragment that selects this color for `kind`.
    #[must_use]
    pub fn render(&self, kind: ColorKind) -> String {
        SgrCode::from_color(kind, *self).to_string()
    }

    #[must_use]
    pub fn fg(&self) -> String { self.render(ColorKind::Foreground) }

    #[must_use]
    pub fn bg(&self) -> String { self.render(ColorKind::Background) }
}

impl TransformColor for Color {
    fn as_rgb(&self) -> RgbValue {
        match self {
            Color::Rgb(rgb_value) => *rgb_value,
            Color::Basic(basic) => basic.as_rgb(),
            Color::Ansi256(ansi_value) => ansi_value.as_rgb(),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Color::Rgb(RgbValue { red, green, blue }) => {
                write!(f, "rgb({red}, {green}, {blue})")
            }
            Color::Basic(basic) => write!(f, "{basic}"),
            Color::Ansi256(AnsiValue { index }) => write!(f, "ansi256({index})"),
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Accepts a hex color (`#ff5733`) or a palette name (`red`).
    fn from_str(input: &str) -> ColorResult<Self> {
        let input = input.trim();
        match input.chars().next() {
            Some(sigil) if sigil.is_ascii_punctuation() => Color::try_from_hex(input),
            _ => Color::try_from_palette_name(input),
        }
    }
}
