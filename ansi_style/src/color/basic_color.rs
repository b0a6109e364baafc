// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The eight named colors of the 4-bit ANSI palette.

use std::str::FromStr;

use strum_macros::{Display, EnumCount, EnumIter, EnumString, FromRepr};

use super::{RgbValue, TransformColor, ansi256_to_rgb, validate};
use crate::{ColorError, ColorResult, PaletteKind};

/// Named 4-bit palette color. The discriminant is the digit that follows the
/// foreground (`3`) or background (`4`) selector in the SGR sequence.
///
/// Names parse case insensitively:
///
/// ```rust
/// use ansi_style::BasicColor;
///
/// assert_eq!("Magenta".parse::<BasicColor>(), Ok(BasicColor::Magenta));
/// assert_eq!(BasicColor::Cyan.index(), 6);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[repr(u8)]
pub enum BasicColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl BasicColor {
    #[must_use]
    pub const fn index(self) -> u8 { self as u8 }

    /// # Errors
    ///
    /// Returns [`ColorError::PaletteIndexOutOfRange`] if `index` is not in `0..=7`.
    pub fn try_from_index(index: i64) -> ColorResult<Self> {
        let index = validate::palette_index(PaletteKind::Basic, index)?;
        Self::from_repr(index).ok_or(ColorError::PaletteIndexOutOfRange {
            palette: PaletteKind::Basic,
            value: i64::from(index),
        })
    }

    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnknownPaletteName`] if `name` is not one of the eight
    /// palette names.
    pub fn try_from_name(name: &str) -> ColorResult<Self> {
        Self::from_str(name.trim()).map_err(|_| {
            tracing::debug!(message = "Rejected palette name", name);
            ColorError::UnknownPaletteName {
                name: name.to_string(),
            }
        })
    }
}

impl TransformColor for BasicColor {
    fn as_rgb(&self) -> RgbValue { ansi256_to_rgb(self.index()) }
}
