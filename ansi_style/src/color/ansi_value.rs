// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI 256-color palette representation.
//!
//! This provides a good balance between color precision and terminal compatibility.
//! Each index (0-255) maps to a specific color in the palette.

use super::{RgbValue, TransformColor, ansi256_to_rgb, validate};
use crate::{ColorResult, PaletteKind};

/// Represents a color in the ANSI 256-color palette format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnsiValue {
    pub index: u8,
}

impl From<u8> for AnsiValue {
    fn from(index: u8) -> Self { Self { index } }
}

impl TransformColor for AnsiValue {
    fn as_rgb(&self) -> RgbValue { ansi256_to_rgb(self.index) }
}

impl AnsiValue {
    /// Create a new ANSI color value.
    #[must_use]
    pub const fn new(index: u8) -> Self { Self { index } }

    /// # Errors
    ///
    /// Returns [`crate::ColorError::PaletteIndexOutOfRange`] if `index` is not in
    /// `0..=255`.
    pub fn try_new(index: i64) -> ColorResult<Self> {
        validate::palette_index(PaletteKind::Ansi256, index).map(Self::new)
    }

    /// Check if this is one of the 16 system colors (indices 0-15).
    #[must_use]
    pub const fn is_basic(&self) -> bool { self.index < 16 }
}
