// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation.
//!
//! This is the most precise color representation supported by modern terminals.

use super::{TransformColor, validate};
use crate::{ColorError, ColorResult, PercentComponent, RgbChannel,
            convert::{hsl_to_rgb, hsv_to_rgb},
            hex_color_parser::parse_hex_color_exact};

/// Represents a color in RGB (24-bit truecolor) format. Every field is a byte, so an
/// instance can't hold an out of range channel.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<RgbValue> for (u8, u8, u8) {
    fn from(value: RgbValue) -> Self { (value.red, value.green, value.blue) }
}

impl From<u32> for RgbValue {
    /// Takes the low 24 bits as `0xRRGGBB`.
    fn from(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self { red, green, blue }
    }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// # Errors
    ///
    /// Returns [`ColorError::ChannelOutOfRange`] naming the first channel that is not in
    /// `0..=255`.
    pub fn try_from_channels(red: i64, green: i64, blue: i64) -> ColorResult<Self> {
        Ok(Self {
            red: validate::channel(RgbChannel::Red, red)?,
            green: validate::channel(RgbChannel::Green, green)?,
            blue: validate::channel(RgbChannel::Blue, blue)?,
        })
    }

    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHexColor`] if the input is not a sigil followed by
    /// exactly six hex digits.
    pub fn try_from_hex_color(input: &str) -> ColorResult<Self> {
        match parse_hex_color_exact(input) {
            Ok((_, color)) => Ok(color),
            Err(_) => {
                tracing::debug!(message = "Rejected hex color", input);
                Err(ColorError::InvalidHexColor {
                    input: input.to_string(),
                })
            }
        }
    }

    /// `hue` in degrees `0..=360`, `saturation` and `lightness` in percent `0..=100`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::HueOutOfRange`] or [`ColorError::PercentOutOfRange`].
    pub fn try_from_hsl(hue: f64, saturation: f64, lightness: f64) -> ColorResult<Self> {
        let hue = validate::hue(hue)?;
        let saturation = validate::percent(PercentComponent::Saturation, saturation)?;
        let lightness = validate::percent(PercentComponent::Lightness, lightness)?;
        Ok(hsl_to_rgb(hue, saturation, lightness).into())
    }

    /// `hue` in degrees `0..=360`, `saturation` and `value` in percent `0..=100`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::HueOutOfRange`] or [`ColorError::PercentOutOfRange`].
    pub fn try_from_hsv(hue: f64, saturation: f64, value: f64) -> ColorResult<Self> {
        let hue = validate::hue(hue)?;
        let saturation = validate::percent(PercentComponent::Saturation, saturation)?;
        let value = validate::percent(PercentComponent::Value, value)?;
        Ok(hsv_to_rgb(hue, saturation, value).into())
    }
}

impl TransformColor for RgbValue {
    fn as_rgb(&self) -> RgbValue { *self }
}
