// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Range checks shared by the color factories. Each one logs the rejection at debug
//! level and returns the matching [`ColorError`] variant.

use crate::{ColorError, ColorResult, PaletteKind, PercentComponent, RgbChannel};

pub const HUE_MAX: f64 = 360.0;
pub const PERCENT_MAX: f64 = 100.0;

pub fn channel(channel: RgbChannel, value: i64) -> ColorResult<u8> {
    u8::try_from(value).map_err(|_| {
        tracing::debug!(message = "Rejected RGB channel", %channel, value);
        ColorError::ChannelOutOfRange { channel, value }
    })
}

/// NaN and infinities fail the range check too.
pub fn hue(value: f64) -> ColorResult<f64> {
    if (0.0..=HUE_MAX).contains(&value) {
        Ok(value)
    } else {
        tracing::debug!(message = "Rejected hue", value);
        Err(ColorError::HueOutOfRange { value })
    }
}

pub fn percent(component: PercentComponent, value: f64) -> ColorResult<f64> {
    if (0.0..=PERCENT_MAX).contains(&value) {
        Ok(value)
    } else {
        tracing::debug!(message = "Rejected percentage", %component, value);
        Err(ColorError::PercentOutOfRange { component, value })
    }
}

pub fn palette_index(palette: PaletteKind, value: i64) -> ColorResult<u8> {
    match u8::try_from(value) {
        Ok(index) if index <= palette.max_index() => Ok(index),
        _ => {
            tracing::debug!(message = "Rejected palette index", %palette, value);
            Err(ColorError::PaletteIndexOutOfRange { palette, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, true)]
    #[test_case(255, true)]
    #[test_case(-1, false)]
    #[test_case(256, false)]
    fn test_channel(value: i64, is_ok: bool) {
        assert_eq!(channel(RgbChannel::Red, value).is_ok(), is_ok);
    }

    #[test_case(0.0, true)]
    #[test_case(360.0, true)]
    #[test_case(-0.1, false)]
    #[test_case(360.1, false)]
    #[test_case(f64::NAN, false)]
    #[test_case(f64::INFINITY, false)]
    fn test_hue(value: f64, is_ok: bool) { assert_eq!(hue(value).is_ok(), is_ok); }

    #[test_case(0.0, true)]
    #[test_case(100.0, true)]
    #[test_case(-1.0, false)]
    #[test_case(100.01, false)]
    #[test_case(f64::NAN, false)]
    fn test_percent(value: f64, is_ok: bool) {
        assert_eq!(percent(PercentComponent::Value, value).is_ok(), is_ok);
    }

    #[test_case(PaletteKind::Basic, 7, true)]
    #[test_case(PaletteKind::Basic, 8, false)]
    #[test_case(PaletteKind::Ansi256, 255, true)]
    #[test_case(PaletteKind::Ansi256, 256, false)]
    #[test_case(PaletteKind::Ansi256, -1, false)]
    fn test_palette_index(palette: PaletteKind, value: i64, is_ok: bool) {
        assert_eq!(palette_index(palette, value).is_ok(), is_ok);
    }
}
