// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Low level color space math.
//!
//! These functions do not validate their input the way the [`crate::Color`] factories
//! do. They are total: out of range floats are clamped when converted to bytes,
//! [`hex_to_rgb()`] falls back to white, and [`random_in_range()`] returns a sentinel.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/HSL_and_HSV#HSL_to_RGB>
//! - <https://en.wikipedia.org/wiki/HSL_and_HSV#HSV_to_RGB>

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::hex_color_parser::parse_hex_color_exact;

/// Returned by [`random_in_range()`] when its preconditions are violated. Legal calls
/// only ever produce non-negative values, so this can't be mistaken for a result.
pub const RANDOM_IN_RANGE_FAILURE: i64 = -1;

/// Color used by [`hex_to_rgb()`] when the input can't be parsed.
pub const HEX_FALLBACK_RGB: (u8, u8, u8) = (255, 255, 255);

/// Convert HSL to RGB. `hue` is in degrees `[0, 360)`, `saturation` and `lightness` are
/// percentages `[0, 100]`.
#[must_use]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let s = saturation / 100.0;
    let l = lightness / 100.0;
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let offset = l - chroma / 2.0;
    sector_to_rgb(hue, chroma, offset)
}

/// Convert HSV to RGB. `hue` is in degrees `[0, 360)`, `saturation` and `value` are
/// percentages `[0, 100]`.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (u8, u8, u8) {
    let s = saturation / 100.0;
    let v = value / 100.0;
    let chroma = v * s;
    let offset = v - chroma;
    sector_to_rgb(hue, chroma, offset)
}

/// Parse `#RRGGBB` (any single punctuation sigil works) into a byte triple.
///
/// This is the lenient primitive: malformed input yields [`HEX_FALLBACK_RGB`] instead
/// of an error. Use [`crate::Color::try_from_hex()`] for strict validation.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    match parse_hex_color_exact(hex) {
        Ok((_, rgb)) => (rgb.red, rgb.green, rgb.blue),
        Err(_) => {
            tracing::warn!(
                message = "Malformed hex color, falling back to white",
                input = hex
            );
            HEX_FALLBACK_RGB
        }
    }
}

/// Returns an integer in `[min, max]` drawn from a generator seeded with `seed`. The
/// same arguments always produce the same result within a build of this crate.
///
/// Preconditions: `0 <= min <= max` and `seed >= 1`. When any of them is violated this
/// returns [`RANDOM_IN_RANGE_FAILURE`] rather than panicking, so callers must check for
/// it before using the result as a color channel.
#[must_use]
pub fn random_in_range(min: i64, max: i64, seed: u64) -> i64 {
    if min < 0 || max < 0 || min > max || seed < 1 {
        tracing::warn!(
            message = "random_in_range called with invalid arguments",
            min,
            max,
            seed
        );
        return RANDOM_IN_RANGE_FAILURE;
    }

    if min == max {
        return min;
    }

    StdRng::seed_from_u64(seed).random_range(min..=max)
}

/// Shared tail of the HSL and HSV algorithms: pick the pre-offset triple for the 60°
/// hue sector, then add `offset` to every channel.
fn sector_to_rgb(hue: f64, chroma: f64, offset: f64) -> (u8, u8, u8) {
    let hue = hue.rem_euclid(360.0);
    let hue_prime = hue / 60.0;
    let x = chroma * (1.0 - (hue_prime.rem_euclid(2.0) - 1.0).abs());

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let sector = hue_prime.floor() as u8;

    #[rustfmt::skip]
    let (r, g, b) = match sector {
        0 => (chroma, x,      0.0   ),
        1 => (x,      chroma, 0.0   ),
        2 => (0.0,    chroma, x     ),
        3 => (0.0,    x,      chroma),
        4 => (x,      0.0,    chroma),
        _ => (chroma, 0.0,    x     ),
    };

    (
        unit_to_byte(r + offset),
        unit_to_byte(g + offset),
        unit_to_byte(b + offset),
    )
}

/// Scale a `0.0..=1.0` value to a byte, rounding to nearest and clamping.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_byte(value: f64) -> u8 { (value * 255.0).round().clamp(0.0, 255.0) as u8 }
