// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Domain validation errors raised by the [`crate::Color`] factories.
//!
//! Every factory validates its input before a color exists, so an `Err` here means no
//! partially valid color was ever constructed.

/// Result type returned by every fallible color factory.
pub type ColorResult<T> = Result<T, ColorError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error, miette::Diagnostic)]
pub enum ColorError {
    #[error("{channel} channel must be in 0..=255, got {value}")]
    #[diagnostic(code(ansi_style::color::channel_out_of_range))]
    ChannelOutOfRange { channel: RgbChannel, value: i64 },

    #[error("hue must be in 0..=360 degrees, got {value}")]
    #[diagnostic(code(ansi_style::color::hue_out_of_range))]
    HueOutOfRange { value: f64 },

    #[error("{component} must be in 0..=100 percent, got {value}")]
    #[diagnostic(code(ansi_style::color::percent_out_of_range))]
    PercentOutOfRange {
        component: PercentComponent,
        value: f64,
    },

    #[error("invalid hex color '{input}'")]
    #[diagnostic(
        code(ansi_style::color::invalid_hex_color),
        help(
            "expected one ASCII punctuation sigil (eg: `#`, `$`, `@`) followed by \
             exactly six hex digits, eg: `#ff5733`"
        )
    )]
    InvalidHexColor { input: String },

    #[error("{palette} index must be in 0..={max}, got {value}", max = .palette.max_index())]
    #[diagnostic(code(ansi_style::color::palette_index_out_of_range))]
    PaletteIndexOutOfRange { palette: PaletteKind, value: i64 },

    #[error("unknown palette color name '{name}'")]
    #[diagnostic(
        code(ansi_style::color::unknown_palette_name),
        help("use one of: black, red, green, yellow, blue, magenta, cyan, white")
    )]
    UnknownPaletteName { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum RgbChannel {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PercentComponent {
    Saturation,
    Lightness,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum PaletteKind {
    #[strum(to_string = "4-bit palette")]
    Basic,
    #[strum(to_string = "256-color palette")]
    Ansi256,
}

impl PaletteKind {
    #[must_use]
    pub const fn max_index(self) -> u8 {
        match self {
            PaletteKind::Basic => 7,
            PaletteKind::Ansi256 => 255,
        }
    }
}
