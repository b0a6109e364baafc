// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) escape fragments.
//!
//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>

use std::fmt::{Display, Formatter, Result};

use const_format::concatcp;

use crate::{AnsiValue, Color, RgbValue};

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";

/// Clears every active attribute. Not tied to any [`crate::Style`]; append it yourself
/// at the end of a styled span.
pub const RESET: &str = concatcp!(CSI, "0", SGR);

/// Whether a color fragment selects the text color or the cell background. The only
/// difference in the rendered fragment is the leading selector digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKind {
    Foreground,
    Background,
}

impl ColorKind {
    #[must_use]
    pub const fn selector(self) -> u8 {
        match self {
            ColorKind::Foreground => 3,
            ColorKind::Background => 4,
        }
    }
}

/// One escape fragment. [`Display`] renders the exact byte sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SgrCode {
    Reset,
    Bold,
    Dim,
    Normal,
    Italic,
    Underline,
    Invert,
    Hidden,
    Strikethrough,
    Overline,
    Foreground(Color),
    Background(Color),
}

impl SgrCode {
    #[must_use]
    pub const fn from_color(kind: ColorKind, color: Color) -> Self {
        match kind {
            ColorKind::Foreground => SgrCode::Foreground(color),
            ColorKind::Background => SgrCode::Background(color),
        }
    }
}

/// Writes `CSI <selector><suffix> SGR`, where the suffix depends on how `color` is
/// backed.
fn fmt_color(kind: ColorKind, color: Color, f: &mut Formatter<'_>) -> Result {
    let selector = kind.selector();
    match color {
        Color::Basic(basic) => write!(f, "{CSI}{selector}{}{SGR}", basic.index()),
        Color::Ansi256(AnsiValue { index }) => {
            write!(f, "{CSI}{selector}8;5;{index}{SGR}")
        }
        Color::Rgb(RgbValue { red, green, blue }) => {
            write!(f, "{CSI}{selector}8;2;{red};{green};{blue}{SGR}")
        }
    }
}

impl Display for SgrCode {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            SgrCode::Reset             => write!(f, "{RESET}"),
            SgrCode::Bold              => write!(f, "{CSI}1{SGR}"),
            SgrCode::Dim               => write!(f, "{CSI}2{SGR}"),
            SgrCode::Normal            => write!(f, "{CSI}22{SGR}"),
            SgrCode::Italic            => write!(f, "{CSI}3{SGR}"),
            SgrCode::Underline         => write!(f, "{CSI}4{SGR}"),
            SgrCode::Invert            => write!(f, "{CSI}7{SGR}"),
            SgrCode::Hidden            => write!(f, "{CSI}8{SGR}"),
            SgrCode::Strikethrough     => write!(f, "{CSI}9{SGR}"),
            SgrCode::Overline          => write!(f, "{CSI}53{SGR}"),
            SgrCode::Foreground(color) => fmt_color(ColorKind::Foreground, color, f),
            SgrCode::Background(color) => fmt_color(ColorKind::Background, color, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::BasicColor;

    #[test_case(SgrCode::Reset, "\x1b[0m" ; "reset")]
    #[test_case(SgrCode::Bold, "\x1b[1m" ; "bold")]
    #[test_case(SgrCode::Dim, "\x1b[2m" ; "dim")]
    #[test_case(SgrCode::Normal, "\x1b[22m" ; "normal")]
    #[test_case(SgrCode::Italic, "\x1b[3m" ; "italic")]
    #[test_case(SgrCode::Underline, "\x1b[4m" ; "underline")]
    #[test_case(SgrCode::Invert, "\x1b[7m" ; "invert")]
    #[test_case(SgrCode::Hidden, "\x1b[8m" ; "hidden")]
    #[test_case(SgrCode::Strikethrough, "\x1b[9m" ; "strikethrough")]
    #[test_case(SgrCode::Overline, "\x1b[53m" ; "overline")]
    fn attribute(sgr_code: SgrCode, expected: &str) {
        assert_eq!(sgr_code.to_string(), expected);
    }

    #[test]
    fn reset_const_matches_variant() {
        assert_eq!(RESET, "\x1b[0m");
        assert_eq!(SgrCode::Reset.to_string(), RESET);
    }

    #[test]
    fn fg_color_basic() {
        let sgr_code = SgrCode::Foreground(Color::Basic(BasicColor::Green));
        assert_eq!(sgr_code.to_string(), "\x1b[32m");
    }

    #[test]
    fn bg_color_basic() {
        let sgr_code = SgrCode::Background(Color::Basic(BasicColor::Green));
        assert_eq!(sgr_code.to_string(), "\x1b[42m");
    }

    #[test]
    fn fg_color_ansi256() {
        let sgr_code = SgrCode::Foreground(Color::Ansi256(AnsiValue::new(150)));
        assert_eq!(sgr_code.to_string(), "\x1b[38;5;150m");
    }

    #[test]
    fn bg_color_ansi256() {
        let sgr_code = SgrCode::Background(Color::Ansi256(AnsiValue::new(150)));
        assert_eq!(sgr_code.to_string(), "\x1b[48;5;150m");
    }

    #[test]
    fn fg_color_rgb() {
        let sgr_code = SgrCode::Foreground(Color::rgb(175, 215, 135));
        assert_eq!(sgr_code.to_string(), "\x1b[38;2;175;215;135m");
    }

    #[test]
    fn bg_color_rgb() {
        let sgr_code = SgrCode::Background(Color::rgb(175, 215, 135));
        assert_eq!(sgr_code.to_string(), "\x1b[48;2;175;215;135m");
    }

    #[test]
    fn from_color_picks_selector() {
        let color = Color::rgb(1, 2, 3);
        assert_eq!(
            SgrCode::from_color(ColorKind::Foreground, color),
            SgrCode::Foreground(color)
        );
        assert_eq!(
            SgrCode::from_color(ColorKind::Background, color),
            SgrCode::Background(color)
        );
    }
}
