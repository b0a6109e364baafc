// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbValue`]
//! struct. The hex color string is a single sigil character followed by six hex digits,
//! eg: `#FF0000` for red.

use nom::{IResult,
          Parser,
          bytes::complete::take_while_m_n,
          character::complete::satisfy,
          combinator::{all_consuming, map_res}};

use crate::RgbValue;

/// Parse function that generates an [`RgbValue`] struct from a hex color string. Any
/// input that follows the six hex digits is returned as the remainder.
///
/// # Errors
///
/// Returns a [`nom`] error if the input does not start with a sigil followed by six hex
/// digits.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    let (input, (_sigil, red, green, blue)) = (
        satisfy(helper_fns::match_is_sigil),
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
    )
        .parse(input)?;
    Ok((input, RgbValue { red, green, blue }))
}

/// Same as [`parse_hex_color`] but nothing may follow the six hex digits.
///
/// # Errors
///
/// Returns a [`nom`] error if the input is not exactly a sigil plus six hex digits.
pub fn parse_hex_color_exact(input: &str) -> IResult<&str, RgbValue> {
    all_consuming(parse_hex_color).parse(input)
}

/// Helper functions to match and parse hex digits. These are not [Parser]
/// implementations.
mod helper_fns {
    use super::{IResult, Parser, map_res, take_while_m_n};

    /// This function is used by [`map_res`] and it returns a [Result], not [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// This function is used by [`take_while_m_n`] and as long as it returns `true`
    /// items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    /// The leading sigil is any ASCII punctuation character, `#` being the usual one.
    pub fn match_is_sigil(c: char) -> bool { c.is_ascii_punctuation() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(2, 2, match_is_hex_digit),
            parse_str_to_hex_num,
        )
        .parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn parse_valid_color() {
        let mut input = String::new();
        input.push_str("#2F14DF");
        input.push('🔅');

        let result = parse_hex_color(&input);

        let Ok((remainder, color)) = result else {
            panic!();
        };
        assert_eq!(remainder, "🔅");
        assert_eq!(color, RgbValue::from_u8(47, 20, 223));
    }

    #[test]
    fn parse_other_sigil() {
        let Ok((_, color)) = parse_hex_color_exact("$ff5733") else {
            panic!();
        };
        assert_eq!(color, RgbValue::from_u8(255, 87, 51));
    }

    #[test_case("🔅#2F14DF" ; "leading junk")]
    #[test_case("2F14DF" ; "no sigil")]
    #[test_case("#2F14D" ; "five digits")]
    #[test_case("#2F14DG" ; "non hex digit")]
    #[test_case("#2F14DF0" ; "seven digits")]
    #[test_case("" ; "empty")]
    #[test_case("é123456" ; "non ascii sigil")]
    #[test_case(" 123456" ; "whitespace sigil")]
    fn parse_invalid_color_exact(input: &str) {
        assert!(parse_hex_color_exact(input).is_err());
    }
}
