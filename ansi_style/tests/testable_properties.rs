// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end checks through the public API: conversion functions, then colors, then
//! style chains.

use ansi_style::{AnsiValue, BasicColor, Color, ColorError, ColorKind, RgbValue, Style,
                 TransformColor,
                 convert::{RANDOM_IN_RANGE_FAILURE, hex_to_rgb, hsl_to_rgb, hsv_to_rgb,
                           random_in_range}};
use pretty_assertions::assert_eq;

#[test]
fn test_primary_hues() {
    assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), (255, 0, 0));
    assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), (0, 255, 0));
    assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), (0, 0, 255));
    assert_eq!(hsv_to_rgb(0.0, 100.0, 100.0), (255, 0, 0));
}

#[test]
fn test_hex_layers_keep_their_contracts() {
    // Lenient primitive.
    assert_eq!(hex_to_rgb("#ff5733"), (255, 87, 51));
    assert_eq!(hex_to_rgb("nope"), (255, 255, 255));

    // Strict factory.
    let color = Color::try_from_hex("#ff5733").unwrap();
    assert_eq!(color.as_rgb(), RgbValue::from_u8(255, 87, 51));
    assert!(matches!(
        Color::try_from_hex("nope"),
        Err(ColorError::InvalidHexColor { .. })
    ));
}

#[test]
fn test_channel_bounds() {
    for bad in [-1, 256] {
        assert!(Color::try_from_rgb(bad, 0, 0).is_err());
        assert!(Color::try_from_rgb(0, bad, 0).is_err());
        assert!(Color::try_from_rgb(0, 0, bad).is_err());
    }
    for good in [0, 255] {
        assert!(Color::try_from_rgb(good, good, good).is_ok());
    }
}

#[test]
fn test_random_in_range_contract() {
    assert_eq!(random_in_range(5, 5, 1), 5);
    assert_eq!(random_in_range(10, 5, 1), RANDOM_IN_RANGE_FAILURE);
    assert!(RANDOM_IN_RANGE_FAILURE < 0);
}

#[test]
fn test_error_message_names_constraint() {
    let error = Color::try_from_hsl(0.0, 0.0, 120.0).unwrap_err();
    assert_eq!(error.to_string(), "lightness must be in 0..=100 percent, got 120");
}

#[test]
fn test_style_chain_and_copy() {
    let original = Style::new().bold().underline();
    assert_eq!(original.to_string(), "\x1b[1m\x1b[4m");

    let copy = Style::from(&original).italic();
    assert_eq!(copy.to_string(), format!("{original}\x1b[3m"));
    assert_eq!(original.to_string(), "\x1b[1m\x1b[4m");
}

#[test]
fn test_reset_constant() {
    assert_eq!(Style::RESET, "\x1b[0m");
    assert_eq!(ansi_style::RESET, Style::RESET);
}

#[test]
fn test_colors_flow_into_style() {
    let style = Style::new()
        .fg(Color::try_from_palette_name("yellow").unwrap())
        .bg(Color::try_from_ansi256(17).unwrap())
        .color(Color::try_from_hsv(0.0, 0.0, 100.0).unwrap());
    assert_eq!(
        style.render(),
        "\x1b[33m\x1b[48;5;17m\x1b[38;2;255;255;255m"
    );

    let styled = format!("{}text{}", style, Style::RESET);
    assert!(styled.ends_with("text\x1b[0m"));
}

#[test]
fn test_render_differs_only_in_selector() {
    for color in [
        Color::Basic(BasicColor::Magenta),
        Color::Ansi256(AnsiValue::new(99)),
        Color::rgb(9, 8, 7),
    ] {
        let fg = color.render(ColorKind::Foreground);
        let bg = color.render(ColorKind::Background);
        assert_eq!(&fg[..2], "\x1b[");
        assert_eq!(&fg[2..3], "3");
        assert_eq!(&bg[2..3], "4");
        assert_eq!(&fg[3..], &bg[3..]);
    }
}

#[test]
fn test_colors_are_shareable_across_threads() {
    let color = Color::try_from_hex("#123456").unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || color.fg()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "\x1b[38;2;18;52;86m");
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip() {
    let color = Color::Basic(BasicColor::Cyan);
    let json = serde_json::to_string(&color).unwrap();
    assert_eq!(json, r#"{"Basic":"cyan"}"#);
    let back: Color = serde_json::from_str(&json).unwrap();
    assert_eq!(back, color);
}
