// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run with `RUST_LOG=debug cargo run --example demo` to also see the log events for
//! rejected input.

use ansi_style::{BasicColor, Color, Style, convert::hex_to_rgb};
use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Print a string w/ ANSI escape fragments.
    {
        let style = Style::new()
            .bold()
            .italic()
            .underline()
            .fg(Color::rgb(50, 50, 50))
            .bg(Color::rgb(100, 200, 1));
        println!(
            "{style}Print a formatted (bold, italic, underline) string.{}",
            Style::RESET
        );

        let style = Style::new()
            .light()
            .strikethrough()
            .overline()
            .fg(Color::try_from_hex("#c83232")?)
            .bg(Color::try_from_hsv(60.0, 99.5, 78.4)?);
        println!("{}", style.paint("Light, overline and strikethrough line."));
    }

    // The 4-bit palette.
    {
        for basic in BasicColor::iter() {
            let swatch = Style::new().invert().fg(basic).paint("  ");
            print!("{swatch} {basic:<8}");
        }
        println!();
    }

    // A hue sweep through HSL.
    {
        let mut acc = String::new();
        for step in 0..36 {
            let hue = f64::from(step) * 10.0;
            let style = Style::new().bg(Color::try_from_hsl(hue, 80.0, 50.0)?);
            acc.push_str(&style.paint(" ").to_string());
        }
        println!("{acc}");
    }

    // Random colors, one unseeded and one that is the same on every run.
    {
        for color in [Color::random(), Color::random_with_seed(42)] {
            println!("{}", Style::new().bold().fg(color).paint(&color.to_string()));
        }
    }

    // Lenient vs strict hex handling.
    {
        println!("hex_to_rgb(\"oops\") = {:?}", hex_to_rgb("oops"));
        match Color::try_from_hex("oops") {
            Ok(color) => println!("unexpected: {color}"),
            Err(error) => println!("{:?}", miette::Report::new(error)),
        }
    }

    Ok(())
}
