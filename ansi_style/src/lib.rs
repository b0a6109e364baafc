// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Why?
//!
//! Styling terminal output comes down to emitting the right SGR escape sequences in the
//! right order. This crate does the color math (HSL, HSV, hex and palette indices to
//! RGB), validates colors up front, and builds ordered chains of escape fragments that
//! you wrap around your text. There is no I/O here: printing, terminal capability
//! detection and stripping colors for non TTY output are up to the caller.
//!
//! # Layers
//!
//! 1. [`convert`]: total, low level functions like [`convert::hsl_to_rgb()`],
//!    [`convert::hsv_to_rgb()`], the lenient [`convert::hex_to_rgb()`] and the seeded
//!    [`convert::random_in_range()`].
//! 2. [`Color`]: one immutable type backed by [`RgbValue`], [`BasicColor`] or
//!    [`AnsiValue`]. Its `try_from_*` factories fail with a [`ColorError`] instead of
//!    building an invalid color. [`Color::render()`] produces the foreground or
//!    background fragment.
//! 3. [`Style`]: an append-only chain of fragments with fluent methods.
//!
//! # Example usage:
//!
//! ```rust
//! use ansi_style::{Color, Style};
//!
//! let warning = Style::new()
//!     .bold()
//!     .fg(Color::try_from_hsl(39.0, 100.0, 50.0).unwrap())
//!     .bg(Color::try_from_palette_name("black").unwrap());
//!
//! let line = format!("{warning}careful{}", Style::RESET);
//! assert_eq!(
//!     line,
//!     "\x1b[1m\x1b[38;2;255;166;0m\x1b[40mcareful\x1b[0m"
//! );
//! ```
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber. Rejected factory
//! input is logged at `debug` level. The two paths that don't return an error,
//! [`convert::hex_to_rgb()`] falling back to white and [`convert::random_in_range()`]
//! returning its sentinel, are logged at `warn` level.
//!
//! # Features
//!
//! - `serde`: derive `Serialize` and `Deserialize` for the color types.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod color;
pub mod convert;
pub mod error;
pub mod hex_color_parser;
pub mod sgr_code;
pub mod style;

// Re-export.
pub use color::*;
pub use error::*;
pub use sgr_code::*;
pub use style::*;
