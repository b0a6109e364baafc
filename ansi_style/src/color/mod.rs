// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color types and the factories that validate them.
//!
//! This module provides:
//! - **Primitive types**: [`RgbValue`] (24-bit truecolor), [`AnsiValue`] (256-color
//!   palette) and [`BasicColor`] (4-bit named palette)
//! - **Unified type**: [`Color`], a tagged union of the three primitives with one set of
//!   validating factories and a render method for foreground or background use
//! - **Abstraction**: [`TransformColor`] trait to read any color back as RGB
//!
//! All of these are immutable `Copy` values, so they can be shared across threads
//! freely.
//!
//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

// Attach.
mod ansi_palette;
mod ansi_value;
mod basic_color;
mod rgb_value;
mod transform_color;
mod unified_color;
mod validate;

// Re-export.
pub use ansi_palette::*;
pub use ansi_value::*;
pub use basic_color::*;
pub use rgb_value::*;
pub use transform_color::*;
pub use unified_color::*;
