// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::RgbValue;

pub trait TransformColor {
    /// Returns a [`RgbValue`] representation of the `self` color. Palette colors map to
    /// their xterm reference values.
    fn as_rgb(&self) -> RgbValue;
}
