// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;
use smallvec::SmallVec;

use crate::{Color, SgrCode, sgr_code};

/// An ordered, append-only chain of [`SgrCode`] fragments.
/// - Each chaining method appends exactly one fragment, in call order. Order matters:
///   terminals apply SGR codes in sequence, so a later color overrides an earlier one.
/// - Rendering (via [`Display`], [`Style::render()`] or [`Style::to_small_str()`])
///   concatenates the fragments with no separator.
/// - The chain never appends [`Style::RESET`] by itself. Use [`Style::paint()`] if you
///   want the text and the reset bundled for you.
/// - [`Clone`] is a deep copy: mutating the copy does not touch the original.
///
/// A `Style` is a plain owned value with no internal locking. To share one between
/// threads while mutating it, wrap it in a lock of your choice.
///
/// # Example usage:
///
/// ```rust
/// use ansi_style::{BasicColor, Color, Style};
///
/// let header = Style::new().bold().underline();
/// assert_eq!(header.to_string(), "\x1b[1m\x1b[4m");
///
/// // Copy then extend. The original is unchanged.
/// let loud_header = Style::from(&header).italic().fg(BasicColor::Red);
/// assert_eq!(loud_header.to_string(), "\x1b[1m\x1b[4m\x1b[3m\x1b[31m");
/// assert_eq!(header.to_string(), "\x1b[1m\x1b[4m");
///
/// let line = format!("{}Hello{}", loud_header, Style::RESET);
/// assert_eq!(line, "\x1b[1m\x1b[4m\x1b[3m\x1b[31mHello\x1b[0m");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Style {
    fragments: sizing::InlineVecSgrCodes,
}

pub mod sizing {
    use super::{SgrCode, SmallVec};

    /// Typical chains are a few attributes plus a foreground and a background color.
    pub const MAX_STYLE_FRAGMENTS_INLINE: usize = 8;
    pub type InlineVecSgrCodes = SmallVec<[SgrCode; MAX_STYLE_FRAGMENTS_INLINE]>;

    // PERF: If you make this number too large, eg: more than 64, then rendering into a
    // stack buffer stops paying off.
    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 32;
    pub type InlineStringStyle = smallstr::SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;
}

impl From<&Style> for Style {
    fn from(other: &Style) -> Self { other.clone() }
}

impl Style {
    /// Clears all active attributes. Same bytes as [`SgrCode::Reset`].
    pub const RESET: &'static str = sgr_code::RESET;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    fn push(mut self, sgr_code: SgrCode) -> Self {
        self.fragments.push(sgr_code);
        self
    }

    /// Faint / decreased intensity.
    #[must_use]
    pub fn light(self) -> Self { self.push(SgrCode::Dim) }

    /// Normal intensity; cancels [`Style::bold()`] and [`Style::light()`].
    #[must_use]
    pub fn normal(self) -> Self { self.push(SgrCode::Normal) }

    #[must_use]
    pub fn bold(self) -> Self { self.push(SgrCode::Bold) }

    #[must_use]
    pub fn italic(self) -> Self { self.push(SgrCode::Italic) }

    #[must_use]
    pub fn underline(self) -> Self { self.push(SgrCode::Underline) }

    #[must_use]
    pub fn overline(self) -> Self { self.push(SgrCode::Overline) }

    #[must_use]
    pub fn strikethrough(self) -> Self { self.push(SgrCode::Strikethrough) }

    #[must_use]
    pub fn hide(self) -> Self { self.push(SgrCode::Hidden) }

    #[must_use]
    pub fn invert(self) -> Self { self.push(SgrCode::Invert) }

    #[must_use]
    pub fn foreground(self, color: impl Into<Color>) -> Self {
        self.push(SgrCode::Foreground(color.into()))
    }

    /// Same as [`Style::foreground()`].
    #[must_use]
    pub fn color(self, color: impl Into<Color>) -> Self { self.foreground(color) }

    /// Same as [`Style::foreground()`].
    #[must_use]
    pub fn fg(self, color: impl Into<Color>) -> Self { self.foreground(color) }

    #[must_use]
    pub fn background(self, color: impl Into<Color>) -> Self {
        self.push(SgrCode::Background(color.into()))
    }

    /// Same as [`Style::background()`].
    #[must_use]
    pub fn bg(self, color: impl Into<Color>) -> Self { self.background(color) }

    #[must_use]
    pub fn len(&self) -> usize { self.fragments.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.fragments.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, SgrCode> { self.fragments.iter() }

    /// Concatenate every fragment in insertion order.
    #[must_use]
    pub fn render(&self) -> String { self.to_string() }

    /// This is different than [`Style::render()`], because it doesn't allocate a new
    /// [String], but instead renders into an inline buffer on the stack. If this buffer
    /// gets larger than [`sizing::DEFAULT_STRING_STORAGE_SIZE`], it will spill to the
    /// heap.
    #[must_use]
    pub fn to_small_str(&self) -> sizing::InlineStringStyle {
        use std::fmt::Write as _;
        let mut acc = SmallString::new();
        // Writing to a `SmallString` never fails, it spills to the heap instead.
        write!(acc, "{self}").ok();
        acc
    }

    /// Bundle `text` with a copy of this style. See [`StyledText`].
    #[must_use]
    pub fn paint<'a>(&self, text: &'a str) -> StyledText<'a> {
        StyledText {
            text,
            style: self.clone(),
        }
    }
}

impl<'a> IntoIterator for &'a Style {
    type Item = &'a SgrCode;
    type IntoIter = std::slice::Iter<'a, SgrCode>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for sgr_code in &self.fragments {
            write!(f, "{sgr_code}")?;
        }
        Ok(())
    }
}

/// Text plus the [`Style`] to apply to it. [`Display`] renders the style fragments,
/// then the text, then [`Style::RESET`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText<'a> {
    pub text: &'a str,
    pub style: Style,
}

impl Display for StyledText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}{}{}", self.style, self.text, Style::RESET)
    }
}
