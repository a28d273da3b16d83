//! Border glyph tables.
//!
//! A [`BoxStyle`] is pure data: ten glyphs describing the corners, junctions
//! and edges of a box. The predefined tables are `const` values and can be
//! used interchangeably as a box's or a section's style.
//!
//! ```rust
//! use boxout_render::BoxStyle;
//!
//! let style: BoxStyle = "rounded".parse().unwrap();
//! assert_eq!(style, BoxStyle::ROUNDED);
//! assert_eq!(style.top_left, "╭");
//! ```

use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BoxError;

/// Glyphs for one visual border style.
///
/// `mid_top` and `mid_bottom` are the junctions a side-by-side layout would
/// need. Stacked boxes never draw them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoxStyle {
    pub top_left: Cow<'static, str>,
    pub top_right: Cow<'static, str>,
    pub bottom_right: Cow<'static, str>,
    pub bottom_left: Cow<'static, str>,
    /// Right-hand T junction used by dividers between sections.
    pub mid_right: Cow<'static, str>,
    /// Left-hand T junction used by dividers between sections.
    pub mid_left: Cow<'static, str>,
    pub mid_top: Cow<'static, str>,
    pub mid_bottom: Cow<'static, str>,
    pub vertical: Cow<'static, str>,
    pub horizontal: Cow<'static, str>,
}

/// Builds a `const` style from ten glyphs, in declaration order.
macro_rules! glyphs {
    ($tl:literal $tr:literal $br:literal $bl:literal $mr:literal $ml:literal
     $mt:literal $mb:literal $v:literal $h:literal) => {
        BoxStyle {
            top_left: Cow::Borrowed($tl),
            top_right: Cow::Borrowed($tr),
            bottom_right: Cow::Borrowed($br),
            bottom_left: Cow::Borrowed($bl),
            mid_right: Cow::Borrowed($mr),
            mid_left: Cow::Borrowed($ml),
            mid_top: Cow::Borrowed($mt),
            mid_bottom: Cow::Borrowed($mb),
            vertical: Cow::Borrowed($v),
            horizontal: Cow::Borrowed($h),
        }
    };
}

impl BoxStyle {
    /// Light single-line box drawing: ┌ ─ ┐ │ └ ┘ ├ ┤
    pub const DEFAULT: BoxStyle = glyphs!("┌" "┐" "┘" "└" "┤" "├" "┬" "┴" "│" "─");

    /// Double-line box drawing: ╔ ═ ╗ ║ ╚ ╝ ╠ ╣
    pub const DOUBLE: BoxStyle = glyphs!("╔" "╗" "╝" "╚" "╣" "╠" "╦" "╩" "║" "═");

    /// Rounded corners with light lines: ╭ ─ ╮ │ ╰ ╯ ├ ┤
    pub const ROUNDED: BoxStyle = glyphs!("╭" "╮" "╯" "╰" "┤" "├" "┬" "┴" "│" "─");

    /// ASCII borders: + - |
    pub const CLASSIC: BoxStyle = glyphs!("+" "+" "+" "+" "+" "+" "+" "+" "|" "-");

    /// Invisible borders. Keeps the layout, draws spaces.
    pub const BLANK: BoxStyle = glyphs!(" " " " " " " " " " " " " " " " " " " ");

    /// Heavy box drawing: ┏ ━ ┓ ┃ ┗ ┛ ┣ ┫
    pub const HEAVY: BoxStyle = glyphs!("┏" "┓" "┛" "┗" "┫" "┣" "┳" "┻" "┃" "━");

    /// Canonical names accepted by [`BoxStyle::named`].
    pub const NAMES: &'static [&'static str] =
        &["default", "double", "rounded", "classic", "blank", "heavy"];

    /// Looks up a predefined style by name (case-insensitive).
    ///
    /// Besides the canonical [`NAMES`](Self::NAMES), a few aliases are
    /// accepted: `single`/`light`, `round`, `ascii`, `none`, `bold`.
    pub fn named(name: &str) -> Option<BoxStyle> {
        let style = match name.trim().to_lowercase().as_str() {
            "default" | "single" | "light" => Self::DEFAULT,
            "double" => Self::DOUBLE,
            "rounded" | "round" => Self::ROUNDED,
            "classic" | "ascii" => Self::CLASSIC,
            "blank" | "none" => Self::BLANK,
            "heavy" | "bold" => Self::HEAVY,
            _ => return None,
        };
        Some(style)
    }
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for BoxStyle {
    type Err = BoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::named(s).ok_or_else(|| BoxError::UnknownStyle(s.to_string()))
    }
}
