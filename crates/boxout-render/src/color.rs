//! Color capability for borders and content.
//!
//! Boxes never talk to a color library directly. They hand string parts to a
//! [`Colorizer`], which returns one wrapped string. [`Plain`] is the identity
//! implementation and the default everywhere, so output is plain text unless a
//! caller supplies a real colorizer such as a [`console::Style`].
//!
//! Style specifications are dotted strings parsed by [`parse_style`]:
//!
//! - Named colors: `red`, `green`, `blue`, etc. (8 ANSI colors, `gray`/`grey`)
//! - Bright variants: `bright_red`, `bright_green`, etc.
//! - 256-color palette: `0` through `255`
//! - RGB hex: `#ff6b35` or `#fff` (3 or 6 digit)
//! - Background: any of the above prefixed with `on_`
//! - Attributes: `bold`, `dim`, `italic`, `underlined`, `blink`, `reverse`,
//!   `hidden`, `strikethrough`
//!
//! ```rust
//! use boxout_render::{parse_style, Colorizer};
//!
//! let style = parse_style("bold.cyan.on_#202020").unwrap().force_styling(true);
//! let painted = style.paint(&["│", "hi", "│"]);
//! assert!(painted.contains("│hi│"));
//! assert!(painted.starts_with("\x1b["));
//! ```

use std::fmt;
use std::sync::Arc;

use console::{Color, Style};

use crate::error::{BoxError, Result};

/// Wraps string parts into a single, possibly colorized, string.
pub trait Colorizer: fmt::Debug + Send + Sync {
    /// Joins `parts` and wraps the result.
    fn paint(&self, parts: &[&str]) -> String;
}

/// Shared handle to a colorizer, cheap to clone across boxes and sections.
pub type SharedColorizer = Arc<dyn Colorizer>;

/// Identity colorizer: concatenates the parts unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Plain;

impl Colorizer for Plain {
    fn paint(&self, parts: &[&str]) -> String {
        parts.concat()
    }
}

impl Colorizer for Style {
    fn paint(&self, parts: &[&str]) -> String {
        self.apply_to(parts.concat()).to_string()
    }
}

/// Parses a dotted style specification into a colorizer.
///
/// An empty specification, `none` or `plain` yields [`Plain`].
pub fn parse_colorizer(spec: &str) -> Result<SharedColorizer> {
    match spec.trim().to_lowercase().as_str() {
        "" | "none" | "plain" => Ok(Arc::new(Plain)),
        _ => Ok(Arc::new(parse_style(spec)?)),
    }
}

/// Parses a dotted style specification such as `bold.red.on_blue`.
///
/// Later tokens override earlier ones of the same kind.
pub fn parse_style(spec: &str) -> Result<Style> {
    let invalid = |reason: String| BoxError::InvalidColor {
        spec: spec.to_string(),
        reason,
    };

    let mut style = Style::new();
    for token in spec.trim().split('.').map(str::trim) {
        if token.is_empty() {
            return Err(invalid("empty token".to_string()));
        }
        let lower = token.to_lowercase();
        style = match lower.as_str() {
            "bold" => style.bold(),
            "dim" => style.dim(),
            "italic" => style.italic(),
            "underlined" | "underline" => style.underlined(),
            "blink" => style.blink(),
            "reverse" => style.reverse(),
            "hidden" => style.hidden(),
            "strikethrough" => style.strikethrough(),
            _ => match lower.strip_prefix("on_") {
                Some(bg) => style.bg(ColorDef::parse(bg).map_err(invalid)?.to_console_color()),
                None => style.fg(ColorDef::parse(&lower).map_err(invalid)?.to_console_color()),
            },
        };
    }
    Ok(style)
}

/// A single parsed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDef {
    /// Named ANSI color.
    Named(Color),
    /// 256-color palette index.
    Color256(u8),
    /// True color RGB, rendered through the nearest palette index.
    Rgb(u8, u8, u8),
}

impl ColorDef {
    /// Parses a color from a string: name, `bright_` name, palette index or hex.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if let Ok(index) = s.parse::<u16>() {
            return u8::try_from(index)
                .map(ColorDef::Color256)
                .map_err(|_| format!("color palette index {} out of range (0-255)", index));
        }

        Self::parse_named(s)
    }

    fn parse_hex(hex: &str) -> std::result::Result<Self, String> {
        if !hex.is_ascii() {
            return Err(format!("invalid hex: #{}", hex));
        }
        let component = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| format!("invalid hex: #{}", hex))
        };
        match hex.len() {
            // #rgb -> #rrggbb
            3 => Ok(ColorDef::Rgb(
                component(&hex[0..1])? * 17,
                component(&hex[1..2])? * 17,
                component(&hex[2..3])? * 17,
            )),
            6 => Ok(ColorDef::Rgb(
                component(&hex[0..2])?,
                component(&hex[2..4])?,
                component(&hex[4..6])?,
            )),
            _ => Err(format!(
                "invalid hex color: #{} (must be 3 or 6 digits)",
                hex
            )),
        }
    }

    fn parse_named(name: &str) -> std::result::Result<Self, String> {
        let name_lower = name.to_lowercase();

        if let Some(base) = name_lower.strip_prefix("bright_") {
            // console exposes bright colors as palette indices 8-15
            let index = match base {
                "black" => 8,
                "red" => 9,
                "green" => 10,
                "yellow" => 11,
                "blue" => 12,
                "magenta" => 13,
                "cyan" => 14,
                "white" => 15,
                _ => return Err(format!("unknown bright color: bright_{}", base)),
            };
            return Ok(ColorDef::Color256(index));
        }

        let color = match name_lower.as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" | "gray" | "grey" => Color::White,
            _ => return Err(format!("unknown color name: {}", name)),
        };
        Ok(ColorDef::Named(color))
    }

    /// Converts this color definition to a `console::Color`.
    pub fn to_console_color(self) -> Color {
        match self {
            ColorDef::Named(c) => c,
            ColorDef::Color256(n) => Color::Color256(n),
            ColorDef::Rgb(r, g, b) => Color::Color256(rgb_to_ansi256((r, g, b))),
        }
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// ```rust
/// use boxout_render::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_concatenates() {
        assert_eq!(Plain.paint(&["┌", "──", "┐"]), "┌──┐");
        assert_eq!(Plain.paint(&[]), "");
    }

    #[test]
    fn forced_style_wraps_in_escapes() {
        let style = Style::new().red().force_styling(true);
        let painted = style.paint(&["a", "b"]);
        assert!(painted.starts_with("\x1b[31m"));
        assert!(painted.contains("ab"));
        assert!(painted.ends_with("\x1b[0m"));
    }

    #[test]
    fn disabled_style_is_plain() {
        let style = Style::new().red().force_styling(false);
        assert_eq!(style.paint(&["a", "b"]), "ab");
    }

    #[test]
    fn parse_named_colors() {
        assert_eq!(ColorDef::parse("red").unwrap(), ColorDef::Named(Color::Red));
        assert_eq!(ColorDef::parse("CYAN").unwrap(), ColorDef::Named(Color::Cyan));
        assert_eq!(ColorDef::parse("grey").unwrap(), ColorDef::Named(Color::White));
        assert!(ColorDef::parse("purple").is_err());
    }

    #[test]
    fn parse_bright_colors() {
        assert_eq!(ColorDef::parse("bright_red").unwrap(), ColorDef::Color256(9));
        assert_eq!(ColorDef::parse("bright_white").unwrap(), ColorDef::Color256(15));
        assert!(ColorDef::parse("bright_purple").is_err());
    }

    #[test]
    fn parse_palette_index() {
        assert_eq!(ColorDef::parse("208").unwrap(), ColorDef::Color256(208));
        assert!(ColorDef::parse("256").is_err());
    }

    #[test]
    fn parse_hex_colors() {
        assert_eq!(ColorDef::parse("#ff6b35").unwrap(), ColorDef::Rgb(255, 107, 53));
        assert_eq!(ColorDef::parse("#F80").unwrap(), ColorDef::Rgb(255, 136, 0));
        assert!(ColorDef::parse("#ff").is_err());
        assert!(ColorDef::parse("#gggggg").is_err());
    }

    #[test]
    fn rgb_maps_to_palette() {
        assert_eq!(
            ColorDef::Rgb(255, 0, 0).to_console_color(),
            Color::Color256(196)
        );
    }

    #[test]
    fn rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert!((232..=255).contains(&rgb_to_ansi256((128, 128, 128))));
    }

    #[test]
    fn parse_style_combines_tokens() {
        let style = parse_style("bold.red.on_blue").unwrap().force_styling(true);
        let painted = style.paint(&["x"]);
        assert!(painted.contains("\x1b[31m"));
        assert!(painted.contains("\x1b[44m"));
        assert!(painted.contains("\x1b[1m"));
    }

    #[test]
    fn parse_style_rejects_garbage() {
        let err = parse_style("bold..red").unwrap_err();
        assert!(matches!(err, BoxError::InvalidColor { .. }));
        assert!(parse_style("sparkly").is_err());
        assert!(parse_style("on_nothing").is_err());
    }

    #[test]
    fn parse_colorizer_plain_names() {
        for spec in ["", "none", "PLAIN"] {
            let colorizer = parse_colorizer(spec).unwrap();
            assert_eq!(colorizer.paint(&["a", "b"]), "ab");
        }
    }
}
