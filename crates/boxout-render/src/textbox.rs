//! The box layout engine.
//!
//! A [`TextBox`] is a reusable configuration. Rendering resolves every
//! section's unset settings against the box into render-local values, measures
//! the widest line across all sections, then stacks the sections between a top
//! border, mid dividers and a bottom border:
//!
//! ```text
//! ┌────────┐   top: first section's style and border color
//! │ title  │
//! ├────────┤   divider: style and border color of the section above
//! │ body   │
//! │ text   │
//! └────────┘   bottom: last section's style and border color
//! ```
//!
//! Every line of the box has the same visible width, whatever the content,
//! colors or glyphs involved.

use std::io;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::color::{Colorizer, Plain, SharedColorizer};
use crate::section::{Align, Item};
use crate::style::BoxStyle;
use crate::width::{align_to, spaces, split_lines, visible_width};

/// Upper bound for margins and paddings, in spaces or lines.
///
/// Builders clamp larger values; box documents reject them with
/// [`BoxError::InvalidNumber`](crate::BoxError::InvalidNumber).
pub const MAX_SPACING: usize = 1024;

/// Configuration for a multi-section box.
///
/// # Example
///
/// ```rust
/// use boxout_render::{BoxStyle, TextBox};
///
/// let rendered = TextBox::new()
///     .style(BoxStyle::CLASSIC)
///     .margin(1)
///     .padding(1)
///     .render(["hi"]);
///
/// assert_eq!(rendered, " +----+ \n | hi | \n +----+ \n");
/// ```
#[derive(Clone, Debug)]
pub struct TextBox {
    style: BoxStyle,
    margin: usize,
    line_margin: usize,
    padding: usize,
    line_padding: usize,
    border_color: SharedColorizer,
    content_color: SharedColorizer,
}

impl Default for TextBox {
    fn default() -> Self {
        TextBox {
            style: BoxStyle::DEFAULT,
            margin: 0,
            line_margin: 0,
            padding: 0,
            line_padding: 0,
            border_color: Arc::new(Plain),
            content_color: Arc::new(Plain),
        }
    }
}

impl TextBox {
    /// Creates a box with the default style, no spacing and no colors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the border style used by sections without their own.
    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    /// Spaces before and after every line of the box, at most [`MAX_SPACING`].
    pub fn margin(mut self, margin: usize) -> Self {
        self.margin = margin.min(MAX_SPACING);
        self
    }

    /// Blank lines before and after the box.
    pub fn line_margin(mut self, line_margin: usize) -> Self {
        self.line_margin = line_margin.min(MAX_SPACING);
        self
    }

    /// Default horizontal padding for sections.
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding.min(MAX_SPACING);
        self
    }

    /// Default vertical padding for sections.
    pub fn line_padding(mut self, line_padding: usize) -> Self {
        self.line_padding = line_padding.min(MAX_SPACING);
        self
    }

    /// Sets the default border colorizer.
    pub fn border_color(self, color: impl Colorizer + 'static) -> Self {
        self.border_colorizer(Arc::new(color))
    }

    /// Sets the default border colorizer from a shared handle.
    pub fn border_colorizer(mut self, color: SharedColorizer) -> Self {
        self.border_color = color;
        self
    }

    /// Sets the default content colorizer.
    pub fn content_color(self, color: impl Colorizer + 'static) -> Self {
        self.content_colorizer(Arc::new(color))
    }

    /// Sets the default content colorizer from a shared handle.
    pub fn content_colorizer(mut self, color: SharedColorizer) -> Self {
        self.content_color = color;
        self
    }

    /// Spaces before and after every line of the box.
    pub fn get_margin(&self) -> usize {
        self.margin
    }

    /// Default horizontal padding, after clamping.
    pub fn get_padding(&self) -> usize {
        self.padding
    }

    /// Interior width the given items would be rendered at.
    pub fn content_width<I, T>(&self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        let items: Vec<Item> = items.into_iter().map(Into::into).collect();
        let sections: Vec<ResolvedSection<'_>> =
            items.iter().map(|item| self.resolve(item)).collect();
        longest(&sections)
    }

    /// Renders the items as one box.
    ///
    /// Strings become sections that inherit everything from the box. Every
    /// emitted line ends with a newline; an empty item list renders only the
    /// line margins.
    pub fn render<I, T>(&self, items: I) -> String
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        let items: Vec<Item> = items.into_iter().map(Into::into).collect();
        let sections: Vec<ResolvedSection<'_>> =
            items.iter().map(|item| self.resolve(item)).collect();
        let max_width = longest(&sections);
        debug!(
            sections = sections.len(),
            width = max_width,
            "rendering box"
        );

        let mut output = String::new();
        output.push_str(&"\n".repeat(self.line_margin));

        let last = sections.len().saturating_sub(1);
        for (idx, section) in sections.iter().enumerate() {
            let style = section.style;
            trace!(
                index = idx,
                padding = section.padding,
                line_padding = section.line_padding,
                align = ?section.align,
                "rendering section"
            );

            if idx == 0 {
                let top = section.edge(&style.top_left, &style.top_right, max_width);
                self.push_line(&mut output, &top);
            }

            let vertical = section.border.paint(&[&*style.vertical]);
            let blank = format!("{}{}{}", vertical, spaces(max_width), vertical);
            for _ in 0..section.line_padding {
                self.push_line(&mut output, &blank);
            }

            let field = max_width.saturating_sub(section.padding.saturating_mul(2));
            let pad = spaces(section.padding);
            for line in split_lines(&section.text) {
                let inner = align_to(line, field, section.align);
                let fill = field.saturating_sub(visible_width(&inner));
                let fill = spaces(fill);
                let body = section.content.paint(&[
                    pad.as_str(),
                    inner.as_str(),
                    fill.as_str(),
                    pad.as_str(),
                ]);
                self.push_line(&mut output, &format!("{}{}{}", vertical, body, vertical));
            }

            for _ in 0..section.line_padding {
                self.push_line(&mut output, &blank);
            }

            let closing = if idx < last {
                section.edge(&style.mid_left, &style.mid_right, max_width)
            } else {
                section.edge(&style.bottom_left, &style.bottom_right, max_width)
            };
            self.push_line(&mut output, &closing);
        }

        output.push_str(&"\n".repeat(self.line_margin));
        output
    }

    /// Renders the items and writes the box to `writer`.
    pub fn render_to<W, I, T>(&self, writer: &mut W, items: I) -> io::Result<()>
    where
        W: io::Write,
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        writer.write_all(self.render(items).as_bytes())
    }

    fn push_line(&self, output: &mut String, body: &str) {
        let margin = spaces(self.margin);
        output.push_str(&margin);
        output.push_str(body);
        output.push_str(&margin);
        output.push('\n');
    }

    /// Fills every unset setting of an item from this box.
    fn resolve<'a>(&'a self, item: &'a Item) -> ResolvedSection<'a> {
        match item {
            Item::Text(text) => ResolvedSection {
                style: &self.style,
                border: &*self.border_color,
                content: &*self.content_color,
                padding: self.padding,
                line_padding: 0,
                align: Align::Left,
                text: text.clone(),
            },
            Item::Section(section) => ResolvedSection {
                style: section.style.as_ref().unwrap_or(&self.style),
                border: section
                    .border_color
                    .as_deref()
                    .unwrap_or(&*self.border_color),
                content: section
                    .content_color
                    .as_deref()
                    .unwrap_or(&*self.content_color),
                padding: section.padding.unwrap_or(self.padding),
                line_padding: section.line_padding.unwrap_or(self.line_padding),
                align: section.align,
                text: section.content.to_text(),
            },
        }
    }
}

/// A section with every setting resolved for one render.
struct ResolvedSection<'a> {
    style: &'a BoxStyle,
    border: &'a dyn Colorizer,
    content: &'a dyn Colorizer,
    padding: usize,
    line_padding: usize,
    align: Align,
    text: String,
}

impl ResolvedSection<'_> {
    /// A horizontal border line between two junction glyphs.
    fn edge(&self, left: &str, right: &str, width: usize) -> String {
        let horizontal = self.style.horizontal.repeat(width);
        self.border.paint(&[left, horizontal.as_str(), right])
    }
}

/// Widest line across all sections, padding included.
fn longest(sections: &[ResolvedSection<'_>]) -> usize {
    sections
        .iter()
        .flat_map(|section| {
            let padding = section.padding.saturating_mul(2);
            split_lines(&section.text).map(move |line| visible_width(line).saturating_add(padding))
        })
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{Content, Section};
    use console::Style;

    fn red() -> Style {
        Style::new().red().force_styling(true)
    }

    #[test]
    fn single_section_classic_with_margin_and_padding() {
        let rendered = TextBox::new()
            .style(BoxStyle::CLASSIC)
            .margin(1)
            .padding(1)
            .render(["hi"]);
        assert_eq!(rendered, " +----+ \n | hi | \n +----+ \n");
    }

    #[test]
    fn bare_single_line_round_trip() {
        let rendered = TextBox::new().render(["hello"]);
        assert_eq!(rendered, "┌─────┐\n│hello│\n└─────┘\n");
    }

    #[test]
    fn stacked_sections_use_dividers() {
        let rendered = TextBox::new().render(["a", "bcd"]);
        assert_eq!(rendered, "┌───┐\n│a  │\n├───┤\n│bcd│\n└───┘\n");
    }

    #[test]
    fn line_padding_adds_blank_interior_lines() {
        let rendered = TextBox::new().render([Section::new("x").line_padding(1)]);
        assert_eq!(rendered, "┌─┐\n│ │\n│x│\n│ │\n└─┘\n");
    }

    #[test]
    fn box_line_padding_is_the_section_default() {
        let text_box = TextBox::new().line_padding(1);
        assert_eq!(
            text_box.render([Section::new("x")]),
            "┌─┐\n│ │\n│x│\n│ │\n└─┘\n"
        );
        assert_eq!(
            text_box.render([Section::new("x").line_padding(0)]),
            "┌─┐\n│x│\n└─┘\n"
        );
    }

    #[test]
    fn plain_text_never_takes_line_padding() {
        let rendered = TextBox::new().line_padding(1).render([
            Item::from("x"),
            Item::from(Section::new("y")),
        ]);
        assert_eq!(rendered, "┌─┐\n│x│\n├─┤\n│ │\n│y│\n│ │\n└─┘\n");
    }

    #[test]
    fn oversized_spacing_is_clamped() {
        let text_box = TextBox::new()
            .padding(usize::MAX)
            .margin(usize::MAX)
            .line_margin(usize::MAX)
            .line_padding(usize::MAX);
        assert_eq!(text_box.get_padding(), MAX_SPACING);
        assert_eq!(text_box.get_margin(), MAX_SPACING);

        let rendered = text_box.render([Section::new("x").padding(usize::MAX)]);
        let widths: Vec<usize> = rendered
            .lines()
            .filter(|line| !line.is_empty())
            .map(visible_width)
            .collect();
        let expected = 4 * MAX_SPACING + 3;
        assert!(widths.iter().all(|&width| width == expected));
    }

    #[derive(Debug)]
    struct Version(u32, u32);

    impl std::fmt::Display for Version {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "v{}.{}", self.0, self.1)
        }
    }

    #[test]
    fn displayable_content_is_stringified_once_per_render() {
        let rendered = TextBox::new().padding(1).render([
            Item::from(Section::display(Version(1, 12)).align(Align::Right)),
            Item::from("release"),
        ]);
        assert_eq!(
            rendered,
            "┌─────────┐\n│   v1.12 │\n├─────────┤\n│ release │\n└─────────┘\n"
        );
    }

    #[test]
    fn line_margin_surrounds_box() {
        let rendered = TextBox::new().line_margin(2).render(["x"]);
        assert_eq!(rendered, "\n\n┌─┐\n│x│\n└─┘\n\n\n");
    }

    #[test]
    fn empty_items_render_only_line_margins() {
        assert_eq!(TextBox::new().render(Vec::<Item>::new()), "");
        assert_eq!(TextBox::new().line_margin(1).render(Vec::<Item>::new()), "\n\n");
    }

    #[test]
    fn opaque_content_renders_empty() {
        let rendered = TextBox::new().render([Section::new(Content::Opaque)]);
        assert_eq!(rendered, "┌┐\n││\n└┘\n");
    }

    #[test]
    fn trailing_newline_trimmed_once() {
        assert_eq!(TextBox::new().render(["ab\n"]), "┌──┐\n│ab│\n└──┘\n");
        assert_eq!(
            TextBox::new().render(["ab\n\n"]),
            "┌──┐\n│ab│\n│  │\n└──┘\n"
        );
    }

    #[test]
    fn alignment_within_shared_width() {
        let rendered = TextBox::new().render([
            Section::new("ab").align(Align::Center),
            Section::new("ab").align(Align::Right),
            Section::new("abcde"),
        ]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "│ ab  │");
        assert_eq!(lines[3], "│   ab│");
        assert_eq!(lines[5], "│abcde│");
    }

    #[test]
    fn section_padding_overrides_box_padding() {
        let rendered = TextBox::new()
            .padding(1)
            .render([Section::new("x").padding(3).into(), Item::from("yy")]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "┌───────┐");
        assert_eq!(lines[1], "│   x   │");
        assert_eq!(lines[3], "│ yy    │");
    }

    #[test]
    fn first_section_style_draws_top_and_dividers_follow_section_above() {
        let rendered = TextBox::new().render([
            Item::from(Section::new("a").style(BoxStyle::DOUBLE)),
            Item::from("b"),
        ]);
        assert_eq!(rendered, "╔═╗\n║a║\n╠═╣\n│b│\n└─┘\n");
    }

    #[test]
    fn border_color_wraps_glyphs_only() {
        let rendered = TextBox::new().border_color(red()).render(["x"]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "\x1b[31m┌─┐\x1b[0m");
        assert_eq!(lines[1], "\x1b[31m│\x1b[0mx\x1b[31m│\x1b[0m");
    }

    #[test]
    fn content_color_wraps_padded_text() {
        let rendered = TextBox::new().padding(1).content_color(red()).render(["x"]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "│\x1b[31m x \x1b[0m│");
    }

    #[test]
    fn section_color_overrides_box_color() {
        let rendered = TextBox::new()
            .border_color(red())
            .render([Section::new("x").border_color(Plain)]);
        assert!(!rendered.contains('\x1b'));
    }

    #[test]
    fn ansi_content_measured_by_visible_width() {
        let colored = "\x1b[32mok\x1b[0m";
        let rendered = TextBox::new().render([colored, "abcd"]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "┌────┐");
        assert_eq!(lines[1], format!("│{}  │", colored));
    }

    #[test]
    fn rendering_does_not_mutate_the_box() {
        let text_box = TextBox::new().padding(1);
        let expected = text_box.render(["plain"]);
        let _ = text_box.render([Section::new("other")
            .style(BoxStyle::HEAVY)
            .padding(4)
            .border_color(red())]);
        assert_eq!(text_box.render(["plain"]), expected);
    }

    #[test]
    fn content_width_matches_rendered_top_border() {
        let text_box = TextBox::new().padding(2);
        let width = text_box.content_width(["abc", "a\nabcdef"]);
        assert_eq!(width, 10);
        let top = text_box.render(["abc", "a\nabcdef"]).lines().next().map(visible_width);
        assert_eq!(top, Some(12));
    }

    #[test]
    fn render_to_writes_the_same_bytes() {
        let text_box = TextBox::new().style(BoxStyle::ROUNDED);
        let mut buffer = Vec::new();
        text_box.render_to(&mut buffer, ["hey"]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), text_box.render(["hey"]));
    }

    #[test]
    fn oversized_padding_does_not_panic() {
        let rendered =
            TextBox::new().render([Section::new("x").padding(40), Section::new("").padding(0)]);
        let widths: Vec<usize> = rendered.lines().map(visible_width).collect();
        assert!(widths.iter().all(|w| *w == 83));
    }
}
