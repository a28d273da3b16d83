//! Sections: the stacked content blocks of a box.
//!
//! Every setting on a [`Section`] is optional. Unset settings fall back to the
//! parent [`TextBox`](crate::TextBox) when the box is rendered; the section
//! itself is never modified.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::color::{Colorizer, SharedColorizer};
use crate::style::BoxStyle;
use crate::textbox::MAX_SPACING;

/// Horizontal alignment of each line of a section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad on the left.
    Right,
    /// Pad on both sides, odd extra space after the content.
    Center,
}

/// The content of a section.
///
/// Content is turned into a string exactly once per render: text is used as
/// is, displayable values are formatted, and opaque content renders as an
/// empty section.
#[derive(Clone)]
pub enum Content {
    /// Already-rendered text, possibly containing ANSI escapes.
    Text(String),
    /// Any value that knows how to display itself.
    Display(Arc<dyn fmt::Display + Send + Sync>),
    /// Content with no printable form.
    Opaque,
}

impl Content {
    /// Wraps a displayable value.
    pub fn display<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Content::Display(Arc::new(value))
    }

    /// The string form of this content.
    pub fn to_text(&self) -> String {
        match self {
            Content::Text(text) => text.clone(),
            Content::Display(value) => value.to_string(),
            Content::Opaque => String::new(),
        }
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Content::Display(value) => f.debug_tuple("Display").field(&value.to_string()).finish(),
            Content::Opaque => f.write_str("Opaque"),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Content::Text(String::new())
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

/// One content block of a box, with optional per-section overrides.
///
/// # Example
///
/// ```rust
/// use boxout_render::{Align, BoxStyle, Section};
///
/// let title = Section::new("Release notes")
///     .align(Align::Center)
///     .style(BoxStyle::DOUBLE)
///     .line_padding(1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Section {
    pub(crate) content: Content,
    pub(crate) style: Option<BoxStyle>,
    pub(crate) border_color: Option<SharedColorizer>,
    pub(crate) content_color: Option<SharedColorizer>,
    pub(crate) padding: Option<usize>,
    pub(crate) line_padding: Option<usize>,
    pub(crate) align: Align,
}

impl Section {
    /// Creates a section with the given content and no overrides.
    pub fn new(content: impl Into<Content>) -> Self {
        Section {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Creates a section from any displayable value.
    pub fn display<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Self::new(Content::display(value))
    }

    /// Overrides the border style for this section.
    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Overrides the border color for this section.
    pub fn border_color(mut self, color: impl Colorizer + 'static) -> Self {
        self.border_color = Some(Arc::new(color));
        self
    }

    /// Overrides the border color with an already shared colorizer.
    pub fn border_colorizer(mut self, color: SharedColorizer) -> Self {
        self.border_color = Some(color);
        self
    }

    /// Overrides the content color for this section.
    pub fn content_color(mut self, color: impl Colorizer + 'static) -> Self {
        self.content_color = Some(Arc::new(color));
        self
    }

    /// Overrides the content color with an already shared colorizer.
    pub fn content_colorizer(mut self, color: SharedColorizer) -> Self {
        self.content_color = Some(color);
        self
    }

    /// Spaces between the vertical borders and the text, on each side.
    ///
    /// Clamped to [`MAX_SPACING`].
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = Some(padding.min(MAX_SPACING));
        self
    }

    /// Blank lines before and after the text.
    pub fn line_padding(mut self, line_padding: usize) -> Self {
        self.line_padding = Some(line_padding.min(MAX_SPACING));
        self
    }

    /// Horizontal alignment of every line.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// The section's content, as given.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Alignment applied to every line.
    pub fn get_align(&self) -> Align {
        self.align
    }
}

/// A top-level input to a box: plain text or a fully specified section.
#[derive(Clone, Debug)]
pub enum Item {
    Text(String),
    Section(Section),
}

impl From<&str> for Item {
    fn from(text: &str) -> Self {
        Item::Text(text.to_string())
    }
}

impl From<String> for Item {
    fn from(text: String) -> Self {
        Item::Text(text)
    }
}

impl From<&String> for Item {
    fn from(text: &String) -> Self {
        Item::Text(text.clone())
    }
}

impl From<Section> for Item {
    fn from(section: Section) -> Self {
        Item::Section(section)
    }
}
