//! Box documents: boxes described in YAML or JSON.
//!
//! A document carries the box settings and its sections. Sections are either
//! plain strings or mappings with per-section overrides:
//!
//! ```rust
//! use boxout_render::BoxDocument;
//!
//! let doc = BoxDocument::from_yaml(r#"
//! style: classic
//! padding: 1
//! sections:
//!   - content: Title
//!     align: center
//!   - "body text"
//! "#).unwrap();
//!
//! let rendered = doc.render().unwrap();
//! assert_eq!(rendered.lines().next(), Some("+-----------+"));
//! ```
//!
//! Entries of `sections` that are neither strings nor mappings abort the
//! render with [`BoxError::UnsupportedContent`]. Section `content` that has no
//! printable form (null, lists, mappings) renders as an empty section.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use tracing::debug;

use crate::color::parse_colorizer;
use crate::error::{BoxError, Result};
use crate::section::{Align, Content, Item, Section};
use crate::style::BoxStyle;
use crate::textbox::{TextBox, MAX_SPACING};

/// Recognized document file extensions.
pub const DOCUMENT_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// A border style given by name or as a full glyph table.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StyleRef {
    Named(String),
    Custom(BoxStyle),
}

impl StyleRef {
    /// Resolves the reference to a concrete style.
    pub fn resolve(&self) -> Result<BoxStyle> {
        match self {
            StyleRef::Named(name) => name.parse(),
            StyleRef::Custom(style) => Ok(style.clone()),
        }
    }
}

/// A box and its sections, as loaded from a document.
///
/// Every box setting is optional so that command-line flags can be layered on
/// top of a loaded document.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoxDocument {
    pub style: Option<StyleRef>,
    #[serde(deserialize_with = "non_negative")]
    pub margin: Option<usize>,
    #[serde(deserialize_with = "non_negative")]
    pub line_margin: Option<usize>,
    #[serde(deserialize_with = "non_negative")]
    pub padding: Option<usize>,
    #[serde(deserialize_with = "non_negative")]
    pub line_padding: Option<usize>,
    pub border_color: Option<String>,
    pub content_color: Option<String>,
    pub sections: Vec<Value>,
    /// Items appended programmatically after the document's own sections.
    #[serde(skip)]
    extra: Vec<Item>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SectionDoc {
    content: Value,
    style: Option<StyleRef>,
    border_color: Option<String>,
    content_color: Option<String>,
    #[serde(deserialize_with = "non_negative")]
    padding: Option<usize>,
    #[serde(deserialize_with = "non_negative")]
    line_padding: Option<usize>,
    align: Align,
}

impl BoxDocument {
    /// Parses a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a JSON document.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Loads a document from disk, picking the format from the extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let known = DOCUMENT_EXTENSIONS
            .iter()
            .any(|ext| ext.trim_start_matches('.') == extension);
        if !known {
            return Err(BoxError::UnsupportedFormat(path.display().to_string()));
        }

        let source = fs::read_to_string(path).map_err(|source| BoxError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), format = %extension, "loading box document");

        match extension.as_str() {
            "json" => Self::from_json(&source),
            _ => Self::from_yaml(&source),
        }
    }

    /// Appends an item after the document's sections.
    pub fn push_item(&mut self, item: impl Into<Item>) {
        self.extra.push(item.into());
    }

    /// Builds the configured box and its items.
    pub fn build(&self) -> Result<(TextBox, Vec<Item>)> {
        let mut text_box = TextBox::new();
        if let Some(style) = &self.style {
            text_box = text_box.style(style.resolve()?);
        }
        if let Some(margin) = spacing("margin", self.margin)? {
            text_box = text_box.margin(margin);
        }
        if let Some(line_margin) = spacing("line_margin", self.line_margin)? {
            text_box = text_box.line_margin(line_margin);
        }
        if let Some(padding) = spacing("padding", self.padding)? {
            text_box = text_box.padding(padding);
        }
        if let Some(line_padding) = spacing("line_padding", self.line_padding)? {
            text_box = text_box.line_padding(line_padding);
        }
        if let Some(spec) = &self.border_color {
            text_box = text_box.border_colorizer(parse_colorizer(spec)?);
        }
        if let Some(spec) = &self.content_color {
            text_box = text_box.content_colorizer(parse_colorizer(spec)?);
        }

        let mut items = self
            .sections
            .iter()
            .enumerate()
            .map(|(index, value)| item_from_value(index, value))
            .collect::<Result<Vec<_>>>()?;
        items.extend(self.extra.iter().cloned());

        Ok((text_box, items))
    }

    /// Builds and renders the document.
    pub fn render(&self) -> Result<String> {
        let (text_box, items) = self.build()?;
        Ok(text_box.render(items))
    }
}

/// Converts one dynamic top-level entry into an item.
///
/// Strings become plain text items and mappings become sections. Anything
/// else is an unsupported content type.
pub fn item_from_value(index: usize, value: &Value) -> Result<Item> {
    let kind = match value {
        Value::String(text) => return Ok(Item::Text(text.clone())),
        Value::Mapping(_) => {
            let doc: SectionDoc = serde_yaml::from_value(value.clone())?;
            return doc.into_section().map(Item::Section);
        }
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::Sequence(_) => "sequence",
        Value::Tagged(_) => "tagged value",
    };
    Err(BoxError::UnsupportedContent { index, kind })
}

impl SectionDoc {
    fn into_section(self) -> Result<Section> {
        let mut section = Section::new(content_from_value(self.content)).align(self.align);
        if let Some(style) = &self.style {
            section = section.style(style.resolve()?);
        }
        if let Some(spec) = &self.border_color {
            section = section.border_colorizer(parse_colorizer(spec)?);
        }
        if let Some(spec) = &self.content_color {
            section = section.content_colorizer(parse_colorizer(spec)?);
        }
        if let Some(padding) = spacing("padding", self.padding)? {
            section = section.padding(padding);
        }
        if let Some(line_padding) = spacing("line_padding", self.line_padding)? {
            section = section.line_padding(line_padding);
        }
        Ok(section)
    }
}

fn content_from_value(value: Value) -> Content {
    match value {
        Value::String(text) => Content::Text(text),
        Value::Number(n) => Content::display(n),
        Value::Bool(b) => Content::display(b),
        _ => Content::Opaque,
    }
}

/// Rejects margins and paddings above [`MAX_SPACING`].
fn spacing(field: &'static str, value: Option<usize>) -> Result<Option<usize>> {
    match value {
        Some(value) if value > MAX_SPACING => Err(BoxError::InvalidNumber { field, value }),
        _ => Ok(value),
    }
}

/// Accepts any integer, clamping negatives to zero.
fn non_negative<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<i64>::deserialize(deserializer)?;
    Ok(value.map(|n| usize::try_from(n.max(0)).unwrap_or(usize::MAX)))
}
