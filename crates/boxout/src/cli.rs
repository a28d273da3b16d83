//! Command-line arguments and the render entry point.
//!
//! Flags map one-to-one onto the box settings of a [`BoxDocument`]. When a
//! config document is given, flags override its values and positional texts
//! are appended after its sections.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use boxout_render::{Align, BoxDocument, BoxStyle, Section, StyleRef, MAX_SPACING};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::debug;

/// Draw text inside a box
#[derive(Debug, Parser)]
#[command(name = "boxout")]
#[command(version)]
#[command(about = "Draw stacked text sections inside a terminal box")]
#[command(long_about = "Draw stacked text sections inside a terminal box.\n\n\
    Each TEXT argument becomes one section, separated from the next by a\n\
    divider line. With no TEXT and no --config, standard input is read as\n\
    a single section.")]
pub struct Cli {
    /// Text for each section
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Border style (default, double, rounded, classic, blank, heavy)
    #[arg(short, long, value_parser = parse_style_name)]
    pub style: Option<BoxStyle>,

    /// Spaces to the left and right of the box
    #[arg(short, long, value_parser = parse_spacing)]
    pub margin: Option<usize>,

    /// Blank lines above and below the box
    #[arg(long, value_parser = parse_spacing)]
    pub line_margin: Option<usize>,

    /// Spaces between the borders and the content
    #[arg(short, long, value_parser = parse_spacing)]
    pub padding: Option<usize>,

    /// Blank lines above and below each section's content
    #[arg(long, value_parser = parse_spacing)]
    pub line_padding: Option<usize>,

    /// Alignment of the positional texts
    #[arg(short, long, value_enum)]
    pub align: Option<AlignArg>,

    /// Border color, e.g. `cyan` or `bold.on_blue`
    #[arg(long, value_name = "COLOR")]
    pub border_color: Option<String>,

    /// Content color, e.g. `yellow` or `#ff8800`
    #[arg(long, value_name = "COLOR")]
    pub content_color: Option<String>,

    /// Load box settings and sections from a YAML or JSON document
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Interpret \n, \t, \e and \\ in TEXT
    #[arg(short, long)]
    pub escapes: bool,

    /// When to emit color escape sequences
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlignArg {
    Left,
    Right,
    Center,
}

impl From<AlignArg> for Align {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Left => Align::Left,
            AlignArg::Right => Align::Right,
            AlignArg::Center => Align::Center,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Applies the choice to `console`'s global color detection.
    pub fn apply(self) {
        match self {
            ColorChoice::Auto => {}
            ColorChoice::Always => console::set_colors_enabled(true),
            ColorChoice::Never => console::set_colors_enabled(false),
        }
    }
}

fn parse_style_name(name: &str) -> Result<BoxStyle, String> {
    name.parse::<BoxStyle>().map_err(|_| {
        format!(
            "unknown style '{}' (expected one of: {})",
            name,
            BoxStyle::NAMES.join(", ")
        )
    })
}

fn parse_spacing(value: &str) -> Result<usize, String> {
    let n: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a non-negative integer", value))?;
    if n > MAX_SPACING {
        return Err(format!("{} exceeds the maximum of {}", n, MAX_SPACING));
    }
    Ok(n)
}

impl Cli {
    /// Builds the document described by the arguments.
    ///
    /// `stdin` is only read when there are no texts and no config document.
    pub fn document(&self, stdin: impl Read) -> Result<BoxDocument> {
        let mut doc = match &self.config {
            Some(path) => BoxDocument::from_path(path)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => BoxDocument::default(),
        };

        if let Some(style) = &self.style {
            doc.style = Some(StyleRef::Custom(style.clone()));
        }
        if self.margin.is_some() {
            doc.margin = self.margin;
        }
        if self.line_margin.is_some() {
            doc.line_margin = self.line_margin;
        }
        if self.padding.is_some() {
            doc.padding = self.padding;
        }
        if self.line_padding.is_some() {
            doc.line_padding = self.line_padding;
        }
        if self.border_color.is_some() {
            doc.border_color = self.border_color.clone();
        }
        if self.content_color.is_some() {
            doc.content_color = self.content_color.clone();
        }

        let texts = if self.texts.is_empty() && self.config.is_none() {
            vec![read_input(stdin)?]
        } else {
            self.texts.clone()
        };
        debug!(sections = texts.len(), "collected positional sections");

        let align = self.align.map(Align::from).unwrap_or_default();
        for text in texts {
            let text = if self.escapes { unescape(&text) } else { text };
            doc.push_item(Section::new(text).align(align));
        }

        Ok(doc)
    }

    /// Renders the box described by the arguments.
    pub fn render(&self, stdin: impl Read) -> Result<String> {
        let doc = self.document(stdin)?;
        doc.render().context("failed to render box")
    }
}

fn read_input(mut stdin: impl Read) -> Result<String> {
    let mut input = String::new();
    stdin
        .read_to_string(&mut input)
        .context("failed to read standard input")?;
    Ok(input)
}

/// Expands `\n`, `\t`, `\e` and `\\`. Other sequences are kept as written.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('e') => out.push('\x1b'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
