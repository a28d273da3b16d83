//! # Boxout Render - Stacked Text Boxes for the Terminal
//!
//! `boxout-render` draws text inside box-drawing borders. A box holds one or
//! more stacked sections separated by divider lines; every section shares the
//! same interior width, so borders line up whatever the content.
//!
//! This crate is the rendering foundation for the `boxout` command-line tool,
//! but can be used independently by any application that prints framed text.
//!
//! ## Core Concepts
//!
//! - [`TextBox`]: Box-wide configuration (style, margins, padding, colors)
//! - [`Section`]: One content block with optional per-section overrides
//! - [`BoxStyle`]: The ten glyphs of a border style, with predefined tables
//! - [`Colorizer`]: Color capability; [`Plain`] is the no-op default
//! - [`BoxDocument`]: A box described in YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use boxout_render::{Align, BoxStyle, Item, Section, TextBox};
//!
//! let rendered = TextBox::new()
//!     .style(BoxStyle::ROUNDED)
//!     .padding(1)
//!     .render([
//!         Item::from(Section::new("Report").align(Align::Center)),
//!         Item::from("3 items processed\n0 errors"),
//!     ]);
//!
//! assert_eq!(
//!     rendered,
//!     "╭───────────────────╮\n\
//!      │      Report       │\n\
//!      ├───────────────────┤\n\
//!      │ 3 items processed │\n\
//!      │ 0 errors          │\n\
//!      ╰───────────────────╯\n"
//! );
//! ```
//!
//! ## Colors
//!
//! Any [`console::Style`] can color borders or content, per box or per
//! section. Widths are always measured with escape sequences stripped:
//!
//! ```rust
//! use boxout_render::{Section, TextBox, visible_width};
//! use console::Style;
//!
//! let rendered = TextBox::new()
//!     .border_color(Style::new().cyan().force_styling(true))
//!     .render([Section::new("alert").content_color(Style::new().red().bold())]);
//!
//! let widths: Vec<usize> = rendered.lines().map(visible_width).collect();
//! assert_eq!(widths, vec![7, 7, 7]);
//! ```

mod color;
mod document;
mod error;
mod section;
mod style;
mod textbox;
mod width;

// Error type
pub use error::{BoxError, Result};

// Box and sections
pub use section::{Align, Content, Item, Section};
pub use textbox::{TextBox, MAX_SPACING};

// Border styles
pub use style::BoxStyle;

// Colors
pub use color::{
    parse_colorizer, parse_style, rgb_to_ansi256, ColorDef, Colorizer, Plain, SharedColorizer,
};

// Documents
pub use document::{item_from_value, BoxDocument, StyleRef, DOCUMENT_EXTENSIONS};

// Width utilities
pub use width::{align_to, pad_center, pad_left, pad_right, visible_width};
