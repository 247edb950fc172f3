//! # Bionic Formatting
//!
//! Rewrites text so the leading characters of each word are emphasized.
//!
//! ## Pipeline
//!
//! 1. **Formatting** (`formatter`): every input line becomes one
//!    [`FormattedLine`], either a verbatim blank line or a block of inline runs
//! 2. **Rendering** (`render`, `page`): a [`Renderer`] serializes the fragment
//!    tree; document text is escaped, so only the markup added here is structural
//!
//! ## Per-line styling
//!
//! | line kind | bold: rest of word | highlight: rest of word | block wrapper |
//! |-----------|--------------------|-------------------------|---------------|
//! | heading   | plain run          | muted run               | heading       |
//! | list item | plain run          | raw text                | list item     |
//! | plain     | raw text           | raw text                | none          |
//!
//! Headings use the intensity plus [`Intensity::HEADING_BOOST`].

pub mod formatter;
pub mod fragment;
pub mod page;
pub mod render;
pub mod settings;

pub use formatter::{BionicFormatter, chars_to_bold, format};
pub use fragment::{BlockWrapper, EmphasisStyle, FormattedDocument, FormattedLine, Inline};
pub use page::render_page;
pub use render::{HtmlRenderer, PlainRenderer, Renderer};
pub use settings::{
    ColumnWidth, FixationControl, FixationFrequency, FormatSettings, Intensity, OpacityLevel,
    ReadingSettings, SettingsError, Theme,
};

/// Formats `text` and renders it as annotated markup.
pub fn format_html(text: &str, intensity: Intensity, settings: FormatSettings) -> String {
    HtmlRenderer.render(&format(text, intensity, settings))
}
