//! Text structure analysis and bionic reading formatting.
//!
//! - [`analyze`] builds an outline with word count and reading time
//! - [`format`] emphasizes the leading characters of each word
//!
//! Both are pure functions of their input and safe to call from any thread.

pub mod analysis;
pub mod bionic;
pub mod classify;

// Re-export key types for easier usage
pub use analysis::{HeadingEntry, ListBlock, ParagraphEntry, StructureReport, analyze};
pub use bionic::{
    BionicFormatter, FixationControl, FixationFrequency, FormatSettings, FormattedDocument,
    FormattedLine, HtmlRenderer, Inline, Intensity, OpacityLevel, PlainRenderer, ReadingSettings,
    Renderer, SettingsError, format, format_html, render_page,
};
pub use classify::{LineKind, ParagraphGate, classify_line};
