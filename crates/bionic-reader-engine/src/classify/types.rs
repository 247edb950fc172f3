use serde::Serialize;

/// The kind of a single non-blank line.
///
/// Variants are mutually exclusive and decided by the first matching pattern,
/// in the order heading, list item, plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineKind {
    /// A heading with its level (1 unless the line starts with `#` markers).
    Heading { level: u8 },
    /// A bulleted or numbered list line.
    ListItem,
    /// Running text.
    Plain,
    /// Running text too short to be a paragraph.
    ///
    /// Only produced when [`ParagraphGate::Apply`] is in effect.
    ShortText,
}

impl LineKind {
    pub fn is_heading(self) -> bool {
        matches!(self, LineKind::Heading { .. })
    }
}

/// Whether short plain lines are split off from [`LineKind::Plain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphGate {
    /// Plain lines of three words or fewer become [`LineKind::ShortText`].
    Apply,
    /// Every plain line stays [`LineKind::Plain`].
    Ignore,
}

/// Classification of one line, borrowed from the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    pub kind: LineKind,
    /// The line with leading and trailing whitespace removed.
    pub trimmed: &'a str,
    /// Number of whitespace-separated tokens in the line.
    pub word_count: usize,
}
