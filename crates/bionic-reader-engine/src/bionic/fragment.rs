use serde::Serialize;

/// Visual treatment of an inline run.
///
/// Fixation styles carry an opacity between 0.1 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum EmphasisStyle {
    /// Bold fixation.
    Bold { opacity: f32 },
    /// Fixation on a highlighted background.
    Highlight { opacity: f32 },
    /// De-emphasized remainder of a heading word in highlight mode.
    Muted,
    /// An unstyled wrapper around the remainder of a word.
    Plain,
}

/// A piece of inline content. Text is stored unescaped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Inline {
    /// Raw source text, emitted without any wrapper.
    Text(String),
    /// Text wrapped in a styled run.
    Emphasis { style: EmphasisStyle, text: String },
}

impl Inline {
    pub fn text(s: impl Into<String>) -> Self {
        Inline::Text(s.into())
    }

    pub fn emphasis(style: EmphasisStyle, text: impl Into<String>) -> Self {
        Inline::Emphasis {
            style,
            text: text.into(),
        }
    }

    /// The source text this run covers.
    pub fn as_str(&self) -> &str {
        match self {
            Inline::Text(s) => s,
            Inline::Emphasis { text, .. } => text,
        }
    }
}

/// Block-level wrapper applied to a whole line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockWrapper {
    /// Large, semibold heading block.
    Heading,
    /// Indented list block.
    ListItem,
    /// No wrapper; inline runs are emitted directly.
    None,
}

/// One output line. There is exactly one per input line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FormattedLine {
    /// A whitespace-only line, kept verbatim.
    Blank(String),
    Block {
        wrapper: BlockWrapper,
        inlines: Vec<Inline>,
    },
}

impl FormattedLine {
    pub fn is_blank(&self) -> bool {
        matches!(self, FormattedLine::Blank(_))
    }

    /// The line's text with all styling dropped.
    pub fn plain_text(&self) -> String {
        match self {
            FormattedLine::Blank(s) => s.clone(),
            FormattedLine::Block { inlines, .. } => inlines.iter().map(Inline::as_str).collect(),
        }
    }
}

/// The emphasis-annotated form of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormattedDocument {
    pub lines: Vec<FormattedLine>,
}

impl FormattedDocument {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
