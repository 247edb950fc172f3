//! # Line Classification
//!
//! Decides whether a single line is a heading, a list item or plain text.
//! Both the structure analyzer and the bionic formatter classify through this
//! module so the two can never disagree about what a line is.
//!
//! ## Priority
//!
//! 1. **Heading**: at most ten words and any of the [`HEADING_MATCHERS`]
//! 2. **List item**: any of the [`LIST_MATCHERS`]
//! 3. **Plain** otherwise
//!
//! The only difference between the two callers is the [`ParagraphGate`]: the
//! analyzer splits plain lines of three words or fewer off as
//! [`LineKind::ShortText`], the formatter treats them as ordinary text.

pub mod matchers;
pub mod types;

pub use matchers::{HEADING_MATCHERS, LIST_MATCHERS, Matcher, first_match};
pub use types::{LineClass, LineKind, ParagraphGate};

/// Headings never have more words than this.
pub const MAX_HEADING_WORDS: usize = 10;

/// Plain lines need more words than this to count as a paragraph.
pub const MIN_PARAGRAPH_WORDS: usize = 3;

/// Classifies lines with a fixed paragraph gate.
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier {
    gate: ParagraphGate,
}

impl LineClassifier {
    pub const fn new(gate: ParagraphGate) -> Self {
        Self { gate }
    }

    /// Classifier used for building document outlines.
    pub const fn outline() -> Self {
        Self::new(ParagraphGate::Apply)
    }

    /// Classifier used when rendering emphasis.
    pub const fn formatting() -> Self {
        Self::new(ParagraphGate::Ignore)
    }

    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        classify_line(line, self.gate)
    }
}

/// Classifies one line. Surrounding whitespace is ignored for matching.
pub fn classify_line(line: &str, gate: ParagraphGate) -> LineClass<'_> {
    let trimmed = line.trim();
    let word_count = count_words(trimmed);

    let kind = if word_count <= MAX_HEADING_WORDS
        && first_match(&HEADING_MATCHERS, trimmed).is_some()
    {
        LineKind::Heading {
            level: matchers::heading_level(trimmed),
        }
    } else if first_match(&LIST_MATCHERS, trimmed).is_some() {
        LineKind::ListItem
    } else if gate == ParagraphGate::Apply && word_count <= MIN_PARAGRAPH_WORDS {
        LineKind::ShortText
    } else {
        LineKind::Plain
    };

    LineClass {
        kind,
        trimmed,
        word_count,
    }
}

/// Heading text with any `#` marker prefix removed.
pub fn heading_text(trimmed: &str) -> &str {
    matchers::strip_heading_marker(trimmed)
}

/// Number of whitespace-separated tokens.
pub fn count_words(s: &str) -> usize {
    s.split_whitespace().count()
}
