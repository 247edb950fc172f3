use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingEntry {
    pub level: u8,
    pub text: String,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParagraphEntry {
    pub text: String,
    pub position: usize,
    pub word_count: usize,
}

/// Consecutive list lines grouped together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListBlock {
    pub items: Vec<String>,
    /// Position of the first item.
    pub position: usize,
}

/// Outline and reading statistics for a document.
///
/// Positions count non-blank lines only, starting at 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StructureReport {
    pub headings: Vec<HeadingEntry>,
    pub paragraphs: Vec<ParagraphEntry>,
    pub lists: Vec<ListBlock>,
    /// Words on every non-blank line, recorded in the outline or not.
    pub total_words: usize,
    /// Minutes at [`super::WORDS_PER_MINUTE`], rounded up.
    pub reading_time: usize,
}

impl StructureReport {
    /// The first `limit` headings and how many were left out.
    pub fn outline_preview(&self, limit: usize) -> (&[HeadingEntry], usize) {
        let shown = self.headings.len().min(limit);
        (&self.headings[..shown], self.headings.len() - shown)
    }
}
