use crate::classify::{LineClass, LineKind, heading_text};

use super::{
    LIST_MERGE_DISTANCE, WORDS_PER_MINUTE,
    types::{HeadingEntry, ListBlock, ParagraphEntry, StructureReport},
};

/// Accumulates classified lines into a [`StructureReport`].
///
/// Every pushed line consumes one position, so callers must only push
/// non-blank lines.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    report: StructureReport,
    position: usize,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, class: &LineClass<'_>) {
        let position = self.position;
        self.report.total_words += class.word_count;

        match class.kind {
            LineKind::Heading { level } => self.report.headings.push(HeadingEntry {
                level,
                text: heading_text(class.trimmed).to_string(),
                position,
            }),
            LineKind::ListItem => self.push_list_item(class.trimmed, position),
            LineKind::Plain => self.report.paragraphs.push(ParagraphEntry {
                text: class.trimmed.to_string(),
                position,
                word_count: class.word_count,
            }),
            // Counted in total_words but kept out of the outline.
            LineKind::ShortText => {}
        }

        self.position += 1;
    }

    fn push_list_item(&mut self, item: &str, position: usize) {
        match self.report.lists.last_mut() {
            Some(block) if block.position.abs_diff(position) < LIST_MERGE_DISTANCE => {
                block.items.push(item.to_string());
            }
            _ => self.report.lists.push(ListBlock {
                items: vec![item.to_string()],
                position,
            }),
        }
    }

    pub fn finish(mut self) -> StructureReport {
        self.report.reading_time = self.report.total_words.div_ceil(WORDS_PER_MINUTE);
        self.report
    }
}
