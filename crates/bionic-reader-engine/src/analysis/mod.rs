//! # Structure Analysis
//!
//! Builds a [`StructureReport`] from plain text: headings, paragraphs, list
//! blocks, a total word count and an estimated reading time.
//!
//! Blank lines are skipped entirely. They take no position and add no words,
//! which is why positions here differ from line indices in the formatter output.

pub mod builder;
pub mod types;

pub use builder::ReportBuilder;
pub use types::{HeadingEntry, ListBlock, ParagraphEntry, StructureReport};

use crate::classify::LineClassifier;

/// Reading speed used for [`StructureReport::reading_time`].
pub const WORDS_PER_MINUTE: usize = 200;

/// A list line joins the previous block when its position is closer than this
/// to the block's first item.
pub const LIST_MERGE_DISTANCE: usize = 5;

/// Analyzes the structure of `text`.
pub fn analyze(text: &str) -> StructureReport {
    let classifier = LineClassifier::outline();
    let mut builder = ReportBuilder::new();

    for line in text.split('\n').filter(|l| !l.trim().is_empty()) {
        builder.push(&classifier.classify(line));
    }

    let report = builder.finish();
    log::debug!(
        "analyzed {} words: {} headings, {} paragraphs, {} lists",
        report.total_words,
        report.headings.len(),
        report.paragraphs.len(),
        report.lists.len()
    );
    report
}
