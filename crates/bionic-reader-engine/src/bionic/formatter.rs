use std::sync::OnceLock;

use regex::Regex;

use crate::classify::{LineClassifier, LineKind};

use super::{
    fragment::{BlockWrapper, EmphasisStyle, FormattedDocument, FormattedLine, Inline},
    settings::{FixationControl, FormatSettings, Intensity},
};

/// Number of leading characters to emphasize in a word of `len` characters.
///
/// Never less than one, so single-character words are always emphasized.
pub fn chars_to_bold(len: usize, effective_intensity: u8) -> usize {
    (len * usize::from(effective_intensity)).div_ceil(100).max(1)
}

/// Splits on whitespace runs, keeping empty tokens at the edges.
fn split_tokens(s: &str) -> impl Iterator<Item = &str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace regex"))
        .split(s)
}

/// Byte offset of the `n`th character, or the end of the string.
fn char_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// Rewrites text into its emphasis-annotated form.
#[derive(Debug, Clone, Copy)]
pub struct BionicFormatter {
    intensity: Intensity,
    settings: FormatSettings,
    classifier: LineClassifier,
}

impl BionicFormatter {
    pub fn new(intensity: Intensity, settings: FormatSettings) -> Self {
        Self {
            intensity,
            settings,
            classifier: LineClassifier::formatting(),
        }
    }

    pub fn format(&self, text: &str) -> FormattedDocument {
        let lines: Vec<FormattedLine> = text.split('\n').map(|l| self.format_line(l)).collect();
        log::debug!(
            "formatted {} lines at intensity {} ({:?})",
            lines.len(),
            self.intensity.get(),
            self.settings.fixation_control
        );
        FormattedDocument { lines }
    }

    pub fn format_line(&self, line: &str) -> FormattedLine {
        if line.trim().is_empty() {
            return FormattedLine::Blank(line.to_string());
        }

        let class = self.classifier.classify(line);
        // Plain lines keep their edge whitespace as empty tokens.
        let (wrapper, source) = match class.kind {
            LineKind::Heading { .. } => (BlockWrapper::Heading, class.trimmed),
            LineKind::ListItem => (BlockWrapper::ListItem, class.trimmed),
            LineKind::Plain | LineKind::ShortText => (BlockWrapper::None, line),
        };

        let mut inlines = Vec::new();
        for (index, token) in split_tokens(source).enumerate() {
            if index > 0 {
                inlines.push(Inline::text(" "));
            }
            self.push_word(&mut inlines, token, index, class.kind);
        }

        FormattedLine::Block { wrapper, inlines }
    }

    fn effective_intensity(&self, kind: LineKind) -> u8 {
        if kind.is_heading() {
            self.intensity.get() + Intensity::HEADING_BOOST
        } else {
            self.intensity.get()
        }
    }

    fn push_word(&self, out: &mut Vec<Inline>, word: &str, index: usize, kind: LineKind) {
        if !self.settings.fixation_frequency.applies_to(index) || word.is_empty() {
            out.push(Inline::text(word));
            return;
        }

        let opacity = self.settings.opacity_level.as_fraction();
        let (fixation_style, rest_style) = match self.settings.fixation_control {
            FixationControl::Off => {
                out.push(Inline::text(word));
                return;
            }
            FixationControl::Highlight => (
                EmphasisStyle::Highlight { opacity },
                kind.is_heading().then_some(EmphasisStyle::Muted),
            ),
            FixationControl::Bold => (
                EmphasisStyle::Bold { opacity },
                matches!(kind, LineKind::Heading { .. } | LineKind::ListItem)
                    .then_some(EmphasisStyle::Plain),
            ),
        };

        let n = chars_to_bold(word.chars().count(), self.effective_intensity(kind));
        let (fixation, rest) = word.split_at(char_offset(word, n));

        out.push(Inline::emphasis(fixation_style, fixation));
        match rest_style {
            Some(style) => out.push(Inline::emphasis(style, rest)),
            None if !rest.is_empty() => out.push(Inline::text(rest)),
            None => {}
        }
    }
}

/// Formats `text` at the given intensity.
///
/// The result has one line per `\n`-separated input line; whitespace-only lines
/// are carried through unchanged.
pub fn format(text: &str, intensity: Intensity, settings: FormatSettings) -> FormattedDocument {
    BionicFormatter::new(intensity, settings).format(text)
}
