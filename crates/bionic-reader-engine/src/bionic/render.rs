use std::fmt::Write;

use html_escape::encode_text;

use super::fragment::{BlockWrapper, EmphasisStyle, FormattedDocument, FormattedLine, Inline};

/// Serializes a [`FormattedDocument`] into a string, one output line per document line.
pub trait Renderer {
    fn render_line(&self, line: &FormattedLine, out: &mut String);

    fn render(&self, doc: &FormattedDocument) -> String {
        let mut out = String::new();
        for (i, line) in doc.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.render_line(line, &mut out);
        }
        out
    }
}

/// Emits the markup vocabulary understood by the reading view.
///
/// All document text is HTML-escaped; the only tags in the output are the
/// emphasis runs and block wrappers introduced here.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub const HEADING_CLASS: &'static str = "text-lg font-semibold mb-2 mt-4";
    pub const LIST_ITEM_CLASS: &'static str = "ml-4 mb-1";

    fn render_inline(inline: &Inline, out: &mut String) {
        match inline {
            Inline::Text(text) => out.push_str(&encode_text(text)),
            Inline::Emphasis { style, text } => {
                let text = encode_text(text);
                let _ = match style {
                    EmphasisStyle::Bold { opacity } => write!(
                        out,
                        r#"<strong style="opacity: {opacity}; font-weight: 700;">{text}</strong>"#
                    ),
                    EmphasisStyle::Highlight { opacity } => write!(
                        out,
                        r#"<span class="bg-yellow-200" style="opacity: {opacity}">{text}</span>"#
                    ),
                    EmphasisStyle::Muted => {
                        write!(out, r#"<span class="text-gray-700">{text}</span>"#)
                    }
                    EmphasisStyle::Plain => write!(out, "<span>{text}</span>"),
                };
            }
        }
    }
}

impl Renderer for HtmlRenderer {
    fn render_line(&self, line: &FormattedLine, out: &mut String) {
        match line {
            FormattedLine::Blank(s) => out.push_str(s),
            FormattedLine::Block { wrapper, inlines } => {
                let class = match wrapper {
                    BlockWrapper::Heading => Some(Self::HEADING_CLASS),
                    BlockWrapper::ListItem => Some(Self::LIST_ITEM_CLASS),
                    BlockWrapper::None => None,
                };
                if let Some(class) = class {
                    let _ = write!(out, r#"<div class="{class}">"#);
                }
                for inline in inlines {
                    Self::render_inline(inline, out);
                }
                if class.is_some() {
                    out.push_str("</div>");
                }
            }
        }
    }
}

/// Drops all styling and returns the tokenized text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render_line(&self, line: &FormattedLine, out: &mut String) {
        out.push_str(&line.plain_text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(lines: Vec<FormattedLine>) -> FormattedDocument {
        FormattedDocument { lines }
    }

    #[test]
    fn bold_run_markup() {
        let d = doc(vec![FormattedLine::Block {
            wrapper: BlockWrapper::None,
            inlines: vec![
                Inline::emphasis(EmphasisStyle::Bold { opacity: 0.8 }, "ca"),
                Inline::text("t"),
            ],
        }]);
        assert_eq!(
            HtmlRenderer.render(&d),
            r#"<strong style="opacity: 0.8; font-weight: 700;">ca</strong>t"#
        );
    }

    #[test]
    fn list_block_wraps_line() {
        let d = doc(vec![FormattedLine::Block {
            wrapper: BlockWrapper::ListItem,
            inlines: vec![Inline::text("-"), Inline::text(" "), Inline::text("x")],
        }]);
        assert_eq!(HtmlRenderer.render(&d), r#"<div class="ml-4 mb-1">- x</div>"#);
    }

    #[test]
    fn source_markup_is_escaped() {
        let d = doc(vec![FormattedLine::Block {
            wrapper: BlockWrapper::None,
            inlines: vec![
                Inline::emphasis(EmphasisStyle::Highlight { opacity: 1.0 }, "<scr"),
                Inline::text("ipt>"),
            ],
        }]);
        assert_eq!(
            HtmlRenderer.render(&d),
            r#"<span class="bg-yellow-200" style="opacity: 1">&lt;scr</span>ipt&gt;"#
        );
    }

    #[test]
    fn blank_lines_are_verbatim_and_joined_with_newlines() {
        let d = doc(vec![
            FormattedLine::Blank("  ".into()),
            FormattedLine::Blank(String::new()),
        ]);
        assert_eq!(HtmlRenderer.render(&d), "  \n");
        assert_eq!(PlainRenderer.render(&d), "  \n");
    }

    #[test]
    fn plain_renderer_strips_markup() {
        let d = doc(vec![FormattedLine::Block {
            wrapper: BlockWrapper::Heading,
            inlines: vec![
                Inline::emphasis(EmphasisStyle::Bold { opacity: 1.0 }, "Ti"),
                Inline::emphasis(EmphasisStyle::Plain, "tle"),
            ],
        }]);
        assert_eq!(PlainRenderer.render(&d), "Title");
    }
}
