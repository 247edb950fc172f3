use html_escape::encode_double_quoted_attribute;

use super::{
    fragment::FormattedDocument,
    render::{HtmlRenderer, Renderer},
    settings::{ColumnWidth, ReadingSettings, Theme},
};

/// Smallest font size the reading view will use, in pixels.
pub const MIN_FONT_SIZE: u8 = 14;

impl Theme {
    /// Background and text colors.
    pub fn colors(self) -> (&'static str, &'static str) {
        match self {
            Theme::Light => ("#ffffff", "#1f2937"),
            Theme::Sepia => ("#f4ecd8", "#5b4636"),
            Theme::Slate => ("#f1f5f9", "#1e293b"),
            Theme::Dark => ("#111827", "#e5e7eb"),
        }
    }
}

impl ColumnWidth {
    /// CSS `max-width` value.
    pub fn max_width(self) -> &'static str {
        match self {
            ColumnWidth::Narrow => "600px",
            ColumnWidth::Medium => "800px",
            ColumnWidth::Wide => "1000px",
            ColumnWidth::Full => "none",
        }
    }
}

/// Inline style for the text column.
pub fn column_style(settings: &ReadingSettings) -> String {
    let (background, color) = settings.theme.colors();
    let font_size = settings.text_size.saturating_sub(2).max(MIN_FONT_SIZE);
    format!(
        "background: {background}; color: {color}; max-width: {}; margin: 0 auto; \
         font-size: {font_size}px; font-family: {}; line-height: {}; letter-spacing: {}px;",
        settings.column_width.max_width(),
        settings.font_family,
        settings.line_spacing,
        settings.letter_spacing,
    )
}

/// Renders a standalone HTML page for `doc` using the presentation settings.
pub fn render_page(doc: &FormattedDocument, settings: &ReadingSettings) -> String {
    let body = HtmlRenderer.render(doc).replace('\n', "<br>\n");
    let style = column_style(settings);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n</head>\n<body>\n\
         <div style=\"{}\">\n{body}\n</div>\n</body>\n</html>\n",
        encode_double_quoted_attribute(&style)
    )
}
