use bionic_reader_engine::{
    FormatSettings, FormattedLine, HeadingEntry, Intensity, ListBlock, ParagraphEntry, analyze,
    format,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn heading_paragraph_and_list() {
    let report = analyze(
        "HELLO WORLD\nThis is a simple paragraph with enough words to count.\n- item one\n- item two",
    );

    assert_eq!(
        report.headings,
        vec![HeadingEntry {
            level: 1,
            text: "HELLO WORLD".into(),
            position: 0,
        }]
    );
    assert_eq!(
        report.paragraphs,
        vec![ParagraphEntry {
            text: "This is a simple paragraph with enough words to count.".into(),
            position: 1,
            word_count: 10,
        }]
    );
    assert_eq!(
        report.lists,
        vec![ListBlock {
            items: vec!["- item one".into(), "- item two".into()],
            position: 2,
        }]
    );
    assert_eq!(report.total_words, 18);
    assert_eq!(report.reading_time, 1);
}

#[test]
fn short_plain_line_is_outlined_out_but_still_formatted() {
    let text = "Some intro text that is long enough.\nshort line\nMore body text that is long enough.";

    let report = analyze(text);
    assert_eq!(report.paragraphs.len(), 2);
    assert!(report.paragraphs.iter().all(|p| p.text != "short line"));
    assert_eq!(report.total_words, 7 + 2 + 7);

    let doc = format(text, Intensity::default(), FormatSettings::default());
    let FormattedLine::Block { inlines, .. } = &doc.lines[1] else {
        panic!("short line should be formatted");
    };
    assert!(inlines.len() > 3);
    assert_eq!(doc.lines[1].plain_text(), "short line");
}

#[test]
fn total_words_counts_every_non_blank_line() {
    let text = "# Heading here\n\n- a list item\nok\n  \nA regular paragraph of text.\n";
    let expected: usize = text
        .split('\n')
        .map(|l| l.split_whitespace().count())
        .sum();

    let report = analyze(text);
    assert_eq!(report.total_words, expected);
    assert_eq!(report.total_words, 3 + 4 + 1 + 5);
}

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(200, 1)]
#[case(201, 2)]
#[case(450, 3)]
fn reading_time_rounds_up(#[case] words: usize, #[case] minutes: usize) {
    let text = vec!["word"; words].join(" ");
    let report = analyze(&text);
    assert_eq!(report.total_words, words);
    assert_eq!(report.reading_time, minutes);
}

#[test]
fn outline_preview_reports_remainder() {
    let text = (1..=7)
        .map(|i| format!("## Section {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    let report = analyze(&text);

    let (shown, rest) = report.outline_preview(5);
    assert_eq!(shown.len(), 5);
    assert_eq!(rest, 2);
    assert_eq!(shown[4].text, "Section 5");
    assert_eq!(shown[4].level, 2);
}

#[test]
fn analysis_is_deterministic() {
    let text = "INTRO\n1. First Step\n2) second step here\nPlain words go on and on.";
    assert_eq!(analyze(text), analyze(text));
}
