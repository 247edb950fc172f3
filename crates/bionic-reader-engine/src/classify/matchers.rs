use std::sync::OnceLock;

use regex::Regex;

/// A named line pattern. Matchers are evaluated against the trimmed line.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
}

impl Matcher {
    pub fn test(&self, trimmed: &str) -> bool {
        (self.matches)(trimmed)
    }
}

/// Heading patterns in priority order.
pub const HEADING_MATCHERS: [Matcher; 4] = [
    Matcher {
        name: "all_caps",
        matches: is_all_caps,
    },
    Matcher {
        name: "numbered",
        matches: is_numbered_heading,
    },
    Matcher {
        name: "title_case",
        matches: is_title_case,
    },
    Matcher {
        name: "markdown",
        matches: is_markdown_heading,
    },
];

/// List item patterns in priority order.
pub const LIST_MATCHERS: [Matcher; 2] = [
    Matcher {
        name: "bullet",
        matches: is_bullet_item,
    },
    Matcher {
        name: "enumerated",
        matches: is_enumerated_item,
    },
];

/// Returns the first matcher in `table` that accepts `trimmed`.
pub fn first_match<'t>(table: &'t [Matcher], trimmed: &str) -> Option<&'t Matcher> {
    table.iter().find(|m| m.test(trimmed))
}

fn cached(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("Invalid classifier regex"))
}

/// Letters and spaces only, all uppercase, at least two characters.
pub fn is_all_caps(trimmed: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"^[A-Z][A-Z\s]+$").is_match(trimmed)
}

/// `1. Introduction`
pub fn is_numbered_heading(trimmed: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"^[0-9]+\.\s").is_match(trimmed)
}

/// `Getting Started` or `Getting Started:`
pub fn is_title_case(trimmed: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"^[A-Z][a-z]+(?:\s[A-Z][a-z]+)*:?$").is_match(trimmed)
}

/// One to six `#` followed by whitespace.
pub fn is_markdown_heading(trimmed: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"^#{1,6}\s").is_match(trimmed)
}

pub fn is_bullet_item(trimmed: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"^[•\-\*]\s").is_match(trimmed)
}

/// An integer followed by `.`, `)` or whitespace.
pub fn is_enumerated_item(trimmed: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"^[0-9]+[.)\s]").is_match(trimmed)
}

/// Strips a leading run of up to six `#` and any whitespace after it.
pub fn strip_heading_marker(trimmed: &str) -> &str {
    let hashes = trimmed.bytes().take_while(|&b| b == b'#').count().min(6);
    if hashes == 0 {
        return trimmed;
    }
    trimmed[hashes..].trim_start()
}

/// Level from the leading `#` run, capped at six. Lines without markers are level 1.
pub fn heading_level(trimmed: &str) -> u8 {
    match trimmed.bytes().take_while(|&b| b == b'#').count() {
        0 => 1,
        n => n.min(6) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("HELLO WORLD", true)]
    #[case("CHAPTER ONE", true)]
    #[case("A", false)]
    #[case("HELLO, WORLD", false)]
    #[case("Hello World", false)]
    #[case("NASA2024", false)]
    fn all_caps(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_all_caps(line), expected);
    }

    #[rstest]
    #[case("1. Introduction", true)]
    #[case("12. Results and discussion", true)]
    #[case("1.Introduction", false)]
    #[case("1) Introduction", false)]
    fn numbered_heading(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_numbered_heading(line), expected);
    }

    #[rstest]
    #[case("Getting Started", true)]
    #[case("Summary:", true)]
    #[case("Getting started", false)]
    #[case("Getting  Started", false)]
    #[case("I Am", false)]
    fn title_case(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_title_case(line), expected);
    }

    #[rstest]
    #[case("# Title", true)]
    #[case("###### Deep", true)]
    #[case("####### Too deep", false)]
    #[case("#hashtag", false)]
    fn markdown_heading(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_markdown_heading(line), expected);
    }

    #[rstest]
    #[case("- item", true)]
    #[case("* item", true)]
    #[case("• item", true)]
    #[case("-item", false)]
    #[case("— item", false)]
    fn bullet_item(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_bullet_item(line), expected);
    }

    #[rstest]
    #[case("1. first", true)]
    #[case("2) second", true)]
    #[case("3 third", true)]
    #[case("42nd street", false)]
    fn enumerated_item(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_enumerated_item(line), expected);
    }

    #[test]
    fn first_match_respects_table_order() {
        let m = first_match(&HEADING_MATCHERS, "1. Introduction").unwrap();
        assert_eq!(m.name, "numbered");

        let m = first_match(&LIST_MATCHERS, "1. something else entirely").unwrap();
        assert_eq!(m.name, "enumerated");

        assert!(first_match(&HEADING_MATCHERS, "just some words").is_none());
    }

    #[rstest]
    #[case("# Title", "Title")]
    #[case("###   Spaced", "Spaced")]
    #[case("HELLO WORLD", "HELLO WORLD")]
    fn strips_heading_marker(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(strip_heading_marker(line), expected);
    }

    #[rstest]
    #[case("# One", 1)]
    #[case("### Three", 3)]
    #[case("INTRODUCTION", 1)]
    fn level_from_markers(#[case] line: &str, #[case] expected: u8) {
        assert_eq!(heading_level(line), expected);
    }
}
