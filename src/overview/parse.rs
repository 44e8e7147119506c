use regex::Regex;
use serde::Serialize;
use std::str::Lines;
use std::sync::LazyLock;

/// Appended to the label of an open-ended day, e.g. `DAY 8~` for "day 8 and after".
pub const OPEN_ENDED_MARKER: char = '~';

/// `DAY<N>` followed by an ASCII or full-width colon, the title, then optional `|` and details.
static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^DAY\s*([0-9]+)[：:]\s*([^|]*)(?:\|\s*(.*))?$").unwrap()
});

/// The first `[tag]` in a title.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]").unwrap());

/// Detail items are separated by ASCII or full-width semicolons.
const DETAIL_SEPARATORS: [char; 2] = [';', '；'];

/// One parsed line of the overview text.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct OverviewLine {
    /// `DAY <digits>`, with `~` appended when the digits contain an `8`.
    pub day_label: String,
    /// The bracketed tag of the title, if any.
    pub tag: Option<String>,
    /// The title with the tag removed.
    pub title_text: String,
    /// The `;`-separated details, trimmed, in order, without empty entries.
    pub detail_lines: Vec<String>,
}

/// Parses a single overview line. Lines that do not start with `DAY<N>:` yield `None`.
pub fn parse_line(line: &str) -> Option<OverviewLine> {
    let caps = LINE_RE.captures(line)?;
    let digits = caps.get(1)?.as_str();

    // The sample trip marks its trailing "day 8 and later" entry this way. The rule is literal: any
    // day number containing the digit 8 gets the marker.
    let day_label = if digits.contains('8') {
        format!("DAY {digits}{OPEN_ENDED_MARKER}")
    } else {
        format!("DAY {digits}")
    };

    let title_raw = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
    let (tag, title_text) = match TAG_RE.captures(title_raw) {
        Some(tag_caps) => {
            let tag = tag_caps
                .get(1)
                .map(|m| m.as_str().trim().to_string())
                .filter(|t| !t.is_empty());
            let title = TAG_RE.replace(title_raw, "").trim().to_string();
            (tag, title)
        }
        None => (None, title_raw.to_string()),
    };

    let detail_lines = caps
        .get(3)
        .map(|m| {
            m.as_str()
                .split(DETAIL_SEPARATORS)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Some(OverviewLine {
        day_label,
        tag,
        title_text,
        detail_lines,
    })
}

/// Parses the full overview text. The returned iterator is lazy and can be cloned to start over.
pub fn parse_overview(text: &str) -> OverviewLines<'_> {
    OverviewLines {
        lines: text.lines(),
    }
}

/// The parsed lines of an overview text; blank and non-matching lines are skipped.
#[derive(Debug, Clone)]
pub struct OverviewLines<'a> {
    lines: Lines<'a>,
}

impl Iterator for OverviewLines<'_> {
    type Item = OverviewLine;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(parsed) = parse_line(line) {
                return Some(parsed);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_line() {
        let line = parse_line("DAY1：Arrive in Singapore [free time] | Check in; Merlion ；  ;Dinner")
            .unwrap();
        assert_eq!(line.day_label, "DAY 1");
        assert_eq!(line.tag.as_deref(), Some("free time"));
        assert_eq!(line.title_text, "Arrive in Singapore");
        assert_eq!(line.detail_lines, vec!["Check in", "Merlion", "Dinner"]);
    }

    #[test]
    fn test_two_details() {
        let line = parse_line("DAY3:Board the ship|d1;d2").unwrap();
        assert_eq!(line.title_text, "Board the ship");
        assert_eq!(line.detail_lines, vec!["d1", "d2"]);
        assert!(line.tag.is_none());
    }

    #[test]
    fn test_no_details() {
        let line = parse_line("DAY6：Sea day [free time]").unwrap();
        assert_eq!(line.title_text, "Sea day");
        assert!(line.detail_lines.is_empty());
    }

    #[test]
    fn test_case_insensitive_and_spaced() {
        let line = parse_line("day 12: Extra day").unwrap();
        assert_eq!(line.day_label, "DAY 12");
        assert_eq!(line.title_text, "Extra day");
    }

    #[test]
    fn test_non_matching_lines() {
        assert!(parse_line("Arrival: somewhere").is_none());
        assert!(parse_line("DAY: no number").is_none());
        assert!(parse_line("DAY8~: marker in the source").is_none());
        assert!(parse_line("   DAY1: leading spaces").is_none());
    }

    #[test]
    fn test_open_ended_marker() {
        assert_eq!(parse_line("DAY8：More").unwrap().day_label, "DAY 8~");
        assert_eq!(parse_line("DAY18：More").unwrap().day_label, "DAY 18~");
        assert_eq!(parse_line("DAY7：Last").unwrap().day_label, "DAY 7");
        assert_eq!(parse_line("DAY 80：x").unwrap().day_label, "DAY 80~");
    }

    #[test]
    fn test_empty_tag_is_dropped() {
        let line = parse_line("DAY2：Park [] visit").unwrap();
        assert!(line.tag.is_none());
        assert_eq!(line.title_text, "Park  visit");
    }

    #[test]
    fn test_only_first_tag_is_removed() {
        let line = parse_line("DAY2：[a] Park [b]").unwrap();
        assert_eq!(line.tag.as_deref(), Some("a"));
        assert_eq!(line.title_text, "Park [b]");
    }

    #[test]
    fn test_links_survive_in_details() {
        let line = parse_line("DAY1：Arrive | Hotel [lyf](https://example.com/?a=1); Walk").unwrap();
        assert_eq!(
            line.detail_lines,
            vec!["Hotel [lyf](https://example.com/?a=1)", "Walk"]
        );
    }

    #[test]
    fn test_overview_skips_blank_and_invalid() {
        let text = "DAY1: One | a\n\n   \nnot a day\nDAY2: Two\r\nDAY3: Three | b; c\n";
        let lines: Vec<_> = parse_overview(text).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].title_text, "Two");
        assert_eq!(lines[2].detail_lines, vec!["b", "c"]);
    }

    #[test]
    fn test_overview_restartable() {
        let parsed = parse_overview("DAY1: One\nDAY2: Two");
        let first: Vec<_> = parsed.clone().collect();
        let second: Vec<_> = parsed.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
