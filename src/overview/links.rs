use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());

/// A piece of free text: either literal text or a `[label](url)` link.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Segment {
    Text { text: String },
    Link { label: String, url: String },
}

impl Segment {
    pub fn text(s: impl Into<String>) -> Self {
        Segment::Text { text: s.into() }
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Segment::Link {
            label: label.into(),
            url: url.into(),
        }
    }

    /// The visible text: the literal text, or the label of a link.
    pub fn display_text(&self) -> &str {
        match self {
            Segment::Text { text } => text,
            Segment::Link { label, .. } => label,
        }
    }
}

/// Splits `text` into literal text and links. Anything that is not a complete `[label](url)` stays
/// literal text, and no empty text segments are produced.
pub fn extract_links(text: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut last = 0;
    for caps in LINK_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            out.push(Segment::text(&text[last..whole.start()]));
        }
        let label = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let url = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        out.push(Segment::link(label, url));
        last = whole.end();
    }
    if last < text.len() {
        out.push(Segment::text(&text[last..]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(segments: &[Segment]) -> String {
        segments.iter().map(Segment::display_text).collect()
    }

    #[test]
    fn test_single_link() {
        let out = extract_links("see [here](http://x) now");
        assert_eq!(
            out,
            vec![
                Segment::text("see "),
                Segment::link("here", "http://x"),
                Segment::text(" now"),
            ]
        );
        assert_eq!(visible(&out), "see here now");
    }

    #[test]
    fn test_no_links() {
        assert_eq!(extract_links("plain"), vec![Segment::text("plain")]);
        assert!(extract_links("").is_empty());
    }

    #[test]
    fn test_malformed_is_literal() {
        let text = "a [broken](link and [open] text";
        assert_eq!(extract_links(text), vec![Segment::text(text)]);
    }

    #[test]
    fn test_adjacent_links() {
        let out = extract_links("[a](1)[b](2)");
        assert_eq!(out, vec![Segment::link("a", "1"), Segment::link("b", "2")]);
    }

    #[test]
    fn test_sample_hotel_link() {
        let out = extract_links(
            "入住飯店 [lyf funan](https://www.google.com/maps/search/?api=1&query=lyf+Funan+Singapore)",
        );
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], Segment::text("入住飯店 "));
        assert_eq!(
            out[1],
            Segment::link(
                "lyf funan",
                "https://www.google.com/maps/search/?api=1&query=lyf+Funan+Singapore"
            )
        );
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&Segment::link("a", "b")).unwrap();
        assert_eq!(json, r#"{"kind":"link","label":"a","url":"b"}"#);
    }
}
