//! The text side of the overview view: the `DAY<N>：title | details` line parser, the keyword
//! highlighter and the `[label](url)` link extractor.
mod highlight;
mod links;
mod parse;

pub use highlight::{
    highlight, highlight_phrases, style, KeywordGroup, KeywordTable, PhraseTable, Styled,
};
pub use links::{extract_links, Segment};
pub use parse::{parse_line, parse_overview, OverviewLine, OverviewLines, OPEN_ENDED_MARKER};
