use serde::{Deserialize, Serialize};

/// The style tags used by the built-in tables. Renderers map them onto colors.
pub mod style {
    pub const BRAND: &str = "brand";
    pub const ACCENT: &str = "accent";
    pub const MUTED: &str = "muted";
    pub const ALERT: &str = "alert";
}

/// A piece of highlighted text. Concatenating the `text` of every piece gives back the input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct Styled<'a> {
    pub text: &'a str,
    pub style: Option<&'a str>,
}

impl<'a> Styled<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self { text, style: None }
    }

    pub fn styled(text: &'a str, style: &'a str) -> Self {
        Self {
            text,
            style: Some(style),
        }
    }
}

/// A set of words that share a style tag.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct KeywordGroup {
    pub words: Vec<String>,
    pub style: String,
}

impl KeywordGroup {
    pub fn new<S, I>(style: impl Into<String>, words: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            style: style.into(),
        }
    }

    /// The first word of this group found in `text`. Empty words never match.
    fn find_in(&self, text: &str) -> Option<&str> {
        self.words
            .iter()
            .map(String::as_str)
            .find(|w| !w.is_empty() && text.contains(w))
    }
}

/// An ordered list of keyword groups. When a token matches several groups, the earliest wins.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct KeywordTable {
    groups: Vec<KeywordGroup>,
}

impl KeywordTable {
    pub fn new(groups: impl IntoIterator<Item = KeywordGroup>) -> Self {
        Self {
            groups: groups.into_iter().collect(),
        }
    }

    pub fn groups(&self) -> &[KeywordGroup] {
        &self.groups
    }

    /// The table used for the day titles of the overview.
    pub fn overview_titles() -> Self {
        Self::new([
            KeywordGroup::new(style::BRAND, ["登船", "海洋贊禮號", "海上巡航日", "下船"]),
            KeywordGroup::new(
                style::ACCENT,
                ["抵達", "樟宜機場周邊", "新加坡", "檳城", "普吉島"],
            ),
            KeywordGroup::new(style::MUTED, ["停靠"]),
        ])
    }

    fn style_of(&self, token: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|g| g.find_in(token).is_some())
            .map(|g| g.style.as_str())
    }
}

/// Splits `text` into alternating runs of whitespace and non-whitespace. Each non-whitespace run
/// that contains a word of `table` takes the style of the first matching group; whitespace runs are
/// always plain.
pub fn highlight<'a>(text: &'a str, table: &'a KeywordTable) -> Vec<Styled<'a>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;
    for (ix, c) in text.char_indices() {
        let space = c.is_whitespace();
        if in_space.is_some_and(|s| s != space) {
            out.push(style_run(&text[start..ix], in_space == Some(true), table));
            start = ix;
        }
        in_space = Some(space);
    }
    if start < text.len() {
        out.push(style_run(&text[start..], in_space == Some(true), table));
    }
    out
}

fn style_run<'a>(run: &'a str, whitespace: bool, table: &'a KeywordTable) -> Styled<'a> {
    if whitespace {
        return Styled::plain(run);
    }
    match table.style_of(run) {
        Some(style) => Styled::styled(run, style),
        None => Styled::plain(run),
    }
}

/// Groups of whole phrases, in priority order, used to emphasize itinerary description lines.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PhraseTable {
    groups: Vec<KeywordGroup>,
}

impl PhraseTable {
    pub fn new(groups: impl IntoIterator<Item = KeywordGroup>) -> Self {
        Self {
            groups: groups.into_iter().collect(),
        }
    }

    /// Reminders first, then transit routes, then landmarks.
    pub fn itinerary_descriptions() -> Self {
        Self::new([
            KeywordGroup::new(
                style::ALERT,
                [
                    "建議 06:00-06:30AM 抵達機場",
                    "19:45 & 20:45戶外天空樹燈光秀",
                    "22:00前一定要上船",
                    "18:00前回郵輪上",
                ],
            ),
            KeywordGroup::new(
                style::BRAND,
                [
                    "SMRT機場➔丹那美拉(轉綠線)➔政府大廈",
                    "SMRT政府大廈➔萊佛士坊",
                    "SMRT直落亞逸➔海灣舫",
                    "SMRT海灣舫➔濱海灣(轉紅線)➔政府大廈",
                    "SMRT政府大廈➔濱海南碼頭",
                    "SMRT政府大廈➔南華園(轉紫線)➔港灣",
                    "轉 單軌電車Vivo City➔resorts World",
                    "單軌電車resorts World➔Vivo City",
                    "SMRT濱海灣➔政府大廈",
                    "轉 SMRT港灣➔克拉碼頭",
                    "SMRT濱海南碼頭➔政府大廈(轉綠)➔丹那美拉➔機場",
                ],
            ),
            KeywordGroup::new(style::ACCENT, ["安德烈教堂"]),
        ])
    }
}

/// Emphasizes the first occurrence of one phrase in `line`. The phrase comes from the first group
/// that has any phrase in the line; the rest of the line stays plain.
pub fn highlight_phrases<'a>(line: &'a str, table: &'a PhraseTable) -> Vec<Styled<'a>> {
    let found = table
        .groups
        .iter()
        .find_map(|g| g.find_in(line).map(|phrase| (phrase, g.style.as_str())));

    let Some((phrase, style)) = found else {
        return if line.is_empty() {
            Vec::new()
        } else {
            vec![Styled::plain(line)]
        };
    };
    let Some((before, after)) = line.split_once(phrase) else {
        return vec![Styled::plain(line)];
    };
    // `phrase` borrows from the table; point the styled piece at the line itself instead.
    let at = before.len();
    let mut out = Vec::with_capacity(3);
    if !before.is_empty() {
        out.push(Styled::plain(before));
    }
    out.push(Styled::styled(&line[at..at + phrase.len()], style));
    if !after.is_empty() {
        out.push(Styled::plain(after));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(pieces: &[Styled<'_>]) -> String {
        pieces.iter().map(|p| p.text).collect()
    }

    fn table() -> KeywordTable {
        KeywordTable::new([
            KeywordGroup::new("ship", ["board", "cruise"]),
            KeywordGroup::new("place", ["Singapore", "cruise"]),
        ])
    }

    #[test]
    fn test_substring_match_styles_whole_token() {
        let table = table();
        let out = highlight("Arrive Singapore!", &table);
        assert_eq!(
            out,
            vec![
                Styled::plain("Arrive"),
                Styled::plain(" "),
                Styled::styled("Singapore!", "place"),
            ]
        );
    }

    #[test]
    fn test_first_group_wins() {
        let table = table();
        let out = highlight("cruise", &table);
        assert_eq!(out, vec![Styled::styled("cruise", "ship")]);
    }

    #[test]
    fn test_whitespace_preserved() {
        let table = table();
        let text = "  board\tthe   cruise \n";
        let out = highlight(text, &table);
        assert_eq!(joined(&out), text);
        assert_eq!(out[0], Styled::plain("  "));
        assert_eq!(out[1], Styled::styled("board", "ship"));
        assert_eq!(out[2], Styled::plain("\t"));
        assert!(out.iter().filter(|p| p.text.trim().is_empty()).all(|p| p.style.is_none()));
    }

    #[test]
    fn test_empty_text() {
        let table = table();
        assert!(highlight("", &table).is_empty());
    }

    #[test]
    fn test_overview_titles_table() {
        let table = KeywordTable::overview_titles();
        let out = highlight("登船 🚢 海洋贊禮號", &table);
        assert_eq!(out[0].style, Some(style::BRAND));
        assert_eq!(out[2].style, None);
        assert_eq!(out[4].style, Some(style::BRAND));

        let out = highlight("停靠🇲🇾檳城", &table);
        // "檳城" is in an earlier group than "停靠".
        assert_eq!(out, vec![Styled::styled("停靠🇲🇾檳城", style::ACCENT)]);
    }

    #[test]
    fn test_empty_keyword_never_matches() {
        let table = KeywordTable::new([KeywordGroup::new("x", [""])]);
        assert_eq!(highlight("word", &table), vec![Styled::plain("word")]);
    }

    #[test]
    fn test_phrase_priority() {
        let table = PhraseTable::new([
            KeywordGroup::new("alert", ["be back by 6"]),
            KeywordGroup::new("brand", ["Line A"]),
        ]);
        let out = highlight_phrases("Take Line A, be back by 6 pm", &table);
        assert_eq!(
            out,
            vec![
                Styled::plain("Take Line A, "),
                Styled::styled("be back by 6", "alert"),
                Styled::plain(" pm"),
            ]
        );
    }

    #[test]
    fn test_phrase_absent() {
        let table = PhraseTable::itinerary_descriptions();
        assert_eq!(
            highlight_phrases("nothing here", &table),
            vec![Styled::plain("nothing here")]
        );
        assert!(highlight_phrases("", &table).is_empty());
    }

    #[test]
    fn test_phrase_at_start_keeps_rest() {
        let table = PhraseTable::itinerary_descriptions();
        let line = "🚇 SMRT政府大廈➔萊佛士坊 then walk";
        let out = highlight_phrases(line, &table);
        assert_eq!(joined(&out), line);
        assert_eq!(out[1].style, Some(style::BRAND));
        assert_eq!(out[1].text, "SMRT政府大廈➔萊佛士坊");
    }
}
