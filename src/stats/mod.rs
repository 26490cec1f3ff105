//! Word, character and reading-time counts for the editor footer, plus title extraction.

pub(crate) const WORDS_PER_MINUTE: usize = 250;

const TITLE_PREFIX: &str = "# ";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct DocumentStats {
    pub words: usize,
    pub characters: usize,
    pub minutes: usize,
}

impl DocumentStats {
    pub(crate) fn of(text: &str) -> Self {
        let words = text
            .split(char::is_whitespace)
            .filter(|w| w.chars().any(is_word_char))
            .count();
        let characters = text.chars().filter(|c| !c.is_whitespace()).count();

        Self {
            words,
            characters,
            minutes: words.div_ceil(WORDS_PER_MINUTE),
        }
    }

    pub(crate) fn words_label(&self) -> String {
        count_label(self.words, "word", "words")
    }

    pub(crate) fn characters_label(&self) -> String {
        count_label(self.characters, "character", "characters")
    }

    pub(crate) fn minutes_label(&self) -> String {
        count_label(self.minutes, "minute", "minutes")
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn count_label(n: usize, singular: &str, plural: &str) -> String {
    format!("{n} {}", if n == 1 { singular } else { plural })
}

fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or_default()
}

/// Title from a leading `# ` line, empty otherwise.
pub(crate) fn derive_title(text: &str) -> String {
    first_line(text)
        .strip_prefix(TITLE_PREFIX)
        .map(|t| t.trim_end_matches('\r').to_string())
        .unwrap_or_default()
}

/// Document text without its title line.
pub(crate) fn body_without_title(text: &str) -> &str {
    if !first_line(text).starts_with(TITLE_PREFIX) {
        return text;
    }
    match text.find('\n') {
        Some(i) => &text[i + 1..],
        None => "",
    }
}

pub(crate) fn page_title(title: &str) -> String {
    format!("{title} - notes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_empty() {
        let s = DocumentStats::of("");
        assert_eq!(s, DocumentStats::default());
        assert_eq!(s.words_label(), "0 words");
        assert_eq!(s.minutes_label(), "0 minutes");
    }

    #[test]
    fn test_stats_counts_only_pieces_with_word_chars() {
        let s = DocumentStats::of("# Hello,  world -- ok\n\t!!");
        // "#", "--" and "!!" have no word characters.
        assert_eq!(s.words, 3);
        assert_eq!(s.characters, 18);
        assert_eq!(s.minutes, 1);
    }

    #[test]
    fn test_stats_singular_labels() {
        let s = DocumentStats::of("a");
        assert_eq!(s.words_label(), "1 word");
        assert_eq!(s.characters_label(), "1 character");
        assert_eq!(s.minutes_label(), "1 minute");
    }

    #[test]
    fn test_minutes_round_up() {
        let text = "w ".repeat(251);
        let s = DocumentStats::of(&text);
        assert_eq!(s.words, 251);
        assert_eq!(s.minutes, 2);
    }

    #[test]
    fn test_derive_title() {
        assert_eq!(derive_title("# My note\nbody"), "My note");
        assert_eq!(derive_title("# \nbody"), "");
        assert_eq!(derive_title("#No space"), "");
        assert_eq!(derive_title("plain\n# later"), "");
        assert_eq!(derive_title(""), "");
    }

    #[test]
    fn test_body_without_title() {
        assert_eq!(body_without_title("# T\nline 1\nline 2"), "line 1\nline 2");
        assert_eq!(body_without_title("# T"), "");
        assert_eq!(body_without_title("no title\nmore"), "no title\nmore");
    }

    #[test]
    fn test_page_title() {
        assert_eq!(page_title("Ideas"), "Ideas - notes");
        assert_eq!(page_title(""), " - notes");
    }
}
