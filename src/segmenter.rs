//! Script segmentation.
//!
//! Raw script text is split into display segments: paragraphs (or lines, when
//! the script has no blank lines) separated by spacer rows, with long
//! paragraphs greedily wrapped so no text segment is wider than the configured
//! maximum line length.

use once_cell::sync::Lazy;
use regex::Regex;

/// Smallest line length accepted by the wrapper.
pub const MIN_LINE_LENGTH: usize = 1;

static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// One displayable unit of the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Trimmed text, at most `max_line_length` characters long.
    Text(String),
    /// Paragraph break rendered as blank space.
    Spacer,
}

impl Segment {
    pub fn is_spacer(&self) -> bool {
        matches!(self, Segment::Spacer)
    }

    /// Spacers and blank text rows are never landing targets for navigation.
    pub fn is_skip_target(&self) -> bool {
        match self {
            Segment::Spacer => true,
            Segment::Text(text) => text.trim().is_empty(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Segment::Text(text) => text,
            Segment::Spacer => "",
        }
    }
}

/// Split `text` into display segments no wider than `max_line_length`.
pub fn segment(text: &str, max_line_length: usize) -> Vec<Segment> {
    let max_line_length = max_line_length.max(MIN_LINE_LENGTH);
    let normalized = text.replace("\r\n", "\n");

    let parts: Vec<&str> = if PARAGRAPH_BREAK.is_match(&normalized) {
        PARAGRAPH_BREAK.split(&normalized).collect()
    } else if normalized.contains('\n') {
        normalized.split('\n').collect()
    } else {
        vec![normalized.as_str()]
    };

    let mut segments = Vec::with_capacity(parts.len() * 2);
    for (idx, part) in parts.iter().enumerate() {
        if idx > 0 {
            segments.push(Segment::Spacer);
        }
        segments.extend(wrap_part(part, max_line_length).into_iter().map(Segment::Text));
    }

    tracing::debug!(
        parts = parts.len(),
        segments = segments.len(),
        max_line_length,
        "Segmented script"
    );
    segments
}

/// Greedy word wrap of a single paragraph.
fn wrap_part(part: &str, max_line_length: usize) -> Vec<String> {
    let chars: Vec<char> = part.trim().chars().collect();
    let mut chunks = Vec::with_capacity(chars.len() / max_line_length + 1);
    let mut start = 0;

    while chars.len() - start > max_line_length {
        let window = &chars[start..=start + max_line_length];
        let break_at = window
            .iter()
            .rposition(|ch| ch.is_whitespace())
            .filter(|&pos| pos > 0);

        let (mut end, next) = match break_at {
            Some(pos) => (start + pos, start + pos + 1),
            None => (start + max_line_length, start + max_line_length),
        };
        while end > start && chars[end - 1].is_whitespace() {
            end -= 1;
        }
        chunks.push(chars[start..end].iter().collect());

        start = next;
        while start < chars.len() && chars[start].is_whitespace() {
            start += 1;
        }
    }

    chunks.push(chars[start..].iter().collect());
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(segments: &[Segment]) -> Vec<&str> {
        segments.iter().map(Segment::text).collect()
    }

    #[test]
    fn single_line_is_one_segment() {
        assert_eq!(
            segment("Hello world", 72),
            vec![Segment::Text("Hello world".to_string())]
        );
    }

    #[test]
    fn paragraphs_are_separated_by_spacers() {
        let segments = segment("Para one.\n\nPara two.", 200);
        assert_eq!(
            segments,
            vec![
                Segment::Text("Para one.".to_string()),
                Segment::Spacer,
                Segment::Text("Para two.".to_string()),
            ]
        );
    }

    #[test]
    fn long_runs_of_newlines_count_as_one_break() {
        let segments = segment("a\n\n\n\nb", 72);
        assert_eq!(texts(&segments), vec!["a", "", "b"]);
        assert!(segments[1].is_spacer());
    }

    #[test]
    fn single_newlines_split_when_no_paragraphs_exist() {
        let segments = segment("line one\nline two\nline three", 72);
        assert_eq!(segments.len(), 5);
        assert_eq!(texts(&segments), vec!["line one", "", "line two", "", "line three"]);
        assert!(segments[1].is_spacer() && segments[3].is_spacer());
    }

    #[test]
    fn paragraph_split_keeps_single_newlines_inside_parts() {
        let segments = segment("a\nb\n\nc", 72);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], Segment::Text("a\nb".to_string()));
    }

    #[test]
    fn crlf_input_is_normalized() {
        let segments = segment("one\r\n\r\ntwo", 72);
        assert_eq!(texts(&segments), vec!["one", "", "two"]);
    }

    #[test]
    fn empty_input_yields_single_empty_segment() {
        let segments = segment("", 72);
        assert_eq!(segments, vec![Segment::Text(String::new())]);
        assert!(segments[0].is_skip_target());
    }

    #[test]
    fn whitespace_only_paragraph_is_a_skip_target_but_not_a_spacer() {
        let segments = segment("first\n\n    \n\nsecond", 72);
        assert_eq!(segments.len(), 5);
        assert_eq!(segments[2], Segment::Text(String::new()));
        assert!(segments[2].is_skip_target());
        assert!(!segments[2].is_spacer());
    }

    #[test]
    fn hard_breaks_without_whitespace() {
        let text = "x".repeat(150);
        let segments = segment(&text, 72);
        let lengths: Vec<usize> = segments.iter().map(|s| s.text().chars().count()).collect();
        assert_eq!(lengths, vec![72, 72, 6]);
        assert!(segments.iter().all(|s| !s.is_spacer()));
    }

    #[test]
    fn wraps_at_last_whitespace_in_window() {
        let segments = segment("the quick brown fox jumps", 10);
        assert_eq!(texts(&segments), vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn whitespace_exactly_after_limit_is_consumed() {
        let segments = segment("abcde fghij", 5);
        assert_eq!(texts(&segments), vec!["abcde", "fghij"]);
    }

    #[test]
    fn leading_whitespace_in_window_forces_hard_break() {
        // Window "abcdefgh" has no interior whitespace.
        let segments = segment("abcdefgh ij", 7);
        assert_eq!(texts(&segments), vec!["abcdefg", "h ij"]);
    }

    #[test]
    fn no_text_segment_exceeds_limit() {
        let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
                    Supercalifragilisticexpialidocious words happen.\n\n\
                    Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";
        for limit in [1, 3, 8, 13, 40, 72] {
            for seg in segment(text, limit) {
                assert!(
                    seg.text().chars().count() <= limit,
                    "segment {seg:?} exceeds {limit}"
                );
            }
        }
    }

    #[test]
    fn multibyte_characters_are_counted_as_chars() {
        let text = "é".repeat(10);
        let segments = segment(&text, 4);
        assert_eq!(texts(&segments), vec!["éééé", "éééé", "éé"]);
    }

    #[test]
    fn spacer_is_never_first_and_wrapping_adds_none() {
        let text = format!("{}\n\n{}", "word ".repeat(40), "tail");
        let segments = segment(&text, 20);
        assert!(!segments[0].is_spacer());
        assert_eq!(segments.iter().filter(|s| s.is_spacer()).count(), 1);
    }

    #[test]
    fn words_round_trip_through_segmentation() {
        let text = "alpha beta gamma delta epsilon\n\nzeta eta theta iota kappa lambda";
        let segments = segment(text, 12);
        let rebuilt = segments
            .iter()
            .map(|s| if s.is_spacer() { "|" } else { s.text() })
            .collect::<Vec<_>>()
            .join(" ");
        let expected_words: Vec<&str> = text.split_whitespace().collect();
        let rebuilt_words: Vec<&str> = rebuilt.split_whitespace().filter(|w| *w != "|").collect();
        assert_eq!(rebuilt_words, expected_words);
        assert_eq!(rebuilt.matches('|').count(), 1);
    }

    #[test]
    fn megabyte_paragraph_wraps_in_linear_time() {
        let text = "word ".repeat(200_000);
        let started = std::time::Instant::now();
        let segments = segment(&text, 72);
        let elapsed = started.elapsed();

        assert!(
            elapsed < std::time::Duration::from_secs(5),
            "wrapping took {elapsed:?}"
        );
        assert!(segments.iter().all(|s| s.text().chars().count() <= 72));
        let words: usize = segments.iter().map(|s| s.text().split_whitespace().count()).sum();
        assert_eq!(words, 200_000);
    }

    #[test]
    fn zero_limit_is_clamped() {
        let segments = segment("ab", 0);
        assert_eq!(texts(&segments), vec!["a", "b"]);
    }
}
