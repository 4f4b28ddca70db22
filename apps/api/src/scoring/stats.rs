//! Text statistics — first stage of the rule-based pipeline.
//!
//! Everything here is a pure function of the raw resume text. Empty input is
//! valid and produces all-zero statistics; no stage downstream divides by a
//! raw count without flooring the denominator at 1.

use once_cell::sync::Lazy;
use regex::Regex;

/// Word-like tokens: alphanumeric runs plus the characters that appear inside
/// skill names ("c++", "c#", "node.js", "ci-cd").
static WORD_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9+#.\-]+").unwrap());

/// Lines longer than this are counted against clarity.
pub const LONG_LINE_CHARS: usize = 120;

const BULLET_GLYPHS: [char; 3] = ['-', '*', '•'];

/// Derived line/word/sentence statistics for one resume text.
#[derive(Debug, Clone, Default)]
pub struct TextStats {
    /// Non-empty trimmed lines, in document order.
    pub lines: Vec<String>,
    /// Subset of `lines` whose first character is a bullet glyph.
    pub bullet_lines: Vec<String>,
    /// How many lines exceed [`LONG_LINE_CHARS`].
    pub long_line_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_words_per_sentence: f64,
}

impl TextStats {
    /// bullet lines / total lines, 0.0 when there are no lines.
    pub fn bullet_ratio(&self) -> f64 {
        self.bullet_lines.len() as f64 / self.lines.len().max(1) as f64
    }

    /// long lines / total lines, 0.0 when there are no lines.
    pub fn long_line_ratio(&self) -> f64 {
        self.long_line_count as f64 / self.lines.len().max(1) as f64
    }
}

/// Computes all text statistics in one pass over the input.
pub fn compute_stats(text: &str) -> TextStats {
    let lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    let bullet_lines: Vec<String> = lines
        .iter()
        .filter(|l| l.starts_with(BULLET_GLYPHS))
        .cloned()
        .collect();

    let long_line_count = lines
        .iter()
        .filter(|l| l.chars().count() > LONG_LINE_CHARS)
        .count();

    let word_count = WORD_TOKEN.find_iter(text).count();

    let sentence_count = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();

    let avg_words_per_sentence = word_count as f64 / sentence_count.max(1) as f64;

    TextStats {
        lines,
        bullet_lines,
        long_line_count,
        word_count,
        sentence_count,
        avg_words_per_sentence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_zero_stats() {
        let stats = compute_stats("");
        assert!(stats.lines.is_empty());
        assert!(stats.bullet_lines.is_empty());
        assert_eq!(stats.long_line_count, 0);
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.sentence_count, 0);
        assert_eq!(stats.avg_words_per_sentence, 0.0);
    }

    #[test]
    fn test_blank_lines_are_dropped_and_order_kept() {
        let stats = compute_stats("Experience\n\n   \n- Built a thing\n");
        assert_eq!(stats.lines, vec!["Experience", "- Built a thing"]);
    }

    #[test]
    fn test_bullet_lines_detected_for_all_glyphs() {
        let stats = compute_stats("- dash\n* star\n• glyph\nplain line");
        assert_eq!(stats.bullet_lines.len(), 3);
        assert_eq!(stats.lines.len(), 4);
    }

    #[test]
    fn test_indented_bullet_counts_after_trim() {
        let stats = compute_stats("   - indented bullet");
        assert_eq!(stats.bullet_lines.len(), 1);
    }

    #[test]
    fn test_long_line_threshold_is_120() {
        let exactly_120 = "a".repeat(120);
        let over = "a".repeat(121);
        let stats = compute_stats(&format!("{exactly_120}\n{over}"));
        assert_eq!(stats.long_line_count, 1);
    }

    #[test]
    fn test_word_tokens_include_skill_punctuation() {
        let stats = compute_stats("c++ c# node.js ci-cd plain");
        assert_eq!(stats.word_count, 5);
    }

    #[test]
    fn test_sentences_split_on_terminator_runs() {
        // "..." and "?!" collapse: empty fragments are dropped
        let stats = compute_stats("First sentence... Second one?! Third.");
        assert_eq!(stats.sentence_count, 3);
    }

    #[test]
    fn test_avg_words_per_sentence() {
        let stats = compute_stats("one two three. four five.");
        assert_eq!(stats.word_count, 5);
        assert_eq!(stats.sentence_count, 2);
        assert!((stats.avg_words_per_sentence - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ratios_floor_denominator_at_one() {
        let stats = compute_stats("");
        assert_eq!(stats.bullet_ratio(), 0.0);
        assert_eq!(stats.long_line_ratio(), 0.0);
    }
}
