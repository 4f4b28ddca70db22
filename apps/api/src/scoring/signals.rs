//! Signal detection — second stage of the rule-based pipeline.
//!
//! Turns raw text plus its statistics into the discrete signals the scorer
//! consumes: which canonical sections are present, whether contact info
//! exists, how many bullets carry a quantified achievement, which technology
//! keywords appear, and how much informal or irregular formatting shows up.
//!
//! All vocabularies are fixed, process-wide constant tables. Matching is
//! intentionally loose (substring containment, prefix headings) — resumes
//! are messy and the scorer only needs coarse presence signals.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scoring::stats::TextStats;

/// Canonical section catalog: (section, heading keywords).
/// A heading matches if its normalized form equals a keyword or starts with
/// `"<keyword> "`.
pub const SECTION_CATALOG: &[(&str, &[&str])] = &[
    (
        "summary",
        &["summary", "professional summary", "profile", "objective", "about me"],
    ),
    (
        "experience",
        &[
            "experience",
            "work experience",
            "professional experience",
            "employment",
            "employment history",
            "work history",
        ],
    ),
    ("education", &["education", "academic background"]),
    (
        "skills",
        &["skills", "technical skills", "core competencies", "technologies"],
    ),
    (
        "projects",
        &["projects", "personal projects", "selected projects"],
    ),
    (
        "certifications",
        &["certifications", "certificates", "licenses"],
    ),
];

/// Verbs that mark a bullet as describing an achievement.
const ACTION_VERBS: &[&str] = &[
    "built",
    "created",
    "developed",
    "designed",
    "led",
    "managed",
    "improved",
    "increased",
    "reduced",
    "optimized",
    "automated",
    "launched",
    "delivered",
    "implemented",
    "analyzed",
    "owned",
    "collaborated",
    "engineered",
    "deployed",
];

/// Technology/platform vocabulary. Substring containment against the
/// lowercased text — "c++" and "c#" must stay verbatim, word boundaries
/// would break them.
const TECH_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "rust",
    "golang",
    "c++",
    "c#",
    "sql",
    "react",
    "angular",
    "vue",
    "node",
    "django",
    "flask",
    "spring",
    "kubernetes",
    "docker",
    "aws",
    "azure",
    "gcp",
    "terraform",
    "linux",
    "git",
    "graphql",
    "mongodb",
    "postgresql",
    "redis",
    "kafka",
    "tensorflow",
    "pytorch",
];

const INFORMAL_WORDS: &[&str] = &["cool", "awesome", "dude", "bro", "lol", "omg", "hey", "yo"];

/// Heading lines are short; anything longer than this after normalization is
/// body text, not a heading.
const MAX_HEADING_CHARS: usize = 40;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").unwrap());

/// Loose phone shape: optional country code, optional area-code parens,
/// 3+4 digit groups with optional separators.
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[\s.\-]?)?\(?\d{3}\)?[\s.\-]?\d{3}[\s.\-]?\d{4}").unwrap()
});

static ALL_CAPS_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z]{4,}\b").unwrap());

/// Discrete signals extracted from one resume text.
#[derive(Debug, Clone)]
pub struct Signals {
    /// Canonical sections found, in catalog order, deduplicated.
    pub sections_found: Vec<&'static str>,
    pub has_email: bool,
    pub has_phone: bool,
    /// Bullet lines containing both a digit and an action verb.
    pub quantified_bullets: usize,
    /// Technology keywords present, in vocabulary order.
    pub tech_hits: Vec<&'static str>,
    /// Total occurrences of informal words.
    pub informal_hits: usize,
    /// All-uppercase words of length >= 4.
    pub all_caps_words: usize,
    /// Raw `!` count (the scorer caps it).
    pub exclamations: usize,
    /// Non letter/digit/whitespace characters over total characters.
    pub non_alnum_ratio: f64,
}

/// Runs all detectors over the text. Pure; never fails.
pub fn detect_signals(text: &str, stats: &TextStats) -> Signals {
    let lower = text.to_lowercase();

    Signals {
        sections_found: detect_sections(&stats.lines),
        has_email: EMAIL.is_match(text),
        has_phone: PHONE.is_match(text),
        quantified_bullets: count_quantified_bullets(&stats.bullet_lines),
        tech_hits: TECH_KEYWORDS
            .iter()
            .filter(|kw| lower.contains(*kw))
            .copied()
            .collect(),
        informal_hits: INFORMAL_WORDS
            .iter()
            .map(|w| lower.matches(w).count())
            .sum(),
        all_caps_words: ALL_CAPS_WORD.find_iter(text).count(),
        exclamations: text.matches('!').count(),
        non_alnum_ratio: non_alnum_ratio(text),
    }
}

/// Reduces a candidate heading to lowercase letters and spaces.
fn normalize_heading(line: &str) -> String {
    line.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string()
}

fn detect_sections(lines: &[String]) -> Vec<&'static str> {
    let normalized: Vec<String> = lines
        .iter()
        .map(|l| normalize_heading(l))
        .filter(|n| !n.is_empty() && n.chars().count() <= MAX_HEADING_CHARS)
        .collect();

    SECTION_CATALOG
        .iter()
        .filter(|(_, keywords)| {
            normalized.iter().any(|line| {
                keywords
                    .iter()
                    .any(|kw| line == kw || line.starts_with(&format!("{kw} ")))
            })
        })
        .map(|(section, _)| *section)
        .collect()
}

fn count_quantified_bullets(bullet_lines: &[String]) -> usize {
    bullet_lines
        .iter()
        .map(|l| l.to_lowercase())
        .filter(|l| l.chars().any(|c| c.is_ascii_digit()))
        .filter(|l| ACTION_VERBS.iter().any(|v| l.contains(v)))
        .count()
}

fn non_alnum_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    let non_alnum = text
        .chars()
        .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
        .count();
    non_alnum as f64 / total.max(1) as f64
}
