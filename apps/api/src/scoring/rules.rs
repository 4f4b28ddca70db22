//! Score formulas, aggregation, and feedback rules — the decision core.
//!
//! Every category score is an additive penalty/bonus model over the detected
//! signals, clamped to [0, 100] before anything downstream reads it. Every
//! point change traces back to exactly one detected condition, which keeps
//! the whole rule set auditable.

use crate::scoring::signals::{Signals, SECTION_CATALOG};
use crate::scoring::stats::TextStats;
use crate::scoring::{Feedback, Report};

/// Clamps to [0, 100] after rounding.
fn clamp_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// 90 points for full section coverage, 5 each for email and phone.
fn structure_score(signals: &Signals) -> u8 {
    let mut score =
        signals.sections_found.len() as f64 / SECTION_CATALOG.len() as f64 * 90.0;
    if signals.has_email {
        score += 5.0;
    }
    if signals.has_phone {
        score += 5.0;
    }
    clamp_score(score)
}

/// Starts at 100, penalizes run-on sentences, overlong lines, and missing
/// bullets; rewards bullet-heavy writing. Ratio penalties only apply when
/// there is at least one line, so empty input keeps its 100.
fn clarity_score(stats: &TextStats) -> u8 {
    let mut score = 100.0;

    if stats.avg_words_per_sentence > 30.0 {
        score -= 30.0;
    } else if stats.avg_words_per_sentence > 25.0 {
        score -= 20.0;
    }

    let long_ratio = stats.long_line_ratio();
    if long_ratio > 0.35 {
        score -= 25.0;
    } else if long_ratio > 0.2 {
        score -= 15.0;
    }

    if !stats.lines.is_empty() {
        let bullet_ratio = stats.bullet_ratio();
        if bullet_ratio < 0.1 {
            score -= 10.0;
        } else if bullet_ratio > 0.2 {
            score += 5.0;
        }
    }

    clamp_score(score)
}

/// 12 points per quantified bullet on a floor of 20.
fn impact_score(signals: &Signals) -> u8 {
    clamp_score(20.0 + 12.0 * signals.quantified_bullets as f64)
}

/// 5 points per distinct technology keyword on a floor of 20.
fn technical_depth_score(signals: &Signals) -> u8 {
    clamp_score(20.0 + 5.0 * signals.tech_hits.len() as f64)
}

/// Starts at 100; informal words cost 8, shouted words 2, exclamation marks
/// 5 each (capped at 3).
fn professionalism_score(signals: &Signals) -> u8 {
    clamp_score(
        100.0
            - 8.0 * signals.informal_hits as f64
            - 2.0 * signals.all_caps_words as f64
            - 5.0 * signals.exclamations.min(3) as f64,
    )
}

/// ATS compatibility: penalties for thin content, symbol-heavy formatting,
/// missing sections, and missing contact info.
fn ats_score(stats: &TextStats, signals: &Signals) -> u8 {
    let mut score = 100.0;

    if stats.word_count < 300 {
        score -= 30.0;
    }
    if signals.non_alnum_ratio > 0.2 {
        score -= 20.0;
    }
    if signals.sections_found.len() < 3 {
        score -= 20.0;
    }
    if !signals.has_email {
        score -= 10.0;
    }
    if !signals.has_phone {
        score -= 10.0;
    }

    clamp_score(score)
}

/// The six category scores, each already clamped to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryScores {
    pub structure: u8,
    pub clarity: u8,
    pub impact: u8,
    pub technical_depth: u8,
    pub professionalism: u8,
    pub ats: u8,
}

impl CategoryScores {
    /// Category order used by the feedback rule table.
    fn in_feedback_order(&self) -> [u8; 6] {
        [
            self.structure,
            self.impact,
            self.technical_depth,
            self.clarity,
            self.professionalism,
            self.ats,
        ]
    }

    /// Rounded mean of the six categories.
    pub fn overall(&self) -> u8 {
        let sum = self.structure as f64
            + self.clarity as f64
            + self.impact as f64
            + self.technical_depth as f64
            + self.professionalism as f64
            + self.ats as f64;
        clamp_score(sum / 6.0)
    }
}

/// Computes all six category scores from the detected signals.
pub fn score_categories(stats: &TextStats, signals: &Signals) -> CategoryScores {
    CategoryScores {
        structure: structure_score(signals),
        clarity: clarity_score(stats),
        impact: impact_score(signals),
        technical_depth: technical_depth_score(signals),
        professionalism: professionalism_score(signals),
        ats: ats_score(stats, signals),
    }
}

/// One row of the feedback table: a category either contributes its strength
/// line (score >= threshold) or its weakness + suggestion pair. Never both,
/// never neither.
struct FeedbackRule {
    threshold: u8,
    strength: &'static str,
    weakness: &'static str,
    suggestion: &'static str,
}

/// Rows are in fixed category order: structure, impact, technical depth,
/// clarity, professionalism, ATS.
const FEEDBACK_RULES: [FeedbackRule; 6] = [
    FeedbackRule {
        threshold: 80,
        strength: "Clear section structure with recognizable headings.",
        weakness: "Section headings are missing or unclear.",
        suggestion: "Add standard headings such as Experience, Education, and Skills.",
    },
    FeedbackRule {
        threshold: 70,
        strength: "Achievements are quantified with concrete metrics.",
        weakness: "Few bullet points quantify their achievements.",
        suggestion: "Add measurable results (numbers, percentages) to your bullet points.",
    },
    FeedbackRule {
        threshold: 70,
        strength: "Strong coverage of technologies and tools.",
        weakness: "Limited technical detail.",
        suggestion: "List the languages, frameworks, and tools you have worked with.",
    },
    FeedbackRule {
        threshold: 80,
        strength: "Writing is concise and easy to scan.",
        weakness: "Sentence and bullet length is inconsistent.",
        suggestion: "Shorten long bullets and sentences for readability.",
    },
    FeedbackRule {
        threshold: 85,
        strength: "Tone is professional throughout.",
        weakness: "Informal language detected.",
        suggestion: "Remove casual wording and excessive punctuation.",
    },
    FeedbackRule {
        threshold: 80,
        strength: "Formatting is ATS-friendly.",
        weakness: "Resume may not scan well in applicant tracking systems.",
        suggestion: "Use consistent headings and fewer special symbols.",
    },
];

const DEFAULT_STRENGTH: &str = "Includes core resume sections.";
const DEFAULT_WEAKNESS: &str = "No critical weaknesses detected.";
const DEFAULT_SUGGESTION: &str = "Tailor your skills to the target job description.";

/// Applies the feedback rule table and guarantees all three lists are
/// non-empty.
pub fn generate_feedback(scores: &CategoryScores) -> Feedback {
    let mut feedback = Feedback {
        strengths: Vec::new(),
        weaknesses: Vec::new(),
        improvement_suggestions: Vec::new(),
    };

    for (score, rule) in scores.in_feedback_order().iter().zip(FEEDBACK_RULES.iter()) {
        if *score >= rule.threshold {
            feedback.strengths.push(rule.strength.to_string());
        } else {
            feedback.weaknesses.push(rule.weakness.to_string());
            feedback
                .improvement_suggestions
                .push(rule.suggestion.to_string());
        }
    }

    if feedback.strengths.is_empty() {
        feedback.strengths.push(DEFAULT_STRENGTH.to_string());
    }
    if feedback.weaknesses.is_empty() {
        feedback.weaknesses.push(DEFAULT_WEAKNESS.to_string());
    }
    if feedback.improvement_suggestions.is_empty() {
        feedback
            .improvement_suggestions
            .push(DEFAULT_SUGGESTION.to_string());
    }

    feedback
}

/// Assembles the full report from category scores and feedback.
pub fn build_report(scores: CategoryScores, feedback: Feedback) -> Report {
    Report {
        overall_score: scores.overall(),
        structure_score: scores.structure,
        clarity_score: scores.clarity,
        impact_score: scores.impact,
        technical_depth_score: scores.technical_depth,
        professionalism_score: scores.professionalism,
        ats_score: scores.ats,
        strengths: feedback.strengths,
        weaknesses: feedback.weaknesses,
        improvement_suggestions: feedback.improvement_suggestions,
    }
}
