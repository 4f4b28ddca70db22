//! Resume scoring — pluggable, trait-based scorer over raw resume text.
//!
//! Default: `RuleBasedScorer` (pure-Rust, deterministic, fully testable).
//! Alternative: `LlmScorer` (non-deterministic, via the Anthropic API).
//!
//! `AppState` holds an `Arc<dyn ResumeScorer>`, swapped at startup via
//! `SCORER_BACKEND`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub mod llm;
pub mod rules;
pub mod signals;
pub mod stats;

/// Full quality report returned to callers. All scores are integers in
/// [0, 100]; all three feedback lists are non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub overall_score: u8,
    pub structure_score: u8,
    pub clarity_score: u8,
    pub impact_score: u8,
    pub technical_depth_score: u8,
    pub professionalism_score: u8,
    pub ats_score: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub improvement_suggestions: Vec<String>,
}

/// Categorized feedback lines, one contribution per category.
#[derive(Debug, Clone)]
pub struct Feedback {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub improvement_suggestions: Vec<String>,
}

/// The resume scorer trait. Implement this to swap backends without touching
/// the endpoint, handler, or caller code.
///
/// Carried in `AppState` as `Arc<dyn ResumeScorer>`.
#[async_trait]
pub trait ResumeScorer: Send + Sync {
    async fn evaluate(&self, resume_text: &str) -> Result<Report, AppError>;

    /// Short backend label for logging.
    fn backend(&self) -> &'static str;
}

/// Deterministic rule-based scorer. Fast, stateless, no I/O.
pub struct RuleBasedScorer;

#[async_trait]
impl ResumeScorer for RuleBasedScorer {
    async fn evaluate(&self, resume_text: &str) -> Result<Report, AppError> {
        Ok(evaluate_resume(resume_text))
    }

    fn backend(&self) -> &'static str {
        "rules"
    }
}

/// The pure evaluation pipeline: statistics -> signals -> scores -> feedback.
/// Total over all inputs, including the empty string.
pub fn evaluate_resume(resume_text: &str) -> Report {
    let stats = stats::compute_stats(resume_text);
    let signals = signals::detect_signals(resume_text, &stats);
    let scores = rules::score_categories(&stats, &signals);
    let feedback = rules::generate_feedback(&scores);
    rules::build_report(scores, feedback)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &str = "\
Jane Doe
jane.doe@example.com | (555) 123-4567

Summary
Backend engineer with a focus on reliability.

Experience
- Built a payments service in Rust handling 2000 requests per second
- Reduced deployment time by 70% with a new CI pipeline
- Led a team of 3 engineers

Education
BS Computer Science

Skills
Rust, Python, Docker, Kubernetes, PostgreSQL
";

    #[test]
    fn test_report_scores_all_in_range() {
        let report = evaluate_resume(SAMPLE_RESUME);
        for score in [
            report.overall_score,
            report.structure_score,
            report.clarity_score,
            report.impact_score,
            report.technical_depth_score,
            report.professionalism_score,
            report.ats_score,
        ] {
            assert!(score <= 100);
        }
    }

    #[test]
    fn test_feedback_lists_never_empty() {
        for text in ["", "x", SAMPLE_RESUME, "!!!###$$$"] {
            let report = evaluate_resume(text);
            assert!(!report.strengths.is_empty(), "strengths empty for {text:?}");
            assert!(!report.weaknesses.is_empty(), "weaknesses empty for {text:?}");
            assert!(
                !report.improvement_suggestions.is_empty(),
                "suggestions empty for {text:?}"
            );
        }
    }

    #[test]
    fn test_overall_is_mean_of_categories() {
        let report = evaluate_resume(SAMPLE_RESUME);
        let mean = (report.structure_score as f64
            + report.clarity_score as f64
            + report.impact_score as f64
            + report.technical_depth_score as f64
            + report.professionalism_score as f64
            + report.ats_score as f64)
            / 6.0;
        assert_eq!(report.overall_score, mean.round() as u8);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let first = evaluate_resume(SAMPLE_RESUME);
        let second = evaluate_resume(SAMPLE_RESUME);
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn test_report_serializes_with_expected_fields() {
        let value = serde_json::to_value(evaluate_resume(SAMPLE_RESUME)).unwrap();
        for field in [
            "overall_score",
            "structure_score",
            "clarity_score",
            "impact_score",
            "technical_depth_score",
            "professionalism_score",
            "ats_score",
            "strengths",
            "weaknesses",
            "improvement_suggestions",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
    }

    #[tokio::test]
    async fn test_rule_based_scorer_delegates_to_pipeline() {
        let scorer = RuleBasedScorer;
        let report = scorer.evaluate(SAMPLE_RESUME).await.unwrap();
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::to_value(evaluate_resume(SAMPLE_RESUME)).unwrap()
        );
        assert_eq!(scorer.backend(), "rules");
    }
}
