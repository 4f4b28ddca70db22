//! LLM-backed scorer — the non-deterministic alternative to the rule-based
//! pipeline. Selected with `SCORER_BACKEND=llm`; none of the deterministic
//! guarantees (idempotence, exact formulas) apply here. Scores are clamped
//! and feedback lists are backfilled so the `Report` contract still holds.

use async_trait::async_trait;
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::scoring::{Report, ResumeScorer};

const SCORE_SYSTEM: &str = "You are a strict resume evaluator. Return ONLY valid JSON.";

const SCORE_PROMPT_TEMPLATE: &str = r#"You are an expert resume evaluator and ATS analyzer.

Evaluate the resume strictly.

Score based on:
1. Structure
2. Clarity
3. Impact (quantifiable achievements)
4. Technical depth
5. Professional tone
6. ATS compatibility

Scoring Rules:
- Score each category from 0 to 100
- Be strict but fair
- Average resume: 60-75
- Strong resume: 80-90
- Exceptional resume: 90+

Return ONLY valid JSON in this exact format:

{
  "overall_score": number,
  "structure_score": number,
  "clarity_score": number,
  "impact_score": number,
  "technical_depth_score": number,
  "professionalism_score": number,
  "ats_score": number,
  "strengths": [],
  "weaknesses": [],
  "improvement_suggestions": []
}

Resume:
{resume_text}
"#;

/// How many times to re-ask the model when its output fails to parse as a
/// `Report`. Transport-level retries live in `LlmClient`.
const MAX_PARSE_ATTEMPTS: u32 = 3;

/// Resume scorer backed by the Anthropic API.
pub struct LlmScorer {
    llm: LlmClient,
}

impl LlmScorer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeScorer for LlmScorer {
    async fn evaluate(&self, resume_text: &str) -> Result<Report, AppError> {
        let prompt = SCORE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);

        let mut last_error = None;
        for attempt in 0..MAX_PARSE_ATTEMPTS {
            match self.llm.call_json::<Report>(&prompt, SCORE_SYSTEM).await {
                Ok(report) => return Ok(normalize_report(report)),
                Err(e) => {
                    warn!("LLM report parse attempt {} failed: {e}", attempt + 1);
                    last_error = Some(e);
                }
            }
        }

        Err(AppError::Llm(format!(
            "LLM scoring failed after {MAX_PARSE_ATTEMPTS} attempts: {}",
            last_error.map(|e| e.to_string()).unwrap_or_default()
        )))
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// Enforces the `Report` contract on model output: scores clamped to 100
/// (u8 deserialization already rejects negatives and >255) and non-empty
/// feedback lists.
fn normalize_report(mut report: Report) -> Report {
    for score in [
        &mut report.overall_score,
        &mut report.structure_score,
        &mut report.clarity_score,
        &mut report.impact_score,
        &mut report.technical_depth_score,
        &mut report.professionalism_score,
        &mut report.ats_score,
    ] {
        *score = (*score).min(100);
    }

    if report.strengths.is_empty() {
        report.strengths.push("Includes core resume sections.".to_string());
    }
    if report.weaknesses.is_empty() {
        report
            .weaknesses
            .push("No critical weaknesses detected.".to_string());
    }
    if report.improvement_suggestions.is_empty() {
        report
            .improvement_suggestions
            .push("Tailor your skills to the target job description.".to_string());
    }

    report
}
