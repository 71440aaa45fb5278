//! Human-readable explanation of a verdict: ordered reasons and a confidence label.

use serde::{Deserialize, Serialize};

use crate::scoring::matcher::{MatchVerdict, APPLY_THRESHOLD, UPSKILL_THRESHOLD};

pub const REASON_LOW_SKILL_MATCH: &str = "Skill match below recommended threshold";
pub const REASON_EXPERIENCE_NOT_MET: &str = "Experience requirement not met";
pub const REASON_STRONG_ALIGNMENT: &str = "Strong alignment with job requirements";

/// How much the skill score alone supports the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn from_skill_score(skill_score: f64) -> Self {
        if skill_score >= APPLY_THRESHOLD {
            Confidence::High
        } else if skill_score >= UPSKILL_THRESHOLD {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// Reasons behind a verdict, in a fixed order. Never empty.
pub fn decision_reasons(verdict: &MatchVerdict) -> Vec<String> {
    let mut reasons = Vec::new();

    if verdict.skill_score < APPLY_THRESHOLD {
        reasons.push(REASON_LOW_SKILL_MATCH.to_string());
    }
    if verdict.experience_gap < 0.0 {
        reasons.push(REASON_EXPERIENCE_NOT_MET.to_string());
    }
    if reasons.is_empty() {
        reasons.push(REASON_STRONG_ALIGNMENT.to_string());
    }

    reasons
}
