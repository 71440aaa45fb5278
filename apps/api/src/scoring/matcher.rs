//! Match Scorer — deterministic fit verdict from a candidate profile and a role requirement.
//!
//! Pure and synchronous: no I/O, no shared state. Callers validate the two
//! records before invoking `score`; the scorer itself cannot fail.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::profile::{CandidateProfile, RoleRequirement};

/// Minimum skill score for an `Apply` decision (with a non-negative experience gap).
pub const APPLY_THRESHOLD: f64 = 75.0;
/// Minimum skill score for `Apply After Upskilling`.
pub const UPSKILL_THRESHOLD: f64 = 50.0;

/// Recommendation attached to every verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    #[serde(rename = "Apply")]
    Apply,
    #[serde(rename = "Apply After Upskilling")]
    ApplyAfterUpskilling,
    #[serde(rename = "Not Recommended")]
    NotRecommended,
}

impl Decision {
    pub fn label(self) -> &'static str {
        match self {
            Decision::Apply => "Apply",
            Decision::ApplyAfterUpskilling => "Apply After Upskilling",
            Decision::NotRecommended => "Not Recommended",
        }
    }

    /// First matching rule wins; a negative experience gap demotes an
    /// otherwise qualifying score to upskilling.
    pub fn from_score(skill_score: f64, experience_gap: f64) -> Self {
        if skill_score >= APPLY_THRESHOLD && experience_gap >= 0.0 {
            Decision::Apply
        } else if skill_score >= UPSKILL_THRESHOLD {
            Decision::ApplyAfterUpskilling
        } else {
            Decision::NotRecommended
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Full fit verdict for one candidate/role pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchVerdict {
    pub skill_score: f64, // 0 – 100, two decimals
    pub matched_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
    pub experience_gap: f64,
    pub decision: Decision,
}

/// Scores a candidate against a role.
///
/// Algorithm:
/// 1. Lower-case both skill lists into sets (canonical form).
/// 2. matched = candidate ∩ required, missing = required − candidate
/// 3. skill_score = |matched| / max(|required|, 1) × 100, rounded to 2 decimals
/// 4. experience_gap = experience_years − min_experience
/// 5. Decision from the rounded score and the gap
pub fn score(candidate: &CandidateProfile, role: &RoleRequirement) -> MatchVerdict {
    let candidate_skills = canonical_skills(&candidate.skills);
    let required_skills = canonical_skills(&role.required_skills);

    let (matched_skills, missing_skills): (BTreeSet<String>, BTreeSet<String>) = required_skills
        .iter()
        .cloned()
        .partition(|skill| candidate_skills.contains(skill));

    let ratio = matched_skills.len() as f64 / required_skills.len().max(1) as f64;
    let skill_score = round_2dp(ratio * 100.0);

    let experience_gap = candidate.experience_years - role.min_experience;
    let decision = Decision::from_score(skill_score, experience_gap);

    MatchVerdict {
        skill_score,
        matched_skills,
        missing_skills,
        experience_gap,
        decision,
    }
}

/// Folds skill names to their lower-case canonical form, collapsing duplicates.
pub fn canonical_skills(skills: &[String]) -> BTreeSet<String> {
    skills.iter().map(|s| s.to_lowercase()).collect()
}

/// Rounds half away from zero to two decimal places.
fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
