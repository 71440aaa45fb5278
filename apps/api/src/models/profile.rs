use serde::{Deserialize, Serialize};

/// Structured attributes extracted from a resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    /// Skill names as extracted. Identity is case-insensitive.
    pub skills: Vec<String>,
    pub experience_years: f64,
    /// Informational only; not used for scoring.
    #[serde(default)]
    pub domains: Vec<String>,
}

/// Structured requirements extracted from a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRequirement {
    /// Skill names as extracted. Identity is case-insensitive.
    pub required_skills: Vec<String>,
    pub min_experience: f64,
    /// Informational only; not used for scoring.
    #[serde(default)]
    pub role_domain: String,
}
