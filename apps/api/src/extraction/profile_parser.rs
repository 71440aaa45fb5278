//! Profile Parser — turns raw resume / job description text into validated records.

use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::extraction::validation::{candidate_from_value, role_from_value};
use crate::llm_client::prompts::{jd_prompt, resume_prompt};
use crate::llm_client::{generate_json, LlmBackend};
use crate::models::profile::{CandidateProfile, RoleRequirement};

/// Extracts a `CandidateProfile` from resume text using the LLM.
pub async fn extract_candidate_profile(
    resume_text: &str,
    llm: &dyn LlmBackend,
) -> Result<CandidateProfile, AppError> {
    let raw: Value = generate_json(llm, &resume_prompt(resume_text)).await?;
    let profile = candidate_from_value(&raw)?;
    debug!(
        skills = profile.skills.len(),
        experience_years = profile.experience_years,
        "Resume extracted"
    );
    Ok(profile)
}

/// Extracts a `RoleRequirement` from job description text using the LLM.
pub async fn extract_role_requirement(
    jd_text: &str,
    llm: &dyn LlmBackend,
) -> Result<RoleRequirement, AppError> {
    let raw: Value = generate_json(llm, &jd_prompt(jd_text)).await?;
    let role = role_from_value(&raw)?;
    debug!(
        required_skills = role.required_skills.len(),
        min_experience = role.min_experience,
        "Job description extracted"
    );
    Ok(role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::stub::{FailingLlm, StubLlm};
    use crate::llm_client::LlmError;

    const RESUME_REPLY: &str =
        r#"{"skills": ["Python", "SQL", "Docker"], "experience_years": 3, "domains": ["data"]}"#;
    const JD_REPLY: &str = r#"Sure! Here you go:
```json
{"required_skills": ["python", "sql", "kubernetes"], "min_experience": 2, "role_domain": "data platform"}
```"#;

    #[tokio::test]
    async fn test_extract_candidate_profile() {
        let llm = StubLlm::new(RESUME_REPLY, JD_REPLY);
        let profile = extract_candidate_profile("Jane Doe ...", &llm).await.unwrap();
        assert_eq!(profile.skills, vec!["Python", "SQL", "Docker"]);
        assert_eq!(profile.experience_years, 3.0);
        assert_eq!(profile.domains, vec!["data"]);
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_extract_role_requirement_repairs_wrapped_json() {
        let llm = StubLlm::new(RESUME_REPLY, JD_REPLY);
        let role = extract_role_requirement("Data engineer ...", &llm).await.unwrap();
        assert_eq!(role.required_skills, vec!["python", "sql", "kubernetes"]);
        assert_eq!(role.min_experience, 2.0);
        assert_eq!(role.role_domain, "data platform");
    }

    #[tokio::test]
    async fn test_empty_reply_is_llm_error() {
        let llm = StubLlm::new("", JD_REPLY);
        let err = extract_candidate_profile("Jane Doe", &llm).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(LlmError::EmptyContent)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_wrong_shape_is_invalid_input() {
        let llm = StubLlm::new(r#"{"skills": "Python", "experience_years": 3}"#, JD_REPLY);
        let err = extract_candidate_profile("Jane Doe", &llm).await.unwrap_err();
        assert!(
            matches!(err, AppError::InvalidInputShape { ref field, .. } if field == "skills"),
            "got {err:?}"
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let err = extract_role_requirement("Anything", &FailingLlm).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(LlmError::Api { status: 503, .. })));
    }
}
