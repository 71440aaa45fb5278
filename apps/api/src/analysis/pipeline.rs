//! Analysis pipeline: resume PDF + job description → extraction → scoring → explanation.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::pdf::extract_pdf_text;
use crate::extraction::profile_parser::{extract_candidate_profile, extract_role_requirement};
use crate::llm_client::LlmBackend;
use crate::models::profile::{CandidateProfile, RoleRequirement};
use crate::scoring::explain::{decision_reasons, Confidence};
use crate::scoring::matcher::{score, MatchVerdict};

/// A verdict together with its explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub verdict: MatchVerdict,
    pub reasons: Vec<String>,
    pub confidence: Confidence,
}

/// Full result of analyzing one resume against one job description.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub candidate: CandidateProfile,
    pub role: RoleRequirement,
    #[serde(flatten)]
    pub assessment: Assessment,
}

/// Scores validated records and derives the explanation. Pure.
pub fn assess(candidate: &CandidateProfile, role: &RoleRequirement) -> Assessment {
    let verdict = score(candidate, role);
    let reasons = decision_reasons(&verdict);
    let confidence = Confidence::from_skill_score(verdict.skill_score);
    Assessment {
        verdict,
        reasons,
        confidence,
    }
}

/// Runs the whole pipeline on an uploaded resume PDF.
pub async fn analyze_documents(
    resume_pdf: Bytes,
    jd_text: &str,
    llm: &dyn LlmBackend,
) -> Result<AnalysisReport, AppError> {
    let analysis_id = Uuid::new_v4();
    let span = info_span!("analysis", %analysis_id);

    async move {
        let resume_text = extract_pdf_text(resume_pdf).await?;
        analyze_texts(analysis_id, &resume_text, jd_text, llm).await
    }
    .instrument(span)
    .await
}

/// Extracts both records concurrently, then scores them.
/// The scorer only runs once both records have been validated.
pub async fn analyze_texts(
    analysis_id: Uuid,
    resume_text: &str,
    jd_text: &str,
    llm: &dyn LlmBackend,
) -> Result<AnalysisReport, AppError> {
    let (candidate, role) = tokio::try_join!(
        extract_candidate_profile(resume_text, llm),
        extract_role_requirement(jd_text, llm)
    )?;

    let assessment = assess(&candidate, &role);
    info!(
        skill_score = assessment.verdict.skill_score,
        experience_gap = assessment.verdict.experience_gap,
        decision = %assessment.verdict.decision,
        "Analysis complete"
    );

    Ok(AnalysisReport {
        analysis_id,
        analyzed_at: Utc::now(),
        candidate,
        role,
        assessment,
    })
}
