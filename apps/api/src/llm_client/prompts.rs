// Extraction prompt templates. Placeholders are replaced with `str::replace`
// before sending, so the JSON braces below are literal.

/// Resume extraction prompt. Replace `{resume_text}` before sending.
pub const RESUME_EXTRACT_PROMPT: &str = r#"You are an information extraction system.

Return ONLY valid JSON.
DO NOT add explanations.
DO NOT use markdown.
DO NOT wrap in backticks.

JSON format:
{
  "skills": [],
  "experience_years": 0,
  "domains": []
}

Resume Text:
{resume_text}
"#;

/// Job description extraction prompt. Replace `{jd_text}` before sending.
pub const JD_EXTRACT_PROMPT: &str = r#"You are an information extraction system.

Return ONLY valid JSON.
DO NOT add explanations.
DO NOT use markdown.
DO NOT wrap in backticks.

JSON format:
{
  "required_skills": [],
  "min_experience": 0,
  "role_domain": ""
}

Job Description:
{jd_text}
"#;

pub fn resume_prompt(resume_text: &str) -> String {
    RESUME_EXTRACT_PROMPT.replace("{resume_text}", resume_text)
}

pub fn jd_prompt(jd_text: &str) -> String {
    JD_EXTRACT_PROMPT.replace("{jd_text}", jd_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_prompt_embeds_text() {
        let prompt = resume_prompt("Jane Doe, 4 years of Rust");
        assert!(prompt.contains("Resume Text:\nJane Doe, 4 years of Rust"));
        assert!(prompt.contains("\"experience_years\": 0"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn test_jd_prompt_embeds_text() {
        let prompt = jd_prompt("Backend engineer, Go required");
        assert!(prompt.contains("Job Description:\nBackend engineer, Go required"));
        assert!(prompt.contains("\"required_skills\": []"));
        assert!(!prompt.contains("{jd_text}"));
    }
}
