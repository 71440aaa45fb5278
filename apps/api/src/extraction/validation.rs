//! Shape validation for extracted records.
//!
//! Model output and client-supplied JSON both pass through here before they
//! reach the scorer. Any absent or mistyped field fails with
//! `AppError::InvalidInputShape` naming the record and field.

use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::models::profile::{CandidateProfile, RoleRequirement};

pub const RESUME_RECORD: &str = "resume";
pub const JD_RECORD: &str = "job description";

const EXPECT_OBJECT: &str = "a JSON object";
const EXPECT_STRING_LIST: &str = "a list of strings";
const EXPECT_STRING: &str = "a string";
const EXPECT_NON_NEGATIVE: &str = "a non-negative number";

/// Builds a `CandidateProfile` from a raw JSON record.
///
/// `skills` and `experience_years` are required. `domains` defaults to empty.
pub fn candidate_from_value(value: &Value) -> Result<CandidateProfile, AppError> {
    let record = as_object(RESUME_RECORD, value)?;
    Ok(CandidateProfile {
        skills: required_string_list(RESUME_RECORD, record, "skills")?,
        experience_years: required_non_negative(RESUME_RECORD, record, "experience_years")?,
        domains: optional_string_list(RESUME_RECORD, record, "domains")?,
    })
}

/// Builds a `RoleRequirement` from a raw JSON record.
///
/// `required_skills` and `min_experience` are required. `role_domain` defaults to empty.
pub fn role_from_value(value: &Value) -> Result<RoleRequirement, AppError> {
    let record = as_object(JD_RECORD, value)?;
    Ok(RoleRequirement {
        required_skills: required_string_list(JD_RECORD, record, "required_skills")?,
        min_experience: required_non_negative(JD_RECORD, record, "min_experience")?,
        role_domain: optional_string(JD_RECORD, record, "role_domain")?,
    })
}

fn invalid(record: &'static str, field: &str, expected: &'static str) -> AppError {
    AppError::InvalidInputShape {
        record,
        field: field.to_string(),
        expected,
    }
}

fn as_object<'a>(record: &'static str, value: &'a Value) -> Result<&'a Map<String, Value>, AppError> {
    value
        .as_object()
        .ok_or_else(|| invalid(record, "<root>", EXPECT_OBJECT))
}

fn string_list(record: &'static str, field: &str, value: &Value) -> Result<Vec<String>, AppError> {
    let items = value
        .as_array()
        .ok_or_else(|| invalid(record, field, EXPECT_STRING_LIST))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(String::from)
                .ok_or_else(|| invalid(record, field, EXPECT_STRING_LIST))
        })
        .collect()
}

fn required_string_list(
    record: &'static str,
    map: &Map<String, Value>,
    field: &str,
) -> Result<Vec<String>, AppError> {
    match map.get(field) {
        Some(value) => string_list(record, field, value),
        None => Err(invalid(record, field, EXPECT_STRING_LIST)),
    }
}

fn optional_string_list(
    record: &'static str,
    map: &Map<String, Value>,
    field: &str,
) -> Result<Vec<String>, AppError> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => string_list(record, field, value),
    }
}

fn optional_string(
    record: &'static str,
    map: &Map<String, Value>,
    field: &str,
) -> Result<String, AppError> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(invalid(record, field, EXPECT_STRING)),
    }
}

fn required_non_negative(
    record: &'static str,
    map: &Map<String, Value>,
    field: &str,
) -> Result<f64, AppError> {
    map.get(field)
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite() && *n >= 0.0)
        .ok_or_else(|| invalid(record, field, EXPECT_NON_NEGATIVE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assert_invalid_field(result: Result<impl std::fmt::Debug, AppError>, expected_field: &str) {
        match result {
            Err(AppError::InvalidInputShape { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected InvalidInputShape for {expected_field}, got {other:?}"),
        }
    }

    #[test]
    fn test_candidate_full_record() {
        let profile = candidate_from_value(&json!({
            "skills": ["Python", "SQL"],
            "experience_years": 3.5,
            "domains": ["fintech"]
        }))
        .unwrap();
        assert_eq!(profile.skills, vec!["Python", "SQL"]);
        assert_eq!(profile.experience_years, 3.5);
        assert_eq!(profile.domains, vec!["fintech"]);
    }

    #[test]
    fn test_candidate_integer_experience() {
        let profile = candidate_from_value(&json!({"skills": [], "experience_years": 4})).unwrap();
        assert_eq!(profile.experience_years, 4.0);
        assert!(profile.domains.is_empty());
    }

    #[test]
    fn test_candidate_missing_skills() {
        assert_invalid_field(candidate_from_value(&json!({"experience_years": 2})), "skills");
    }

    #[test]
    fn test_candidate_string_experience_rejected() {
        assert_invalid_field(
            candidate_from_value(&json!({"skills": ["Go"], "experience_years": "5"})),
            "experience_years",
        );
    }

    #[test]
    fn test_candidate_negative_experience_rejected() {
        assert_invalid_field(
            candidate_from_value(&json!({"skills": ["Go"], "experience_years": -1})),
            "experience_years",
        );
    }

    #[test]
    fn test_candidate_non_string_skill_rejected() {
        assert_invalid_field(
            candidate_from_value(&json!({"skills": ["Go", 7], "experience_years": 1})),
            "skills",
        );
    }

    #[test]
    fn test_candidate_domains_wrong_type_rejected() {
        assert_invalid_field(
            candidate_from_value(&json!({"skills": [], "experience_years": 1, "domains": "web"})),
            "domains",
        );
    }

    #[test]
    fn test_candidate_non_object_rejected() {
        assert_invalid_field(candidate_from_value(&json!(["Python"])), "<root>");
    }

    #[test]
    fn test_role_full_record() {
        let role = role_from_value(&json!({
            "required_skills": ["Kubernetes"],
            "min_experience": 2,
            "role_domain": "platform"
        }))
        .unwrap();
        assert_eq!(role.required_skills, vec!["Kubernetes"]);
        assert_eq!(role.min_experience, 2.0);
        assert_eq!(role.role_domain, "platform");
    }

    #[test]
    fn test_role_domain_defaults_to_empty() {
        let role = role_from_value(&json!({"required_skills": [], "min_experience": 0})).unwrap();
        assert_eq!(role.role_domain, "");
    }

    #[test]
    fn test_role_missing_min_experience() {
        assert_invalid_field(
            role_from_value(&json!({"required_skills": ["Java"]})),
            "min_experience",
        );
    }

    #[test]
    fn test_role_null_required_skills_rejected() {
        assert_invalid_field(
            role_from_value(&json!({"required_skills": null, "min_experience": 1})),
            "required_skills",
        );
    }

    #[test]
    fn test_error_names_record() {
        let err = role_from_value(&json!({"min_experience": 1})).unwrap_err();
        assert!(err.to_string().contains("job description"));
        assert!(err.to_string().contains("required_skills"));
    }
}
