use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::positions::PositionConfig;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$").unwrap());

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{1,14}$").unwrap());

/// Registration details entered by a candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Years of experience as declared by the candidate.
    pub experience: u32,
}

/// Limits applied to candidate registration. Values come from `Config`.
#[derive(Debug, Clone, Copy)]
pub struct ValidationRules {
    pub min_name_length: usize,
    pub max_experience: u32,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_name_length: 3,
            max_experience: 20,
        }
    }
}

/// Validates registration fields. Returns human-readable errors, empty when valid.
pub fn validate_candidate(info: &CandidateInfo, rules: &ValidationRules) -> Vec<String> {
    let mut errors = Vec::new();

    if info.name.chars().count() < rules.min_name_length {
        errors.push(format!(
            "Name must be at least {} characters",
            rules.min_name_length
        ));
    }

    if !EMAIL_RE.is_match(info.email.trim()) {
        errors.push("Invalid email format".to_string());
    }

    if !PHONE_RE.is_match(&info.phone) {
        errors.push("Invalid phone number format".to_string());
    }

    if info.experience > rules.max_experience {
        errors.push(format!(
            "Experience cannot exceed {} years",
            rules.max_experience
        ));
    }

    errors
}

/// Returns an error message when `years` is below the position's threshold.
pub fn check_experience_threshold(years: u32, position: &PositionConfig) -> Option<String> {
    (years < position.experience_threshold).then(|| {
        format!(
            "Minimum experience required: {} years",
            position.experience_threshold
        )
    })
}

/// True when the declared experience disagrees with the resume.
pub fn experience_mismatch(declared: u32, from_resume: u32) -> bool {
    declared != from_resume
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> CandidateInfo {
        CandidateInfo {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+14155550123".to_string(),
            experience: 5,
        }
    }

    #[test]
    fn test_valid_candidate_has_no_errors() {
        assert!(validate_candidate(&candidate(), &ValidationRules::default()).is_empty());
    }

    #[test]
    fn test_short_name_rejected() {
        let info = CandidateInfo {
            name: "Al".to_string(),
            ..candidate()
        };
        let errors = validate_candidate(&info, &ValidationRules::default());
        assert_eq!(errors, vec!["Name must be at least 3 characters"]);
    }

    #[test]
    fn test_email_is_trimmed_before_check() {
        let info = CandidateInfo {
            email: "  ada@example.com ".to_string(),
            ..candidate()
        };
        assert!(validate_candidate(&info, &ValidationRules::default()).is_empty());
    }

    #[test]
    fn test_bad_email_and_phone() {
        let info = CandidateInfo {
            email: "not-an-email".to_string(),
            phone: "0123".to_string(),
            ..candidate()
        };
        let errors = validate_candidate(&info, &ValidationRules::default());
        assert!(errors.contains(&"Invalid email format".to_string()));
        assert!(errors.contains(&"Invalid phone number format".to_string()));
    }

    #[test]
    fn test_experience_cap() {
        let info = CandidateInfo {
            experience: 21,
            ..candidate()
        };
        let errors = validate_candidate(&info, &ValidationRules::default());
        assert_eq!(errors, vec!["Experience cannot exceed 20 years"]);
    }

    #[test]
    fn test_experience_threshold() {
        let position = PositionConfig {
            experience_threshold: 3,
            ..Default::default()
        };
        assert_eq!(
            check_experience_threshold(2, &position).as_deref(),
            Some("Minimum experience required: 3 years")
        );
        assert!(check_experience_threshold(3, &position).is_none());
    }

    #[test]
    fn test_experience_mismatch() {
        assert!(experience_mismatch(5, 3));
        assert!(!experience_mismatch(4, 4));
    }
}
