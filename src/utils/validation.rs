use crate::domain::model::{PortfolioDraft, ValidationReport};
use crate::utils::error::{ForgeError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const NAME_MIN_LEN: usize = 2;
pub const ROLE_MIN_LEN: usize = 2;
pub const ABOUT_MIN_LEN: usize = 50;
/// The UI caps the about textarea at 180 characters; the schema enforces the
/// same bound so a draft built outside the form cannot bypass it.
pub const ABOUT_MAX_LEN: usize = 180;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_re().is_match(value)
}

/// Checks a draft against the submission schema. An empty report means the
/// draft may be deployed. The avatar field is optional and never rejected.
pub fn validate_draft(draft: &PortfolioDraft) -> ValidationReport {
    let mut report = ValidationReport::default();

    if draft.name.chars().count() < NAME_MIN_LEN {
        report.add("name", "Name is too short");
    }

    if draft.role.chars().count() < ROLE_MIN_LEN {
        report.add("role", "Role is too short");
    }

    let about_len = draft.about.chars().count();
    if about_len < ABOUT_MIN_LEN {
        report.add("about", "Please write at least 50 characters about yourself");
    } else if about_len > ABOUT_MAX_LEN {
        report.add("about", "Please keep the about section under 180 characters");
    }

    if !is_valid_email(&draft.email) {
        report.add("email", "Invalid email address");
    }

    if draft.skills.is_empty() {
        report.add("skills", "Add at least one skill");
    }

    report
}

impl Validate for PortfolioDraft {
    fn validate(&self) -> Result<()> {
        let report = validate_draft(self);
        let result = match report.iter().next() {
            Some((field, message)) => Err(ForgeError::ValidationError {
                field: field.to_string(),
                message: message.to_string(),
            }),
            None => Ok(()),
        };
        result
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ForgeError::ConfigError {
            field: field_name.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ForgeError::ConfigError {
                field: field_name.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ForgeError::ConfigError {
            field: field_name.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ForgeError::ConfigError {
            field: field_name.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ForgeError::ConfigError {
            field: field_name.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ForgeError::ConfigError {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> PortfolioDraft {
        PortfolioDraft {
            name: "Ada Lovelace".to_string(),
            role: "Software Engineer".to_string(),
            about: "I build analytical engines and write programs for machines that do not exist yet today.".to_string(),
            email: "user@example.com".to_string(),
            skills: vec!["mathematics".to_string(), "rust".to_string()],
            ..PortfolioDraft::default()
        }
    }

    #[test]
    fn test_valid_draft_produces_empty_report() {
        let report = validate_draft(&valid_draft());
        assert!(report.is_empty());
    }

    #[test]
    fn test_name_and_role_minimum_length() {
        let mut draft = valid_draft();
        draft.name = "A".to_string();
        draft.role = "x".to_string();

        let report = validate_draft(&draft);
        assert_eq!(report.error("name"), Some("Name is too short"));
        assert_eq!(report.error("role"), Some("Role is too short"));

        draft.name = "Al".to_string();
        draft.role = "QA".to_string();
        let report = validate_draft(&draft);
        assert!(report.error("name").is_none());
        assert!(report.error("role").is_none());
    }

    #[test]
    fn test_about_length_boundaries() {
        let mut draft = valid_draft();

        draft.about = "x".repeat(49);
        assert!(validate_draft(&draft).error("about").is_some());

        draft.about = "x".repeat(50);
        assert!(validate_draft(&draft).error("about").is_none());

        draft.about = "x".repeat(180);
        assert!(validate_draft(&draft).error("about").is_none());

        draft.about = "x".repeat(181);
        assert!(validate_draft(&draft).error("about").is_some());
    }

    #[test]
    fn test_email_grammar() {
        assert!(is_valid_email("user@example.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("user@nodot"));

        let mut draft = valid_draft();
        draft.email = "not-an-email".to_string();
        let report = validate_draft(&draft);
        assert_eq!(report.error("email"), Some("Invalid email address"));
    }

    #[test]
    fn test_skills_must_not_be_empty() {
        let mut draft = valid_draft();
        draft.skills.clear();
        let report = validate_draft(&draft);
        assert_eq!(report.error("skills"), Some("Add at least one skill"));
    }

    #[test]
    fn test_avatar_is_optional() {
        let mut draft = valid_draft();
        draft.avatar = None;
        assert!(validate_draft(&draft).is_empty());
    }

    #[test]
    fn test_draft_validate_surfaces_the_first_error() {
        assert!(valid_draft().validate().is_ok());

        let mut draft = valid_draft();
        draft.email = "not-an-email".to_string();
        match draft.validate() {
            Err(ForgeError::ValidationError { field, .. }) => assert_eq!(field, "email"),
            other => panic!("expected a validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("avatar_url", "https://example.com/a.png").is_ok());
        assert!(validate_url("avatar_url", "http://example.com").is_ok());
        assert!(validate_url("avatar_url", "").is_err());
        assert!(validate_url("avatar_url", "invalid-url").is_err());
        assert!(validate_url("avatar_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("repo_name", "portfolio").is_ok());
        assert!(validate_non_empty_string("repo_name", "   ").is_err());
    }
}
