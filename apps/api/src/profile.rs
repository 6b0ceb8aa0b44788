//! Input collection. Turns the raw form payload into a validated `Profile`.

use serde::Deserialize;

use crate::errors::AppError;

/// Raw form payload from `POST /`. Every field is optional so extraction never
/// fails; `Profile::collect` decides what is actually required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileForm {
    pub name: Option<String>,
    pub role: Option<String>,
    /// Older form builds post the target role as `job_title`.
    pub job_title: Option<String>,
    pub skills: Option<String>,
    pub company: Option<String>,
    pub experience_text: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub address: Option<String>,
}

/// A sanitized applicant profile. Lives for one request only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub skills: String,
    pub company: Option<String>,
    pub experience: Option<String>,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub address: Option<String>,
}

impl Profile {
    /// Trims every field, treats blank values as absent, and rejects the form
    /// when any of name, role or skills is missing. All missing required fields
    /// are reported in one message.
    pub fn collect(form: ProfileForm) -> Result<Self, AppError> {
        let name = clean(form.name);
        let role = clean(form.role).or_else(|| clean(form.job_title));
        let skills = clean(form.skills);

        let missing: Vec<&str> = [("name", &name), ("role", &role), ("skills", &skills)]
            .into_iter()
            .filter(|(_, value)| value.is_none())
            .map(|(field, _)| field)
            .collect();

        match (name, role, skills) {
            (Some(name), Some(role), Some(skills)) => Ok(Profile {
                name,
                role,
                skills,
                company: clean(form.company),
                experience: clean(form.experience_text),
                contact: ContactInfo {
                    email: clean(form.email),
                    phone: clean(form.phone),
                    linkedin: clean(form.linkedin),
                    github: clean(form.github),
                    address: clean(form.address),
                },
            }),
            _ => Err(AppError::Validation(format!(
                "Missing required field(s): {}",
                missing.join(", ")
            ))),
        }
    }
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, role: &str, skills: &str) -> ProfileForm {
        ProfileForm {
            name: Some(name.to_string()),
            role: Some(role.to_string()),
            skills: Some(skills.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_collect_trims_required_fields() {
        let profile = Profile::collect(form("  Jane Doe ", "Data Analyst\n", "SQL, Python")).unwrap();
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.role, "Data Analyst");
        assert_eq!(profile.skills, "SQL, Python");
    }

    #[test]
    fn test_blank_optional_fields_become_absent() {
        let mut f = form("Jane Doe", "Data Analyst", "SQL");
        f.company = Some("   ".to_string());
        f.email = Some("jane@example.com ".to_string());
        let profile = Profile::collect(f).unwrap();
        assert_eq!(profile.company, None);
        assert_eq!(profile.contact.email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_missing_skills_is_validation_error() {
        let err = Profile::collect(form("Jane Doe", "Data Analyst", " ")).unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("skills")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_all_missing_fields_reported_together() {
        let err = Profile::collect(ProfileForm::default()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("name"));
        assert!(msg.contains("role"));
        assert!(msg.contains("skills"));
    }

    #[test]
    fn test_job_title_is_accepted_for_role() {
        let f = ProfileForm {
            name: Some("Jane Doe".to_string()),
            job_title: Some("Data Analyst".to_string()),
            skills: Some("SQL".to_string()),
            ..Default::default()
        };
        assert_eq!(Profile::collect(f).unwrap().role, "Data Analyst");
    }
}
