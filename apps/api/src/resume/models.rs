use chrono::Local;
use serde::{Deserialize, Serialize};

/// Placeholder for a scalar field no rule could find.
pub const NOT_FOUND: &str = "Not found";
/// Placeholder for a sub-field that is never derived from the text.
pub const NOT_SPECIFIED: &str = "Not specified";
pub const PLACEHOLDER_SUMMARY: &str = "Professional summary extracted from resume";
pub const PLACEHOLDER_INSTITUTION: &str = "University/College";
pub const PLACEHOLDER_RESPONSIBILITIES: &str = "Responsibility details not extracted";
pub const NO_EXPERIENCE_FOUND: &str = "No experience found";

const PARSED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub job_role: String,
    pub company: String,
    pub duration: String,
    pub responsibilities: Vec<String>,
}

impl ExperienceEntry {
    /// The single entry reported when no experience pattern matched.
    pub fn not_specified() -> Self {
        Self {
            job_role: NOT_SPECIFIED.to_string(),
            company: NOT_SPECIFIED.to_string(),
            duration: NOT_SPECIFIED.to_string(),
            responsibilities: vec![NO_EXPERIENCE_FOUND.to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub years: String,
}

impl EducationEntry {
    /// The single entry reported when no education pattern matched.
    pub fn not_specified() -> Self {
        Self {
            degree: NOT_SPECIFIED.to_string(),
            institution: NOT_SPECIFIED.to_string(),
            years: NOT_SPECIFIED.to_string(),
        }
    }
}

/// The canonical structured view of a resume, produced by either structuring path.
///
/// Deserializing a model reply into this type is the shape check for the AI path:
/// a reply missing any field is treated as a failed call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredResume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub resume_score: i64,
    /// Stamped by the structuring service once a path has succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_date: Option<String>,
}

impl StructuredResume {
    pub fn stamp_parsed_date(&mut self) {
        self.parsed_date = Some(Local::now().format(PARSED_DATE_FORMAT).to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_reply_without_parsed_date_deserializes() {
        let json = r#"{
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "555-123-4567",
            "summary": "Backend engineer",
            "skills": ["Rust", "Go"],
            "experience": [{
                "job_role": "Engineer",
                "company": "Acme",
                "duration": "2019-2023",
                "responsibilities": ["Built things"]
            }],
            "education": [{"degree": "B.S.", "institution": "MIT", "years": "2015-2019"}],
            "resume_score": 120
        }"#;
        let resume: StructuredResume = serde_json::from_str(json).unwrap();
        assert_eq!(resume.resume_score, 120);
        assert!(resume.parsed_date.is_none());
    }

    #[test]
    fn test_reply_missing_field_is_rejected() {
        let json = r#"{"name": "Jane Doe", "email": "jane@example.com"}"#;
        assert!(serde_json::from_str::<StructuredResume>(json).is_err());
    }

    #[test]
    fn test_stamp_parsed_date_format() {
        let mut resume = StructuredResume {
            name: NOT_FOUND.into(),
            email: NOT_FOUND.into(),
            phone: NOT_FOUND.into(),
            summary: PLACEHOLDER_SUMMARY.into(),
            skills: vec![],
            experience: vec![ExperienceEntry::not_specified()],
            education: vec![EducationEntry::not_specified()],
            resume_score: 65,
            parsed_date: None,
        };
        resume.stamp_parsed_date();
        let stamp = resume.parsed_date.unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(&stamp, PARSED_DATE_FORMAT).is_ok());
    }
}
