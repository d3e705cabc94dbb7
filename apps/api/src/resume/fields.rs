//! Rule-Based Field Extractor: regex and vocabulary rules over raw resume text.
//!
//! The rules are data: `FieldRules` bundles the contact patterns, the skill
//! vocabulary and the education/experience entry patterns, so a caller can
//! swap any of them without touching the matching code.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::resume::models::{
    EducationEntry, ExperienceEntry, NOT_FOUND, NOT_SPECIFIED, PLACEHOLDER_INSTITUTION,
    PLACEHOLDER_RESPONSIBILITIES,
};

/// Upper bound on reported skills. Vocabulary order decides which survive.
pub const MAX_SKILLS: usize = 10;

pub const TECHNICAL_SKILLS: &[&str] = &[
    "Python",
    "Java",
    "JavaScript",
    "React",
    "Node.js",
    "SQL",
    "MongoDB",
    "AWS",
    "Docker",
    "Kubernetes",
    "Git",
    "HTML",
    "CSS",
    "TypeScript",
    "Angular",
    "Vue.js",
    "PHP",
    "C++",
    "C#",
    ".NET",
    "Ruby",
    "Go",
    "Rust",
    "Swift",
    "Kotlin",
    "Scala",
    "R",
    "MATLAB",
    "TensorFlow",
    "PyTorch",
    "Machine Learning",
    "Data Science",
    "DevOps",
    "Agile",
];

const DEGREE_KEYWORDS: &str = r"Bachelor|Master|PhD|B\.S\.|M\.S\.|B\.A\.|M\.A\.";
const INSTITUTION_KEYWORDS: &str = r"University|College|Institute";
const ROLE_KEYWORDS: &str = r"Software Engineer|Developer|Programmer|Manager|Analyst|Consultant";
const COMPANY_SUFFIXES: &str = r"Company|Corp|Inc|LLC";

const NAME_PATTERN: &str = r"[A-Z][a-z]+ [A-Z][a-z]+";
const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b";
const PHONE_PATTERN: &str = r"\+?1?[-.\s]?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}";

static DEFAULT_RULES: Lazy<FieldRules> =
    Lazy::new(|| FieldRules::standard().expect("built-in extraction rules must compile"));

/// Everything the rule-based path pulls out of a resume.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
}

/// A skill and the compiled whole-token matcher for it.
#[derive(Debug, Clone)]
struct SkillRule {
    skill: String,
    pattern: Regex,
}

/// An entry pattern whose named captures feed entry fields.
///
/// Education patterns only use the full match; experience patterns read the
/// `role` and `company` captures, so both keyword orders map the same way.
#[derive(Debug, Clone)]
pub struct EntryPattern {
    pattern: Regex,
}

impl EntryPattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: RegexBuilder::new(pattern).case_insensitive(true).build()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct FieldRules {
    name: Regex,
    email: Regex,
    phone: Regex,
    skills: Vec<SkillRule>,
    education: Vec<EntryPattern>,
    experience: Vec<EntryPattern>,
}

impl FieldRules {
    /// The stock rule set: 34-skill vocabulary, degree/institution and
    /// role/company-suffix patterns in both keyword orders.
    pub fn standard() -> Result<Self, regex::Error> {
        Ok(Self {
            name: Regex::new(NAME_PATTERN)?,
            email: Regex::new(EMAIL_PATTERN)?,
            phone: Regex::new(PHONE_PATTERN)?,
            skills: compile_skills(TECHNICAL_SKILLS)?,
            education: vec![
                EntryPattern::new(&format!(
                    r"(?:{DEGREE_KEYWORDS}).*?(?:{INSTITUTION_KEYWORDS})"
                ))?,
                EntryPattern::new(&format!(
                    r"(?:{INSTITUTION_KEYWORDS}).*?(?:{DEGREE_KEYWORDS})"
                ))?,
            ],
            experience: vec![
                EntryPattern::new(&format!(
                    r"(?P<role>{ROLE_KEYWORDS}).*?(?P<company>{COMPANY_SUFFIXES})"
                ))?,
                EntryPattern::new(&format!(
                    r"(?P<company>{COMPANY_SUFFIXES}).*?(?P<role>{ROLE_KEYWORDS})"
                ))?,
            ],
        })
    }

    /// Replaces the skill vocabulary, keeping its order as the reporting order.
    #[cfg(test)]
    pub fn with_skills<S: AsRef<str>>(mut self, vocabulary: &[S]) -> Result<Self, regex::Error> {
        self.skills = compile_skills(vocabulary)?;
        Ok(self)
    }

    #[cfg(test)]
    pub fn with_education(mut self, patterns: Vec<EntryPattern>) -> Self {
        self.education = patterns;
        self
    }

    #[cfg(test)]
    pub fn with_experience(mut self, patterns: Vec<EntryPattern>) -> Self {
        self.experience = patterns;
        self
    }

    pub fn extract_fields(&self, text: &str) -> ExtractedFields {
        ExtractedFields {
            name: first_match(&self.name, text),
            email: first_match(&self.email, text),
            phone: first_match(&self.phone, text),
            skills: self.extract_skills(text),
            education: self.extract_education(text),
            experience: self.extract_experience(text),
        }
    }

    /// Vocabulary-ordered skills present in `text`, at most `MAX_SKILLS`.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        self.skills
            .iter()
            .filter(|rule| rule.pattern.is_match(text))
            .map(|rule| rule.skill.clone())
            .take(MAX_SKILLS)
            .collect()
    }

    pub fn extract_education(&self, text: &str) -> Vec<EducationEntry> {
        let entries: Vec<EducationEntry> = self
            .education
            .iter()
            .flat_map(|p| p.pattern.find_iter(text))
            .map(|m| EducationEntry {
                degree: m.as_str().to_string(),
                institution: PLACEHOLDER_INSTITUTION.to_string(),
                years: NOT_SPECIFIED.to_string(),
            })
            .collect();

        if entries.is_empty() {
            vec![EducationEntry::not_specified()]
        } else {
            entries
        }
    }

    pub fn extract_experience(&self, text: &str) -> Vec<ExperienceEntry> {
        let entries: Vec<ExperienceEntry> = self
            .experience
            .iter()
            .flat_map(|p| p.pattern.captures_iter(text))
            .map(|caps| ExperienceEntry {
                job_role: capture_or_not_specified(&caps, "role"),
                company: capture_or_not_specified(&caps, "company"),
                duration: NOT_SPECIFIED.to_string(),
                responsibilities: vec![PLACEHOLDER_RESPONSIBILITIES.to_string()],
            })
            .collect();

        if entries.is_empty() {
            vec![ExperienceEntry::not_specified()]
        } else {
            entries
        }
    }
}

/// The stock rule set, compiled once.
pub fn default_rules() -> &'static FieldRules {
    &DEFAULT_RULES
}

fn compile_skills<S: AsRef<str>>(vocabulary: &[S]) -> Result<Vec<SkillRule>, regex::Error> {
    vocabulary
        .iter()
        .map(|skill| {
            let skill = skill.as_ref();
            Ok(SkillRule {
                skill: skill.to_string(),
                pattern: RegexBuilder::new(&whole_token_pattern(skill))
                    .case_insensitive(true)
                    .build()?,
            })
        })
        .collect()
}

/// Builds a pattern matching `term` as a standalone token.
///
/// `\b` only sits next to word characters, so terms such as `C++` or `.NET`
/// get an explicit non-word-or-edge guard on their symbol side instead.
fn whole_token_pattern(term: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let starts_word = term.chars().next().is_some_and(is_word);
    let ends_word = term.chars().last().is_some_and(is_word);

    let prefix = if starts_word { r"\b" } else { r"(?:^|[^\w])" };
    let suffix = if ends_word { r"\b" } else { r"(?:$|[^\w])" };
    format!("{prefix}{}{suffix}", regex::escape(term))
}

fn first_match(pattern: &Regex, text: &str) -> String {
    pattern
        .find(text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

fn capture_or_not_specified(caps: &regex::Captures<'_>, group: &str) -> String {
    caps.name(group)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}
