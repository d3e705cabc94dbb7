//! Career guidance: skill gaps, development plan, certifications and project ideas.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::advisor::prompts::{fill, CAREER_GUIDANCE_PROMPT};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

/// Items reported per guidance list.
const ITEMS_PER_SECTION: usize = 3;

const ROLE_SKILL_GAPS: &[(&str, [&str; 3])] = &[
    (
        "Software Engineer",
        ["Advanced algorithms", "System design", "Cloud architecture"],
    ),
    (
        "Data Scientist",
        ["Machine learning", "Statistical analysis", "Big data tools"],
    ),
    (
        "Product Manager",
        ["User research", "Data analysis", "Stakeholder management"],
    ),
    (
        "DevOps Engineer",
        [
            "Container orchestration",
            "Infrastructure as code",
            "Monitoring tools",
        ],
    ),
    (
        "UI/UX Designer",
        ["User research", "Prototyping tools", "Design systems"],
    ),
];

const DEFAULT_SKILL_GAPS: [&str; 3] = [
    "Technical skills",
    "Industry knowledge",
    "Practical experience",
];

const DEVELOPMENT_PLANS: &[&str] = &[
    "Take online courses in relevant technologies",
    "Build portfolio projects to showcase skills",
    "Network with professionals in the field",
    "Attend industry conferences and workshops",
    "Contribute to open source projects",
];

const CERTIFICATIONS: &[&str] = &[
    "AWS Certified Solutions Architect",
    "Google Cloud Professional",
    "Microsoft Azure Developer",
    "Certified Scrum Master",
    "Professional certification in relevant field",
];

const PROJECT_IDEAS: &[&str] = &[
    "Build a full-stack web application",
    "Create a mobile app with modern frameworks",
    "Develop a data analysis dashboard",
    "Contribute to an open source project",
    "Create a portfolio website",
];

const MOCK_TIMELINE: &str = "6-12 months depending on commitment";
const MOCK_READINESS: &str =
    "Ready for entry-level positions, needs improvement for senior roles";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuidanceRequest {
    #[serde(default)]
    pub current_role: String,
    #[serde(default)]
    pub experience_years: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub interests: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatedTimeline {
    pub total_estimated_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerGuidance {
    pub skill_gap_analysis: Vec<String>,
    pub skill_development_plan: Vec<String>,
    pub certifications_courses: Vec<String>,
    pub project_ideas: Vec<String>,
    pub estimated_timeline: EstimatedTimeline,
    pub job_readiness_indicator: String,
}

/// Produces guidance from the LLM when a role or skills are given, otherwise
/// (or on any LLM failure) from the role-keyed templates.
pub async fn get_career_guidance(
    request: &GuidanceRequest,
    llm: Option<&LlmClient>,
) -> CareerGuidance {
    let has_context =
        !request.current_role.trim().is_empty() || !request.skills.trim().is_empty();

    if let Some(llm) = llm.filter(|_| has_context) {
        match get_guidance_with_ai(request, llm).await {
            Ok(guidance) => return guidance,
            Err(e) => warn!("AI career guidance failed, using template guidance: {e}"),
        }
    }

    generate_mock_guidance(request, &mut StdRng::from_entropy())
}

async fn get_guidance_with_ai(
    request: &GuidanceRequest,
    llm: &LlmClient,
) -> Result<CareerGuidance, LlmError> {
    let prompt = fill(
        CAREER_GUIDANCE_PROMPT,
        &[
            ("current_role", request.current_role.trim()),
            ("experience_years", request.experience_years.trim()),
            ("skills", request.skills.trim()),
            ("interests", request.interests.trim()),
        ],
    );
    llm.call_json(&prompt, JSON_ONLY_SYSTEM).await
}

pub fn generate_mock_guidance<R: Rng + ?Sized>(
    request: &GuidanceRequest,
    rng: &mut R,
) -> CareerGuidance {
    let role = request.current_role.trim();
    let gaps = ROLE_SKILL_GAPS
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, gaps)| gaps)
        .unwrap_or(&DEFAULT_SKILL_GAPS);

    CareerGuidance {
        skill_gap_analysis: gaps.iter().map(|g| g.to_string()).collect(),
        skill_development_plan: shuffled_prefix(DEVELOPMENT_PLANS, rng),
        certifications_courses: shuffled_prefix(CERTIFICATIONS, rng),
        project_ideas: shuffled_prefix(PROJECT_IDEAS, rng),
        estimated_timeline: EstimatedTimeline {
            total_estimated_time: MOCK_TIMELINE.to_string(),
        },
        job_readiness_indicator: MOCK_READINESS.to_string(),
    }
}

fn shuffled_prefix<R: Rng + ?Sized>(pool: &[&str], rng: &mut R) -> Vec<String> {
    let mut items = pool.to_vec();
    items.shuffle(rng);
    items
        .into_iter()
        .take(ITEMS_PER_SECTION)
        .map(String::from)
        .collect()
}
