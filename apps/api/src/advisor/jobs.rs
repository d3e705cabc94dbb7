//! Job matches: LLM-suggested listings with a randomized mock fallback.

use chrono::{Duration, Local};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::advisor::prompts::{fill, JOB_SEARCH_PROMPT};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

const JOB_TITLES: &[&str] = &[
    "Software Engineer",
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "Data Scientist",
    "DevOps Engineer",
    "Product Manager",
    "UI/UX Designer",
    "QA Engineer",
    "System Administrator",
];

const COMPANIES: &[&str] = &[
    "TechCorp",
    "InnovateSoft",
    "Digital Solutions",
    "CloudTech",
    "DataFlow",
    "WebWorks",
    "AppStudio",
    "CodeCraft",
    "DevHub",
    "TechStart",
];

const LOCATIONS: &[&str] = &[
    "San Francisco, CA",
    "New York, NY",
    "Austin, TX",
    "Seattle, WA",
    "Boston, MA",
    "Denver, CO",
    "Chicago, IL",
    "Remote",
    "Hybrid",
];

const DESCRIPTIONS: &[&str] = &[
    "Join our dynamic team to build innovative solutions using cutting-edge technologies.",
    "We're looking for a passionate developer to help us scale our platform.",
    "Opportunity to work on exciting projects with modern tech stack.",
    "Help us transform the industry with your technical expertise.",
    "Collaborate with talented engineers in a fast-paced environment.",
];

const POSTED_DATE_FORMAT: &str = "%B %d, %Y";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobSearchRequest {
    #[serde(default)]
    pub job_position: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub skills: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: String,
    pub posted_date: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatches {
    pub jobs: Vec<Job>,
}

/// Finds job matches. The LLM is only consulted when a position is given;
/// any LLM failure yields mock listings instead.
pub async fn find_job_matches(
    request: &JobSearchRequest,
    llm: Option<&LlmClient>,
    max_jobs: usize,
) -> JobMatches {
    if let Some(llm) = llm.filter(|_| !request.job_position.trim().is_empty()) {
        match find_jobs_with_ai(request, llm).await {
            Ok(mut matches) => {
                matches.jobs.truncate(max_jobs);
                return matches;
            }
            Err(e) => warn!("AI job matching failed, using mock listings: {e}"),
        }
    }

    generate_mock_jobs(request, &mut StdRng::from_entropy())
}

async fn find_jobs_with_ai(
    request: &JobSearchRequest,
    llm: &LlmClient,
) -> Result<JobMatches, LlmError> {
    let location = non_empty_or(&request.location, "Remote/Anywhere");
    let skills = non_empty_or(&request.skills, "General skills");
    let prompt = fill(
        JOB_SEARCH_PROMPT,
        &[
            ("job_position", request.job_position.trim()),
            ("location", location),
            ("skills", skills),
        ],
    );
    llm.call_json(&prompt, JSON_ONLY_SYSTEM).await
}

/// 6–8 plausible listings. A given position or location is used verbatim for
/// every listing; missing ones are drawn at random.
pub fn generate_mock_jobs<R: Rng + ?Sized>(request: &JobSearchRequest, rng: &mut R) -> JobMatches {
    let count = rng.gen_range(6..=8);
    let today = Local::now();

    let jobs = (0..count)
        .map(|_| {
            let title = pick_or(&request.job_position, JOB_TITLES, rng);
            let company = choose(COMPANIES, rng);
            let location = pick_or(&request.location, LOCATIONS, rng);
            let days_ago = rng.gen_range(1..=30);
            let posted_date = (today - Duration::days(days_ago))
                .format(POSTED_DATE_FORMAT)
                .to_string();

            Job {
                title,
                company,
                location,
                posted_date,
                description: choose(DESCRIPTIONS, rng),
                url: "#".to_string(),
            }
        })
        .collect();

    JobMatches { jobs }
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        default
    } else {
        value
    }
}

fn pick_or<R: Rng + ?Sized>(given: &str, pool: &[&str], rng: &mut R) -> String {
    let given = given.trim();
    if given.is_empty() {
        choose(pool, rng)
    } else {
        given.to_string()
    }
}

fn choose<R: Rng + ?Sized>(pool: &[&str], rng: &mut R) -> String {
    pool.choose(rng).copied().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(position: &str, location: &str) -> JobSearchRequest {
        JobSearchRequest {
            job_position: position.to_string(),
            location: location.to_string(),
            skills: String::new(),
        }
    }

    #[test]
    fn test_mock_job_count_in_range() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let matches = generate_mock_jobs(&request("", ""), &mut rng);
            assert!((6..=8).contains(&matches.jobs.len()));
        }
    }

    #[test]
    fn test_given_position_and_location_are_used_verbatim() {
        let mut rng = StdRng::seed_from_u64(7);
        let matches = generate_mock_jobs(&request("Rust Engineer", "Berlin"), &mut rng);
        for job in &matches.jobs {
            assert_eq!(job.title, "Rust Engineer");
            assert_eq!(job.location, "Berlin");
            assert_eq!(job.url, "#");
            assert!(COMPANIES.contains(&job.company.as_str()));
            assert!(DESCRIPTIONS.contains(&job.description.as_str()));
        }
    }

    #[test]
    fn test_missing_fields_are_drawn_from_pools() {
        let mut rng = StdRng::seed_from_u64(11);
        let matches = generate_mock_jobs(&request("", ""), &mut rng);
        for job in &matches.jobs {
            assert!(JOB_TITLES.contains(&job.title.as_str()));
            assert!(LOCATIONS.contains(&job.location.as_str()));
        }
    }

    #[test]
    fn test_posted_date_is_within_last_month() {
        let mut rng = StdRng::seed_from_u64(3);
        let matches = generate_mock_jobs(&request("", ""), &mut rng);
        let today = Local::now().date_naive();
        for job in &matches.jobs {
            let posted =
                chrono::NaiveDate::parse_from_str(&job.posted_date, POSTED_DATE_FORMAT).unwrap();
            let age = (today - posted).num_days();
            assert!((1..=31).contains(&age), "Age was {age}");
        }
    }

    #[tokio::test]
    async fn test_without_llm_returns_mock_jobs() {
        let matches = find_job_matches(&request("Data Scientist", ""), None, 10).await;
        assert!(!matches.jobs.is_empty());
        assert!(matches.jobs.iter().all(|j| j.title == "Data Scientist"));
    }

    #[test]
    fn test_ai_reply_shape_deserializes() {
        let json = r##"{"jobs": [{"title": "SRE", "company": "Acme", "location": "Remote",
            "posted_date": "Yesterday", "description": "Keep it up", "url": "#"}]}"##;
        let matches: JobMatches = serde_json::from_str(json).unwrap();
        assert_eq!(matches.jobs[0].company, "Acme");
    }
}
