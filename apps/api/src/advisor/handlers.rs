//! Axum route handlers for the advisor API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::advisor::chat::{chat_with_interview_bot, ChatRequest};
use crate::advisor::guidance::{get_career_guidance, CareerGuidance, GuidanceRequest};
use crate::advisor::interview::{get_interview_questions, InterviewQuestions, InterviewRequest};
use crate::advisor::jobs::{find_job_matches, JobMatches, JobSearchRequest};
use crate::snapshots;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
struct ConversationSnapshot<'a> {
    job_role: &'a str,
    message: &'a str,
    response: &'a str,
}

/// POST /api/find_jobs
pub async fn handle_find_jobs(
    State(state): State<AppState>,
    Json(request): Json<JobSearchRequest>,
) -> Json<JobMatches> {
    let matches = find_job_matches(&request, state.llm(), state.config.max_jobs_to_return).await;
    state.snapshots.write(snapshots::JOB_MATCHES, &matches).await;
    Json(matches)
}

/// POST /api/career_guidance
pub async fn handle_career_guidance(
    State(state): State<AppState>,
    Json(request): Json<GuidanceRequest>,
) -> Json<CareerGuidance> {
    let guidance = get_career_guidance(&request, state.llm()).await;
    state
        .snapshots
        .write(snapshots::CAREER_GUIDANCE, &guidance)
        .await;
    Json(guidance)
}

/// POST /api/interview_questions
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Json(request): Json<InterviewRequest>,
) -> Json<InterviewQuestions> {
    let questions = get_interview_questions(&request, state.llm()).await;
    state
        .snapshots
        .write(snapshots::INTERVIEW_PREP, &questions)
        .await;
    Json(questions)
}

/// POST /api/interview_chat
///
/// Every message gets a reply; an empty one gets a general follow-up.
pub async fn handle_interview_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let response = chat_with_interview_bot(&request, state.llm()).await;
    state
        .snapshots
        .write(
            snapshots::CONVERSATION,
            &ConversationSnapshot {
                job_role: &request.job_role,
                message: &request.message,
                response: &response,
            },
        )
        .await;

    Json(ChatResponse { response })
}
