pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::advisor::handlers as advisor;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/resume/upload", post(resume::handle_upload))
        .route("/api/process_resume", post(resume::handle_process_resume))
        // Advisor API
        .route("/api/find_jobs", post(advisor::handle_find_jobs))
        .route("/api/career_guidance", post(advisor::handle_career_guidance))
        .route(
            "/api/interview_questions",
            post(advisor::handle_interview_questions),
        )
        .route("/api/interview_chat", post(advisor::handle_interview_chat))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn app() -> Router {
        build_router(AppState::from_config(Config::default()).unwrap())
    }

    async fn post_json(uri: &str, body: Value) -> Response {
        app()
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn multipart_request(field: &str, file_name: &str, content: &str) -> Request<Body> {
        let boundary = "X-CAREER-ADVISOR-BOUNDARY";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n\
             {content}\r\n\
             --{boundary}--\r\n"
        );
        Request::post("/api/resume/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "career-advisor-api");
    }

    #[tokio::test]
    async fn test_process_resume_uses_rules_without_api_key() {
        let response = post_json(
            "/api/process_resume",
            json!({"resume_text": "John Smith\njohn@smith.io\n555-123-4567\nPython, Docker"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["name"], "John Smith");
        assert_eq!(body["email"], "john@smith.io");
        assert_eq!(body["phone"], "555-123-4567");
        assert_eq!(body["skills"], json!(["Python", "Docker"]));
        assert!(body["parsed_date"].is_string());
    }

    #[tokio::test]
    async fn test_process_resume_blank_text_returns_sentinel_record() {
        let response = post_json("/api/process_resume", json!({"resume_text": "   "})).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["name"], "Not found");
        assert_eq!(body["resume_score"], 65);
        assert_eq!(body["experience"][0]["job_role"], "Not specified");
    }

    #[tokio::test]
    async fn test_upload_text_document() {
        let response = app()
            .oneshot(multipart_request(
                "resume",
                "resume.txt",
                "Mary Major\nmary@example.org\nSenior Developer at Widget Corp",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["name"], "Mary Major");
        assert_eq!(body["experience"][0]["company"], "Corp");
    }

    #[tokio::test]
    async fn test_upload_without_resume_field_is_rejected() {
        let response = app()
            .oneshot(multipart_request("document", "resume.pdf", "data"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_undecodable_document_is_unprocessable() {
        let response = app()
            .oneshot(multipart_request("resume", "resume.pdf", "%PDF-1.4 \u{0}\u{1}garbage"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Could not extract text from the uploaded file");
    }

    #[tokio::test]
    async fn test_find_jobs_returns_mock_listings() {
        let response = post_json(
            "/api/find_jobs",
            json!({"job_position": "Rust Engineer", "location": "Remote"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let jobs = body["jobs"].as_array().unwrap();
        assert!((6..=8).contains(&jobs.len()));
        assert_eq!(jobs[0]["title"], "Rust Engineer");
    }

    #[tokio::test]
    async fn test_career_guidance_with_empty_body_fields() {
        let response = post_json("/api/career_guidance", json!({})).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["skill_gap_analysis"][0], "Technical skills");
    }

    #[tokio::test]
    async fn test_interview_questions() {
        let response = post_json(
            "/api/interview_questions",
            json!({"job_role": "Data Scientist", "experience_level": "Senior"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["interview_questions"][0]["category"], "Technical");
    }

    #[tokio::test]
    async fn test_interview_chat() {
        let response = post_json(
            "/api/interview_chat",
            json!({"message": "hello", "job_role": "QA Engineer"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["response"].as_str().unwrap().contains("QA Engineer"));
    }

    #[tokio::test]
    async fn test_interview_chat_empty_message_gets_default_reply() {
        let response = post_json("/api/interview_chat", json!({"message": ""})).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let reply = body["response"].as_str().unwrap();
        assert!(reply.contains("Software Engineer"), "Reply was {reply}");
    }
}
