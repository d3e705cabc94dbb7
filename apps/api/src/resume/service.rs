//! Resume Structuring Service: extraction plus the remote → rule-based fallback chain.
//!
//! Only text-extraction failures leave this module as errors. Anything that goes
//! wrong on the AI side is logged and absorbed by the rule-based structurer.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::llm_client::LlmClient;
use crate::resume::extractor::{extract_text, ExtractionError};
use crate::resume::models::StructuredResume;
use crate::resume::structurer::{RemoteAiStructurer, RuleBasedStructurer, TextStructurer};

/// Where the resume text comes from.
#[derive(Debug, Clone)]
pub enum ResumeSource {
    /// An uploaded document on disk.
    Path(PathBuf),
    /// Text submitted directly.
    Text(String),
}

#[derive(Clone)]
pub struct ResumeStructuringService {
    remote: Option<Arc<dyn TextStructurer>>,
    fallback: RuleBasedStructurer,
}

impl ResumeStructuringService {
    pub fn new(remote: Option<Arc<dyn TextStructurer>>, fallback: RuleBasedStructurer) -> Self {
        Self { remote, fallback }
    }

    /// Wires the LLM-backed structurer when a client is configured.
    pub fn from_llm(llm: Option<LlmClient>) -> Self {
        let remote = llm.map(|client| {
            Arc::new(RemoteAiStructurer::new(client)) as Arc<dyn TextStructurer>
        });
        Self::new(remote, RuleBasedStructurer::default())
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub async fn structure(
        &self,
        source: ResumeSource,
    ) -> Result<StructuredResume, ExtractionError> {
        let text = match source {
            ResumeSource::Path(path) => {
                tokio::task::spawn_blocking(move || extract_text(&path)).await??
            }
            // Submitted text skips extraction, blank or not.
            ResumeSource::Text(text) => text,
        };

        Ok(self.structure_text(&text).await)
    }

    /// Structures already-extracted text. Always yields a complete record.
    pub async fn structure_text(&self, text: &str) -> StructuredResume {
        if let Some(remote) = &self.remote {
            match remote.structure(text).await {
                Ok(mut resume) => {
                    info!("Resume structured by {} backend", remote.name());
                    resume.stamp_parsed_date();
                    return resume;
                }
                Err(e) => warn!(
                    "{} structuring failed, falling back to rule-based parsing: {e}",
                    remote.name()
                ),
            }
        }

        let mut resume = self.fallback.structure_text(text);
        resume.stamp_parsed_date();
        resume
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::llm_client::LlmError;
    use crate::resume::models::{
        EducationEntry, ExperienceEntry, NOT_FOUND, PLACEHOLDER_SUMMARY,
    };
    use crate::resume::structurer::StructuringError;

    /// Remote stand-in that counts calls and either fails or returns a fixed record.
    struct StubRemote {
        calls: AtomicUsize,
        reply: Option<StructuredResume>,
    }

    impl StubRemote {
        fn failing() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                reply: None,
            })
        }

        fn replying(resume: StructuredResume) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                reply: Some(resume),
            })
        }
    }

    #[async_trait]
    impl TextStructurer for StubRemote {
        fn name(&self) -> &'static str {
            "stub"
        }

        async fn structure(&self, _text: &str) -> Result<StructuredResume, StructuringError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply
                .clone()
                .ok_or(StructuringError::Llm(LlmError::EmptyContent))
        }
    }

    fn service_with(remote: Arc<StubRemote>) -> ResumeStructuringService {
        ResumeStructuringService::new(
            Some(remote as Arc<dyn TextStructurer>),
            RuleBasedStructurer::default(),
        )
    }

    fn ai_resume() -> StructuredResume {
        StructuredResume {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "555-000-1111".into(),
            summary: "Analytical engine programmer".into(),
            skills: vec!["Mathematics".into()],
            experience: vec![],
            education: vec![],
            resume_score: 99,
            parsed_date: None,
        }
    }

    const TEXT: &str = "Jane Doe\njane.doe@example.com\nPython and React developer at Acme Inc";

    #[tokio::test]
    async fn test_failing_remote_falls_back_to_rules() {
        let remote = StubRemote::failing();
        let service = service_with(remote.clone());

        let resume = service
            .structure(ResumeSource::Text(TEXT.to_string()))
            .await
            .unwrap();

        assert_eq!(remote.calls.load(Ordering::SeqCst), 1);
        assert_eq!(resume.name, "Jane Doe");
        assert_eq!(resume.email, "jane.doe@example.com");
        assert_eq!(resume.phone, NOT_FOUND);
        assert_eq!(resume.skills, vec!["Python", "React"]);
        assert_eq!(resume.summary, PLACEHOLDER_SUMMARY);
        assert!(resume.parsed_date.is_some());
    }

    #[tokio::test]
    async fn test_remote_result_is_returned_unvalidated_with_timestamp() {
        let remote = StubRemote::replying(ai_resume());
        let service = service_with(remote.clone());

        let resume = service.structure_text(TEXT).await;

        assert_eq!(resume.name, "Ada Lovelace");
        assert_eq!(resume.resume_score, 99);
        assert!(resume.parsed_date.is_some());
    }

    #[tokio::test]
    async fn test_without_remote_uses_rules() {
        let service = ResumeStructuringService::from_llm(None);
        assert!(!service.has_remote());

        let resume = service.structure_text(TEXT).await;
        assert_eq!(resume.name, "Jane Doe");
        assert!((50..=95).contains(&resume.resume_score));
    }

    #[tokio::test]
    async fn test_missing_document_short_circuits() {
        let remote = StubRemote::replying(ai_resume());
        let service = service_with(remote.clone());
        let dir = tempfile::tempdir().unwrap();

        let result = service
            .structure(ResumeSource::Path(dir.path().join("missing.pdf")))
            .await;

        assert!(matches!(result, Err(ExtractionError::Missing(_))));
        assert_eq!(remote.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_zero_byte_document_short_circuits() {
        let remote = StubRemote::replying(ai_resume());
        let service = service_with(remote.clone());
        let file = tempfile::NamedTempFile::new().unwrap();

        let result = service
            .structure(ResumeSource::Path(file.path().to_path_buf()))
            .await;

        assert!(matches!(result, Err(ExtractionError::EmptyFile(_))));
        assert_eq!(remote.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_blank_text_yields_sentinel_record() {
        let service = ResumeStructuringService::from_llm(None);
        let resume = service
            .structure(ResumeSource::Text("  \n ".into()))
            .await
            .unwrap();

        assert_eq!(resume.name, NOT_FOUND);
        assert_eq!(resume.email, NOT_FOUND);
        assert!(resume.skills.is_empty());
        assert_eq!(resume.education, vec![EducationEntry::not_specified()]);
        assert_eq!(resume.experience, vec![ExperienceEntry::not_specified()]);
        assert_eq!(resume.resume_score, 65);
        assert!(resume.parsed_date.is_some());
    }

    #[tokio::test]
    async fn test_text_document_on_disk_is_structured() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TEXT.as_bytes()).unwrap();
        file.flush().unwrap();

        let service = service_with(StubRemote::failing());
        let resume = service
            .structure(ResumeSource::Path(file.path().to_path_buf()))
            .await
            .unwrap();

        assert_eq!(resume.name, "Jane Doe");
        assert_eq!(resume.experience[0].company, "Inc");
    }
}
