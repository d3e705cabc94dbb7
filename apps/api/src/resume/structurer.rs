//! Text structurers: pluggable, trait-based backends that turn resume text into
//! a `StructuredResume`.
//!
//! `RemoteAiStructurer` asks the LLM; `RuleBasedStructurer` runs the regex rule
//! table and the heuristic scorer. The structuring service owns the fallback
//! chain between them.

use async_trait::async_trait;
use thiserror::Error;

use crate::llm_client::{LlmClient, LlmError};
use crate::resume::fields::FieldRules;
use crate::resume::models::{StructuredResume, PLACEHOLDER_SUMMARY};
use crate::resume::prompts::{build_structure_prompt, RESUME_STRUCTURE_SYSTEM};
use crate::resume::scoring::compute_resume_score;

#[derive(Debug, Error)]
pub enum StructuringError {
    #[error("LLM structuring failed: {0}")]
    Llm(#[from] LlmError),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to add a structuring backend without touching the service
/// or the handlers. Carried in the service as `Arc<dyn TextStructurer>`.
#[async_trait]
pub trait TextStructurer: Send + Sync {
    /// Short backend label for logs.
    fn name(&self) -> &'static str;

    async fn structure(&self, text: &str) -> Result<StructuredResume, StructuringError>;
}

// ────────────────────────────────────────────────────────────────────────────
// RemoteAiStructurer
// ────────────────────────────────────────────────────────────────────────────

pub struct RemoteAiStructurer {
    llm: LlmClient,
}

impl RemoteAiStructurer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl TextStructurer for RemoteAiStructurer {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn structure(&self, text: &str) -> Result<StructuredResume, StructuringError> {
        let prompt = build_structure_prompt(text);
        let resume = self
            .llm
            .call_json::<StructuredResume>(&prompt, RESUME_STRUCTURE_SYSTEM)
            .await?;
        Ok(resume)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// RuleBasedStructurer
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic structurer. Never fails, so it is the end of every fallback chain.
#[derive(Clone)]
pub struct RuleBasedStructurer {
    rules: FieldRules,
}

impl RuleBasedStructurer {
    pub fn new(rules: FieldRules) -> Self {
        Self { rules }
    }

    pub fn structure_text(&self, text: &str) -> StructuredResume {
        let fields = self.rules.extract_fields(text);
        // Sentinel entries count towards the score, same as real matches.
        let resume_score = compute_resume_score(
            fields.skills.len(),
            fields.education.len(),
            fields.experience.len(),
        );

        StructuredResume {
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            summary: PLACEHOLDER_SUMMARY.to_string(),
            skills: fields.skills,
            experience: fields.experience,
            education: fields.education,
            resume_score,
            parsed_date: None,
        }
    }
}

impl Default for RuleBasedStructurer {
    fn default() -> Self {
        Self::new(crate::resume::fields::default_rules().clone())
    }
}

#[async_trait]
impl TextStructurer for RuleBasedStructurer {
    fn name(&self) -> &'static str {
        "rules"
    }

    async fn structure(&self, text: &str) -> Result<StructuredResume, StructuringError> {
        Ok(self.structure_text(text))
    }
}
