use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::resume::service::ResumeStructuringService;
use crate::snapshots::SnapshotWriter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Client for the advisor features. `None` runs every feature on its mock generator.
    pub llm: Option<LlmClient>,
    pub resumes: ResumeStructuringService,
    pub snapshots: SnapshotWriter,
}

impl AppState {
    /// Builds the state from configuration. The resume parser and the advisor
    /// features share one HTTP client but may target different models.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let llm = config
            .gemini_api_key
            .clone()
            .map(|key| LlmClient::new(key, config.advisor_model.clone()))
            .transpose()?;
        let parser_llm = llm
            .as_ref()
            .map(|client| client.with_model(config.resume_parser_model.clone()));

        Ok(Self {
            resumes: ResumeStructuringService::from_llm(parser_llm),
            snapshots: SnapshotWriter::new(config.output_dir.clone()),
            llm,
            config,
        })
    }

    pub fn llm(&self) -> Option<&LlmClient> {
        self.llm.as_ref()
    }
}
