//! Optional JSON snapshots of results, written under `OUTPUT_DIR`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use tracing::{debug, warn};

pub const STRUCTURED_RESUME: &str = "structured_resume.json";
pub const JOB_MATCHES: &str = "job_matches.json";
pub const CAREER_GUIDANCE: &str = "career_guidance.json";
pub const INTERVIEW_PREP: &str = "interview_prep.json";
pub const CONVERSATION: &str = "conversation.json";

#[derive(Debug, Clone, Default)]
pub struct SnapshotWriter {
    dir: Option<PathBuf>,
}

impl SnapshotWriter {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    /// Writes `value` as pretty JSON to `<dir>/<file_name>`. No-op when disabled.
    /// Failures are logged, never returned.
    pub async fn write<T: Serialize>(&self, file_name: &str, value: &T) {
        let Some(dir) = &self.dir else {
            return;
        };

        match write_json(dir, file_name, value).await {
            Ok(path) => debug!("Snapshot written to {}", path.display()),
            Err(e) => warn!("Failed to write snapshot {file_name}: {e:#}"),
        }
    }
}

async fn write_json<T: Serialize>(dir: &Path, file_name: &str, value: &T) -> anyhow::Result<PathBuf> {
    let bytes = serde_json::to_vec_pretty(value).context("Failed to serialize snapshot")?;
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join(file_name);
    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
