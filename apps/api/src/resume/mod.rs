//! Resume structuring: text extraction, the AI and rule-based structurers,
//! and the service that chains them.

pub mod extractor;
pub mod fields;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod scoring;
pub mod service;
pub mod structurer;
