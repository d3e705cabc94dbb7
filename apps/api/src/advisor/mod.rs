// Career advisor features: job matches, guidance, interview questions and coach chat.
// Each one asks the LLM when a client is configured and falls back to its mock generator.

pub mod chat;
pub mod guidance;
pub mod handlers;
pub mod interview;
pub mod jobs;
pub mod prompts;
