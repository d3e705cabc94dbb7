//! Interview coach chat.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use tracing::warn;

use crate::advisor::prompts::{fill, INTERVIEW_COACH_PROMPT};
use crate::llm_client::prompts::CONVERSATIONAL_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

pub const DEFAULT_JOB_ROLE: &str = "Software Engineer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Help,
    Technical,
    Behavioral,
    Feedback,
    Other,
}

/// Checked in order; the first intent with a keyword contained in the message wins.
const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (Intent::Greeting, &["hello", "hi", "hey"]),
    (Intent::Help, &["help", "what", "how"]),
    (
        Intent::Technical,
        &["technical", "code", "programming", "technology"],
    ),
    (
        Intent::Behavioral,
        &["behavioral", "experience", "situation", "story"],
    ),
    (Intent::Feedback, &["feedback", "improve", "better", "practice"]),
];

const GREETING_REPLIES: &[&str] = &[
    "Hello! I'm your AI interview coach for the {role} position. How can I help you prepare today?",
    "Hi there! Ready to practice some interview questions for the {role} role? What would you like to work on?",
    "Welcome! I'm here to help you ace your {role} interview. What's on your mind?",
];

const HELP_REPLIES: &[&str] = &[
    "I can help you practice interview questions, give feedback on your answers, and provide tips for the {role} position. What would you like to focus on?",
    "I'm here to support your interview preparation for the {role} role. We can practice technical questions, behavioral questions, or general interview tips. What interests you?",
    "Let's work on your {role} interview skills! I can ask you questions, provide feedback, or give you specific tips. What would be most helpful?",
];

const TECHNICAL_REPLIES: &[&str] = &[
    "Great! Let's practice some technical questions for the {role} position. Can you tell me about your experience with [relevant technology]?",
    "Technical skills are crucial for the {role} role. What's your strongest technical skill, and how would you demonstrate it in an interview?",
    "For the {role} position, technical questions often focus on problem-solving. How do you approach debugging a complex issue?",
];

const BEHAVIORAL_REPLIES: &[&str] = &[
    "Behavioral questions are important for the {role} role. Can you tell me about a challenging project you worked on?",
    "Let's practice behavioral questions for the {role} position. How do you handle working with difficult team members?",
    "Behavioral questions help assess your soft skills for the {role} role. Tell me about a time you had to learn something quickly.",
];

const FEEDBACK_REPLIES: &[&str] = &[
    "I'd be happy to give you feedback on your {role} interview preparation. What specific area would you like me to focus on?",
    "Feedback is crucial for improving your {role} interview skills. What aspect of your preparation would you like me to evaluate?",
    "Let's work on improving your {role} interview responses. What's a question you find challenging?",
];

const OTHER_REPLIES: &[&str] = &[
    "That's an interesting point about the {role} role. Can you elaborate on that?",
    "Good question! For the {role} position, that's definitely something to consider. What's your take on it?",
    "I appreciate your input on the {role} role. How do you think that would apply in a real interview setting?",
    "That's a great perspective for the {role} position. What other aspects of the role are you thinking about?",
];

fn default_job_role() -> String {
    DEFAULT_JOB_ROLE.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default = "default_job_role")]
    pub job_role: String,
}

impl Intent {
    pub fn classify(message: &str) -> Self {
        let message = message.to_lowercase();
        INTENT_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| message.contains(k)))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::Other)
    }

    fn replies(self) -> &'static [&'static str] {
        match self {
            Intent::Greeting => GREETING_REPLIES,
            Intent::Help => HELP_REPLIES,
            Intent::Technical => TECHNICAL_REPLIES,
            Intent::Behavioral => BEHAVIORAL_REPLIES,
            Intent::Feedback => FEEDBACK_REPLIES,
            Intent::Other => OTHER_REPLIES,
        }
    }
}

/// Replies as the interview coach. Uses the LLM whenever one is configured and
/// falls back to canned replies on any failure.
pub async fn chat_with_interview_bot(request: &ChatRequest, llm: Option<&LlmClient>) -> String {
    let job_role = effective_role(&request.job_role);

    if let Some(llm) = llm {
        match chat_with_ai(&request.message, job_role, llm).await {
            Ok(reply) => return reply,
            Err(e) => warn!("AI interview chat failed, using canned reply: {e}"),
        }
    }

    generate_mock_reply(&request.message, job_role, &mut StdRng::from_entropy())
}

async fn chat_with_ai(message: &str, job_role: &str, llm: &LlmClient) -> Result<String, LlmError> {
    let prompt = fill(
        INTERVIEW_COACH_PROMPT,
        &[("job_role", job_role), ("message", message)],
    );
    llm.call_text(&prompt, CONVERSATIONAL_SYSTEM).await
}

pub fn generate_mock_reply<R: Rng + ?Sized>(message: &str, job_role: &str, rng: &mut R) -> String {
    let template = Intent::classify(message)
        .replies()
        .choose(rng)
        .copied()
        .unwrap_or("{role}");
    fill(template, &[("role", job_role)])
}

fn effective_role(job_role: &str) -> &str {
    let job_role = job_role.trim();
    if job_role.is_empty() {
        DEFAULT_JOB_ROLE
    } else {
        job_role
    }
}
