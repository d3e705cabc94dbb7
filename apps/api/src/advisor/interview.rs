//! Interview questions: technical and behavioral question sets per role.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::advisor::prompts::{fill, INTERVIEW_QUESTIONS_PROMPT};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

const QUESTIONS_PER_CATEGORY: usize = 4;
const DIFFICULTIES: &[&str] = &["Easy", "Medium", "Hard"];
const TECHNICAL_TIPS: &str = "Focus on your experience and provide specific examples.";
const BEHAVIORAL_TIPS: &str = "Use the STAR method: Situation, Task, Action, Result.";

struct QuestionBank {
    role: &'static str,
    technical: [&'static str; 5],
    behavioral: [&'static str; 5],
}

const ROLE_QUESTION_BANKS: &[QuestionBank] = &[
    QuestionBank {
        role: "Software Engineer",
        technical: [
            "Explain the difference between REST and GraphQL APIs.",
            "How would you optimize a slow database query?",
            "Describe the SOLID principles in object-oriented design.",
            "How do you handle version control in a team environment?",
            "Explain the concept of microservices architecture.",
        ],
        behavioral: [
            "Tell me about a challenging project you worked on.",
            "How do you handle disagreements with team members?",
            "Describe a time when you had to learn a new technology quickly.",
            "How do you prioritize tasks when working on multiple projects?",
            "Tell me about a bug you couldn't solve and how you handled it.",
        ],
    },
    QuestionBank {
        role: "Data Scientist",
        technical: [
            "Explain the difference between supervised and unsupervised learning.",
            "How would you handle missing data in a dataset?",
            "Describe the bias-variance tradeoff in machine learning.",
            "How do you evaluate the performance of a classification model?",
            "Explain the concept of overfitting and how to prevent it.",
        ],
        behavioral: [
            "Tell me about a data analysis project you're proud of.",
            "How do you communicate complex findings to non-technical stakeholders?",
            "Describe a time when your analysis led to a significant business impact.",
            "How do you stay updated with the latest ML/AI trends?",
            "Tell me about a time when you had to work with messy data.",
        ],
    },
    QuestionBank {
        role: "Product Manager",
        technical: [
            "How do you prioritize features in a product roadmap?",
            "Explain the difference between OKRs and KPIs.",
            "How would you conduct user research for a new feature?",
            "Describe your approach to A/B testing.",
            "How do you measure product success?",
        ],
        behavioral: [
            "Tell me about a product you launched that failed and what you learned.",
            "How do you handle competing priorities from different stakeholders?",
            "Describe a time when you had to make a decision with incomplete data.",
            "How do you gather and incorporate user feedback?",
            "Tell me about a time when you had to say no to a feature request.",
        ],
    },
];

const GENERAL_QUESTION_BANK: QuestionBank = QuestionBank {
    role: "General",
    technical: [
        "Explain your technical background and experience.",
        "How do you approach problem-solving?",
        "Describe a project you worked on recently.",
        "How do you stay updated with technology trends?",
        "What tools and technologies are you most comfortable with?",
    ],
    behavioral: [
        "Tell me about yourself and your background.",
        "Why are you interested in this position?",
        "Describe a challenging situation you faced at work.",
        "How do you handle stress and pressure?",
        "Where do you see yourself in 5 years?",
    ],
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterviewRequest {
    #[serde(default)]
    pub job_role: String,
    #[serde(default)]
    pub experience_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub tips: String,
    pub difficulty: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionCategory {
    pub category: String,
    pub questions: Vec<InterviewQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewQuestions {
    pub interview_questions: Vec<QuestionCategory>,
}

pub async fn get_interview_questions(
    request: &InterviewRequest,
    llm: Option<&LlmClient>,
) -> InterviewQuestions {
    if let Some(llm) = llm.filter(|_| !request.job_role.trim().is_empty()) {
        match get_questions_with_ai(request, llm).await {
            Ok(questions) => return questions,
            Err(e) => warn!("AI interview questions failed, using question bank: {e}"),
        }
    }

    generate_mock_questions(request, &mut StdRng::from_entropy())
}

async fn get_questions_with_ai(
    request: &InterviewRequest,
    llm: &LlmClient,
) -> Result<InterviewQuestions, LlmError> {
    let prompt = fill(
        INTERVIEW_QUESTIONS_PROMPT,
        &[
            ("job_role", request.job_role.trim()),
            ("experience_level", request.experience_level.trim()),
        ],
    );
    llm.call_json(&prompt, JSON_ONLY_SYSTEM).await
}

/// First four questions of the role's bank per category, each with a random difficulty.
/// The experience level does not influence the bank.
pub fn generate_mock_questions<R: Rng + ?Sized>(
    request: &InterviewRequest,
    rng: &mut R,
) -> InterviewQuestions {
    let role = request.job_role.trim();
    let bank = ROLE_QUESTION_BANKS
        .iter()
        .find(|bank| bank.role == role)
        .unwrap_or(&GENERAL_QUESTION_BANK);

    InterviewQuestions {
        interview_questions: vec![
            category("Technical", &bank.technical, TECHNICAL_TIPS, rng),
            category("Behavioral", &bank.behavioral, BEHAVIORAL_TIPS, rng),
        ],
    }
}

fn category<R: Rng + ?Sized>(
    name: &str,
    questions: &[&str],
    tips: &str,
    rng: &mut R,
) -> QuestionCategory {
    QuestionCategory {
        category: name.to_string(),
        questions: questions
            .iter()
            .take(QUESTIONS_PER_CATEGORY)
            .map(|question| InterviewQuestion {
                question: question.to_string(),
                tips: tips.to_string(),
                difficulty: DIFFICULTIES
                    .choose(rng)
                    .copied()
                    .unwrap_or("Medium")
                    .to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(role: &str) -> InterviewRequest {
        InterviewRequest {
            job_role: role.to_string(),
            experience_level: "Mid-level".to_string(),
        }
    }

    #[test]
    fn test_two_categories_of_four_questions() {
        let mut rng = StdRng::seed_from_u64(5);
        let result = generate_mock_questions(&request("Software Engineer"), &mut rng);

        let categories: Vec<_> = result
            .interview_questions
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(categories, vec!["Technical", "Behavioral"]);
        for category in &result.interview_questions {
            assert_eq!(category.questions.len(), QUESTIONS_PER_CATEGORY);
            for q in &category.questions {
                assert!(DIFFICULTIES.contains(&q.difficulty.as_str()));
            }
        }
        assert_eq!(
            result.interview_questions[0].questions[0].question,
            "Explain the difference between REST and GraphQL APIs."
        );
        assert_eq!(result.interview_questions[1].questions[0].tips, BEHAVIORAL_TIPS);
    }

    #[test]
    fn test_unknown_role_uses_general_bank() {
        let mut rng = StdRng::seed_from_u64(5);
        let result = generate_mock_questions(&request("Chef"), &mut rng);
        assert_eq!(
            result.interview_questions[0].questions[0].question,
            GENERAL_QUESTION_BANK.technical[0]
        );
    }

    #[test]
    fn test_fifth_question_is_never_asked() {
        let mut rng = StdRng::seed_from_u64(9);
        let result = generate_mock_questions(&request("Product Manager"), &mut rng);
        let asked: Vec<_> = result.interview_questions[0]
            .questions
            .iter()
            .map(|q| q.question.as_str())
            .collect();
        assert!(!asked.contains(&"How do you measure product success?"));
    }

    #[tokio::test]
    async fn test_without_llm_uses_question_bank() {
        let result = get_interview_questions(&request("Data Scientist"), None).await;
        assert_eq!(result.interview_questions.len(), 2);
    }
}
