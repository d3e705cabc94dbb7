// Advisor LLM prompt templates.
// Placeholders are substituted with `str::replace`; user input is embedded verbatim.

pub const JOB_SEARCH_PROMPT: &str = r##"Search for job listings for the position: {job_position}
Location: {location}
Skills: {skills}

Return a JSON object containing 5-8 job listings with the following structure:
{
  "jobs": [
    {
      "title": "Job Title",
      "company": "Company Name",
      "location": "Location",
      "posted_date": "Recent date",
      "description": "Short job description",
      "url": "#"
    }
  ]
}

Make sure the jobs are relevant to the position and skills mentioned."##;

pub const CAREER_GUIDANCE_PROMPT: &str = r#"Provide career guidance for someone with:
Current Role: {current_role}
Experience: {experience_years} years
Skills: {skills}
Interests: {interests}

Return a JSON object with the following structure:
{
  "skill_gap_analysis": ["Skill 1", "Skill 2", "Skill 3"],
  "skill_development_plan": ["Plan 1", "Plan 2", "Plan 3"],
  "certifications_courses": ["Course 1", "Course 2", "Course 3"],
  "project_ideas": ["Project 1", "Project 2", "Project 3"],
  "estimated_timeline": {"total_estimated_time": "6-12 months"},
  "job_readiness_indicator": "Ready/Needs improvement"
}

Make the guidance specific to the role and skills mentioned."#;

pub const INTERVIEW_QUESTIONS_PROMPT: &str = r#"Generate interview questions for a {job_role} position at {experience_level} level.

Return a JSON object with the following structure:
{
  "interview_questions": [
    {
      "category": "Technical",
      "questions": [
        {"question": "Question text", "tips": "Tips for answering", "difficulty": "Easy/Medium/Hard"}
      ]
    },
    {
      "category": "Behavioral",
      "questions": [
        {"question": "Question text", "tips": "Tips for answering", "difficulty": "Easy/Medium/Hard"}
      ]
    }
  ]
}

Include 3-5 questions per category, appropriate for the role and experience level."#;

pub const INTERVIEW_COACH_PROMPT: &str = r#"You are an AI interview coach for a {job_role} position.
The candidate says: "{message}"

Provide a helpful, encouraging response that:
1. Acknowledges their message
2. Gives constructive feedback or advice
3. Asks a relevant follow-up question
4. Maintains a professional but friendly tone

Keep your response under 150 words and be specific to the {job_role} role."#;

/// Fills `{key}` placeholders in order. Values are inserted verbatim and never re-scanned.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let replaced = after.find('}').and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, end))
        });
        match replaced {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
