// Resume structuring LLM prompt templates.

pub const RESUME_STRUCTURE_SYSTEM: &str = "\
You are a precise resume data extractor. \
Convert free-form resume text into structured JSON. \
You MUST respond with valid JSON only, no markdown fences, no explanations. \
Never invent details that are not present in the resume text.";

pub const RESUME_STRUCTURE_PROMPT: &str = r#"Analyze the following resume and extract structured information. Return the result as a JSON object with the following structure:

{
  "name": "Full Name",
  "email": "Email Address",
  "phone": "Phone Number",
  "summary": "Professional Summary",
  "skills": ["Skill 1", "Skill 2", "Skill 3"],
  "experience": [
    {
      "job_role": "Job Title",
      "company": "Company Name",
      "duration": "Duration",
      "responsibilities": ["Responsibility 1", "Responsibility 2"]
    }
  ],
  "education": [
    {
      "degree": "Degree Name",
      "institution": "Institution Name",
      "years": "Year Range"
    }
  ],
  "resume_score": 85
}

Resume Text:
{resume_text}

Please analyze this resume and return only the JSON object."#;

pub fn build_structure_prompt(resume_text: &str) -> String {
    RESUME_STRUCTURE_PROMPT.replace("{resume_text}", resume_text)
}
