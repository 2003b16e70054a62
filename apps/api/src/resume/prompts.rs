// All LLM prompt constants for the resume analysis service.

/// System prompt — fixes the reviewer role and the exact JSON schema the
/// model must return.
pub const RESUME_ANALYSIS_SYSTEM: &str = r#"You are an expert resume reviewer and career counselor. Analyze the provided resume and provide comprehensive feedback. Return your analysis in JSON format with the following structure:
{
  "overallScore": 85,
  "summary": "Overall assessment summary",
  "categories": [
    {
      "name": "Content Quality",
      "score": 80,
      "feedback": "Specific feedback for this category"
    }
  ],
  "strengths": ["strength1", "strength2", ...],
  "improvements": [
    {
      "issue": "Issue description",
      "suggestion": "How to fix it"
    }
  ],
  "keywords": {
    "strong": ["keyword1", "keyword2", ...],
    "missing": ["missing1", "missing2", ...]
  }
}"#;

/// Resume analysis prompt template.
/// Replace `{resume_text}` before sending.
pub const RESUME_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Please analyze this resume and provide detailed feedback:

{resume_text}

Evaluate the resume across these categories:
1. Content Quality (relevance, achievements, quantified results)
2. Formatting & Structure (organization, readability, consistency)
3. Keywords & ATS Optimization (industry keywords, technical terms)
4. Professional Summary (compelling, targeted, clear value proposition)
5. Experience Section (impact, progression, relevant skills)
6. Skills Section (relevant, current, properly categorized)

Provide specific, actionable feedback for improvement and identify both strong and missing keywords for ATS optimization."#;
