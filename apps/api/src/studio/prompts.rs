// All LLM prompt constants for the Studio module.
// Templates use `{field}` placeholders filled by the build_* functions below.

/// System prompt for the optimization call.
///
/// The "no preamble" rule exists because the model otherwise prepends a
/// sentence describing the rewrite before the resume itself; the rewritten
/// text must start at the first resume line so it can be rendered directly.
pub const OPTIMIZE_SYSTEM: &str = "You are a senior technical recruiter and ATS optimization expert. \
    Respond with the rewritten resume text only. \
    Do NOT prepend an introduction or a sentence describing what you changed. \
    Do NOT use markdown code fences. \
    Write section headers in ALL CAPS on their own line.";

/// Optimization prompt template. Replace `{job_role}` and `{resume_text}`.
pub const OPTIMIZE_PROMPT_TEMPLATE: &str = r#"JOB ROLE:
{job_role}

RESUME CONTENT:
{resume_text}

INSTRUCTIONS:
- Rewrite the resume to match the job role perfectly.
- Ensure an ATS score above 90.
- Add quantified achievements (%, numbers, impact).
- Use strong action verbs.
- Improve project descriptions using the STAR method.
- Highlight relevant skills and keywords.
- Keep it clean, structured and professional.

FORMAT:

NAME
CONTACT INFORMATION

PROFESSIONAL SUMMARY (4-5 powerful lines)

CORE SKILLS (bullet points)

TECHNICAL SKILLS

PROJECTS
- Project Name
  - Problem
  - Solution
  - Technologies
  - Impact (with metrics)

EXPERIENCE

EDUCATION

CERTIFICATIONS"#;

/// System prompt for the analysis call.
pub const ANALYSIS_SYSTEM: &str = "You are an ATS compatibility analyst. \
    Respond with the report as plain text. \
    Do NOT use markdown code fences.";

/// Analysis prompt template. Replace `{job_role}` and `{resume_text}`.
/// Runs over the OPTIMIZED text, not the original upload.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the resume below:

1. Estimate an ATS score (out of 100).
2. List the top 5 strongest highlights.
3. Give 3 improvement suggestions.
4. Identify missing keywords for {job_role}.

RESUME:
{resume_text}"#;

/// Builds the optimization prompt. Pure and deterministic; empty fields are
/// interpolated as-is — what the generation service does with them is its
/// own business.
pub fn build_optimize_prompt(job_role: &str, resume_text: &str) -> String {
    OPTIMIZE_PROMPT_TEMPLATE
        .replace("{job_role}", job_role)
        .replace("{resume_text}", resume_text)
}

/// Builds the analysis prompt over an already-optimized resume.
pub fn build_analysis_prompt(job_role: &str, resume_text: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{job_role}", job_role)
        .replace("{resume_text}", resume_text)
}
