use crate::types::scoring::Score;

const SKILLS_TERMS: [&str; 2] = ["skills", "technical skills"];

/// Credit given when no skills section is present.
const BASELINE: Score = 0.5;

pub fn has_skills_section(resume: &str) -> bool {
    let lowered = resume.to_lowercase();
    SKILLS_TERMS.iter().any(|term| lowered.contains(term))
}

pub fn skills_score(resume: &str) -> Score {
    if has_skills_section(resume) {
        1.0
    } else {
        BASELINE
    }
}
