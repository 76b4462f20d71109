use crate::types::scoring::Score;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

pub const REQUIRED_SECTIONS: [&str; 4] = ["experience", "education", "skills", "summary"];

const INCONSISTENT_PENALTY: Score = 0.2;
const MISSING_SECTIONS_PENALTY: Score = 0.2;

static UPPERCASE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Lu}{2,}").unwrap());

/// Two or more consecutive uppercase letters anywhere ("USA", "PROJECT").
pub fn has_uppercase_run(resume: &str) -> bool {
    UPPERCASE_RUN.is_match(resume)
}

/// Required section headers absent from the resume, case-insensitively.
pub fn missing_sections(resume: &str) -> Vec<&'static str> {
    let lowered = resume.to_lowercase();
    REQUIRED_SECTIONS
        .into_iter()
        .filter(|section| !lowered.contains(section))
        .collect()
}

pub fn formatting_score(resume: &str) -> Score {
    let mut score: Score = 1.0;

    let inconsistent = has_uppercase_run(resume);
    if inconsistent {
        score -= INCONSISTENT_PENALTY;
    }

    let missing = missing_sections(resume);
    if !missing.is_empty() {
        score -= MISSING_SECTIONS_PENALTY;
    }

    debug!(inconsistent, missing = ?missing, score, "formatting");
    score.max(0.0)
}
