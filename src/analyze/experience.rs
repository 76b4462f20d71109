use crate::types::scoring::Score;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

pub const EXPERIENCE_PHRASES: [&str; 3] = ["work experience", "professional experience", "career"];

/// Cumulative years at which the score saturates.
const SATURATION_YEARS: Score = 10.0;

// Case-sensitive on purpose: "5 Years" does not count. Only ASCII whitespace
// separates the number from the unit; a no-break space does not.
static YEARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([0-9]+)[ \t\n\x0B\x0C\r]*(?:year|yr)s?\b").unwrap());

pub fn has_experience_section(resume: &str) -> bool {
    let lowered = resume.to_lowercase();
    EXPERIENCE_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
}

/// Sum of every "<n> year(s)/yr(s)" mention across the whole text.
pub fn total_years(resume: &str) -> u64 {
    YEARS
        .captures_iter(resume)
        .filter_map(|caps| caps.get(1))
        .map(|digits| digits.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .fold(0u64, u64::saturating_add)
}

pub fn experience_score(resume: &str) -> Score {
    if !has_experience_section(resume) {
        debug!("experience: no experience section");
        return 0.0;
    }
    let years = total_years(resume);
    let score = (years as Score / SATURATION_YEARS).min(1.0);
    debug!(years, score, "experience");
    score
}
