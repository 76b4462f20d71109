use serde::Serialize;

/// Core competencies most postings screen for. Reported only; never scored.
pub const REQUIRED_COMPETENCIES: [&str; 6] = [
    "project management",
    "leadership",
    "communication",
    "problem solving",
    "team collaboration",
    "analytics",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompetencyCoverage {
    pub present: Vec<&'static str>,
    pub absent: Vec<&'static str>,
}

pub fn competency_coverage(resume: &str) -> CompetencyCoverage {
    let lowered = resume.to_lowercase();
    let (present, absent) = REQUIRED_COMPETENCIES
        .into_iter()
        .partition(|competency| lowered.contains(competency));
    CompetencyCoverage { present, absent }
}
