use crate::types::scoring::Score;

pub const EDUCATION_TERMS: [&str; 4] = ["bachelor", "master", "phd", "degree"];

pub fn has_education(resume: &str) -> bool {
    let lowered = resume.to_lowercase();
    EDUCATION_TERMS.iter().any(|term| lowered.contains(term))
}

/// Binary signal: any education term earns full credit.
pub fn education_score(resume: &str) -> Score {
    if has_education(resume) {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bachelors_degree_scores_full() {
        assert_eq!(education_score("Bachelor's degree in Physics"), 1.0);
        assert_eq!(education_score("PhD, ETH Zurich"), 1.0);
    }

    #[test]
    fn no_education_terms_scores_zero() {
        assert_eq!(education_score("Self-taught engineer, bootcamp graduate"), 0.0);
    }
}
