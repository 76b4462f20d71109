use crate::types::scoring::Score;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordMatch {
    pub matched: Vec<String>,
    pub unmatched: Vec<String>,
}

impl KeywordMatch {
    pub fn total(&self) -> usize {
        self.matched.len() + self.unmatched.len()
    }

    /// Share of tokens found in the resume. An empty keyword set scores 0.0.
    pub fn ratio(&self) -> Score {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.matched.len() as Score / total as Score).min(1.0)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Lower-cased job description tokens split on runs of non-word characters.
/// Order and duplicates are kept.
pub fn extract_keywords(job_description: &str) -> Vec<String> {
    job_description
        .to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Partitions every job description token by plain substring containment in the
/// lower-cased resume, so "manage" counts inside "management".
pub fn match_keywords(resume: &str, job_description: &str) -> KeywordMatch {
    let resume = resume.to_lowercase();
    let (matched, unmatched) = extract_keywords(job_description)
        .into_iter()
        .partition(|keyword| resume.contains(keyword.as_str()));
    KeywordMatch { matched, unmatched }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword_score(resume: &str, job_description: &str) -> Score {
        match_keywords(resume, job_description).ratio()
    }

    #[test]
    fn extract_keywords_keeps_order_and_duplicates() {
        let keywords = extract_keywords("Rust, rust & C++ -- team_player!");
        assert_eq!(keywords, ["rust", "rust", "c", "team_player"]);
    }

    #[test]
    fn extract_keywords_discards_leading_separator() {
        assert_eq!(extract_keywords("  ...Leadership"), ["leadership"]);
        assert!(extract_keywords(" \n\t--!? ").is_empty());
    }

    #[test]
    fn keyword_score_counts_stop_words() {
        let score = keyword_score(
            "Proven leadership with strong communication.",
            "Leadership and communication skills required",
        );
        assert!((score - 0.4).abs() < 1e-12);
    }

    #[test]
    fn containment_is_substring_not_whole_word() {
        let result = match_keywords("Management of vendors", "manage");
        assert_eq!(result.matched, ["manage"]);
        assert!((result.ratio() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn duplicates_weigh_in_the_denominator() {
        let result = match_keywords("python", "python python java");
        assert_eq!(result.matched, ["python", "python"]);
        assert_eq!(result.unmatched, ["java"]);
        assert!((result.ratio() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_job_description_scores_zero() {
        assert_eq!(keyword_score("anything at all", ""), 0.0);
        assert_eq!(keyword_score("anything at all", "  --- "), 0.0);
    }

    #[test]
    fn score_does_not_decrease_as_resume_gains_keywords() {
        let job = "rust tokio serde axum tracing";
        let mut resume = String::new();
        let mut previous = keyword_score(&resume, job);
        for word in ["rust", "tokio", "serde", "axum", "tracing"] {
            resume.push_str(word);
            resume.push(' ');
            let current = keyword_score(&resume, job);
            assert!(current >= previous);
            previous = current;
        }
        assert!((previous - 1.0).abs() < 1e-12);
    }
}
