pub mod competencies;
pub mod education;
pub mod experience;
pub mod formatting;
pub mod keywords;
pub mod lint;
pub mod skills;

use crate::types::report::{Finding, KeywordDetail, ScoreReport};
use crate::types::scoring::{ScoreCard, ScoreResult};
use chrono::Utc;
use keywords::KeywordMatch;
use tracing::{debug, info};

/// Below this keyword match ratio a warning finding is raised.
const LOW_MATCH_THRESHOLD: f64 = 0.5;

/// Runs the five analyzers independently and combines them with the fixed weights.
#[allow(dead_code)]
pub fn score(resume: &str, job_description: &str) -> ScoreResult {
    score_with_keywords(resume, &keywords::match_keywords(resume, job_description))
}

fn score_with_keywords(resume: &str, keywords: &KeywordMatch) -> ScoreResult {
    let keyword_match = keywords.ratio();
    debug!(
        matched = keywords.matched.len(),
        total = keywords.total(),
        score = keyword_match,
        "keyword match"
    );
    let formatting = formatting::formatting_score(resume);
    let experience = experience::experience_score(resume);
    let education = education::education_score(resume);
    let skills = skills::skills_score(resume);

    let result = ScoreResult::from_card(ScoreCard::new(
        keyword_match,
        formatting,
        experience,
        education,
        skills,
    ));
    info!(total = result.total_score, "scored resume");
    result
}

pub fn analyze(resume: &str, job_description: &str) -> ScoreReport {
    let keyword_match = keywords::match_keywords(resume, job_description);
    let result = score_with_keywords(resume, &keyword_match);
    let findings = findings(resume, &keyword_match, &result);

    ScoreReport {
        generated_at: Utc::now(),
        result,
        keywords: KeywordDetail {
            total: keyword_match.total(),
            matched: keyword_match.matched,
            unmatched: keyword_match.unmatched,
        },
        competencies: competencies::competency_coverage(resume),
        findings,
    }
}

fn findings(resume: &str, keywords: &KeywordMatch, result: &ScoreResult) -> Vec<Finding> {
    let scores = &result.category_scores;
    let mut findings = Vec::new();

    if keywords.total() == 0 {
        findings.push(Finding::new(
            "keywords.empty_job_description",
            "Job description has no keywords",
            "No word tokens could be extracted from the job description; keyword match is 0%.",
            true,
        ));
    } else if scores.keyword_match < LOW_MATCH_THRESHOLD {
        findings.push(Finding::new(
            "keywords.low_match",
            "Low keyword match",
            format!(
                "Only {:.0}% of job description keywords appear in the resume.",
                scores.keyword_match * 100.0
            ),
            false,
        ));
    }

    if formatting::has_uppercase_run(resume) {
        findings.push(Finding::new(
            "formatting.uppercase_run",
            "Inconsistent capitalization",
            "Runs of consecutive capital letters were found; ATS parsers may treat them as noise.",
            false,
        ));
    }
    let missing = formatting::missing_sections(resume);
    if !missing.is_empty() {
        findings.push(Finding::new(
            "formatting.missing_sections",
            "Missing section headers",
            format!("Resume is missing section header(s): {}.", missing.join(", ")),
            false,
        ));
    }

    if !experience::has_experience_section(resume) {
        findings.push(Finding::new(
            "experience.missing_section",
            "No experience section",
            "None of \"work experience\", \"professional experience\" or \"career\" was found.",
            false,
        ));
    } else if experience::total_years(resume) == 0 {
        findings.push(Finding::new(
            "experience.no_years",
            "No years of experience stated",
            "State tenure as \"<n> years\" so it can be counted.",
            false,
        ));
    }

    if !education::has_education(resume) {
        findings.push(Finding::new(
            "education.missing",
            "No education listed",
            "No bachelor, master, PhD or degree mention was found.",
            false,
        ));
    }

    if !skills::has_skills_section(resume) {
        findings.push(Finding::new(
            "skills.missing_section",
            "No skills section",
            "Add a \"Skills\" or \"Technical Skills\" section.",
            false,
        ));
    }

    findings
}
