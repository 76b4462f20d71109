use crate::analyze::competencies::CompetencyCoverage;
use crate::types::scoring::ScoreResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
}

impl Finding {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        blocking: bool,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            blocking,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct KeywordDetail {
    pub total: usize,
    pub matched: Vec<String>,
    pub unmatched: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: ScoreResult,
    pub keywords: KeywordDetail,
    pub competencies: CompetencyCoverage,
    pub findings: Vec<Finding>,
}

impl ScoreReport {
    pub fn has_blocking(&self) -> bool {
        self.findings.iter().any(|finding| finding.blocking)
    }
}
