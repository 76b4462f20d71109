use crate::types::report::Finding;

pub fn lint_findings(resume: &str, job_description: &str) -> Vec<Finding> {
    super::analyze(resume, job_description).findings
}
