use crate::error::{Result, ScorerError};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct Documents {
    pub resume: String,
    pub job_description: String,
}

/// Reads both documents. Existence of both is checked before either is read so the
/// caller learns which path is missing.
pub fn read_documents(resume: &Path, job_description: &Path) -> Result<Documents> {
    if !resume.exists() {
        return Err(ScorerError::ResumeNotFound(resume.display().to_string()));
    }
    if !job_description.exists() {
        return Err(ScorerError::JobDescriptionNotFound(
            job_description.display().to_string(),
        ));
    }

    let resume_text = std::fs::read_to_string(resume)?;
    let job_text = std::fs::read_to_string(job_description)?;
    info!(
        resume = %resume.display(),
        job_description = %job_description.display(),
        resume_bytes = resume_text.len(),
        job_bytes = job_text.len(),
        "read input documents"
    );

    Ok(Documents {
        resume: resume_text,
        job_description: job_text,
    })
}

pub fn read_job_description(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ScorerError::JobDescriptionNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Asks for a path on `output`, reading one line from `input`. A blank answer
/// (or end of input) selects `default`.
pub fn prompt_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: &str,
) -> Result<PathBuf> {
    write!(output, "Enter path to {label} file (default: {default}): ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();
    if answer.is_empty() {
        Ok(PathBuf::from(default))
    } else {
        Ok(PathBuf::from(answer))
    }
}
