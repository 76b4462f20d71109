use crate::error::ScorerError;
use serde::Deserialize;

pub const DEFAULT_RESUME: &str = "SampleResume.txt";
pub const DEFAULT_JOB_DESCRIPTION: &str = "JobDescription.txt";
pub const DEFAULT_PRECISION: usize = 2;
const MAX_PRECISION: usize = 6;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScorerConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_resume")]
    pub resume: String,
    #[serde(default = "default_job_description")]
    pub job_description: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            resume: default_resume(),
            job_description: default_job_description(),
        }
    }
}

fn default_resume() -> String {
    DEFAULT_RESUME.to_string()
}

fn default_job_description() -> String {
    DEFAULT_JOB_DESCRIPTION.to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatSetting {
    #[default]
    Text,
    Md,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: FormatSetting,
    pub min_score: Option<f64>,
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: FormatSetting::default(),
            min_score: None,
            precision: DEFAULT_PRECISION,
        }
    }
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

impl ScorerConfig {
    pub fn validate(&self) -> Result<(), ScorerError> {
        if self.input.resume.trim().is_empty() {
            return Err(ScorerError::ConfigParse(
                "input.resume must be a non-empty path".to_string(),
            ));
        }
        if self.input.job_description.trim().is_empty() {
            return Err(ScorerError::ConfigParse(
                "input.job_description must be a non-empty path".to_string(),
            ));
        }
        if let Some(min_score) = self.report.min_score {
            if !(0.0..=100.0).contains(&min_score) {
                return Err(ScorerError::ConfigParse(format!(
                    "report.min_score must be between 0 and 100 (found {min_score})"
                )));
            }
        }
        if self.report.precision > MAX_PRECISION {
            return Err(ScorerError::ConfigParse(format!(
                "report.precision must be at most {MAX_PRECISION} (found {})",
                self.report.precision
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: ScorerConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.input.resume, "SampleResume.txt");
        assert_eq!(cfg.input.job_description, "JobDescription.txt");
        assert_eq!(cfg.report.format, FormatSetting::Text);
        assert_eq!(cfg.report.precision, 2);
        assert!(cfg.report.min_score.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[input]
resume = "cv/jane.txt"
job_description = "postings/backend.txt"

[report]
format = "json"
min_score = 70.0
precision = 1
"#;
        let cfg: ScorerConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(cfg.input.resume, "cv/jane.txt");
        assert_eq!(cfg.report.format, FormatSetting::Json);
        assert_eq!(cfg.report.min_score, Some(70.0));
        assert_eq!(cfg.report.precision, 1);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn unknown_format_fails_to_parse() {
        let result = toml::from_str::<ScorerConfig>("[report]\nformat = \"sarif\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_min_score() {
        let cfg: ScorerConfig =
            toml::from_str("[report]\nmin_score = 120.0\n").expect("config should parse");
        assert!(matches!(cfg.validate(), Err(ScorerError::ConfigParse(_))));
    }

    #[test]
    fn validate_rejects_excessive_precision() {
        let cfg: ScorerConfig =
            toml::from_str("[report]\nprecision = 9\n").expect("config should parse");
        assert!(matches!(cfg.validate(), Err(ScorerError::ConfigParse(_))));
    }

    #[test]
    fn validate_rejects_blank_paths() {
        let cfg: ScorerConfig =
            toml::from_str("[input]\nresume = \"  \"\n").expect("config should parse");
        assert!(matches!(cfg.validate(), Err(ScorerError::ConfigParse(_))));
    }
}
