use crate::types::report::ScoreReport;

pub fn to_json(report: &ScoreReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;

    #[test]
    fn json_report_contains_total_and_labelled_categories() {
        let report = analyze("Summary, Skills", "skills");
        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"total_score\""));
        assert!(rendered.contains("\"Keyword Match\": 1.0"));
        assert!(rendered.contains("\"generated_at\""));
        assert!(rendered.contains("\"findings\""));

        let value: serde_json::Value =
            serde_json::from_str(&rendered).expect("rendered json should parse");
        assert_eq!(value["keywords"]["total"], 1);
        assert_eq!(value["category_scores"]["Skills"], 1.0);
    }
}
