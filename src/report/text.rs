use super::format_fixed;
use crate::types::report::ScoreReport;

/// Console breakdown: one percentage line per category, then the total.
pub fn to_text(report: &ScoreReport, precision: usize) -> String {
    let mut output = String::from("ATS Score Breakdown:\n");
    for (category, score) in report.result.category_scores.iter() {
        output.push_str(&format!(
            "{} Score: {}%\n",
            category,
            format_fixed(score * 100.0, precision)
        ));
    }
    output.push_str(&format!(
        "\nTotal ATS Score: {}%",
        format_fixed(report.result.total_score, precision)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;

    #[test]
    fn text_report_lists_categories_then_total() {
        let report = analyze(
            "Summary Experience Education Skills",
            "Leadership and communication skills required",
        );
        let rendered = to_text(&report, 2);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[0], "ATS Score Breakdown:");
        assert_eq!(lines[1], "Keyword Match Score: 20.00%");
        assert_eq!(lines[2], "Formatting Score: 100.00%");
        assert_eq!(lines[3], "Experience Score: 0.00%");
        assert_eq!(lines[4], "Education Score: 0.00%");
        assert_eq!(lines[5], "Skills Score: 100.00%");
        assert_eq!(lines[7], "Total ATS Score: 38.00%");
    }

    #[test]
    fn text_report_rounds_ties_half_up() {
        let job = std::iter::once("rust")
            .chain(std::iter::repeat("golang").take(31))
            .collect::<Vec<_>>()
            .join(" ");
        let report = analyze("rust", &job);
        assert!(to_text(&report, 2).contains("Keyword Match Score: 3.13%"));
    }

    #[test]
    fn text_report_honors_precision() {
        let report = analyze("", "rust");
        assert!(to_text(&report, 0).ends_with("Total ATS Score: 21%"));
    }
}
