use super::format_fixed;
use crate::types::report::ScoreReport;

pub fn to_markdown(report: &ScoreReport, precision: usize) -> String {
    let mut output = String::new();
    output.push_str("# ATS Score Report\n\n");
    output.push_str(&format!(
        "Total score: {}%\n\n",
        format_fixed(report.result.total_score, precision)
    ));

    output.push_str("## Category Scores\n\n");
    output.push_str("| Category | Score | Weight |\n|---|---|---|\n");
    for (category, score) in report.result.category_scores.iter() {
        output.push_str(&format!(
            "| {} | {}% | {}% |\n",
            category,
            format_fixed(score * 100.0, precision),
            format_fixed(category.weight() * 100.0, 0)
        ));
    }
    output.push('\n');

    output.push_str("## Findings\n\n");
    if report.findings.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for finding in &report.findings {
            output.push_str(&format!(
                "- [{}] {}: {}\n",
                if finding.blocking {
                    "blocking"
                } else {
                    "warning"
                },
                finding.title,
                finding.body
            ));
        }
        output.push('\n');
    }

    output.push_str("## Keywords\n\n");
    output.push_str(&format!(
        "Matched {} of {} job description keywords.\n\n",
        report.keywords.matched.len(),
        report.keywords.total
    ));
    if !report.keywords.unmatched.is_empty() {
        output.push_str(&format!(
            "- missing: {}\n\n",
            report.keywords.unmatched.join(", ")
        ));
    }

    output.push_str("## Competencies\n\n");
    if report.competencies.present.is_empty() {
        output.push_str("- present: none\n");
    } else {
        output.push_str(&format!(
            "- present: {}\n",
            report.competencies.present.join(", ")
        ));
    }
    if !report.competencies.absent.is_empty() {
        output.push_str(&format!(
            "- absent: {}\n",
            report.competencies.absent.join(", ")
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;

    #[test]
    fn markdown_report_contains_sections() {
        let report = analyze("Summary of my career", "Rust and Go");
        let rendered = to_markdown(&report, 2);
        assert!(rendered.contains("# ATS Score Report"));
        assert!(rendered.contains("## Category Scores"));
        assert!(rendered.contains("| Keyword Match | 0.00% | 40% |"));
        assert!(rendered.contains("## Findings"));
        assert!(rendered.contains("- missing: rust, and, go"));
        assert!(rendered.contains("## Competencies"));
    }

    #[test]
    fn markdown_report_marks_blocking_findings() {
        let report = analyze("Summary", "");
        let rendered = to_markdown(&report, 1);
        assert!(rendered.contains("- [blocking] Job description has no keywords"));
        assert!(rendered.contains("Matched 0 of 0 job description keywords."));
    }
}
