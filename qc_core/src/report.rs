//! # Report Rendering
//!
//! Turns a `ComplianceVerdict` into an ordered sequence of text lines for
//! the presentation layer to display. Pure formatting; output order is
//! fixed by the verdict's own ordering, so repeated calls with the same
//! verdict produce identical lines.

use crate::compliance::ComplianceVerdict;

/// Render a verdict as report lines.
///
/// Layout: a title line naming the spec, one line per attribute verdict
/// (in verdict order), one line per skipped measurement, and the overall
/// result as the final line.
pub fn render(verdict: &ComplianceVerdict) -> Vec<String> {
    let mut lines = Vec::with_capacity(verdict.attribute_verdicts.len() + verdict.issues.len() + 2);

    lines.push(format!("Compliance Report: {}", verdict.spec_id));

    for v in &verdict.attribute_verdicts {
        lines.push(format!(
            "  {}: {} {} {}",
            v.name,
            v.measured,
            v.bound,
            status_marker(v.passed)
        ));
    }

    for issue in &verdict.issues {
        lines.push(format!(
            "  {}: skipped (not a number: '{}')",
            issue.attribute, issue.raw
        ));
    }

    lines.push(format!(
        "Result: {}",
        if verdict.overall_passed {
            "PASSED"
        } else {
            "FAILED"
        }
    ));

    lines
}

fn status_marker(passed: bool) -> &'static str {
    if passed {
        "[OK]"
    } else {
        "[FAIL]"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::{evaluate, MeasurementSet};
    use crate::specs::SpecRegistry;

    #[test]
    fn test_fail_report_layout() {
        let spec = SpecRegistry::builtin().lookup("AISI 4140 (1.7225)").unwrap();
        let mut m = MeasurementSet::new();
        m.insert("C", 0.50);

        let lines = render(&evaluate(spec, &m));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Compliance Report: AISI 4140 (1.7225)");
        assert_eq!(lines[1], "  C: 0.5 [0.38, 0.43] [FAIL]");
        assert_eq!(lines[2], "Result: FAILED");
    }

    #[test]
    fn test_attribute_lines_precede_summary_in_spec_order() {
        let spec = SpecRegistry::builtin().lookup("AISI 316 (1.4401)").unwrap();
        let mut m = MeasurementSet::new();
        m.insert("Ni", 12.0);
        m.insert("C", 0.05);
        m.insert("Cr", 17.0);
        m.insert("Mn", 1.5);

        let lines = render(&evaluate(spec, &m));
        assert!(lines[1].starts_with("  C:"));
        assert!(lines[2].starts_with("  Mn:"));
        assert!(lines[3].starts_with("  Cr:"));
        assert!(lines[4].starts_with("  Ni:"));
        assert_eq!(lines.last().unwrap(), "Result: PASSED");
    }

    #[test]
    fn test_vacuous_pass_report() {
        let spec = SpecRegistry::builtin().lookup("A105 Carbon Steel").unwrap();
        let lines = render(&evaluate(spec, &MeasurementSet::new()));
        assert_eq!(
            lines,
            vec![
                "Compliance Report: A105 Carbon Steel".to_string(),
                "Result: PASSED".to_string(),
            ]
        );
    }

    #[test]
    fn test_issue_lines_rendered() {
        let spec = SpecRegistry::builtin().lookup("AISI 4140 (1.7225)").unwrap();
        let mut m = MeasurementSet::new();
        m.insert_text("C", "n/a");

        let lines = render(&evaluate(spec, &m));
        assert_eq!(lines[1], "  C: skipped (not a number: 'n/a')");
        assert_eq!(lines[2], "Result: PASSED");
    }

    #[test]
    fn test_render_is_stable() {
        let spec = SpecRegistry::builtin().lookup("AISI 4140 (1.7225)").unwrap();
        let mut m = MeasurementSet::new();
        m.insert("C", 0.40);
        m.insert("Mo", 0.20);

        let verdict = evaluate(spec, &m);
        assert_eq!(render(&verdict), render(&verdict));
    }
}
