//! JUnit XML format report generation

use std::fmt::Write;

use super::{ReportGenerator, cyclic_count};
use crate::core::ChainReport;
use crate::detector::ChainShape;
use crate::error::ChainLoopError;
use crate::utils::string::escape_xml;

pub struct JunitReportGenerator;

impl Default for JunitReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JunitReportGenerator {
    fn generate_report(&self, reports: &[ChainReport]) -> Result<String, ChainLoopError> {
        let mut output = String::new();
        let failures = cyclic_count(reports);

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="chain-loop" tests="{}" failures="{}">"#,
            reports.len(),
            failures
        )?;
        writeln!(
            output,
            r#"  <testsuite name="chain-loops" tests="{}" failures="{}">"#,
            reports.len(),
            failures
        )?;

        for report in reports {
            let name = escape_xml(&report.name);
            match &report.shape {
                ChainShape::Acyclic { .. } => {
                    writeln!(
                        output,
                        r#"    <testcase name="{name}" classname="chain-loop" />"#
                    )?;
                }
                ChainShape::Cyclic {
                    entry,
                    tail_len,
                    loop_len,
                } => {
                    writeln!(
                        output,
                        r#"    <testcase name="{name}" classname="chain-loop">"#
                    )?;
                    writeln!(
                        output,
                        r#"      <failure message="Chain loops back to node {}">"#,
                        escape_xml(entry)
                    )?;
                    writeln!(output, "File: {}", escape_xml(&report.path.display().to_string()))?;
                    writeln!(
                        output,
                        "Tail length: {tail_len}, loop length: {loop_len}"
                    )?;
                    writeln!(output, r#"      </failure>"#)?;
                    writeln!(output, r#"    </testcase>"#)?;
                }
            }
        }

        writeln!(output, r#"  </testsuite>"#)?;
        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use predicates::prelude::*;

    use super::*;
    use crate::reports::fixtures::{acyclic, cyclic};

    #[test]
    fn test_junit_no_failures() {
        let report = JunitReportGenerator::new()
            .generate_report(&[acyclic("straight", 3)])
            .unwrap();

        assert!(report.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(report.contains(r#"tests="1" failures="0""#));
        assert!(report.contains(r#"<testcase name="straight" classname="chain-loop" />"#));
        assert!(!report.contains("<failure"));
    }

    #[test]
    fn test_junit_one_testcase_per_chain() {
        let reports = vec![cyclic("scenario", "b", 1, 3), acyclic("straight", 3)];
        let report = JunitReportGenerator::new().generate_report(&reports).unwrap();

        assert_eq!(report.matches("<testcase").count(), 2);
        assert!(report.contains(r#"tests="2" failures="1""#));

        let failure = predicate::str::contains(r#"<failure message="Chain loops back to node b">"#)
            .and(predicate::str::contains("Tail length: 1, loop length: 3"));
        assert!(failure.eval(&report));
    }

    #[test]
    fn test_junit_escapes_names() {
        let report = JunitReportGenerator::new()
            .generate_report(&[cyclic("a<b>", "x&y", 0, 1)])
            .unwrap();

        assert!(report.contains(r#"name="a&lt;b&gt;""#));
        assert!(report.contains("node x&amp;y"));
    }
}
