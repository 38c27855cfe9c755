//! GitHub Actions format report generation

use std::fmt::Write;

use super::{ReportGenerator, cyclic_count};
use crate::core::ChainReport;
use crate::detector::ChainShape;
use crate::error::ChainLoopError;
use crate::utils::string::{escape_workflow_data, escape_workflow_property, pluralize};

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, reports: &[ChainReport]) -> Result<String, ChainLoopError> {
        let mut output = String::new();

        for report in reports {
            if let ChainShape::Cyclic {
                entry,
                tail_len,
                loop_len,
            } = &report.shape
            {
                writeln!(
                    output,
                    "::error file={},title=Chain loop in {}::{}",
                    escape_workflow_property(&report.path.display().to_string()),
                    escape_workflow_property(&report.name),
                    escape_workflow_data(&format!(
                        "Chain loops back to node '{entry}' after {tail_len} tail {} \
                         (loop of {loop_len} {})",
                        pluralize("node", *tail_len),
                        pluralize("node", *loop_len)
                    ))
                )?;
            }
        }

        let looping = cyclic_count(reports);
        if looping == 0 {
            writeln!(
                output,
                "::notice title=Chain Check::No loops detected in {} {} ✅",
                reports.len(),
                pluralize("chain", reports.len())
            )?;
        } else {
            writeln!(
                output,
                "::notice title=Chain Check::{} of {} {} loop",
                looping,
                reports.len(),
                pluralize("chain", reports.len())
            )?;
        }

        Ok(output)
    }
}
