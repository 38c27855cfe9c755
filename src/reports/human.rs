//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{ReportGenerator, cyclic_count};
use crate::core::ChainReport;
use crate::detector::ChainShape;
use crate::error::ChainLoopError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_chains: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_chains: Option<usize>) -> Self {
        Self { max_chains }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, reports: &[ChainReport]) -> Result<String, ChainLoopError> {
        let mut output = String::new();

        if reports.is_empty() {
            writeln!(output, "\n{} No chains to inspect.", style("ℹ").blue())?;
            return Ok(output);
        }

        let looping = cyclic_count(reports);
        if looping == 0 {
            write!(
                output,
                "\n{} No loops detected! All {} {} run to an end.\n",
                style("✅").green().bold(),
                reports.len(),
                pluralize("chain", reports.len())
            )?;
        } else {
            write!(
                output,
                "\n{} Found {} looping {} out of {}:\n\n",
                style("❌").red().bold(),
                style(looping).red().bold(),
                pluralize("chain", looping),
                reports.len()
            )?;
        }

        let total = reports.len();
        let limit = self.max_chains.unwrap_or(total);
        let showing_all = limit >= total;

        for report in reports.iter().take(limit) {
            match &report.shape {
                ChainShape::Acyclic { len } => {
                    writeln!(
                        output,
                        "{} {} {}",
                        style("✓").green(),
                        style(&report.name).bold(),
                        style(format!("({})", report.path.display())).dim()
                    )?;
                    writeln!(
                        output,
                        "    {} ends after {} {}",
                        style("→").dim(),
                        len,
                        pluralize("node", *len)
                    )?;
                }
                ChainShape::Cyclic {
                    entry,
                    tail_len,
                    loop_len,
                } => {
                    writeln!(
                        output,
                        "{} {} {}",
                        style("🔄").yellow(),
                        style(&report.name).bold(),
                        style(format!("({})", report.path.display())).dim()
                    )?;
                    writeln!(
                        output,
                        "    {} loop entry: {}",
                        style("→").dim(),
                        style(entry).yellow().bold()
                    )?;
                    writeln!(
                        output,
                        "    {} tail: {} {}, loop: {} {}",
                        style("→").dim(),
                        tail_len,
                        pluralize("node", *tail_len),
                        loop_len,
                        pluralize("node", *loop_len)
                    )?;
                }
            }

            let unreachable = report.node_count.saturating_sub(report.reachable_count());
            if unreachable > 0 {
                writeln!(
                    output,
                    "    {} {} unreachable {}",
                    style("•").dim(),
                    unreachable,
                    pluralize("node", unreachable)
                )?;
            }
        }

        if !showing_all {
            writeln!(
                output,
                "\n{} Showing {} of {} chains. Use --max-chains to see more.",
                style("ℹ️").blue(),
                style(limit).yellow(),
                style(total).yellow()
            )?;
        }

        if looping > 0 {
            writeln!(
                output,
                "\n{} Unlink the last node of each loop to turn it back into a terminating chain.",
                style("💡").yellow()
            )?;
        }

        Ok(output)
    }
}
