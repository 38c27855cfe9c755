//! JSON format report generation

use serde_json::{Value, json};

use super::{ReportGenerator, cyclic_count};
use crate::core::ChainReport;
use crate::detector::ChainShape;
use crate::error::ChainLoopError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

fn chain_json(report: &ChainReport) -> Value {
    let (entry, tail_len, loop_len) = match &report.shape {
        ChainShape::Acyclic { len } => (None, *len, 0),
        ChainShape::Cyclic {
            entry,
            tail_len,
            loop_len,
        } => (Some(entry.as_str()), *tail_len, *loop_len),
    };

    json!({
        "name": report.name,
        "path": report.path.display().to_string(),
        "node_count": report.node_count,
        "cyclic": report.is_cyclic(),
        "entry": entry,
        "tail_len": tail_len,
        "loop_len": loop_len,
    })
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, reports: &[ChainReport]) -> Result<String, ChainLoopError> {
        let mut sorted: Vec<&ChainReport> = reports.iter().collect();
        // Sort by name, then path, so output is stable across runs
        sorted.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));

        let chains: Vec<Value> = sorted.into_iter().map(chain_json).collect();
        let cyclic = cyclic_count(reports);

        let report = json!({
            "has_cycles": cyclic > 0,
            "cyclic_count": cyclic,
            "chain_count": reports.len(),
            "chains": chains,
        });

        serde_json::to_string_pretty(&report).map_err(ChainLoopError::Json)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::reports::fixtures::{acyclic, cyclic};

    #[test]
    fn test_json_report_no_chains() {
        let report = JsonReportGenerator::new().generate_report(&[]).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["has_cycles"], false);
        assert_eq!(json["cyclic_count"], 0);
        assert_eq!(json["chain_count"], 0);
        assert_eq!(json["chains"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_json_report_with_loop() {
        let reports = vec![acyclic("straight", 3), cyclic("scenario", "b", 1, 3)];
        let report = JsonReportGenerator::new().generate_report(&reports).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["has_cycles"], true);
        assert_eq!(json["cyclic_count"], 1);
        assert_eq!(json["chain_count"], 2);

        let chains = json["chains"].as_array().unwrap();
        assert_eq!(chains[0]["name"], "scenario");
        assert_eq!(chains[0]["cyclic"], true);
        assert_eq!(chains[0]["entry"], "b");
        assert_eq!(chains[0]["tail_len"], 1);
        assert_eq!(chains[0]["loop_len"], 3);
        assert_eq!(chains[0]["path"], "chains/scenario.chain.toml");

        assert_eq!(chains[1]["name"], "straight");
        assert_eq!(chains[1]["cyclic"], false);
        assert_eq!(chains[1]["entry"], Value::Null);
        assert_eq!(chains[1]["tail_len"], 3);
        assert_eq!(chains[1]["loop_len"], 0);
    }

    #[test]
    fn test_json_report_pretty_formatting() {
        let report = JsonReportGenerator::new()
            .generate_report(&[acyclic("a", 1)])
            .unwrap();

        assert!(report.contains('\n'));
        assert!(report.contains("  "));
    }
}
