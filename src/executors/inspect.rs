//! Inspect command executor

use console::style;
use miette::{Result, WrapErr};

use crate::analyzer::ChainAnalyzer;
use crate::cli::OutputFormat;
use crate::config::InspectConfig;
use crate::core::ChainReport;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, JunitReportGenerator,
    ReportGenerator,
};

pub struct InspectExecutor;

impl InspectExecutor {
    /// Load and measure every chain under the configured paths
    pub fn collect_reports(
        config: &InspectConfig,
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<Vec<ChainReport>> {
        let detector = CycleDetector::new().with_step_limit(config.step_limit);
        let mut analyzer = ChainAnalyzer::new(detector);
        analyzer
            .discover_chains(&config.paths, progress.as_deref_mut())
            .wrap_err("Failed to discover and load chains")?;

        analyzer
            .inspect(progress)
            .wrap_err("Failed to inspect chains")
    }

    /// Render reports in the configured format
    pub fn render(config: &InspectConfig, reports: &[ChainReport]) -> Result<String> {
        let report_result = match config.format {
            OutputFormat::Human => {
                HumanReportGenerator::new(config.max_chains).generate_report(reports)
            }
            OutputFormat::Json => JsonReportGenerator::new().generate_report(reports),
            OutputFormat::Junit => JunitReportGenerator::new().generate_report(reports),
            OutputFormat::GitHub => GitHubReportGenerator::new().generate_report(reports),
        };

        report_result.wrap_err("Failed to generate report")
    }

    /// Whether the run should exit non-zero under `--error-on-cycles`
    pub fn fails_on_cycles(config: &InspectConfig, reports: &[ChainReport]) -> bool {
        config.error_on_cycles && reports.iter().any(ChainReport::is_cyclic)
    }
}

impl CommandExecutor for InspectExecutor {
    type Config = InspectConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!("{} Checking chains for loops...\n", style("🔄").cyan());
        if let Some(limit) = config.step_limit {
            eprintln!(
                "  {} Step limit per chain: {}",
                style("→").dim(),
                style(limit).yellow()
            );
        }

        // Progress only when stderr is an interactive terminal
        let mut progress = ProgressReporter::for_terminal();

        let reports = Self::collect_reports(&config, progress.as_mut())?;
        print!("{}", Self::render(&config, &reports)?);

        if Self::fails_on_cycles(&config, &reports) {
            std::process::exit(1);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::common::ConfigBuilder;

    fn config(dir: &TempDir, format: OutputFormat) -> InspectConfig {
        InspectConfig::builder()
            .with_paths(vec![dir.path().to_path_buf()])
            .with_format(format)
            .build()
            .unwrap()
    }

    #[test]
    fn test_collect_and_render_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("ring.chain.toml"),
            "head = \"x\"\nnodes = [{ id = \"x\", next = \"y\" }, { id = \"y\", next = \"x\" }]\n",
        )
        .unwrap();

        let config = config(&temp_dir, OutputFormat::Json);
        let reports = InspectExecutor::collect_reports(&config, None).unwrap();
        let output = InspectExecutor::render(&config, &reports).unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["chain_count"], 1);
        assert_eq!(json["chains"][0]["entry"], "x");
        assert_eq!(json["chains"][0]["tail_len"], 0);
        assert_eq!(json["chains"][0]["loop_len"], 2);
    }

    #[test]
    fn test_fails_on_cycles_only_when_requested() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("ring.chain.toml"),
            "head = \"x\"\nnodes = [{ id = \"x\", next = \"x\" }]\n",
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("straight.chain.toml"),
            "head = \"a\"\nnodes = [{ id = \"a\" }]\n",
        )
        .unwrap();

        let lenient = config(&temp_dir, OutputFormat::Human);
        let reports = InspectExecutor::collect_reports(&lenient, None).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(!InspectExecutor::fails_on_cycles(&lenient, &reports));

        let strict = InspectConfig::builder()
            .with_paths(vec![temp_dir.path().to_path_buf()])
            .with_format(OutputFormat::Human)
            .with_error_on_cycles(true)
            .build()
            .unwrap();
        assert!(InspectExecutor::fails_on_cycles(&strict, &reports));

        let acyclic_only: Vec<ChainReport> =
            reports.into_iter().filter(|r| !r.is_cyclic()).collect();
        assert!(!InspectExecutor::fails_on_cycles(&strict, &acyclic_only));
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let config = config(&temp_dir, OutputFormat::Human);
        let reports = InspectExecutor::collect_reports(&config, None).unwrap();
        assert!(reports.is_empty());
    }
}
