//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - junit: JUnit XML format for CI/CD integration
//! - github: GitHub Actions annotations

pub mod github;
pub mod human;
pub mod json;
pub mod junit;

use crate::core::ChainReport;
use crate::error::ChainLoopError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from per-chain inspection results
    fn generate_report(&self, reports: &[ChainReport]) -> Result<String, ChainLoopError>;
}

// Re-export for convenience
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use junit::JunitReportGenerator;

/// Number of reports describing a looping chain
pub(crate) fn cyclic_count(reports: &[ChainReport]) -> usize {
    reports.iter().filter(|r| r.is_cyclic()).count()
}
