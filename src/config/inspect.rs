//! Inspect command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;
use crate::error::ChainLoopError;

/// Configuration for the inspect command
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Files, directories or glob patterns to search for chain files
    pub paths: Vec<PathBuf>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if any chain loops
    pub error_on_cycles: bool,
    /// Maximum number of chains to list in the human report (None = all)
    pub max_chains: Option<usize>,
    /// Successor lookups allowed per chain (None = unbounded)
    pub step_limit: Option<usize>,
}

impl InspectConfig {
    pub fn builder() -> InspectConfigBuilder {
        InspectConfigBuilder::new()
    }
}

/// Builder for [`InspectConfig`]; only `paths` and `format` are required
#[derive(Default)]
pub struct InspectConfigBuilder {
    paths: Option<Vec<PathBuf>>,
    format: Option<OutputFormat>,
    error_on_cycles: bool,
    max_chains: Option<usize>,
    step_limit: Option<usize>,
}

impl InspectConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = error_on_cycles;
        self
    }

    pub fn with_max_chains(mut self, max_chains: Option<usize>) -> Self {
        self.max_chains = max_chains;
        self
    }

    pub fn with_step_limit(mut self, step_limit: Option<usize>) -> Self {
        self.step_limit = step_limit;
        self
    }
}

impl crate::common::ConfigBuilder for InspectConfigBuilder {
    type Config = InspectConfig;

    fn build(self) -> Result<Self::Config, ChainLoopError> {
        if self.step_limit == Some(0) {
            return Err(ChainLoopError::ConfigurationError {
                message: "step limit must be at least 1".to_string(),
            });
        }

        Ok(InspectConfig {
            paths: self.paths.ok_or_else(|| missing_field("paths"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            error_on_cycles: self.error_on_cycles,
            max_chains: self.max_chains,
            step_limit: self.step_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_defaults() {
        let config = InspectConfig::builder()
            .with_paths(vec![PathBuf::from(".")])
            .with_format(OutputFormat::Human)
            .build()
            .unwrap();

        assert!(!config.error_on_cycles);
        assert_eq!(config.max_chains, None);
        assert_eq!(config.step_limit, None);
    }

    #[test]
    fn test_missing_paths() {
        let err = InspectConfig::builder()
            .with_format(OutputFormat::Json)
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("paths"));
    }

    #[test]
    fn test_zero_step_limit_rejected() {
        let result = InspectConfig::builder()
            .with_paths(vec![PathBuf::from(".")])
            .with_format(OutputFormat::Human)
            .with_step_limit(Some(0))
            .build();

        assert!(matches!(
            result,
            Err(ChainLoopError::ConfigurationError { .. })
        ));
    }
}
