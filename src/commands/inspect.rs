//! Inspect command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::InspectConfig;
use crate::error::ChainLoopError;

impl FromCommand for InspectConfig {
    fn from_command(command: Commands) -> Result<Self, ChainLoopError> {
        match command {
            Commands::Inspect {
                common,
                format,
                max_chains,
                step_limit,
                error_on_cycles,
            } => InspectConfig::builder()
                .with_paths(common.get_paths())
                .with_format(format.format)
                .with_max_chains(max_chains)
                .with_step_limit(step_limit)
                .with_error_on_cycles(error_on_cycles)
                .build(),
            _ => Err(ChainLoopError::ConfigurationError {
                message: "Invalid command type for InspectConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(InspectConfig);

/// Execute the inspect command for finding loops in chains
pub fn execute_inspect_command(command: Commands) -> Result<()> {
    let config = InspectConfig::from_command(command)
        .wrap_err("Failed to parse inspect command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::inspect::InspectExecutor;
    InspectExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, OutputFormat};

    #[test]
    fn test_try_from_inspect() {
        let cli = Cli::try_parse_from([
            "chain-loop",
            "inspect",
            "a.chain.toml",
            "--format",
            "github",
            "--max-chains",
            "5",
        ])
        .unwrap();

        let config = InspectConfig::try_from(cli.command).unwrap();
        assert_eq!(config.paths, vec![PathBuf::from("a.chain.toml")]);
        assert_eq!(config.format, OutputFormat::GitHub);
        assert_eq!(config.max_chains, Some(5));
        assert!(!config.error_on_cycles);
    }

    #[test]
    fn test_wrong_command_is_rejected() {
        let cli = Cli::try_parse_from(["chain-loop", "spectacle", "a.chain.toml"]).unwrap();
        assert!(InspectConfig::try_from(cli.command).is_err());
    }
}
