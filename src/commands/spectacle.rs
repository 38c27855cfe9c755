//! Spectacle command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::SpectacleOptions;
use crate::error::ChainLoopError;

impl FromCommand for SpectacleOptions {
    fn from_command(command: Commands) -> Result<Self, ChainLoopError> {
        match command {
            Commands::Spectacle {
                file,
                format,
                output,
                highlight_loop,
            } => SpectacleOptions::builder()
                .with_file(file)
                .with_format(format)
                .with_output(output)
                .with_highlight_loop(highlight_loop)
                .build(),
            _ => Err(ChainLoopError::ConfigurationError {
                message: "Invalid command type for SpectacleOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SpectacleOptions);

/// Execute the spectacle command for drawing a chain
pub fn execute_spectacle_command(command: Commands) -> Result<()> {
    let config = SpectacleOptions::from_command(command)
        .wrap_err("Failed to parse spectacle command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::spectacle::SpectacleExecutor;
    SpectacleExecutor::execute(config)
}
