//! Spectacle command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::common::missing_field;
use crate::error::ChainLoopError;

#[derive(Debug, Clone)]
pub struct SpectacleOptions {
    pub file: PathBuf,
    pub format: GraphFormat,
    pub output: Option<PathBuf>,
    pub highlight_loop: bool,
}

impl SpectacleOptions {
    pub fn builder() -> SpectacleOptionsBuilder {
        SpectacleOptionsBuilder::new()
    }
}

pub struct SpectacleOptionsBuilder {
    file: Option<PathBuf>,
    format: GraphFormat,
    output: Option<PathBuf>,
    highlight_loop: bool,
}

impl Default for SpectacleOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectacleOptionsBuilder {
    pub fn new() -> Self {
        Self {
            file: None,
            format: GraphFormat::Ascii,
            output: None,
            highlight_loop: true,
        }
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_highlight_loop(mut self, highlight_loop: bool) -> Self {
        self.highlight_loop = highlight_loop;
        self
    }
}

impl crate::common::ConfigBuilder for SpectacleOptionsBuilder {
    type Config = SpectacleOptions;

    fn build(self) -> Result<Self::Config, ChainLoopError> {
        Ok(SpectacleOptions {
            file: self.file.ok_or_else(|| missing_field("file"))?,
            format: self.format,
            output: self.output,
            highlight_loop: self.highlight_loop,
        })
    }
}
