//! Spectacle command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::chain_file::ChainFile;
use crate::cli::GraphFormat;
use crate::config::SpectacleOptions;
use crate::executors::CommandExecutor;
use crate::graph::{ChainGraphBuilder, ChainRenderer};

pub struct SpectacleExecutor;

impl SpectacleExecutor {
    /// Render the configured chain file into `output`
    pub fn render_to(config: &SpectacleOptions, output: &mut dyn Write) -> Result<()> {
        let loaded = ChainFile::load(&config.file)
            .wrap_err_with(|| format!("Failed to load chain '{}'", config.file.display()))?;

        let graph = ChainGraphBuilder::default()
            .build(&loaded)
            .wrap_err_with(|| format!("Failed to measure chain '{}'", loaded.name))?;

        let renderer = ChainRenderer::new(config.highlight_loop);
        match config.format {
            GraphFormat::Ascii => renderer
                .render_ascii(&graph, output)
                .wrap_err("Failed to render ASCII graph"),
            GraphFormat::Mermaid => renderer
                .render_mermaid(&graph, output)
                .wrap_err("Failed to render Mermaid graph"),
            GraphFormat::Dot => renderer
                .render_dot(&graph, output)
                .wrap_err("Failed to render DOT graph"),
        }
    }
}

impl CommandExecutor for SpectacleExecutor {
    type Config = SpectacleOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Drawing {} as {}...",
            style("📊").cyan(),
            style(config.file.display()).bold(),
            format!("{:?}", config.format).to_lowercase()
        );

        let mut output_writer: Box<dyn Write> = if let Some(output_path) = config.output.as_ref() {
            Box::new(BufWriter::new(
                File::create(output_path)
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("Failed to create output file '{}'", output_path.display())
                    })?,
            ))
        } else {
            Box::new(io::stdout())
        };

        Self::render_to(&config, output_writer.as_mut())?;
        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to flush graph output")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_render_mermaid_to_buffer() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("lasso.chain.toml");
        fs::write(
            &file,
            "head = \"a\"\nnodes = [{ id = \"a\", next = \"b\" }, { id = \"b\", next = \"b\" }]\n",
        )
        .unwrap();

        let options = SpectacleOptions::builder()
            .with_file(file)
            .with_format(GraphFormat::Mermaid)
            .build()
            .unwrap();

        let mut buffer = Vec::new();
        SpectacleExecutor::render_to(&options, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.starts_with("graph TD"));
        assert!(output.contains("n1 -.->|loop| n1"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let options = SpectacleOptions::builder()
            .with_file("/no/such/file.chain.toml".into())
            .build()
            .unwrap();

        let mut buffer = Vec::new();
        assert!(SpectacleExecutor::render_to(&options, &mut buffer).is_err());
    }
}
