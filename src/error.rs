use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(chain_loop::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct ChainParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid chain in '{file}': {message}")]
#[diagnostic(
    code(chain_loop::invalid_chain_file),
    help("Every `next` and the `head` must name the `id` of a node declared in the same file")
)]
pub struct InvalidChainFile {
    pub file: String,
    pub message: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("here")]
    pub span: Option<SourceSpan>,
}

#[derive(Error, Debug, Diagnostic)]
pub enum ChainLoopError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(chain_loop::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ChainParseError(Box<ChainParseError>),

    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidChainFile(Box<InvalidChainFile>),

    #[error("Invalid input: {message}")]
    #[diagnostic(
        code(chain_loop::invalid_input),
        help("The chain is malformed; every successor must be a node of the same chain")
    )]
    InvalidInput { message: String },

    #[error("Traversal exceeded the step limit of {limit}")]
    #[diagnostic(
        code(chain_loop::step_limit_exceeded),
        help("Raise --step-limit or check whether the chain is being modified during traversal")
    )]
    StepLimitExceeded { limit: usize },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(chain_loop::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(chain_loop::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(chain_loop::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(chain_loop::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

impl ChainLoopError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_chain_parse_error_display() {
        let source_code = "invalid = toml content";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = ChainParseError {
            file: "loop.chain.toml".to_string(),
            source_code: NamedSource::new("loop.chain.toml", source_code.to_string()),
            span: Some((10, 4).into()),
            source: toml_err,
        };

        assert_eq!(error.to_string(), "Invalid TOML syntax in 'loop.chain.toml'");
    }

    #[test]
    fn test_invalid_chain_file_display() {
        let error = InvalidChainFile {
            file: "a.chain.toml".to_string(),
            message: "unknown successor 'z'".to_string(),
            source_code: NamedSource::new("a.chain.toml", "next = \"z\"".to_string()),
            span: Some((7, 3).into()),
        };

        assert_eq!(
            error.to_string(),
            "Invalid chain in 'a.chain.toml': unknown successor 'z'"
        );
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = ChainLoopError::FileReadError {
            path: PathBuf::from("/tmp/missing.chain.toml"),
            source: io_err,
        };

        assert_eq!(
            error.to_string(),
            "Failed to read file '/tmp/missing.chain.toml'"
        );
    }

    #[test]
    fn test_invalid_input() {
        let error = ChainLoopError::invalid_input("head is not part of this chain");

        assert_eq!(
            error.to_string(),
            "Invalid input: head is not part of this chain"
        );
    }

    #[test]
    fn test_step_limit_exceeded() {
        let error = ChainLoopError::StepLimitExceeded { limit: 64 };
        assert_eq!(error.to_string(), "Traversal exceeded the step limit of 64");
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        let errors = [
            ChainLoopError::invalid_input("bad"),
            ChainLoopError::StepLimitExceeded { limit: 1 },
            ChainLoopError::ConfigurationError {
                message: "missing".to_string(),
            },
        ];

        for error in errors {
            assert!(error.code().is_some());
            assert!(error.help().is_some());
        }
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let err: ChainLoopError = io_err.into();

        match err {
            ChainLoopError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let err: ChainLoopError = json_err.into();

        match err {
            ChainLoopError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
