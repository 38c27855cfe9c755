use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "chain-loop",
    about = "🔄 Find loops in singly-linked chains",
    long_about = "chain-loop reads chain files (TOML descriptions of singly-linked node \
                  sequences), decides whether following successors from the head ever \
                  terminates, and if not names the node where the loop begins. Detection uses \
                  Floyd's tortoise-and-hare race in constant extra memory.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check chains for loops and report where each loop begins
    ///
    /// Discovers chain files, measures every chain from its head and prints
    /// the loop entry, tail length and loop length of each looping chain.
    #[command(
        long_about = "Discover *.chain.toml files under the given paths and measure each chain. \
                      An acyclic chain reports its length; a cyclic chain reports the node where \
                      the loop begins, how many nodes precede it and how many nodes the loop \
                      holds. Use --error-on-cycles to fail CI when any chain loops."
    )]
    Inspect {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Maximum number of chains to display (shows all by default)
        #[arg(long, env = "CHAIN_LOOP_MAX_CHAINS")]
        max_chains: Option<usize>,

        /// Abort a chain's traversal after this many successor lookups
        #[arg(long, env = "CHAIN_LOOP_STEP_LIMIT")]
        step_limit: Option<usize>,

        /// Exit with error code if any chain loops
        #[arg(long, env = "CHAIN_LOOP_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Draw a single chain, highlighting its loop
    ///
    /// Renders the nodes reachable from the head in walk order, marks the
    /// loop entry and the edge that closes the loop, and lists nodes the
    /// head never reaches.
    #[command(
        long_about = "Render one chain file as ASCII art, a Mermaid diagram or a Graphviz DOT \
                      file. The loop entry and the back edge are highlighted unless \
                      --highlight-loop=false is given."
    )]
    Spectacle {
        /// Chain file to render
        #[arg(value_name = "FILE", env = "CHAIN_LOOP_FILE")]
        file: PathBuf,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = "ascii",
            env = "CHAIN_LOOP_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "CHAIN_LOOP_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight the loop in the graph
        #[arg(
            long,
            default_value = "true",
            action = clap::ArgAction::Set,
            env = "CHAIN_LOOP_HIGHLIGHT_LOOP"
        )]
        highlight_loop: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_inspect() {
        let cli = Cli::try_parse_from([
            "chain-loop",
            "inspect",
            "chains",
            "--format",
            "json",
            "--step-limit",
            "500",
            "--error-on-cycles",
        ])
        .unwrap();

        match cli.command {
            Commands::Inspect {
                common,
                format,
                max_chains,
                step_limit,
                error_on_cycles,
            } => {
                assert_eq!(common.paths, vec![PathBuf::from("chains")]);
                assert_eq!(format.format, OutputFormat::Json);
                assert_eq!(max_chains, None);
                assert_eq!(step_limit, Some(500));
                assert!(error_on_cycles);
            }
            Commands::Spectacle { .. } => panic!("expected inspect"),
        }
    }

    #[test]
    fn test_parse_spectacle_highlight_off() {
        let cli = Cli::try_parse_from([
            "chain-loop",
            "spectacle",
            "loop.chain.toml",
            "--format",
            "dot",
            "--highlight-loop",
            "false",
        ])
        .unwrap();

        match cli.command {
            Commands::Spectacle {
                file,
                format,
                output,
                highlight_loop,
            } => {
                assert_eq!(file, PathBuf::from("loop.chain.toml"));
                assert_eq!(format, GraphFormat::Dot);
                assert!(output.is_none());
                assert!(!highlight_loop);
            }
            Commands::Inspect { .. } => panic!("expected spectacle"),
        }
    }

    #[test]
    fn test_spectacle_requires_file() {
        assert!(Cli::try_parse_from(["chain-loop", "spectacle"]).is_err());
    }
}
