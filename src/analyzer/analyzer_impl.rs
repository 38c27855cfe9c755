use std::path::{Path, PathBuf};

use console::style;
use indicatif::ParallelProgressIterator;
use miette::{Result, WrapErr};
use rayon::prelude::*;

use crate::chain_file::ChainFile;
use crate::core::{ChainReport, LoadedChain};
use crate::detector::{ChainShape, CycleDetector};
use crate::discovery::ChainDiscovery;
use crate::error::ChainLoopError;
use crate::progress::ProgressReporter;

/// Loads chain files and runs the cycle detector over each of them
#[derive(Debug, Clone, Default)]
pub struct ChainAnalyzer {
    detector: CycleDetector,
    chains: Vec<LoadedChain>,
}

impl ChainAnalyzer {
    pub fn new(detector: CycleDetector) -> Self {
        Self {
            detector,
            chains: Vec::new(),
        }
    }

    pub fn chains(&self) -> &[LoadedChain] {
        &self.chains
    }

    pub fn detector(&self) -> &CycleDetector {
        &self.detector
    }

    pub fn add_chain(&mut self, chain: LoadedChain) {
        self.chains.push(chain);
    }

    /// Discover and load every chain file under `paths`.
    ///
    /// All files are attempted; if any fails to load, each failure is
    /// printed and the first one is returned.
    pub fn discover_chains(
        &mut self,
        paths: &[PathBuf],
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<()> {
        if let Some(p) = progress.as_mut() {
            p.start_discovery();
        }

        let mut discovery = ChainDiscovery::new();
        let files = discovery
            .discover_all(paths, progress.as_deref())
            .wrap_err("Failed to discover chain files")?;
        discovery.report_warnings();

        let (loaded, mut errors) = Self::load_parallel(files);
        self.chains.extend(loaded);
        self.chains.sort_by(|a, b| a.path.cmp(&b.path));

        if let Some(p) = progress.as_mut() {
            p.finish_discovery(self.chains.len());
        }

        Self::report_load_errors(&errors);
        if errors.is_empty() {
            Ok(())
        } else {
            let (path, error) = errors.swap_remove(0);
            Err(error).wrap_err_with(|| format!("Failed to load chain '{}'", path.display()))
        }
    }

    fn load_parallel(files: Vec<PathBuf>) -> (Vec<LoadedChain>, Vec<(PathBuf, ChainLoopError)>) {
        files
            .into_par_iter()
            .map(|path| ChainFile::load(&path).map_err(|e| (path, e)))
            .partition_map(|result| match result {
                Ok(v) => rayon::iter::Either::Left(v),
                Err(e) => rayon::iter::Either::Right(e),
            })
    }

    fn report_load_errors(errors: &[(PathBuf, ChainLoopError)]) {
        for (path, error) in errors {
            eprintln!(
                "{} Failed to load '{}': {}",
                style("⚠").yellow(),
                path.display(),
                error
            );
        }
    }

    /// Measure every loaded chain, in path order
    pub fn inspect(
        &self,
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<Vec<ChainReport>, ChainLoopError> {
        let reports: Result<Vec<_>, _> = match progress.as_mut() {
            Some(p) => {
                let pb = p.start_inspection(self.chains.len());
                self.chains
                    .par_iter()
                    .progress_with(pb)
                    .map(|loaded| self.inspect_one(loaded))
                    .collect()
            }
            None => self
                .chains
                .par_iter()
                .map(|loaded| self.inspect_one(loaded))
                .collect(),
        };
        let reports = reports?;

        if let Some(p) = progress.as_mut() {
            p.finish_inspection(reports.iter().filter(|r| r.is_cyclic()).count());
        }

        Ok(reports)
    }

    pub fn inspect_one(&self, loaded: &LoadedChain) -> Result<ChainReport, ChainLoopError> {
        let chain = &loaded.chain;
        let shape = match self.detector.measure(chain, chain.head())? {
            ChainShape::Acyclic { len } => ChainShape::Acyclic { len },
            ChainShape::Cyclic {
                entry,
                tail_len,
                loop_len,
            } => {
                let label = chain.payload(entry).ok_or_else(|| {
                    ChainLoopError::invalid_input(format!("entry {entry} has no payload"))
                })?;
                ChainShape::Cyclic {
                    entry: label.id.clone(),
                    tail_len,
                    loop_len,
                }
            }
        };

        Ok(ChainReport {
            name: loaded.name.clone(),
            path: loaded.path.clone(),
            node_count: chain.len(),
            shape,
        })
    }

    /// Load a single chain file without discovery
    pub fn load_file(&mut self, path: &Path) -> Result<&LoadedChain> {
        let loaded = ChainFile::load(path)
            .wrap_err_with(|| format!("Failed to load chain '{}'", path.display()))?;
        let index = self.chains.len();
        self.chains.push(loaded);
        Ok(&self.chains[index])
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    const SCENARIO_THREE: &str = r#"
head = "a"
nodes = [
    { id = "a", next = "b" },
    { id = "b", next = "c" },
    { id = "c", next = "d" },
    { id = "d", next = "b" },
]
"#;

    const STRAIGHT: &str = r#"
head = "a"
nodes = [
    { id = "a", next = "b" },
    { id = "b", next = "c" },
    { id = "c" },
]
"#;

    fn write_chains(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(temp_dir.path().join(name), content).unwrap();
        }
        temp_dir
    }

    #[test]
    fn test_discover_and_inspect() {
        let temp_dir = write_chains(&[
            ("scenario.chain.toml", SCENARIO_THREE),
            ("straight.chain.toml", STRAIGHT),
        ]);

        let mut analyzer = ChainAnalyzer::default();
        analyzer
            .discover_chains(&[temp_dir.path().to_path_buf()], None)
            .unwrap();
        assert_eq!(analyzer.chains().len(), 2);

        let reports = analyzer.inspect(None).unwrap();
        assert_eq!(reports.len(), 2);

        assert_eq!(reports[0].name, "scenario");
        assert_eq!(
            reports[0].shape,
            ChainShape::Cyclic {
                entry: "b".to_string(),
                tail_len: 1,
                loop_len: 3,
            }
        );
        assert_eq!(reports[0].node_count, 4);

        assert_eq!(reports[1].name, "straight");
        assert_eq!(reports[1].shape, ChainShape::Acyclic { len: 3 });
    }

    #[test]
    fn test_broken_file_is_an_error() {
        let temp_dir = write_chains(&[
            ("good.chain.toml", STRAIGHT),
            ("bad.chain.toml", "head = \"a\"\nnodes = [{ id = \"a\", next = \"x\" }]\n"),
        ]);

        let mut analyzer = ChainAnalyzer::default();
        let err = analyzer
            .discover_chains(&[temp_dir.path().to_path_buf()], None)
            .unwrap_err();

        assert!(err.to_string().contains("bad.chain.toml"));
        assert_eq!(analyzer.chains().len(), 1);
    }

    #[test]
    fn test_load_file_returns_the_new_chain() {
        let temp_dir = write_chains(&[
            ("scenario.chain.toml", SCENARIO_THREE),
            ("straight.chain.toml", STRAIGHT),
        ]);

        let mut analyzer = ChainAnalyzer::default();
        analyzer
            .load_file(&temp_dir.path().join("scenario.chain.toml"))
            .unwrap();
        let loaded = analyzer
            .load_file(&temp_dir.path().join("straight.chain.toml"))
            .unwrap();

        assert_eq!(loaded.name, "straight");
        assert_eq!(loaded.chain.len(), 3);
        assert_eq!(analyzer.chains().len(), 2);
    }

    #[test]
    fn test_step_limit_propagates() {
        let temp_dir = write_chains(&[("scenario.chain.toml", SCENARIO_THREE)]);

        let mut analyzer = ChainAnalyzer::new(CycleDetector::new().with_step_limit(Some(2)));
        analyzer
            .load_file(&temp_dir.path().join("scenario.chain.toml"))
            .unwrap();

        let err = analyzer.inspect(None).unwrap_err();
        assert!(matches!(err, ChainLoopError::StepLimitExceeded { limit: 2 }));
    }
}
