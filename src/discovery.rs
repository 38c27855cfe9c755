use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use walkdir::WalkDir;

use crate::constants::files::{CHAIN_FILE_SUFFIX, SKIPPED_DIRS};
use crate::progress::ProgressReporter;

/// Finds chain files among files, directories and glob patterns
pub struct ChainDiscovery {
    found: BTreeSet<PathBuf>,
    warnings: Vec<String>,
}

impl Default for ChainDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainDiscovery {
    pub fn new() -> Self {
        Self {
            found: BTreeSet::new(),
            warnings: Vec::new(),
        }
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Discover chain files in the given paths, sorted and deduplicated.
    ///
    /// Files named explicitly are taken whatever their suffix; directories
    /// contribute every `*.chain.toml` below them.
    pub fn discover_all(
        &mut self,
        paths: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<PathBuf>> {
        for path in paths {
            if is_glob_pattern(path) {
                self.expand_glob(path, progress)
                    .wrap_err_with(|| format!("Failed to expand pattern '{}'", path.display()))?;
                continue;
            }

            if !path.exists() {
                self.warnings
                    .push(format!("Path '{}' does not exist", path.display()));
                continue;
            }

            if path.is_dir() {
                self.discover_in_dir(path, progress);
            } else {
                self.add_file(path, progress);
            }
        }

        Ok(self.found.iter().cloned().collect())
    }

    fn discover_in_dir(&mut self, dir: &Path, progress: Option<&ProgressReporter>) {
        let files: Vec<PathBuf> = WalkDir::new(dir)
            .into_iter()
            .filter_entry(|e| {
                let name = e.file_name().to_string_lossy();
                e.depth() == 0 || !SKIPPED_DIRS.contains(&name.as_ref())
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && is_chain_file(e.path()))
            .map(|e| e.into_path())
            .collect();

        for file in files {
            self.add_file(&file, progress);
        }
    }

    fn expand_glob(&mut self, pattern: &Path, progress: Option<&ProgressReporter>) -> Result<()> {
        let pattern = pattern.to_string_lossy();
        let entries = glob::glob(&pattern).into_diagnostic()?;

        let mut matched = false;
        for entry in entries {
            match entry {
                Ok(path) if path.is_dir() => {
                    matched = true;
                    self.discover_in_dir(&path, progress);
                }
                Ok(path) => {
                    matched = true;
                    self.add_file(&path, progress);
                }
                Err(e) => self.warnings.push(format!("Skipping unreadable match: {e}")),
            }
        }

        if !matched {
            self.warnings
                .push(format!("Pattern '{pattern}' matched nothing"));
        }
        Ok(())
    }

    fn add_file(&mut self, path: &Path, progress: Option<&ProgressReporter>) {
        if let Some(p) = progress {
            p.checking_path(path);
        }
        self.found.insert(path.to_path_buf());
    }

    /// Print collected warnings to stderr
    pub fn report_warnings(&self) {
        for warning in &self.warnings {
            eprintln!("{} {}", style("⚠").yellow(), warning);
        }
    }
}

fn is_glob_pattern(path: &Path) -> bool {
    path.to_string_lossy()
        .chars()
        .any(|c| matches!(c, '*' | '?' | '['))
}

fn is_chain_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(CHAIN_FILE_SUFFIX))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_walks_directories_for_chain_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("a.chain.toml"));
        touch(&root.join("nested/b.chain.toml"));
        touch(&root.join("nested/notes.toml"));
        touch(&root.join("target/c.chain.toml"));

        let mut discovery = ChainDiscovery::new();
        let files = discovery
            .discover_all(&[root.to_path_buf()], None)
            .unwrap();

        assert_eq!(
            files,
            vec![root.join("a.chain.toml"), root.join("nested/b.chain.toml")]
        );
        assert!(discovery.warnings().is_empty());
    }

    #[test]
    fn test_explicit_file_and_dedup() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("custom.toml");
        touch(&file);

        let mut discovery = ChainDiscovery::new();
        let files = discovery
            .discover_all(&[file.clone(), file.clone()], None)
            .unwrap();

        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_missing_path_warns() {
        let mut discovery = ChainDiscovery::new();
        let files = discovery
            .discover_all(&[PathBuf::from("/no/such/chains")], None)
            .unwrap();

        assert!(files.is_empty());
        assert_eq!(discovery.warnings().len(), 1);
        assert!(discovery.warnings()[0].contains("does not exist"));
    }

    #[test]
    fn test_glob_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("one.chain.toml"));
        touch(&root.join("two.chain.toml"));
        touch(&root.join("skip.txt"));

        let pattern = root.join("*.chain.toml");
        let mut discovery = ChainDiscovery::new();
        let files = discovery.discover_all(&[pattern], None).unwrap();

        assert_eq!(
            files,
            vec![root.join("one.chain.toml"), root.join("two.chain.toml")]
        );
    }

    #[test]
    fn test_is_chain_file() {
        assert!(is_chain_file(Path::new("dir/loop.chain.toml")));
        assert!(!is_chain_file(Path::new("dir/Cargo.toml")));
    }
}
