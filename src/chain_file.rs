use std::collections::HashMap;
use std::ops::Range;
use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;
use toml::Spanned;

use crate::chain::{Chain, NodeId};
use crate::constants::files::CHAIN_FILE_SUFFIX;
use crate::core::{LoadedChain, NodeLabel};
use crate::error::{ChainLoopError, ChainParseError, InvalidChainFile};

/// On-disk description of a single chain
#[derive(Debug, Clone, Deserialize)]
pub struct ChainFile {
    pub name: Option<String>,
    pub head: Option<Spanned<String>>,
    #[serde(default)]
    pub nodes: Vec<NodeEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeEntry {
    pub id: Spanned<String>,
    pub value: Option<String>,
    pub next: Option<Spanned<String>>,
}

impl ChainFile {
    pub fn parse_str(content: &str, file: &str) -> Result<Self, ChainLoopError> {
        toml::from_str(content).map_err(|e| {
            let span = e.span().map(to_source_span);

            ChainLoopError::ChainParseError(Box::new(ChainParseError {
                file: file.to_string(),
                source_code: NamedSource::new(file, content.to_string()),
                span,
                source: e,
            }))
        })
    }

    /// Read, parse and link the chain stored at `path`
    pub fn load(path: &Path) -> Result<LoadedChain, ChainLoopError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ChainLoopError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;
        let file = path.display().to_string();

        let parsed = Self::parse_str(&content, &file)?;
        let name = parsed
            .name
            .clone()
            .unwrap_or_else(|| default_chain_name(path));
        let chain = parsed.into_chain(&file, &content)?;

        Ok(LoadedChain {
            name,
            path: path.to_path_buf(),
            chain,
        })
    }

    /// Resolve ids into an arena chain.
    ///
    /// `file` and `content` are only used to point diagnostics at the
    /// offending entry.
    pub fn into_chain(self, file: &str, content: &str) -> Result<Chain<NodeLabel>, ChainLoopError> {
        let invalid = |message: String, span: Range<usize>| {
            ChainLoopError::InvalidChainFile(Box::new(InvalidChainFile {
                file: file.to_string(),
                message,
                source_code: NamedSource::new(file, content.to_string()),
                span: Some(to_source_span(span)),
            }))
        };

        let mut chain = Chain::with_capacity(self.nodes.len());
        let mut ids: HashMap<String, NodeId> = HashMap::with_capacity(self.nodes.len());

        for entry in &self.nodes {
            let id = entry.id.get_ref();
            if ids.contains_key(id) {
                return Err(invalid(
                    format!("duplicate node id '{id}'"),
                    entry.id.span(),
                ));
            }
            let node = chain.push(NodeLabel {
                id: id.clone(),
                value: entry.value.clone().unwrap_or_else(|| id.clone()),
            });
            ids.insert(id.clone(), node);
        }

        for entry in &self.nodes {
            let Some(next) = &entry.next else {
                continue;
            };
            let Some(&to) = ids.get(next.get_ref()) else {
                return Err(invalid(
                    format!(
                        "node '{}' points at unknown node '{}'",
                        entry.id.get_ref(),
                        next.get_ref()
                    ),
                    next.span(),
                ));
            };
            chain.link(ids[entry.id.get_ref()], to)?;
        }

        if let Some(head) = &self.head {
            let Some(&node) = ids.get(head.get_ref()) else {
                return Err(invalid(
                    format!("head '{}' is not a declared node", head.get_ref()),
                    head.span(),
                ));
            };
            chain.set_head(Some(node))?;
        }

        Ok(chain)
    }
}

fn to_source_span(span: Range<usize>) -> SourceSpan {
    SourceSpan::new(span.start.into(), span.end - span.start)
}

/// File name without the chain suffix, e.g. `loop` for `loop.chain.toml`
fn default_chain_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    file_name
        .strip_suffix(CHAIN_FILE_SUFFIX)
        .map(str::to_string)
        .unwrap_or(file_name)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::chain::Successors;

    const LOOPING: &str = r#"
name = "looping"
head = "a"

[[nodes]]
id = "a"
next = "b"

[[nodes]]
id = "b"
value = "second"
next = "c"

[[nodes]]
id = "c"
next = "b"
"#;

    #[test]
    fn test_parse_and_link() {
        let parsed = ChainFile::parse_str(LOOPING, "looping.chain.toml").unwrap();
        assert_eq!(parsed.name.as_deref(), Some("looping"));
        assert_eq!(parsed.nodes.len(), 3);

        let chain = parsed.into_chain("looping.chain.toml", LOOPING).unwrap();
        let head = chain.head().unwrap();
        let b = chain.successor(head).unwrap();
        let c = chain.successor(b).unwrap();

        assert_eq!(chain.payload(head).unwrap().id, "a");
        assert_eq!(chain.payload(b).unwrap().value, "second");
        assert_eq!(chain.payload(c).unwrap().value, "c");
        assert_eq!(chain.successor(c), Some(b));
    }

    #[test]
    fn test_missing_head_is_empty_chain() {
        let content = "[[nodes]]\nid = \"a\"\n";
        let chain = ChainFile::parse_str(content, "x")
            .unwrap()
            .into_chain("x", content)
            .unwrap();

        assert_eq!(chain.len(), 1);
        assert_eq!(chain.head(), None);
    }

    #[test]
    fn test_empty_file() {
        let chain = ChainFile::parse_str("", "empty")
            .unwrap()
            .into_chain("empty", "")
            .unwrap();
        assert!(chain.is_empty());
    }

    #[test]
    fn test_syntax_error() {
        let err = ChainFile::parse_str("head = ", "broken.chain.toml").unwrap_err();

        match err {
            ChainLoopError::ChainParseError(e) => {
                assert_eq!(e.file, "broken.chain.toml");
            }
            other => panic!("Expected ChainParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_dangling_successor() {
        let content = "head = \"a\"\n[[nodes]]\nid = \"a\"\nnext = \"ghost\"\n";
        let err = ChainFile::parse_str(content, "f")
            .unwrap()
            .into_chain("f", content)
            .unwrap_err();

        match err {
            ChainLoopError::InvalidChainFile(e) => {
                assert!(e.message.contains("ghost"));
                let span = e.span.unwrap();
                assert!(content[span.offset()..span.offset() + span.len()].contains("ghost"));
            }
            other => panic!("Expected InvalidChainFile, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_id() {
        let content = "[[nodes]]\nid = \"a\"\n[[nodes]]\nid = \"a\"\n";
        let err = ChainFile::parse_str(content, "f")
            .unwrap()
            .into_chain("f", content)
            .unwrap_err();

        assert!(err.to_string().contains("duplicate node id 'a'"));
    }

    #[test]
    fn test_unknown_head() {
        let content = "head = \"z\"\n[[nodes]]\nid = \"a\"\n";
        let err = ChainFile::parse_str(content, "f")
            .unwrap()
            .into_chain("f", content)
            .unwrap_err();

        assert!(err.to_string().contains("head 'z'"));
    }

    #[test]
    fn test_load_uses_file_stem_as_default_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("orbit.chain.toml");
        fs::write(&path, "head = \"a\"\n[[nodes]]\nid = \"a\"\nnext = \"a\"\n").unwrap();

        let loaded = ChainFile::load(&path).unwrap();
        assert_eq!(loaded.name, "orbit");
        assert_eq!(loaded.path, path);
        assert_eq!(loaded.chain.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ChainFile::load(Path::new("/definitely/not/here.chain.toml")).unwrap_err();
        assert!(matches!(err, ChainLoopError::FileReadError { .. }));
    }
}
