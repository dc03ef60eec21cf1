//! Turning command line paths into tree/source pairs

use glob::glob;
use std::path::{Path, PathBuf};

/// Suffix of tree files written by the parser
pub const TREE_SUFFIX: &str = ".tree.json";

/// A tree file and, when given on the command line, the source it describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub tree: PathBuf,
    pub source: Option<PathBuf>,
}

/// Expand directories into the tree files below them
///
/// `source` pairs an explicit source file with the tree, which only makes
/// sense for a single tree file.
pub fn collect_inputs(paths: &[PathBuf], source: Option<&Path>) -> Result<Vec<Input>, String> {
    if let Some(source) = source {
        return match paths {
            [tree] if !tree.is_dir() => Ok(vec![Input {
                tree: tree.clone(),
                source: Some(source.to_path_buf()),
            }]),
            _ => Err(format!(
                "--source {} needs exactly one tree file",
                source.display()
            )),
        };
    }

    let mut inputs = Vec::new();
    for path in paths {
        if path.is_dir() {
            let trees = find_trees(path)?;
            if trees.is_empty() {
                log::warn!("no *{} files under {}", TREE_SUFFIX, path.display());
            }
            inputs.extend(trees.into_iter().map(|tree| Input { tree, source: None }));
        } else {
            inputs.push(Input {
                tree: path.clone(),
                source: None,
            });
        }
    }
    Ok(inputs)
}

fn find_trees(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let root = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{}/**/*{}", root.trim_end_matches('/'), TREE_SUFFIX);

    let paths = glob(&pattern).map_err(|e| format!("invalid pattern '{}': {}", pattern, e))?;
    let mut trees: Vec<PathBuf> = paths.flatten().filter(|p| p.is_file()).collect();
    trees.sort();
    log::debug!("found {} tree file(s) under {}", trees.len(), dir.display());
    Ok(trees)
}
