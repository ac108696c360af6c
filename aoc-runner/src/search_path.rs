//! Dependency directories made available to solutions

use crate::error::RunError;
use crate::logger::Logger;
use serde::Deserialize;
use std::path::{self, Path, PathBuf};

/// A single path or an arbitrarily nested list of paths
///
/// Deserializes from a JSON string or array, e.g. `["shared", ["a", "b"]]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PathSpec {
    Single(PathBuf),
    Nested(Vec<PathSpec>),
}

impl PathSpec {
    /// Flatten into the order paths are declared
    pub fn flatten(&self) -> Vec<&Path> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a Path>) {
        match self {
            PathSpec::Single(path) => out.push(path),
            PathSpec::Nested(specs) => {
                for spec in specs {
                    spec.collect_into(out);
                }
            }
        }
    }
}

impl From<PathBuf> for PathSpec {
    fn from(path: PathBuf) -> Self {
        PathSpec::Single(path)
    }
}

impl From<&str> for PathSpec {
    fn from(path: &str) -> Self {
        PathSpec::Single(PathBuf::from(path))
    }
}

impl<T: Into<PathSpec>> From<Vec<T>> for PathSpec {
    fn from(specs: Vec<T>) -> Self {
        PathSpec::Nested(specs.into_iter().map(Into::into).collect())
    }
}

/// Ordered list of dependency directories without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPaths {
    entries: Vec<PathBuf>,
}

impl SearchPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every path in `spec`, recursing into nested lists
    ///
    /// Each path is checked for existence and the check is logged. The first
    /// missing path stops the walk with [`RunError::DependencyNotFound`];
    /// paths added before it stay added. Relative paths are stored resolved
    /// against the current working directory.
    pub fn add(&mut self, spec: &PathSpec, logger: &Logger) -> Result<(), RunError> {
        match spec {
            PathSpec::Single(path) => self.add_one(path, logger),
            PathSpec::Nested(specs) => {
                for spec in specs {
                    self.add(spec, logger)?;
                }
                Ok(())
            }
        }
    }

    fn add_one(&mut self, path: &Path, logger: &Logger) -> Result<(), RunError> {
        if !path.exists() {
            let err = RunError::DependencyNotFound {
                path: path.to_path_buf(),
            };
            logger.error(&err, &[&"Dependency path not found", &path], &[]);
            return Err(err);
        }
        logger.info(&[&"Found dependency path", &path], &[]);

        let path = path::absolute(path).map_err(|_| RunError::DependencyNotFound {
            path: path.to_path_buf(),
        })?;
        if !self.contains(&path) {
            log::debug!("adding {} to the search path", path.display());
            self.entries.push(path);
        }
        Ok(())
    }

    /// Put `path` at the front unless it is already present
    pub fn prepend(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if !self.contains(&path) {
            self.entries.insert(0, path);
        }
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|p| p == path)
    }

    /// First existing `<dir>/<name>` in search order
    pub fn locate(&self, name: impl AsRef<Path>) -> Option<PathBuf> {
        let name = name.as_ref();
        self.entries
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.exists())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
