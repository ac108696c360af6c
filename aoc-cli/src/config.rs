//! Configuration resolution from the environment

use crate::error::CliError;
use aoc_runner::PathSpec;
use std::path::{Path, PathBuf};

/// Root of the per-year/per-problem directories
pub const SOLUTION_DIRECTORY_VAR: &str = "AOC_SOLUTION_DIRECTORY_PATH";
/// JSON list of dependency directories, possibly nested
pub const IMPORT_PATHS_VAR: &str = "AOC_IMPORT_PATHS";
/// Change into the problem directory while a part runs
pub const CHANGE_DIR_VAR: &str = "AOC_CHANGE_DIR";

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Absolute solution root
    pub root: PathBuf,
    /// Dependency directories to put on the search path
    pub import_paths: Option<PathSpec>,
    /// Whether to change the working directory during a run
    pub change_dir: bool,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value if set
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let root = lookup(SOLUTION_DIRECTORY_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                CliError::Config(format!(
                    "Set the ${} environment variable to the path of the directory with your solutions.",
                    SOLUTION_DIRECTORY_VAR
                ))
            })?;
        let root = resolve(&expand_tilde(Path::new(&root)))?;

        let import_paths = match lookup(IMPORT_PATHS_VAR) {
            Some(raw) if !raw.trim().is_empty() => Some(parse_import_paths(&raw)?),
            _ => None,
        };

        let change_dir = lookup(CHANGE_DIR_VAR)
            .map(|value| parse_flag(&value))
            .transpose()?
            .unwrap_or(false);

        Ok(Config {
            root,
            import_paths,
            change_dir,
        })
    }
}

/// Parse the JSON form of `AOC_IMPORT_PATHS`
///
/// A bare string is accepted as a single path.
pub fn parse_import_paths(raw: &str) -> Result<PathSpec, CliError> {
    serde_json::from_str(raw).map_err(|source| CliError::ImportPaths {
        var: IMPORT_PATHS_VAR,
        source,
    })
}

fn parse_flag(value: &str) -> Result<bool, CliError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(CliError::Config(format!(
            "${} must be a boolean, got '{}'",
            CHANGE_DIR_VAR, other
        ))),
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Make `path` absolute without requiring it to exist
fn resolve(path: &Path) -> Result<PathBuf, CliError> {
    std::path::absolute(path).map_err(|e| {
        CliError::Config(format!("Cannot resolve {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_root_names_the_variable() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains(SOLUTION_DIRECTORY_VAR));
    }

    #[test]
    fn test_minimal_config() {
        let config = Config::from_lookup(lookup_from(&[(SOLUTION_DIRECTORY_VAR, "/srv/aoc")])).unwrap();
        assert_eq!(config.root, PathBuf::from("/srv/aoc"));
        assert_eq!(config.import_paths, None);
        assert!(!config.change_dir);
    }

    #[test]
    fn test_relative_root_made_absolute() {
        let config = Config::from_lookup(lookup_from(&[(SOLUTION_DIRECTORY_VAR, "solutions")])).unwrap();
        assert!(config.root.is_absolute());
        assert!(config.root.ends_with("solutions"));
    }

    #[test]
    fn test_tilde_expansion() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
        assert_eq!(expand_tilde(Path::new("/x/~y")), PathBuf::from("/x/~y"));
    }

    #[test]
    fn test_import_paths_nested() {
        let config = Config::from_lookup(lookup_from(&[
            (SOLUTION_DIRECTORY_VAR, "/srv/aoc"),
            (IMPORT_PATHS_VAR, r#"["/lib/a", ["/lib/b", "/lib/c"]]"#),
            (CHANGE_DIR_VAR, "true"),
        ]))
        .unwrap();

        let spec = config.import_paths.unwrap();
        let flat: Vec<&Path> = spec.flatten();
        assert_eq!(
            flat,
            vec![Path::new("/lib/a"), Path::new("/lib/b"), Path::new("/lib/c")]
        );
        assert!(config.change_dir);
    }

    #[test]
    fn test_single_string_import_path() {
        let spec = parse_import_paths(r#""/lib/only""#).unwrap();
        assert_eq!(spec, PathSpec::Single(PathBuf::from("/lib/only")));
    }

    #[test]
    fn test_invalid_import_paths() {
        let err = parse_import_paths("[1, 2]").unwrap_err();
        assert!(matches!(err, CliError::ImportPaths { .. }));
        assert!(parse_import_paths("not json").is_err());
    }

    #[test]
    fn test_bad_change_dir_flag() {
        let err = Config::from_lookup(lookup_from(&[
            (SOLUTION_DIRECTORY_VAR, "/srv/aoc"),
            (CHANGE_DIR_VAR, "sometimes"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains(CHANGE_DIR_VAR));
    }
}
