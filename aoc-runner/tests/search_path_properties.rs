//! Property-based tests for dependency path handling and log line layout

use aoc_runner::{Logger, PathSpec, SearchPaths, format_line};
use chrono::Local;
use proptest::prelude::*;
use std::fmt::Debug;
use std::path::PathBuf;
use tempfile::TempDir;

fn dirs(count: usize) -> Vec<TempDir> {
    (0..count).map(|_| TempDir::new().unwrap()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Adding any sequence of existing paths keeps each exactly once,
    /// in order of first appearance.
    #[test]
    fn prop_paths_unique_in_first_seen_order(picks in prop::collection::vec(0usize..4, 0..16)) {
        let dirs = dirs(4);
        let (logger, captured) = Logger::capture();
        let mut paths = SearchPaths::new();

        for &i in &picks {
            paths.add(&PathSpec::Single(dirs[i].path().to_path_buf()), &logger).unwrap();
        }

        let mut expected: Vec<PathBuf> = Vec::new();
        for &i in &picks {
            let path = dirs[i].path().to_path_buf();
            if !expected.contains(&path) {
                expected.push(path);
            }
        }

        let actual: Vec<PathBuf> = paths.iter().map(|p| p.to_path_buf()).collect();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(captured.lines().len(), picks.len());
    }

    /// Nesting a list of paths does not change what ends up on the search path.
    #[test]
    fn prop_nesting_is_transparent(picks in prop::collection::vec(0usize..3, 1..8), split in 0usize..8) {
        let dirs = dirs(3);
        let (logger, _) = Logger::capture();
        let flat: Vec<PathBuf> = picks.iter().map(|&i| dirs[i].path().to_path_buf()).collect();
        let split = split.min(flat.len());

        let nested = PathSpec::from(vec![
            PathSpec::from(flat[..split].to_vec()),
            PathSpec::from(vec![PathSpec::from(flat[split..].to_vec())]),
        ]);

        let mut from_flat = SearchPaths::new();
        from_flat.add(&PathSpec::from(flat.clone()), &logger).unwrap();
        let mut from_nested = SearchPaths::new();
        from_nested.add(&nested, &logger).unwrap();

        prop_assert_eq!(from_flat, from_nested);
    }

    /// Object and field sections appear only when non-empty.
    #[test]
    fn prop_line_sections(objects in prop::collection::vec("[a-z]{1,6}", 0..4), fields in 0usize..3) {
        let object_refs: Vec<&dyn Debug> = objects.iter().map(|o| o as &dyn Debug).collect();
        let values = [1, 2, 3];
        let field_refs: Vec<(&str, &dyn Debug)> = values[..fields]
            .iter()
            .map(|v| ("k", v as &dyn Debug))
            .collect();

        let line = format_line(Local::now(), "INFO", &object_refs, &field_refs);
        let sections = line.split(" | ").count();

        let expected = 2 + usize::from(!objects.is_empty()) + usize::from(fields > 0);
        prop_assert_eq!(sections, expected);
        prop_assert!(line.contains("[INFO]"));
        prop_assert_eq!(line.ends_with('}'), fields > 0);
    }
}
