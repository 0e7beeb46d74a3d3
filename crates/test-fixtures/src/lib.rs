//! Test fixture loader for Sift golden datasets.
//!
//! Fixtures live next to this crate under `golden/`. Helpers resolve paths
//! from any crate in the workspace.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Walk up from the calling crate until a `test-fixtures` sibling appears.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by file name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Path of a fixture relative to the fixtures root, for `load_fixture`.
pub fn relative_name(path: &std::path::Path) -> String {
    path.strip_prefix(fixtures_root())
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_golden_retrieval_files_exist() {
        let files = [
            "golden/retrieval/lexical_capital.json",
            "golden/retrieval/empty_corpus.json",
            "golden/retrieval/hybrid_rrf.json",
            "golden/retrieval/semantic_match.json",
            "golden/retrieval/entity_filter_fallback.json",
            "golden/retrieval/rerank_stable.json",
            "golden/retrieval/graph_expansion.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn all_golden_entity_files_exist() {
        assert!(fixture_exists("golden/entity/canonical_matching.json"));
    }

    #[test]
    fn every_golden_file_parses_and_has_expectations() {
        let mut total = 0;
        for dir in ["golden/retrieval", "golden/entity"] {
            for file in list_fixtures(dir) {
                let value = load_fixture_value(&relative_name(&file));
                assert!(
                    value.get("description").is_some(),
                    "{} lacks a description",
                    file.display()
                );
                total += 1;
            }
        }
        assert_eq!(total, 8, "Expected 8 golden files, found {}", total);
    }

    #[test]
    fn list_is_sorted() {
        let files = list_fixtures("golden/retrieval");
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }
}
