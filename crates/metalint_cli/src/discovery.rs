//! File discovery

use std::path::{Path, PathBuf};

use miette::Result;
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// Directories never descended into.
const DEFAULT_SKIP_DIRS: &[&str] = &["target", "node_modules"];

/// Expands `paths` into a sorted, deduplicated list of files.
///
/// Directories are walked recursively, skipping hidden directories and any
/// directory named in `skip_dirs`. A path that does not exist is an error;
/// entries that fail while walking are logged and skipped.
pub fn discover_files(paths: &[PathBuf], skip_dirs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if !path.exists() {
            miette::bail!("Path does not exist: {}", path.display());
        }
        if path.is_file() {
            files.push(path.clone());
            continue;
        }

        let walker = WalkDir::new(path)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e, skip_dirs));
        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() => files.push(normalize(entry.path())),
                Ok(_) => {}
                Err(e) => warn!("Walk error: {}", e),
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn is_skipped_dir(entry: &DirEntry, skip_dirs: &[String]) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.')
        || DEFAULT_SKIP_DIRS.contains(&&*name)
        || skip_dirs.iter().any(|d| d == &*name)
}

/// Strips a leading `./` so reported paths stay short.
fn normalize(path: &Path) -> PathBuf {
    path.strip_prefix(".").unwrap_or(path).to_path_buf()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_discover_skips_hidden_and_configured_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src/nested")).unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::create_dir_all(root.join("vendor")).unwrap();
        fs::create_dir_all(root.join("target")).unwrap();
        fs::write(root.join("src/lib.rs"), "").unwrap();
        fs::write(root.join("src/nested/mod.rs"), "").unwrap();
        fs::write(root.join(".git/config"), "").unwrap();
        fs::write(root.join("vendor/dep.rs"), "").unwrap();
        fs::write(root.join("target/out.rs"), "").unwrap();

        let files = discover_files(&[root.to_path_buf()], &["vendor".to_string()]).unwrap();

        assert_eq!(
            files,
            vec![root.join("src/lib.rs"), root.join("src/nested/mod.rs")]
        );
    }

    #[test]
    fn test_discover_dedups_explicit_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "").unwrap();

        let files = discover_files(&[file.clone(), dir.path().to_path_buf()], &[]).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = discover_files(&[dir.path().to_path_buf(), missing], &[]).unwrap_err();
        assert!(err.to_string().contains("Path does not exist"));
    }

    #[test]
    fn test_normalize_strips_current_dir() {
        assert_eq!(normalize(Path::new("./src/lib.rs")), PathBuf::from("src/lib.rs"));
        assert_eq!(normalize(Path::new("src/lib.rs")), PathBuf::from("src/lib.rs"));
    }
}
