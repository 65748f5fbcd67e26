//! Depth-first discovery of the input file

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::constants::JSON_EXTENSION;
use crate::{Error, Result};

/// Whether `path` ends in `.json` (case-sensitive)
pub fn has_json_extension(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(JSON_EXTENSION)
}

/// Find the first `.json` file under `root`
///
/// Entries are visited depth-first in lexical order and directories are
/// descended as they are met, so `a/z.json` wins over `b.json`. Only regular
/// files match; symlinks are neither followed nor returned. If `root` is
/// itself a regular JSON file it is returned as is.
pub fn find_json_file(root: impl AsRef<Path>) -> Result<PathBuf> {
    let root = root.as_ref();
    let metadata = fs::symlink_metadata(root).map_err(|e| Error::io(root, e))?;

    let found = if metadata.is_dir() {
        walk(root)?
    } else if metadata.is_file() && has_json_extension(root) {
        Some(root.to_path_buf())
    } else {
        None
    };

    match found {
        Some(path) => {
            info!("Found JSON file: {}", path.display());
            Ok(path)
        }
        None => Err(Error::NoJsonFile(root.to_path_buf())),
    }
}

fn walk(dir: &Path) -> Result<Option<PathBuf>> {
    debug!("Scanning directory: {}", dir.display());

    let mut entries = fs::read_dir(dir)
        .and_then(|entries| entries.collect::<std::io::Result<Vec<_>>>())
        .map_err(|e| Error::io(dir, e))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;

        if file_type.is_dir() {
            if let Some(found) = walk(&path)? {
                return Ok(Some(found));
            }
        } else if file_type.is_file() && has_json_extension(&path) {
            return Ok(Some(path));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, relative: &str) -> PathBuf {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "[]").unwrap();
        path
    }

    #[test]
    fn test_extension_check() {
        assert!(has_json_extension(Path::new("data.json")));
        assert!(has_json_extension(Path::new("dir/data.v2.json")));
        assert!(!has_json_extension(Path::new("data.JSON")));
        assert!(!has_json_extension(Path::new("data.jsonl")));
        assert!(!has_json_extension(Path::new("json")));
    }

    #[test]
    fn test_finds_top_level_file() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "notes.txt");
        let expected = touch(&dir, "records.json");

        assert_eq!(find_json_file(dir.path()).unwrap(), expected);
    }

    #[test]
    fn test_first_match_in_lexical_order() {
        let dir = TempDir::new().unwrap();
        let expected = touch(&dir, "b.json");
        touch(&dir, "c.json");

        assert_eq!(find_json_file(dir.path()).unwrap(), expected);
    }

    #[test]
    fn test_descends_before_later_siblings() {
        let dir = TempDir::new().unwrap();
        let expected = touch(&dir, "a/nested/deep.json");
        touch(&dir, "b.json");

        assert_eq!(find_json_file(dir.path()).unwrap(), expected);
    }

    #[test]
    fn test_skips_directories_named_json() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a.json")).unwrap();
        let expected = touch(&dir, "b.json");

        assert_eq!(find_json_file(dir.path()).unwrap(), expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_skips_symlinks() {
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(dir.path().join("missing.json"), dir.path().join("a.json"))
            .unwrap();
        let target = touch(&dir, "sub/real.json");
        std::os::unix::fs::symlink(&target, dir.path().join("b.json")).unwrap();
        let expected = touch(&dir, "c.json");

        assert_eq!(find_json_file(dir.path()).unwrap(), expected);
    }

    #[test]
    fn test_root_file() {
        let dir = TempDir::new().unwrap();
        let file = touch(&dir, "only.json");

        assert_eq!(find_json_file(&file).unwrap(), file);
    }

    #[test]
    fn test_no_match() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "sub/readme.md");

        assert!(matches!(
            find_json_file(dir.path()),
            Err(Error::NoJsonFile(_))
        ));
    }

    #[test]
    fn test_missing_root() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        assert!(matches!(find_json_file(&missing), Err(Error::Io { .. })));
    }
}
