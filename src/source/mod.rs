//! Record Source
//!
//! Finds the input file under a directory and decodes it into memory. The
//! parallel core only ever sees the resulting `Vec<Record>`.

mod decode;
mod discover;

pub use decode::{parse_records, read_records};
pub use discover::{find_json_file, has_json_extension};

use std::path::{Path, PathBuf};
use tracing::info;

use crate::record::Record;
use crate::Result;

/// Records decoded from a discovered file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedRecords {
    /// File the records were read from
    pub path: PathBuf,

    /// Decoded records, never empty
    pub records: Vec<Record>,
}

/// Find the first JSON file under `dir` and decode it
pub fn load_records(dir: impl AsRef<Path>) -> Result<LoadedRecords> {
    let path = find_json_file(dir)?;
    let records = read_records(&path)?;
    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(LoadedRecords { path, records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::fs;

    #[test]
    fn test_load_records() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("input.json"), r#"[{"a": 1, "b": 2}]"#).unwrap();

        let loaded = load_records(dir.path()).unwrap();
        assert_eq!(loaded.path, dir.path().join("input.json"));
        assert_eq!(loaded.records, vec![Record::new(1, 2)]);
    }

    #[test]
    fn test_load_records_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_records(dir.path()),
            Err(Error::NoJsonFile(_))
        ));
    }
}
