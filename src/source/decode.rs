//! JSON decoding of the record array

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

use crate::record::Record;
use crate::{Error, Result};

/// Read and decode the record array stored at `path`
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    debug!("Decoding records from: {}", path.display());

    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    parse_records(BufReader::new(file), path)
}

/// Decode a JSON array of `{"a": .., "b": ..}` objects from `reader`
///
/// `origin` is only used in error messages. An empty array is
/// [`Error::NoData`].
pub fn parse_records<R: Read>(reader: R, origin: &Path) -> Result<Vec<Record>> {
    let records: Vec<Record> =
        serde_json::from_reader(reader).map_err(|e| Error::InvalidJson {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })?;

    if records.is_empty() {
        return Err(Error::NoData);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn parse(text: &str) -> Result<Vec<Record>> {
        parse_records(text.as_bytes(), Path::new("inline.json"))
    }

    #[test]
    fn test_parse_array() {
        let records = parse(r#"[{"a": 1, "b": 2}, {"a": 3, "b": 4}]"#).unwrap();
        assert_eq!(records, vec![Record::new(1, 2), Record::new(3, 4)]);
    }

    #[test]
    fn test_parse_whitespace_and_negatives() {
        let records = parse("\n[\n  {\"a\": -1, \"b\": 0}\n]\n").unwrap();
        assert_eq!(records, vec![Record::new(-1, 0)]);
    }

    #[test]
    fn test_empty_array_is_no_data() {
        assert!(matches!(parse("[]"), Err(Error::NoData)));
        assert!(matches!(parse("  [ ] "), Err(Error::NoData)));
    }

    #[test]
    fn test_rejects_non_array() {
        assert!(matches!(
            parse(r#"{"a": 1, "b": 2}"#),
            Err(Error::InvalidJson { .. })
        ));
        assert!(matches!(parse(""), Err(Error::InvalidJson { .. })));
    }

    #[test]
    fn test_rejects_unterminated_array() {
        assert!(matches!(
            parse(r#"[{"a": 1, "b": 2}"#),
            Err(Error::InvalidJson { .. })
        ));
    }

    #[test]
    fn test_rejects_wrong_field_types() {
        let err = parse(r#"[{"a": "x", "b": 2}]"#).unwrap_err();
        match err {
            Error::InvalidJson { path, reason } => {
                assert_eq!(path, Path::new("inline.json"));
                assert!(reason.contains("`a`"), "unexpected reason: {reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, r#"[{"a": 5, "b": 5}]"#).unwrap();

        assert_eq!(read_records(&path).unwrap(), vec![Record::new(5, 5)]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_records(dir.path().join("nope.json")),
            Err(Error::Io { .. })
        ));
    }
}
