//! Loading samples from JSON files
//!
//! Two layouts are accepted:
//!
//! ```json
//! [[0.1, 12.0], [0.3, 11.5]]
//! ```
//!
//! ```json
//! {"features": ["pr", "tas"], "rows": [[0.1, 12.0], [0.3, 11.5]]}
//! ```

use analogs_core::{Error, Result, Sample};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum SampleFile {
    Rows(Vec<Vec<f64>>),
    Labeled {
        #[serde(default)]
        features: Vec<String>,
        rows: Vec<Vec<f64>>,
    },
}

/// A sample together with its feature names, when the file carries them.
#[derive(Debug, Clone)]
pub struct LabeledSample {
    pub features: Vec<String>,
    pub sample: Sample,
}

/// Parse a sample from JSON text.
pub fn parse_sample(text: &str) -> Result<LabeledSample> {
    match serde_json::from_str::<SampleFile>(text)? {
        SampleFile::Rows(rows) => Ok(LabeledSample {
            features: Vec::new(),
            sample: Sample::new(rows)?,
        }),
        SampleFile::Labeled { features, rows } => {
            let sample = Sample::new(rows)?;
            if !features.is_empty() && !sample.is_empty() && features.len() != sample.dim() {
                return Err(Error::DimensionMismatch {
                    expected: features.len(),
                    actual: sample.dim(),
                });
            }
            let sample = if sample.is_empty() && !features.is_empty() {
                Sample::empty(features.len())
            } else {
                sample
            };
            Ok(LabeledSample { features, sample })
        }
    }
}

/// Read a sample from a JSON file.
pub fn load_sample(path: impl AsRef<Path>) -> Result<LabeledSample> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_sample(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_plain_rows() {
        let file = write("[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]");
        let loaded = load_sample(file.path()).unwrap();
        assert!(loaded.features.is_empty());
        assert_eq!(loaded.sample.len(), 3);
        assert_eq!(loaded.sample.dim(), 2);
        assert_eq!(loaded.sample.row(2), &[5.0, 6.0]);
    }

    #[test]
    fn test_load_labeled() {
        let file = write(r#"{"features": ["pr", "tas"], "rows": [[0.1, 12.0], [0.3, 11.5]]}"#);
        let loaded = load_sample(file.path()).unwrap();
        assert_eq!(loaded.features, vec!["pr", "tas"]);
        assert_eq!(loaded.sample.len(), 2);
    }

    #[test]
    fn test_labeled_width_mismatch() {
        let err = parse_sample(r#"{"features": ["pr"], "rows": [[0.1, 12.0]]}"#).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { expected: 1, actual: 2 }));
    }

    #[test]
    fn test_labeled_empty_keeps_width() {
        let loaded = parse_sample(r#"{"features": ["pr", "tas"], "rows": []}"#).unwrap();
        assert!(loaded.sample.is_empty());
        assert_eq!(loaded.sample.dim(), 2);
    }

    #[test]
    fn test_ragged_rows() {
        let err = parse_sample("[[1.0, 2.0], [3.0]]").unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
    }

    #[test]
    fn test_bad_json_and_missing_file() {
        assert!(matches!(parse_sample("{not json"), Err(Error::Serialization(_))));
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(load_sample(&missing), Err(Error::Io(_))));
    }
}
