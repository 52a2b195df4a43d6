use std::path::{Path, PathBuf};

use crate::{Error, Result, SourceUnit};

/// A syntax tree file with both raw content and parsed unit.
#[derive(Debug)]
pub struct SourceFile {
    path: PathBuf,
    unit: SourceUnit,
}

impl SourceFile {
    /// Open and parse a syntax tree JSON file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let unit = SourceUnit::from_json_with_filename(&content, &filename)?;

        Ok(Self { path, unit })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed unit.
    pub fn unit(&self) -> &SourceUnit {
        &self.unit
    }

    pub fn into_unit(self) -> SourceUnit {
        self.unit
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_reads_unit() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("user.json");
        fs::write(
            &path,
            r#"{"declarations": [{"kind": "class", "name": "User"}]}"#,
        )
        .unwrap();

        let file = SourceFile::open(&path).unwrap();
        assert_eq!(file.path(), path.as_path());
        assert_eq!(file.unit().declarations[0].name, "User");
    }

    #[test]
    fn test_open_missing_file() {
        let err = SourceFile::open("/definitely/missing/unit.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_open_reports_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "{\"declarations\": [").unwrap();

        let err = SourceFile::open(&path).unwrap_err();
        assert!(matches!(*err, Error::Parse { span: Some(_), .. }));
    }
}
