//! `dtogen.toml` loading.
//!
//! Relative paths in the file (input globs, output directory) are resolved
//! against the directory containing the config, not the working directory.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Box<ConfigError>>;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(dtogen::config_io),
        help("run dtogen next to a dtogen.toml or pass --config")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    #[diagnostic(code(dtogen::config_parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(dtogen::config_invalid))]
    Invalid {
        #[source_code]
        src: NamedSource<String>,
        message: String,
    },
}

impl ConfigError {
    fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(ConfigError::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    fn invalid(message: impl Into<String>, src: &str, filename: &str) -> Box<Self> {
        Box::new(ConfigError::Invalid {
            src: NamedSource::new(filename, src.to_string()),
            message: message.into(),
        })
    }
}

/// Parsed `dtogen.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub typescript: TypeScriptConfig,
    /// Directory the relative paths above are resolved against.
    #[serde(skip)]
    pub root: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// Glob patterns for syntax tree JSON files, in processing order.
    #[serde(default)]
    pub files: Vec<String>,
}

/// Marker names gating membership; an absent name accepts everything.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    pub dto: Option<String>,
    pub endpoint: Option<String>,
    pub resource: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriterKind {
    #[default]
    SingleFile,
    EntityPerClass,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct OutputConfig {
    pub writer: WriterKind,
    /// Output directory.
    pub path: PathBuf,
    /// File name used by the single-file writer.
    pub file_name: String,
    /// Text prepended to every generated file.
    pub banner: Option<String>,
    /// Prepend the autogenerated notice comment.
    pub notice: bool,
    /// Wrap collection outputs in `CollectionResponse<T>` and emit the helper type.
    pub collection_response: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            writer: WriterKind::default(),
            path: PathBuf::from("generated"),
            file_name: "generated.ts".to_string(),
            banner: None,
            notice: true,
            collection_response: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TypeScriptConfig {
    pub use_types_instead_of_enums: bool,
    pub nested_generics_use_template_literal: bool,
    /// Properties with a default value become `name?:`.
    pub optional_defaults: bool,
    /// camelCase property keys.
    pub camel_case_properties: bool,
    /// Map date/time classes to `string`.
    pub date_time: bool,
    /// Class name to literal TypeScript, checked before class names.
    pub overrides: IndexMap<String, String>,
}

impl Default for TypeScriptConfig {
    fn default() -> Self {
        Self {
            use_types_instead_of_enums: false,
            nested_generics_use_template_literal: false,
            optional_defaults: true,
            camel_case_properties: false,
            date_time: true,
            overrides: IndexMap::new(),
        }
    }
}

impl Config {
    /// Read and validate a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let mut config = Self::parse(&content, &path.display().to_string())?;
        config.root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(config)
    }

    /// Parse config text. `root` is left empty.
    pub fn parse(content: &str, filename: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::parse(e, content, filename))?;
        config.validate(content, filename)?;
        Ok(config)
    }

    fn validate(&self, content: &str, filename: &str) -> Result<()> {
        if self.input.files.is_empty() {
            return Err(ConfigError::invalid(
                "[input] files must list at least one pattern",
                content,
                filename,
            ));
        }
        if self.output.writer == WriterKind::SingleFile && self.output.file_name.trim().is_empty() {
            return Err(ConfigError::invalid(
                "[output] file_name must not be empty for the single-file writer",
                content,
                filename,
            ));
        }
        if let Some((name, _)) = self
            .typescript
            .overrides
            .iter()
            .find(|(name, ty)| name.trim().is_empty() || ty.trim().is_empty())
        {
            return Err(ConfigError::invalid(
                format!("[typescript.overrides] entry '{name}' needs a class name and a type"),
                content,
                filename,
            ));
        }
        Ok(())
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.output.path)
    }

    /// Input patterns anchored at the config directory.
    pub fn input_patterns(&self) -> Vec<String> {
        self.input
            .files
            .iter()
            .map(|pattern| self.root.join(pattern).display().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse("[input]\nfiles = [\"ast/*.json\"]\n", "dtogen.toml").unwrap();
        assert_eq!(config.output.writer, WriterKind::SingleFile);
        assert_eq!(config.output.file_name, "generated.ts");
        assert!(config.output.notice);
        assert!(config.output.collection_response);
        assert!(config.typescript.optional_defaults);
        assert!(config.typescript.date_time);
        assert!(config.filter.dto.is_none());
    }

    #[test]
    fn test_full_config() {
        let content = r#"
[input]
files = ["ast/*.json"]

[filter]
dto = "Dto"
endpoint = "DtoEndpoint"
resource = "DtoResource"

[output]
writer = "entity-per-class"
path = "frontend/src/api"
banner = "/* eslint-disable */"
collection_response = false

[typescript]
use_types_instead_of_enums = true
date_time = false

[typescript.overrides]
Money = "{ currency: string; amount: number }"
Uuid = "string"
"#;
        let config = Config::parse(content, "dtogen.toml").unwrap();
        assert_eq!(config.filter.resource.as_deref(), Some("DtoResource"));
        assert_eq!(config.output.writer, WriterKind::EntityPerClass);
        assert_eq!(config.output.banner.as_deref(), Some("/* eslint-disable */"));
        assert!(!config.output.collection_response);
        assert!(config.typescript.use_types_instead_of_enums);
        assert!(!config.typescript.date_time);
        let keys: Vec<&str> = config.typescript.overrides.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Money", "Uuid"]);
    }

    #[test]
    fn test_unknown_writer_is_a_parse_error() {
        let err = Config::parse(
            "[input]\nfiles = [\"a.json\"]\n[output]\nwriter = \"zip\"\n",
            "dtogen.toml",
        )
        .unwrap_err();
        assert!(matches!(*err, ConfigError::Parse { span: Some(_), .. }));
    }

    #[test]
    fn test_missing_inputs_are_rejected() {
        let err = Config::parse("[output]\npath = \"out\"\n", "dtogen.toml").unwrap_err();
        assert_eq!(err.to_string(), "[input] files must list at least one pattern");
    }

    #[test]
    fn test_open_resolves_paths_against_config_dir() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("dtogen.toml");
        std::fs::write(&path, "[input]\nfiles = [\"ast/*.json\"]\n").unwrap();

        let config = Config::open(&path).unwrap();
        assert_eq!(config.output_dir(), temp.path().join("generated"));
        assert_eq!(
            config.input_patterns(),
            vec![temp.path().join("ast/*.json").display().to_string()]
        );
    }

    #[test]
    fn test_open_missing_file() {
        let err = Config::open("/nonexistent/dtogen.toml").unwrap_err();
        assert!(matches!(*err, ConfigError::Io { .. }));
    }
}
