//! Document formats
//!
//! JSON and YAML sources are both normalised into a `serde_json::Value` tree,
//! so downstream code sees one representation regardless of file format.

use crate::document::ConfigDocument;
use crate::error::{ConfigError, ConfigResult};
use serde_json::Value;
use std::path::Path;

/// Supported on-disk formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
}

impl DocumentFormat {
    /// Resolve format from a file extension (without dot)
    pub fn from_extension(ext: &str) -> ConfigResult<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Resolve format from a path's extension
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        Self::from_extension(ext)
    }

    /// Supported extensions (without dot)
    #[must_use]
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Json => &["json"],
            Self::Yaml => &["yaml", "yml"],
        }
    }

    /// Parse source text into a document
    ///
    /// `origin` is used only for error reporting.
    pub fn parse(self, content: &str, origin: &Path) -> ConfigResult<ConfigDocument> {
        let value: Value = match self {
            Self::Json => serde_json::from_str(content).map_err(|e| {
                ConfigError::syntax_error(origin, format!("JSON parse error: {e}"))
            })?,
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| {
                ConfigError::syntax_error(origin, format!("YAML parse error: {e}"))
            })?,
        };

        ConfigDocument::from_value(value).map_err(|_| {
            ConfigError::syntax_error(origin, "document root must be a mapping")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_resolution() {
        assert_eq!(DocumentFormat::from_extension("json").unwrap(), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_extension("YML").unwrap(), DocumentFormat::Yaml);
        assert!(matches!(
            DocumentFormat::from_extension("toml"),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn json_keeps_key_order() {
        let doc = DocumentFormat::Json
            .parse(
                r#"{"timeline_phases": {"z": "1_week", "a": "2_weeks"}}"#,
                Path::new("x.json"),
            )
            .unwrap();
        let phases = doc.string_map("timeline_phases").unwrap().unwrap();
        assert_eq!(phases[0].0, "z");
        assert_eq!(phases[1].0, "a");
    }

    #[test]
    fn yaml_keeps_key_order() {
        let source = "timeline_phases:\n  phase_2: 3_weeks\n  phase_1: 1_week\n";
        let doc = DocumentFormat::Yaml.parse(source, Path::new("x.yaml")).unwrap();
        let phases = doc.string_map("timeline_phases").unwrap().unwrap();
        assert_eq!(phases[0], ("phase_2".to_string(), "3_weeks".to_string()));
    }

    #[test]
    fn syntax_error_names_origin() {
        let err = DocumentFormat::Json
            .parse("{not json", Path::new("industries/bad.json"))
            .unwrap_err();
        assert!(err.to_string().contains("industries/bad.json"));
    }

    #[test]
    fn non_mapping_root_is_rejected() {
        let err = DocumentFormat::Yaml
            .parse("- a\n- b\n", Path::new("list.yaml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Syntax { .. }));
    }
}
