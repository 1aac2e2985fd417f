//! # Board Configuration
//!
//! Controls the document wrapped around a board's drawing commands and where
//! the generated `.tex` file is written.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::Config;

/// Document and output settings for a [`Board`](crate::scene::Board)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// LaTeX document class
    pub document_class: String,
    /// Packages loaded in the preamble, in order
    pub packages: Vec<String>,
    /// Options passed to the `tikzpicture` environment
    pub picture_options: Vec<String>,
    /// Directory the document is written to
    pub output_dir: PathBuf,
    /// File name of the document, without extension
    pub file_stem: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            document_class: "standalone".to_string(),
            packages: vec!["tikz".to_string()],
            picture_options: Vec::new(),
            output_dir: PathBuf::from("output"),
            file_stem: "board".to_string(),
        }
    }
}

impl Config for BoardConfig {}

impl BoardConfig {
    /// Set the document class
    pub fn with_document_class(mut self, class: impl Into<String>) -> Self {
        self.document_class = class.into();
        self
    }

    /// Add a package to the preamble
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.packages.push(package.into());
        self
    }

    /// Add a `tikzpicture` option such as `scale=2`
    pub fn with_picture_option(mut self, option: impl Into<String>) -> Self {
        self.picture_options.push(option.into());
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the output file stem
    pub fn with_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = stem.into();
        self
    }

    /// Full path of the generated document
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.tex", self.file_stem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.document_class, "standalone");
        assert_eq!(config.packages, vec!["tikz".to_string()]);
        assert_eq!(config.output_path(), PathBuf::from("output").join("board.tex"));
    }

    #[test]
    fn test_builder_setters() {
        let config = BoardConfig::default()
            .with_package("amsmath")
            .with_picture_option("scale=2")
            .with_output_dir("build")
            .with_file_stem("pulley");

        assert_eq!(config.packages, vec!["tikz".to_string(), "amsmath".to_string()]);
        assert_eq!(config.picture_options, vec!["scale=2".to_string()]);
        assert_eq!(config.output_path(), PathBuf::from("build").join("pulley.tex"));
    }

    #[test]
    fn test_toml_and_ron_roundtrip() {
        let dir = std::env::temp_dir();
        let config = BoardConfig::default().with_file_stem("roundtrip");

        let toml_path = dir.join(format!("tikz_engine_config_{}.toml", std::process::id()));
        let toml_path = toml_path.to_string_lossy().to_string();
        config.save_to_file(&toml_path).unwrap();
        assert_eq!(BoardConfig::load_from_file(&toml_path).unwrap(), config);
        std::fs::remove_file(&toml_path).unwrap();

        let ron_path = dir.join(format!("tikz_engine_config_{}.ron", std::process::id()));
        let ron_path = ron_path.to_string_lossy().to_string();
        config.save_to_file(&ron_path).unwrap();
        assert_eq!(BoardConfig::load_from_file(&ron_path).unwrap(), config);
        std::fs::remove_file(&ron_path).unwrap();
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: BoardConfig = toml::from_str("file_stem = \"angles\"").unwrap();
        assert_eq!(config.file_stem, "angles");
        assert_eq!(config.document_class, "standalone");
    }

    #[test]
    fn test_unsupported_format() {
        let result = BoardConfig::load_from_file("board.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_)) | Err(ConfigError::UnsupportedFormat(_))));
        let result = BoardConfig::default().save_to_file("board.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
