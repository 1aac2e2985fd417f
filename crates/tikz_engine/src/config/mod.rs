//! Configuration system
//!
//! Board configuration can live in TOML or RON files; the format is picked
//! from the file extension before the file is touched.

mod board;

pub use board::BoardConfig;
pub use serde::{Deserialize, Serialize};

use std::path::Path;

/// On-disk configuration formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl ConfigFormat {
    /// Format named by the path's extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration trait
///
/// Anything serde can round-trip and that has sensible defaults can be
/// stored as a config file.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a `.toml` or `.ron` file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;

        let parsed: Result<Self, String> = match format {
            ConfigFormat::Toml => toml::from_str(&contents).map_err(|e| e.to_string()),
            ConfigFormat::Ron => ron::from_str(&contents).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| ConfigError::Parse(format!("{}: {message}", path.display())))
    }

    /// Save configuration to a `.toml` or `.ron` file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| e.to_string()),
            ConfigFormat::Ron => {
                ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                    .map_err(|e| e.to_string())
            }
        }
        .map_err(ConfigError::Serialize)?;

        std::fs::write(path, contents)?;
        log::debug!("Saved configuration to {}", path.display());
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error, prefixed with the file it came from
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Extension other than `.toml` or `.ron`
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a/board.toml")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("board.ron")).unwrap(), ConfigFormat::Ron);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("board")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_parse_error_names_file() {
        let path = std::env::temp_dir().join(format!("tikz_engine_bad_{}.toml", std::process::id()));
        std::fs::write(&path, "packages = 3").unwrap();

        let result = BoardConfig::load_from_file(&path);
        std::fs::remove_file(&path).unwrap();
        match result {
            Err(ConfigError::Parse(message)) => assert!(message.contains("tikz_engine_bad_")),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }
}
