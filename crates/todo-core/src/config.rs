use crate::{TodoError, TodoResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_COMPLETION_MARKER: &str = "✅ ";
pub const DEFAULT_TITLE: &str = "📋 Task List";
pub const DEFAULT_WIDTH: u16 = 56;
pub const DEFAULT_HEIGHT: u16 = 22;
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 400;

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 12;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub completion_marker: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub width: Option<u16>,
    #[serde(default)]
    pub height: Option<u16>,
    #[serde(default)]
    pub double_click_ms: Option<u64>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/todo/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("todo/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("todo\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Loads the config from `path`, or from the platform config location when
    /// `path` is `None`. A missing or malformed file yields the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path.map(Path::to_path_buf).or_else(Self::config_path) {
            Some(path) => path,
            None => return Self::default(),
        };

        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> TodoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> TodoResult<Self> {
        toml::from_str(content).map_err(|e| TodoError::Config(e.to_string()))
    }

    pub fn with_completion_marker(mut self, marker: Option<String>) -> Self {
        if marker.is_some() {
            self.completion_marker = marker;
        }
        self
    }

    /// An empty marker would make done and open tasks indistinguishable.
    pub fn effective_completion_marker(&self) -> &str {
        match self.completion_marker.as_deref() {
            Some(marker) if !marker.is_empty() => marker,
            _ => DEFAULT_COMPLETION_MARKER,
        }
    }

    pub fn effective_title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn effective_size(&self) -> (u16, u16) {
        (
            self.width.unwrap_or(DEFAULT_WIDTH).max(MIN_WIDTH),
            self.height.unwrap_or(DEFAULT_HEIGHT).max(MIN_HEIGHT),
        )
    }

    pub fn effective_double_click_ms(&self) -> u64 {
        self.double_click_ms.unwrap_or(DEFAULT_DOUBLE_CLICK_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.effective_completion_marker(), "✅ ");
        assert_eq!(config.effective_title(), DEFAULT_TITLE);
        assert_eq!(config.effective_size(), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
        assert_eq!(config.effective_double_click_ms(), 400);
    }

    #[test]
    fn test_parse_partial_file() {
        let config = AppConfig::parse("completion_marker = \"[x] \"\nwidth = 70\n").unwrap();
        assert_eq!(config.effective_completion_marker(), "[x] ");
        assert_eq!(config.effective_size(), (70, DEFAULT_HEIGHT));
    }

    #[test]
    fn test_parse_rejects_bad_types() {
        let err = AppConfig::parse("width = \"wide\"").unwrap_err();
        assert!(matches!(err, TodoError::Config(_)));
    }

    #[test]
    fn test_empty_marker_falls_back() {
        let config = AppConfig::default().with_completion_marker(Some(String::new()));
        assert_eq!(config.effective_completion_marker(), DEFAULT_COMPLETION_MARKER);
    }

    #[test]
    fn test_marker_override_keeps_file_value_when_absent() {
        let config = AppConfig {
            completion_marker: Some("* ".to_string()),
            ..Default::default()
        };
        let config = config.with_completion_marker(None);
        assert_eq!(config.effective_completion_marker(), "* ");
    }

    #[test]
    fn test_size_is_clamped_to_minimum() {
        let config = AppConfig::parse("width = 10\nheight = 3\n").unwrap();
        assert_eq!(config.effective_size(), (MIN_WIDTH, MIN_HEIGHT));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title = \"Groceries\"").unwrap();
        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config.effective_title(), "Groceries");
    }

    #[test]
    fn test_load_malformed_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is not toml [").unwrap();
        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(Some(&dir.path().join("absent.toml")));
        assert_eq!(config, AppConfig::default());
    }
}
