//! Navigator configuration loading from `.navrc.toml`.
//!
//! Configuration is optional. Without a config file the navigator reads
//! `campus.dot` from the working directory and prints tables.
//!
//! # Example Configuration
//!
//! ```toml
//! [graph]
//! file = "maps/campus.dot"
//!
//! [output]
//! format = "table"
//! color = true
//! compact = false
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = ".navrc.toml";

/// Graph file used when neither `--graph` nor `[graph].file` is given.
pub const DEFAULT_GRAPH_FILE: &str = "campus.dot";

/// Root configuration structure loaded from `.navrc.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct NavConfig {
    /// Where the campus map lives.
    #[serde(default)]
    pub graph: GraphSettings,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Graph source settings.
#[derive(Debug, Deserialize, Default)]
pub struct GraphSettings {
    /// Path to the DOT file, relative to the config file's directory.
    #[serde(default)]
    pub file: Option<String>,
}

/// Output formatting preferences.
///
/// Command-line flags (e.g., `--format json`) override these settings.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Default output format: `table`, `json` or `html`.
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output. Auto-detected from the TTY when unset.
    #[serde(default)]
    pub color: Option<bool>,

    /// Single-line JSON and borderless tables.
    #[serde(default)]
    pub compact: bool,
}

impl NavConfig {
    /// Load configuration from `.navrc.toml` in the given directory.
    ///
    /// A missing file yields defaults. An unreadable or malformed file is
    /// logged as a warning and also yields defaults.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Resolve the graph file: explicit flag, then config, then `campus.dot`.
    pub fn graph_file(&self, root: &Path, cli_override: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_override {
            return path.to_path_buf();
        }
        let file = self.graph.file.as_deref().unwrap_or(DEFAULT_GRAPH_FILE);
        root.join(file)
    }

    /// Get the default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Returns the configured color preference, or `None` for auto-detection.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }

    pub fn compact(&self) -> bool {
        self.output.compact
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = NavConfig::default();
        assert!(config.graph.file.is_none());
        assert!(config.output.format.is_none());
        assert!(config.use_color().is_none());
        assert!(!config.compact());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[graph]
file = "maps/campus.dot"

[output]
format = "json"
color = false
compact = true
"#;
        let config: NavConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.graph.file.as_deref(), Some("maps/campus.dot"));
        assert_eq!(config.default_format(), Some("json"));
        assert_eq!(config.use_color(), Some(false));
        assert!(config.compact());
    }

    #[test]
    fn test_graph_file_precedence() {
        let root = Path::new("/srv/nav");
        let config: NavConfig = toml::from_str("[graph]\nfile = \"east.dot\"").unwrap();

        assert_eq!(
            config.graph_file(root, Some(Path::new("west.dot"))),
            PathBuf::from("west.dot")
        );
        assert_eq!(config.graph_file(root, None), root.join("east.dot"));
        assert_eq!(
            NavConfig::default().graph_file(root, None),
            root.join(DEFAULT_GRAPH_FILE)
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = NavConfig::load(dir.path());
        assert!(config.graph.file.is_none());
    }

    #[test]
    fn test_load_malformed_file_falls_back() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[graph\nfile = ").unwrap();
        let config = NavConfig::load(dir.path());
        assert!(config.graph.file.is_none());
        assert!(config.default_format().is_none());
    }

    #[test]
    fn test_load_from_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[output]\nformat = \"html\"\n",
        )
        .unwrap();
        let config = NavConfig::load(dir.path());
        assert_eq!(config.default_format(), Some("html"));
    }
}
