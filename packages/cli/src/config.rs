use pagecraft_compiler_html::CompileOptions as HtmlOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "pagecraft.config.json";

/// Pagecraft configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding saved projects
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,

    /// Export output directory
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Undo levels kept while editing (0 = unlimited)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    #[serde(default)]
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlConfig {
    #[serde(default = "default_true")]
    pub pretty: bool,

    #[serde(default)]
    pub use_classes: bool,

    #[serde(default)]
    pub skip_hidden: bool,

    #[serde(default = "default_title")]
    pub title: String,
}

fn default_storage_dir() -> String {
    ".pagecraft".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_history_limit() -> usize {
    pagecraft_editor::DEFAULT_MAX_LEVELS
}

fn default_true() -> bool {
    true
}

fn default_title() -> String {
    "Generated Page".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn get_storage_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.storage_dir)
    }

    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }

    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions {
            use_classes: self.html.use_classes,
            inline_styles: !self.html.use_classes,
            skip_hidden: self.html.skip_hidden,
            title: self.html.title.clone(),
            pretty: self.html.pretty,
            ..HtmlOptions::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            out_dir: default_out_dir(),
            history_limit: default_history_limit(),
            html: HtmlConfig::default(),
        }
    }
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            use_classes: false,
            skip_hidden: false,
            title: default_title(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "storageDir": "projects",
            "outDir": "public",
            "historyLimit": 10,
            "html": { "useClasses": true, "title": "Shop" }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.storage_dir, "projects");
        assert_eq!(config.out_dir, "public");
        assert_eq!(config.history_limit, 10);
        assert!(config.html.use_classes);
        assert!(config.html.pretty);
        assert_eq!(config.html.title, "Shop");

        let options = config.html_options();
        assert!(options.use_classes);
        assert!(!options.inline_styles);
    }

    #[test]
    fn test_default_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.storage_dir, ".pagecraft");
        assert_eq!(config.out_dir, "dist");
        assert_eq!(config.history_limit, 50);
        assert_eq!(config.html.title, "Generated Page");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(config, Config::default());
    }
}
