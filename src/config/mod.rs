mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::assessment::AssessmentEngine;
use crate::bank::{load_bank, QuestionBank};

/// Get the config directory path (~/.config/attune/)
pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".config").join("attune"))
        .unwrap_or_else(|| PathBuf::from(".attune"))
}

/// Get the default config file path (~/.config/attune/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/attune/config.yaml), and a missing default file yields defaults.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        tracing::debug!("no config at {}, using defaults", config_path.display());
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    if config_content.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

/// Resolve a bank path from the config, expanding a leading `~/`.
fn resolve_bank_path(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir().map(|h| h.join(rest)).unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}

impl Config {
    /// The configured custom bank, or the built-in one.
    pub fn question_bank(&self) -> Result<QuestionBank> {
        match &self.bank {
            Some(path) => load_bank(&resolve_bank_path(path)),
            None => Ok(QuestionBank::builtin().clone()),
        }
    }

    /// Build an engine from this config. Validation is left to the caller.
    pub fn engine(&self) -> Result<AssessmentEngine> {
        Ok(AssessmentEngine::new(
            self.question_bank()?,
            self.scoring.clone().unwrap_or_default(),
            self.routing.clone().unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::AttentionRule;
    use std::io::Write;

    #[test]
    fn test_missing_explicit_config_errors() {
        let result = load_config(Some(PathBuf::from("/nonexistent/attune/config.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "scoring:\n  attention_rule: agree_only").unwrap();

        let config = load_config(Some(file.path().to_path_buf())).unwrap();
        let scoring = config.scoring.unwrap();
        assert_eq!(scoring.attention_rule, AttentionRule::AgreeOnly);
        assert_eq!(scoring.quadrant.secure_max, 45);
        assert!(config.bank.is_none());
        assert!(config.routing.is_none());
    }

    #[test]
    fn test_empty_config_file_is_default() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = load_config(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "queries: []").unwrap();
        assert!(load_config(Some(file.path().to_path_buf())).is_err());
    }

    #[test]
    fn test_engine_uses_custom_bank() {
        let mut bank_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            bank_file,
            "core:\n  - id: ONLY\n    prompt: \"p\"\n    dimension: anxiety\n    options:\n      - {{ text: \"a\", value: 1 }}"
        )
        .unwrap();

        let config = Config {
            bank: Some(bank_file.path().to_path_buf()),
            ..Config::default()
        };
        let engine = config.engine().unwrap();
        assert_eq!(engine.bank().core.len(), 1);
        assert!(engine.bank().goals.is_empty());
    }

    #[test]
    fn test_default_engine_uses_builtin_bank() {
        let engine = Config::default().engine().unwrap();
        assert_eq!(engine.bank(), QuestionBank::builtin());
    }

    #[test]
    fn test_resolve_bank_path_expands_home() {
        let resolved = resolve_bank_path(Path::new("~/bank.yaml"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(resolved, home.join("bank.yaml"));
        }
        assert_eq!(resolve_bank_path(Path::new("/tmp/b.yaml")), PathBuf::from("/tmp/b.yaml"));
    }
}
