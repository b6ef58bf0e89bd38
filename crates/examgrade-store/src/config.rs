//! Store path configuration.
//!
//! Folder locations are explicit configuration handed to each store, never
//! process-wide state. Loaded from `examgrade.toml` in the working
//! directory, then `~/.config/examgrade/config.toml`, then built-in
//! defaults; `EXAMGRADE_*_DIR` environment variables override individual
//! paths last.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Directory layout for all persisted artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Exam definition files.
    #[serde(default = "default_exams_dir")]
    pub exams_dir: PathBuf,
    /// Answer key files.
    #[serde(default = "default_answer_keys_dir")]
    pub answer_keys_dir: PathBuf,
    /// Submission records.
    #[serde(default = "default_submissions_dir")]
    pub submissions_dir: PathBuf,
    /// Result artifacts.
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
}

fn default_exams_dir() -> PathBuf {
    PathBuf::from("exams")
}
fn default_answer_keys_dir() -> PathBuf {
    PathBuf::from("answer_keys")
}
fn default_submissions_dir() -> PathBuf {
    PathBuf::from("submissions")
}
fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            exams_dir: default_exams_dir(),
            answer_keys_dir: default_answer_keys_dir(),
            submissions_dir: default_submissions_dir(),
            results_dir: default_results_dir(),
        }
    }
}

/// Load configuration from the default search locations.
pub fn load_config() -> Result<StoreConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<StoreConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("examgrade.toml");
        if local.exists() {
            Some(local)
        } else if let Some(global_dir) = global_config_dir() {
            let global = global_dir.join("config.toml");
            global.exists().then_some(global)
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<StoreConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => StoreConfig::default(),
    };

    // Env overrides win over any file.
    if let Ok(dir) = std::env::var("EXAMGRADE_EXAMS_DIR") {
        config.exams_dir = PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("EXAMGRADE_ANSWER_KEYS_DIR") {
        config.answer_keys_dir = PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("EXAMGRADE_SUBMISSIONS_DIR") {
        config.submissions_dir = PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("EXAMGRADE_RESULTS_DIR") {
        config.results_dir = PathBuf::from(dir);
    }

    Ok(config)
}

fn global_config_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join("examgrade"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let config = StoreConfig::default();
        assert_eq!(config.exams_dir, PathBuf::from("exams"));
        assert_eq!(config.answer_keys_dir, PathBuf::from("answer_keys"));
        assert_eq!(config.submissions_dir, PathBuf::from("submissions"));
        assert_eq!(config.results_dir, PathBuf::from("results"));
    }

    #[test]
    fn parse_partial_config_fills_defaults() {
        let config: StoreConfig = toml::from_str("exams_dir = \"papers\"").unwrap();
        assert_eq!(config.exams_dir, PathBuf::from("papers"));
        assert_eq!(config.submissions_dir, PathBuf::from("submissions"));
    }

    #[test]
    fn explicit_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("examgrade.toml");
        std::fs::write(&path, "submissions_dir = \"inbox\"").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.submissions_dir, PathBuf::from("inbox"));
    }

    #[test]
    fn missing_explicit_config_fails() {
        assert!(load_config_from(Some(Path::new("no_such_config.toml"))).is_err());
    }
}
