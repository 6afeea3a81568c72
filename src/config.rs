//! Runtime configuration resolved from environment variables.

use std::path::PathBuf;

use crate::core::cache::{database_path, default_cache_dir, model_path};

pub const DB_PATH_ENV_VAR: &str = "KICKOFF_KINGS_DB_PATH";
pub const CACHE_DIR_ENV_VAR: &str = "KICKOFF_KINGS_CACHE_DIR";
pub const OPENAI_API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";
pub const OPENAI_MODEL_ENV_VAR: &str = "KICKOFF_KINGS_OPENAI_MODEL";
pub const OPENAI_URL_ENV_VAR: &str = "KICKOFF_KINGS_OPENAI_URL";

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";

/// Settings for the optional chat-completions analyst.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalystConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub cache_dir: PathBuf,
    pub db_path: PathBuf,
    /// `None` when no API key is configured; analysis is then skipped.
    pub analyst: Option<AnalystConfig>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    pub fn from_env() -> Self {
        let cache_dir = non_empty_var(CACHE_DIR_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_cache_dir);
        let db_path = non_empty_var(DB_PATH_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| database_path(&cache_dir));

        let analyst = non_empty_var(OPENAI_API_KEY_ENV_VAR).map(|api_key| AnalystConfig {
            api_key,
            model: non_empty_var(OPENAI_MODEL_ENV_VAR)
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            base_url: non_empty_var(OPENAI_URL_ENV_VAR)
                .unwrap_or_else(|| DEFAULT_OPENAI_URL.to_string()),
        });

        Self {
            cache_dir,
            db_path,
            analyst,
        }
    }

    /// Where `train` writes the model and `--model` defaults to.
    pub fn model_path(&self) -> PathBuf {
        model_path(&self.cache_dir)
    }
}
