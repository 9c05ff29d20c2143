use std::env;

use crate::ai::config::LlmConfig;
use crate::concept::DEFAULT_BOILERPLATE_PREFIXES;
use crate::utils::DEFAULT_DELETE_AFTER_TIMEOUT;

#[derive(Clone, Debug)]
pub struct Config {
    pub db_url: String,
    pub llm: LlmConfig,
    pub boilerplate_prefixes: Vec<String>,
    pub delete_after_timeout: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let db_url = env::var("DB_URL").unwrap_or_else(|_| "sqlite:concepts.db".to_string());
        let boilerplate_prefixes = match env::var("MENU_BOILERPLATE_PREFIXES") {
            Ok(raw) => parse_prefix_list(&raw),
            Err(_) => DEFAULT_BOILERPLATE_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        };
        let delete_after_timeout = env::var("DELETE_AFTER_TIMEOUT")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_DELETE_AFTER_TIMEOUT);
        Self {
            db_url,
            llm: LlmConfig::from_env(),
            boilerplate_prefixes,
            delete_after_timeout,
        }
    }
}

/// Split a comma-separated prefix list, dropping blank entries.
pub fn parse_prefix_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
