//! Environment-backed configuration.
//!
//! All settings come from the process environment, after the binary has
//! loaded `.env`. The API credential is the only required value; everything
//! else has a default.

/// Default path of the file-backed store.
pub const DEFAULT_DB_PATH: &str = "arithmix.db";

/// Startup error when no API credential is present.
pub const MISSING_API_KEY: &str = "API_KEY not found. Please check your .env file.";

#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer credential for the Groq API. `GROQ_API_KEY`, with `API_KEY`
    /// accepted as a legacy spelling.
    pub api_key: Option<String>,
    /// Model override (`GROQ_MODEL`).
    pub model: Option<String>,
    /// Endpoint override (`GROQ_BASE_URL`).
    pub base_url: Option<String>,
    /// Path of the SQLite file (`ARITHMIX_DB`).
    pub db_path: String,
    /// When set (`ARITHMIX_TESTING`), use an in-memory store instead of the
    /// file at `db_path`.
    pub in_memory: bool,
    /// One-shot instruction (`ARITHMIX_INSTRUCTION`); skips the interactive
    /// loop when no instruction is given on the command line.
    pub instruction: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_key: env_non_empty("GROQ_API_KEY").or_else(|| env_non_empty("API_KEY")),
            model: env_non_empty("GROQ_MODEL"),
            base_url: env_non_empty("GROQ_BASE_URL"),
            db_path: env_non_empty("ARITHMIX_DB").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            in_memory: env_non_empty("ARITHMIX_TESTING").is_some(),
            instruction: env_non_empty("ARITHMIX_INSTRUCTION"),
        }
    }

    /// The bearer credential, or the fatal startup error. Required even for
    /// local-only runs.
    pub fn require_api_key(&self) -> Result<String, String> {
        self.api_key.clone().ok_or_else(|| MISSING_API_KEY.to_string())
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, MISSING_API_KEY};

    #[test]
    fn missing_credential_yields_the_startup_error() {
        let config = Config {
            api_key: None,
            model: None,
            base_url: None,
            db_path: "arithmix.db".to_string(),
            in_memory: false,
            instruction: None,
        };
        assert_eq!(config.require_api_key(), Err(MISSING_API_KEY.to_string()));
    }

    #[test]
    fn present_credential_is_returned() {
        let config = Config {
            api_key: Some("gsk_test".to_string()),
            model: None,
            base_url: None,
            db_path: "arithmix.db".to_string(),
            in_memory: false,
            instruction: None,
        };
        assert_eq!(config.require_api_key(), Ok("gsk_test".to_string()));
    }

    // `from_env` reads fixed process-global variables; exercising it here
    // would race parallel tests in the same process.
}
