//! Shell configuration from environment variables.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `NOTEBOOK_LOG_LEVEL` | `trace|debug|info|warn|error` (others warn) | build-mode default |
//! | `NOTEBOOK_LOG_DIR` | absolute directory for rolling logs | unset: no file logging |

use notebook_core::{default_log_level, parse_log_level};

pub const LOG_LEVEL_VAR: &str = "NOTEBOOK_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "NOTEBOOK_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Canonical level name; an unsupported value falls back to the default.
    pub log_level: String,
    /// File logging stays off when `None`.
    pub log_dir: Option<String>,
    /// Problems found while reading the environment, for the caller to report.
    pub warnings: Vec<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            warnings: Vec::new(),
        }
    }
}

impl ShellConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to
    /// honor a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(level) = non_blank(LOG_LEVEL_VAR) {
            match parse_log_level(&level) {
                Ok(canonical) => config.log_level = canonical.to_string(),
                Err(err) => config.warnings.push(format!("{LOG_LEVEL_VAR}: {err}")),
            }
        }
        config.log_dir = non_blank(LOG_DIR_VAR);
        config
    }
}
