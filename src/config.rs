//! Evaluator configuration.
//!
//! Defaults reproduce the documented rule tables. The denylist and the
//! attacker throughput can be overridden from the environment.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::crack_time::DEFAULT_GUESSES_PER_SECOND;
use crate::denylist::{default_denylist, Denylist, DenylistError};

/// Characters counted as "special".
pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?`~";

/// Path of a denylist file replacing the built-in list.
pub const DENYLIST_PATH_ENV: &str = "PWD_DENYLIST_PATH";

/// Attacker throughput override, in guesses per second.
pub const GUESSES_PER_SECOND_ENV: &str = "PWD_GUESSES_PER_SECOND";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Denylist(#[from] DenylistError),
    #[error("Invalid guesses per second: {0}")]
    InvalidThroughput(String),
}

#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    special_chars: Vec<char>,
    denylist: Arc<Denylist>,
    guesses_per_second: f64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        EvaluatorConfig {
            special_chars: DEFAULT_SPECIAL_CHARS.chars().collect(),
            denylist: Arc::new(default_denylist().clone()),
            guesses_per_second: DEFAULT_GUESSES_PER_SECOND,
        }
    }
}

impl EvaluatorConfig {
    /// Builds a configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_DENYLIST_PATH`: denylist file, one password per line
    /// - `PWD_GUESSES_PER_SECOND`: positive attacker throughput
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = EvaluatorConfig::default();

        if let Ok(path) = std::env::var(DENYLIST_PATH_ENV) {
            let denylist = Denylist::from_path(PathBuf::from(path))?;
            config = config.with_denylist(denylist);
        }

        if let Ok(raw) = std::env::var(GUESSES_PER_SECOND_ENV) {
            let guesses = raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidThroughput(raw.clone()))?;
            config = config.with_guesses_per_second(guesses)?;
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Evaluator config loaded: {} denylist entries, {} guesses/s",
            config.denylist.len(),
            config.guesses_per_second
        );

        Ok(config)
    }

    pub fn with_denylist(mut self, denylist: Denylist) -> Self {
        self.denylist = Arc::new(denylist);
        self
    }

    pub fn with_special_chars(mut self, special_chars: &str) -> Self {
        self.special_chars = special_chars.chars().collect();
        self
    }

    /// Sets the attacker throughput. Must be finite and positive.
    pub fn with_guesses_per_second(mut self, guesses: f64) -> Result<Self, ConfigError> {
        if !guesses.is_finite() || guesses <= 0.0 {
            return Err(ConfigError::InvalidThroughput(guesses.to_string()));
        }
        self.guesses_per_second = guesses;
        Ok(self)
    }

    pub fn special_chars(&self) -> &[char] {
        &self.special_chars
    }

    pub fn is_special(&self, c: char) -> bool {
        self.special_chars.contains(&c)
    }

    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    pub fn guesses_per_second(&self) -> f64 {
        self.guesses_per_second
    }
}
