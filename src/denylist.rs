//! Denylist of common passwords.
//!
//! Matching is exact and case-insensitive: `Password` hits `password`,
//! `password!` does not.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Built-in list of well known weak passwords (English and Italian).
pub const DEFAULT_COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "12345678", "qwerty", "abc123", "monkey", "master",
    "dragon", "111111", "baseball", "iloveyou", "trustno1", "sunshine",
    "princess", "admin", "welcome", "shadow", "ashley", "football",
    "jesus", "michael", "ninja", "mustang", "password1", "password123",
    "passw0rd", "letmein", "login", "starwars", "photoshop", "password12",
    "123456789", "1234567890", "qwerty123", "qwertyuiop", "asdfgh",
    "password!", "123abc", "admin123", "root", "toor", "test", "guest",
    "senha", "password1234", "1q2w3e4r", "qazwsx", "p@ssw0rd", "pass",
    "passwort", "passer", "p@ssword", "123qwe", "1qaz2wsx",
    "zaq12wsx", "football123", "soccer", "hockey", "baseball123", "batman",
    "superman", "spiderman", "pokemon", "charlie", "andrew", "joshua",
    "jordan", "matthew", "hunter", "danielle", "amanda", "jessica",
    "taylor", "sophie", "samantha", "nicholas", "joseph", "alexander",
    "emily", "chloe", "olivia", "emma", "sophia", "isabella", "mia",
    "charlotte", "london", "newyork", "america", "europe", "italy",
    "bonjour", "hola", "ciao", "hallo", "hello", "welcome123",
];

static DEFAULT_DENYLIST: LazyLock<Denylist> = LazyLock::new(Denylist::default);

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Immutable set of lowercased common passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    entries: HashSet<String>,
}

impl Default for Denylist {
    fn default() -> Self {
        Denylist::from_entries(DEFAULT_COMMON_PASSWORDS.iter().copied())
    }
}

impl Denylist {
    /// Builds a denylist from arbitrary entries.
    ///
    /// Entries are trimmed and lowercased, blank ones are dropped.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Denylist { entries }
    }

    /// Loads a denylist file with one password per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DenylistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist loading FAILED: FileNotFound {:?}", path);
            return Err(DenylistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist loading FAILED: Empty file {:?}", path);
            return Err(DenylistError::EmptyFile);
        }

        let denylist = Denylist::from_entries(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Denylist loaded: {} passwords from {:?}", denylist.len(), path);

        Ok(denylist)
    }

    /// Case-insensitive exact membership test.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shared, lazily built copy of the built-in denylist.
pub fn default_denylist() -> &'static Denylist {
    &DEFAULT_DENYLIST
}
