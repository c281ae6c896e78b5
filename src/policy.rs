//! Password policy
//!
//! Holds the thresholds, character-class alphabets and the denylist that both
//! the evaluator and the generator work from.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Environment variable naming an extra denylist file.
pub const DENYLIST_PATH_ENV: &str = "PWD_DENYLIST_PATH";

pub const MIN_LENGTH: usize = 8;
pub const RECOMMENDED_LENGTH: usize = 12;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!@#$%^&*";

/// Passwords rejected outright, compared against the lowercased input.
pub const COMMON_PASSWORDS: [&str; 10] = [
    "password",
    "password123",
    "123456",
    "qwerty",
    "admin",
    "letmein",
    "welcome",
    "monkey",
    "abc123",
    "111111",
];

static BUILTIN: LazyLock<PasswordPolicy> = LazyLock::new(PasswordPolicy::default);

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// The four character classes every strong password must cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharClass {
    /// All classes, in the order the generator draws its mandatory characters.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Special,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Special => SPECIAL.contains(c),
        }
    }
}

/// Static configuration shared by evaluation and generation.
///
/// A policy never changes after construction. Use [`PasswordPolicy::builtin`]
/// for the stock rules, or [`PasswordPolicy::from_env`] to extend the
/// denylist from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
    recommended_length: usize,
    denylist: HashSet<String>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: MIN_LENGTH,
            recommended_length: RECOMMENDED_LENGTH,
            denylist: COMMON_PASSWORDS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl PasswordPolicy {
    /// Returns the process-wide built-in policy.
    pub fn builtin() -> &'static PasswordPolicy {
        &BUILTIN
    }

    /// Builds the built-in policy, extended with the file named by
    /// `PWD_DENYLIST_PATH` when that variable is set.
    ///
    /// # Errors
    ///
    /// Same as [`PasswordPolicy::with_denylist_file`].
    pub fn from_env() -> Result<Self, DenylistError> {
        match denylist_path_from_env() {
            Some(path) => Self::with_denylist_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Builds the built-in policy with extra denylist entries read from `path`.
    ///
    /// The file holds one password per line. Entries are trimmed and
    /// lowercased, blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn with_denylist_file<P: AsRef<Path>>(path: P) -> Result<Self, DenylistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: FileNotFound {:?}", path);
            return Err(DenylistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: Empty file {:?}", path);
            return Err(DenylistError::EmptyFile);
        }

        let mut policy = Self::default();
        policy.denylist.extend(
            content
                .lines()
                .map(|l| l.trim().to_lowercase())
                .filter(|l| !l.is_empty()),
        );

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Denylist loaded: {} passwords from {:?}",
            policy.denylist.len(),
            path
        );

        Ok(policy)
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn recommended_length(&self) -> usize {
        self.recommended_length
    }

    pub fn denylist_len(&self) -> usize {
        self.denylist.len()
    }

    /// Case-insensitive exact match against the denylist.
    pub fn is_denylisted(&self, password: &str) -> bool {
        self.denylist.contains(&password.to_lowercase())
    }

    /// Every class alphabet concatenated, in [`CharClass::ALL`] order.
    pub fn full_alphabet(&self) -> String {
        CharClass::ALL.iter().map(|c| c.alphabet()).collect()
    }
}

fn denylist_path_from_env() -> Option<PathBuf> {
    std::env::var_os(DENYLIST_PATH_ENV).map(PathBuf::from)
}
