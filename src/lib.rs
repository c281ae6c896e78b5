//! Password strength evaluation library
//!
//! Scores a password from 0 to 5 against a fixed rule set and explains every
//! missed rule, and generates random passwords that cover every character
//! class.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DENYLIST_PATH`: Extra denylist file read by [`PasswordPolicy::from_env`]
//!
//! # Example
//!
//! ```rust
//! use securekey_guardian::{evaluate_password_strength, generate_password};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let password = SecretString::new("Kj#9mP$vN2xQ".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//! assert_eq!(evaluation.score, 5);
//! assert!(evaluation.feedback.is_empty());
//!
//! let generated = generate_password(16).expect("16 is long enough");
//! assert_eq!(generated.expose_secret().len(), 16);
//! ```
//!
//! The generator is meant for practice passwords and has not been hardened
//! for protecting real accounts.

mod evaluator;
mod generator;
mod policy;
mod samples;
mod sections;
mod types;

// Public API
pub use evaluator::{evaluate_password_strength, evaluate_with_policy};
pub use generator::{
    DEFAULT_LENGTH, GeneratorError, MIN_GENERATED_LENGTH, generate_password,
    generate_password_with_rng,
};
pub use policy::{
    COMMON_PASSWORDS, CharClass, DENYLIST_PATH_ENV, DenylistError, MIN_LENGTH, PasswordPolicy,
    RECOMMENDED_LENGTH, SPECIAL,
};
pub use samples::{SAMPLE_PASSWORDS, SamplePassword, sample};
pub use sections::{DENYLIST_MESSAGE, Fallback, Predicate, RULES, Rule, RuleEffect, RuleKind};
pub use types::{
    ACHIEVEMENTS, Achievement, AlertLevel, MAX_SCORE, ScoreResult, Strength, score_meter,
};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_password_strength_tx};
