//! Password strength checker library
//!
//! Scores a candidate password from 0 to 5, reports which of six criteria
//! it meets, suggests fixes in a stable order and estimates how long a
//! brute-force attack would take.
//!
//! The crack-time estimate is feedback for users only. It assumes an
//! attacker testing 10 billion guesses per second, which is an arbitrary
//! figure and not a security guarantee.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! Read by [`EvaluatorConfig::from_env`]:
//!
//! - `PWD_DENYLIST_PATH`: Denylist file replacing the built-in common passwords
//! - `PWD_GUESSES_PER_SECOND`: Attacker throughput used for crack-time estimates
//!
//! # Example
//!
//! ```rust
//! use pwd_checker::{evaluate, StrengthLabel};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let assessment = evaluate(&password);
//!
//! println!("Score: {}", assessment.score);
//! println!("Strength: {}", assessment.label);
//! println!("Crack time: {}", assessment.crack_time);
//! for tip in &assessment.tips {
//!     println!("- {tip}");
//! }
//! assert_ne!(assessment.label, StrengthLabel::VeryWeak);
//! ```

// Internal modules
mod config;
mod crack_time;
mod denylist;
mod evaluator;
mod sections;
mod types;

// Public API
pub use config::{
    ConfigError, EvaluatorConfig, DEFAULT_SPECIAL_CHARS, DENYLIST_PATH_ENV,
    GUESSES_PER_SECOND_ENV,
};
pub use crack_time::{pool_size, CrackTime, DEFAULT_GUESSES_PER_SECOND};
pub use denylist::{default_denylist, Denylist, DenylistError, DEFAULT_COMMON_PASSWORDS};
pub use evaluator::{evaluate, Evaluator, EMPTY_TIP, REUSE_TIP, STRONG_TIP};
pub use sections::{
    COMMON_TIP, CONSIDER_LONGER_TIP, DIGIT_TIP, LOWERCASE_TIP, SPECIAL_TIP, UPPERCASE_TIP,
};
pub use types::{Assessment, CharClass, CriterionSet, Score, StrengthLabel, MAX_SCORE};

#[cfg(feature = "async")]
pub use evaluator::DEBOUNCE;
