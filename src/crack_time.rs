//! Brute-force crack-time estimate.
//!
//! This is feedback for users, not a security guarantee: the attacker
//! throughput is an arbitrary assumption (a fast, unsalted hash on
//! commodity hardware). Callers that know their hashing scheme should
//! configure [`crate::EvaluatorConfig::with_guesses_per_second`].

use std::fmt;

use crate::types::CriterionSet;

/// Default attacker throughput, in guesses per second.
pub const DEFAULT_GUESSES_PER_SECOND: f64 = 10_000_000_000.0;

const INSTANT_COMBINATIONS: f64 = 1000.0;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3600.0;
const DAY: f64 = 86_400.0;
const MONTH: f64 = 2_592_000.0;
const YEAR: f64 = 31_536_000.0;
const CENTURY: f64 = 3_153_600_000.0;
const HUNDRED_THOUSAND_YEARS: f64 = 3_153_600_000_000.0;
const TEN_BILLION_YEARS: f64 = 3.1536e17;

/// Bucketed crack-time estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrackTime {
    Instant,
    LessThanAMinute,
    Minutes(u64),
    Hours(u64),
    Days(u64),
    Months(u64),
    Years(u64),
    Centuries(u64),
    /// Geological time scales, in years.
    Eons(u64),
    Beyond,
}

/// Number of characters an attacker has to try per position.
pub fn pool_size(criteria: &CriterionSet) -> u32 {
    criteria
        .char_classes()
        .iter()
        .map(|c| c.pool_size())
        .sum::<u32>()
        .max(1)
}

impl CrackTime {
    /// Estimates the expected time to brute force a password of `length`
    /// characters drawn from the pool implied by `criteria`.
    ///
    /// Huge lengths overflow to infinity and land in [`CrackTime::Beyond`].
    pub fn estimate(criteria: &CriterionSet, length: usize, guesses_per_second: f64) -> Self {
        let combinations = (pool_size(criteria) as f64).powf(length as f64);
        if combinations < INSTANT_COMBINATIONS {
            return CrackTime::Instant;
        }
        // Expected case: half the keyspace.
        CrackTime::from_seconds(combinations / (2.0 * guesses_per_second))
    }

    /// Buckets a duration in seconds.
    pub fn from_seconds(seconds: f64) -> Self {
        let per = |unit: f64| (seconds / unit).round() as u64;

        if seconds < MINUTE {
            CrackTime::LessThanAMinute
        } else if seconds < HOUR {
            CrackTime::Minutes(per(MINUTE))
        } else if seconds < DAY {
            CrackTime::Hours(per(HOUR))
        } else if seconds < MONTH {
            CrackTime::Days(per(DAY))
        } else if seconds < YEAR {
            CrackTime::Months(per(MONTH))
        } else if seconds < CENTURY {
            CrackTime::Years(per(YEAR))
        } else if seconds < HUNDRED_THOUSAND_YEARS {
            CrackTime::Centuries(per(CENTURY))
        } else if seconds < TEN_BILLION_YEARS {
            CrackTime::Eons(per(YEAR))
        } else {
            // Also catches infinity and NaN.
            CrackTime::Beyond
        }
    }
}

fn unit(f: &mut fmt::Formatter<'_>, count: u64, singular: &str, plural: &str) -> fmt::Result {
    if count == 1 {
        write!(f, "1 {singular}")
    } else {
        write!(f, "{count} {plural}")
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CrackTime::Instant => f.write_str("Instant"),
            CrackTime::LessThanAMinute => f.write_str("Less than 1 minute"),
            CrackTime::Minutes(n) => unit(f, n, "minute", "minutes"),
            CrackTime::Hours(n) => unit(f, n, "hour", "hours"),
            CrackTime::Days(n) => unit(f, n, "day", "days"),
            CrackTime::Months(n) => unit(f, n, "month", "months"),
            CrackTime::Years(n) => unit(f, n, "year", "years"),
            CrackTime::Centuries(n) => unit(f, n, "century", "centuries"),
            CrackTime::Eons(years) if years >= 1_000_000_000 => {
                write!(f, "{:.1} billion years", years as f64 / 1e9)
            }
            CrackTime::Eons(years) if years >= 1_000_000 => {
                write!(f, "{:.1} million years", years as f64 / 1e6)
            }
            CrackTime::Eons(years) => unit(f, years, "year", "years"),
            CrackTime::Beyond => f.write_str("Millions of years"),
        }
    }
}
