//! Length section - checks minimum and recommended length.

use super::{SectionInput, SectionResult};

pub const MIN_LENGTH: usize = 8;
pub const RECOMMENDED_LENGTH: usize = 12;

pub const CONSIDER_LONGER_TIP: &str = "Consider using at least 12 characters for extra security.";

/// Tips on password length.
///
/// # Returns
/// - `Some(tip)` with the exact number of missing characters when shorter than 8
/// - `Some(tip)` suggesting 12+ characters when shorter than 12
/// - `None` otherwise
pub fn length_section(input: &SectionInput<'_>) -> SectionResult {
    if input.length < MIN_LENGTH {
        let missing = MIN_LENGTH - input.length;
        let noun = if missing == 1 { "character" } else { "characters" };
        return Some(format!(
            "Password is too short. Add at least {missing} more {noun}."
        ));
    }
    if input.length < RECOMMENDED_LENGTH {
        return Some(CONSIDER_LONGER_TIP.to_string());
    }
    None
}
