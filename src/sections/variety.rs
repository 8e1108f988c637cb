//! Character variety sections - one per character class.

use super::{SectionInput, SectionResult};

pub const DIGIT_TIP: &str = "Add some numbers to increase complexity.";
pub const UPPERCASE_TIP: &str = "Include uppercase letters to make the password stronger.";
pub const LOWERCASE_TIP: &str = "Use lowercase letters in your password.";
pub const SPECIAL_TIP: &str = "Include special characters like !@#$% to increase security.";

fn tip_unless(passed: bool, tip: &str) -> SectionResult {
    (!passed).then(|| tip.to_string())
}

pub fn digit_section(input: &SectionInput<'_>) -> SectionResult {
    tip_unless(input.criteria.has_digit, DIGIT_TIP)
}

pub fn uppercase_section(input: &SectionInput<'_>) -> SectionResult {
    tip_unless(input.criteria.has_uppercase, UPPERCASE_TIP)
}

pub fn lowercase_section(input: &SectionInput<'_>) -> SectionResult {
    tip_unless(input.criteria.has_lowercase, LOWERCASE_TIP)
}

pub fn special_section(input: &SectionInput<'_>) -> SectionResult {
    tip_unless(input.criteria.has_special_char, SPECIAL_TIP)
}
