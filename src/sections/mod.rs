//! Password evaluation sections
//!
//! Each section inspects one aspect of the password and may produce a
//! remediation tip.

mod common;
mod length;
mod variety;

pub use common::{common_section, COMMON_TIP};
pub use length::{length_section, CONSIDER_LONGER_TIP, MIN_LENGTH, RECOMMENDED_LENGTH};
pub use variety::{
    digit_section, lowercase_section, special_section, uppercase_section, DIGIT_TIP,
    LOWERCASE_TIP, SPECIAL_TIP, UPPERCASE_TIP,
};

use crate::types::CriterionSet;

/// Result type for section functions.
/// - `Some(tip)` - Section failed, with the tip to show
/// - `None` - Section passed
pub type SectionResult = Option<String>;

/// What a section sees of the password.
pub struct SectionInput<'a> {
    pub length: usize,
    pub criteria: &'a CriterionSet,
}
