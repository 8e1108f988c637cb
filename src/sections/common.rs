//! Common section - warns about denylisted passwords.

use super::{SectionInput, SectionResult};

pub const COMMON_TIP: &str =
    "This is a very common password! Choose a unique one that is hard to guess.";

/// Warns when the password is on the denylist.
pub fn common_section(input: &SectionInput<'_>) -> SectionResult {
    if !input.criteria.is_not_common {
        return Some(COMMON_TIP.to_string());
    }
    None
}
