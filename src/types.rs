//! Assessment types produced by the evaluator.

use std::fmt;

use crate::crack_time::CrackTime;

/// Highest score an assessment can reach.
pub const MAX_SCORE: u8 = 5;

/// A character class recognised by the checker.
///
/// Classes are ASCII-only: accented letters are neither upper nor lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Numbers,
    Special,
}

impl CharClass {
    /// Number of distinct characters a brute-force attacker assumes for this class.
    pub const fn pool_size(self) -> u32 {
        match self {
            CharClass::Lowercase | CharClass::Uppercase => 26,
            CharClass::Numbers => 10,
            CharClass::Special => 32,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Numbers => "numbers",
            CharClass::Special => "special",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The six boolean checks evaluated against one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CriterionSet {
    pub has_min_length: bool,
    pub has_digit: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_special_char: bool,
    pub is_not_common: bool,
}

impl CriterionSet {
    /// Passed character classes, always in the order
    /// lowercase, uppercase, numbers, special.
    pub fn char_classes(&self) -> Vec<CharClass> {
        [
            (self.has_lowercase, CharClass::Lowercase),
            (self.has_uppercase, CharClass::Uppercase),
            (self.has_digit, CharClass::Numbers),
            (self.has_special_char, CharClass::Special),
        ]
        .into_iter()
        .filter_map(|(passed, class)| passed.then_some(class))
        .collect()
    }

    /// True when digit, uppercase, lowercase and special all pass.
    pub fn has_all_classes(&self) -> bool {
        self.has_digit && self.has_uppercase && self.has_lowercase && self.has_special_char
    }

    /// Count of passed criteria, `0..=6`.
    pub fn base_count(&self) -> u8 {
        [
            self.has_min_length,
            self.has_digit,
            self.has_uppercase,
            self.has_lowercase,
            self.has_special_char,
            self.is_not_common,
        ]
        .iter()
        .filter(|&&b| b)
        .count() as u8
    }
}

/// Password score in `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(u8);

impl Score {
    /// Builds a score, clamping anything above [`MAX_SCORE`].
    pub fn new(value: u8) -> Self {
        Score(value.min(MAX_SCORE))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> StrengthLabel {
        StrengthLabel::from_score(*self)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human label mapped 1:1 from a [`Score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

const LABELS: [StrengthLabel; 6] = [
    StrengthLabel::VeryWeak,
    StrengthLabel::Weak,
    StrengthLabel::Fair,
    StrengthLabel::Good,
    StrengthLabel::Strong,
    StrengthLabel::VeryStrong,
];

impl StrengthLabel {
    pub fn from_score(score: Score) -> Self {
        LABELS[score.value() as usize]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating one password.
///
/// Built fresh on every call and meant to be rendered right away.
/// It never holds the password itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub score: Score,
    pub label: StrengthLabel,
    pub criteria: CriterionSet,
    pub tips: Vec<String>,
    pub crack_time: CrackTime,
    /// Password length in UTF-16 code units, so a character outside the
    /// Basic Multilingual Plane (most emoji) counts as 2.
    pub length: usize,
}

impl Assessment {
    /// Strength-bar width in percent.
    pub fn percentage(&self) -> u8 {
        self.score.value() * (100 / MAX_SCORE)
    }

    pub fn char_classes(&self) -> Vec<CharClass> {
        self.criteria.char_classes()
    }

    /// Comma separated class names, or `-` when none matched.
    pub fn char_classes_summary(&self) -> String {
        let classes = self.char_classes();
        if classes.is_empty() {
            return "-".to_string();
        }
        classes
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn crack_time_estimate(&self) -> String {
        self.crack_time.to_string()
    }
}
