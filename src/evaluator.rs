//! Password strength evaluator - main evaluation logic.

use std::sync::LazyLock;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::EvaluatorConfig;
use crate::crack_time::CrackTime;
use crate::sections::{
    common_section, digit_section, length_section, lowercase_section, special_section,
    uppercase_section, SectionInput, SectionResult, MIN_LENGTH, RECOMMENDED_LENGTH,
};
use crate::types::{Assessment, CriterionSet, Score};

/// Length from which the second half-point length bonus applies.
pub const LONG_LENGTH: usize = 16;

/// Highest score a denylisted password can get.
pub const COMMON_SCORE_CAP: f64 = 1.0;

pub const EMPTY_TIP: &str = "Start typing for personalized feedback.";
pub const STRONG_TIP: &str = "Great job! Your password is very strong.";
pub const REUSE_TIP: &str = "Remember to use a different password for every account.";

/// Delay applied by [`Evaluator::evaluate_tx`] before evaluating.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

static DEFAULT_EVALUATOR: LazyLock<Evaluator> = LazyLock::new(Evaluator::default);

type Section = fn(&SectionInput<'_>) -> SectionResult;

// Tip order is part of the output contract.
const SECTIONS: [(&str, Section); 6] = [
    ("length", length_section),
    ("digit", digit_section),
    ("uppercase", uppercase_section),
    ("lowercase", lowercase_section),
    ("special", special_section),
    ("common", common_section),
];

/// Stateless password evaluator over an immutable configuration.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Evaluator { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluates password strength and returns a detailed assessment.
    ///
    /// Total over every input: empty, non-ASCII and very long passwords
    /// all produce an assessment.
    pub fn evaluate(&self, password: &SecretString) -> Assessment {
        self.evaluate_str(password.expose_secret())
    }

    /// Same as [`Evaluator::evaluate`] for a plain string.
    pub fn evaluate_str(&self, pwd: &str) -> Assessment {
        let length = pwd.encode_utf16().count();
        let criteria = self.criteria(pwd, length);
        let score = score(&criteria, length);

        Assessment {
            score,
            label: score.label(),
            criteria,
            tips: tips(&criteria, length, score),
            crack_time: CrackTime::estimate(&criteria, length, self.config.guesses_per_second()),
            length,
        }
    }

    /// Computes the six criteria. Character classes are ASCII-only.
    pub fn criteria(&self, pwd: &str, length: usize) -> CriterionSet {
        CriterionSet {
            has_min_length: length >= MIN_LENGTH,
            has_digit: pwd.chars().any(|c| c.is_ascii_digit()),
            has_uppercase: pwd.chars().any(|c| c.is_ascii_uppercase()),
            has_lowercase: pwd.chars().any(|c| c.is_ascii_lowercase()),
            has_special_char: pwd.chars().any(|c| self.config.is_special(c)),
            is_not_common: !self.config.denylist().contains(pwd),
        }
    }

    /// Debounced evaluation that sends the assessment via channel.
    ///
    /// Waits [`DEBOUNCE`] first; if `token` is cancelled in the meantime
    /// (the input changed again) nothing is evaluated or sent.
    #[cfg(feature = "async")]
    pub async fn evaluate_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<Assessment>,
    ) {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation is about to start...");

        tokio::select! {
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::debug!("evaluation cancelled before start");
                return;
            }
            _ = tokio::time::sleep(DEBOUNCE) => {}
        }

        let assessment = self.evaluate(password);

        if let Err(_e) = tx.send(assessment).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password assessment: {}", _e);
        }
    }
}

fn score(criteria: &CriterionSet, length: usize) -> Score {
    if length == 0 {
        return Score::default();
    }

    let mut total = criteria.base_count() as f64;

    if length >= RECOMMENDED_LENGTH {
        total += 0.5;
    }
    if length >= LONG_LENGTH {
        total += 0.5;
    }
    if criteria.has_all_classes() {
        total += 0.5;
    }

    if !criteria.is_not_common {
        total = total.min(COMMON_SCORE_CAP);
    }

    // f64::round rounds halves up for positive values.
    Score::new(total.round() as u8)
}

fn tips(criteria: &CriterionSet, length: usize, score: Score) -> Vec<String> {
    if length == 0 {
        return vec![EMPTY_TIP.to_string()];
    }

    let input = SectionInput { length, criteria };
    let mut tips = Vec::new();

    for (_section_name, section_fn) in SECTIONS {
        if let Some(tip) = section_fn(&input) {
            #[cfg(feature = "tracing")]
            tracing::trace!("section {} produced a tip", _section_name);
            tips.push(tip);
        }
    }

    if score.value() >= 4 && tips.is_empty() {
        tips.push(STRONG_TIP.to_string());
        tips.push(REUSE_TIP.to_string());
    }

    tips
}

/// Evaluates a password with the default configuration.
pub fn evaluate(password: &SecretString) -> Assessment {
    DEFAULT_EVALUATOR.evaluate(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::denylist::Denylist;
    use crate::sections::{
        COMMON_TIP, CONSIDER_LONGER_TIP, DIGIT_TIP, SPECIAL_TIP, UPPERCASE_TIP,
    };
    use crate::types::StrengthLabel;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[test]
    fn test_evaluate_empty_password() {
        let assessment = evaluate(&secret(""));

        assert_eq!(assessment.score.value(), 0);
        assert_eq!(assessment.label, StrengthLabel::VeryWeak);
        assert_eq!(assessment.tips, vec![EMPTY_TIP.to_string()]);
        assert_eq!(assessment.crack_time, CrackTime::Instant);
        assert_eq!(assessment.crack_time_estimate(), "Instant");
        assert_eq!(assessment.char_classes_summary(), "-");
    }

    #[test]
    fn test_evaluate_common_password() {
        let assessment = evaluate(&secret("password"));

        assert_eq!(assessment.score.value(), 1);
        assert_eq!(assessment.label, StrengthLabel::Weak);
        assert!(!assessment.criteria.is_not_common);
        assert_eq!(
            assessment.tips,
            vec![
                CONSIDER_LONGER_TIP.to_string(),
                DIGIT_TIP.to_string(),
                UPPERCASE_TIP.to_string(),
                SPECIAL_TIP.to_string(),
                COMMON_TIP.to_string(),
            ]
        );
    }

    #[test]
    fn test_evaluate_short_password_counts_missing() {
        let assessment = evaluate(&secret("aB3$"));

        assert_eq!(
            assessment.tips,
            vec!["Password is too short. Add at least 4 more characters.".to_string()]
        );
    }

    #[test]
    fn test_evaluate_strong_password() {
        let assessment = evaluate(&secret("Tr0ub4dor&3x"));

        assert_eq!(assessment.score.value(), 5);
        assert_eq!(assessment.label, StrengthLabel::VeryStrong);
        assert_eq!(assessment.percentage(), 100);
        assert_eq!(assessment.tips, vec![STRONG_TIP.to_string(), REUSE_TIP.to_string()]);
        assert_eq!(
            assessment.char_classes_summary(),
            "lowercase, uppercase, numbers, special"
        );
    }

    #[test]
    fn test_score_half_points_round_up() {
        // 3 criteria + 0.5 length bonus
        let assessment = evaluate(&secret("abcdefghijkl"));
        assert_eq!(assessment.score.value(), 4);
        assert_eq!(assessment.label, StrengthLabel::Strong);
    }

    #[test]
    fn test_uncommon_password_earns_a_point() {
        let assessment = evaluate(&secret("abcdefgh"));
        assert_eq!(assessment.score.value(), 3);
        assert_eq!(assessment.label, StrengthLabel::Good);

        let assessment = evaluate(&secret("abcdefgH"));
        assert_eq!(assessment.score.value(), 4);
        assert_eq!(assessment.label, StrengthLabel::Strong);

        let assessment = evaluate(&secret("abc"));
        assert_eq!(assessment.score.value(), 2);
        assert_eq!(assessment.label, StrengthLabel::Fair);
    }

    #[test]
    fn test_length_counts_utf16_units() {
        let assessment = evaluate(&secret("🔐🔐🔐🔐"));

        assert_eq!(assessment.length, 8);
        assert!(assessment.criteria.has_min_length);
        assert_eq!(assessment.score.value(), 2);
        assert_eq!(
            assessment.tips.first().map(String::as_str),
            Some(CONSIDER_LONGER_TIP)
        );
    }

    #[test]
    fn test_unicode_letters_are_not_cased() {
        let assessment = evaluate(&secret("ÀÉÎÕÜàéîõü"));

        assert!(!assessment.criteria.has_uppercase);
        assert!(!assessment.criteria.has_lowercase);
        assert_eq!(assessment.length, 10);
        assert!(assessment.criteria.has_min_length);
        assert_eq!(assessment.score.value(), 2);
    }

    #[test]
    fn test_injected_denylist() {
        let config = EvaluatorConfig::default()
            .with_denylist(Denylist::from_entries(["Tr0ub4dor&3x"]));
        let evaluator = Evaluator::new(config);

        let assessment = evaluator.evaluate(&secret("tr0ub4dor&3X"));
        assert_eq!(assessment.score.value(), 1);
        assert_eq!(assessment.tips, vec![COMMON_TIP.to_string()]);

        // default list no longer applies
        assert!(evaluator.evaluate(&secret("password")).criteria.is_not_common);
    }

    #[test]
    fn test_injected_special_chars() {
        let evaluator = Evaluator::new(EvaluatorConfig::default().with_special_chars("€"));

        assert!(evaluator.evaluate_str("abc€").criteria.has_special_char);
        assert!(!evaluator.evaluate_str("abc!").criteria.has_special_char);
    }

    #[test]
    fn test_throughput_changes_estimate() {
        let slow = Evaluator::new(
            EvaluatorConfig::default()
                .with_guesses_per_second(1000.0)
                .unwrap(),
        );
        // 26^8 / 2000 guesses ≈ 3.3 years
        assert_eq!(slow.evaluate_str("qzxjvkwy").crack_time, CrackTime::Years(3));
    }
}

#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_sends_assessment() {
        let evaluator = Evaluator::default();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        evaluator.evaluate_tx(&secret("TestPass123!"), token, tx).await;

        let assessment = rx.recv().await.expect("Should receive assessment");
        assert_eq!(assessment, evaluator.evaluate(&secret("TestPass123!")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_cancelled() {
        let evaluator = Evaluator::default();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        evaluator.evaluate_tx(&secret("TestPass123!"), token, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_cancelled_during_debounce() {
        let evaluator = Evaluator::default();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let canceller = token.clone();

        tokio::spawn(async move {
            tokio::time::sleep(DEBOUNCE / 2).await;
            canceller.cancel();
        });

        evaluator.evaluate_tx(&secret("TestPass123!"), token, tx).await;

        assert!(rx.recv().await.is_none());
    }
}
