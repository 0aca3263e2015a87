//! Password strength scoring
//!
//! A password earns one point per satisfied heuristic (length ≥ 8, mixed
//! case, a digit, a symbol, length ≥ 12). The raw count is folded into a
//! 0–4 score with a fixed label and color per score.

use serde::Serialize;

/// Length that earns the first length point
pub const BASE_LENGTH: usize = 8;
/// Length that earns the extra length point
pub const LONG_LENGTH: usize = 12;

/// Semantic color of the strength indicator, mapped to real colors by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthColor {
    Error,
    Warning,
    WarningDark,
    Success,
    SuccessDark,
}

/// Discrete strength level, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub enum StrengthLevel {
    #[default]
    Poor,
    Weak,
    Normal,
    Good,
    Strong,
}

impl StrengthLevel {
    pub const MAX_SCORE: u8 = 4;

    /// Clamps scores above 4 to `Strong`
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => Self::Poor,
            1 => Self::Weak,
            2 => Self::Normal,
            3 => Self::Good,
            _ => Self::Strong,
        }
    }

    pub fn score(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Weak => "Weak",
            Self::Normal => "Normal",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }

    pub fn color(&self) -> StrengthColor {
        match self {
            Self::Poor => StrengthColor::Error,
            Self::Weak => StrengthColor::Warning,
            Self::Normal => StrengthColor::WarningDark,
            Self::Good => StrengthColor::Success,
            Self::Strong => StrengthColor::SuccessDark,
        }
    }
}

/// Score plus its display pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StrengthResult {
    pub score: u8,
    pub level: StrengthLevel,
}

impl StrengthResult {
    pub fn label(&self) -> &'static str {
        self.level.label()
    }

    pub fn color(&self) -> StrengthColor {
        self.level.color()
    }

    /// Share of the indicator bar to fill; never empty so `Poor` stays visible
    pub fn fraction(&self) -> f64 {
        f64::from(self.score + 1) / f64::from(StrengthLevel::MAX_SCORE + 1)
    }
}

/// Count of satisfied heuristics, 0–5
pub fn criteria_met(password: &str) -> u8 {
    let len = password.chars().count();
    let has_lower = password.chars().any(char::is_lowercase);
    let has_upper = password.chars().any(char::is_uppercase);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_alphanumeric());

    [
        len >= BASE_LENGTH,
        has_lower && has_upper,
        has_digit,
        has_symbol,
        len >= LONG_LENGTH,
    ]
    .into_iter()
    .filter(|met| *met)
    .count() as u8
}

/// Score a password; an empty string is always `Poor`
pub fn evaluate(password: &str) -> StrengthResult {
    // A single satisfied criterion is still Poor.
    let score = criteria_met(password).saturating_sub(1);
    let level = StrengthLevel::from_score(score);
    StrengthResult {
        score: level.score(),
        level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    mod levels {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_table_is_fixed() {
            let table: Vec<_> = (0..=4)
                .map(StrengthLevel::from_score)
                .map(|l| (l.score(), l.label(), l.color()))
                .collect();
            assert_eq!(
                table,
                vec![
                    (0, "Poor", StrengthColor::Error),
                    (1, "Weak", StrengthColor::Warning),
                    (2, "Normal", StrengthColor::WarningDark),
                    (3, "Good", StrengthColor::Success),
                    (4, "Strong", StrengthColor::SuccessDark),
                ]
            );
        }

        #[test]
        fn test_from_score_clamps() {
            assert_eq!(StrengthLevel::from_score(9), StrengthLevel::Strong);
        }

        #[test]
        fn test_levels_are_ordered() {
            assert!(StrengthLevel::Poor < StrengthLevel::Weak);
            assert!(StrengthLevel::Good < StrengthLevel::Strong);
        }
    }

    mod evaluate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_is_weakest() {
            let result = evaluate("");
            assert_eq!(result.score, 0);
            assert_eq!(result.label(), "Poor");
            assert_eq!(result.color(), StrengthColor::Error);
            assert_eq!(result, StrengthResult::default());
        }

        #[test]
        fn test_single_class_is_poor() {
            assert_eq!(evaluate("abc").level, StrengthLevel::Poor);
            assert_eq!(evaluate("123").level, StrengthLevel::Poor);
        }

        #[test]
        fn test_spec_chain_is_non_decreasing() {
            let a = evaluate("abc").score;
            let b = evaluate("abcABC").score;
            let c = evaluate("abcABC1!").score;
            assert!(a <= b && b <= c, "{a} <= {b} <= {c}");
            assert_eq!(c, 3);
        }

        #[test]
        fn test_all_criteria_is_strong() {
            let result = evaluate("Tr0ub4dor&3xyz");
            assert_eq!(criteria_met("Tr0ub4dor&3xyz"), 5);
            assert_eq!(result.level, StrengthLevel::Strong);
            assert_eq!(result.score, 4);
        }

        #[test]
        fn test_length_points() {
            assert_eq!(criteria_met("aaaaaaa"), 0);
            assert_eq!(criteria_met("aaaaaaaa"), 1);
            assert_eq!(criteria_met("aaaaaaaaaaaa"), 2);
        }

        #[test]
        fn test_whitespace_counts_as_symbol() {
            assert_eq!(criteria_met("a b"), 1);
        }

        #[test]
        fn test_fraction_bounds() {
            assert!((evaluate("").fraction() - 0.2).abs() < f64::EPSILON);
            assert!((evaluate("Tr0ub4dor&3xyz").fraction() - 1.0).abs() < f64::EPSILON);
        }
    }

    proptest! {
        #[test]
        fn evaluate_is_deterministic(s in ".{0,40}") {
            prop_assert_eq!(evaluate(&s), evaluate(&s));
        }

        #[test]
        fn score_stays_in_range(s in ".{0,40}") {
            let result = evaluate(&s);
            prop_assert!(result.score <= StrengthLevel::MAX_SCORE);
            prop_assert_eq!(result.level.score(), result.score);
        }

        #[test]
        fn appending_never_lowers_score(s in ".{0,30}", extra in "[a-zA-Z0-9!@#$%^&*]{1,10}") {
            let before = evaluate(&s).score;
            let after = evaluate(&format!("{s}{extra}")).score;
            prop_assert!(after >= before);
        }
    }
}
