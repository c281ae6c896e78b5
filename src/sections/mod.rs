//! Password evaluation sections
//!
//! Each section analyzes a specific aspect of password strength. The additive
//! rules are listed in [`RULES`] in the order their feedback is reported.

mod denylist;
mod length;
mod pattern;
mod variety;

pub use denylist::{DENYLIST_MESSAGE, denylist_section};

use crate::policy::PasswordPolicy;

/// Test run by a rule against the password's characters.
pub type Predicate = fn(&[char], &PasswordPolicy) -> bool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Length,
    Case,
    Digits,
    Special,
    Repetition,
    SequentialLetters,
    SequentialDigits,
}

/// Lower tier tried when an award rule's main test fails.
#[derive(Debug, Clone, Copy)]
pub struct Fallback {
    pub test: Predicate,
    pub points: i32,
}

#[derive(Debug, Clone, Copy)]
pub enum RuleEffect {
    /// Adds `points` when the test passes, otherwise tries `fallback`,
    /// otherwise reports the message.
    Award {
        points: i32,
        fallback: Option<Fallback>,
    },
    /// Subtracts `points` and reports the message when the test passes.
    Penalty { points: i32 },
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub kind: RuleKind,
    pub test: Predicate,
    pub effect: RuleEffect,
    pub message: &'static str,
}

impl Rule {
    /// Returns the point delta and the feedback message, if any.
    pub fn apply(&self, chars: &[char], policy: &PasswordPolicy) -> (i32, Option<&'static str>) {
        let passed = (self.test)(chars, policy);
        match self.effect {
            RuleEffect::Award { points, .. } if passed => (points, None),
            RuleEffect::Award {
                fallback: Some(fallback),
                ..
            } if (fallback.test)(chars, policy) => (fallback.points, None),
            RuleEffect::Award { .. } => (0, Some(self.message)),
            RuleEffect::Penalty { points } if passed => (-points, Some(self.message)),
            RuleEffect::Penalty { .. } => (0, None),
        }
    }
}

pub static RULES: [Rule; 7] = [
    Rule {
        kind: RuleKind::Length,
        test: length::meets_recommended_length,
        effect: RuleEffect::Award {
            points: 2,
            fallback: Some(Fallback {
                test: length::meets_min_length,
                points: 1,
            }),
        },
        message: length::LENGTH_MESSAGE,
    },
    Rule {
        kind: RuleKind::Case,
        test: variety::has_mixed_case,
        effect: RuleEffect::Award {
            points: 1,
            fallback: None,
        },
        message: variety::CASE_MESSAGE,
    },
    Rule {
        kind: RuleKind::Digits,
        test: variety::has_digit,
        effect: RuleEffect::Award {
            points: 1,
            fallback: None,
        },
        message: variety::DIGIT_MESSAGE,
    },
    Rule {
        kind: RuleKind::Special,
        test: variety::has_special,
        effect: RuleEffect::Award {
            points: 1,
            fallback: None,
        },
        message: variety::SPECIAL_MESSAGE,
    },
    Rule {
        kind: RuleKind::Repetition,
        test: pattern::has_repeated_run,
        effect: RuleEffect::Penalty { points: 1 },
        message: pattern::REPETITION_MESSAGE,
    },
    Rule {
        kind: RuleKind::SequentialLetters,
        test: pattern::has_sequential_letters,
        effect: RuleEffect::Penalty { points: 1 },
        message: pattern::SEQUENTIAL_LETTERS_MESSAGE,
    },
    Rule {
        kind: RuleKind::SequentialDigits,
        test: pattern::has_sequential_digits,
        effect: RuleEffect::Penalty { points: 1 },
        message: pattern::SEQUENTIAL_DIGITS_MESSAGE,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(kind: RuleKind, pwd: &str) -> (i32, Option<&'static str>) {
        let chars: Vec<char> = pwd.chars().collect();
        let rule = RULES.iter().find(|r| r.kind == kind).expect("rule present");
        rule.apply(&chars, PasswordPolicy::builtin())
    }

    #[test]
    fn test_rule_order() {
        let kinds: Vec<RuleKind> = RULES.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RuleKind::Length,
                RuleKind::Case,
                RuleKind::Digits,
                RuleKind::Special,
                RuleKind::Repetition,
                RuleKind::SequentialLetters,
                RuleKind::SequentialDigits,
            ]
        );
    }

    #[test]
    fn test_length_tiers() {
        assert_eq!(apply(RuleKind::Length, "abcdefghijkl"), (2, None));
        assert_eq!(apply(RuleKind::Length, "abcdefgh"), (1, None));
        assert_eq!(apply(RuleKind::Length, "abcdefghijk"), (1, None));
        assert_eq!(
            apply(RuleKind::Length, "abcdefg"),
            (0, Some(length::LENGTH_MESSAGE))
        );
    }

    #[test]
    fn test_award_without_fallback() {
        assert_eq!(apply(RuleKind::Digits, "abc1"), (1, None));
        assert_eq!(
            apply(RuleKind::Digits, "abc"),
            (0, Some(variety::DIGIT_MESSAGE))
        );
    }

    #[test]
    fn test_penalty() {
        assert_eq!(
            apply(RuleKind::Repetition, "xxx"),
            (-1, Some(pattern::REPETITION_MESSAGE))
        );
        assert_eq!(apply(RuleKind::Repetition, "xx"), (0, None));
    }
}
