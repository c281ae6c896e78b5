//! Evaluation result and the ratings derived from its score.

/// Highest score the additive rules can award.
pub const MAX_SCORE: u32 = 5;

/// Outcome of a single evaluation.
///
/// `feedback` lists one message per failed rule, in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: u32,
    pub feedback: Vec<String>,
}

impl ScoreResult {
    pub fn strength(&self) -> Strength {
        Strength::from_score(self.score)
    }

    pub fn achievement(&self) -> &'static Achievement {
        Achievement::for_score(self.score)
    }

    /// Fill ratio for a progress bar, in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        (self.score as f32 / MAX_SCORE as f32).min(1.0)
    }

    pub fn is_perfect(&self) -> bool {
        self.score >= MAX_SCORE
    }

    /// No suggestions left and a strong score.
    pub fn meets_all_criteria(&self) -> bool {
        self.feedback.is_empty() && self.score >= 4
    }

    pub fn meter(&self) -> String {
        score_meter(self.score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=2 => Strength::Weak,
            3 => Strength::Moderate,
            _ => Strength::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "❌ Weak Password",
            Strength::Moderate => "⚠️ Moderate Password",
            Strength::Strong => "✅ Strong Password",
        }
    }

    pub fn crack_time_hint(self) -> &'static str {
        match self {
            Strength::Weak => "⚠️ This password could be cracked quickly!",
            Strength::Moderate => "⏳ This password might take a few hours to crack.",
            Strength::Strong => "🔒 This password would take a very long time to crack!",
        }
    }
}

/// How a caller should present an achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub min_score: u32,
    pub message: &'static str,
    pub level: AlertLevel,
    pub celebrate: bool,
}

/// Highest threshold first; the first tier the score reaches wins.
pub static ACHIEVEMENTS: [Achievement; 4] = [
    Achievement {
        min_score: 5,
        message: "🏆 MASTER PASSWORD CREATOR!",
        level: AlertLevel::Success,
        celebrate: true,
    },
    Achievement {
        min_score: 4,
        message: "🥇 EXPERT PASSWORD SMITH!",
        level: AlertLevel::Success,
        celebrate: false,
    },
    Achievement {
        min_score: 3,
        message: "🥈 SKILLED PASSWORD APPRENTICE!",
        level: AlertLevel::Warning,
        celebrate: false,
    },
    Achievement {
        min_score: 0,
        message: "🎯 Keep practicing! You'll get there!",
        level: AlertLevel::Error,
        celebrate: false,
    },
];

impl Achievement {
    pub fn for_score(score: u32) -> &'static Achievement {
        ACHIEVEMENTS
            .iter()
            .find(|tier| score >= tier.min_score)
            .unwrap_or(&ACHIEVEMENTS[ACHIEVEMENTS.len() - 1])
    }
}

/// One lock per point, one empty circle per missing point.
pub fn score_meter(score: u32) -> String {
    let filled = score.min(MAX_SCORE) as usize;
    format!(
        "{}{}",
        "🔒".repeat(filled),
        "⭕".repeat(MAX_SCORE as usize - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(score: u32, feedback: &[&str]) -> ScoreResult {
        ScoreResult {
            score,
            feedback: feedback.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_strength_boundaries() {
        assert_eq!(Strength::from_score(0), Strength::Weak);
        assert_eq!(Strength::from_score(2), Strength::Weak);
        assert_eq!(Strength::from_score(3), Strength::Moderate);
        assert_eq!(Strength::from_score(4), Strength::Strong);
        assert_eq!(Strength::from_score(5), Strength::Strong);
    }

    #[test]
    fn test_achievement_tiers() {
        assert!(Achievement::for_score(5).celebrate);
        assert_eq!(Achievement::for_score(5).min_score, 5);
        assert_eq!(Achievement::for_score(4).message, "🥇 EXPERT PASSWORD SMITH!");
        assert_eq!(Achievement::for_score(3).level, AlertLevel::Warning);
        assert_eq!(Achievement::for_score(2).level, AlertLevel::Error);
        assert_eq!(Achievement::for_score(0).min_score, 0);
    }

    #[test]
    fn test_achievement_tiers_descending() {
        assert!(ACHIEVEMENTS.windows(2).all(|w| w[0].min_score > w[1].min_score));
    }

    #[test]
    fn test_score_meter() {
        assert_eq!(score_meter(0), "⭕⭕⭕⭕⭕");
        assert_eq!(score_meter(3), "🔒🔒🔒⭕⭕");
        assert_eq!(score_meter(9), "🔒🔒🔒🔒🔒");
    }

    #[test]
    fn test_score_result_helpers() {
        let perfect = result(5, &[]);
        assert!(perfect.is_perfect());
        assert!(perfect.meets_all_criteria());
        assert_eq!(perfect.progress(), 1.0);

        let strong_with_notes = result(4, &["❌ Add at least one number (0-9)."]);
        assert!(!strong_with_notes.is_perfect());
        assert!(!strong_with_notes.meets_all_criteria());
        assert_eq!(strong_with_notes.strength(), Strength::Strong);

        let empty = result(0, &[]);
        assert_eq!(empty.progress(), 0.0);
        assert_eq!(empty.meter(), "⭕⭕⭕⭕⭕");
    }
}
